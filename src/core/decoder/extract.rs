// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operand extraction
//!
//! Turns a matched (opcode, format) pair into an [`Instruction`]: runs the
//! normalizer, attaches format-specific completers and carves the operand
//! fields out of the syllable. Operand positions follow the assembler order,
//! destinations first.

use super::normalize::normalize;
use super::opcode::{DecodeOp, Opcode};
use super::types::{
    CompleterClass as CC, CompleterType as CT, Format, Instruction, OperandKind as Kind,
};
use crate::core::bits::{combine, extend, field, fragmented, Fragment};

/// Compare and store data register, implicit operand of 16-byte accesses
pub const AR_CSD: u64 = 25;

/// Compare value register used by the compare-and-exchange family
pub const AR_CCV: u64 = 32;

/// Previous function state register written by `alloc`
pub const AR_PFS: u64 = 64;

/// Position of the first source operand for a format
///
/// Two-destination formats start their sources one later than the default
/// of 2, formats without a destination one earlier. `ld16` names AR.CSD as a
/// second destination, which also shifts its sources.
pub fn src_index(format: Format, opcode: Opcode) -> usize {
    use Format::*;

    match format {
        A6 | A7 | A8 | F4 | F5 | F6 | F7 | I16 | I17 | I30 | M11 | M12 => 3,
        M1 if opcode == Opcode::Ld16 => 3,
        B6 | B7 | F12 | I20 | M14 | M15 | M20 | M21 | M22 | M23 | M40 | M45 => 1,
        _ => 2,
    }
}

/// Instruction under construction
struct Builder {
    inst: Instruction,
    bits: u64,
}

impl Builder {
    fn completer(&mut self, class: CC, ty: CT) {
        self.inst.push_completer(class, ty);
    }

    /// Register-like operand taken straight from a field
    fn reg(&mut self, index: usize, kind: Kind, offset: u32, len: u32) {
        self.inst.set_operand(index, kind, field(self.bits, offset, len));
    }

    /// Operand whose kind is implied and whose value stays zero
    fn kind(&mut self, index: usize, kind: Kind) {
        self.inst.set_kind(index, kind);
    }

    fn imm(&mut self, index: usize, value: u64) {
        self.inst.set_operand(index, Kind::Imm, value);
    }

    fn u_imm(&mut self, index: usize, offset: u32, len: u32) {
        self.imm(index, extend(self.bits, offset, len, false));
    }

    fn s_imm(&mut self, index: usize, offset: u32, len: u32) {
        self.imm(index, extend(self.bits, offset, len, true));
    }

    fn u_immf(&mut self, index: usize, fragments: &[Fragment]) {
        self.imm(index, fragmented(self.bits, false, fragments));
    }

    fn s_immf(&mut self, index: usize, fragments: &[Fragment]) {
        self.imm(index, fragmented(self.bits, true, fragments));
    }

    /// Branch displacement, scaled from bundles to bytes
    fn disp(&mut self, index: usize, fragments: &[Fragment]) {
        let value = fragmented(self.bits, true, fragments) << 4;
        self.inst.set_operand(index, Kind::Disp, value);
    }

    fn value_mut(&mut self, index: usize) -> &mut u64 {
        self.inst.value_mut(index)
    }

    /// Locality hint of loads, stores and `lfetch` (bits 28..29)
    fn hint(&mut self, class: CC) {
        let ty = match field(self.bits, 28, 2) {
            0 => CT::None,
            1 => CT::Nt1,
            2 => CT::Nt2,
            _ => CT::Nta,
        };
        self.completer(class, ty);
    }

    /// Floating-point status field selector (bits 34..35)
    fn sf(&mut self) {
        let ty = match field(self.bits, 34, 2) {
            0 => CT::S0,
            1 => CT::S1,
            2 => CT::S2,
            _ => CT::S3,
        };
        self.completer(CC::Sf, ty);
    }

    /// Branch whether, prefetch and cache deallocation hints
    fn brhint(&mut self) {
        let bwh = match field(self.bits, 33, 2) {
            0 => CT::Sptk,
            1 => CT::Spnt,
            2 => CT::Dptk,
            _ => CT::Dpnt,
        };
        self.completer(CC::Bwh, bwh);

        let ph = if field(self.bits, 12, 1) != 0 {
            CT::Many
        } else {
            CT::Few
        };
        self.completer(CC::Ph, ph);

        let dh = if field(self.bits, 35, 1) != 0 {
            CT::Clr
        } else {
            CT::None
        };
        self.completer(CC::Dh, dh);
    }

    /// Hints of the branch predict instructions
    fn brphint(&mut self) {
        let ipwh = match field(self.bits, 3, 2) {
            0 => CT::Sptk,
            1 => CT::Loop,
            2 => CT::Dptk,
            _ => CT::Exit,
        };
        self.completer(CC::Ipwh, ipwh);

        let ph = if field(self.bits, 5, 1) != 0 {
            CT::Many
        } else {
            CT::Few
        };
        self.completer(CC::Ph, ph);

        let pvec = match field(self.bits, 0, 3) {
            0 => CT::DcDc,
            1 => CT::DcNt,
            2 => CT::TkDc,
            3 => CT::TkTk,
            4 => CT::TkNt,
            5 => CT::NtDc,
            6 => CT::NtTk,
            _ => CT::NtNt,
        };
        self.completer(CC::Pvec, pvec);

        let ih = if field(self.bits, 35, 1) != 0 {
            CT::Imp
        } else {
            CT::None
        };
        self.completer(CC::Ih, ih);
    }
}

/// Build the record for one matched syllable
///
/// # Arguments
///
/// * `op` - Decode-level opcode from the unit matcher
/// * `format` - Operand format from the unit matcher
/// * `bits` - Raw 41-bit syllable
/// * `paired` - Raw bits of the L slot; required by the X formats
///
/// # Returns
///
/// `None` if a reserved field is non-zero, or an X format is missing its
/// paired syllable.
pub fn extract(
    op: DecodeOp,
    format: Format,
    bits: u64,
    paired: Option<u64>,
) -> Option<Instruction> {
    use Format::*;

    let n = normalize(op);
    let src = src_index(format, n.opcode);
    let ot = n.hint;

    let mut b = Builder {
        inst: Instruction::new(bits, format, n.opcode, src),
        bits,
    };
    for &(class, ty) in n.completers {
        b.completer(class, ty);
    }

    if format != B6 && format != B7 {
        b.reg(0, Kind::Preg, 0, 6);
    }

    match format {
        A1 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
            let x2b = field(bits, 27, 2);
            if (op == DecodeOp::Add && x2b == 1) || (op == DecodeOp::Sub && x2b == 0) {
                b.imm(4, 1);
            }
        }
        A2 | A10 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.imm(3, 1 + field(bits, 27, 2));
            b.reg(4, Kind::Greg, 20, 7);
        }
        A3 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.s_immf(2, &[(13, 7), (36, 1)]);
            b.reg(3, Kind::Greg, 20, 7);
        }
        A4 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.s_immf(2, &[(13, 7), (27, 6), (36, 1)]);
            b.reg(3, Kind::Greg, 20, 7);
        }
        A5 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.s_immf(2, &[(13, 7), (27, 9), (22, 5), (36, 1)]);
            b.reg(3, Kind::Greg, 20, 2);
        }
        A6 | A7 => {
            if format == A7 && field(bits, 13, 7) != 0 {
                return None;
            }
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Greg, 13, 7);
            b.reg(4, Kind::Greg, 20, 7);
        }
        A8 => {
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.s_immf(3, &[(13, 7), (36, 1)]);
            b.reg(4, Kind::Greg, 20, 7);
        }
        A9 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
        }

        B1 | B2 => {
            if format == B2 && field(bits, 0, 6) != 0 {
                return None;
            }
            b.brhint();
            b.disp(1, &[(13, 20), (36, 1)]);
        }
        B3 => {
            b.brhint();
            b.reg(1, Kind::Breg, 6, 3);
            b.disp(2, &[(13, 20), (36, 1)]);
        }
        B4 => {
            b.brhint();
            b.reg(1, Kind::Breg, 13, 3);
        }
        B5 => {
            // Bit 32 is left unchecked; whether B5 reserves it is unresolved.
            b.brhint();
            b.reg(1, Kind::Breg, 6, 3);
            b.reg(2, Kind::Breg, 13, 3);
        }
        B6 => {
            b.brphint();
            b.disp(1, &[(13, 20), (36, 1)]);
            b.disp(2, &[(6, 7), (33, 2)]);
        }
        B7 => {
            b.brphint();
            b.reg(1, Kind::Breg, 13, 3);
            b.disp(2, &[(6, 7), (33, 2)]);
        }
        B8 => {}
        B9 => b.u_immf(1, &[(6, 20), (36, 1)]),

        F1 | F2 | F3 => {
            if format == F1 {
                b.sf();
            }
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Freg, 13, 7);
            b.reg(3, Kind::Freg, 20, 7);
            b.reg(4, Kind::Freg, 27, 7);
        }
        F4 => {
            let ra = field(bits, 33, 1) != 0;
            let rb = field(bits, 36, 1) != 0;
            let frel = match (ra, rb) {
                (true, true) => CT::Unord,
                (true, false) => CT::Le,
                (false, true) => CT::Lt,
                (false, false) => CT::Eq,
            };
            b.completer(CC::Frel, frel);
            let fctype = if field(bits, 12, 1) != 0 {
                CT::Unc
            } else {
                CT::None
            };
            b.completer(CC::Fctype, fctype);
            b.sf();
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Freg, 13, 7);
            b.reg(4, Kind::Freg, 20, 7);
        }
        F5 => {
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Freg, 13, 7);
            b.u_immf(4, &[(33, 2), (20, 7)]);
        }
        F6 => {
            b.sf();
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Freg, 13, 7);
            b.reg(4, Kind::Freg, 20, 7);
        }
        F7 => {
            b.sf();
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Freg, 20, 7);
        }
        F8 | F9 => {
            if format == F8 {
                b.sf();
            }
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Freg, 13, 7);
            b.reg(3, Kind::Freg, 20, 7);
        }
        F10 | F11 => {
            if format == F10 {
                b.sf();
            }
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Freg, 13, 7);
        }
        F12 => {
            b.sf();
            b.u_imm(1, 13, 7);
            b.u_imm(2, 20, 7);
        }
        F13 => b.sf(),
        F14 => {
            b.sf();
            b.disp(1, &[(6, 20), (36, 1)]);
        }
        F15 | F16 => b.u_imm(1, 6, 20),

        I1 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
            let count = match field(bits, 30, 2) {
                0 => 0,
                1 => 7,
                2 => 15,
                _ => 16,
            };
            b.imm(4, count);
        }
        I2 | I7 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
        }
        I3 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.u_imm(3, 20, 4);
        }
        I4 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.u_imm(3, 20, 8);
        }
        I5 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
            b.reg(3, Kind::Greg, 13, 7);
        }
        I6 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
            b.u_imm(3, 14, 5);
        }
        I8 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.imm(3, 31 - field(bits, 20, 5));
        }
        I9 => {
            if field(bits, 13, 7) != 0 {
                return None;
            }
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
        }
        I10 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
            b.u_imm(4, 27, 6);
        }
        I11 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
            b.u_imm(3, 14, 6);
            b.imm(4, 1 + field(bits, 27, 6));
        }
        I12 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.imm(3, 63 - field(bits, 20, 6));
            b.imm(4, 1 + field(bits, 27, 6));
        }
        I13 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.s_immf(2, &[(13, 7), (36, 1)]);
            b.imm(3, 63 - field(bits, 20, 6));
            b.imm(4, 1 + field(bits, 27, 6));
        }
        I14 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.s_imm(2, 36, 1);
            b.reg(3, Kind::Greg, 20, 7);
            b.imm(4, 63 - field(bits, 14, 6));
            b.imm(5, 1 + field(bits, 27, 6));
        }
        I15 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.reg(3, Kind::Greg, 20, 7);
            b.imm(4, 63 - field(bits, 31, 6));
            b.imm(5, 1 + field(bits, 27, 4));
        }
        I16 | I17 => {
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.reg(3, Kind::Greg, 20, 7);
            if format == I16 {
                b.u_imm(4, 14, 6);
            }
        }
        I18 | I19 => b.u_immf(1, &[(6, 20), (36, 1)]),
        I20 => {
            b.reg(1, Kind::Greg, 13, 7);
            b.disp(2, &[(6, 7), (20, 13), (36, 1)]);
        }
        I21 => {
            let mwh = match field(bits, 20, 2) {
                0 => CT::Sptk,
                1 => CT::None,
                2 => CT::Dptk,
                _ => return None,
            };
            b.completer(CC::Mwh, mwh);
            let ih = if field(bits, 23, 1) != 0 {
                CT::Imp
            } else {
                CT::None
            };
            b.completer(CC::Ih, ih);
            b.reg(1, Kind::Breg, 6, 3);
            b.reg(2, Kind::Greg, 13, 7);
            b.disp(3, &[(24, 9)]);
        }
        I22 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Breg, 13, 3);
        }
        I23 => {
            b.kind(1, Kind::Pr);
            b.reg(2, Kind::Greg, 13, 7);
            b.u_immf(3, &[(6, 7), (24, 8), (36, 1)]);
            *b.value_mut(3) <<= 1;
        }
        I24 => {
            b.kind(1, Kind::PrRot);
            b.s_immf(2, &[(6, 27), (36, 1)]);
        }
        I25 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.kind(2, ot);
        }
        I26 => {
            b.reg(1, Kind::Areg, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        I27 => {
            b.reg(1, Kind::Areg, 20, 7);
            b.s_immf(2, &[(13, 7), (36, 1)]);
        }
        I28 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Areg, 20, 7);
        }
        I29 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
        }
        I30 => {
            b.reg(1, Kind::Preg, 6, 6);
            b.reg(2, Kind::Preg, 27, 6);
            b.imm(3, 32 + field(bits, 14, 5));
        }

        M1 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Greg, 6, 7);
            if n.opcode == Opcode::Ld16 {
                b.inst.set_operand(2, Kind::Areg, AR_CSD);
            }
            b.reg(src, Kind::Mem, 20, 7);
        }
        M2 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            b.reg(3, Kind::Greg, 13, 7);
        }
        M3 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            b.s_immf(3, &[(13, 7), (27, 1), (36, 1)]);
        }
        M4 => {
            b.hint(CC::Sthint);
            b.reg(1, Kind::Mem, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
            if n.opcode == Opcode::St16 {
                b.inst.set_operand(3, Kind::Areg, AR_CSD);
            }
        }
        M5 => {
            b.hint(CC::Sthint);
            b.reg(1, Kind::Mem, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
            b.s_immf(3, &[(6, 7), (27, 1), (36, 1)]);
        }
        M6 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
        }
        M7 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            b.reg(3, Kind::Greg, 13, 7);
        }
        M8 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            b.s_immf(3, &[(13, 7), (27, 1), (36, 1)]);
        }
        M9 => {
            b.hint(CC::Sthint);
            b.reg(1, Kind::Mem, 20, 7);
            b.reg(2, Kind::Freg, 13, 7);
        }
        M10 => {
            b.hint(CC::Sthint);
            b.reg(1, Kind::Mem, 20, 7);
            b.reg(2, Kind::Freg, 13, 7);
            b.s_immf(3, &[(6, 7), (27, 1), (36, 1)]);
        }
        M11 | M12 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Freg, 13, 7);
            b.reg(3, Kind::Mem, 20, 7);
            if format == M12 {
                b.imm(4, 8 << field(bits, 30, 1));
            }
        }
        M13 => {
            b.hint(CC::Lfhint);
            b.reg(1, Kind::Mem, 20, 7);
        }
        M14 => {
            b.hint(CC::Lfhint);
            b.reg(1, Kind::Mem, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M15 => {
            b.hint(CC::Lfhint);
            b.reg(1, Kind::Mem, 20, 7);
            b.s_immf(2, &[(13, 7), (27, 1), (36, 1)]);
        }
        M16 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            b.reg(3, Kind::Greg, 13, 7);
            if n.opcode == Opcode::Cmp8xchg16 {
                b.inst.set_operand(4, Kind::Areg, AR_CSD);
                b.inst.set_operand(5, Kind::Areg, AR_CCV);
            } else if field(bits, 30, 6) < 8 {
                b.inst.set_operand(4, Kind::Areg, AR_CCV);
            }
        }
        M17 => {
            b.hint(CC::Ldhint);
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Mem, 20, 7);
            let inc: u64 = match field(bits, 13, 2) {
                0 => 16,
                1 => 8,
                2 => 4,
                _ => 1,
            };
            let inc = if field(bits, 15, 1) != 0 {
                inc.wrapping_neg()
            } else {
                inc
            };
            b.imm(3, inc);
        }
        M18 => {
            b.reg(1, Kind::Freg, 6, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M19 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Freg, 13, 7);
        }
        M20 | M21 => {
            let kind = if format == M20 { Kind::Greg } else { Kind::Freg };
            b.reg(1, kind, 13, 7);
            b.disp(2, &[(6, 7), (20, 13), (36, 1)]);
        }
        M22 | M23 => {
            let kind = if format == M22 { Kind::Greg } else { Kind::Freg };
            b.reg(1, kind, 6, 7);
            b.disp(2, &[(13, 20), (36, 1)]);
        }
        M24 => {}
        M25 => {
            if field(bits, 0, 6) != 0 {
                return None;
            }
        }
        M26 => b.reg(1, Kind::Greg, 6, 7),
        M27 => b.reg(1, Kind::Freg, 6, 7),
        M28 | M47 => b.reg(1, Kind::Greg, 20, 7),
        M29 => {
            b.reg(1, Kind::Areg, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M30 => {
            b.reg(1, Kind::Areg, 20, 7);
            b.s_immf(2, &[(13, 7), (36, 1)]);
        }
        M31 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Areg, 20, 7);
        }
        M32 => {
            b.reg(1, Kind::Creg, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M33 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Creg, 20, 7);
        }
        M34 => {
            let locals = field(bits, 20, 7);
            let outputs = field(bits, 13, 7).wrapping_sub(locals);
            b.reg(1, Kind::Greg, 6, 7);
            b.inst.set_operand(2, Kind::Areg, AR_PFS);
            b.imm(3, 0);
            b.imm(4, locals);
            b.imm(5, outputs);
            b.imm(6, field(bits, 27, 4) << 3);
        }
        M35 => {
            let kind = if field(bits, 27, 6) == 0x2D {
                Kind::PsrL
            } else {
                Kind::PsrUm
            };
            b.kind(1, kind);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M36 => {
            b.reg(1, Kind::Greg, 6, 7);
            let kind = if field(bits, 27, 6) == 0x25 {
                Kind::Psr
            } else {
                Kind::PsrUm
            };
            b.kind(2, kind);
        }
        M37 | M48 => b.u_immf(1, &[(6, 20), (36, 1)]),
        M38 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
            b.reg(3, Kind::Greg, 13, 7);
        }
        M39 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
            b.u_imm(3, 13, 2);
        }
        M40 => {
            b.reg(1, Kind::Greg, 20, 7);
            b.u_imm(2, 13, 2);
        }
        M41 => b.reg(1, Kind::Greg, 13, 7),
        M42 => {
            b.reg(1, ot, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M43 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, ot, 20, 7);
        }
        M44 => b.u_immf(1, &[(6, 21), (31, 2), (36, 1)]),
        M45 => {
            b.reg(1, Kind::Greg, 20, 7);
            b.reg(2, Kind::Greg, 13, 7);
        }
        M46 => {
            b.reg(1, Kind::Greg, 6, 7);
            b.reg(2, Kind::Greg, 20, 7);
        }

        X1 | X5 => {
            let long = paired?;
            b.u_immf(1, &[(6, 20), (36, 1)]);
            let value = b.value_mut(1);
            *value = combine(*value, 21, long, 41, 0);
        }
        X2 => {
            let long = paired?;
            b.reg(1, Kind::Greg, 6, 7);
            b.u_immf(2, &[(13, 7), (27, 9), (22, 5), (21, 1)]);
            let value = b.value_mut(2);
            *value = combine(*value, 22, long, 41, 0);
            *value = combine(*value, 63, bits, 1, 36);
        }
        X3 | X4 => {
            let long = paired?;
            b.brhint();
            let index = if format == X4 {
                b.reg(1, Kind::Breg, 6, 3);
                2
            } else {
                1
            };
            b.u_imm(index, 13, 20);
            let value = b.value_mut(index);
            *value = combine(*value, 20, long, 39, 2);
            *value = combine(*value, 59, bits, 1, 36);
            *value <<= 4;
            b.kind(index, Kind::Disp);
        }
    }

    Some(b.inst)
}
