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

use super::super::*;
use super::{at, major, pack};

/// Run the unit matcher and operand extraction on one syllable
fn slot(unit: Unit, bits: u64) -> Option<Instruction> {
    let (op, format) = units::decode(unit, bits)?;
    extract(op, format, bits, None)
}

fn completer_types(inst: &Instruction) -> Vec<CompleterType> {
    inst.completers().iter().map(|c| c.ty).collect()
}

fn imm(value: u64) -> Operand {
    Operand::new(OperandKind::Imm, value)
}

fn greg(index: u64) -> Operand {
    Operand::new(OperandKind::Greg, index)
}

/// addl r1 = imm22, r3
fn addl(r1: u64, imm22: u64, r3: u64) -> u64 {
    major(9)
        | at(r1, 6)
        | at(imm22 & 0x7F, 13)
        | at(r3, 20)
        | at((imm22 >> 16) & 0x1F, 22)
        | at((imm22 >> 7) & 0x1FF, 27)
        | at((imm22 >> 21) & 1, 36)
}

/// movl r1 = imm64 as (L syllable, X syllable)
fn movl(r1: u64, imm64: u64) -> (u64, u64) {
    let long = (imm64 >> 22) & ((1 << 41) - 1);
    let x = major(6)
        | at(r1, 6)
        | at(imm64 & 0x7F, 13)
        | at((imm64 >> 21) & 1, 21)
        | at((imm64 >> 16) & 0x1F, 22)
        | at((imm64 >> 7) & 0x1FF, 27)
        | at(imm64 >> 63, 36);
    (long, x)
}

#[test]
fn test_a5_fragment_order() {
    // Each fragment alone lands at its own position in the immediate
    let cases = [
        (at(1, 13), 0x1),
        (at(1, 27), 0x80),
        (at(1, 22), 0x10000),
    ];
    for (bits, expected) in cases {
        let inst = slot(Unit::I, major(9) | bits).unwrap();
        assert_eq!(inst.operand(2), Some(&imm(expected)));
    }
}

#[test]
fn test_a5_immediates() {
    let inst = slot(Unit::M, addl(5, 0x12345, 3)).unwrap();
    assert_eq!(inst.opcode(), Some(Opcode::Addl));
    assert_eq!(inst.format(), Some(Format::A5));
    assert_eq!(inst.operand(1), Some(&greg(5)));
    assert_eq!(inst.operand(2).unwrap().signed(), 0x12345);
    assert_eq!(inst.operand(3), Some(&greg(3)));
    assert_eq!(inst.src_index(), 2);

    let negative = slot(Unit::I, addl(1, (-2i64 as u64) & 0x3F_FFFF, 2)).unwrap();
    assert_eq!(negative.operand(2).unwrap().signed(), -2);

    let sign_only = slot(Unit::I, major(9) | at(1, 36)).unwrap();
    assert_eq!(sign_only.operand(2).unwrap().signed(), -(1 << 21));
}

#[test]
fn test_b1_displacement_is_scaled() {
    let forward = slot(Unit::B, major(4) | at(5, 13)).unwrap();
    assert_eq!(forward.opcode(), Some(Opcode::Br));
    assert_eq!(forward.format(), Some(Format::B1));
    assert_eq!(forward.operand(1), Some(&Operand::new(OperandKind::Disp, 80)));

    let backward = slot(Unit::B, major(4) | at(0xF_FFFF, 13) | at(1, 36)).unwrap();
    assert_eq!(backward.operand(1).unwrap().signed(), -16);
}

#[test]
fn test_branch_hint_completers() {
    // br.cond.dpnt.many.clr
    let inst = slot(Unit::B, major(4) | at(3, 33) | at(1, 12) | at(1, 35)).unwrap();
    assert_eq!(
        completer_types(&inst),
        vec![
            CompleterType::Cond,
            CompleterType::Dpnt,
            CompleterType::Many,
            CompleterType::Clr
        ]
    );
}

#[test]
fn test_b6_has_no_predicate() {
    let inst = slot(Unit::B, major(7) | at(2, 13) | at(3, 6)).unwrap();
    assert_eq!(inst.opcode(), Some(Opcode::Brp));
    assert_eq!(inst.format(), Some(Format::B6));
    assert!(inst.operand(0).unwrap().is_none());
    assert_eq!(inst.src_index(), 1);
    assert_eq!(inst.operand(1).unwrap().value, 32);
    assert_eq!(inst.operand(2).unwrap().value, 48);
}

#[test]
fn test_x2_movl_reconstruction() {
    for value in [0x1234_5678_9ABC_DEF0u64, u64::MAX, 1 << 22, 1 << 63, 0] {
        let (long, x) = movl(8, value);
        let bundle = Bundle::from_raw(pack(0x04, [0, long, x])).unwrap();
        let inst = &bundle.slots()[2];

        assert_eq!(inst.format(), Some(Format::X2));
        assert_eq!(inst.operand(1), Some(&greg(8)));
        assert_eq!(inst.operand(2), Some(&imm(value)), "movl 0x{:x}", value);
    }
}

#[test]
fn test_x_format_needs_paired_syllable() {
    let (_, x) = movl(1, 0);
    assert!(extract(DecodeOp::Movl, Format::X2, x, None).is_none());
    assert!(extract(DecodeOp::Movl, Format::X2, x, Some(0)).is_some());
}

#[test]
fn test_x3_long_branch() {
    // brl.cond with imm20b = 1 and the sign bit from the X syllable
    let bundle = Bundle::from_raw(pack(0x04, [0, 0, major(0xC) | at(1, 13)])).unwrap();
    assert_eq!(bundle.slots()[2].opcode(), Some(Opcode::Brl));
    assert_eq!(
        bundle.slots()[2].operand(1),
        Some(&Operand::new(OperandKind::Disp, 16))
    );

    let back = Bundle::from_raw(pack(0x04, [0, 0, major(0xC) | at(1, 36)])).unwrap();
    assert!(back.slots()[2].operand(1).unwrap().signed() < 0);
}

#[test]
fn test_m34_alloc() {
    // alloc r34 = ar.pfs, 0, 3, 1, 16
    let bits = major(1) | at(6, 33) | at(34, 6) | at(4, 13) | at(3, 20) | at(2, 27);
    let inst = slot(Unit::M, bits).unwrap();

    assert_eq!(inst.opcode(), Some(Opcode::Alloc));
    assert_eq!(
        &inst.operands()[1..],
        &[
            greg(34),
            Operand::new(OperandKind::Areg, AR_PFS),
            imm(0),
            imm(3),
            imm(1),
            imm(16),
        ]
    );
}

#[test]
fn test_m17_fetchadd_increment() {
    let base = major(4) | at(1, 27) | at(0x12, 30) | at(4, 6) | at(5, 20);

    let plus = slot(Unit::M, base | at(1, 13)).unwrap();
    assert_eq!(plus.opcode(), Some(Opcode::Fetchadd4));
    assert_eq!(plus.operand(2), Some(&Operand::new(OperandKind::Mem, 5)));
    assert_eq!(plus.operand(3), Some(&imm(8)));
    assert_eq!(
        completer_types(&plus),
        vec![CompleterType::Acq, CompleterType::None]
    );

    let minus = slot(Unit::M, base | at(1, 13) | at(1, 15)).unwrap();
    assert_eq!(minus.operand(3).unwrap().signed(), -8);

    let sixteen = slot(Unit::M, base).unwrap();
    assert_eq!(sixteen.operand(3), Some(&imm(16)));
}

#[test]
fn test_m16_implicit_application_registers() {
    let base = major(4) | at(1, 27) | at(1, 6) | at(2, 20) | at(3, 13);
    let ccv = Operand::new(OperandKind::Areg, AR_CCV);
    let csd = Operand::new(OperandKind::Areg, AR_CSD);

    let cmpxchg = slot(Unit::M, base | at(3, 30)).unwrap();
    assert_eq!(cmpxchg.opcode(), Some(Opcode::Cmpxchg8));
    assert_eq!(cmpxchg.operand(4), Some(&ccv));

    let xchg = slot(Unit::M, base | at(0xB, 30)).unwrap();
    assert_eq!(xchg.opcode(), Some(Opcode::Xchg8));
    assert!(xchg.operand(4).unwrap().is_none());

    let wide = slot(Unit::M, base | at(0x20, 30)).unwrap();
    assert_eq!(wide.opcode(), Some(Opcode::Cmp8xchg16));
    assert_eq!(wide.operand(4), Some(&csd));
    assert_eq!(wide.operand(5), Some(&ccv));
}

#[test]
fn test_ld16_has_two_destinations() {
    let bits = major(4) | at(1, 27) | at(0x28, 30) | at(7, 6) | at(9, 20);
    let inst = slot(Unit::M, bits).unwrap();

    assert_eq!(inst.opcode(), Some(Opcode::Ld16));
    assert_eq!(inst.src_index(), 3);
    assert_eq!(inst.operand(1), Some(&greg(7)));
    assert_eq!(inst.operand(2), Some(&Operand::new(OperandKind::Areg, AR_CSD)));
    assert_eq!(inst.operand(3), Some(&Operand::new(OperandKind::Mem, 9)));

    let ld8 = slot(Unit::M, major(4) | at(3, 30) | at(7, 6) | at(9, 20)).unwrap();
    assert_eq!(ld8.src_index(), 2);
    assert_eq!(ld8.operand(2), Some(&Operand::new(OperandKind::Mem, 9)));
}

#[test]
fn test_completer_order() {
    // ld8.sa.nt1: the normalizer's completer comes before the hint
    let inst = slot(Unit::M, major(4) | at(0xF, 30) | at(1, 28)).unwrap();
    assert_eq!(inst.opcode(), Some(Opcode::Ld8));
    let completers: Vec<_> = inst.completers().iter().map(|c| (c.class, c.ty)).collect();
    assert_eq!(
        completers,
        vec![
            (CompleterClass::Ldtype, CompleterType::Sa),
            (CompleterClass::Ldhint, CompleterType::Nt1),
        ]
    );
}

#[test]
fn test_i21_branch_register_move() {
    let base = at(7, 33) | at(1, 6) | at(2, 13);

    let sptk = slot(Unit::I, base).unwrap();
    assert_eq!(sptk.opcode(), Some(Opcode::Mov));
    assert_eq!(
        completer_types(&sptk),
        vec![CompleterType::None, CompleterType::Sptk, CompleterType::None]
    );
    assert_eq!(sptk.operand(1), Some(&Operand::new(OperandKind::Breg, 1)));

    let dptk = slot(Unit::I, base | at(2, 20) | at(1, 23)).unwrap();
    assert_eq!(
        completer_types(&dptk),
        vec![CompleterType::None, CompleterType::Dptk, CompleterType::Imp]
    );

    assert!(slot(Unit::I, base | at(3, 20)).is_none());
    assert!(Bundle::from_raw(pack(0x00, [0, base | at(3, 20), 0])).is_none());
}

#[test]
fn test_a7_requires_zero_r2() {
    // cmp.gt.and p1, p2 = r0, r3
    let bits = at(0xC8, 33) | at(1, 6) | at(2, 27) | at(3, 20);
    let inst = slot(Unit::I, bits).unwrap();
    assert_eq!(inst.format(), Some(Format::A7));
    assert_eq!(inst.src_index(), 3);
    assert_eq!(inst.operand(3), Some(&greg(0)));
    assert_eq!(inst.operand(4), Some(&greg(3)));

    assert!(slot(Unit::I, bits | at(1, 13)).is_none());
}

#[test]
fn test_i9_requires_zero_r2() {
    let bits = major(7) | at(6, 32) | at(9, 28) | at(4, 6) | at(5, 20);
    let inst = slot(Unit::I, bits).unwrap();
    assert_eq!(inst.opcode(), Some(Opcode::Popcnt));
    assert_eq!(inst.operand(2), Some(&greg(5)));

    assert!(slot(Unit::I, bits | at(0x40, 13)).is_none());
}

#[test]
fn test_m25_requires_zero_predicate() {
    let flushrs = at(0xC, 27);
    assert_eq!(
        slot(Unit::M, flushrs).unwrap().opcode(),
        Some(Opcode::Flushrs)
    );
    assert!(slot(Unit::M, flushrs | 5).is_none());
}

#[test]
fn test_f4_compare_completers() {
    // fcmp.lt.unc.s2 p1, p2 = f3, f4
    let bits = major(4)
        | at(1, 36)
        | at(1, 12)
        | at(2, 34)
        | at(1, 6)
        | at(2, 27)
        | at(3, 13)
        | at(4, 20);
    let inst = slot(Unit::F, bits).unwrap();

    assert_eq!(inst.opcode(), Some(Opcode::Fcmp));
    assert_eq!(
        completer_types(&inst),
        vec![CompleterType::Lt, CompleterType::Unc, CompleterType::S2]
    );
    assert_eq!(inst.src_index(), 3);
    assert_eq!(inst.operand(3), Some(&Operand::new(OperandKind::Freg, 3)));
}

#[test]
fn test_src_index() {
    assert_eq!(src_index(Format::A1, Opcode::Add), 2);
    assert_eq!(src_index(Format::A6, Opcode::Cmp), 3);
    assert_eq!(src_index(Format::M1, Opcode::Ld16), 3);
    assert_eq!(src_index(Format::M1, Opcode::Ld8), 2);
    assert_eq!(src_index(Format::B7, Opcode::Brp), 1);
    assert_eq!(src_index(Format::M45, Opcode::Ptc), 1);
}
