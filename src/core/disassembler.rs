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

//! Assembler-style rendering of decoded bundles
//!
//! Produces listings in the usual IA-64 syntax: optional qualifying predicate,
//! mnemonic with dotted completers, destinations, `=`, sources.
//!
//! ```text
//! [MLX]       alloc r34 = ar.pfs, 0, 3, 1, 0
//!             movl r8 = 0x123456789abcdef0;;
//! ```

use super::decoder::{Bundle, CompleterType, Instruction, Operand, OperandKind};
use bitflags::bitflags;

bitflags! {
    /// What to include in a listing besides the instruction text
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ListingFlags: u8 {
        /// Prefix each bundle with its address
        const ADDRESS = 1 << 0;
        /// Print the template name on the first slot
        const TEMPLATE = 1 << 1;
        /// Mark stops with `;;`
        const STOPS = 1 << 2;
        /// Append the raw syllable bits
        const RAW_BITS = 1 << 3;
    }
}

impl Default for ListingFlags {
    fn default() -> Self {
        ListingFlags::TEMPLATE | ListingFlags::STOPS
    }
}

/// Formats decoded bundles as text
///
/// # Example
/// ```
/// use ia64dec::core::decoder::Bundle;
/// use ia64dec::core::disassembler::Disassembler;
///
/// let bundle = Bundle::decode(&[0u8; 16]).unwrap();
/// let text = Disassembler::default().disassemble_instruction(&bundle.slots()[0], 0);
/// assert_eq!(text, "break.m 0x0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Disassembler {
    flags: ListingFlags,
}

impl Disassembler {
    pub fn new(flags: ListingFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> ListingFlags {
        self.flags
    }

    /// Render every instruction of a bundle, one line per slot
    ///
    /// # Arguments
    ///
    /// * `bundle` - Decoded bundle
    /// * `ip` - Address of the bundle, used to resolve branch targets
    pub fn disassemble_bundle(&self, bundle: &Bundle, ip: u64) -> Vec<String> {
        let template = bundle.template();
        let mut lines = Vec::with_capacity(3);

        for (slot, inst) in bundle.instructions() {
            let mut line = String::new();

            if self.flags.contains(ListingFlags::ADDRESS) {
                if lines.is_empty() {
                    line.push_str(&format!("{:016x}  ", ip));
                } else {
                    line.push_str(&" ".repeat(18));
                }
            }

            if self.flags.contains(ListingFlags::TEMPLATE) {
                if lines.is_empty() {
                    line.push_str(&format!("{:<12}", format!("[{}]", units(bundle))));
                } else {
                    line.push_str(&" ".repeat(12));
                }
            }

            line.push_str(&self.disassemble_instruction(inst, ip));

            if self.flags.contains(ListingFlags::STOPS) && template.stop_after(slot) {
                line.push_str(";;");
            }

            if self.flags.contains(ListingFlags::RAW_BITS) {
                line.push_str(&format!("  // {:011x}", inst.bits()));
            }

            lines.push(line);
        }

        lines
    }

    /// Render one instruction without address, template or stop
    pub fn disassemble_instruction(&self, inst: &Instruction, ip: u64) -> String {
        let Some(opcode) = inst.opcode() else {
            return format!("data8 0x{:x}", inst.bits());
        };

        let mut text = String::new();

        let qp = inst.operands()[0];
        if qp.kind == OperandKind::Preg && qp.value != 0 {
            text.push_str(&format!("(p{}) ", qp.value));
        }

        text.push_str(opcode.mnemonic());
        for completer in inst.completers() {
            if completer.ty != CompleterType::None {
                text.push('.');
                text.push_str(completer.ty.as_str());
            }
        }

        let render = |(_, op): (usize, &Operand)| operand_text(op, ip);
        let split = inst.src_index().max(1);
        let dests: Vec<String> = inst
            .operands()
            .iter()
            .enumerate()
            .skip(1)
            .take(split - 1)
            .filter(|(_, op)| !op.is_none())
            .map(render)
            .collect();
        let srcs: Vec<String> = inst
            .operands()
            .iter()
            .enumerate()
            .skip(split)
            .filter(|(_, op)| !op.is_none())
            .map(render)
            .collect();

        match (dests.is_empty(), srcs.is_empty()) {
            (true, true) => {}
            (true, false) => text.push_str(&format!(" {}", srcs.join(", "))),
            (false, true) => text.push_str(&format!(" {}", dests.join(", "))),
            (false, false) => {
                text.push_str(&format!(" {} = {}", dests.join(", "), srcs.join(", ")))
            }
        }

        text
    }
}

/// Template unit letters without stops, e.g. `MLX`
fn units(bundle: &Bundle) -> String {
    bundle
        .template()
        .name()
        .chars()
        .filter(|&c| c != ';')
        .collect()
}

/// Well-known application register names
const KERNEL_REGS: [&str; 8] = [
    "ar.k0", "ar.k1", "ar.k2", "ar.k3", "ar.k4", "ar.k5", "ar.k6", "ar.k7",
];

fn areg_name(index: u64) -> Option<&'static str> {
    Some(match index {
        0..=7 => KERNEL_REGS[index as usize],
        16 => "ar.rsc",
        17 => "ar.bsp",
        18 => "ar.bspstore",
        19 => "ar.rnat",
        21 => "ar.fcr",
        24 => "ar.eflag",
        25 => "ar.csd",
        26 => "ar.ssd",
        27 => "ar.cflg",
        28 => "ar.fsr",
        29 => "ar.fir",
        30 => "ar.fdr",
        32 => "ar.ccv",
        36 => "ar.unat",
        40 => "ar.fpsr",
        44 => "ar.itc",
        64 => "ar.pfs",
        65 => "ar.lc",
        66 => "ar.ec",
        _ => return None,
    })
}

fn immediate(value: u64) -> String {
    let signed = value as i64;
    if signed < 0 {
        format!("-0x{:x}", signed.unsigned_abs())
    } else {
        format!("0x{:x}", value)
    }
}

fn operand_text(op: &Operand, ip: u64) -> String {
    let v = op.value;
    match op.kind {
        OperandKind::None => String::new(),
        OperandKind::Areg => areg_name(v).map_or_else(|| format!("ar{}", v), str::to_string),
        OperandKind::Breg => format!("b{}", v),
        OperandKind::Creg => format!("cr{}", v),
        OperandKind::Freg => format!("f{}", v),
        OperandKind::Greg => format!("r{}", v),
        OperandKind::Preg => format!("p{}", v),
        OperandKind::Imm => immediate(v),
        OperandKind::Mem => format!("[r{}]", v),
        OperandKind::Disp => format!("0x{:x}", ip.wrapping_add(v)),
        OperandKind::Ip => "ip".to_string(),
        OperandKind::Pr => "pr".to_string(),
        OperandKind::PrRot => "pr.rot".to_string(),
        OperandKind::Psr => "psr".to_string(),
        OperandKind::PsrL => "psr.l".to_string(),
        OperandKind::PsrUm => "psr.um".to_string(),
        OperandKind::Cpuid => format!("cpuid[r{}]", v),
        OperandKind::Dbr => format!("dbr[r{}]", v),
        OperandKind::Dtr => format!("dtr[r{}]", v),
        OperandKind::Ibr => format!("ibr[r{}]", v),
        OperandKind::Itr => format!("itr[r{}]", v),
        OperandKind::Msr => format!("msr[r{}]", v),
        OperandKind::Pkr => format!("pkr[r{}]", v),
        OperandKind::Pmc => format!("pmc[r{}]", v),
        OperandKind::Pmd => format!("pmd[r{}]", v),
        OperandKind::Rr => format!("rr[r{}]", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decoder::Bundle;

    fn bundle(template: u8, slots: [u64; 3]) -> Bundle {
        let raw = template as u128
            | (slots[0] as u128) << 5
            | (slots[1] as u128) << 46
            | (slots[2] as u128) << 87;
        Bundle::from_raw(raw).expect("bundle should decode")
    }

    #[test]
    fn test_disasm_zero_bundle() {
        let b = bundle(0x00, [0, 0, 0]);
        let lines = Disassembler::new(ListingFlags::empty()).disassemble_bundle(&b, 0);
        assert_eq!(lines, vec!["break.m 0x0", "break.i 0x0", "break.i 0x0"]);
    }

    #[test]
    fn test_disasm_template_and_stop() {
        let b = bundle(0x01, [0, 0, 0]);
        let lines = Disassembler::default().disassemble_bundle(&b, 0);
        assert_eq!(lines[0], "[MII]       break.m 0x0");
        assert_eq!(lines[1], "            break.i 0x0");
        assert_eq!(lines[2], "            break.i 0x0;;");
    }

    #[test]
    fn test_disasm_adds_with_predicate() {
        // adds r1 = 5, r2 under p3 (A4: major 8, x2a 2)
        let bits = (0x8u64 << 37) | (2 << 34) | (2 << 20) | (5 << 13) | (1 << 6) | 3;
        let b = bundle(0x00, [0, bits, 0]);
        let text = Disassembler::default().disassemble_instruction(&b.slots()[1], 0);
        assert_eq!(text, "(p3) adds r1 = 0x5, r2");
    }

    #[test]
    fn test_disasm_branch_target_is_ip_relative() {
        // br.cond.sptk.few with a displacement of 2 bundles (B1: major 4)
        let bits = (0x4u64 << 37) | (2 << 13);
        let b = bundle(0x16, [bits, 0, 0]);
        let text = Disassembler::default().disassemble_instruction(&b.slots()[0], 0x1000);
        assert_eq!(text, "br.cond.sptk.few 0x1020");
    }

    #[test]
    fn test_disasm_negative_immediate() {
        assert_eq!(immediate(u64::MAX), "-0x1");
        assert_eq!(immediate(0x10), "0x10");
    }

    #[test]
    fn test_areg_names() {
        assert_eq!(operand_text(&Operand::new(OperandKind::Areg, 64), 0), "ar.pfs");
        assert_eq!(operand_text(&Operand::new(OperandKind::Areg, 0), 0), "ar.k0");
        assert_eq!(operand_text(&Operand::new(OperandKind::Areg, 7), 0), "ar.k7");
        assert_eq!(operand_text(&Operand::new(OperandKind::Areg, 8), 0), "ar8");
    }
}
