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
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

/// Distinct base mnemonics in the decoder
const MNEMONIC_COUNT: usize = 178;

/// Distinct operand formats the matchers produce
const FORMAT_COUNT: usize = 118;

/// Fields each matcher discriminates on, as `(offset, len)`
///
/// M and I include the A-unit fields they hand off to. The major opcode
/// (37, 4) is added by [`sweep_mask`].
const SWEEPS: [(Unit, &[(u32, u32)]); 5] = [
    (Unit::M, &[(12, 1), (26, 1), (27, 6), (29, 8), (30, 7), (33, 8), (34, 2), (36, 1)]),
    (
        Unit::I,
        &[(12, 2), (19, 1), (22, 1), (26, 1), (27, 6), (28, 4), (29, 8), (32, 5), (33, 8)],
    ),
    (Unit::F, &[(26, 1), (27, 6), (33, 1), (34, 2), (36, 1)]),
    (Unit::B, &[(6, 3), (27, 6)]),
    (Unit::X, &[(6, 3), (20, 1), (26, 1), (27, 6), (33, 3)]),
];

fn sweep_mask(fields: &[(u32, u32)]) -> u64 {
    fields
        .iter()
        .fold(0xFu64 << 37, |mask, &(offset, len)| mask | (((1u64 << len) - 1) << offset))
}

#[test]
fn test_every_decode_op_normalizes() {
    let mut opcodes = BTreeSet::new();

    for op in DecodeOp::ALL {
        let n = normalize(op);
        assert!(n.completers.len() <= MAX_COMPLETERS, "{:?}", op);
        opcodes.insert(n.opcode);
    }

    assert_eq!(opcodes.len(), MNEMONIC_COUNT);
}

#[test]
fn test_every_decode_op_is_matched() {
    let mut ops = HashSet::new();
    let mut formats = HashSet::new();

    for (unit, fields) in SWEEPS {
        let mask = sweep_mask(fields);
        // Walk every subset of the mask, starting and ending at zero
        let mut bits = 0u64;
        loop {
            if let Some((op, format)) = units::decode(unit, bits) {
                ops.insert(op);
                formats.insert(format);
            }
            bits = bits.wrapping_sub(mask) & mask;
            if bits == 0 {
                break;
            }
        }
    }

    let missing: Vec<_> = DecodeOp::ALL.iter().filter(|op| !ops.contains(op)).collect();
    assert!(missing.is_empty(), "never matched: {:?}", missing);
    assert_eq!(ops.len(), DecodeOp::ALL.len());
    assert_eq!(formats.len(), FORMAT_COUNT);
}

#[test]
fn test_sweep_covers_matched_fields() {
    // Bits outside the sweep must never change the match
    for (unit, fields) in SWEEPS {
        let mask = sweep_mask(fields);
        for bits in [0u64, 0x0400_0000, 0x1_0000_0000, 0x1E0_0000_0000] {
            let swept = bits & mask;
            assert_eq!(
                units::decode(unit, swept),
                units::decode(unit, swept | (!mask & 0x1FF_FFFF_FFFF)),
                "{:?} at {:#x}",
                unit,
                swept
            );
        }
    }
}

#[test]
fn test_mnemonics_are_lowercase_and_unique() {
    let opcodes: BTreeSet<Opcode> = DecodeOp::ALL
        .iter()
        .map(|&op| normalize(op).opcode)
        .collect();
    let mnemonics: BTreeSet<&str> = opcodes.iter().map(|op| op.mnemonic()).collect();

    assert_eq!(mnemonics.len(), opcodes.len());
    for opcode in opcodes {
        let text = opcode.mnemonic();
        assert!(text.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(opcode.to_string(), text);
    }
}

#[test]
fn test_system_register_hints() {
    assert_eq!(normalize(DecodeOp::MovRr).hint, OperandKind::Rr);
    assert_eq!(normalize(DecodeOp::MovPmd).hint, OperandKind::Pmd);
    assert_eq!(normalize(DecodeOp::Add).hint, OperandKind::None);
}

#[test]
fn test_redundant_forms_share_a_mnemonic() {
    let a = normalize(DecodeOp::Ld8);
    let b = normalize(DecodeOp::Ld8Acq);
    assert_eq!(a.opcode, b.opcode);
    assert_ne!(a.completers, b.completers);
}

/// Units allowed to produce a format of the given letter
fn unit_accepts(unit: Unit, letter: char) -> bool {
    match unit {
        Unit::M => letter == 'M' || letter == 'A',
        Unit::I => letter == 'I' || letter == 'A',
        Unit::F => letter == 'F',
        Unit::B => letter == 'B',
        Unit::X => letter == 'X',
        Unit::L => false,
    }
}

proptest! {
    #[test]
    fn prop_formats_belong_to_their_unit(bits in 0u64..(1 << 41)) {
        for unit in [Unit::M, Unit::I, Unit::F, Unit::B, Unit::X, Unit::L] {
            if let Some((_, format)) = units::decode(unit, bits) {
                prop_assert!(unit_accepts(unit, format.unit()), "{:?} gave {}", unit, format);
            }
        }
    }

    #[test]
    fn prop_extract_never_overflows(bits in 0u64..(1 << 41), long in 0u64..(1 << 41)) {
        for unit in [Unit::M, Unit::I, Unit::F, Unit::B, Unit::X] {
            if let Some((op, format)) = units::decode(unit, bits) {
                if let Some(inst) = extract(op, format, bits, Some(long)) {
                    prop_assert_eq!(inst.format(), Some(format));
                    prop_assert!(inst.src_index() >= 1 && inst.src_index() <= 3);
                }
            }
        }
    }
}
