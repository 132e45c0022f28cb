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
use proptest::prelude::*;

#[test]
fn test_zero_bundle_is_mii_breaks() {
    let bundle = Bundle::decode(&[0u8; BUNDLE_SIZE]).unwrap();

    assert_eq!(bundle.template().name(), "MII");
    let formats: Vec<_> = bundle.slots().iter().map(|i| i.format()).collect();
    assert_eq!(
        formats,
        vec![Some(Format::M37), Some(Format::I19), Some(Format::I19)]
    );

    for inst in bundle.slots() {
        assert_eq!(inst.opcode(), Some(Opcode::Break));
        let qp = inst.operand(0).unwrap();
        assert_eq!(qp.kind, OperandKind::Preg);
        assert_eq!(qp.value, 0);
        assert_eq!(inst.operand(1), Some(&Operand::new(OperandKind::Imm, 0)));
    }
}

#[test]
fn test_little_endian_layout() {
    // Template 0x10 (MIB) sits in the low five bits of byte 0
    let raw = pack(0x10, [0, 0, major(4)]);
    let bytes = raw.to_le_bytes();
    assert_eq!(bytes[0] & 0x1F, 0x10);

    let bundle = decode(&bytes).unwrap();
    assert_eq!(bundle.template().name(), "MIB");
    assert_eq!(bundle.slots()[2].opcode(), Some(Opcode::Br));
    assert_eq!(Bundle::from_raw(raw), Some(bundle));
}

#[test]
fn test_unmatched_slot_invalidates_bundle() {
    // Major 1 means nothing on the X unit
    assert!(Bundle::from_raw(pack(0x04, [0, 0, major(1)])).is_none());
    // Major 2 means nothing on the I unit
    assert!(Bundle::from_raw(pack(0x00, [0, major(2), 0])).is_none());
}

#[test]
fn test_reserved_field_invalidates_bundle() {
    // br.cloop (B2) with a non-zero qualifying predicate field
    let cloop = major(4) | at(5, 6);
    assert!(Bundle::from_raw(pack(0x16, [cloop, 0, 0])).is_some());
    assert!(Bundle::from_raw(pack(0x16, [cloop | 1, 0, 0])).is_none());
}

#[test]
fn test_reject_reasons() {
    assert_eq!(
        decode_raw(pack(0x07, [0; 3])),
        Err(Reject::ReservedTemplate(0x07))
    );
    assert!(matches!(
        decode_raw(pack(0x00, [0, major(2), 0])),
        Err(Reject::NoMatch { slot: 1, unit: Unit::I, .. })
    ));
    assert!(matches!(
        decode_raw(pack(0x16, [major(4) | at(5, 6) | 1, 0, 0])),
        Err(Reject::ReservedField {
            slot: 0,
            format: Format::B2
        })
    ));
}

#[test]
fn test_mlx_long_half() {
    let long = 0x1_2345_6789u64;
    let bundle = Bundle::from_raw(pack(0x04, [0, long, major(6)])).unwrap();

    let half = &bundle.slots()[1];
    assert!(half.is_long_half());
    assert_eq!(half.bits(), long);
    assert_eq!(half.opcode(), None);

    let slots: Vec<usize> = bundle.instructions().map(|(slot, _)| slot).collect();
    assert_eq!(slots, vec![0, 2]);
    assert_eq!(bundle.slots()[2].opcode(), Some(Opcode::Movl));
}

#[test]
fn test_i_and_m_units_accept_a_unit_opcodes() {
    // adds r1 = 5, r2 in an M slot and in an I slot
    let adds = major(8) | at(2, 34) | at(1, 6) | at(5, 13) | at(2, 20);
    let bundle = Bundle::from_raw(pack(0x00, [adds, adds, 0])).unwrap();

    for inst in &bundle.slots()[..2] {
        assert_eq!(inst.opcode(), Some(Opcode::Adds));
        assert_eq!(inst.format(), Some(Format::A4));
        assert_eq!(inst.operand(2).unwrap().value, 5);
        assert_eq!(inst.operand(3), Some(&Operand::new(OperandKind::Greg, 2)));
    }
}

#[test]
fn test_json_shape() {
    let bundle = Bundle::decode(&[0u8; BUNDLE_SIZE]).unwrap();
    let json = serde_json::to_value(bundle).unwrap();

    assert_eq!(json["template"], "MII");
    assert_eq!(json["slots"].as_array().unwrap().len(), SLOT_COUNT);
    assert_eq!(json["slots"][0]["opcode"], "break");
    assert_eq!(json["slots"][0]["format"], "M37");
    assert_eq!(json["slots"][0]["raw_bits"], 0);
    assert_eq!(json["slots"][0]["first_source_operand_index"], 2);
    assert!(json["slots"][0].get("bits").is_none());
}

proptest! {
    #[test]
    fn prop_decode_is_deterministic(raw in any::<u128>()) {
        let first = Bundle::from_raw(raw);
        prop_assert_eq!(first, Bundle::from_raw(raw));
    }

    #[test]
    fn prop_decoded_bundles_keep_their_bits(raw in any::<u128>()) {
        if let Some(bundle) = Bundle::from_raw(raw) {
            prop_assert_eq!(bundle.template().selector() as u128, raw & 0x1F);
            for (slot, inst) in bundle.slots().iter().enumerate() {
                let expected = (raw >> (5 + 41 * slot)) as u64 & ((1 << 41) - 1);
                prop_assert_eq!(inst.bits(), expected);
                prop_assert!(inst.completers().len() <= MAX_COMPLETERS);
            }
        }
    }
}
