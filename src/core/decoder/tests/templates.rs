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

use super::super::template::*;
use super::super::{Bundle, SLOT_COUNT};
use super::pack;

#[test]
fn test_template_table() {
    let expected = [
        (0x00, "MII"),
        (0x01, "MII;"),
        (0x02, "MI;I"),
        (0x03, "MI;I;"),
        (0x04, "MLX"),
        (0x05, "MLX;"),
        (0x08, "MMI"),
        (0x09, "MMI;"),
        (0x0A, "M;MI"),
        (0x0B, "M;MI;"),
        (0x0C, "MFI"),
        (0x0D, "MFI;"),
        (0x0E, "MMF"),
        (0x0F, "MMF;"),
        (0x10, "MIB"),
        (0x11, "MIB;"),
        (0x12, "MBB"),
        (0x13, "MBB;"),
        (0x16, "BBB"),
        (0x17, "BBB;"),
        (0x18, "MMB"),
        (0x19, "MMB;"),
        (0x1C, "MFB"),
        (0x1D, "MFB;"),
    ];

    for (selector, name) in expected {
        let template = Template::from_selector(selector).unwrap();
        assert_eq!(template.name(), name, "selector 0x{:02X}", selector);
        assert_eq!(template.selector(), selector);
    }
    assert_eq!(Template::all().count(), expected.len());
}

#[test]
fn test_reserved_selectors() {
    for selector in [0x06, 0x07, 0x14, 0x15, 0x1A, 0x1B, 0x1E, 0x1F] {
        assert!(Template::from_selector(selector).is_none());
        assert!(Bundle::from_raw(pack(selector, [0; 3])).is_none());
    }
    assert!(Template::from_selector(TEMPLATE_COUNT as u8).is_none());
}

#[test]
fn test_every_template_has_three_slots() {
    for template in Template::all() {
        let letters = template.name().chars().filter(|&c| c != ';').count();
        assert_eq!(letters, SLOT_COUNT, "{}", template);
    }
}

#[test]
fn test_units() {
    let mlx = Template::from_selector(0x04).unwrap();
    assert_eq!(mlx.units(), [Unit::M, Unit::L, Unit::X]);

    let mfb = Template::from_selector(0x1C).unwrap();
    assert_eq!(mfb.units(), [Unit::M, Unit::F, Unit::B]);
}

#[test]
fn test_stops() {
    let mid = Template::from_selector(0x0B).unwrap(); // M;MI;
    assert!(mid.stop_after(0));
    assert!(!mid.stop_after(1));
    assert!(mid.stop_after(2));

    let plain = Template::from_selector(0x00).unwrap();
    assert!((0..SLOT_COUNT).all(|slot| !plain.stop_after(slot)));
}

#[test]
fn test_unit_letters() {
    assert_eq!(Unit::from_letter('M'), Some(Unit::M));
    assert_eq!(Unit::from_letter('X'), Some(Unit::X));
    assert_eq!(Unit::from_letter(';'), None);
    assert_eq!(Unit::from_letter('A'), None);
}
