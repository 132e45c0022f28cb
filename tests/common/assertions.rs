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

//! Custom assertions for decoder testing

use ia64dec::core::decoder::{Bundle, Instruction, Opcode};

/// Assert a slot decoded to the expected base mnemonic
#[allow(dead_code)]
pub fn assert_opcode(bundle: &Bundle, slot: usize, expected: Opcode) {
    let actual = bundle.slots()[slot].opcode();
    assert_eq!(
        actual,
        Some(expected),
        "Slot {} opcode mismatch: expected {}, got {:?}",
        slot,
        expected,
        actual
    );
}

/// Assert an operand's value
#[allow(dead_code)]
pub fn assert_operand_value(inst: &Instruction, index: usize, expected: u64) {
    let actual = inst.operand(index).map(|op| op.value);
    assert_eq!(
        actual,
        Some(expected),
        "Operand {} mismatch: expected 0x{:X}, got {:?}",
        index,
        expected,
        actual
    );
}

/// Assert two listings are identical, reporting the first differing line
#[allow(dead_code)]
pub fn assert_listing(actual: &[String], expected: &[&str]) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a, e, "Listing line {} mismatch", i);
    }
    assert_eq!(actual.len(), expected.len(), "Listing length mismatch");
}
