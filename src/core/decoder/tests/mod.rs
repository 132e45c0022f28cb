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

//! Decoder test modules
//!
//! - `templates`: template table and unit layout
//! - `bundles`: whole-bundle decoding, validity and determinism
//! - `operands`: immediates, displacements and implicit operands per format
//! - `coverage`: every opcode reachable, normalized and attributed to its unit

#[cfg(test)]
mod templates;

#[cfg(test)]
mod bundles;

#[cfg(test)]
mod operands;

#[cfg(test)]
mod coverage;

/// Assemble a bundle from a template selector and three syllables
pub(super) fn pack(template: u8, slots: [u64; 3]) -> u128 {
    let mask = (1u128 << 41) - 1;
    (template as u128 & 0x1F)
        | ((slots[0] as u128 & mask) << 5)
        | ((slots[1] as u128 & mask) << 46)
        | ((slots[2] as u128 & mask) << 87)
}

/// Syllable with `value` placed at bit `offset`
pub(super) fn at(value: u64, offset: u32) -> u64 {
    value << offset
}

/// Major opcode field (bits 37..40)
pub(super) fn major(value: u64) -> u64 {
    at(value, 37)
}
