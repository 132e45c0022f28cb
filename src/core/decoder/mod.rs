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

//! IA-64 bundle decoder
//!
//! A bundle is 16 little-endian bytes: a 5-bit template selector followed by
//! three 41-bit syllables. Decoding walks the template's unit letters, runs the
//! matching unit decoder on each syllable and extracts its operands. A bundle
//! either decodes completely or not at all.
//!
//! # Example
//!
//! ```
//! use ia64dec::core::decoder::{Bundle, Opcode};
//!
//! // MII bundle of three zero syllables: break.m 0; break.i 0; break.i 0
//! let bundle = Bundle::decode(&[0u8; 16]).unwrap();
//! assert_eq!(bundle.template().name(), "MII");
//! assert_eq!(bundle.slots()[0].opcode(), Some(Opcode::Break));
//! ```

pub mod extract;
pub mod normalize;
pub mod opcode;
pub mod template;
pub mod types;
pub(crate) mod units;

#[cfg(test)]
mod tests;

pub use extract::{extract, src_index, AR_CCV, AR_CSD, AR_PFS};
pub use normalize::{normalize, Normalized};
pub use opcode::{DecodeOp, Opcode};
pub use template::{Template, Unit, TEMPLATE_COUNT};
pub use types::{
    Completer, CompleterClass, CompleterType, Format, Instruction, Operand, OperandKind,
    MAX_COMPLETERS, MAX_OPERANDS,
};

use crate::core::bits::{slot_bits, template_bits};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Size of one bundle in bytes
pub const BUNDLE_SIZE: usize = 16;

/// Syllables per bundle
pub const SLOT_COUNT: usize = 3;

/// Why a bundle was rejected
///
/// Only surfaces in debug logging; callers see a bundle that failed to decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    #[error("reserved template selector 0x{0:02X}")]
    ReservedTemplate(u8),

    #[error("unexpected template letter '{0}'")]
    BadLetter(char),

    #[error("L unit in slot {0}")]
    MisplacedLong(usize),

    #[error("no {unit:?}-unit opcode matches slot {slot} (0x{bits:011X})")]
    NoMatch { slot: usize, unit: Unit, bits: u64 },

    #[error("reserved field set in {format} syllable at slot {slot}")]
    ReservedField { slot: usize, format: Format },
}

/// A fully decoded bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bundle {
    template: Template,
    slots: [Instruction; SLOT_COUNT],
}

impl Bundle {
    /// Decode 16 bytes of instruction memory
    ///
    /// The bytes must start at the bundle's own 16-byte aligned address.
    ///
    /// # Returns
    ///
    /// `None` if the template is reserved or any slot fails to decode.
    pub fn decode(bytes: &[u8; BUNDLE_SIZE]) -> Option<Bundle> {
        Self::from_raw(u128::from_le_bytes(*bytes))
    }

    /// Decode a bundle given as a 128-bit little-endian value
    pub fn from_raw(raw: u128) -> Option<Bundle> {
        match decode_raw(raw) {
            Ok(bundle) => Some(bundle),
            Err(reason) => {
                log::debug!("invalid bundle {:032X}: {}", raw, reason);
                None
            }
        }
    }

    pub fn template(&self) -> Template {
        self.template
    }

    /// All three slots, including the raw L half of an MLX bundle
    pub fn slots(&self) -> &[Instruction; SLOT_COUNT] {
        &self.slots
    }

    /// Decoded instructions with their slot numbers, skipping L halves
    pub fn instructions(&self) -> impl Iterator<Item = (usize, &Instruction)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, inst)| !inst.is_long_half())
    }
}

impl Serialize for Bundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bundle", 2)?;
        state.serialize_field("template", &self.template)?;
        state.serialize_field("slots", &self.slots)?;
        state.end()
    }
}

/// Decode 16 bytes of instruction memory
///
/// Shorthand for [`Bundle::decode`].
pub fn decode(bytes: &[u8; BUNDLE_SIZE]) -> Option<Bundle> {
    Bundle::decode(bytes)
}

fn decode_raw(raw: u128) -> Result<Bundle, Reject> {
    let selector = template_bits(raw);
    let template = Template::from_selector(selector).ok_or(Reject::ReservedTemplate(selector))?;

    let mut slots = [Instruction::default(); SLOT_COUNT];
    let mut slot = 0;

    for letter in template.name().chars() {
        if letter == ';' {
            continue;
        }
        let unit = Unit::from_letter(letter).ok_or(Reject::BadLetter(letter))?;

        if unit == Unit::L {
            if slot != 1 {
                return Err(Reject::MisplacedLong(slot));
            }
            slot += 1;
            continue;
        }

        let bits = slot_bits(raw, slot);
        let paired = if unit == Unit::X {
            let long = slot.checked_sub(1).ok_or(Reject::MisplacedLong(slot))?;
            let long_bits = slot_bits(raw, long);
            slots[long] = Instruction::raw(long_bits);
            Some(long_bits)
        } else {
            None
        };

        let (op, format) = units::decode(unit, bits).ok_or(Reject::NoMatch { slot, unit, bits })?;
        slots[slot] =
            extract(op, format, bits, paired).ok_or(Reject::ReservedField { slot, format })?;
        slot += 1;
    }

    Ok(Bundle { template, slots })
}
