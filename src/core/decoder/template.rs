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

//! Bundle templates
//!
//! The 5-bit template field selects which execution unit handles each of the
//! three syllables and where the stops fall. A `;` marks a stop after the
//! preceding slot. Eight selectors are reserved.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of template selectors
pub const TEMPLATE_COUNT: usize = 32;

const NAMES: [Option<&str>; TEMPLATE_COUNT] = [
    Some("MII"),
    Some("MII;"),
    Some("MI;I"),
    Some("MI;I;"),
    Some("MLX"),
    Some("MLX;"),
    None,
    None,
    Some("MMI"),
    Some("MMI;"),
    Some("M;MI"),
    Some("M;MI;"),
    Some("MFI"),
    Some("MFI;"),
    Some("MMF"),
    Some("MMF;"),
    Some("MIB"),
    Some("MIB;"),
    Some("MBB"),
    Some("MBB;"),
    None,
    None,
    Some("BBB"),
    Some("BBB;"),
    Some("MMB"),
    Some("MMB;"),
    None,
    None,
    Some("MFB"),
    Some("MFB;"),
    None,
    None,
];

/// Execution unit named by a template letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Memory
    M,
    /// Integer
    I,
    /// Floating point
    F,
    /// Branch
    B,
    /// High half of a long immediate, paired with the following X slot
    L,
    /// Long immediate and long branch
    X,
}

impl Unit {
    pub fn from_letter(letter: char) -> Option<Unit> {
        match letter {
            'M' => Some(Unit::M),
            'I' => Some(Unit::I),
            'F' => Some(Unit::F),
            'B' => Some(Unit::B),
            'L' => Some(Unit::L),
            'X' => Some(Unit::X),
            _ => None,
        }
    }
}

/// A valid (non-reserved) template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    selector: u8,
    name: &'static str,
}

impl Template {
    /// Look up a template selector
    ///
    /// # Returns
    ///
    /// `None` for the reserved selectors and for values above 31.
    ///
    /// # Example
    ///
    /// ```
    /// use ia64dec::core::decoder::Template;
    ///
    /// assert_eq!(Template::from_selector(0x04).unwrap().name(), "MLX");
    /// assert!(Template::from_selector(0x06).is_none());
    /// ```
    pub fn from_selector(selector: u8) -> Option<Template> {
        let name = (*NAMES.get(selector as usize)?)?;
        Some(Template { selector, name })
    }

    /// All valid templates in selector order
    pub fn all() -> impl Iterator<Item = Template> {
        (0..TEMPLATE_COUNT as u8).filter_map(Template::from_selector)
    }

    pub fn selector(&self) -> u8 {
        self.selector
    }

    /// Unit letters with stop markers, e.g. `"MI;I;"`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unit of each slot
    pub fn units(&self) -> [Unit; 3] {
        let mut units = [Unit::M; 3];
        let letters = self.name.chars().filter_map(Unit::from_letter);
        for (slot, unit) in letters.enumerate().take(3) {
            units[slot] = unit;
        }
        units
    }

    /// True if a stop follows `slot`
    pub fn stop_after(&self, slot: usize) -> bool {
        let mut current = 0;
        let mut chars = self.name.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ';' {
                continue;
            }
            if current == slot {
                return chars.peek() == Some(&';');
            }
            current += 1;
        }
        false
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
