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

//! Listing configuration
//!
//! Settings come from three layers, later ones overriding earlier ones:
//! a TOML file, `IA64DEC_*` environment variables (a `.env` file is loaded
//! by the binary), and command line flags.
//!
//! ```toml
//! base = "0x4000000000000000"
//! show_address = true
//! show_raw_bits = false
//! ```

use super::disassembler::ListingFlags;
use super::error::{DecoderError, Result};
use super::loader::parse_address;
use serde::Deserialize;
use std::path::Path;

/// Listing options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Load address of the image, hex or decimal
    pub base: String,
    pub show_address: bool,
    pub show_template: bool,
    pub show_stops: bool,
    pub show_raw_bits: bool,
    /// Stop at the first bundle that fails to decode
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: "0".to_string(),
            show_address: true,
            show_template: true,
            show_stops: true,
            show_raw_bits: false,
            strict: false,
        }
    }
}

impl Config {
    /// Parse TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DecoderError::Config(e.to_string()))
    }

    /// Read a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml(&text)
    }

    /// Apply overrides from `IA64DEC_*` environment variables
    ///
    /// Recognized: `IA64DEC_BASE`, `IA64DEC_SHOW_ADDRESS`,
    /// `IA64DEC_SHOW_TEMPLATE`, `IA64DEC_SHOW_STOPS`, `IA64DEC_SHOW_RAW_BITS`,
    /// `IA64DEC_STRICT`.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("IA64DEC_BASE") {
            self.base = base;
        }

        let flags = [
            ("IA64DEC_SHOW_ADDRESS", &mut self.show_address),
            ("IA64DEC_SHOW_TEMPLATE", &mut self.show_template),
            ("IA64DEC_SHOW_STOPS", &mut self.show_stops),
            ("IA64DEC_SHOW_RAW_BITS", &mut self.show_raw_bits),
            ("IA64DEC_STRICT", &mut self.strict),
        ];
        for (key, slot) in flags {
            if let Some(value) = lookup(key) {
                *slot = parse_bool(key, &value)?;
            }
        }

        Ok(())
    }

    /// Load address as a number
    pub fn base_address(&self) -> Result<u64> {
        parse_address(&self.base)
    }

    /// Listing flags for the disassembler
    pub fn listing_flags(&self) -> ListingFlags {
        let mut flags = ListingFlags::empty();
        flags.set(ListingFlags::ADDRESS, self.show_address);
        flags.set(ListingFlags::TEMPLATE, self.show_template);
        flags.set(ListingFlags::STOPS, self.show_stops);
        flags.set(ListingFlags::RAW_BITS, self.show_raw_bits);
        flags
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DecoderError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_address().unwrap(), 0);
        assert_eq!(
            config.listing_flags(),
            ListingFlags::ADDRESS | ListingFlags::TEMPLATE | ListingFlags::STOPS
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml("base = \"0x4000\"\nshow_raw_bits = true\n").unwrap();
        assert_eq!(config.base_address().unwrap(), 0x4000);
        assert!(config.show_raw_bits);
        assert!(config.show_template);
    }

    #[test]
    fn test_from_toml_unknown_key() {
        assert!(matches!(
            Config::from_toml("colour = true"),
            Err(DecoderError::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("IA64DEC_BASE", "0x100"),
            ("IA64DEC_SHOW_STOPS", "off"),
            ("IA64DEC_STRICT", "1"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.base_address().unwrap(), 0x100);
        assert!(!config.show_stops);
        assert!(config.strict);
        assert!(config.show_address);
    }

    #[test]
    fn test_env_rejects_bad_bool() {
        let mut config = Config::default();
        let result = config.apply_vars(|key| (key == "IA64DEC_STRICT").then(|| "maybe".to_string()));
        assert!(matches!(result, Err(DecoderError::Config(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ia64dec.toml");
        std::fs::write(&path, "show_address = false\nstrict = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.show_address);
        assert!(config.strict);
    }
}
