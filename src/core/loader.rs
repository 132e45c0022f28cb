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

//! Code image loading
//!
//! Instruction memory is supplied either as a raw binary file or as hex text,
//! together with the address of its first byte. Images are cut into 16-byte
//! bundles; a trailing partial bundle is ignored.
//!
//! # Example
//!
//! ```
//! use ia64dec::core::loader::CodeImage;
//!
//! let image = CodeImage::from_hex(0x4000_0000, "00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00").unwrap();
//! assert_eq!(image.bundle_count(), 1);
//! assert_eq!(image.bundles().next().unwrap().0, 0x4000_0000);
//! ```

use super::decoder::BUNDLE_SIZE;
use super::error::{DecoderError, Result};
use std::path::Path;

/// A contiguous run of instruction bytes at a known address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeImage {
    base: u64,
    bytes: Vec<u8>,
}

impl CodeImage {
    /// Wrap raw bytes located at `base`
    ///
    /// # Returns
    ///
    /// - `Ok(CodeImage)` if `base` is bundle aligned
    /// - `Err(DecoderError::MisalignedBase)` if it is not
    /// - `Err(DecoderError::ImageOverflow)` if a complete bundle would lie
    ///   past address `0xFFFF_FFFF_FFFF_FFFF`
    pub fn from_bytes(base: u64, bytes: Vec<u8>) -> Result<Self> {
        if base % BUNDLE_SIZE as u64 != 0 {
            return Err(DecoderError::MisalignedBase { address: base });
        }

        // An image may end exactly at the top of the address space
        let size = (bytes.len() - bytes.len() % BUNDLE_SIZE) as u64;
        if size > 0 && base.checked_add(size - 1).is_none() {
            return Err(DecoderError::ImageOverflow {
                base,
                len: bytes.len(),
            });
        }

        let extra = bytes.len() % BUNDLE_SIZE;
        if extra != 0 {
            log::warn!(
                "Image length {} is not a multiple of {}, ignoring {} trailing bytes",
                bytes.len(),
                BUNDLE_SIZE,
                extra
            );
        }

        Ok(Self { base, bytes })
    }

    /// Read a raw binary file
    ///
    /// # Arguments
    ///
    /// * `path` - File holding instruction bytes, no header
    /// * `base` - Address of the first byte
    pub fn load<P: AsRef<Path>>(path: P, base: u64) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::info!("Loaded {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(base, bytes)
    }

    /// Parse hex text
    ///
    /// Bytes may be separated by whitespace or commas and may carry a `0x`
    /// prefix. A token longer than two digits is read as a run of bytes in
    /// memory order, so `"0001"` and `"00 01"` are the same image.
    pub fn from_hex(base: u64, text: &str) -> Result<Self> {
        let mut bytes = Vec::new();

        for token in text.split(|c: char| c.is_whitespace() || c == ',') {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            if digits.is_empty() {
                continue;
            }
            if digits.len() % 2 != 0 {
                return Err(DecoderError::Parse(format!(
                    "Odd number of hex digits in '{}'",
                    token
                )));
            }
            for pair in digits.as_bytes().chunks(2) {
                let pair = std::str::from_utf8(pair)
                    .map_err(|e| DecoderError::Parse(format!("Invalid hex '{}': {}", token, e)))?;
                let byte = u8::from_str_radix(pair, 16)
                    .map_err(|e| DecoderError::Parse(format!("Invalid hex '{}': {}", token, e)))?;
                bytes.push(byte);
            }
        }

        Self::from_bytes(base, bytes)
    }

    /// Address of the first byte
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Bytes covered by complete bundles
    pub fn size(&self) -> u64 {
        (self.bundle_count() * BUNDLE_SIZE) as u64
    }

    /// Address of the last complete bundle, `None` for an empty image
    pub fn last_bundle(&self) -> Option<u64> {
        self.size()
            .checked_sub(BUNDLE_SIZE as u64)
            .map(|offset| self.base + offset)
    }

    pub fn bundle_count(&self) -> usize {
        self.bytes.len() / BUNDLE_SIZE
    }

    /// Bundle containing `address`
    ///
    /// The slot bits of an instruction address (the low four bits) are
    /// masked off, so any address inside a bundle selects that bundle.
    pub fn bundle_at(&self, address: u64) -> Result<&[u8; BUNDLE_SIZE]> {
        let aligned = address & !(BUNDLE_SIZE as u64 - 1);
        let out_of_range = || DecoderError::OutOfRange {
            address,
            start: self.base,
            size: self.size(),
        };

        if aligned < self.base || aligned - self.base >= self.size() {
            return Err(out_of_range());
        }

        let offset = (aligned - self.base) as usize;
        self.bytes[offset..offset + BUNDLE_SIZE]
            .try_into()
            .map_err(|_| out_of_range())
    }

    /// Iterate over `(address, bundle)` pairs in address order
    pub fn bundles(&self) -> impl Iterator<Item = (u64, &[u8; BUNDLE_SIZE])> + '_ {
        self.bytes
            .chunks_exact(BUNDLE_SIZE)
            .filter_map(|chunk| <&[u8; BUNDLE_SIZE]>::try_from(chunk).ok())
            .enumerate()
            .map(move |(i, chunk)| (self.base + (i * BUNDLE_SIZE) as u64, chunk))
    }
}

/// Parse an address given as `0x`-prefixed hex or decimal
///
/// # Example
///
/// ```
/// use ia64dec::core::loader::parse_address;
///
/// assert_eq!(parse_address("0x4000").unwrap(), 0x4000);
/// assert_eq!(parse_address("256").unwrap(), 256);
/// ```
pub fn parse_address(text: &str) -> Result<u64> {
    let text = text.trim().replace('_', "");
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    parsed.map_err(|e| DecoderError::Parse(format!("Invalid address '{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_from_hex_separators() {
        let spaced = CodeImage::from_hex(0, "0x01 0x02, 03\n04").unwrap();
        let packed = CodeImage::from_hex(0, "01020304").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced.bundle_count(), 0);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            CodeImage::from_hex(0, "0g"),
            Err(DecoderError::Parse(_))
        ));
        assert!(matches!(
            CodeImage::from_hex(0, "123"),
            Err(DecoderError::Parse(_))
        ));
    }

    #[test]
    fn test_misaligned_base() {
        let err = CodeImage::from_bytes(0x1008, vec![0; 16]).unwrap_err();
        assert!(matches!(err, DecoderError::MisalignedBase { address: 0x1008 }));
    }

    #[test]
    fn test_bundle_at_masks_slot_bits() {
        let mut bytes = vec![0u8; 32];
        bytes[16] = 0x11;
        let image = CodeImage::from_bytes(0x1000, bytes).unwrap();

        assert_eq!(image.bundle_at(0x1010).unwrap()[0], 0x11);
        assert_eq!(image.bundle_at(0x1012).unwrap()[0], 0x11);
        assert_eq!(image.bundle_at(0x100F).unwrap()[0], 0x00);
        assert!(matches!(
            image.bundle_at(0x1020),
            Err(DecoderError::OutOfRange { .. })
        ));
        assert!(image.bundle_at(0x0FF0).is_err());
    }

    #[test]
    fn test_image_at_top_of_address_space() {
        let top = 0xFFFF_FFFF_FFFF_FFF0;
        let mut bytes = vec![0u8; 20];
        bytes[0] = 0x11;
        let image = CodeImage::from_bytes(top, bytes).unwrap();

        assert_eq!(image.last_bundle(), Some(top));
        assert_eq!(image.bundle_at(top).unwrap()[0], 0x11);
        assert_eq!(image.bundle_at(u64::MAX).unwrap()[0], 0x11);
        assert!(matches!(
            image.bundle_at(top - 0x10),
            Err(DecoderError::OutOfRange { size: 16, .. })
        ));
        let addresses: Vec<u64> = image.bundles().map(|(addr, _)| addr).collect();
        assert_eq!(addresses, vec![top]);
    }

    #[test]
    fn test_image_past_address_space() {
        let err = CodeImage::from_bytes(0xFFFF_FFFF_FFFF_FFE0, vec![0; 48]).unwrap_err();
        assert!(matches!(
            err,
            DecoderError::ImageOverflow {
                base: 0xFFFF_FFFF_FFFF_FFE0,
                len: 48
            }
        ));
    }

    #[test]
    fn test_empty_image() {
        let image = CodeImage::from_bytes(0x1000, Vec::new()).unwrap();
        assert_eq!(image.last_bundle(), None);
        assert!(matches!(
            image.bundle_at(0x1000),
            Err(DecoderError::OutOfRange { size: 0, .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let image = CodeImage::from_bytes(0, vec![0; 40]).unwrap();
        assert_eq!(image.bundle_count(), 2);
        assert_eq!(image.size(), 32);
        assert_eq!(image.last_bundle(), Some(16));
        let addresses: Vec<u64> = image.bundles().map(|(addr, _)| addr).collect();
        assert_eq!(addresses, vec![0, 16]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = Builder::new()
            .prefix("ia64_image_")
            .suffix(".bin")
            .tempfile()
            .unwrap();
        file.write_all(&[0xAA; 48]).unwrap();
        file.flush().unwrap();

        let image = CodeImage::load(file.path(), 0x2000).unwrap();
        assert_eq!(image.base(), 0x2000);
        assert_eq!(image.bundle_count(), 3);
        assert_eq!(image.bundle_at(0x2020).unwrap(), &[0xAA; 16]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");
        assert!(matches!(
            CodeImage::load(&missing, 0),
            Err(DecoderError::Io(_))
        ));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x1_0000").unwrap(), 0x10000);
        assert_eq!(parse_address(" 42 ").unwrap(), 42);
        assert!(parse_address("0xZZ").is_err());
        assert!(parse_address("").is_err());
    }
}
