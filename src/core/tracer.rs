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

//! Decode tracer for debugging
//!
//! Records every bundle the decoder sees to a file, valid or not.

use super::decoder::{Bundle, BUNDLE_SIZE};
use super::disassembler::{Disassembler, ListingFlags};
use super::error::Result;
use chrono::{SecondsFormat, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bundle decode tracer
///
/// The trace starts with a timestamped header. Each following line shows:
/// - Bundle address
/// - Raw bundle as a 128-bit little-endian value
/// - Template name, or `????` when the bundle did not decode
/// - Disassembly of the decoded slots separated by ` ; `
///
/// # Example
/// ```no_run
/// use ia64dec::core::decoder::Bundle;
/// use ia64dec::core::tracer::DecodeTracer;
///
/// let bytes = [0u8; 16];
/// let mut tracer = DecodeTracer::new("decode.trace").unwrap();
/// tracer.trace(0x4000, &bytes, Bundle::decode(&bytes).as_ref()).unwrap();
/// ```
pub struct DecodeTracer {
    enabled: bool,
    output: BufWriter<File>,
    disassembler: Disassembler,
    traced: u64,
    invalid: u64,
}

impl DecodeTracer {
    /// Create a tracer writing to `path`
    ///
    /// An existing file is overwritten.
    ///
    /// # Returns
    ///
    /// - `Ok(DecodeTracer)` once the header is written
    /// - `Err(DecoderError)` if the file cannot be created
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut output = BufWriter::new(File::create(path.as_ref())?);
        writeln!(
            output,
            "# ia64dec trace started {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        log::info!("Tracing decode to {}", path.as_ref().display());

        Ok(Self {
            enabled: true,
            output,
            disassembler: Disassembler::new(ListingFlags::empty()),
            traced: 0,
            invalid: 0,
        })
    }

    /// Enable or disable tracing
    ///
    /// When disabled, trace() returns immediately without writing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of bundles written so far
    pub fn traced(&self) -> u64 {
        self.traced
    }

    /// Number of traced bundles that failed to decode
    pub fn invalid(&self) -> u64 {
        self.invalid
    }

    /// Trace one bundle
    ///
    /// # Arguments
    ///
    /// * `address` - Bundle address
    /// * `bytes` - Raw bundle bytes
    /// * `bundle` - Decode result for `bytes`
    pub fn trace(
        &mut self,
        address: u64,
        bytes: &[u8; BUNDLE_SIZE],
        bundle: Option<&Bundle>,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let raw = u128::from_le_bytes(*bytes);
        self.traced += 1;

        match bundle {
            Some(bundle) => {
                let text = self.disassembler.disassemble_bundle(bundle, address);
                writeln!(
                    self.output,
                    "0x{:016X} [{:032X}] {:<8} | {}",
                    address,
                    raw,
                    bundle.template().name(),
                    text.join(" ; ")
                )?;
            }
            None => {
                self.invalid += 1;
                writeln!(
                    self.output,
                    "0x{:016X} [{:032X}] {:<8} | <invalid>",
                    address, raw, "????"
                )?;
            }
        }

        Ok(())
    }

    /// Flush buffered trace lines to disk
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}

impl Drop for DecodeTracer {
    fn drop(&mut self) {
        if let Err(e) = self.output.flush() {
            log::warn!("Failed to flush decode trace: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn trace_path() -> tempfile::NamedTempFile {
        tempfile::Builder::new()
            .prefix("ia64dec_trace_")
            .suffix(".log")
            .tempfile()
            .unwrap()
    }

    #[test]
    fn test_trace_valid_and_invalid() {
        let file = trace_path();
        let zero = [0u8; BUNDLE_SIZE];
        let mut reserved = [0u8; BUNDLE_SIZE];
        reserved[0] = 0x06;

        let mut tracer = DecodeTracer::new(file.path()).unwrap();
        tracer
            .trace(0x1000, &zero, Bundle::decode(&zero).as_ref())
            .unwrap();
        tracer
            .trace(0x1010, &reserved, Bundle::decode(&reserved).as_ref())
            .unwrap();
        assert_eq!(tracer.traced(), 2);
        assert_eq!(tracer.invalid(), 1);
        tracer.flush().unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("# ia64dec trace started "));
        assert!(lines[1].starts_with("0x0000000000001000 ["));
        assert!(lines[1].contains("MII"));
        assert!(lines[1].ends_with("break.m 0x0 ; break.i 0x0 ; break.i 0x0"));
        assert!(lines[2].contains("????"));
        assert!(lines[2].ends_with("<invalid>"));
    }

    #[test]
    fn test_disabled_tracer_writes_nothing() {
        let file = trace_path();
        let zero = [0u8; BUNDLE_SIZE];

        let mut tracer = DecodeTracer::new(file.path()).unwrap();
        tracer.set_enabled(false);
        assert!(!tracer.is_enabled());
        tracer.trace(0, &zero, None).unwrap();
        assert_eq!(tracer.traced(), 0);
        drop(tracer);

        let text = fs::read_to_string(file.path()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
