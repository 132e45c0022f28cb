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

/// Decoder error types
use thiserror::Error;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors raised around the decoder: loading images, configuration, output
///
/// Bundle decoding itself never produces one of these; an undecodable
/// bundle is reported as `None` by [`crate::core::decoder::Bundle::decode`].
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Base address 0x{address:016X} is not 16-byte aligned")]
    MisalignedBase { address: u64 },

    #[error("Address 0x{address:016X} outside image of {size} bytes at 0x{start:016X}")]
    OutOfRange { address: u64, start: u64, size: u64 },

    #[error("Image of {len} bytes at 0x{base:016X} runs past the end of the address space")]
    ImageOverflow { base: u64, len: usize },

    #[error("Invalid bundle at 0x{address:016X}")]
    InvalidBundle { address: u64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
