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

//! Core decoding components
//!
//! - Bit field helpers shared by every decoding stage
//! - Bundle decoder (templates, unit matchers, normalizer, operand extraction)
//! - Disassembler
//! - Code image loading, configuration and tracing

pub mod bits;
pub mod config;
pub mod decoder;
pub mod disassembler;
pub mod error;
pub mod loader;
pub mod tracer;

// Re-export commonly used types
pub use config::Config;
pub use decoder::{Bundle, Instruction, Opcode};
pub use disassembler::{Disassembler, ListingFlags};
pub use error::{DecoderError, Result};
pub use loader::CodeImage;
pub use tracer::DecodeTracer;
