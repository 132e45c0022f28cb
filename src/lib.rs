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

//! IA-64 instruction decoding library
//!
//! Decodes 128-bit Itanium instruction bundles into opcodes, completers and
//! operands, and renders them as assembler text.
//!
//! # Example
//!
//! ```
//! use ia64dec::core::decoder::Bundle;
//! use ia64dec::core::disassembler::Disassembler;
//!
//! let bundle = Bundle::decode(&[0u8; 16]).unwrap();
//! let lines = Disassembler::default().disassemble_bundle(&bundle, 0);
//! assert_eq!(lines[0], "[MII]       break.m 0x0");
//! ```

pub mod core;
