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

//! X-unit (long immediate) matcher
//!
//! Syllables in this unit pair with the L slot that precedes them.

use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one X-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    match major(bits) {
        0x0 if field(bits, 33, 3) == 0 => match field(bits, 27, 6) { // x3, x6
            0x0 => Some((Op::BreakX, Fmt::X1)),
            0x1 => {
                if field(bits, 26, 1) == 0 { // y
                    Some((Op::NopX, Fmt::X5))
                } else {
                    Some((Op::HintX, Fmt::X5))
                }
            }
            _ => None,
        },
        0x6 if field(bits, 20, 1) == 0 => Some((Op::Movl, Fmt::X2)),
        0xC if field(bits, 6, 3) == 0 => Some((Op::BrlCond, Fmt::X3)), // btype
        0xD => Some((Op::BrlCall, Fmt::X4)),
        _ => None,
    }
}
