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

//! B-unit (branch) matcher

use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one B-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    match major(bits) {
        0x0 => match field(bits, 27, 6) { // x6
            0x0 => Some((Op::BreakB, Fmt::B9)),
            0x2 => Some((Op::Cover, Fmt::B8)),
            0x4 => Some((Op::Clrrrb, Fmt::B8)),
            0x5 => Some((Op::ClrrrbPr, Fmt::B8)),
            0x8 => Some((Op::Rfi, Fmt::B8)),
            0xC => Some((Op::Bsw0, Fmt::B8)),
            0xD => Some((Op::Bsw1, Fmt::B8)),
            0x10 => Some((Op::Epc, Fmt::B8)),
            0x18 => Some((Op::Vmsw0, Fmt::B8)),
            0x19 => Some((Op::Vmsw1, Fmt::B8)),
            0x20 => match field(bits, 6, 3) { // btype
                0x0 => Some((Op::BrCond, Fmt::B4)),
                0x1 => Some((Op::BrIa, Fmt::B4)),
                _ => None,
            },
            0x21 if field(bits, 6, 3) == 4 => Some((Op::BrRet, Fmt::B4)), // btype
            _ => None,
        },
        0x1 => Some((Op::BrCall, Fmt::B5)),
        0x2 => match field(bits, 27, 6) { // x6
            0x0 => Some((Op::NopB, Fmt::B9)),
            0x1 => Some((Op::HintB, Fmt::B9)),
            0x10 => Some((Op::Brp, Fmt::B7)),
            0x11 => Some((Op::BrpRet, Fmt::B7)),
            _ => None,
        },
        0x4 => match field(bits, 6, 3) { // btype
            0x0 => Some((Op::BrCond, Fmt::B1)),
            0x2 => Some((Op::BrWexit, Fmt::B1)),
            0x3 => Some((Op::BrWtop, Fmt::B1)),
            0x5 => Some((Op::BrCloop, Fmt::B2)),
            0x6 => Some((Op::BrCexit, Fmt::B2)),
            0x7 => Some((Op::BrCtop, Fmt::B2)),
            _ => None,
        },
        0x5 => Some((Op::BrCall, Fmt::B3)),
        0x7 => Some((Op::Brp, Fmt::B6)),
        _ => None,
    }
}
