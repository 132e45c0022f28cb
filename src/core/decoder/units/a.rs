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

//! A-unit (integer ALU) matcher
//!
//! Shared by the I and M units for major opcodes 8 through 0xE.

use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one A-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    match major(bits) {
        0x8 => match field(bits, 34, 2) { // x2a
            0x0 if field(bits, 33, 1) == 0 => match field(bits, 29, 4) { // ve, x4
                0x0 if field(bits, 27, 2) <= 1 => Some((Op::Add, Fmt::A1)), // x2b
                0x1 if field(bits, 27, 2) <= 1 => Some((Op::Sub, Fmt::A1)), // x2b
                0x2 if field(bits, 27, 2) == 0 => Some((Op::Addp4, Fmt::A1)), // x2b
                0x3 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::And, Fmt::A1)),
                    0x1 => Some((Op::Andcm, Fmt::A1)),
                    0x2 => Some((Op::Or, Fmt::A1)),
                    0x3 => Some((Op::Xor, Fmt::A1)),
                    _ => None,
                },
                0xB => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::And, Fmt::A3)),
                    0x1 => Some((Op::Andcm, Fmt::A3)),
                    0x2 => Some((Op::Or, Fmt::A3)),
                    0x3 => Some((Op::Xor, Fmt::A3)),
                    _ => None,
                },
                0x4 => Some((Op::Shladd, Fmt::A2)),
                0x6 => Some((Op::Shladdp4, Fmt::A2)),
                0x9 if field(bits, 27, 2) == 1 => Some((Op::Sub, Fmt::A3)), // x2b
                _ => None,
            },
            0x1 => match field(bits, 29, 8) { // za + x2a + zb + x4
                0x20 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Padd1, Fmt::A9)),
                    0x1 => Some((Op::Padd1Sss, Fmt::A9)),
                    0x2 => Some((Op::Padd1Uuu, Fmt::A9)),
                    0x3 => Some((Op::Padd1Uus, Fmt::A9)),
                    _ => None,
                },
                0x21 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Psub1, Fmt::A9)),
                    0x1 => Some((Op::Psub1Sss, Fmt::A9)),
                    0x2 => Some((Op::Psub1Uuu, Fmt::A9)),
                    0x3 => Some((Op::Psub1Uus, Fmt::A9)),
                    _ => None,
                },
                0x22 => match field(bits, 27, 2) { // x2b
                    0x2 => Some((Op::Pavg1, Fmt::A9)),
                    0x3 => Some((Op::Pavg1Raz, Fmt::A9)),
                    _ => None,
                },
                0x23 if field(bits, 27, 2) == 2 => Some((Op::Pavgsub1, Fmt::A9)), // x2b
                0x29 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Pcmp1Eq, Fmt::A9)),
                    0x1 => Some((Op::Pcmp1Gt, Fmt::A9)),
                    _ => None,
                },
                0x30 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Padd2, Fmt::A9)),
                    0x1 => Some((Op::Padd2Sss, Fmt::A9)),
                    0x2 => Some((Op::Padd2Uuu, Fmt::A9)),
                    0x3 => Some((Op::Padd2Uus, Fmt::A9)),
                    _ => None,
                },
                0x31 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Psub2, Fmt::A9)),
                    0x1 => Some((Op::Psub2Sss, Fmt::A9)),
                    0x2 => Some((Op::Psub2Uuu, Fmt::A9)),
                    0x3 => Some((Op::Psub2Uus, Fmt::A9)),
                    _ => None,
                },
                0x32 => match field(bits, 27, 2) { // x2b
                    0x2 => Some((Op::Pavg2, Fmt::A9)),
                    0x3 => Some((Op::Pavg2Raz, Fmt::A9)),
                    _ => None,
                },
                0x33 if field(bits, 27, 2) == 2 => Some((Op::Pavgsub2, Fmt::A9)), // x2b
                0x34 => Some((Op::Pshladd2, Fmt::A10)),
                0x36 => Some((Op::Pshradd2, Fmt::A10)),
                0x39 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Pcmp2Eq, Fmt::A9)),
                    0x1 => Some((Op::Pcmp2Gt, Fmt::A9)),
                    _ => None,
                },
                0xA0 if field(bits, 27, 2) == 0 => Some((Op::Padd4, Fmt::A9)), // x2b
                0xA1 if field(bits, 27, 2) == 0 => Some((Op::Psub4, Fmt::A9)), // x2b
                0xA9 => match field(bits, 27, 2) { // x2b
                    0x0 => Some((Op::Pcmp4Eq, Fmt::A9)),
                    0x1 => Some((Op::Pcmp4Gt, Fmt::A9)),
                    _ => None,
                },
                _ => None,
            },
            0x2 if field(bits, 33, 1) == 0 => Some((Op::Adds, Fmt::A4)), // ve
            0x3 if field(bits, 33, 1) == 0 => Some((Op::Addp4, Fmt::A4)), // ve
            _ => None,
        },
        0x9 => Some((Op::Addl, Fmt::A5)),
        0xC | 0xD | 0xE => {
            if field(bits, 12, 1) == 0 { // c
                match field(bits, 33, 8) { // maj + tb + x2 + ta
                    0xC0 => Some((Op::CmpLt, Fmt::A6)),
                    0xC1 => Some((Op::CmpEqAnd, Fmt::A6)),
                    0xC2 => Some((Op::Cmp4Lt, Fmt::A6)),
                    0xC3 => Some((Op::Cmp4EqAnd, Fmt::A6)),
                    0xC4 | 0xCC => Some((Op::CmpLt, Fmt::A8)),
                    0xC5 | 0xCD => Some((Op::CmpEqAnd, Fmt::A8)),
                    0xC6 | 0xCE => Some((Op::Cmp4Lt, Fmt::A8)),
                    0xC7 | 0xCF => Some((Op::Cmp4EqAnd, Fmt::A8)),
                    0xC8 => Some((Op::CmpGtAnd, Fmt::A7)),
                    0xC9 => Some((Op::CmpGeAnd, Fmt::A7)),
                    0xCA => Some((Op::Cmp4GtAnd, Fmt::A7)),
                    0xCB => Some((Op::Cmp4GeAnd, Fmt::A7)),
                    0xD0 => Some((Op::CmpLtu, Fmt::A6)),
                    0xD1 => Some((Op::CmpEqOr, Fmt::A6)),
                    0xD2 => Some((Op::Cmp4Ltu, Fmt::A6)),
                    0xD3 => Some((Op::Cmp4EqOr, Fmt::A6)),
                    0xD4 | 0xDC => Some((Op::CmpLtu, Fmt::A8)),
                    0xD5 | 0xDD => Some((Op::CmpEqOr, Fmt::A8)),
                    0xD6 | 0xDE => Some((Op::Cmp4Ltu, Fmt::A8)),
                    0xD7 | 0xDF => Some((Op::Cmp4EqOr, Fmt::A8)),
                    0xD8 => Some((Op::CmpGtOr, Fmt::A7)),
                    0xD9 => Some((Op::CmpGeOr, Fmt::A7)),
                    0xDA => Some((Op::Cmp4GtOr, Fmt::A7)),
                    0xDB => Some((Op::Cmp4GeOr, Fmt::A7)),
                    0xE0 => Some((Op::CmpEq, Fmt::A6)),
                    0xE1 => Some((Op::CmpEqOrAndcm, Fmt::A6)),
                    0xE2 => Some((Op::Cmp4Eq, Fmt::A6)),
                    0xE3 => Some((Op::Cmp4EqOrAndcm, Fmt::A6)),
                    0xE4 | 0xEC => Some((Op::CmpEq, Fmt::A8)),
                    0xE5 | 0xED => Some((Op::CmpEqOrAndcm, Fmt::A8)),
                    0xE6 | 0xEE => Some((Op::Cmp4Eq, Fmt::A8)),
                    0xE7 | 0xEF => Some((Op::Cmp4EqOrAndcm, Fmt::A8)),
                    0xE8 => Some((Op::CmpGtOrAndcm, Fmt::A7)),
                    0xE9 => Some((Op::CmpGeOrAndcm, Fmt::A7)),
                    0xEA => Some((Op::Cmp4GtOrAndcm, Fmt::A7)),
                    0xEB => Some((Op::Cmp4GeOrAndcm, Fmt::A7)),
                    _ => None,
                }
            } else {
                match field(bits, 33, 8) { // maj + tb + x2 + ta
                    0xC0 => Some((Op::CmpLtUnc, Fmt::A6)),
                    0xC1 => Some((Op::CmpNeAnd, Fmt::A6)),
                    0xC2 => Some((Op::Cmp4LtUnc, Fmt::A6)),
                    0xC3 => Some((Op::Cmp4NeAnd, Fmt::A6)),
                    0xC4 | 0xCC => Some((Op::CmpLtUnc, Fmt::A8)),
                    0xC5 | 0xCD => Some((Op::CmpNeAnd, Fmt::A8)),
                    0xC6 | 0xCE => Some((Op::Cmp4LtUnc, Fmt::A8)),
                    0xC7 | 0xCF => Some((Op::Cmp4NeAnd, Fmt::A8)),
                    0xC8 => Some((Op::CmpLeAnd, Fmt::A7)),
                    0xC9 => Some((Op::CmpLtAnd, Fmt::A7)),
                    0xCA => Some((Op::Cmp4LeAnd, Fmt::A7)),
                    0xCB => Some((Op::Cmp4LtAnd, Fmt::A7)),
                    0xD0 => Some((Op::CmpLtuUnc, Fmt::A6)),
                    0xD1 => Some((Op::CmpNeOr, Fmt::A6)),
                    0xD2 => Some((Op::Cmp4LtuUnc, Fmt::A6)),
                    0xD3 => Some((Op::Cmp4NeOr, Fmt::A6)),
                    0xD4 | 0xDC => Some((Op::CmpLtuUnc, Fmt::A8)),
                    0xD5 | 0xDD => Some((Op::CmpNeOr, Fmt::A8)),
                    0xD6 | 0xDE => Some((Op::Cmp4LtuUnc, Fmt::A8)),
                    0xD7 | 0xDF => Some((Op::Cmp4NeOr, Fmt::A8)),
                    0xD8 => Some((Op::CmpLeOr, Fmt::A7)),
                    0xD9 => Some((Op::CmpLtOr, Fmt::A7)),
                    0xDA => Some((Op::Cmp4LeOr, Fmt::A7)),
                    0xDB => Some((Op::Cmp4LtOr, Fmt::A7)),
                    0xE0 => Some((Op::CmpEqUnc, Fmt::A6)),
                    0xE1 => Some((Op::CmpNeOrAndcm, Fmt::A6)),
                    0xE2 => Some((Op::Cmp4EqUnc, Fmt::A6)),
                    0xE3 => Some((Op::Cmp4NeOrAndcm, Fmt::A6)),
                    0xE4 | 0xEC => Some((Op::CmpEqUnc, Fmt::A8)),
                    0xE5 | 0xED => Some((Op::CmpNeOrAndcm, Fmt::A8)),
                    0xE6 | 0xEE => Some((Op::Cmp4EqUnc, Fmt::A8)),
                    0xE7 | 0xEF => Some((Op::Cmp4NeOrAndcm, Fmt::A8)),
                    0xE8 => Some((Op::CmpLeOrAndcm, Fmt::A7)),
                    0xE9 => Some((Op::CmpLtOrAndcm, Fmt::A7)),
                    0xEA => Some((Op::Cmp4LeOrAndcm, Fmt::A7)),
                    0xEB => Some((Op::Cmp4LtOrAndcm, Fmt::A7)),
                    _ => None,
                }
            }
        }
        _ => None,
    }
}
