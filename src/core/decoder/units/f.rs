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

//! F-unit (floating-point) matcher

use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one F-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    match major(bits) {
        0x0 => {
            if field(bits, 33, 1) == 0 { // x
                match field(bits, 27, 6) { // x6
                    0x0 => Some((Op::BreakF, Fmt::F15)),
                    0x1 => {
                        if field(bits, 26, 1) == 0 { // y
                            Some((Op::NopF, Fmt::F16))
                        } else {
                            Some((Op::HintF, Fmt::F16))
                        }
                    }
                    0x4 => Some((Op::Fsetc, Fmt::F12)),
                    0x5 => Some((Op::Fclrf, Fmt::F13)),
                    0x8 => Some((Op::Fchkf, Fmt::F14)),
                    0x10 => Some((Op::FmergeS, Fmt::F9)),
                    0x11 => Some((Op::FmergeNs, Fmt::F9)),
                    0x12 => Some((Op::FmergeSe, Fmt::F9)),
                    0x14 => Some((Op::Fmin, Fmt::F8)),
                    0x15 => Some((Op::Fmax, Fmt::F8)),
                    0x16 => Some((Op::Famin, Fmt::F8)),
                    0x17 => Some((Op::Famax, Fmt::F8)),
                    0x18 => Some((Op::FcvtFx, Fmt::F10)),
                    0x19 => Some((Op::FcvtFxu, Fmt::F10)),
                    0x1A => Some((Op::FcvtFxTrunc, Fmt::F10)),
                    0x1B => Some((Op::FcvtFxuTrunc, Fmt::F10)),
                    0x1C => Some((Op::FcvtXf, Fmt::F11)),
                    0x28 => Some((Op::Fpack, Fmt::F9)),
                    0x2C => Some((Op::Fand, Fmt::F9)),
                    0x2D => Some((Op::Fandcm, Fmt::F9)),
                    0x2E => Some((Op::For, Fmt::F9)),
                    0x2F => Some((Op::Fxor, Fmt::F9)),
                    0x34 => Some((Op::Fswap, Fmt::F9)),
                    0x35 => Some((Op::FswapNl, Fmt::F9)),
                    0x36 => Some((Op::FswapNr, Fmt::F9)),
                    0x39 => Some((Op::FmixLr, Fmt::F9)),
                    0x3A => Some((Op::FmixR, Fmt::F9)),
                    0x3B => Some((Op::FmixL, Fmt::F9)),
                    0x3C => Some((Op::FsxtR, Fmt::F9)),
                    0x3D => Some((Op::FsxtL, Fmt::F9)),
                    _ => None,
                }
            } else if field(bits, 36, 1) == 0 { // q
                Some((Op::Frcpa, Fmt::F6))
            } else {
                Some((Op::Frsqrta, Fmt::F7))
            }
        }
        0x1 => {
            if field(bits, 33, 1) == 0 { // x
                match field(bits, 27, 6) { // x6
                    0x10 => Some((Op::FpmergeS, Fmt::F9)),
                    0x11 => Some((Op::FpmergeNs, Fmt::F9)),
                    0x12 => Some((Op::FpmergeSe, Fmt::F9)),
                    0x14 => Some((Op::Fpmin, Fmt::F8)),
                    0x15 => Some((Op::Fpmax, Fmt::F8)),
                    0x16 => Some((Op::Fpamin, Fmt::F8)),
                    0x17 => Some((Op::Fpamax, Fmt::F8)),
                    0x18 => Some((Op::FpcvtFx, Fmt::F10)),
                    0x19 => Some((Op::FpcvtFxu, Fmt::F10)),
                    0x1A => Some((Op::FpcvtFxTrunc, Fmt::F10)),
                    0x1B => Some((Op::FpcvtFxuTrunc, Fmt::F10)),
                    0x30 => Some((Op::FpcmpEq, Fmt::F8)),
                    0x31 => Some((Op::FpcmpLt, Fmt::F8)),
                    0x32 => Some((Op::FpcmpLe, Fmt::F8)),
                    0x33 => Some((Op::FpcmpUnord, Fmt::F8)),
                    0x34 => Some((Op::FpcmpNeq, Fmt::F8)),
                    0x35 => Some((Op::FpcmpNlt, Fmt::F8)),
                    0x36 => Some((Op::FpcmpNle, Fmt::F8)),
                    0x37 => Some((Op::FpcmpOrd, Fmt::F8)),
                    _ => None,
                }
            } else if field(bits, 36, 1) == 0 { // q
                Some((Op::Fprcpa, Fmt::F6))
            } else {
                Some((Op::Fprsqrta, Fmt::F7))
            }
        }
        0x4 => Some((Op::Fcmp, Fmt::F4)),
        0x5 => Some((Op::FclassM, Fmt::F5)),
        0x8 => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::Fma, Fmt::F1))
            } else {
                Some((Op::FmaS, Fmt::F1))
            }
        }
        0x9 => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::FmaD, Fmt::F1))
            } else {
                Some((Op::Fpma, Fmt::F1))
            }
        }
        0xA => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::Fms, Fmt::F1))
            } else {
                Some((Op::FmsS, Fmt::F1))
            }
        }
        0xB => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::FmsD, Fmt::F1))
            } else {
                Some((Op::Fpms, Fmt::F1))
            }
        }
        0xC => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::Fnma, Fmt::F1))
            } else {
                Some((Op::FnmaS, Fmt::F1))
            }
        }
        0xD => {
            if field(bits, 36, 1) == 0 { // x
                Some((Op::FnmaD, Fmt::F1))
            } else {
                Some((Op::Fpnma, Fmt::F1))
            }
        }
        0xE => {
            if field(bits, 36, 1) == 1 { // x
                match field(bits, 34, 2) { // x2
                    0x0 => Some((Op::XmaL, Fmt::F2)),
                    0x2 => Some((Op::XmaHu, Fmt::F2)),
                    0x3 => Some((Op::XmaH, Fmt::F2)),
                    _ => None,
                }
            } else {
                Some((Op::Fselect, Fmt::F3))
            }
        }
        _ => None,
    }
}
