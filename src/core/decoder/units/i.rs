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

//! I-unit (non-ALU integer) matcher

use super::a;
use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one I-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    if major(bits) >= 8 {
        return a::decode(bits);
    }

    match major(bits) {
        0x0 => match field(bits, 33, 3) { // x3
            0x0 => match field(bits, 27, 6) { // x6
                0x0 => Some((Op::BreakI, Fmt::I19)),
                0x1 => {
                    if field(bits, 26, 1) == 0 { // y
                        Some((Op::NopI, Fmt::I18))
                    } else {
                        Some((Op::HintI, Fmt::I18))
                    }
                }
                0xA => Some((Op::MovI, Fmt::I27)),
                0x10 => Some((Op::Zxt1, Fmt::I29)),
                0x11 => Some((Op::Zxt2, Fmt::I29)),
                0x12 => Some((Op::Zxt4, Fmt::I29)),
                0x14 => Some((Op::Sxt1, Fmt::I29)),
                0x15 => Some((Op::Sxt2, Fmt::I29)),
                0x16 => Some((Op::Sxt4, Fmt::I29)),
                0x18 => Some((Op::Czx1L, Fmt::I29)),
                0x19 => Some((Op::Czx2L, Fmt::I29)),
                0x1C => Some((Op::Czx1R, Fmt::I29)),
                0x1D => Some((Op::Czx2R, Fmt::I29)),
                0x2A => Some((Op::MovI, Fmt::I26)),
                0x30 => Some((Op::MovIp, Fmt::I25)),
                0x31 => Some((Op::Mov, Fmt::I22)),
                0x32 => Some((Op::MovI, Fmt::I28)),
                0x33 => Some((Op::MovPr, Fmt::I25)),
                _ => None,
            },
            0x1 => Some((Op::ChkSI, Fmt::I20)),
            0x2 => Some((Op::Mov, Fmt::I24)),
            0x3 => Some((Op::Mov, Fmt::I23)),
            0x7 => {
                if field(bits, 22, 1) == 0 { // x
                    Some((Op::Mov, Fmt::I21))
                } else {
                    Some((Op::MovRet, Fmt::I21))
                }
            }
            _ => None,
        },
        0x4 => Some((Op::Dep, Fmt::I15)),
        0x5 => match field(bits, 33, 3) { // x + x2
            0x0 => {
                if field(bits, 36, 1) == 0 { // tb
                    match field(bits, 12, 2) { // c + y
                        0x0 => Some((Op::TbitZ, Fmt::I16)),
                        0x1 => Some((Op::TbitZUnc, Fmt::I16)),
                        0x2 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatZ, Fmt::I17))
                            } else {
                                Some((Op::TfZ, Fmt::I30))
                            }
                        }
                        0x3 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatZUnc, Fmt::I17))
                            } else {
                                Some((Op::TfZUnc, Fmt::I30))
                            }
                        }
                        _ => None,
                    }
                } else {
                    match field(bits, 12, 2) { // c + y
                        0x0 => Some((Op::TbitZAnd, Fmt::I16)),
                        0x1 => Some((Op::TbitNzAnd, Fmt::I16)),
                        0x2 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatZAnd, Fmt::I17))
                            } else {
                                Some((Op::TfZAnd, Fmt::I30))
                            }
                        }
                        0x3 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatNzAnd, Fmt::I17))
                            } else {
                                Some((Op::TfNzAnd, Fmt::I30))
                            }
                        }
                        _ => None,
                    }
                }
            }
            0x1 => {
                if field(bits, 36, 1) == 0 { // tb
                    match field(bits, 12, 2) { // c + y
                        0x0 => Some((Op::TbitZOr, Fmt::I16)),
                        0x1 => Some((Op::TbitNzOr, Fmt::I16)),
                        0x2 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatZOr, Fmt::I17))
                            } else {
                                Some((Op::TfZOr, Fmt::I30))
                            }
                        }
                        0x3 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatNzOr, Fmt::I17))
                            } else {
                                Some((Op::TfNzOr, Fmt::I30))
                            }
                        }
                        _ => None,
                    }
                } else {
                    match field(bits, 12, 2) { // c + y
                        0x0 => Some((Op::TbitZOrAndcm, Fmt::I16)),
                        0x1 => Some((Op::TbitNzOrAndcm, Fmt::I16)),
                        0x2 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatZOrAndcm, Fmt::I17))
                            } else {
                                Some((Op::TfZOrAndcm, Fmt::I30))
                            }
                        }
                        0x3 => {
                            if field(bits, 19, 1) == 0 { // x
                                Some((Op::TnatNzOrAndcm, Fmt::I17))
                            } else {
                                Some((Op::TfNzOrAndcm, Fmt::I30))
                            }
                        }
                        _ => None,
                    }
                }
            }
            0x2 => Some((Op::Extr, Fmt::I11)),
            0x3 => {
                if field(bits, 26, 1) == 0 { // y
                    Some((Op::DepZ, Fmt::I12))
                } else {
                    Some((Op::DepZ, Fmt::I13))
                }
            }
            0x6 => Some((Op::Shrp, Fmt::I10)),
            0x7 => Some((Op::Dep, Fmt::I14)),
            _ => None,
        },
        0x7 => match field(bits, 32, 5) { // ve + zb + x2a + za
            0x2 => match field(bits, 28, 4) { // x2b + x2c
                0x0 => Some((Op::Pshr2U, Fmt::I5)),
                0x1 | 0x5 | 0x9 | 0xD => Some((Op::Pmpyshr2U, Fmt::I1)),
                0x2 => Some((Op::Pshr2, Fmt::I5)),
                0x3 | 0x7 | 0xB | 0xF => Some((Op::Pmpyshr2, Fmt::I1)),
                0x4 => Some((Op::Pshl2, Fmt::I7)),
                _ => None,
            },
            0x6 => match field(bits, 28, 4) { // x2b + x2c
                0x1 => Some((Op::Pshr2U, Fmt::I6)),
                0x3 => Some((Op::Pshr2, Fmt::I6)),
                0x9 => Some((Op::Popcnt, Fmt::I9)),
                _ => None,
            },
            0x8 => match field(bits, 28, 4) { // x2b + x2c
                0x1 => Some((Op::Pmin1U, Fmt::I2)),
                0x4 => Some((Op::Unpack1H, Fmt::I2)),
                0x5 => Some((Op::Pmax1U, Fmt::I2)),
                0x6 => Some((Op::Unpack1L, Fmt::I2)),
                0x8 => Some((Op::Mix1R, Fmt::I2)),
                0xA => Some((Op::Mix1L, Fmt::I2)),
                0xB => Some((Op::Psad1, Fmt::I2)),
                _ => None,
            },
            0xA => match field(bits, 28, 4) { // x2b + x2c
                0x0 => Some((Op::Pack2Uss, Fmt::I2)),
                0x2 => Some((Op::Pack2Sss, Fmt::I2)),
                0x3 => Some((Op::Pmin2, Fmt::I2)),
                0x4 => Some((Op::Unpack2H, Fmt::I2)),
                0x6 => Some((Op::Unpack2L, Fmt::I2)),
                0x7 => Some((Op::Pmax2, Fmt::I2)),
                0x8 => Some((Op::Mix2R, Fmt::I2)),
                0xA => Some((Op::Mix2L, Fmt::I2)),
                0xD => Some((Op::Pmpy2R, Fmt::I2)),
                0xF => Some((Op::Pmpy2L, Fmt::I2)),
                _ => None,
            },
            0xC => match field(bits, 28, 4) { // x2b + x2c
                0xA => Some((Op::Mux1, Fmt::I3)),
                _ => None,
            },
            0xE => match field(bits, 28, 4) { // x2b + x2c
                0x5 => Some((Op::Pshl2, Fmt::I8)),
                0xA => Some((Op::Mux2, Fmt::I4)),
                _ => None,
            },
            0x10 => match field(bits, 28, 4) { // x2b + x2c
                0x0 => Some((Op::Pshr4U, Fmt::I5)),
                0x2 => Some((Op::Pshr4, Fmt::I5)),
                0x4 => Some((Op::Pshl4, Fmt::I7)),
                _ => None,
            },
            0x12 => match field(bits, 28, 4) { // x2b + x2c
                0x0 => Some((Op::ShrU, Fmt::I5)),
                0x2 => Some((Op::Shr, Fmt::I5)),
                0x4 => Some((Op::Shl, Fmt::I7)),
                _ => None,
            },
            0x14 => match field(bits, 28, 4) { // x2b + x2c
                0x1 => Some((Op::Pshr4U, Fmt::I6)),
                0x3 => Some((Op::Pshr4, Fmt::I6)),
                _ => None,
            },
            0x18 => match field(bits, 28, 4) { // x2b + x2c
                0x2 => Some((Op::Pack4Sss, Fmt::I2)),
                0x4 => Some((Op::Unpack4H, Fmt::I2)),
                0x6 => Some((Op::Unpack4L, Fmt::I2)),
                0x8 => Some((Op::Mix4R, Fmt::I2)),
                0xA => Some((Op::Mix4L, Fmt::I2)),
                _ => None,
            },
            0x1C => match field(bits, 28, 4) { // x2b + x2c
                0x5 => Some((Op::Pshl4, Fmt::I8)),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}
