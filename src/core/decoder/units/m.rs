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

//! M-unit (memory) matcher

use super::a;
use crate::core::bits::{field, major};
use crate::core::decoder::opcode::DecodeOp as Op;
use crate::core::decoder::types::Format as Fmt;

/// Match one M-unit syllable to its decode-level opcode and operand format
pub(crate) fn decode(bits: u64) -> Option<(Op, Fmt)> {
    if major(bits) >= 8 {
        return a::decode(bits);
    }

    match major(bits) {
        0x0 => match field(bits, 33, 3) { // x3
            0x0 => match field(bits, 27, 6) { // x6 (x4 + x2)
                0x0 => Some((Op::BreakM, Fmt::M37)),
                0x1 => {
                    if field(bits, 26, 1) == 0 { // y
                        Some((Op::NopM, Fmt::M48))
                    } else {
                        Some((Op::HintM, Fmt::M48))
                    }
                }
                0x4 | 0x14 | 0x24 | 0x34 => Some((Op::Sum, Fmt::M44)),
                0x5 | 0x15 | 0x25 | 0x35 => Some((Op::Rum, Fmt::M44)),
                0x6 | 0x16 | 0x26 | 0x36 => Some((Op::Ssm, Fmt::M44)),
                0x7 | 0x17 | 0x27 | 0x37 => Some((Op::Rsm, Fmt::M44)),
                0xA => Some((Op::Loadrs, Fmt::M25)),
                0xC => Some((Op::Flushrs, Fmt::M25)),
                0x10 => Some((Op::Invala, Fmt::M24)),
                0x12 => Some((Op::InvalaE, Fmt::M26)),
                0x13 => Some((Op::InvalaE, Fmt::M27)),
                0x20 => Some((Op::Fwb, Fmt::M24)),
                0x22 => Some((Op::Mf, Fmt::M24)),
                0x23 => Some((Op::MfA, Fmt::M24)),
                0x28 => Some((Op::MovM, Fmt::M30)),
                0x30 => Some((Op::SrlzD, Fmt::M24)),
                0x31 => Some((Op::SrlzI, Fmt::M24)),
                0x33 => Some((Op::SyncI, Fmt::M24)),
                _ => None,
            },
            0x4 => Some((Op::ChkANc, Fmt::M22)),
            0x5 => Some((Op::ChkAClr, Fmt::M22)),
            0x6 => Some((Op::ChkANc, Fmt::M23)),
            0x7 => Some((Op::ChkAClr, Fmt::M23)),
            _ => None,
        },
        0x1 => match field(bits, 33, 3) { // x3
            0x0 => match field(bits, 27, 6) { // x6 (x4 + x2)
                0x0 => Some((Op::MovRr, Fmt::M42)),
                0x1 => Some((Op::MovDbr, Fmt::M42)),
                0x2 => Some((Op::MovIbr, Fmt::M42)),
                0x3 => Some((Op::MovPkr, Fmt::M42)),
                0x4 => Some((Op::MovPmc, Fmt::M42)),
                0x5 => Some((Op::MovPmd, Fmt::M42)),
                0x6 => Some((Op::MovMsr, Fmt::M42)),
                0x9 => Some((Op::PtcL, Fmt::M45)),
                0xA => Some((Op::PtcG, Fmt::M45)),
                0xB => Some((Op::PtcGa, Fmt::M45)),
                0xC => Some((Op::PtrD, Fmt::M45)),
                0xD => Some((Op::PtrI, Fmt::M45)),
                0xE => Some((Op::ItrD, Fmt::M42)),
                0xF => Some((Op::ItrI, Fmt::M42)),
                0x10 => Some((Op::MovRr, Fmt::M43)),
                0x11 => Some((Op::MovDbr, Fmt::M43)),
                0x12 => Some((Op::MovIbr, Fmt::M43)),
                0x13 => Some((Op::MovPkr, Fmt::M43)),
                0x14 => Some((Op::MovPmc, Fmt::M43)),
                0x15 => Some((Op::MovPmd, Fmt::M43)),
                0x16 => Some((Op::MovMsr, Fmt::M43)),
                0x17 => Some((Op::MovCpuid, Fmt::M43)),
                0x18 => Some((Op::ProbeR, Fmt::M39)),
                0x19 => Some((Op::ProbeW, Fmt::M39)),
                0x1A => Some((Op::Thash, Fmt::M46)),
                0x1B => Some((Op::Ttag, Fmt::M46)),
                0x1E => Some((Op::Tpa, Fmt::M46)),
                0x1F => Some((Op::Tak, Fmt::M46)),
                0x21 => Some((Op::MovPsrUm, Fmt::M36)),
                0x22 => Some((Op::MovM, Fmt::M31)),
                0x24 => Some((Op::Mov, Fmt::M33)),
                0x25 => Some((Op::MovPsr, Fmt::M36)),
                0x29 => Some((Op::MovPsrUm, Fmt::M35)),
                0x2A => Some((Op::MovM, Fmt::M29)),
                0x2C => Some((Op::Mov, Fmt::M32)),
                0x2D => Some((Op::MovPsrL, Fmt::M35)),
                0x2E => Some((Op::ItcD, Fmt::M41)),
                0x2F => Some((Op::ItcI, Fmt::M41)),
                0x30 => {
                    if field(bits, 36, 1) == 0 { // x
                        Some((Op::Fc, Fmt::M28))
                    } else {
                        Some((Op::FcI, Fmt::M28))
                    }
                }
                0x31 => Some((Op::ProbeRwFault, Fmt::M40)),
                0x32 => Some((Op::ProbeRFault, Fmt::M40)),
                0x33 => Some((Op::ProbeWFault, Fmt::M40)),
                0x34 => Some((Op::PtcE, Fmt::M47)),
                0x38 => Some((Op::ProbeR, Fmt::M38)),
                0x39 => Some((Op::ProbeW, Fmt::M38)),
                _ => None,
            },
            0x1 => Some((Op::ChkSM, Fmt::M20)),
            0x3 => Some((Op::ChkS, Fmt::M21)),
            0x6 => Some((Op::Alloc, Fmt::M34)),
            _ => None,
        },
        0x4 => {
            if field(bits, 27, 1) == 0 { // x
                match field(bits, 30, 7) { // x6 + m
                    0x0 => Some((Op::Ld1, Fmt::M1)),
                    0x1 => Some((Op::Ld2, Fmt::M1)),
                    0x2 => Some((Op::Ld4, Fmt::M1)),
                    0x3 => Some((Op::Ld8, Fmt::M1)),
                    0x4 => Some((Op::Ld1S, Fmt::M1)),
                    0x5 => Some((Op::Ld2S, Fmt::M1)),
                    0x6 => Some((Op::Ld4S, Fmt::M1)),
                    0x7 => Some((Op::Ld8S, Fmt::M1)),
                    0x8 => Some((Op::Ld1A, Fmt::M1)),
                    0x9 => Some((Op::Ld2A, Fmt::M1)),
                    0xA => Some((Op::Ld4A, Fmt::M1)),
                    0xB => Some((Op::Ld8A, Fmt::M1)),
                    0xC => Some((Op::Ld1Sa, Fmt::M1)),
                    0xD => Some((Op::Ld2Sa, Fmt::M1)),
                    0xE => Some((Op::Ld4Sa, Fmt::M1)),
                    0xF => Some((Op::Ld8Sa, Fmt::M1)),
                    0x10 => Some((Op::Ld1Bias, Fmt::M1)),
                    0x11 => Some((Op::Ld2Bias, Fmt::M1)),
                    0x12 => Some((Op::Ld4Bias, Fmt::M1)),
                    0x13 => Some((Op::Ld8Bias, Fmt::M1)),
                    0x14 => Some((Op::Ld1Acq, Fmt::M1)),
                    0x15 => Some((Op::Ld2Acq, Fmt::M1)),
                    0x16 => Some((Op::Ld4Acq, Fmt::M1)),
                    0x17 => Some((Op::Ld8Acq, Fmt::M1)),
                    0x1B => Some((Op::Ld8Fill, Fmt::M1)),
                    0x20 => Some((Op::Ld1CClr, Fmt::M1)),
                    0x21 => Some((Op::Ld2CClr, Fmt::M1)),
                    0x22 => Some((Op::Ld4CClr, Fmt::M1)),
                    0x23 => Some((Op::Ld8CClr, Fmt::M1)),
                    0x24 => Some((Op::Ld1CNc, Fmt::M1)),
                    0x25 => Some((Op::Ld2CNc, Fmt::M1)),
                    0x26 => Some((Op::Ld4CNc, Fmt::M1)),
                    0x27 => Some((Op::Ld8CNc, Fmt::M1)),
                    0x28 => Some((Op::Ld1CClrAcq, Fmt::M1)),
                    0x29 => Some((Op::Ld2CClrAcq, Fmt::M1)),
                    0x2A => Some((Op::Ld4CClrAcq, Fmt::M1)),
                    0x2B => Some((Op::Ld8CClrAcq, Fmt::M1)),
                    0x30 => Some((Op::St1, Fmt::M4)),
                    0x31 => Some((Op::St2, Fmt::M4)),
                    0x32 => Some((Op::St4, Fmt::M4)),
                    0x33 => Some((Op::St8, Fmt::M4)),
                    0x34 => Some((Op::St1Rel, Fmt::M4)),
                    0x35 => Some((Op::St2Rel, Fmt::M4)),
                    0x36 => Some((Op::St4Rel, Fmt::M4)),
                    0x37 => Some((Op::St8Rel, Fmt::M4)),
                    0x3B => Some((Op::St8Spill, Fmt::M4)),
                    0x40 => Some((Op::Ld1, Fmt::M2)),
                    0x41 => Some((Op::Ld2, Fmt::M2)),
                    0x42 => Some((Op::Ld4, Fmt::M2)),
                    0x43 => Some((Op::Ld8, Fmt::M2)),
                    0x44 => Some((Op::Ld1S, Fmt::M2)),
                    0x45 => Some((Op::Ld2S, Fmt::M2)),
                    0x46 => Some((Op::Ld4S, Fmt::M2)),
                    0x47 => Some((Op::Ld8S, Fmt::M2)),
                    0x48 => Some((Op::Ld1A, Fmt::M2)),
                    0x49 => Some((Op::Ld2A, Fmt::M2)),
                    0x4A => Some((Op::Ld4A, Fmt::M2)),
                    0x4B => Some((Op::Ld8A, Fmt::M2)),
                    0x4C => Some((Op::Ld1Sa, Fmt::M2)),
                    0x4D => Some((Op::Ld2Sa, Fmt::M2)),
                    0x4E => Some((Op::Ld4Sa, Fmt::M2)),
                    0x4F => Some((Op::Ld8Sa, Fmt::M2)),
                    0x50 => Some((Op::Ld1Bias, Fmt::M2)),
                    0x51 => Some((Op::Ld2Bias, Fmt::M2)),
                    0x52 => Some((Op::Ld4Bias, Fmt::M2)),
                    0x53 => Some((Op::Ld8Bias, Fmt::M2)),
                    0x54 => Some((Op::Ld1Acq, Fmt::M2)),
                    0x55 => Some((Op::Ld2Acq, Fmt::M2)),
                    0x56 => Some((Op::Ld4Acq, Fmt::M2)),
                    0x57 => Some((Op::Ld8Acq, Fmt::M2)),
                    0x5B => Some((Op::Ld8Fill, Fmt::M2)),
                    0x60 => Some((Op::Ld1CClr, Fmt::M2)),
                    0x61 => Some((Op::Ld2CClr, Fmt::M2)),
                    0x62 => Some((Op::Ld4CClr, Fmt::M2)),
                    0x63 => Some((Op::Ld8CClr, Fmt::M2)),
                    0x64 => Some((Op::Ld1CNc, Fmt::M2)),
                    0x65 => Some((Op::Ld2CNc, Fmt::M2)),
                    0x66 => Some((Op::Ld4CNc, Fmt::M2)),
                    0x67 => Some((Op::Ld8CNc, Fmt::M2)),
                    0x68 => Some((Op::Ld1CClrAcq, Fmt::M2)),
                    0x69 => Some((Op::Ld2CClrAcq, Fmt::M2)),
                    0x6A => Some((Op::Ld4CClrAcq, Fmt::M2)),
                    0x6B => Some((Op::Ld8CClrAcq, Fmt::M2)),
                    _ => None,
                }
            } else {
                match field(bits, 30, 7) { // x6 + m
                    0x0 => Some((Op::Cmpxchg1Acq, Fmt::M16)),
                    0x1 => Some((Op::Cmpxchg2Acq, Fmt::M16)),
                    0x2 => Some((Op::Cmpxchg4Acq, Fmt::M16)),
                    0x3 => Some((Op::Cmpxchg8Acq, Fmt::M16)),
                    0x4 => Some((Op::Cmpxchg1Rel, Fmt::M16)),
                    0x5 => Some((Op::Cmpxchg2Rel, Fmt::M16)),
                    0x6 => Some((Op::Cmpxchg4Rel, Fmt::M16)),
                    0x7 => Some((Op::Cmpxchg8Rel, Fmt::M16)),
                    0x8 => Some((Op::Xchg1, Fmt::M16)),
                    0x9 => Some((Op::Xchg2, Fmt::M16)),
                    0xA => Some((Op::Xchg4, Fmt::M16)),
                    0xB => Some((Op::Xchg8, Fmt::M16)),
                    0x12 => Some((Op::Fetchadd4Acq, Fmt::M17)),
                    0x13 => Some((Op::Fetchadd8Acq, Fmt::M17)),
                    0x16 => Some((Op::Fetchadd4Rel, Fmt::M17)),
                    0x17 => Some((Op::Fetchadd8Rel, Fmt::M17)),
                    0x1C => Some((Op::GetfSig, Fmt::M19)),
                    0x1D => Some((Op::GetfExp, Fmt::M19)),
                    0x1E => Some((Op::GetfS, Fmt::M19)),
                    0x1F => Some((Op::GetfD, Fmt::M19)),
                    0x20 => Some((Op::Cmp8xchg16Acq, Fmt::M16)),
                    0x24 => Some((Op::Cmp8xchg16Rel, Fmt::M16)),
                    0x28 => Some((Op::Ld16, Fmt::M1)),
                    0x2C => Some((Op::Ld16Acq, Fmt::M1)),
                    0x30 => Some((Op::St16, Fmt::M4)),
                    0x34 => Some((Op::St16Rel, Fmt::M4)),
                    _ => None,
                }
            }
        }
        0x5 => match field(bits, 30, 6) { // x6
            0x0 => Some((Op::Ld1, Fmt::M3)),
            0x1 => Some((Op::Ld2, Fmt::M3)),
            0x2 => Some((Op::Ld4, Fmt::M3)),
            0x3 => Some((Op::Ld8, Fmt::M3)),
            0x4 => Some((Op::Ld1S, Fmt::M3)),
            0x5 => Some((Op::Ld2S, Fmt::M3)),
            0x6 => Some((Op::Ld4S, Fmt::M3)),
            0x7 => Some((Op::Ld8S, Fmt::M3)),
            0x8 => Some((Op::Ld1A, Fmt::M3)),
            0x9 => Some((Op::Ld2A, Fmt::M3)),
            0xA => Some((Op::Ld4A, Fmt::M3)),
            0xB => Some((Op::Ld8A, Fmt::M3)),
            0xC => Some((Op::Ld1Sa, Fmt::M3)),
            0xD => Some((Op::Ld2Sa, Fmt::M3)),
            0xE => Some((Op::Ld4Sa, Fmt::M3)),
            0xF => Some((Op::Ld8Sa, Fmt::M3)),
            0x10 => Some((Op::Ld1Bias, Fmt::M3)),
            0x11 => Some((Op::Ld2Bias, Fmt::M3)),
            0x12 => Some((Op::Ld4Bias, Fmt::M3)),
            0x13 => Some((Op::Ld8Bias, Fmt::M3)),
            0x14 => Some((Op::Ld1Acq, Fmt::M3)),
            0x15 => Some((Op::Ld2Acq, Fmt::M3)),
            0x16 => Some((Op::Ld4Acq, Fmt::M3)),
            0x17 => Some((Op::Ld8Acq, Fmt::M3)),
            0x1B => Some((Op::Ld8Fill, Fmt::M3)),
            0x20 => Some((Op::Ld1CClr, Fmt::M3)),
            0x21 => Some((Op::Ld2CClr, Fmt::M3)),
            0x22 => Some((Op::Ld4CClr, Fmt::M3)),
            0x23 => Some((Op::Ld8CClr, Fmt::M3)),
            0x24 => Some((Op::Ld1CNc, Fmt::M3)),
            0x25 => Some((Op::Ld2CNc, Fmt::M3)),
            0x26 => Some((Op::Ld4CNc, Fmt::M3)),
            0x27 => Some((Op::Ld8CNc, Fmt::M3)),
            0x28 => Some((Op::Ld1CClrAcq, Fmt::M3)),
            0x29 => Some((Op::Ld2CClrAcq, Fmt::M3)),
            0x2A => Some((Op::Ld4CClrAcq, Fmt::M3)),
            0x2B => Some((Op::Ld8CClrAcq, Fmt::M3)),
            0x30 => Some((Op::St1, Fmt::M5)),
            0x31 => Some((Op::St2, Fmt::M5)),
            0x32 => Some((Op::St4, Fmt::M5)),
            0x33 => Some((Op::St8, Fmt::M5)),
            0x34 => Some((Op::St1Rel, Fmt::M5)),
            0x35 => Some((Op::St2Rel, Fmt::M5)),
            0x36 => Some((Op::St4Rel, Fmt::M5)),
            0x37 => Some((Op::St8Rel, Fmt::M5)),
            0x3B => Some((Op::St8Spill, Fmt::M5)),
            _ => None,
        },
        0x6 => {
            if field(bits, 27, 1) == 0 { // x
                match field(bits, 30, 7) { // x6 + m
                    0x0 => Some((Op::Ldfe, Fmt::M6)),
                    0x1 => Some((Op::Ldf8, Fmt::M6)),
                    0x2 => Some((Op::Ldfs, Fmt::M6)),
                    0x3 => Some((Op::Ldfd, Fmt::M6)),
                    0x4 => Some((Op::LdfeS, Fmt::M6)),
                    0x5 => Some((Op::Ldf8S, Fmt::M6)),
                    0x6 => Some((Op::LdfsS, Fmt::M6)),
                    0x7 => Some((Op::LdfdS, Fmt::M6)),
                    0x8 => Some((Op::LdfeA, Fmt::M6)),
                    0x9 => Some((Op::Ldf8A, Fmt::M6)),
                    0xA => Some((Op::LdfsA, Fmt::M6)),
                    0xB => Some((Op::LdfdA, Fmt::M6)),
                    0xC => Some((Op::LdfeSa, Fmt::M6)),
                    0xD => Some((Op::Ldf8Sa, Fmt::M6)),
                    0xE => Some((Op::LdfsSa, Fmt::M6)),
                    0xF => Some((Op::LdfdSa, Fmt::M6)),
                    0x1B => Some((Op::LdfFill, Fmt::M6)),
                    0x20 => Some((Op::LdfeCClr, Fmt::M6)),
                    0x21 => Some((Op::Ldf8CClr, Fmt::M6)),
                    0x22 => Some((Op::LdfsCClr, Fmt::M6)),
                    0x23 => Some((Op::LdfdCClr, Fmt::M6)),
                    0x24 => Some((Op::LdfeCNc, Fmt::M6)),
                    0x25 => Some((Op::Ldf8CNc, Fmt::M6)),
                    0x26 => Some((Op::LdfsCNc, Fmt::M6)),
                    0x27 => Some((Op::LdfdCNc, Fmt::M6)),
                    0x2C => Some((Op::Lfetch, Fmt::M13)),
                    0x2D => Some((Op::LfetchExcl, Fmt::M13)),
                    0x2E => Some((Op::LfetchFault, Fmt::M13)),
                    0x2F => Some((Op::LfetchFaultExcl, Fmt::M13)),
                    0x30 => Some((Op::Stfe, Fmt::M9)),
                    0x31 => Some((Op::Stf8, Fmt::M9)),
                    0x32 => Some((Op::Stfs, Fmt::M9)),
                    0x33 => Some((Op::Stfd, Fmt::M9)),
                    0x3B => Some((Op::StfSpill, Fmt::M9)),
                    0x40 => Some((Op::Ldfe, Fmt::M7)),
                    0x41 => Some((Op::Ldf8, Fmt::M7)),
                    0x42 => Some((Op::Ldfs, Fmt::M7)),
                    0x43 => Some((Op::Ldfd, Fmt::M7)),
                    0x44 => Some((Op::LdfeS, Fmt::M7)),
                    0x45 => Some((Op::Ldf8S, Fmt::M7)),
                    0x46 => Some((Op::LdfsS, Fmt::M7)),
                    0x47 => Some((Op::LdfdS, Fmt::M7)),
                    0x48 => Some((Op::LdfeA, Fmt::M7)),
                    0x49 => Some((Op::Ldf8A, Fmt::M7)),
                    0x4A => Some((Op::LdfsA, Fmt::M7)),
                    0x4B => Some((Op::LdfdA, Fmt::M7)),
                    0x4C => Some((Op::LdfeSa, Fmt::M7)),
                    0x4D => Some((Op::Ldf8Sa, Fmt::M7)),
                    0x4E => Some((Op::LdfsSa, Fmt::M7)),
                    0x4F => Some((Op::LdfdSa, Fmt::M7)),
                    0x5B => Some((Op::LdfFill, Fmt::M7)),
                    0x60 => Some((Op::LdfeCClr, Fmt::M7)),
                    0x61 => Some((Op::Ldf8CClr, Fmt::M7)),
                    0x62 => Some((Op::LdfsCClr, Fmt::M7)),
                    0x63 => Some((Op::LdfdCClr, Fmt::M7)),
                    0x64 => Some((Op::LdfeCNc, Fmt::M7)),
                    0x65 => Some((Op::Ldf8CNc, Fmt::M7)),
                    0x66 => Some((Op::LdfsCNc, Fmt::M7)),
                    0x67 => Some((Op::LdfdCNc, Fmt::M7)),
                    0x6C => Some((Op::Lfetch, Fmt::M14)),
                    0x6D => Some((Op::LfetchExcl, Fmt::M14)),
                    0x6E => Some((Op::LfetchFault, Fmt::M14)),
                    0x6F => Some((Op::LfetchFaultExcl, Fmt::M14)),
                    _ => None,
                }
            } else {
                match field(bits, 30, 7) { // x6 + m
                    0x1 => Some((Op::Ldfp8, Fmt::M11)),
                    0x2 => Some((Op::Ldfps, Fmt::M11)),
                    0x3 => Some((Op::Ldfpd, Fmt::M11)),
                    0x5 => Some((Op::Ldfp8S, Fmt::M11)),
                    0x6 => Some((Op::LdfpsS, Fmt::M11)),
                    0x7 => Some((Op::LdfpdS, Fmt::M11)),
                    0x9 => Some((Op::Ldfp8A, Fmt::M11)),
                    0xA => Some((Op::LdfpsA, Fmt::M11)),
                    0xB => Some((Op::LdfpdA, Fmt::M11)),
                    0xD => Some((Op::Ldfp8Sa, Fmt::M11)),
                    0xE => Some((Op::LdfpsSa, Fmt::M11)),
                    0xF => Some((Op::LdfpdSa, Fmt::M11)),
                    0x1C => Some((Op::SetfSig, Fmt::M18)),
                    0x1D => Some((Op::SetfExp, Fmt::M18)),
                    0x1E => Some((Op::SetfS, Fmt::M18)),
                    0x1F => Some((Op::SetfD, Fmt::M18)),
                    0x21 => Some((Op::Ldfp8CClr, Fmt::M11)),
                    0x22 => Some((Op::LdfpsCClr, Fmt::M11)),
                    0x23 => Some((Op::LdfpdCClr, Fmt::M11)),
                    0x25 => Some((Op::Ldfp8CNc, Fmt::M11)),
                    0x26 => Some((Op::LdfpsCNc, Fmt::M11)),
                    0x27 => Some((Op::LdfpdCNc, Fmt::M11)),
                    0x41 => Some((Op::Ldfp8, Fmt::M12)),
                    0x42 => Some((Op::Ldfps, Fmt::M12)),
                    0x43 => Some((Op::Ldfpd, Fmt::M12)),
                    0x45 => Some((Op::Ldfp8S, Fmt::M12)),
                    0x46 => Some((Op::LdfpsS, Fmt::M12)),
                    0x47 => Some((Op::LdfpdS, Fmt::M12)),
                    0x49 => Some((Op::Ldfp8A, Fmt::M12)),
                    0x4A => Some((Op::LdfpsA, Fmt::M12)),
                    0x4B => Some((Op::LdfpdA, Fmt::M12)),
                    0x4D => Some((Op::Ldfp8Sa, Fmt::M12)),
                    0x4E => Some((Op::LdfpsSa, Fmt::M12)),
                    0x4F => Some((Op::LdfpdSa, Fmt::M12)),
                    0x61 => Some((Op::Ldfp8CClr, Fmt::M12)),
                    0x62 => Some((Op::LdfpsCClr, Fmt::M12)),
                    0x63 => Some((Op::LdfpdCClr, Fmt::M12)),
                    0x65 => Some((Op::Ldfp8CNc, Fmt::M12)),
                    0x66 => Some((Op::LdfpsCNc, Fmt::M12)),
                    0x67 => Some((Op::LdfpdCNc, Fmt::M12)),
                    _ => None,
                }
            }
        }
        0x7 => match field(bits, 30, 6) { // x6
            0x0 => Some((Op::Ldfe, Fmt::M8)),
            0x1 => Some((Op::Ldf8, Fmt::M8)),
            0x2 => Some((Op::Ldfs, Fmt::M8)),
            0x3 => Some((Op::Ldfd, Fmt::M8)),
            0x4 => Some((Op::LdfeS, Fmt::M8)),
            0x5 => Some((Op::Ldf8S, Fmt::M8)),
            0x6 => Some((Op::LdfsS, Fmt::M8)),
            0x7 => Some((Op::LdfdS, Fmt::M8)),
            0x8 => Some((Op::LdfeA, Fmt::M8)),
            0x9 => Some((Op::Ldf8A, Fmt::M8)),
            0xA => Some((Op::LdfsA, Fmt::M8)),
            0xB => Some((Op::LdfdA, Fmt::M8)),
            0xC => Some((Op::LdfeSa, Fmt::M8)),
            0xD => Some((Op::Ldf8Sa, Fmt::M8)),
            0xE => Some((Op::LdfsSa, Fmt::M8)),
            0xF => Some((Op::LdfdSa, Fmt::M8)),
            0x1B => Some((Op::LdfFill, Fmt::M8)),
            0x20 => Some((Op::LdfeCClr, Fmt::M8)),
            0x21 => Some((Op::Ldf8CClr, Fmt::M8)),
            0x22 => Some((Op::LdfsCClr, Fmt::M8)),
            0x23 => Some((Op::LdfdCClr, Fmt::M8)),
            0x24 => Some((Op::LdfeCNc, Fmt::M8)),
            0x25 => Some((Op::Ldf8CNc, Fmt::M8)),
            0x26 => Some((Op::LdfsCNc, Fmt::M8)),
            0x27 => Some((Op::LdfdCNc, Fmt::M8)),
            0x2C => Some((Op::Lfetch, Fmt::M15)),
            0x2D => Some((Op::LfetchExcl, Fmt::M15)),
            0x2E => Some((Op::LfetchFault, Fmt::M15)),
            0x2F => Some((Op::LfetchFaultExcl, Fmt::M15)),
            0x30 => Some((Op::Stfe, Fmt::M10)),
            0x31 => Some((Op::Stf8, Fmt::M10)),
            0x32 => Some((Op::Stfs, Fmt::M10)),
            0x33 => Some((Op::Stfd, Fmt::M10)),
            0x3B => Some((Op::StfSpill, Fmt::M10)),
            _ => None,
        },
        _ => None,
    }
}
