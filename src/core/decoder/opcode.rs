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

//! Opcode enumerations
//!
//! [`DecodeOp`] is what the unit matchers produce: one variant per distinct
//! encoding, with completers still folded into the name (`Ld8Sa`, `CmpLtUnc`).
//! [`Opcode`] is the base mnemonic left after normalization splits those
//! completers out.

use serde::Serialize;

/// Fine-grained opcode produced by the per-unit matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeOp {
    Add,
    Addl,
    Addp4,
    Adds,
    Alloc,
    And,
    Andcm,
    BreakB,
    BreakF,
    BreakI,
    BreakM,
    BreakX,
    BrlCall,
    BrlCond,
    Brp,
    BrpRet,
    BrCall,
    BrCexit,
    BrCloop,
    BrCond,
    BrCtop,
    BrIa,
    BrRet,
    BrWexit,
    BrWtop,
    Bsw0,
    Bsw1,
    ChkAClr,
    ChkANc,
    ChkS,
    ChkSI,
    ChkSM,
    Clrrrb,
    ClrrrbPr,
    Cmp4Eq,
    Cmp4EqAnd,
    Cmp4EqOr,
    Cmp4EqOrAndcm,
    Cmp4EqUnc,
    Cmp4GeAnd,
    Cmp4GeOr,
    Cmp4GeOrAndcm,
    Cmp4GtAnd,
    Cmp4GtOr,
    Cmp4GtOrAndcm,
    Cmp4LeAnd,
    Cmp4LeOr,
    Cmp4LeOrAndcm,
    Cmp4Lt,
    Cmp4Ltu,
    Cmp4LtuUnc,
    Cmp4LtAnd,
    Cmp4LtOr,
    Cmp4LtOrAndcm,
    Cmp4LtUnc,
    Cmp4NeAnd,
    Cmp4NeOr,
    Cmp4NeOrAndcm,
    Cmp8xchg16Acq,
    Cmp8xchg16Rel,
    Cmpxchg1Acq,
    Cmpxchg1Rel,
    Cmpxchg2Acq,
    Cmpxchg2Rel,
    Cmpxchg4Acq,
    Cmpxchg4Rel,
    Cmpxchg8Acq,
    Cmpxchg8Rel,
    CmpEq,
    CmpEqAnd,
    CmpEqOr,
    CmpEqOrAndcm,
    CmpEqUnc,
    CmpGeAnd,
    CmpGeOr,
    CmpGeOrAndcm,
    CmpGtAnd,
    CmpGtOr,
    CmpGtOrAndcm,
    CmpLeAnd,
    CmpLeOr,
    CmpLeOrAndcm,
    CmpLt,
    CmpLtu,
    CmpLtuUnc,
    CmpLtAnd,
    CmpLtOr,
    CmpLtOrAndcm,
    CmpLtUnc,
    CmpNeAnd,
    CmpNeOr,
    CmpNeOrAndcm,
    Cover,
    Czx1L,
    Czx1R,
    Czx2L,
    Czx2R,
    Dep,
    DepZ,
    Epc,
    Extr,
    Famax,
    Famin,
    Fand,
    Fandcm,
    Fchkf,
    FclassM,
    Fclrf,
    Fcmp,
    FcvtFx,
    FcvtFxu,
    FcvtFxuTrunc,
    FcvtFxTrunc,
    FcvtXf,
    Fc,
    FcI,
    Fetchadd4Acq,
    Fetchadd4Rel,
    Fetchadd8Acq,
    Fetchadd8Rel,
    Flushrs,
    Fmax,
    Fma,
    FmaD,
    FmaS,
    FmergeNs,
    FmergeS,
    FmergeSe,
    Fmin,
    FmixL,
    FmixLr,
    FmixR,
    Fms,
    FmsD,
    FmsS,
    Fnma,
    FnmaD,
    FnmaS,
    For,
    Fpack,
    Fpamax,
    Fpamin,
    FpcmpEq,
    FpcmpLe,
    FpcmpLt,
    FpcmpNeq,
    FpcmpNle,
    FpcmpNlt,
    FpcmpOrd,
    FpcmpUnord,
    FpcvtFx,
    FpcvtFxu,
    FpcvtFxuTrunc,
    FpcvtFxTrunc,
    Fpma,
    Fpmax,
    FpmergeNs,
    FpmergeS,
    FpmergeSe,
    Fpmin,
    Fpms,
    Fpnma,
    Fprcpa,
    Fprsqrta,
    Frcpa,
    Frsqrta,
    Fselect,
    Fsetc,
    Fswap,
    FswapNl,
    FswapNr,
    FsxtL,
    FsxtR,
    Fwb,
    Fxor,
    GetfD,
    GetfExp,
    GetfS,
    GetfSig,
    HintB,
    HintF,
    HintI,
    HintM,
    HintX,
    Invala,
    InvalaE,
    ItcD,
    ItcI,
    ItrD,
    ItrI,
    Ld16,
    Ld16Acq,
    Ld1,
    Ld1A,
    Ld1Acq,
    Ld1Bias,
    Ld1CClr,
    Ld1CClrAcq,
    Ld1CNc,
    Ld1S,
    Ld1Sa,
    Ld2,
    Ld2A,
    Ld2Acq,
    Ld2Bias,
    Ld2CClr,
    Ld2CClrAcq,
    Ld2CNc,
    Ld2S,
    Ld2Sa,
    Ld4,
    Ld4A,
    Ld4Acq,
    Ld4Bias,
    Ld4CClr,
    Ld4CClrAcq,
    Ld4CNc,
    Ld4S,
    Ld4Sa,
    Ld8,
    Ld8A,
    Ld8Acq,
    Ld8Bias,
    Ld8CClr,
    Ld8CClrAcq,
    Ld8CNc,
    Ld8Fill,
    Ld8S,
    Ld8Sa,
    Ldf8,
    Ldf8A,
    Ldf8CClr,
    Ldf8CNc,
    Ldf8S,
    Ldf8Sa,
    Ldfd,
    LdfdA,
    LdfdCClr,
    LdfdCNc,
    LdfdS,
    LdfdSa,
    Ldfe,
    LdfeA,
    LdfeCClr,
    LdfeCNc,
    LdfeS,
    LdfeSa,
    Ldfp8,
    Ldfp8A,
    Ldfp8CClr,
    Ldfp8CNc,
    Ldfp8S,
    Ldfp8Sa,
    Ldfpd,
    LdfpdA,
    LdfpdCClr,
    LdfpdCNc,
    LdfpdS,
    LdfpdSa,
    Ldfps,
    LdfpsA,
    LdfpsCClr,
    LdfpsCNc,
    LdfpsS,
    LdfpsSa,
    Ldfs,
    LdfsA,
    LdfsCClr,
    LdfsCNc,
    LdfsS,
    LdfsSa,
    LdfFill,
    Lfetch,
    LfetchExcl,
    LfetchFault,
    LfetchFaultExcl,
    Loadrs,
    Mf,
    MfA,
    Mix1L,
    Mix1R,
    Mix2L,
    Mix2R,
    Mix4L,
    Mix4R,
    Movl,
    Mov,
    MovCpuid,
    MovDbr,
    MovI,
    MovIbr,
    MovIp,
    MovM,
    MovMsr,
    MovPkr,
    MovPmc,
    MovPmd,
    MovPr,
    MovPsr,
    MovPsrL,
    MovPsrUm,
    MovRet,
    MovRr,
    Mux1,
    Mux2,
    NopB,
    NopF,
    NopI,
    NopM,
    NopX,
    Or,
    Pack2Sss,
    Pack2Uss,
    Pack4Sss,
    Padd1,
    Padd1Sss,
    Padd1Uus,
    Padd1Uuu,
    Padd2,
    Padd2Sss,
    Padd2Uus,
    Padd2Uuu,
    Padd4,
    Pavg1,
    Pavg1Raz,
    Pavg2,
    Pavg2Raz,
    Pavgsub1,
    Pavgsub2,
    Pcmp1Eq,
    Pcmp1Gt,
    Pcmp2Eq,
    Pcmp2Gt,
    Pcmp4Eq,
    Pcmp4Gt,
    Pmax1U,
    Pmax2,
    Pmin1U,
    Pmin2,
    Pmpy2L,
    Pmpy2R,
    Pmpyshr2,
    Pmpyshr2U,
    Popcnt,
    ProbeR,
    ProbeRwFault,
    ProbeRFault,
    ProbeW,
    ProbeWFault,
    Psad1,
    Pshl2,
    Pshl4,
    Pshladd2,
    Pshr2,
    Pshr2U,
    Pshr4,
    Pshr4U,
    Pshradd2,
    Psub1,
    Psub1Sss,
    Psub1Uus,
    Psub1Uuu,
    Psub2,
    Psub2Sss,
    Psub2Uus,
    Psub2Uuu,
    Psub4,
    PtcE,
    PtcG,
    PtcGa,
    PtcL,
    PtrD,
    PtrI,
    Rfi,
    Rsm,
    Rum,
    SetfD,
    SetfExp,
    SetfS,
    SetfSig,
    Shl,
    Shladd,
    Shladdp4,
    Shrp,
    Shr,
    ShrU,
    SrlzD,
    SrlzI,
    Ssm,
    St16,
    St16Rel,
    St1,
    St1Rel,
    St2,
    St2Rel,
    St4,
    St4Rel,
    St8,
    St8Rel,
    St8Spill,
    Stf8,
    Stfd,
    Stfe,
    Stfs,
    StfSpill,
    Sub,
    Sum,
    Sxt1,
    Sxt2,
    Sxt4,
    SyncI,
    Tak,
    TbitNzAnd,
    TbitNzOr,
    TbitNzOrAndcm,
    TbitZ,
    TbitZAnd,
    TbitZOr,
    TbitZOrAndcm,
    TbitZUnc,
    TfNzAnd,
    TfNzOr,
    TfNzOrAndcm,
    TfZ,
    TfZAnd,
    TfZOr,
    TfZOrAndcm,
    TfZUnc,
    Thash,
    TnatNzAnd,
    TnatNzOr,
    TnatNzOrAndcm,
    TnatZ,
    TnatZAnd,
    TnatZOr,
    TnatZOrAndcm,
    TnatZUnc,
    Tpa,
    Ttag,
    Unpack1H,
    Unpack1L,
    Unpack2H,
    Unpack2L,
    Unpack4H,
    Unpack4L,
    Vmsw0,
    Vmsw1,
    Xchg1,
    Xchg2,
    Xchg4,
    Xchg8,
    XmaH,
    XmaHu,
    XmaL,
    Xor,
    Zxt1,
    Zxt2,
    Zxt4,
}

impl DecodeOp {
    /// Every decode-level opcode, in declaration order
    pub const ALL: [DecodeOp; 458] = [
        DecodeOp::Add,
        DecodeOp::Addl,
        DecodeOp::Addp4,
        DecodeOp::Adds,
        DecodeOp::Alloc,
        DecodeOp::And,
        DecodeOp::Andcm,
        DecodeOp::BreakB,
        DecodeOp::BreakF,
        DecodeOp::BreakI,
        DecodeOp::BreakM,
        DecodeOp::BreakX,
        DecodeOp::BrlCall,
        DecodeOp::BrlCond,
        DecodeOp::Brp,
        DecodeOp::BrpRet,
        DecodeOp::BrCall,
        DecodeOp::BrCexit,
        DecodeOp::BrCloop,
        DecodeOp::BrCond,
        DecodeOp::BrCtop,
        DecodeOp::BrIa,
        DecodeOp::BrRet,
        DecodeOp::BrWexit,
        DecodeOp::BrWtop,
        DecodeOp::Bsw0,
        DecodeOp::Bsw1,
        DecodeOp::ChkAClr,
        DecodeOp::ChkANc,
        DecodeOp::ChkS,
        DecodeOp::ChkSI,
        DecodeOp::ChkSM,
        DecodeOp::Clrrrb,
        DecodeOp::ClrrrbPr,
        DecodeOp::Cmp4Eq,
        DecodeOp::Cmp4EqAnd,
        DecodeOp::Cmp4EqOr,
        DecodeOp::Cmp4EqOrAndcm,
        DecodeOp::Cmp4EqUnc,
        DecodeOp::Cmp4GeAnd,
        DecodeOp::Cmp4GeOr,
        DecodeOp::Cmp4GeOrAndcm,
        DecodeOp::Cmp4GtAnd,
        DecodeOp::Cmp4GtOr,
        DecodeOp::Cmp4GtOrAndcm,
        DecodeOp::Cmp4LeAnd,
        DecodeOp::Cmp4LeOr,
        DecodeOp::Cmp4LeOrAndcm,
        DecodeOp::Cmp4Lt,
        DecodeOp::Cmp4Ltu,
        DecodeOp::Cmp4LtuUnc,
        DecodeOp::Cmp4LtAnd,
        DecodeOp::Cmp4LtOr,
        DecodeOp::Cmp4LtOrAndcm,
        DecodeOp::Cmp4LtUnc,
        DecodeOp::Cmp4NeAnd,
        DecodeOp::Cmp4NeOr,
        DecodeOp::Cmp4NeOrAndcm,
        DecodeOp::Cmp8xchg16Acq,
        DecodeOp::Cmp8xchg16Rel,
        DecodeOp::Cmpxchg1Acq,
        DecodeOp::Cmpxchg1Rel,
        DecodeOp::Cmpxchg2Acq,
        DecodeOp::Cmpxchg2Rel,
        DecodeOp::Cmpxchg4Acq,
        DecodeOp::Cmpxchg4Rel,
        DecodeOp::Cmpxchg8Acq,
        DecodeOp::Cmpxchg8Rel,
        DecodeOp::CmpEq,
        DecodeOp::CmpEqAnd,
        DecodeOp::CmpEqOr,
        DecodeOp::CmpEqOrAndcm,
        DecodeOp::CmpEqUnc,
        DecodeOp::CmpGeAnd,
        DecodeOp::CmpGeOr,
        DecodeOp::CmpGeOrAndcm,
        DecodeOp::CmpGtAnd,
        DecodeOp::CmpGtOr,
        DecodeOp::CmpGtOrAndcm,
        DecodeOp::CmpLeAnd,
        DecodeOp::CmpLeOr,
        DecodeOp::CmpLeOrAndcm,
        DecodeOp::CmpLt,
        DecodeOp::CmpLtu,
        DecodeOp::CmpLtuUnc,
        DecodeOp::CmpLtAnd,
        DecodeOp::CmpLtOr,
        DecodeOp::CmpLtOrAndcm,
        DecodeOp::CmpLtUnc,
        DecodeOp::CmpNeAnd,
        DecodeOp::CmpNeOr,
        DecodeOp::CmpNeOrAndcm,
        DecodeOp::Cover,
        DecodeOp::Czx1L,
        DecodeOp::Czx1R,
        DecodeOp::Czx2L,
        DecodeOp::Czx2R,
        DecodeOp::Dep,
        DecodeOp::DepZ,
        DecodeOp::Epc,
        DecodeOp::Extr,
        DecodeOp::Famax,
        DecodeOp::Famin,
        DecodeOp::Fand,
        DecodeOp::Fandcm,
        DecodeOp::Fchkf,
        DecodeOp::FclassM,
        DecodeOp::Fclrf,
        DecodeOp::Fcmp,
        DecodeOp::FcvtFx,
        DecodeOp::FcvtFxu,
        DecodeOp::FcvtFxuTrunc,
        DecodeOp::FcvtFxTrunc,
        DecodeOp::FcvtXf,
        DecodeOp::Fc,
        DecodeOp::FcI,
        DecodeOp::Fetchadd4Acq,
        DecodeOp::Fetchadd4Rel,
        DecodeOp::Fetchadd8Acq,
        DecodeOp::Fetchadd8Rel,
        DecodeOp::Flushrs,
        DecodeOp::Fmax,
        DecodeOp::Fma,
        DecodeOp::FmaD,
        DecodeOp::FmaS,
        DecodeOp::FmergeNs,
        DecodeOp::FmergeS,
        DecodeOp::FmergeSe,
        DecodeOp::Fmin,
        DecodeOp::FmixL,
        DecodeOp::FmixLr,
        DecodeOp::FmixR,
        DecodeOp::Fms,
        DecodeOp::FmsD,
        DecodeOp::FmsS,
        DecodeOp::Fnma,
        DecodeOp::FnmaD,
        DecodeOp::FnmaS,
        DecodeOp::For,
        DecodeOp::Fpack,
        DecodeOp::Fpamax,
        DecodeOp::Fpamin,
        DecodeOp::FpcmpEq,
        DecodeOp::FpcmpLe,
        DecodeOp::FpcmpLt,
        DecodeOp::FpcmpNeq,
        DecodeOp::FpcmpNle,
        DecodeOp::FpcmpNlt,
        DecodeOp::FpcmpOrd,
        DecodeOp::FpcmpUnord,
        DecodeOp::FpcvtFx,
        DecodeOp::FpcvtFxu,
        DecodeOp::FpcvtFxuTrunc,
        DecodeOp::FpcvtFxTrunc,
        DecodeOp::Fpma,
        DecodeOp::Fpmax,
        DecodeOp::FpmergeNs,
        DecodeOp::FpmergeS,
        DecodeOp::FpmergeSe,
        DecodeOp::Fpmin,
        DecodeOp::Fpms,
        DecodeOp::Fpnma,
        DecodeOp::Fprcpa,
        DecodeOp::Fprsqrta,
        DecodeOp::Frcpa,
        DecodeOp::Frsqrta,
        DecodeOp::Fselect,
        DecodeOp::Fsetc,
        DecodeOp::Fswap,
        DecodeOp::FswapNl,
        DecodeOp::FswapNr,
        DecodeOp::FsxtL,
        DecodeOp::FsxtR,
        DecodeOp::Fwb,
        DecodeOp::Fxor,
        DecodeOp::GetfD,
        DecodeOp::GetfExp,
        DecodeOp::GetfS,
        DecodeOp::GetfSig,
        DecodeOp::HintB,
        DecodeOp::HintF,
        DecodeOp::HintI,
        DecodeOp::HintM,
        DecodeOp::HintX,
        DecodeOp::Invala,
        DecodeOp::InvalaE,
        DecodeOp::ItcD,
        DecodeOp::ItcI,
        DecodeOp::ItrD,
        DecodeOp::ItrI,
        DecodeOp::Ld16,
        DecodeOp::Ld16Acq,
        DecodeOp::Ld1,
        DecodeOp::Ld1A,
        DecodeOp::Ld1Acq,
        DecodeOp::Ld1Bias,
        DecodeOp::Ld1CClr,
        DecodeOp::Ld1CClrAcq,
        DecodeOp::Ld1CNc,
        DecodeOp::Ld1S,
        DecodeOp::Ld1Sa,
        DecodeOp::Ld2,
        DecodeOp::Ld2A,
        DecodeOp::Ld2Acq,
        DecodeOp::Ld2Bias,
        DecodeOp::Ld2CClr,
        DecodeOp::Ld2CClrAcq,
        DecodeOp::Ld2CNc,
        DecodeOp::Ld2S,
        DecodeOp::Ld2Sa,
        DecodeOp::Ld4,
        DecodeOp::Ld4A,
        DecodeOp::Ld4Acq,
        DecodeOp::Ld4Bias,
        DecodeOp::Ld4CClr,
        DecodeOp::Ld4CClrAcq,
        DecodeOp::Ld4CNc,
        DecodeOp::Ld4S,
        DecodeOp::Ld4Sa,
        DecodeOp::Ld8,
        DecodeOp::Ld8A,
        DecodeOp::Ld8Acq,
        DecodeOp::Ld8Bias,
        DecodeOp::Ld8CClr,
        DecodeOp::Ld8CClrAcq,
        DecodeOp::Ld8CNc,
        DecodeOp::Ld8Fill,
        DecodeOp::Ld8S,
        DecodeOp::Ld8Sa,
        DecodeOp::Ldf8,
        DecodeOp::Ldf8A,
        DecodeOp::Ldf8CClr,
        DecodeOp::Ldf8CNc,
        DecodeOp::Ldf8S,
        DecodeOp::Ldf8Sa,
        DecodeOp::Ldfd,
        DecodeOp::LdfdA,
        DecodeOp::LdfdCClr,
        DecodeOp::LdfdCNc,
        DecodeOp::LdfdS,
        DecodeOp::LdfdSa,
        DecodeOp::Ldfe,
        DecodeOp::LdfeA,
        DecodeOp::LdfeCClr,
        DecodeOp::LdfeCNc,
        DecodeOp::LdfeS,
        DecodeOp::LdfeSa,
        DecodeOp::Ldfp8,
        DecodeOp::Ldfp8A,
        DecodeOp::Ldfp8CClr,
        DecodeOp::Ldfp8CNc,
        DecodeOp::Ldfp8S,
        DecodeOp::Ldfp8Sa,
        DecodeOp::Ldfpd,
        DecodeOp::LdfpdA,
        DecodeOp::LdfpdCClr,
        DecodeOp::LdfpdCNc,
        DecodeOp::LdfpdS,
        DecodeOp::LdfpdSa,
        DecodeOp::Ldfps,
        DecodeOp::LdfpsA,
        DecodeOp::LdfpsCClr,
        DecodeOp::LdfpsCNc,
        DecodeOp::LdfpsS,
        DecodeOp::LdfpsSa,
        DecodeOp::Ldfs,
        DecodeOp::LdfsA,
        DecodeOp::LdfsCClr,
        DecodeOp::LdfsCNc,
        DecodeOp::LdfsS,
        DecodeOp::LdfsSa,
        DecodeOp::LdfFill,
        DecodeOp::Lfetch,
        DecodeOp::LfetchExcl,
        DecodeOp::LfetchFault,
        DecodeOp::LfetchFaultExcl,
        DecodeOp::Loadrs,
        DecodeOp::Mf,
        DecodeOp::MfA,
        DecodeOp::Mix1L,
        DecodeOp::Mix1R,
        DecodeOp::Mix2L,
        DecodeOp::Mix2R,
        DecodeOp::Mix4L,
        DecodeOp::Mix4R,
        DecodeOp::Movl,
        DecodeOp::Mov,
        DecodeOp::MovCpuid,
        DecodeOp::MovDbr,
        DecodeOp::MovI,
        DecodeOp::MovIbr,
        DecodeOp::MovIp,
        DecodeOp::MovM,
        DecodeOp::MovMsr,
        DecodeOp::MovPkr,
        DecodeOp::MovPmc,
        DecodeOp::MovPmd,
        DecodeOp::MovPr,
        DecodeOp::MovPsr,
        DecodeOp::MovPsrL,
        DecodeOp::MovPsrUm,
        DecodeOp::MovRet,
        DecodeOp::MovRr,
        DecodeOp::Mux1,
        DecodeOp::Mux2,
        DecodeOp::NopB,
        DecodeOp::NopF,
        DecodeOp::NopI,
        DecodeOp::NopM,
        DecodeOp::NopX,
        DecodeOp::Or,
        DecodeOp::Pack2Sss,
        DecodeOp::Pack2Uss,
        DecodeOp::Pack4Sss,
        DecodeOp::Padd1,
        DecodeOp::Padd1Sss,
        DecodeOp::Padd1Uus,
        DecodeOp::Padd1Uuu,
        DecodeOp::Padd2,
        DecodeOp::Padd2Sss,
        DecodeOp::Padd2Uus,
        DecodeOp::Padd2Uuu,
        DecodeOp::Padd4,
        DecodeOp::Pavg1,
        DecodeOp::Pavg1Raz,
        DecodeOp::Pavg2,
        DecodeOp::Pavg2Raz,
        DecodeOp::Pavgsub1,
        DecodeOp::Pavgsub2,
        DecodeOp::Pcmp1Eq,
        DecodeOp::Pcmp1Gt,
        DecodeOp::Pcmp2Eq,
        DecodeOp::Pcmp2Gt,
        DecodeOp::Pcmp4Eq,
        DecodeOp::Pcmp4Gt,
        DecodeOp::Pmax1U,
        DecodeOp::Pmax2,
        DecodeOp::Pmin1U,
        DecodeOp::Pmin2,
        DecodeOp::Pmpy2L,
        DecodeOp::Pmpy2R,
        DecodeOp::Pmpyshr2,
        DecodeOp::Pmpyshr2U,
        DecodeOp::Popcnt,
        DecodeOp::ProbeR,
        DecodeOp::ProbeRwFault,
        DecodeOp::ProbeRFault,
        DecodeOp::ProbeW,
        DecodeOp::ProbeWFault,
        DecodeOp::Psad1,
        DecodeOp::Pshl2,
        DecodeOp::Pshl4,
        DecodeOp::Pshladd2,
        DecodeOp::Pshr2,
        DecodeOp::Pshr2U,
        DecodeOp::Pshr4,
        DecodeOp::Pshr4U,
        DecodeOp::Pshradd2,
        DecodeOp::Psub1,
        DecodeOp::Psub1Sss,
        DecodeOp::Psub1Uus,
        DecodeOp::Psub1Uuu,
        DecodeOp::Psub2,
        DecodeOp::Psub2Sss,
        DecodeOp::Psub2Uus,
        DecodeOp::Psub2Uuu,
        DecodeOp::Psub4,
        DecodeOp::PtcE,
        DecodeOp::PtcG,
        DecodeOp::PtcGa,
        DecodeOp::PtcL,
        DecodeOp::PtrD,
        DecodeOp::PtrI,
        DecodeOp::Rfi,
        DecodeOp::Rsm,
        DecodeOp::Rum,
        DecodeOp::SetfD,
        DecodeOp::SetfExp,
        DecodeOp::SetfS,
        DecodeOp::SetfSig,
        DecodeOp::Shl,
        DecodeOp::Shladd,
        DecodeOp::Shladdp4,
        DecodeOp::Shrp,
        DecodeOp::Shr,
        DecodeOp::ShrU,
        DecodeOp::SrlzD,
        DecodeOp::SrlzI,
        DecodeOp::Ssm,
        DecodeOp::St16,
        DecodeOp::St16Rel,
        DecodeOp::St1,
        DecodeOp::St1Rel,
        DecodeOp::St2,
        DecodeOp::St2Rel,
        DecodeOp::St4,
        DecodeOp::St4Rel,
        DecodeOp::St8,
        DecodeOp::St8Rel,
        DecodeOp::St8Spill,
        DecodeOp::Stf8,
        DecodeOp::Stfd,
        DecodeOp::Stfe,
        DecodeOp::Stfs,
        DecodeOp::StfSpill,
        DecodeOp::Sub,
        DecodeOp::Sum,
        DecodeOp::Sxt1,
        DecodeOp::Sxt2,
        DecodeOp::Sxt4,
        DecodeOp::SyncI,
        DecodeOp::Tak,
        DecodeOp::TbitNzAnd,
        DecodeOp::TbitNzOr,
        DecodeOp::TbitNzOrAndcm,
        DecodeOp::TbitZ,
        DecodeOp::TbitZAnd,
        DecodeOp::TbitZOr,
        DecodeOp::TbitZOrAndcm,
        DecodeOp::TbitZUnc,
        DecodeOp::TfNzAnd,
        DecodeOp::TfNzOr,
        DecodeOp::TfNzOrAndcm,
        DecodeOp::TfZ,
        DecodeOp::TfZAnd,
        DecodeOp::TfZOr,
        DecodeOp::TfZOrAndcm,
        DecodeOp::TfZUnc,
        DecodeOp::Thash,
        DecodeOp::TnatNzAnd,
        DecodeOp::TnatNzOr,
        DecodeOp::TnatNzOrAndcm,
        DecodeOp::TnatZ,
        DecodeOp::TnatZAnd,
        DecodeOp::TnatZOr,
        DecodeOp::TnatZOrAndcm,
        DecodeOp::TnatZUnc,
        DecodeOp::Tpa,
        DecodeOp::Ttag,
        DecodeOp::Unpack1H,
        DecodeOp::Unpack1L,
        DecodeOp::Unpack2H,
        DecodeOp::Unpack2L,
        DecodeOp::Unpack4H,
        DecodeOp::Unpack4L,
        DecodeOp::Vmsw0,
        DecodeOp::Vmsw1,
        DecodeOp::Xchg1,
        DecodeOp::Xchg2,
        DecodeOp::Xchg4,
        DecodeOp::Xchg8,
        DecodeOp::XmaH,
        DecodeOp::XmaHu,
        DecodeOp::XmaL,
        DecodeOp::Xor,
        DecodeOp::Zxt1,
        DecodeOp::Zxt2,
        DecodeOp::Zxt4,
    ];
}

/// Canonical mnemonic after completers have been split out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    Add,
    Addl,
    Addp4,
    Adds,
    Alloc,
    And,
    Andcm,
    Br,
    Break,
    Brl,
    Brp,
    Bsw,
    Chk,
    Clrrrb,
    Cmp,
    Cmp4,
    Cmp8xchg16,
    Cmpxchg1,
    Cmpxchg2,
    Cmpxchg4,
    Cmpxchg8,
    Cover,
    Czx1,
    Czx2,
    Dep,
    Epc,
    Extr,
    Famax,
    Famin,
    Fand,
    Fandcm,
    Fc,
    Fchkf,
    Fclass,
    Fclrf,
    Fcmp,
    Fcvt,
    Fetchadd4,
    Fetchadd8,
    Flushrs,
    Fma,
    Fmax,
    Fmerge,
    Fmin,
    Fmix,
    Fms,
    Fnma,
    For,
    Fpack,
    Fpamax,
    Fpamin,
    Fpcmp,
    Fpcvt,
    Fpma,
    Fpmax,
    Fpmerge,
    Fpmin,
    Fpms,
    Fpnma,
    Fprcpa,
    Fprsqrta,
    Frcpa,
    Frsqrta,
    Fselect,
    Fsetc,
    Fswap,
    Fsxt,
    Fwb,
    Fxor,
    Getf,
    Hint,
    Invala,
    Itc,
    Itr,
    Ld1,
    Ld16,
    Ld2,
    Ld4,
    Ld8,
    Ldf,
    Ldf8,
    Ldfd,
    Ldfe,
    Ldfp8,
    Ldfpd,
    Ldfps,
    Ldfs,
    Lfetch,
    Loadrs,
    Mf,
    Mix1,
    Mix2,
    Mix4,
    Mov,
    Movl,
    Mux1,
    Mux2,
    Nop,
    Or,
    Pack2,
    Pack4,
    Padd1,
    Padd2,
    Padd4,
    Pavg1,
    Pavg2,
    Pavgsub1,
    Pavgsub2,
    Pcmp1,
    Pcmp2,
    Pcmp4,
    Pmax1,
    Pmax2,
    Pmin1,
    Pmin2,
    Pmpy2,
    Pmpyshr2,
    Popcnt,
    Probe,
    Psad1,
    Pshl2,
    Pshl4,
    Pshladd2,
    Pshr2,
    Pshr4,
    Pshradd2,
    Psub1,
    Psub2,
    Psub4,
    Ptc,
    Ptr,
    Rfi,
    Rsm,
    Rum,
    Setf,
    Shl,
    Shladd,
    Shladdp4,
    Shr,
    Shrp,
    Srlz,
    Ssm,
    St1,
    St16,
    St2,
    St4,
    St8,
    Stf,
    Stf8,
    Stfd,
    Stfe,
    Stfs,
    Sub,
    Sum,
    Sxt1,
    Sxt2,
    Sxt4,
    Sync,
    Tak,
    Tbit,
    Tf,
    Thash,
    Tnat,
    Tpa,
    Ttag,
    Unpack1,
    Unpack2,
    Unpack4,
    Vmsw,
    Xchg1,
    Xchg2,
    Xchg4,
    Xchg8,
    Xma,
    Xor,
    Zxt1,
    Zxt2,
    Zxt4,
}

impl Opcode {
    /// Assembler mnemonic, without completers
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Addl => "addl",
            Opcode::Addp4 => "addp4",
            Opcode::Adds => "adds",
            Opcode::Alloc => "alloc",
            Opcode::And => "and",
            Opcode::Andcm => "andcm",
            Opcode::Br => "br",
            Opcode::Break => "break",
            Opcode::Brl => "brl",
            Opcode::Brp => "brp",
            Opcode::Bsw => "bsw",
            Opcode::Chk => "chk",
            Opcode::Clrrrb => "clrrrb",
            Opcode::Cmp => "cmp",
            Opcode::Cmp4 => "cmp4",
            Opcode::Cmp8xchg16 => "cmp8xchg16",
            Opcode::Cmpxchg1 => "cmpxchg1",
            Opcode::Cmpxchg2 => "cmpxchg2",
            Opcode::Cmpxchg4 => "cmpxchg4",
            Opcode::Cmpxchg8 => "cmpxchg8",
            Opcode::Cover => "cover",
            Opcode::Czx1 => "czx1",
            Opcode::Czx2 => "czx2",
            Opcode::Dep => "dep",
            Opcode::Epc => "epc",
            Opcode::Extr => "extr",
            Opcode::Famax => "famax",
            Opcode::Famin => "famin",
            Opcode::Fand => "fand",
            Opcode::Fandcm => "fandcm",
            Opcode::Fc => "fc",
            Opcode::Fchkf => "fchkf",
            Opcode::Fclass => "fclass",
            Opcode::Fclrf => "fclrf",
            Opcode::Fcmp => "fcmp",
            Opcode::Fcvt => "fcvt",
            Opcode::Fetchadd4 => "fetchadd4",
            Opcode::Fetchadd8 => "fetchadd8",
            Opcode::Flushrs => "flushrs",
            Opcode::Fma => "fma",
            Opcode::Fmax => "fmax",
            Opcode::Fmerge => "fmerge",
            Opcode::Fmin => "fmin",
            Opcode::Fmix => "fmix",
            Opcode::Fms => "fms",
            Opcode::Fnma => "fnma",
            Opcode::For => "for",
            Opcode::Fpack => "fpack",
            Opcode::Fpamax => "fpamax",
            Opcode::Fpamin => "fpamin",
            Opcode::Fpcmp => "fpcmp",
            Opcode::Fpcvt => "fpcvt",
            Opcode::Fpma => "fpma",
            Opcode::Fpmax => "fpmax",
            Opcode::Fpmerge => "fpmerge",
            Opcode::Fpmin => "fpmin",
            Opcode::Fpms => "fpms",
            Opcode::Fpnma => "fpnma",
            Opcode::Fprcpa => "fprcpa",
            Opcode::Fprsqrta => "fprsqrta",
            Opcode::Frcpa => "frcpa",
            Opcode::Frsqrta => "frsqrta",
            Opcode::Fselect => "fselect",
            Opcode::Fsetc => "fsetc",
            Opcode::Fswap => "fswap",
            Opcode::Fsxt => "fsxt",
            Opcode::Fwb => "fwb",
            Opcode::Fxor => "fxor",
            Opcode::Getf => "getf",
            Opcode::Hint => "hint",
            Opcode::Invala => "invala",
            Opcode::Itc => "itc",
            Opcode::Itr => "itr",
            Opcode::Ld1 => "ld1",
            Opcode::Ld16 => "ld16",
            Opcode::Ld2 => "ld2",
            Opcode::Ld4 => "ld4",
            Opcode::Ld8 => "ld8",
            Opcode::Ldf => "ldf",
            Opcode::Ldf8 => "ldf8",
            Opcode::Ldfd => "ldfd",
            Opcode::Ldfe => "ldfe",
            Opcode::Ldfp8 => "ldfp8",
            Opcode::Ldfpd => "ldfpd",
            Opcode::Ldfps => "ldfps",
            Opcode::Ldfs => "ldfs",
            Opcode::Lfetch => "lfetch",
            Opcode::Loadrs => "loadrs",
            Opcode::Mf => "mf",
            Opcode::Mix1 => "mix1",
            Opcode::Mix2 => "mix2",
            Opcode::Mix4 => "mix4",
            Opcode::Mov => "mov",
            Opcode::Movl => "movl",
            Opcode::Mux1 => "mux1",
            Opcode::Mux2 => "mux2",
            Opcode::Nop => "nop",
            Opcode::Or => "or",
            Opcode::Pack2 => "pack2",
            Opcode::Pack4 => "pack4",
            Opcode::Padd1 => "padd1",
            Opcode::Padd2 => "padd2",
            Opcode::Padd4 => "padd4",
            Opcode::Pavg1 => "pavg1",
            Opcode::Pavg2 => "pavg2",
            Opcode::Pavgsub1 => "pavgsub1",
            Opcode::Pavgsub2 => "pavgsub2",
            Opcode::Pcmp1 => "pcmp1",
            Opcode::Pcmp2 => "pcmp2",
            Opcode::Pcmp4 => "pcmp4",
            Opcode::Pmax1 => "pmax1",
            Opcode::Pmax2 => "pmax2",
            Opcode::Pmin1 => "pmin1",
            Opcode::Pmin2 => "pmin2",
            Opcode::Pmpy2 => "pmpy2",
            Opcode::Pmpyshr2 => "pmpyshr2",
            Opcode::Popcnt => "popcnt",
            Opcode::Probe => "probe",
            Opcode::Psad1 => "psad1",
            Opcode::Pshl2 => "pshl2",
            Opcode::Pshl4 => "pshl4",
            Opcode::Pshladd2 => "pshladd2",
            Opcode::Pshr2 => "pshr2",
            Opcode::Pshr4 => "pshr4",
            Opcode::Pshradd2 => "pshradd2",
            Opcode::Psub1 => "psub1",
            Opcode::Psub2 => "psub2",
            Opcode::Psub4 => "psub4",
            Opcode::Ptc => "ptc",
            Opcode::Ptr => "ptr",
            Opcode::Rfi => "rfi",
            Opcode::Rsm => "rsm",
            Opcode::Rum => "rum",
            Opcode::Setf => "setf",
            Opcode::Shl => "shl",
            Opcode::Shladd => "shladd",
            Opcode::Shladdp4 => "shladdp4",
            Opcode::Shr => "shr",
            Opcode::Shrp => "shrp",
            Opcode::Srlz => "srlz",
            Opcode::Ssm => "ssm",
            Opcode::St1 => "st1",
            Opcode::St16 => "st16",
            Opcode::St2 => "st2",
            Opcode::St4 => "st4",
            Opcode::St8 => "st8",
            Opcode::Stf => "stf",
            Opcode::Stf8 => "stf8",
            Opcode::Stfd => "stfd",
            Opcode::Stfe => "stfe",
            Opcode::Stfs => "stfs",
            Opcode::Sub => "sub",
            Opcode::Sum => "sum",
            Opcode::Sxt1 => "sxt1",
            Opcode::Sxt2 => "sxt2",
            Opcode::Sxt4 => "sxt4",
            Opcode::Sync => "sync",
            Opcode::Tak => "tak",
            Opcode::Tbit => "tbit",
            Opcode::Tf => "tf",
            Opcode::Thash => "thash",
            Opcode::Tnat => "tnat",
            Opcode::Tpa => "tpa",
            Opcode::Ttag => "ttag",
            Opcode::Unpack1 => "unpack1",
            Opcode::Unpack2 => "unpack2",
            Opcode::Unpack4 => "unpack4",
            Opcode::Vmsw => "vmsw",
            Opcode::Xchg1 => "xchg1",
            Opcode::Xchg2 => "xchg2",
            Opcode::Xchg4 => "xchg4",
            Opcode::Xchg8 => "xchg8",
            Opcode::Xma => "xma",
            Opcode::Xor => "xor",
            Opcode::Zxt1 => "zxt1",
            Opcode::Zxt2 => "zxt2",
            Opcode::Zxt4 => "zxt4",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
