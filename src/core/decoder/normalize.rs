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

//! Opcode normalization
//!
//! Folds the fine-grained opcodes produced by the unit matchers onto base
//! mnemonics. Each variant contributes its completers in a fixed order, and
//! moves to or from system register files also carry an operand-kind hint that
//! the extractor applies to the register operand.

use super::opcode::{DecodeOp as Op, Opcode};
use super::types::{CompleterClass as CC, CompleterType as CT, OperandKind as Kind};

/// Canonical form of a decode-level opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    /// Base mnemonic
    pub opcode: Opcode,
    /// Completers to attach, in order
    pub completers: &'static [(CC, CT)],
    /// Operand kind for the system register operand, [`Kind::None`] if unused
    pub hint: Kind,
}

impl Normalized {
    const fn hint(self, hint: Kind) -> Self {
        Self { hint, ..self }
    }
}

const fn norm(opcode: Opcode, completers: &'static [(CC, CT)]) -> Normalized {
    Normalized {
        opcode,
        completers,
        hint: Kind::None,
    }
}

/// Map a decode-level opcode onto its canonical mnemonic and completers
///
/// # Example
///
/// ```
/// use ia64dec::core::decoder::{normalize, CompleterClass, CompleterType, DecodeOp, Opcode};
///
/// let n = normalize(DecodeOp::Ld8Sa);
/// assert_eq!(n.opcode, Opcode::Ld8);
/// assert_eq!(n.completers, &[(CompleterClass::Ldtype, CompleterType::Sa)]);
/// ```
pub fn normalize(op: Op) -> Normalized {
    match op {
        Op::BrCall => norm(Opcode::Br, &[(CC::Btype, CT::Call)]),
        Op::BrCexit => norm(Opcode::Br, &[(CC::Btype, CT::Cexit)]),
        Op::BrCloop => norm(Opcode::Br, &[(CC::Btype, CT::Cloop)]),
        Op::BrCond => norm(Opcode::Br, &[(CC::Btype, CT::Cond)]),
        Op::BrCtop => norm(Opcode::Br, &[(CC::Btype, CT::Ctop)]),
        Op::BrIa => norm(Opcode::Br, &[(CC::Btype, CT::Ia)]),
        Op::BrRet => norm(Opcode::Br, &[(CC::Btype, CT::Ret)]),
        Op::BrWexit => norm(Opcode::Br, &[(CC::Btype, CT::Wexit)]),
        Op::BrWtop => norm(Opcode::Br, &[(CC::Btype, CT::Wtop)]),
        Op::BreakB => norm(Opcode::Break, &[(CC::Unit, CT::B)]),
        Op::BreakF => norm(Opcode::Break, &[(CC::Unit, CT::F)]),
        Op::BreakI => norm(Opcode::Break, &[(CC::Unit, CT::I)]),
        Op::BreakM => norm(Opcode::Break, &[(CC::Unit, CT::M)]),
        Op::BreakX => norm(Opcode::Break, &[(CC::Unit, CT::X)]),
        Op::BrlCond => norm(Opcode::Brl, &[(CC::Btype, CT::Cond)]),
        Op::BrlCall => norm(Opcode::Brl, &[(CC::Btype, CT::Call)]),
        Op::Brp => norm(Opcode::Brp, &[(CC::Btype, CT::None)]),
        Op::BrpRet => norm(Opcode::Brp, &[(CC::Btype, CT::Ret)]),
        Op::Bsw0 => norm(Opcode::Bsw, &[(CC::Bsw, CT::Zero)]),
        Op::Bsw1 => norm(Opcode::Bsw, &[(CC::Bsw, CT::One)]),
        Op::ChkAClr => norm(Opcode::Chk, &[(CC::Chk, CT::A), (CC::Aclr, CT::Clr)]),
        Op::ChkANc => norm(Opcode::Chk, &[(CC::Chk, CT::A), (CC::Aclr, CT::Nc)]),
        Op::ChkS => norm(Opcode::Chk, &[(CC::Chk, CT::S)]),
        Op::ChkSI => norm(Opcode::Chk, &[(CC::Chk, CT::S), (CC::Unit, CT::I)]),
        Op::ChkSM => norm(Opcode::Chk, &[(CC::Chk, CT::S), (CC::Unit, CT::M)]),
        Op::Clrrrb => norm(Opcode::Clrrrb, &[(CC::Clrrrb, CT::None)]),
        Op::ClrrrbPr => norm(Opcode::Clrrrb, &[(CC::Clrrrb, CT::Pr)]),
        Op::CmpEq => norm(Opcode::Cmp, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::None)]),
        Op::CmpEqAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::And)]),
        Op::CmpEqOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::Or)]),
        Op::CmpEqOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::OrAndcm)]),
        Op::CmpEqUnc => norm(Opcode::Cmp, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::Unc)]),
        Op::CmpGeAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::And)]),
        Op::CmpGeOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::Or)]),
        Op::CmpGeOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::OrAndcm)]),
        Op::CmpGtAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::And)]),
        Op::CmpGtOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::Or)]),
        Op::CmpGtOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::OrAndcm)]),
        Op::CmpLeAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Le), (CC::Ctype, CT::And)]),
        Op::CmpLeOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Le), (CC::Ctype, CT::Or)]),
        Op::CmpLeOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Le), (CC::Ctype, CT::OrAndcm)]),
        Op::CmpLt => norm(Opcode::Cmp, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::None)]),
        Op::CmpLtAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::And)]),
        Op::CmpLtOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::Or)]),
        Op::CmpLtOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::OrAndcm)]),
        Op::CmpLtUnc => norm(Opcode::Cmp, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::Unc)]),
        Op::CmpLtu => norm(Opcode::Cmp, &[(CC::Crel, CT::Ltu), (CC::Ctype, CT::None)]),
        Op::CmpLtuUnc => norm(Opcode::Cmp, &[(CC::Crel, CT::Ltu), (CC::Ctype, CT::Unc)]),
        Op::CmpNeAnd => norm(Opcode::Cmp, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::And)]),
        Op::CmpNeOr => norm(Opcode::Cmp, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::Or)]),
        Op::CmpNeOrAndcm => norm(Opcode::Cmp, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4Eq => norm(Opcode::Cmp4, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::None)]),
        Op::Cmp4EqAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::And)]),
        Op::Cmp4EqOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::Or)]),
        Op::Cmp4EqOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4EqUnc => norm(Opcode::Cmp4, &[(CC::Crel, CT::Eq), (CC::Ctype, CT::Unc)]),
        Op::Cmp4GeAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::And)]),
        Op::Cmp4GeOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::Or)]),
        Op::Cmp4GeOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ge), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4GtAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::And)]),
        Op::Cmp4GtOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::Or)]),
        Op::Cmp4GtOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Gt), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4LeAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Le), (CC::Ctype, CT::And)]),
        Op::Cmp4LeOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Le), (CC::Ctype, CT::Or)]),
        Op::Cmp4LeOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Le), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4Lt => norm(Opcode::Cmp4, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::None)]),
        Op::Cmp4LtAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::And)]),
        Op::Cmp4LtOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::Or)]),
        Op::Cmp4LtOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp4LtUnc => norm(Opcode::Cmp4, &[(CC::Crel, CT::Lt), (CC::Ctype, CT::Unc)]),
        Op::Cmp4Ltu => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ltu), (CC::Ctype, CT::None)]),
        Op::Cmp4LtuUnc => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ltu), (CC::Ctype, CT::Unc)]),
        Op::Cmp4NeAnd => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::And)]),
        Op::Cmp4NeOr => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::Or)]),
        Op::Cmp4NeOrAndcm => norm(Opcode::Cmp4, &[(CC::Crel, CT::Ne), (CC::Ctype, CT::OrAndcm)]),
        Op::Cmp8xchg16Acq => norm(Opcode::Cmp8xchg16, &[(CC::Sem, CT::Acq)]),
        Op::Cmp8xchg16Rel => norm(Opcode::Cmp8xchg16, &[(CC::Sem, CT::Rel)]),
        Op::Cmpxchg1Acq => norm(Opcode::Cmpxchg1, &[(CC::Sem, CT::Acq)]),
        Op::Cmpxchg1Rel => norm(Opcode::Cmpxchg1, &[(CC::Sem, CT::Rel)]),
        Op::Cmpxchg2Acq => norm(Opcode::Cmpxchg2, &[(CC::Sem, CT::Acq)]),
        Op::Cmpxchg2Rel => norm(Opcode::Cmpxchg2, &[(CC::Sem, CT::Rel)]),
        Op::Cmpxchg4Acq => norm(Opcode::Cmpxchg4, &[(CC::Sem, CT::Acq)]),
        Op::Cmpxchg4Rel => norm(Opcode::Cmpxchg4, &[(CC::Sem, CT::Rel)]),
        Op::Cmpxchg8Acq => norm(Opcode::Cmpxchg8, &[(CC::Sem, CT::Acq)]),
        Op::Cmpxchg8Rel => norm(Opcode::Cmpxchg8, &[(CC::Sem, CT::Rel)]),
        Op::Czx1L => norm(Opcode::Czx1, &[(CC::Lr, CT::L)]),
        Op::Czx1R => norm(Opcode::Czx1, &[(CC::Lr, CT::R)]),
        Op::Czx2L => norm(Opcode::Czx2, &[(CC::Lr, CT::L)]),
        Op::Czx2R => norm(Opcode::Czx2, &[(CC::Lr, CT::R)]),
        Op::Dep => norm(Opcode::Dep, &[(CC::Dep, CT::None)]),
        Op::DepZ => norm(Opcode::Dep, &[(CC::Dep, CT::Z)]),
        Op::Fc => norm(Opcode::Fc, &[(CC::Fc, CT::None)]),
        Op::FcI => norm(Opcode::Fc, &[(CC::Fc, CT::I)]),
        Op::FclassM => norm(Opcode::Fclass, &[(CC::Fcrel, CT::M)]),
        Op::FcvtFx => norm(Opcode::Fcvt, &[(CC::Fcvt, CT::Fx), (CC::Trunc, CT::None)]),
        Op::FcvtFxTrunc => norm(Opcode::Fcvt, &[(CC::Fcvt, CT::Fx), (CC::Trunc, CT::Trunc)]),
        Op::FcvtFxu => norm(Opcode::Fcvt, &[(CC::Fcvt, CT::Fxu), (CC::Trunc, CT::None)]),
        Op::FcvtFxuTrunc => norm(Opcode::Fcvt, &[(CC::Fcvt, CT::Fxu), (CC::Trunc, CT::Trunc)]),
        Op::FcvtXf => norm(Opcode::Fcvt, &[(CC::Fcvt, CT::Xf), (CC::Trunc, CT::None)]),
        Op::Fetchadd4Acq => norm(Opcode::Fetchadd4, &[(CC::Sem, CT::Acq)]),
        Op::Fetchadd4Rel => norm(Opcode::Fetchadd4, &[(CC::Sem, CT::Rel)]),
        Op::Fetchadd8Acq => norm(Opcode::Fetchadd8, &[(CC::Sem, CT::Acq)]),
        Op::Fetchadd8Rel => norm(Opcode::Fetchadd8, &[(CC::Sem, CT::Rel)]),
        Op::Fma => norm(Opcode::Fma, &[(CC::Pc, CT::None)]),
        Op::FmaD => norm(Opcode::Fma, &[(CC::Pc, CT::D)]),
        Op::FmaS => norm(Opcode::Fma, &[(CC::Pc, CT::S)]),
        Op::FmergeNs => norm(Opcode::Fmerge, &[(CC::Fmerge, CT::Ns)]),
        Op::FmergeS => norm(Opcode::Fmerge, &[(CC::Fmerge, CT::S)]),
        Op::FmergeSe => norm(Opcode::Fmerge, &[(CC::Fmerge, CT::Se)]),
        Op::FmixL => norm(Opcode::Fmix, &[(CC::Lr, CT::L)]),
        Op::FmixLr => norm(Opcode::Fmix, &[(CC::Lr, CT::Lr)]),
        Op::FmixR => norm(Opcode::Fmix, &[(CC::Lr, CT::R)]),
        Op::Fms => norm(Opcode::Fms, &[(CC::Pc, CT::None)]),
        Op::FmsD => norm(Opcode::Fms, &[(CC::Pc, CT::D)]),
        Op::FmsS => norm(Opcode::Fms, &[(CC::Pc, CT::S)]),
        Op::Fnma => norm(Opcode::Fnma, &[(CC::Pc, CT::None)]),
        Op::FnmaD => norm(Opcode::Fnma, &[(CC::Pc, CT::D)]),
        Op::FnmaS => norm(Opcode::Fnma, &[(CC::Pc, CT::S)]),
        Op::FpcmpEq => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Eq)]),
        Op::FpcmpLe => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Le)]),
        Op::FpcmpLt => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Lt)]),
        Op::FpcmpNeq => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Neq)]),
        Op::FpcmpNle => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Nle)]),
        Op::FpcmpNlt => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Nlt)]),
        Op::FpcmpOrd => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Ord)]),
        Op::FpcmpUnord => norm(Opcode::Fpcmp, &[(CC::Frel, CT::Unord)]),
        Op::FpcvtFx => norm(Opcode::Fpcvt, &[(CC::Fcvt, CT::Fx), (CC::Trunc, CT::None)]),
        Op::FpcvtFxTrunc => norm(Opcode::Fpcvt, &[(CC::Fcvt, CT::Fx), (CC::Trunc, CT::Trunc)]),
        Op::FpcvtFxu => norm(Opcode::Fpcvt, &[(CC::Fcvt, CT::Fxu), (CC::Trunc, CT::None)]),
        Op::FpcvtFxuTrunc => norm(Opcode::Fpcvt, &[(CC::Fcvt, CT::Fxu), (CC::Trunc, CT::Trunc)]),
        Op::FpmergeNs => norm(Opcode::Fpmerge, &[(CC::Fmerge, CT::Ns)]),
        Op::FpmergeS => norm(Opcode::Fpmerge, &[(CC::Fmerge, CT::S)]),
        Op::FpmergeSe => norm(Opcode::Fpmerge, &[(CC::Fmerge, CT::Se)]),
        Op::Fswap => norm(Opcode::Fswap, &[(CC::Fswap, CT::None)]),
        Op::FswapNl => norm(Opcode::Fswap, &[(CC::Fswap, CT::Nl)]),
        Op::FswapNr => norm(Opcode::Fswap, &[(CC::Fswap, CT::Nr)]),
        Op::FsxtL => norm(Opcode::Fsxt, &[(CC::Lr, CT::L)]),
        Op::FsxtR => norm(Opcode::Fsxt, &[(CC::Lr, CT::R)]),
        Op::GetfD => norm(Opcode::Getf, &[(CC::Getf, CT::D)]),
        Op::GetfExp => norm(Opcode::Getf, &[(CC::Getf, CT::Exp)]),
        Op::GetfS => norm(Opcode::Getf, &[(CC::Getf, CT::S)]),
        Op::GetfSig => norm(Opcode::Getf, &[(CC::Getf, CT::Sig)]),
        Op::HintB => norm(Opcode::Hint, &[(CC::Unit, CT::B)]),
        Op::HintF => norm(Opcode::Hint, &[(CC::Unit, CT::F)]),
        Op::HintI => norm(Opcode::Hint, &[(CC::Unit, CT::I)]),
        Op::HintM => norm(Opcode::Hint, &[(CC::Unit, CT::M)]),
        Op::HintX => norm(Opcode::Hint, &[(CC::Unit, CT::X)]),
        Op::Invala => norm(Opcode::Invala, &[(CC::Invala, CT::None)]),
        Op::InvalaE => norm(Opcode::Invala, &[(CC::Invala, CT::E)]),
        Op::ItcD => norm(Opcode::Itc, &[(CC::Itc, CT::D)]),
        Op::ItcI => norm(Opcode::Itc, &[(CC::Itc, CT::I)]),
        Op::ItrD => norm(Opcode::Itr, &[(CC::Itr, CT::D)]).hint(Kind::Dtr),
        Op::ItrI => norm(Opcode::Itr, &[(CC::Itr, CT::I)]).hint(Kind::Itr),
        Op::Ld1 => norm(Opcode::Ld1, &[(CC::Ldtype, CT::None)]),
        Op::Ld1A => norm(Opcode::Ld1, &[(CC::Ldtype, CT::A)]),
        Op::Ld1Acq => norm(Opcode::Ld1, &[(CC::Ldtype, CT::Acq)]),
        Op::Ld1Bias => norm(Opcode::Ld1, &[(CC::Ldtype, CT::Bias)]),
        Op::Ld1CClr => norm(Opcode::Ld1, &[(CC::Ldtype, CT::CClr)]),
        Op::Ld1CClrAcq => norm(Opcode::Ld1, &[(CC::Ldtype, CT::CClrAcq)]),
        Op::Ld1CNc => norm(Opcode::Ld1, &[(CC::Ldtype, CT::CNc)]),
        Op::Ld1S => norm(Opcode::Ld1, &[(CC::Ldtype, CT::S)]),
        Op::Ld1Sa => norm(Opcode::Ld1, &[(CC::Ldtype, CT::Sa)]),
        Op::Ld16 => norm(Opcode::Ld16, &[(CC::Ldtype, CT::None)]),
        Op::Ld16Acq => norm(Opcode::Ld16, &[(CC::Ldtype, CT::Acq)]),
        Op::Ld2 => norm(Opcode::Ld2, &[(CC::Ldtype, CT::None)]),
        Op::Ld2A => norm(Opcode::Ld2, &[(CC::Ldtype, CT::A)]),
        Op::Ld2Acq => norm(Opcode::Ld2, &[(CC::Ldtype, CT::Acq)]),
        Op::Ld2Bias => norm(Opcode::Ld2, &[(CC::Ldtype, CT::Bias)]),
        Op::Ld2CClr => norm(Opcode::Ld2, &[(CC::Ldtype, CT::CClr)]),
        Op::Ld2CClrAcq => norm(Opcode::Ld2, &[(CC::Ldtype, CT::CClrAcq)]),
        Op::Ld2CNc => norm(Opcode::Ld2, &[(CC::Ldtype, CT::CNc)]),
        Op::Ld2S => norm(Opcode::Ld2, &[(CC::Ldtype, CT::S)]),
        Op::Ld2Sa => norm(Opcode::Ld2, &[(CC::Ldtype, CT::Sa)]),
        Op::Ld4 => norm(Opcode::Ld4, &[(CC::Ldtype, CT::None)]),
        Op::Ld4A => norm(Opcode::Ld4, &[(CC::Ldtype, CT::A)]),
        Op::Ld4Acq => norm(Opcode::Ld4, &[(CC::Ldtype, CT::Acq)]),
        Op::Ld4Bias => norm(Opcode::Ld4, &[(CC::Ldtype, CT::Bias)]),
        Op::Ld4CClr => norm(Opcode::Ld4, &[(CC::Ldtype, CT::CClr)]),
        Op::Ld4CClrAcq => norm(Opcode::Ld4, &[(CC::Ldtype, CT::CClrAcq)]),
        Op::Ld4CNc => norm(Opcode::Ld4, &[(CC::Ldtype, CT::CNc)]),
        Op::Ld4S => norm(Opcode::Ld4, &[(CC::Ldtype, CT::S)]),
        Op::Ld4Sa => norm(Opcode::Ld4, &[(CC::Ldtype, CT::Sa)]),
        Op::Ld8 => norm(Opcode::Ld8, &[(CC::Ldtype, CT::None)]),
        Op::Ld8A => norm(Opcode::Ld8, &[(CC::Ldtype, CT::A)]),
        Op::Ld8Acq => norm(Opcode::Ld8, &[(CC::Ldtype, CT::Acq)]),
        Op::Ld8Bias => norm(Opcode::Ld8, &[(CC::Ldtype, CT::Bias)]),
        Op::Ld8CClr => norm(Opcode::Ld8, &[(CC::Ldtype, CT::CClr)]),
        Op::Ld8CClrAcq => norm(Opcode::Ld8, &[(CC::Ldtype, CT::CClrAcq)]),
        Op::Ld8CNc => norm(Opcode::Ld8, &[(CC::Ldtype, CT::CNc)]),
        Op::Ld8Fill => norm(Opcode::Ld8, &[(CC::Ldtype, CT::Fill)]),
        Op::Ld8S => norm(Opcode::Ld8, &[(CC::Ldtype, CT::S)]),
        Op::Ld8Sa => norm(Opcode::Ld8, &[(CC::Ldtype, CT::Sa)]),
        Op::LdfFill => norm(Opcode::Ldf, &[(CC::Fldtype, CT::Fill)]),
        Op::Ldf8 => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::None)]),
        Op::Ldf8A => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::A)]),
        Op::Ldf8CClr => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::CClr)]),
        Op::Ldf8CNc => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::CNc)]),
        Op::Ldf8S => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::S)]),
        Op::Ldf8Sa => norm(Opcode::Ldf8, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfd => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::None)]),
        Op::LdfdA => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::A)]),
        Op::LdfdCClr => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::CClr)]),
        Op::LdfdCNc => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::CNc)]),
        Op::LdfdS => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::S)]),
        Op::LdfdSa => norm(Opcode::Ldfd, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfe => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::None)]),
        Op::LdfeA => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::A)]),
        Op::LdfeCClr => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::CClr)]),
        Op::LdfeCNc => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::CNc)]),
        Op::LdfeS => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::S)]),
        Op::LdfeSa => norm(Opcode::Ldfe, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfp8 => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::None)]),
        Op::Ldfp8A => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::A)]),
        Op::Ldfp8CClr => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::CClr)]),
        Op::Ldfp8CNc => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::CNc)]),
        Op::Ldfp8S => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::S)]),
        Op::Ldfp8Sa => norm(Opcode::Ldfp8, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfpd => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::None)]),
        Op::LdfpdA => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::A)]),
        Op::LdfpdCClr => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::CClr)]),
        Op::LdfpdCNc => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::CNc)]),
        Op::LdfpdS => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::S)]),
        Op::LdfpdSa => norm(Opcode::Ldfpd, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfps => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::None)]),
        Op::LdfpsA => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::A)]),
        Op::LdfpsCClr => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::CClr)]),
        Op::LdfpsCNc => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::CNc)]),
        Op::LdfpsS => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::S)]),
        Op::LdfpsSa => norm(Opcode::Ldfps, &[(CC::Fldtype, CT::Sa)]),
        Op::Ldfs => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::None)]),
        Op::LdfsA => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::A)]),
        Op::LdfsCClr => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::CClr)]),
        Op::LdfsCNc => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::CNc)]),
        Op::LdfsS => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::S)]),
        Op::LdfsSa => norm(Opcode::Ldfs, &[(CC::Fldtype, CT::Sa)]),
        Op::Lfetch => norm(Opcode::Lfetch, &[(CC::Lftype, CT::None), (CC::Lfetch, CT::None)]),
        Op::LfetchExcl => norm(Opcode::Lfetch, &[(CC::Lftype, CT::None), (CC::Lfetch, CT::Excl)]),
        Op::LfetchFault => norm(Opcode::Lfetch, &[(CC::Lftype, CT::Fault), (CC::Lfetch, CT::None)]),
        Op::LfetchFaultExcl => norm(
            Opcode::Lfetch,
            &[(CC::Lftype, CT::Fault), (CC::Lfetch, CT::Excl)],
        ),
        Op::Mf => norm(Opcode::Mf, &[(CC::Mf, CT::None)]),
        Op::MfA => norm(Opcode::Mf, &[(CC::Mf, CT::A)]),
        Op::Mix1L => norm(Opcode::Mix1, &[(CC::Lr, CT::L)]),
        Op::Mix1R => norm(Opcode::Mix1, &[(CC::Lr, CT::R)]),
        Op::Mix2L => norm(Opcode::Mix2, &[(CC::Lr, CT::L)]),
        Op::Mix2R => norm(Opcode::Mix2, &[(CC::Lr, CT::R)]),
        Op::Mix4L => norm(Opcode::Mix4, &[(CC::Lr, CT::L)]),
        Op::Mix4R => norm(Opcode::Mix4, &[(CC::Lr, CT::R)]),
        Op::Mov => norm(Opcode::Mov, &[(CC::Mov, CT::None)]),
        Op::MovI => norm(Opcode::Mov, &[(CC::Unit, CT::I)]),
        Op::MovM => norm(Opcode::Mov, &[(CC::Unit, CT::M)]),
        Op::MovRet => norm(Opcode::Mov, &[(CC::Mov, CT::Ret)]),
        Op::MovCpuid => norm(Opcode::Mov, &[]).hint(Kind::Cpuid),
        Op::MovDbr => norm(Opcode::Mov, &[]).hint(Kind::Dbr),
        Op::MovIbr => norm(Opcode::Mov, &[]).hint(Kind::Ibr),
        Op::MovIp => norm(Opcode::Mov, &[]).hint(Kind::Ip),
        Op::MovMsr => norm(Opcode::Mov, &[]).hint(Kind::Msr),
        Op::MovPkr => norm(Opcode::Mov, &[]).hint(Kind::Pkr),
        Op::MovPmc => norm(Opcode::Mov, &[]).hint(Kind::Pmc),
        Op::MovPmd => norm(Opcode::Mov, &[]).hint(Kind::Pmd),
        Op::MovPr => norm(Opcode::Mov, &[]).hint(Kind::Pr),
        Op::MovPsr => norm(Opcode::Mov, &[]).hint(Kind::Psr),
        Op::MovPsrL => norm(Opcode::Mov, &[]).hint(Kind::PsrL),
        Op::MovPsrUm => norm(Opcode::Mov, &[]).hint(Kind::PsrUm),
        Op::MovRr => norm(Opcode::Mov, &[]).hint(Kind::Rr),
        Op::NopB => norm(Opcode::Nop, &[(CC::Unit, CT::B)]),
        Op::NopF => norm(Opcode::Nop, &[(CC::Unit, CT::F)]),
        Op::NopI => norm(Opcode::Nop, &[(CC::Unit, CT::I)]),
        Op::NopM => norm(Opcode::Nop, &[(CC::Unit, CT::M)]),
        Op::NopX => norm(Opcode::Nop, &[(CC::Unit, CT::X)]),
        Op::Pack2Sss => norm(Opcode::Pack2, &[(CC::Sat, CT::Sss)]),
        Op::Pack2Uss => norm(Opcode::Pack2, &[(CC::Sat, CT::Uss)]),
        Op::Pack4Sss => norm(Opcode::Pack4, &[(CC::Sat, CT::Sss)]),
        Op::Padd1 => norm(Opcode::Padd1, &[(CC::Sat, CT::None)]),
        Op::Padd1Sss => norm(Opcode::Padd1, &[(CC::Sat, CT::Sss)]),
        Op::Padd1Uus => norm(Opcode::Padd1, &[(CC::Sat, CT::Uus)]),
        Op::Padd1Uuu => norm(Opcode::Padd1, &[(CC::Sat, CT::Uuu)]),
        Op::Padd2 => norm(Opcode::Padd2, &[(CC::Sat, CT::None)]),
        Op::Padd2Sss => norm(Opcode::Padd2, &[(CC::Sat, CT::Sss)]),
        Op::Padd2Uus => norm(Opcode::Padd2, &[(CC::Sat, CT::Uus)]),
        Op::Padd2Uuu => norm(Opcode::Padd2, &[(CC::Sat, CT::Uuu)]),
        Op::Pavg1 => norm(Opcode::Pavg1, &[(CC::Pavg, CT::None)]),
        Op::Pavg1Raz => norm(Opcode::Pavg1, &[(CC::Pavg, CT::Raz)]),
        Op::Pavg2 => norm(Opcode::Pavg2, &[(CC::Pavg, CT::None)]),
        Op::Pavg2Raz => norm(Opcode::Pavg2, &[(CC::Pavg, CT::Raz)]),
        Op::Pcmp1Eq => norm(Opcode::Pcmp1, &[(CC::Prel, CT::Eq)]),
        Op::Pcmp1Gt => norm(Opcode::Pcmp1, &[(CC::Prel, CT::Gt)]),
        Op::Pcmp2Eq => norm(Opcode::Pcmp2, &[(CC::Prel, CT::Eq)]),
        Op::Pcmp2Gt => norm(Opcode::Pcmp2, &[(CC::Prel, CT::Gt)]),
        Op::Pcmp4Eq => norm(Opcode::Pcmp4, &[(CC::Prel, CT::Eq)]),
        Op::Pcmp4Gt => norm(Opcode::Pcmp4, &[(CC::Prel, CT::Gt)]),
        Op::Pmax1U => norm(Opcode::Pmax1, &[(CC::Uns, CT::U)]),
        Op::Pmin1U => norm(Opcode::Pmin1, &[(CC::Uns, CT::U)]),
        Op::Pmpy2L => norm(Opcode::Pmpy2, &[(CC::Lr, CT::L)]),
        Op::Pmpy2R => norm(Opcode::Pmpy2, &[(CC::Lr, CT::R)]),
        Op::Pmpyshr2 => norm(Opcode::Pmpyshr2, &[(CC::Uns, CT::None)]),
        Op::Pmpyshr2U => norm(Opcode::Pmpyshr2, &[(CC::Uns, CT::U)]),
        Op::ProbeR => norm(Opcode::Probe, &[(CC::Rw, CT::R), (CC::Prtype, CT::None)]),
        Op::ProbeRFault => norm(Opcode::Probe, &[(CC::Rw, CT::R), (CC::Prtype, CT::Fault)]),
        Op::ProbeRwFault => norm(Opcode::Probe, &[(CC::Rw, CT::Rw), (CC::Prtype, CT::Fault)]),
        Op::ProbeW => norm(Opcode::Probe, &[(CC::Rw, CT::W), (CC::Prtype, CT::None)]),
        Op::ProbeWFault => norm(Opcode::Probe, &[(CC::Rw, CT::W), (CC::Prtype, CT::Fault)]),
        Op::Pshr2 => norm(Opcode::Pshr2, &[(CC::Uns, CT::None)]),
        Op::Pshr2U => norm(Opcode::Pshr2, &[(CC::Uns, CT::U)]),
        Op::Pshr4 => norm(Opcode::Pshr4, &[(CC::Uns, CT::None)]),
        Op::Pshr4U => norm(Opcode::Pshr4, &[(CC::Uns, CT::U)]),
        Op::Psub1 => norm(Opcode::Psub1, &[(CC::Sat, CT::None)]),
        Op::Psub1Sss => norm(Opcode::Psub1, &[(CC::Sat, CT::Sss)]),
        Op::Psub1Uus => norm(Opcode::Psub1, &[(CC::Sat, CT::Uus)]),
        Op::Psub1Uuu => norm(Opcode::Psub1, &[(CC::Sat, CT::Uuu)]),
        Op::Psub2 => norm(Opcode::Psub2, &[(CC::Sat, CT::None)]),
        Op::Psub2Sss => norm(Opcode::Psub2, &[(CC::Sat, CT::Sss)]),
        Op::Psub2Uus => norm(Opcode::Psub2, &[(CC::Sat, CT::Uus)]),
        Op::Psub2Uuu => norm(Opcode::Psub2, &[(CC::Sat, CT::Uuu)]),
        Op::PtcE => norm(Opcode::Ptc, &[(CC::Ptc, CT::E)]),
        Op::PtcG => norm(Opcode::Ptc, &[(CC::Ptc, CT::G)]),
        Op::PtcGa => norm(Opcode::Ptc, &[(CC::Ptc, CT::Ga)]),
        Op::PtcL => norm(Opcode::Ptc, &[(CC::Ptc, CT::L)]),
        Op::PtrD => norm(Opcode::Ptr, &[(CC::Ptr, CT::D)]),
        Op::PtrI => norm(Opcode::Ptr, &[(CC::Ptr, CT::I)]),
        Op::SetfD => norm(Opcode::Setf, &[(CC::Setf, CT::D)]),
        Op::SetfExp => norm(Opcode::Setf, &[(CC::Setf, CT::Exp)]),
        Op::SetfS => norm(Opcode::Setf, &[(CC::Setf, CT::S)]),
        Op::SetfSig => norm(Opcode::Setf, &[(CC::Setf, CT::Sig)]),
        Op::Shr => norm(Opcode::Shr, &[(CC::Uns, CT::None)]),
        Op::ShrU => norm(Opcode::Shr, &[(CC::Uns, CT::U)]),
        Op::SrlzD => norm(Opcode::Srlz, &[(CC::Srlz, CT::D)]),
        Op::SrlzI => norm(Opcode::Srlz, &[(CC::Srlz, CT::I)]),
        Op::St1 => norm(Opcode::St1, &[(CC::Sttype, CT::None)]),
        Op::St1Rel => norm(Opcode::St1, &[(CC::Sttype, CT::Rel)]),
        Op::St16 => norm(Opcode::St16, &[(CC::Sttype, CT::None)]),
        Op::St16Rel => norm(Opcode::St16, &[(CC::Sttype, CT::Rel)]),
        Op::St2 => norm(Opcode::St2, &[(CC::Sttype, CT::None)]),
        Op::St2Rel => norm(Opcode::St2, &[(CC::Sttype, CT::Rel)]),
        Op::St4 => norm(Opcode::St4, &[(CC::Sttype, CT::None)]),
        Op::St4Rel => norm(Opcode::St4, &[(CC::Sttype, CT::Rel)]),
        Op::St8 => norm(Opcode::St8, &[(CC::Sttype, CT::None)]),
        Op::St8Rel => norm(Opcode::St8, &[(CC::Sttype, CT::Rel)]),
        Op::St8Spill => norm(Opcode::St8, &[(CC::Sttype, CT::Spill)]),
        Op::StfSpill => norm(Opcode::Stf, &[(CC::Sttype, CT::Spill)]),
        Op::SyncI => norm(Opcode::Sync, &[(CC::Sync, CT::I)]),
        Op::TbitNzAnd => norm(Opcode::Tbit, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::And)]),
        Op::TbitNzOr => norm(Opcode::Tbit, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::Or)]),
        Op::TbitNzOrAndcm => norm(Opcode::Tbit, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::OrAndcm)]),
        Op::TbitZ => norm(Opcode::Tbit, &[(CC::Trel, CT::Z), (CC::Ctype, CT::None)]),
        Op::TbitZAnd => norm(Opcode::Tbit, &[(CC::Trel, CT::Z), (CC::Ctype, CT::And)]),
        Op::TbitZOr => norm(Opcode::Tbit, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Or)]),
        Op::TbitZOrAndcm => norm(Opcode::Tbit, &[(CC::Trel, CT::Z), (CC::Ctype, CT::OrAndcm)]),
        Op::TbitZUnc => norm(Opcode::Tbit, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Unc)]),
        Op::TfNzAnd => norm(Opcode::Tf, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::And)]),
        Op::TfNzOr => norm(Opcode::Tf, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::Or)]),
        Op::TfNzOrAndcm => norm(Opcode::Tf, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::OrAndcm)]),
        Op::TfZ => norm(Opcode::Tf, &[(CC::Trel, CT::Z), (CC::Ctype, CT::None)]),
        Op::TfZAnd => norm(Opcode::Tf, &[(CC::Trel, CT::Z), (CC::Ctype, CT::And)]),
        Op::TfZOr => norm(Opcode::Tf, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Or)]),
        Op::TfZOrAndcm => norm(Opcode::Tf, &[(CC::Trel, CT::Z), (CC::Ctype, CT::OrAndcm)]),
        Op::TfZUnc => norm(Opcode::Tf, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Unc)]),
        Op::TnatNzAnd => norm(Opcode::Tnat, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::And)]),
        Op::TnatNzOr => norm(Opcode::Tnat, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::Or)]),
        Op::TnatNzOrAndcm => norm(Opcode::Tnat, &[(CC::Trel, CT::Nz), (CC::Ctype, CT::OrAndcm)]),
        Op::TnatZ => norm(Opcode::Tnat, &[(CC::Trel, CT::Z), (CC::Ctype, CT::None)]),
        Op::TnatZAnd => norm(Opcode::Tnat, &[(CC::Trel, CT::Z), (CC::Ctype, CT::And)]),
        Op::TnatZOr => norm(Opcode::Tnat, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Or)]),
        Op::TnatZOrAndcm => norm(Opcode::Tnat, &[(CC::Trel, CT::Z), (CC::Ctype, CT::OrAndcm)]),
        Op::TnatZUnc => norm(Opcode::Tnat, &[(CC::Trel, CT::Z), (CC::Ctype, CT::Unc)]),
        Op::Unpack1H => norm(Opcode::Unpack1, &[(CC::Unpack, CT::H)]),
        Op::Unpack1L => norm(Opcode::Unpack1, &[(CC::Unpack, CT::L)]),
        Op::Unpack2H => norm(Opcode::Unpack2, &[(CC::Unpack, CT::H)]),
        Op::Unpack2L => norm(Opcode::Unpack2, &[(CC::Unpack, CT::L)]),
        Op::Unpack4H => norm(Opcode::Unpack4, &[(CC::Unpack, CT::H)]),
        Op::Unpack4L => norm(Opcode::Unpack4, &[(CC::Unpack, CT::L)]),
        Op::Vmsw0 => norm(Opcode::Vmsw, &[(CC::Vmsw, CT::Zero)]),
        Op::Vmsw1 => norm(Opcode::Vmsw, &[(CC::Vmsw, CT::One)]),
        Op::XmaH => norm(Opcode::Xma, &[(CC::Xma, CT::H)]),
        Op::XmaHu => norm(Opcode::Xma, &[(CC::Xma, CT::Hu)]),
        Op::XmaL => norm(Opcode::Xma, &[(CC::Xma, CT::L)]),
        // Opcodes that already are canonical
        Op::Add => norm(Opcode::Add, &[]),
        Op::Addl => norm(Opcode::Addl, &[]),
        Op::Addp4 => norm(Opcode::Addp4, &[]),
        Op::Adds => norm(Opcode::Adds, &[]),
        Op::Alloc => norm(Opcode::Alloc, &[]),
        Op::And => norm(Opcode::And, &[]),
        Op::Andcm => norm(Opcode::Andcm, &[]),
        Op::Cover => norm(Opcode::Cover, &[]),
        Op::Epc => norm(Opcode::Epc, &[]),
        Op::Extr => norm(Opcode::Extr, &[]),
        Op::Famax => norm(Opcode::Famax, &[]),
        Op::Famin => norm(Opcode::Famin, &[]),
        Op::Fand => norm(Opcode::Fand, &[]),
        Op::Fandcm => norm(Opcode::Fandcm, &[]),
        Op::Fchkf => norm(Opcode::Fchkf, &[]),
        Op::Fclrf => norm(Opcode::Fclrf, &[]),
        Op::Fcmp => norm(Opcode::Fcmp, &[]),
        Op::Flushrs => norm(Opcode::Flushrs, &[]),
        Op::Fmax => norm(Opcode::Fmax, &[]),
        Op::Fmin => norm(Opcode::Fmin, &[]),
        Op::For => norm(Opcode::For, &[]),
        Op::Fpack => norm(Opcode::Fpack, &[]),
        Op::Fpamax => norm(Opcode::Fpamax, &[]),
        Op::Fpamin => norm(Opcode::Fpamin, &[]),
        Op::Fpma => norm(Opcode::Fpma, &[]),
        Op::Fpmax => norm(Opcode::Fpmax, &[]),
        Op::Fpmin => norm(Opcode::Fpmin, &[]),
        Op::Fpms => norm(Opcode::Fpms, &[]),
        Op::Fpnma => norm(Opcode::Fpnma, &[]),
        Op::Fprcpa => norm(Opcode::Fprcpa, &[]),
        Op::Fprsqrta => norm(Opcode::Fprsqrta, &[]),
        Op::Frcpa => norm(Opcode::Frcpa, &[]),
        Op::Frsqrta => norm(Opcode::Frsqrta, &[]),
        Op::Fselect => norm(Opcode::Fselect, &[]),
        Op::Fsetc => norm(Opcode::Fsetc, &[]),
        Op::Fwb => norm(Opcode::Fwb, &[]),
        Op::Fxor => norm(Opcode::Fxor, &[]),
        Op::Loadrs => norm(Opcode::Loadrs, &[]),
        Op::Movl => norm(Opcode::Movl, &[]),
        Op::Mux1 => norm(Opcode::Mux1, &[]),
        Op::Mux2 => norm(Opcode::Mux2, &[]),
        Op::Or => norm(Opcode::Or, &[]),
        Op::Padd4 => norm(Opcode::Padd4, &[]),
        Op::Pavgsub1 => norm(Opcode::Pavgsub1, &[]),
        Op::Pavgsub2 => norm(Opcode::Pavgsub2, &[]),
        Op::Pmax2 => norm(Opcode::Pmax2, &[]),
        Op::Pmin2 => norm(Opcode::Pmin2, &[]),
        Op::Popcnt => norm(Opcode::Popcnt, &[]),
        Op::Psad1 => norm(Opcode::Psad1, &[]),
        Op::Pshl2 => norm(Opcode::Pshl2, &[]),
        Op::Pshl4 => norm(Opcode::Pshl4, &[]),
        Op::Pshladd2 => norm(Opcode::Pshladd2, &[]),
        Op::Pshradd2 => norm(Opcode::Pshradd2, &[]),
        Op::Psub4 => norm(Opcode::Psub4, &[]),
        Op::Rfi => norm(Opcode::Rfi, &[]),
        Op::Rsm => norm(Opcode::Rsm, &[]),
        Op::Rum => norm(Opcode::Rum, &[]),
        Op::Shl => norm(Opcode::Shl, &[]),
        Op::Shladd => norm(Opcode::Shladd, &[]),
        Op::Shladdp4 => norm(Opcode::Shladdp4, &[]),
        Op::Shrp => norm(Opcode::Shrp, &[]),
        Op::Ssm => norm(Opcode::Ssm, &[]),
        Op::Stf8 => norm(Opcode::Stf8, &[]),
        Op::Stfd => norm(Opcode::Stfd, &[]),
        Op::Stfe => norm(Opcode::Stfe, &[]),
        Op::Stfs => norm(Opcode::Stfs, &[]),
        Op::Sub => norm(Opcode::Sub, &[]),
        Op::Sum => norm(Opcode::Sum, &[]),
        Op::Sxt1 => norm(Opcode::Sxt1, &[]),
        Op::Sxt2 => norm(Opcode::Sxt2, &[]),
        Op::Sxt4 => norm(Opcode::Sxt4, &[]),
        Op::Tak => norm(Opcode::Tak, &[]),
        Op::Thash => norm(Opcode::Thash, &[]),
        Op::Tpa => norm(Opcode::Tpa, &[]),
        Op::Ttag => norm(Opcode::Ttag, &[]),
        Op::Xchg1 => norm(Opcode::Xchg1, &[]),
        Op::Xchg2 => norm(Opcode::Xchg2, &[]),
        Op::Xchg4 => norm(Opcode::Xchg4, &[]),
        Op::Xchg8 => norm(Opcode::Xchg8, &[]),
        Op::Xor => norm(Opcode::Xor, &[]),
        Op::Zxt1 => norm(Opcode::Zxt1, &[]),
        Op::Zxt2 => norm(Opcode::Zxt2, &[]),
        Op::Zxt4 => norm(Opcode::Zxt4, &[]),
    }
}
