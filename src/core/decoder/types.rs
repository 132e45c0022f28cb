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

//! Decoded instruction model: formats, completers and operands

use super::opcode::Opcode;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Most completers any instruction carries
pub const MAX_COMPLETERS: usize = 5;

/// Operand positions per instruction; position 0 is the qualifying predicate
pub const MAX_OPERANDS: usize = 7;

/// Operand encoding layout, named after the architecture's format tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Format {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    B9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    I1,
    I2,
    I3,
    I4,
    I5,
    I6,
    I7,
    I8,
    I9,
    I10,
    I11,
    I12,
    I13,
    I14,
    I15,
    I16,
    I17,
    I18,
    I19,
    I20,
    I21,
    I22,
    I23,
    I24,
    I25,
    I26,
    I27,
    I28,
    I29,
    I30,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
    M8,
    M9,
    M10,
    M11,
    M12,
    M13,
    M14,
    M15,
    M16,
    M17,
    M18,
    M19,
    M20,
    M21,
    M22,
    M23,
    M24,
    M25,
    M26,
    M27,
    M28,
    M29,
    M30,
    M31,
    M32,
    M33,
    M34,
    M35,
    M36,
    M37,
    M38,
    M39,
    M40,
    M41,
    M42,
    M43,
    M44,
    M45,
    M46,
    M47,
    M48,
    X1,
    X2,
    X3,
    X4,
    X5,
}

impl Format {
    /// Execution unit letter the format belongs to
    pub fn unit(self) -> char {
        match self {
            Format::A1
            | Format::A2
            | Format::A3
            | Format::A4
            | Format::A5
            | Format::A6
            | Format::A7
            | Format::A8
            | Format::A9
            | Format::A10 => 'A',
            Format::B1
            | Format::B2
            | Format::B3
            | Format::B4
            | Format::B5
            | Format::B6
            | Format::B7
            | Format::B8
            | Format::B9 => 'B',
            Format::F1
            | Format::F2
            | Format::F3
            | Format::F4
            | Format::F5
            | Format::F6
            | Format::F7
            | Format::F8
            | Format::F9
            | Format::F10
            | Format::F11
            | Format::F12
            | Format::F13
            | Format::F14
            | Format::F15
            | Format::F16 => 'F',
            Format::I1
            | Format::I2
            | Format::I3
            | Format::I4
            | Format::I5
            | Format::I6
            | Format::I7
            | Format::I8
            | Format::I9
            | Format::I10
            | Format::I11
            | Format::I12
            | Format::I13
            | Format::I14
            | Format::I15
            | Format::I16
            | Format::I17
            | Format::I18
            | Format::I19
            | Format::I20
            | Format::I21
            | Format::I22
            | Format::I23
            | Format::I24
            | Format::I25
            | Format::I26
            | Format::I27
            | Format::I28
            | Format::I29
            | Format::I30 => 'I',
            Format::M1
            | Format::M2
            | Format::M3
            | Format::M4
            | Format::M5
            | Format::M6
            | Format::M7
            | Format::M8
            | Format::M9
            | Format::M10
            | Format::M11
            | Format::M12
            | Format::M13
            | Format::M14
            | Format::M15
            | Format::M16
            | Format::M17
            | Format::M18
            | Format::M19
            | Format::M20
            | Format::M21
            | Format::M22
            | Format::M23
            | Format::M24
            | Format::M25
            | Format::M26
            | Format::M27
            | Format::M28
            | Format::M29
            | Format::M30
            | Format::M31
            | Format::M32
            | Format::M33
            | Format::M34
            | Format::M35
            | Format::M36
            | Format::M37
            | Format::M38
            | Format::M39
            | Format::M40
            | Format::M41
            | Format::M42
            | Format::M43
            | Format::M44
            | Format::M45
            | Format::M46
            | Format::M47
            | Format::M48 => 'M',
            Format::X1 | Format::X2 | Format::X3 | Format::X4 | Format::X5 => 'X',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Role of a completer, e.g. compare relation or load hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompleterClass {
    Aclr,
    Bsw,
    Btype,
    Bwh,
    Chk,
    Clrrrb,
    Crel,
    Ctype,
    Dep,
    Dh,
    Fc,
    Fcrel,
    Fctype,
    Fcvt,
    Fldtype,
    Fmerge,
    Frel,
    Fswap,
    Getf,
    Ih,
    Invala,
    Ipwh,
    Itc,
    Itr,
    Ldhint,
    Ldtype,
    Lfetch,
    Lfhint,
    Lftype,
    Lr,
    Mf,
    Mov,
    Mwh,
    Pavg,
    Pc,
    Ph,
    Prel,
    Prtype,
    Ptc,
    Ptr,
    Pvec,
    Rw,
    Sat,
    Sem,
    Setf,
    Sf,
    Srlz,
    Sthint,
    Sttype,
    Sync,
    Trel,
    Trunc,
    Unit,
    Unpack,
    Uns,
    Vmsw,
    Xma,
}

impl CompleterClass {
    /// Lower-case class name
    pub fn as_str(self) -> &'static str {
        match self {
            CompleterClass::Aclr => "aclr",
            CompleterClass::Bsw => "bsw",
            CompleterClass::Btype => "btype",
            CompleterClass::Bwh => "bwh",
            CompleterClass::Chk => "chk",
            CompleterClass::Clrrrb => "clrrrb",
            CompleterClass::Crel => "crel",
            CompleterClass::Ctype => "ctype",
            CompleterClass::Dep => "dep",
            CompleterClass::Dh => "dh",
            CompleterClass::Fc => "fc",
            CompleterClass::Fcrel => "fcrel",
            CompleterClass::Fctype => "fctype",
            CompleterClass::Fcvt => "fcvt",
            CompleterClass::Fldtype => "fldtype",
            CompleterClass::Fmerge => "fmerge",
            CompleterClass::Frel => "frel",
            CompleterClass::Fswap => "fswap",
            CompleterClass::Getf => "getf",
            CompleterClass::Ih => "ih",
            CompleterClass::Invala => "invala",
            CompleterClass::Ipwh => "ipwh",
            CompleterClass::Itc => "itc",
            CompleterClass::Itr => "itr",
            CompleterClass::Ldhint => "ldhint",
            CompleterClass::Ldtype => "ldtype",
            CompleterClass::Lfetch => "lfetch",
            CompleterClass::Lfhint => "lfhint",
            CompleterClass::Lftype => "lftype",
            CompleterClass::Lr => "lr",
            CompleterClass::Mf => "mf",
            CompleterClass::Mov => "mov",
            CompleterClass::Mwh => "mwh",
            CompleterClass::Pavg => "pavg",
            CompleterClass::Pc => "pc",
            CompleterClass::Ph => "ph",
            CompleterClass::Prel => "prel",
            CompleterClass::Prtype => "prtype",
            CompleterClass::Ptc => "ptc",
            CompleterClass::Ptr => "ptr",
            CompleterClass::Pvec => "pvec",
            CompleterClass::Rw => "rw",
            CompleterClass::Sat => "sat",
            CompleterClass::Sem => "sem",
            CompleterClass::Setf => "setf",
            CompleterClass::Sf => "sf",
            CompleterClass::Srlz => "srlz",
            CompleterClass::Sthint => "sthint",
            CompleterClass::Sttype => "sttype",
            CompleterClass::Sync => "sync",
            CompleterClass::Trel => "trel",
            CompleterClass::Trunc => "trunc",
            CompleterClass::Unit => "unit",
            CompleterClass::Unpack => "unpack",
            CompleterClass::Uns => "uns",
            CompleterClass::Vmsw => "vmsw",
            CompleterClass::Xma => "xma",
        }
    }
}

/// Specific completer value within its class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompleterType {
    Zero,
    One,
    A,
    Acq,
    And,
    B,
    Bias,
    Call,
    Cexit,
    Cloop,
    Clr,
    Cond,
    Ctop,
    CClr,
    CClrAcq,
    CNc,
    D,
    DcDc,
    DcNt,
    Dpnt,
    Dptk,
    E,
    Eq,
    Excl,
    Exit,
    Exp,
    F,
    Fault,
    Few,
    Fill,
    Fx,
    Fxu,
    G,
    Ga,
    Ge,
    Gt,
    H,
    Hu,
    I,
    Ia,
    Imp,
    L,
    Le,
    Loop,
    Lr,
    Lt,
    Ltu,
    M,
    Many,
    Nc,
    Ne,
    Neq,
    Nl,
    Nle,
    Nlt,
    None,
    Nr,
    Ns,
    Nt1,
    Nt2,
    Nta,
    NtDc,
    NtNt,
    NtTk,
    Nz,
    Or,
    Ord,
    OrAndcm,
    Pr,
    R,
    Raz,
    Rel,
    Ret,
    Rw,
    S,
    S0,
    S1,
    S2,
    S3,
    Sa,
    Se,
    Sig,
    Spill,
    Spnt,
    Sptk,
    Sss,
    TkDc,
    TkNt,
    TkTk,
    Trunc,
    U,
    Unc,
    Unord,
    Uss,
    Uus,
    Uuu,
    W,
    Wexit,
    Wtop,
    X,
    Xf,
    Z,
}

impl CompleterType {
    /// Assembler spelling of the completer, `"none"` for the empty one
    pub fn as_str(self) -> &'static str {
        match self {
            CompleterType::Zero => "0",
            CompleterType::One => "1",
            CompleterType::A => "a",
            CompleterType::Acq => "acq",
            CompleterType::And => "and",
            CompleterType::B => "b",
            CompleterType::Bias => "bias",
            CompleterType::Call => "call",
            CompleterType::Cexit => "cexit",
            CompleterType::Cloop => "cloop",
            CompleterType::Clr => "clr",
            CompleterType::Cond => "cond",
            CompleterType::Ctop => "ctop",
            CompleterType::CClr => "c.clr",
            CompleterType::CClrAcq => "c.clr.acq",
            CompleterType::CNc => "c.nc",
            CompleterType::D => "d",
            CompleterType::DcDc => "dc.dc",
            CompleterType::DcNt => "dc.nt",
            CompleterType::Dpnt => "dpnt",
            CompleterType::Dptk => "dptk",
            CompleterType::E => "e",
            CompleterType::Eq => "eq",
            CompleterType::Excl => "excl",
            CompleterType::Exit => "exit",
            CompleterType::Exp => "exp",
            CompleterType::F => "f",
            CompleterType::Fault => "fault",
            CompleterType::Few => "few",
            CompleterType::Fill => "fill",
            CompleterType::Fx => "fx",
            CompleterType::Fxu => "fxu",
            CompleterType::G => "g",
            CompleterType::Ga => "ga",
            CompleterType::Ge => "ge",
            CompleterType::Gt => "gt",
            CompleterType::H => "h",
            CompleterType::Hu => "hu",
            CompleterType::I => "i",
            CompleterType::Ia => "ia",
            CompleterType::Imp => "imp",
            CompleterType::L => "l",
            CompleterType::Le => "le",
            CompleterType::Loop => "loop",
            CompleterType::Lr => "lr",
            CompleterType::Lt => "lt",
            CompleterType::Ltu => "ltu",
            CompleterType::M => "m",
            CompleterType::Many => "many",
            CompleterType::Nc => "nc",
            CompleterType::Ne => "ne",
            CompleterType::Neq => "neq",
            CompleterType::Nl => "nl",
            CompleterType::Nle => "nle",
            CompleterType::Nlt => "nlt",
            CompleterType::None => "none",
            CompleterType::Nr => "nr",
            CompleterType::Ns => "ns",
            CompleterType::Nt1 => "nt1",
            CompleterType::Nt2 => "nt2",
            CompleterType::Nta => "nta",
            CompleterType::NtDc => "nt.dc",
            CompleterType::NtNt => "nt.nt",
            CompleterType::NtTk => "nt.tk",
            CompleterType::Nz => "nz",
            CompleterType::Or => "or",
            CompleterType::Ord => "ord",
            CompleterType::OrAndcm => "or.andcm",
            CompleterType::Pr => "pr",
            CompleterType::R => "r",
            CompleterType::Raz => "raz",
            CompleterType::Rel => "rel",
            CompleterType::Ret => "ret",
            CompleterType::Rw => "rw",
            CompleterType::S => "s",
            CompleterType::S0 => "s0",
            CompleterType::S1 => "s1",
            CompleterType::S2 => "s2",
            CompleterType::S3 => "s3",
            CompleterType::Sa => "sa",
            CompleterType::Se => "se",
            CompleterType::Sig => "sig",
            CompleterType::Spill => "spill",
            CompleterType::Spnt => "spnt",
            CompleterType::Sptk => "sptk",
            CompleterType::Sss => "sss",
            CompleterType::TkDc => "tk.dc",
            CompleterType::TkNt => "tk.nt",
            CompleterType::TkTk => "tk.tk",
            CompleterType::Trunc => "trunc",
            CompleterType::U => "u",
            CompleterType::Unc => "unc",
            CompleterType::Unord => "unord",
            CompleterType::Uss => "uss",
            CompleterType::Uus => "uus",
            CompleterType::Uuu => "uuu",
            CompleterType::W => "w",
            CompleterType::Wexit => "wexit",
            CompleterType::Wtop => "wtop",
            CompleterType::X => "x",
            CompleterType::Xf => "xf",
            CompleterType::Z => "z",
        }
    }
}

/// One (class, type) completer attached to an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Completer {
    pub class: CompleterClass,
    pub ty: CompleterType,
}

impl Completer {
    const BLANK: Completer = Completer {
        class: CompleterClass::Unit,
        ty: CompleterType::None,
    };

    pub const fn new(class: CompleterClass, ty: CompleterType) -> Self {
        Self { class, ty }
    }
}

impl Serialize for Completer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Completer", 2)?;
        state.serialize_field("class", self.class.as_str())?;
        state.serialize_field("type", self.ty.as_str())?;
        state.end()
    }
}

/// What an operand's value refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    /// Unused operand position
    #[default]
    None,
    /// Application register
    Areg,
    /// Branch register
    Breg,
    /// CPU identification register, indexed by a general register
    Cpuid,
    /// Control register
    Creg,
    /// Data breakpoint register
    Dbr,
    /// IP-relative displacement in bytes
    Disp,
    /// Data translation register
    Dtr,
    /// Floating-point register
    Freg,
    /// General register
    Greg,
    /// Instruction breakpoint register
    Ibr,
    /// Immediate
    Imm,
    /// Instruction pointer
    Ip,
    /// Instruction translation register
    Itr,
    /// Memory addressed through a general register
    Mem,
    /// Model-specific register
    Msr,
    /// Protection key register
    Pkr,
    /// Performance monitor configuration register
    Pmc,
    /// Performance monitor data register
    Pmd,
    /// Whole predicate register file
    Pr,
    /// Predicate register
    Preg,
    /// Rotating predicates
    PrRot,
    /// Processor status register
    Psr,
    /// Lower half of the processor status register
    PsrL,
    /// User mask
    PsrUm,
    /// Region register
    Rr,
}

/// A typed operand value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Operand {
    pub kind: OperandKind,
    pub value: u64,
}

impl Operand {
    pub const fn new(kind: OperandKind, value: u64) -> Self {
        Self { kind, value }
    }

    /// True for positions the format leaves unused
    pub fn is_none(&self) -> bool {
        self.kind == OperandKind::None
    }

    /// Value reinterpreted as a two's complement number
    pub fn signed(&self) -> i64 {
        self.value as i64
    }
}

/// One decoded syllable
///
/// Operand 0 holds the qualifying predicate for every format except the
/// branch-predict forms B6 and B7. Operands before [`Instruction::src_index`]
/// are destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    bits: u64,
    format: Option<Format>,
    opcode: Option<Opcode>,
    completers: [Completer; MAX_COMPLETERS],
    completer_count: usize,
    operands: [Operand; MAX_OPERANDS],
    src_index: usize,
}

impl Default for Instruction {
    fn default() -> Self {
        Self::raw(0)
    }
}

impl Instruction {
    /// Slot holding only raw bits, with no format or opcode
    ///
    /// This is how the L half of a long-immediate pair is recorded.
    pub const fn raw(bits: u64) -> Self {
        Self {
            bits,
            format: None,
            opcode: None,
            completers: [Completer::BLANK; MAX_COMPLETERS],
            completer_count: 0,
            operands: [Operand::new(OperandKind::None, 0); MAX_OPERANDS],
            src_index: 0,
        }
    }

    pub(crate) fn new(bits: u64, format: Format, opcode: Opcode, src_index: usize) -> Self {
        Self {
            format: Some(format),
            opcode: Some(opcode),
            src_index,
            ..Self::raw(bits)
        }
    }

    /// Raw 41-bit syllable
    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn opcode(&self) -> Option<Opcode> {
        self.opcode
    }

    /// Completers in the order they were attached
    pub fn completers(&self) -> &[Completer] {
        &self.completers[..self.completer_count]
    }

    pub fn operands(&self) -> &[Operand; MAX_OPERANDS] {
        &self.operands
    }

    /// Operand at `index`, `None` past the end of the list
    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands.get(index)
    }

    /// Index of the first source operand
    pub fn src_index(&self) -> usize {
        self.src_index
    }

    /// True for the L half of an MLX pair
    pub fn is_long_half(&self) -> bool {
        self.format.is_none()
    }

    /// Append a completer
    ///
    /// # Panics
    ///
    /// Panics if the instruction already carries [`MAX_COMPLETERS`]
    /// completers. That only happens when the decode tables are inconsistent.
    pub(crate) fn push_completer(&mut self, class: CompleterClass, ty: CompleterType) {
        assert!(
            self.completer_count < MAX_COMPLETERS,
            "completer overflow on {:?}",
            self.opcode
        );
        self.completers[self.completer_count] = Completer::new(class, ty);
        self.completer_count += 1;
    }

    pub(crate) fn set_operand(&mut self, index: usize, kind: OperandKind, value: u64) {
        self.operands[index] = Operand::new(kind, value);
    }

    pub(crate) fn set_kind(&mut self, index: usize, kind: OperandKind) {
        self.operands[index].kind = kind;
    }

    pub(crate) fn value_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.operands[index].value
    }
}

impl Serialize for Instruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let used = self
            .operands
            .iter()
            .rposition(|op| !op.is_none())
            .map_or(0, |last| last + 1);

        let mut state = serializer.serialize_struct("Instruction", 6)?;
        state.serialize_field("raw_bits", &self.bits)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("opcode", &self.opcode)?;
        state.serialize_field("completers", self.completers())?;
        state.serialize_field("operands", &self.operands[..used])?;
        state.serialize_field("first_source_operand_index", &self.src_index)?;
        state.end()
    }
}
