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

//! Per-unit opcode matchers
//!
//! Each matcher discriminates on the major opcode (bits 37..40) and then on
//! whatever secondary fields that major opcode uses. The nesting mirrors the
//! opcode tables of the architecture manual, with field names noted beside
//! each match.

pub(crate) mod a;
pub(crate) mod b;
pub(crate) mod f;
pub(crate) mod i;
pub(crate) mod m;
pub(crate) mod x;

use super::opcode::DecodeOp;
use super::template::Unit;
use super::types::Format;

/// Run the matcher for `unit`
///
/// The L unit has no matcher of its own and always yields `None`.
pub(crate) fn decode(unit: Unit, bits: u64) -> Option<(DecodeOp, Format)> {
    match unit {
        Unit::M => m::decode(bits),
        Unit::I => i::decode(bits),
        Unit::F => f::decode(bits),
        Unit::B => b::decode(bits),
        Unit::X => x::decode(bits),
        Unit::L => None,
    }
}
