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

//! Test fixtures: syllable encoders and sample code images

use ia64dec::core::decoder::BUNDLE_SIZE;
use std::io::Write;

/// Load address of the sample program
#[allow(dead_code)]
pub const SAMPLE_BASE: u64 = 0x1000;

fn at(value: u64, offset: u32) -> u64 {
    value << offset
}

fn major(value: u64) -> u64 {
    at(value, 37)
}

/// Assemble a bundle from a template selector and three syllables
#[allow(dead_code)]
pub fn bundle_bytes(template: u8, slots: [u64; 3]) -> [u8; BUNDLE_SIZE] {
    let mask = (1u128 << 41) - 1;
    let raw = (template as u128 & 0x1F)
        | ((slots[0] as u128 & mask) << 5)
        | ((slots[1] as u128 & mask) << 46)
        | ((slots[2] as u128 & mask) << 87);
    raw.to_le_bytes()
}

/// `alloc r1 = ar.pfs, 0, locals, outputs, 0`
#[allow(dead_code)]
pub fn alloc(r1: u64, locals: u64, outputs: u64) -> u64 {
    major(1) | at(6, 33) | at(r1, 6) | at(locals + outputs, 13) | at(locals, 20)
}

/// `movl r1 = imm64` as (L syllable, X syllable)
#[allow(dead_code)]
pub fn movl(r1: u64, imm64: u64) -> (u64, u64) {
    let long = (imm64 >> 22) & ((1 << 41) - 1);
    let x = major(6)
        | at(r1, 6)
        | at(imm64 & 0x7F, 13)
        | at((imm64 >> 21) & 1, 21)
        | at((imm64 >> 16) & 0x1F, 22)
        | at((imm64 >> 7) & 0x1FF, 27)
        | at(imm64 >> 63, 36);
    (long, x)
}

/// `addl r1 = imm22, r3` (r3 in 0..=3)
#[allow(dead_code)]
pub fn addl(r1: u64, imm22: i64, r3: u64) -> u64 {
    let imm = imm22 as u64 & 0x3F_FFFF;
    major(9)
        | at(r1, 6)
        | at(imm & 0x7F, 13)
        | at(r3, 20)
        | at((imm >> 16) & 0x1F, 22)
        | at((imm >> 7) & 0x1FF, 27)
        | at((imm >> 21) & 1, 36)
}

/// `adds r1 = imm14, r3`
#[allow(dead_code)]
pub fn adds(r1: u64, imm14: i64, r3: u64) -> u64 {
    let imm = imm14 as u64 & 0x3FFF;
    major(8)
        | at(2, 34)
        | at(r1, 6)
        | at(imm & 0x7F, 13)
        | at(r3, 20)
        | at((imm >> 7) & 0x3F, 27)
        | at((imm >> 13) & 1, 36)
}

/// `br.cond.sptk.few` by `bundles` bundles relative to the branch
#[allow(dead_code)]
pub fn br_cond(bundles: i64) -> u64 {
    let imm = bundles as u64 & 0x1F_FFFF;
    major(4) | at(imm & 0xF_FFFF, 13) | at((imm >> 20) & 1, 36)
}

/// Two-bundle loop:
///
/// ```text
/// [MLX]       alloc r34 = ar.pfs, 0x0, 0x3, 0x1, 0x0
///             movl r8 = 0x123456789abcdef0;;
/// [MIB]       addl r9 = -0x1, r0
///             adds r1 = 0x5, r2
///             br.cond.sptk.few 0x1000;;
/// ```
#[allow(dead_code)]
pub fn sample_program() -> Vec<u8> {
    let (long, x) = movl(8, 0x1234_5678_9ABC_DEF0);
    let mut bytes = Vec::with_capacity(2 * BUNDLE_SIZE);
    bytes.extend_from_slice(&bundle_bytes(0x05, [alloc(34, 3, 1), long, x]));
    bytes.extend_from_slice(&bundle_bytes(
        0x11,
        [addl(9, -1, 0), adds(1, 5, 2), br_cond(-1)],
    ));
    bytes
}

/// Expected default listing of [`sample_program`]
#[allow(dead_code)]
pub fn sample_listing() -> Vec<&'static str> {
    vec![
        "[MLX]       alloc r34 = ar.pfs, 0x0, 0x3, 0x1, 0x0",
        "            movl r8 = 0x123456789abcdef0;;",
        "[MIB]       addl r9 = -0x1, r0",
        "            adds r1 = 0x5, r2",
        "            br.cond.sptk.few 0x1000;;",
    ]
}

/// Write `bytes` to a temporary file
#[allow(dead_code)]
pub fn write_temp_image(bytes: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("ia64dec_")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Render `bytes` as a hex dump, 16 bytes per line
#[allow(dead_code)]
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .map(|line| {
            line.iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
