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

//! Bit-field helpers shared by the matchers and the operand extractor
//!
//! Syllables are 41-bit values held in the low bits of a `u64`. Bit 0 is the
//! least significant bit throughout.

/// Width of one instruction syllable in bits
pub const SLOT_BITS: u32 = 41;

/// Mask covering one 41-bit syllable
pub const SLOT_MASK: u64 = (1 << SLOT_BITS) - 1;

/// Extract `len` bits of `bits` starting at bit `offset`
///
/// # Example
///
/// ```
/// use ia64dec::core::bits::field;
///
/// assert_eq!(field(0b1011_0000, 4, 4), 0b1011);
/// ```
#[inline(always)]
pub const fn field(bits: u64, offset: u32, len: u32) -> u64 {
    if len >= 64 {
        bits >> offset
    } else {
        (bits >> offset) & ((1 << len) - 1)
    }
}

/// Major opcode of a syllable (bits 37..40)
#[inline(always)]
pub const fn major(bits: u64) -> u64 {
    field(bits, 37, 4)
}

/// Sign-extend the low `len` bits of `value` to 64 bits
#[inline(always)]
pub const fn sign_extend(value: u64, len: u32) -> u64 {
    if len == 0 || len >= 64 {
        return value;
    }
    if value & (1 << (len - 1)) != 0 {
        value | (u64::MAX << len)
    } else {
        value
    }
}

/// Extract a field and optionally sign-extend it
///
/// # Arguments
///
/// * `bits` - Raw syllable
/// * `offset` - Position of the field's lowest bit
/// * `len` - Field width
/// * `signed` - Treat the top bit of the field as a sign bit
#[inline]
pub const fn extend(bits: u64, offset: u32, len: u32, signed: bool) -> u64 {
    let value = field(bits, offset, len);
    if signed {
        sign_extend(value, len)
    } else {
        value
    }
}

/// One piece of a split immediate: `(offset, len)` inside the syllable
pub type Fragment = (u32, u32);

/// Assemble an immediate scattered over several fields
///
/// The first fragment supplies the lowest bits of the result, each following
/// fragment is placed directly above the bits gathered so far. The sign bit,
/// when `signed` is set, is the top bit of the last fragment.
///
/// # Example
///
/// ```
/// use ia64dec::core::bits::fragmented;
///
/// // imm7 at bit 13 with the sign in bit 36
/// let bits = (0x7F << 13) | (1 << 36);
/// assert_eq!(fragmented(bits, true, &[(13, 7), (36, 1)]) as i64, -1);
/// assert_eq!(fragmented(bits & !(1 << 36), true, &[(13, 7), (36, 1)]), 0x7F);
/// ```
pub fn fragmented(bits: u64, signed: bool, fragments: &[Fragment]) -> u64 {
    let mut value = 0u64;
    let mut len = 0;

    for &(offset, width) in fragments {
        value |= field(bits, offset, width) << len;
        len += width;
    }

    if signed {
        sign_extend(value, len)
    } else {
        value
    }
}

/// Overlay `src_len` bits of `src` (from `src_offset`) above the low
/// `dst_len` bits of `dst`
///
/// Used to splice the L-slot half of a long immediate onto the part decoded
/// from the X syllable. Bits of `dst` at and above `dst_len` are replaced.
#[inline]
pub const fn combine(dst: u64, dst_len: u32, src: u64, src_len: u32, src_offset: u32) -> u64 {
    let low = if dst_len >= 64 {
        dst
    } else {
        dst & ((1 << dst_len) - 1)
    };
    let high = field(src, src_offset, src_len);
    if dst_len >= 64 {
        low
    } else {
        low | (high << dst_len)
    }
}

/// Template selector of a bundle (bits 0..4)
#[inline(always)]
pub const fn template_bits(bundle: u128) -> u8 {
    (bundle & 0x1F) as u8
}

/// Raw syllable `slot` (0..=2) of a bundle
#[inline(always)]
pub const fn slot_bits(bundle: u128, slot: usize) -> u64 {
    ((bundle >> (5 + SLOT_BITS as usize * slot)) as u64) & SLOT_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_field_basic() {
        assert_eq!(field(0xABCD, 0, 4), 0xD);
        assert_eq!(field(0xABCD, 4, 8), 0xBC);
        assert_eq!(field(u64::MAX, 0, 64), u64::MAX);
        assert_eq!(field(1 << 40, 37, 4), 0x8);
    }

    #[test]
    fn test_major_opcode() {
        let bits = 0xEu64 << 37;
        assert_eq!(major(bits), 0xE);
        assert_eq!(major(bits | 0x1F_FFFF_FFFF), 0xE);
    }

    #[test]
    fn test_extend_signed_and_unsigned() {
        let bits = 0b1_0000u64 << 8;
        assert_eq!(extend(bits, 8, 5, false), 0x10);
        assert_eq!(extend(bits, 8, 5, true) as i64, -16);
        assert_eq!(extend(0b0_1111 << 8, 8, 5, true), 0xF);
    }

    #[test]
    fn test_fragment_order_is_low_first() {
        // A5 layout: imm7b(13,7) imm9d(27,9) imm5c(22,5) s(36,1)
        let frags: &[Fragment] = &[(13, 7), (27, 9), (22, 5), (36, 1)];

        let bits = 0x7Fu64 << 13;
        assert_eq!(fragmented(bits, true, frags), 0x7F);

        let bits = 0x1FFu64 << 27;
        assert_eq!(fragmented(bits, true, frags), 0x1FF << 7);

        let bits = 0x1Fu64 << 22;
        assert_eq!(fragmented(bits, true, frags), 0x1F << 16);

        let bits = 1u64 << 36;
        assert_eq!(fragmented(bits, true, frags) as i64, -(1 << 21));
        assert_eq!(fragmented(bits, false, frags), 1 << 21);
    }

    #[test]
    fn test_combine_keeps_low_bits() {
        let dst = 0xFFFF_FFFF_FFFF_FFFF;
        assert_eq!(combine(dst, 8, 0x5, 4, 0), 0x5FF);
        assert_eq!(combine(0x3, 2, 0b1010_0000, 4, 4), 0b1010_11);
        assert_eq!(combine(0, 63, 1 << 36, 1, 36), 1 << 63);
    }

    #[test]
    fn test_bundle_slots() {
        let bundle: u128 = 0x10 | (1u128 << 5) | (2u128 << 46) | (3u128 << 87);
        assert_eq!(template_bits(bundle), 0x10);
        assert_eq!(slot_bits(bundle, 0), 1);
        assert_eq!(slot_bits(bundle, 1), 2);
        assert_eq!(slot_bits(bundle, 2), 3);

        let all = u128::MAX;
        for slot in 0..3 {
            assert_eq!(slot_bits(all, slot), SLOT_MASK);
        }
    }

    proptest! {
        #[test]
        fn prop_field_fits_width(bits in any::<u64>(), offset in 0u32..41, len in 1u32..24) {
            prop_assert!(field(bits, offset, len) < (1u64 << len));
        }

        #[test]
        fn prop_single_fragment_matches_extend(bits in any::<u64>(), offset in 0u32..30, len in 1u32..12, signed in any::<bool>()) {
            prop_assert_eq!(fragmented(bits, signed, &[(offset, len)]), extend(bits, offset, len, signed));
        }

        #[test]
        fn prop_slots_reassemble_bundle(bundle in any::<u128>()) {
            let rebuilt = template_bits(bundle) as u128
                | (slot_bits(bundle, 0) as u128) << 5
                | (slot_bits(bundle, 1) as u128) << 46
                | (slot_bits(bundle, 2) as u128) << 87;
            prop_assert_eq!(rebuilt, bundle);
        }
    }
}
