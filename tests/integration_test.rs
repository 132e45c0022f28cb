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

mod common;

use common::assertions::{assert_listing, assert_opcode, assert_operand_value};
use common::fixtures::{self, SAMPLE_BASE};
use ia64dec::core::decoder::{Bundle, Opcode, BUNDLE_SIZE};
use ia64dec::core::disassembler::{Disassembler, ListingFlags};
use ia64dec::core::error::{DecoderError, Result};
use ia64dec::core::loader::CodeImage;
use ia64dec::core::tracer::DecodeTracer;
use ia64dec::core::Config;

fn listing(image: &CodeImage, disassembler: &Disassembler) -> Vec<String> {
    image
        .bundles()
        .flat_map(|(address, bytes)| {
            let bundle = Bundle::decode(bytes).expect("sample bundles decode");
            disassembler.disassemble_bundle(&bundle, address)
        })
        .collect()
}

#[test]
fn test_sample_program_listing() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    assert_eq!(image.bundle_count(), 2);

    let lines = listing(&image, &Disassembler::default());
    assert_listing(&lines, &fixtures::sample_listing());
    Ok(())
}

#[test]
fn test_sample_program_operands() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;

    let first = Bundle::decode(image.bundle_at(SAMPLE_BASE)?).expect("MLX bundle");
    assert_opcode(&first, 0, Opcode::Alloc);
    assert_opcode(&first, 2, Opcode::Movl);
    assert_operand_value(&first.slots()[2], 2, 0x1234_5678_9ABC_DEF0);

    // Any address inside a bundle selects it
    let second = Bundle::decode(image.bundle_at(SAMPLE_BASE + 0x1F)?).expect("MIB bundle");
    assert_opcode(&second, 0, Opcode::Addl);
    assert_opcode(&second, 1, Opcode::Adds);
    assert_opcode(&second, 2, Opcode::Br);
    assert_eq!(second.slots()[0].operand(2).map(|op| op.signed()), Some(-1));
    Ok(())
}

#[test]
fn test_load_raw_file() -> Result<()> {
    let file = fixtures::write_temp_image(&fixtures::sample_program(), ".bin");
    let image = CodeImage::load(file.path(), SAMPLE_BASE)?;

    assert_eq!(image.base(), SAMPLE_BASE);
    assert_eq!(image.size(), 2 * BUNDLE_SIZE as u64);
    assert_eq!(image.last_bundle(), Some(SAMPLE_BASE + BUNDLE_SIZE as u64));
    assert_listing(
        &listing(&image, &Disassembler::default()),
        &fixtures::sample_listing(),
    );
    Ok(())
}

#[test]
fn test_hex_dump_matches_raw_bytes() -> Result<()> {
    let bytes = fixtures::sample_program();
    let from_hex = CodeImage::from_hex(SAMPLE_BASE, &fixtures::hex_dump(&bytes))?;
    let from_bytes = CodeImage::from_bytes(SAMPLE_BASE, bytes)?;
    assert_eq!(from_hex, from_bytes);
    Ok(())
}

#[test]
fn test_out_of_range_address() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    assert!(matches!(
        image.bundle_at(SAMPLE_BASE + 0x20),
        Err(DecoderError::OutOfRange { .. })
    ));
    assert!(matches!(
        CodeImage::from_bytes(0x1008, Vec::new()),
        Err(DecoderError::MisalignedBase { address: 0x1008 })
    ));
    Ok(())
}

#[test]
fn test_listing_with_addresses_from_config() -> Result<()> {
    let config = Config::from_toml("show_address = true\nshow_template = false\n")?;
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    let disassembler = Disassembler::new(config.listing_flags());

    let lines = listing(&image, &disassembler);
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "0000000000001000  alloc r34 = ar.pfs, 0x0, 0x3, 0x1, 0x0"
    );
    assert!(lines[1].starts_with(&" ".repeat(18)));
    assert!(lines[2].starts_with("0000000000001010  addl"));
    Ok(())
}

#[test]
fn test_raw_bits_column() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    let disassembler = Disassembler::new(ListingFlags::RAW_BITS);
    let lines = listing(&image, &disassembler);

    let bundle = Bundle::decode(image.bundle_at(SAMPLE_BASE + 0x10)?).expect("MIB bundle");
    let expected = format!("  // {:011x}", bundle.slots()[0].bits());
    assert!(lines[2].ends_with(&expected), "{}", lines[2]);
    Ok(())
}

#[test]
fn test_invalid_bundle_in_image() -> Result<()> {
    let mut bytes = fixtures::sample_program();
    // Reserved template 0x1E in the second bundle
    bytes[BUNDLE_SIZE] = (bytes[BUNDLE_SIZE] & !0x1F) | 0x1E;
    let image = CodeImage::from_bytes(SAMPLE_BASE, bytes)?;

    let decoded: Vec<bool> = image
        .bundles()
        .map(|(_, b)| Bundle::decode(b).is_some())
        .collect();
    assert_eq!(decoded, vec![true, false]);
    Ok(())
}

#[test]
fn test_trace_sample_program() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    let out = tempfile::Builder::new()
        .prefix("ia64dec_trace_")
        .suffix(".log")
        .tempfile()?;

    let mut tracer = DecodeTracer::new(out.path())?;
    for (address, bytes) in image.bundles() {
        tracer.trace(address, bytes, Bundle::decode(bytes).as_ref())?;
    }
    tracer.flush()?;
    assert_eq!(tracer.traced(), 2);
    assert_eq!(tracer.invalid(), 0);

    let text = std::fs::read_to_string(out.path())?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("MLX;"));
    assert!(lines[1].contains("movl r8 = 0x123456789abcdef0"));
    assert!(lines[2].contains("br.cond.sptk.few 0x1000"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let image = CodeImage::from_bytes(SAMPLE_BASE, fixtures::sample_program())?;
    let bundles: Vec<Bundle> = image
        .bundles()
        .filter_map(|(_, b)| Bundle::decode(b))
        .collect();

    let json = serde_json::to_value(&bundles)?;
    assert_eq!(json[0]["template"], "MLX;");
    assert_eq!(json[0]["slots"][0]["opcode"], "alloc");
    assert_eq!(json[0]["slots"][0]["first_source_operand_index"], 2);
    assert_eq!(
        json[1]["slots"][0]["raw_bits"],
        bundles[1].slots()[0].bits()
    );
    assert_eq!(json[0]["slots"][1]["opcode"], serde_json::Value::Null);
    assert_eq!(json[1]["slots"][2]["completers"][0]["class"], "btype");
    assert_eq!(json[1]["slots"][2]["completers"][0]["type"], "cond");
    Ok(())
}
