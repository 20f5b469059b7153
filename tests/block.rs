//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Full-pipeline tests of block records, decoded through `olkdata::parse`.

use olkdata::Value;

const MAGIC: [u8; 4] = [0xD0, 0x0D, 0x00, 0x00];

fn block_record(reversed_type: [u8; 4], body: &[u8]) -> Vec<u8> {
    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&2i32.to_le_bytes()); // discriminator: block
    input.extend_from_slice(&[7u8; 20]); // BlockID
    input.extend_from_slice(&reversed_type);
    input.extend_from_slice(&[3, 3, 3, 3]); // ItemID
    input.extend_from_slice(body);
    input
}

#[test]
fn unknown_block_type_falls_through_to_raw_block_data_with_a_diagnostic() {
    let input = block_record([0x5A, 0x5A, 0x5A, 0x5A], &[1, 2, 3, 4]); // "ZZZZ"

    let map = olkdata::parse(&input).expect("unknown block type is non-fatal");
    assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(Some("ZZZZ".to_string()))));
    assert_eq!(map.get("BlockData"), Some(&Value::Bytes(vec![1, 2, 3, 4])));
    assert_eq!(map.get("BlockID"), Some(&Value::Bytes(vec![7u8; 20])));
    assert_eq!(map.get("ItemID"), Some(&Value::Bytes(vec![3, 3, 3, 3])));
}

#[test]
fn image_block_keeps_its_body_as_raw_file_data() {
    let input = block_record([0x42, 0x67, 0x6D, 0x49], &[0xFF, 0xEE, 0xDD]); // "ImgB"

    let map = olkdata::parse(&input).expect("image block should decode");
    assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(Some("ImgB".to_string()))));
    assert_eq!(map.get("FileData"), Some(&Value::Bytes(vec![0xFF, 0xEE, 0xDD])));
}
