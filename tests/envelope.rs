//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Whole-record envelope and entity/block dispatch, exercised through the
//! public `olkdata::parse` entry point rather than any one internal module.

use olkdata::{Error, Value};

const MAGIC: [u8; 4] = [0xD0, 0x0D, 0x00, 0x00];

fn empty_collection() -> Vec<u8> {
    vec![0, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0]
}

fn single_boolean_collection() -> Vec<u8> {
    vec![
        1, 0, 0, 0, 20, 0, 0, 0, 1, 0, 0, 0, // count=1, header_size=20, body_size=1
        0x08, 0x00, 0x00, 0x0B, 0x01, 0x00, 0x00, 0x00, // size array: key (tag=0B, index=08), size=1
        0x01, // body: true
    ]
}

#[test]
fn minimal_signature_entity_decodes_with_a_single_boolean_property() {
    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]); // unused
    input.extend_from_slice(&1i32.to_le_bytes()); // discriminator: entity
    input.extend_from_slice(&7i32.to_le_bytes()); // RecordID
    input.extend_from_slice(&21i32.to_le_bytes()); // class-id: OlkSignature
    input.extend_from_slice(&[0u8; 12]); // unused header
    input.extend_from_slice(&[0, 0, 0, 0]); // all-zero BlockType
    input.extend_from_slice(&[9, 9, 9, 9]); // ItemID
    input.extend_from_slice(&single_boolean_collection());

    let map = olkdata::parse(&input).expect("minimal entity should decode");
    assert_eq!(map.get("RecordID"), Some(&Value::Int(7)));
    assert_eq!(map.get("ItemID"), Some(&Value::Bytes(vec![9, 9, 9, 9])));
    assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(None)));
    assert_eq!(map.get("HasReminder"), Some(&Value::Bool(true)));
}

#[test]
fn bad_magic_is_the_only_header_level_fatal_error() {
    let input = [0xDEu8, 0xAD, 0xBE, 0xEF, 0, 0, 0, 0, 1, 0, 0, 0];
    match olkdata::parse(&input) {
        Err(Error::BadMagic { found }) => assert_eq!(found, [0xDE, 0xAD, 0xBE, 0xEF]),
        other => panic!("expected BadMagic, got {:?}", other),
    }
}

#[test]
fn unknown_class_id_is_fatal() {
    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&1i32.to_le_bytes());
    input.extend_from_slice(&1i32.to_le_bytes()); // RecordID
    input.extend_from_slice(&424242i32.to_le_bytes()); // unknown class-id
    input.extend_from_slice(&[0u8; 12]);
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&empty_collection());

    match olkdata::parse(&input) {
        Err(Error::UnknownClassId(424242)) => {}
        other => panic!("expected UnknownClassId, got {:?}", other),
    }
}

#[test]
fn unrecognized_discriminator_is_non_fatal_and_empty() {
    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&77i32.to_le_bytes());
    let map = olkdata::parse(&input).unwrap();
    assert!(map.is_empty());
}
