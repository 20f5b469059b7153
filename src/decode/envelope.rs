//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The record driver: reads the fixed envelope shared by every on-disk
//! record, decides whether it is an entity or a block, and dispatches into
//! the collection reader (entities) or `crate::block` (blocks).

use crate::block;
use crate::error::{Error, Result};
use crate::postprocess;
use crate::schema::classes::schema_for_class;
use crate::value::{PropertyMap, Value};

use super::{collection, primitive};

const MAGIC: [u8; 4] = [0xD0, 0x0D, 0x00, 0x00];

/// Decodes one record blob into a property map.
///
/// Every record starts with the 4-byte magic, 4 unused bytes, and a 4-byte
/// `i32` discriminator: `1` for an entity, `2` for a block. Any other value
/// is logged and produces an empty map rather than failing.
pub fn parse(input: &[u8]) -> Result<PropertyMap> {
    if input.len() < 12 {
        return Err(Error::UnexpectedEof { context: "record envelope", needed: 12, available: input.len() });
    }

    let mut found = [0u8; 4];
    found.copy_from_slice(&input[0..4]);
    if found != MAGIC {
        return Err(Error::BadMagic { found });
    }

    let discriminator = i32::from_le_bytes([input[8], input[9], input[10], input[11]]);
    let body = &input[12..];
    match discriminator {
        1 => parse_entity(body),
        2 => parse_block(body),
        other => {
            log::warn!(target: "envelope", "unrecognized entity/block discriminator {}", other);
            Ok(PropertyMap::new())
        }
    }
}

/// Entity header: 4-byte `RecordID`, 4-byte class-id, 12 unused bytes,
/// 4-byte reversed `BlockType`, 4-byte `ItemID`, then a collection body.
fn parse_entity(input: &[u8]) -> Result<PropertyMap> {
    const HEADER_LEN: usize = 28;
    if input.len() < HEADER_LEN {
        return Err(Error::UnexpectedEof { context: "entity header", needed: HEADER_LEN, available: input.len() });
    }

    let record_id = i32::from_le_bytes([input[0], input[1], input[2], input[3]]);
    let class_id = i32::from_le_bytes([input[4], input[5], input[6], input[7]]);

    let mut block_type_bytes = [0u8; 4];
    block_type_bytes.copy_from_slice(&input[20..24]);
    let block_type = primitive::four_char_code(&block_type_bytes);

    let item_id = input[24..28].to_vec();

    let schema = schema_for_class(class_id).ok_or(Error::UnknownClassId(class_id))?;

    let mut map = collection::read_collection(&input[HEADER_LEN..], schema)?;
    map.insert("RecordID".to_string(), Value::Int(record_id));
    map.insert("BlockType".to_string(), Value::TypeCode(block_type));
    map.insert("ItemID".to_string(), Value::Bytes(item_id));

    let map = match schema.class_name {
        "OlkEvent" => postprocess::event::apply(map),
        "OlkContact" => postprocess::contact::apply(map),
        "OlkMain" => postprocess::main_account::apply(map),
        _ => map,
    };

    Ok(postprocess::xml::coalesce(map))
}

/// Block header: 20-byte `BlockID`, 4-byte reversed `BlockType`, 4-byte
/// `ItemID`, then a block-type-specific body.
fn parse_block(input: &[u8]) -> Result<PropertyMap> {
    const HEADER_LEN: usize = 28;
    if input.len() < HEADER_LEN {
        return Err(Error::UnexpectedEof { context: "block header", needed: HEADER_LEN, available: input.len() });
    }

    let block_id = input[0..20].to_vec();

    let mut block_type_bytes = [0u8; 4];
    block_type_bytes.copy_from_slice(&input[20..24]);
    let block_type = primitive::four_char_code(&block_type_bytes);

    let item_id = input[24..28].to_vec();
    let body = &input[HEADER_LEN..];

    let mut map = block::dispatch(block_type.as_deref(), body);
    map.insert("BlockID".to_string(), Value::Bytes(block_id));
    map.insert("ItemID".to_string(), Value::Bytes(item_id));
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_collection() -> Vec<u8> {
        vec![0, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0]
    }

    #[test]
    fn bad_magic_is_fatal() {
        let input = [0xAAu8, 0xBB, 0xCC, 0xDD, 0, 0, 0, 0, 1, 0, 0, 0];
        assert!(matches!(parse(&input), Err(Error::BadMagic { .. })));
    }

    #[test]
    fn unknown_discriminator_is_non_fatal_empty_map() {
        let mut input = MAGIC.to_vec();
        input.extend_from_slice(&[0, 0, 0, 0]);
        input.extend_from_slice(&9i32.to_le_bytes());
        let map = parse(&input).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn unknown_class_id_is_fatal() {
        let mut input = MAGIC.to_vec();
        input.extend_from_slice(&[0, 0, 0, 0]);
        input.extend_from_slice(&1i32.to_le_bytes()); // entity
        input.extend_from_slice(&7i32.to_le_bytes()); // RecordID
        input.extend_from_slice(&9999i32.to_le_bytes()); // unknown class-id
        input.extend_from_slice(&[0u8; 12]); // unused
        input.extend_from_slice(&[0x6E, 0x67, 0x69, 0x53]); // "Sign" reversed
        input.extend_from_slice(&[0u8; 4]); // ItemID
        input.extend_from_slice(&empty_collection());
        assert!(matches!(parse(&input), Err(Error::UnknownClassId(9999))));
    }

    #[test]
    fn minimal_signature_entity_decodes() {
        // class-id 21 is OlkSignature, a schema with no overrides.
        let mut input = MAGIC.to_vec();
        input.extend_from_slice(&[0, 0, 0, 0]);
        input.extend_from_slice(&1i32.to_le_bytes()); // entity
        input.extend_from_slice(&42i32.to_le_bytes()); // RecordID
        input.extend_from_slice(&21i32.to_le_bytes()); // class-id
        input.extend_from_slice(&[0u8; 12]);
        input.extend_from_slice(&[0, 0, 0, 0]); // all-zero BlockType
        input.extend_from_slice(&[1, 2, 3, 4]); // ItemID
        input.extend_from_slice(&empty_collection());

        let map = parse(&input).unwrap();
        assert_eq!(map.get("RecordID"), Some(&Value::Int(42)));
        assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(None)));
        assert_eq!(map.get("ItemID"), Some(&Value::Bytes(vec![1, 2, 3, 4])));
    }

    #[test]
    fn unknown_block_type_falls_through_to_raw_block_data() {
        let mut input = MAGIC.to_vec();
        input.extend_from_slice(&[0, 0, 0, 0]);
        input.extend_from_slice(&2i32.to_le_bytes()); // block
        input.extend_from_slice(&[0u8; 20]); // BlockID
        input.extend_from_slice(&[0x58, 0x58, 0x58, 0x58]); // "XXXX" reversed, unknown type
        input.extend_from_slice(&[0u8; 4]); // ItemID
        input.extend_from_slice(&[9, 9, 9]); // body

        let map = parse(&input).unwrap();
        assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(Some("XXXX".to_string()))));
        assert_eq!(map.get("BlockData"), Some(&Value::Bytes(vec![9, 9, 9])));
    }
}
