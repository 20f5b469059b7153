//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The collection reader: the recurring `(count, header_size, body_size,
//! sizes[], body)` tuple that encodes a keyed property bag. Every entity
//! record body, and every `0D:*C`/`0D:*L` sub-property, is a collection.

use crate::error::{Error, Result};
use crate::key::{decode_swapped_key, PropertyKey};
use crate::schema::Schema;
use crate::value::PropertyMap;

/// One (key, declared size) pair read from the size array.
struct SizedKey {
    key: PropertyKey,
    size: usize,
}

/// Reads the size array starting at `input[12..]`, up to `header_size`
/// (absolute, inclusive of the 12-byte count/header/body header). Every
/// entry is 8 bytes: a 4-byte swapped key, then a 4-byte `u32` size. The
/// 64-bit width some footer values use is a property of a nested re-parse
/// of one footer's own bytes, not of the main size array.
fn read_sizes(input: &[u8], header_size: usize) -> Vec<SizedKey> {
    let mut sizes = Vec::new();
    let mut pos = 12;
    while pos + 4 <= header_size && pos + 4 <= input.len() {
        let mut key_bytes = [0u8; 4];
        key_bytes.copy_from_slice(&input[pos..pos + 4]);
        let key = decode_swapped_key(&key_bytes);

        if pos + 8 > input.len() {
            log::warn!(target: "collection_reader", "truncated size-array entry for {}", key);
            break;
        }
        let mut value = [0u8; 4];
        value.copy_from_slice(&input[pos + 4..pos + 8]);
        sizes.push(SizedKey { key, size: u32::from_le_bytes(value) as usize });
        pos += 8;
    }
    sizes
}

/// Splits a collection body into its raw `(key, bytes)` items, with no
/// dictionary lookup or property decoding applied. Shared by the keyed
/// collection reader and by handlers (such as the actions-taken list) that
/// address items by position rather than by resolved name.
pub fn read_raw_items(input: &[u8], context_name: &str) -> Result<Vec<(PropertyKey, Vec<u8>)>> {
    if input.len() < 12 {
        return Err(Error::UnexpectedEof {
            context: "collection header",
            needed: 12,
            available: input.len(),
        });
    }
    let header_size = i32::from_le_bytes([input[4], input[5], input[6], input[7]]).max(0) as usize;
    let body_size = i32::from_le_bytes([input[8], input[9], input[10], input[11]]).max(0) as usize;

    if input.len() < header_size {
        return Err(Error::UnexpectedEof {
            context: "collection size array",
            needed: header_size,
            available: input.len(),
        });
    }
    if input.len() < header_size + body_size {
        return Err(Error::UnexpectedEof {
            context: "collection body",
            needed: header_size + body_size,
            available: input.len(),
        });
    }

    let sizes = read_sizes(input, header_size);
    let body = &input[header_size..header_size + body_size];

    let mut items = Vec::with_capacity(sizes.len());
    let mut offset = 0usize;
    for SizedKey { key, size } in sizes {
        let available = body.len().saturating_sub(offset);
        let item_size = if size > available {
            log::warn!(
                target: "collection_reader",
                "item for {} in {} overruns body by {} bytes, truncating",
                key, context_name, size - available
            );
            available
        } else {
            size
        };
        let item = &body[offset..offset + item_size];
        offset += item_size;
        items.push((key, item.to_vec()));
    }

    let residual = body.len().saturating_sub(offset);
    if residual > 0 {
        log::warn!(
            target: "collection_reader",
            "{} bytes of residual data after last item in {}",
            residual, context_name
        );
    }

    Ok(items)
}

/// Decodes a collection body into a property map under the given schema.
pub fn read_collection(input: &[u8], schema: &'static Schema) -> Result<PropertyMap> {
    let items = read_raw_items(input, schema.class_name)?;
    let mut map = PropertyMap::new();
    for (key, bytes) in items {
        if let Some((name, value)) = super::property::decode_property(&key, &bytes, schema) {
            map.insert(name, value);
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    static EMPTY_SCHEMA: Schema = Schema {
        class_name: "Test",
        overrides: &[],
        remap: &[],
        skip_null: &[],
        skip_dupe: &[],
        skip_indb: &[],
    };

    #[test]
    fn empty_collection() {
        let input = [0u8, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0];
        let map = read_collection(&input, &EMPTY_SCHEMA).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn single_boolean_property() {
        // count=1, header_size=20, body_size=1
        let input: Vec<u8> = vec![
            1, 0, 0, 0, 20, 0, 0, 0, 1, 0, 0, 0,
            // size array: key (08,08), size=1
            0x08, 0x00, 0x00, 0x08, 0x01, 0x00, 0x00, 0x00,
            // body
            0x01,
        ];
        let map = read_collection(&input, &EMPTY_SCHEMA).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn header_shorter_than_declared_is_fatal() {
        let input = [0u8, 0, 0, 0, 200, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(read_collection(&input, &EMPTY_SCHEMA), Err(Error::UnexpectedEof { .. })));
    }
}
