//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The list reader: a count-prefixed homogeneous list of collections sharing
//! one sub-schema (the `0D:*L` handler).

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::value::PropertyMap;

use super::collection::read_collection;

/// Decodes a count-prefixed list of collections, each parsed with `sub_schema`.
pub fn read_list(input: &[u8], sub_schema: &'static Schema) -> Result<Vec<PropertyMap>> {
    if input.len() < 4 {
        return Err(Error::UnexpectedEof { context: "list length", needed: 4, available: input.len() });
    }
    let count = i32::from_le_bytes([input[0], input[1], input[2], input[3]]).max(0) as usize;

    let sizes_start = 4;
    let sizes_end = sizes_start + count * 2;
    if input.len() < sizes_end {
        return Err(Error::UnexpectedEof {
            context: "list item sizes",
            needed: sizes_end,
            available: input.len(),
        });
    }

    let item_sizes: Vec<usize> = input[sizes_start..sizes_end]
        .chunks_exact(2)
        .map(|w| u16::from_le_bytes([w[0], w[1]]) as usize)
        .collect();

    let declared_total: usize = item_sizes.iter().sum();
    let available_total = input.len().saturating_sub(sizes_end);
    if declared_total != available_total {
        log::warn!(
            target: "list_reader",
            "list item sizes sum to {} but {} bytes remain in {}",
            declared_total, available_total, sub_schema.class_name
        );
    }

    let mut items = Vec::with_capacity(count);
    let mut offset = sizes_end;
    for size in item_sizes {
        let end = (offset + size).min(input.len());
        items.push(read_collection(&input[offset..end], sub_schema)?);
        offset = end;
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    static EMPTY_SCHEMA: Schema = Schema {
        class_name: "TestList",
        overrides: &[],
        remap: &[],
        skip_null: &[],
        skip_dupe: &[],
        skip_indb: &[],
    };

    #[test]
    fn empty_list() {
        let input = [0u8, 0, 0, 0];
        let items = read_list(&input, &EMPTY_SCHEMA).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn single_empty_collection_item() {
        let mut input = vec![1u8, 0, 0, 0]; // count = 1
        input.extend_from_slice(&12u16.to_le_bytes()); // item size = 12 (empty collection header)
        input.extend_from_slice(&[0u8, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0]);
        let items = read_list(&input, &EMPTY_SCHEMA).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_empty());
    }

    #[test]
    fn too_few_bytes_for_sizes_is_fatal() {
        let input = [5u8, 0, 0, 0, 1, 2]; // claims 5 items but only 1 size entry present
        assert!(matches!(read_list(&input, &EMPTY_SCHEMA), Err(Error::UnexpectedEof { .. })));
    }
}
