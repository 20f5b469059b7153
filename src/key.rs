//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Property keys: a variant-tag / index pair rendered as hex for dictionary lookup.

use std::fmt;

/// A `(variant_tag, index)` pair identifying a property. Both halves are kept
/// as upper-case hex strings rather than integers because the tag width (one
/// or two bytes) and index width (one or two bytes) vary per entry and the
/// global dictionary is keyed on the hex rendering directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey {
    pub tag: String,
    pub index: String,
}

impl PropertyKey {
    pub fn new(tag: impl Into<String>, index: impl Into<String>) -> Self {
        PropertyKey { tag: tag.into(), index: index.into() }
    }

    /// The `tag:index` string used to look the key up in the global property
    /// dictionary and in schema override/remap tables.
    pub fn lookup(&self) -> String {
        format!("{}:{}", self.tag, self.index)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.tag, self.index)
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// Decodes the swapped key encoding found in a collection's size array.
///
/// `item` must be the 4 leading bytes of a size-array entry. The tag half is
/// `item[2..4]` unless `item[2]` is zero, in which case it collapses to the
/// single byte `item[3..4]`; the index half is `item[0..2]` unless `item[1]`
/// is zero, in which case it collapses to `item[0..1]`.
pub fn decode_swapped_key(item: &[u8; 4]) -> PropertyKey {
    let tag = if item[2] != 0 {
        hex_bytes(&item[2..4])
    } else {
        hex_bytes(&item[3..4])
    };
    let index = if item[1] != 0 {
        hex_bytes(&item[0..2])
    } else {
        hex_bytes(&item[0..1])
    };
    PropertyKey::new(tag, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_byte_tag_two_byte_index() {
        let key = decode_swapped_key(&[0x01, 0x01, 0x43, 0x46]);
        assert_eq!(key.tag, "4643");
        assert_eq!(key.index, "0101");
    }

    #[test]
    fn one_byte_tag_one_byte_index() {
        // tag 0x03, index 0x01: stored as 01 00 03 00
        let key = decode_swapped_key(&[0x01, 0x00, 0x03, 0x00]);
        assert_eq!(key.tag, "03");
        assert_eq!(key.index, "01");
        assert_eq!(key.lookup(), "03:01");
    }

    #[test]
    fn two_byte_index_collapsed_tag() {
        // tag 0x08 (single byte, since item[2]==0 collapses to item[3:4]),
        // index 0x2C01 (two bytes, since item[1]!=0)
        let key = decode_swapped_key(&[0x01, 0x2C, 0x00, 0x08]);
        assert_eq!(key.tag, "08");
        assert_eq!(key.index, "2C01");
    }

    #[test]
    fn display_matches_lookup() {
        let key = PropertyKey::new("1F", "01");
        assert_eq!(key.to_string(), key.lookup());
    }
}
