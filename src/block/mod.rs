//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Block-type dispatch: a block record's body has no schema of its own, only
//! a handful of hard-coded layouts keyed by its four-char `BlockType`.

mod recent_addresses;
mod sync_map;

use crate::decode::primitive;
use crate::value::{PropertyMap, Value};

/// Parses a block body given its already-decoded `BlockType` (`None` if the
/// type bytes were all zero). Every branch sets `BlockType` in the returned
/// map; the caller still owns `BlockID`/`ItemID`.
pub fn dispatch(block_type: Option<&str>, body: &[u8]) -> PropertyMap {
    let mut map = match block_type {
        Some("ImgB") => {
            let mut m = PropertyMap::new();
            m.insert("FileData".to_string(), Value::Bytes(body.to_vec()));
            m
        }
        Some("Attc") | Some("MSrc") | Some("ClAt") => {
            let mut m = PropertyMap::new();
            m.insert("FileContents".to_string(), Value::Text(primitive::utf8_string(body)));
            m
        }
        Some("RcnA") => recent_addresses::parse(body),
        Some("ExSM") => sync_map::parse(body),
        Some("ExFS") => {
            let mut m = PropertyMap::new();
            m.insert("data".to_string(), Value::Bytes(body.to_vec()));
            m
        }
        other => {
            log::warn!(target: "block", "unknown block type {:?}", other);
            let mut m = PropertyMap::new();
            m.insert("BlockData".to_string(), Value::Bytes(body.to_vec()));
            m
        }
    };
    map.insert("BlockType".to_string(), Value::TypeCode(block_type.map(str::to_string)));
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img_block_keeps_raw_file_data() {
        let map = dispatch(Some("ImgB"), &[1, 2, 3]);
        assert_eq!(map.get("FileData"), Some(&Value::Bytes(vec![1, 2, 3])));
    }

    #[test]
    fn attachment_block_decodes_utf8_contents() {
        let map = dispatch(Some("Attc"), b"hello");
        assert_eq!(map.get("FileContents"), Some(&Value::Text("hello".to_string())));
    }

    #[test]
    fn folder_sync_block_keeps_raw_data() {
        let map = dispatch(Some("ExFS"), &[5, 6]);
        assert_eq!(map.get("data"), Some(&Value::Bytes(vec![5, 6])));
    }

    #[test]
    fn unknown_block_type_is_raw_with_diagnostic() {
        let map = dispatch(Some("Zzzz"), &[7]);
        assert_eq!(map.get("BlockData"), Some(&Value::Bytes(vec![7])));
        assert_eq!(map.get("BlockType"), Some(&Value::TypeCode(Some("Zzzz".to_string()))));
    }
}
