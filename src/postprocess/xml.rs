//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Collects every top-level `XML:<name>` property into one `XML` sub-map
//! keyed by `<name>`. Applied unconditionally after the class-specific
//! post-processor, for every entity.

use crate::value::{PropertyMap, Value};

pub fn coalesce(mut out: PropertyMap) -> PropertyMap {
    let keys: Vec<String> = out.keys().filter(|k| k.starts_with("XML:")).cloned().collect();
    if keys.is_empty() {
        return out;
    }

    let mut xml = PropertyMap::new();
    for key in keys {
        if let Some(value) = out.remove(&key) {
            let suffix = key["XML:".len()..].to_string();
            xml.insert(suffix, value);
        }
    }
    out.insert("XML".to_string(), Value::Map(xml));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_prefixed_keys_under_xml() {
        let mut out = PropertyMap::new();
        out.insert("XML:Foo".to_string(), Value::Text("a".to_string()));
        out.insert("XML:Bar".to_string(), Value::Text("b".to_string()));
        out.insert("Subject".to_string(), Value::Text("unrelated".to_string()));

        let out = coalesce(out);
        assert!(out.get("XML:Foo").is_none());
        let xml = out.get("XML").and_then(Value::as_map).unwrap();
        assert_eq!(xml.get("Foo"), Some(&Value::Text("a".to_string())));
        assert_eq!(xml.get("Bar"), Some(&Value::Text("b".to_string())));
        assert_eq!(out.get("Subject"), Some(&Value::Text("unrelated".to_string())));
    }

    #[test]
    fn no_xml_keys_is_a_no_op() {
        let mut out = PropertyMap::new();
        out.insert("Subject".to_string(), Value::Text("hi".to_string()));
        let out = coalesce(out);
        assert!(out.get("XML").is_none());
    }

    #[test]
    fn idempotent_on_already_coalesced_output() {
        let mut out = PropertyMap::new();
        out.insert("XML:Foo".to_string(), Value::Text("a".to_string()));
        let once = coalesce(out);
        let twice = coalesce(once.clone());
        assert_eq!(once, twice);
    }
}
