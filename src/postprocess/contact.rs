//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! `OlkContact` post-processing: collapse the indexed `EmailAddress_N`/
//! `IMAddress_N` properties and their separate type-bitmask/count pair into
//! one ordered `{Type, Address}` list each, and resolve the default address
//! for each from a one-byte index.

use crate::value::{PropertyMap, Value};

/// Expands a 2-bit-per-entry type bitmask (bit 0 set → Home, else bit 1 set
/// → Other, else → Work) into `count` ordered labels.
fn type_list(mut flag: i64, count: usize) -> Vec<&'static str> {
    let mut types = Vec::with_capacity(count);
    for _ in 0..count {
        let label = if flag & 1 != 0 {
            "Home"
        } else if flag & 2 != 0 {
            "Other"
        } else {
            "Work"
        };
        types.push(label);
        flag >>= 2;
    }
    types
}

/// Pulls every `{prefix}_{n}` key out of `out`, sorted by `n`.
fn extract_address_list(out: &mut PropertyMap, prefix: &str) -> Vec<String> {
    let needle = format!("{}_", prefix);
    let mut indexed: Vec<(u32, String)> = out
        .keys()
        .filter(|k| k.starts_with(&needle))
        .filter_map(|k| k[needle.len()..].parse::<u32>().ok().map(|n| (n, k.clone())))
        .collect();
    indexed.sort_by_key(|(n, _)| *n);

    indexed
        .into_iter()
        .filter_map(|(_, key)| match out.remove(&key) {
            Some(Value::Text(addr)) => Some(addr),
            _ => None,
        })
        .collect()
}

fn assemble(
    out: &mut PropertyMap,
    prefix: &str,
    flags_key: &str,
    count_key: &str,
    default_key: &str,
    default_base: i64,
    default_field: &str,
) {
    let flag = out.remove(flags_key).as_ref().and_then(Value::as_i64).unwrap_or(0);
    let count = out.remove(count_key).as_ref().and_then(Value::as_i64).unwrap_or(0).max(0) as usize;
    let types = type_list(flag, count);

    let addresses = extract_address_list(out, prefix);
    let entries: Vec<PropertyMap> = types
        .into_iter()
        .zip(addresses.iter())
        .map(|(t, a)| {
            let mut entry = PropertyMap::new();
            entry.insert("Type".to_string(), Value::Text(t.to_string()));
            entry.insert("Address".to_string(), Value::Text(a.clone()));
            entry
        })
        .collect();

    let default_index = match out.remove(default_key) {
        Some(Value::Bytes(b)) if !b.is_empty() => (b[0] as i64 - default_base) as usize,
        _ => 0,
    };
    if let Some(Value::Text(addr)) = entries.get(default_index).and_then(|e| e.get("Address")) {
        out.insert(default_field.to_string(), Value::Text(addr.clone()));
    }

    out.insert(format!("{}es", prefix), Value::List(entries));
}

pub fn apply(mut out: PropertyMap) -> PropertyMap {
    assemble(&mut out, "EmailAddress", "EmailTypesRaw", "EmailCount", "DefaultEmailRaw", 102, "DefaultEmailAddress");
    assemble(&mut out, "IMAddress", "IMTypesRaw", "IMCount", "DefaultIMRaw", 120, "DefaultIMAddress");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_typed_list_and_default() {
        let mut out = PropertyMap::new();
        out.insert("EmailTypesRaw".to_string(), Value::Int(0b01)); // first entry Home
        out.insert("EmailCount".to_string(), Value::Int(2));
        out.insert("EmailAddress_1".to_string(), Value::Text("a@example.com".to_string()));
        out.insert("EmailAddress_2".to_string(), Value::Text("b@example.com".to_string()));
        out.insert("DefaultEmailRaw".to_string(), Value::Bytes(vec![103, 0, 0, 0x1d])); // 103-102=1

        let out = apply(out);
        match out.get("EmailAddresses") {
            Some(Value::List(entries)) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].get("Type"), Some(&Value::Text("Home".to_string())));
                assert_eq!(entries[0].get("Address"), Some(&Value::Text("a@example.com".to_string())));
                assert_eq!(entries[1].get("Type"), Some(&Value::Text("Work".to_string())));
            }
            other => panic!("expected list, got {:?}", other),
        }
        assert_eq!(out.get("DefaultEmailAddress"), Some(&Value::Text("b@example.com".to_string())));
    }

    #[test]
    fn no_addresses_leaves_empty_list_and_no_default() {
        let out = apply(PropertyMap::new());
        assert_eq!(out.get("EmailAddresses"), Some(&Value::List(Vec::new())));
        assert!(out.get("DefaultEmailAddress").is_none());
    }
}
