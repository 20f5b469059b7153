//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Full-pipeline test of contact email-address assembly: a whole
//! `OlkContact` record, built from literal bytes, decoded through
//! `olkdata::parse`.

use olkdata::Value;

const MAGIC: [u8; 4] = [0xD0, 0x0D, 0x00, 0x00];

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
}

fn swap_key(tag: &str, index: &str) -> [u8; 4] {
    let tag_bytes = hex_to_bytes(tag);
    let index_bytes = hex_to_bytes(index);
    let mut item = [0u8; 4];
    if tag_bytes.len() == 1 {
        item[3] = tag_bytes[0];
    } else {
        item[2] = tag_bytes[0];
        item[3] = tag_bytes[1];
    }
    if index_bytes.len() == 1 {
        item[0] = index_bytes[0];
    } else {
        item[0] = index_bytes[0];
        item[1] = index_bytes[1];
    }
    item
}

fn build_collection(items: &[(&str, &str, Vec<u8>)]) -> Vec<u8> {
    let header_size = 12 + items.len() * 8;
    let body: Vec<u8> = items.iter().flat_map(|(_, _, b)| b.clone()).collect();

    let mut out = Vec::new();
    out.extend_from_slice(&(items.len() as i32).to_le_bytes());
    out.extend_from_slice(&(header_size as i32).to_le_bytes());
    out.extend_from_slice(&(body.len() as i32).to_le_bytes());
    for (tag, index, b) in items {
        out.extend_from_slice(&swap_key(tag, index));
        out.extend_from_slice(&(b.len() as u32).to_le_bytes());
    }
    out.extend_from_slice(&body);
    out
}

#[test]
fn contact_email_addresses_are_assembled_with_types_and_default() {
    let contact_body = build_collection(&[
        ("03", "E4", 0b01i32.to_le_bytes().to_vec()), // EmailTypesRaw: first entry Home
        ("03", "64", 2i32.to_le_bytes().to_vec()),     // EmailCount
        ("1D", "66", b"first@example.com".to_vec()),   // EmailAddress_1
        ("1D", "67", b"second@example.com".to_vec()),  // EmailAddress_2
        ("02", "65", vec![103, 0, 0, 0x1d]),            // DefaultEmailRaw: 103-102=1
    ]);

    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&1i32.to_le_bytes()); // entity
    input.extend_from_slice(&1i32.to_le_bytes()); // RecordID
    input.extend_from_slice(&4i32.to_le_bytes()); // class-id: OlkContact
    input.extend_from_slice(&[0u8; 12]);
    input.extend_from_slice(&[0, 0, 0, 0]); // BlockType
    input.extend_from_slice(&[0, 0, 0, 0]); // ItemID
    input.extend_from_slice(&contact_body);

    let map = olkdata::parse(&input).expect("contact entity should decode");

    let emails = map.get("EmailAddresses").and_then(Value::as_list).expect("EmailAddresses present");
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].get("Type"), Some(&Value::Text("Home".to_string())));
    assert_eq!(emails[0].get("Address"), Some(&Value::Text("first@example.com".to_string())));
    assert_eq!(emails[1].get("Type"), Some(&Value::Text("Work".to_string())));
    assert_eq!(emails[1].get("Address"), Some(&Value::Text("second@example.com".to_string())));
    assert_eq!(map.get("DefaultEmailAddress"), Some(&Value::Text("second@example.com".to_string())));

    assert!(map.get("EmailAddress_1").is_none());
    assert!(map.get("EmailTypesRaw").is_none());
}
