//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Full-pipeline tests of recurrence-rule decoding and normalization: a
//! whole `OlkEvent` record, built from literal bytes, decoded through
//! `olkdata::parse`.

use olkdata::Value;

const MAGIC: [u8; 4] = [0xD0, 0x0D, 0x00, 0x00];

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
}

/// Inverse of `key::decode_swapped_key`: encodes a `tag:index` pair back
/// into the swapped 4-byte size-array key.
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

fn event_record(rrule: Vec<u8>) -> Vec<u8> {
    let event_body = build_collection(&[("0D", "02", rrule)]);

    let mut input = MAGIC.to_vec();
    input.extend_from_slice(&[0, 0, 0, 0]);
    input.extend_from_slice(&1i32.to_le_bytes()); // entity
    input.extend_from_slice(&1i32.to_le_bytes()); // RecordID
    input.extend_from_slice(&8i32.to_le_bytes()); // class-id: OlkEvent
    input.extend_from_slice(&[0u8; 12]);
    input.extend_from_slice(&[0, 0, 0, 0]); // BlockType
    input.extend_from_slice(&[0, 0, 0, 0]); // ItemID
    input.extend_from_slice(&event_body);
    input
}

#[test]
fn daily_recurrence_interval_is_converted_from_minutes_to_days() {
    let rrule = build_collection(&[
        ("03", "01", 0i32.to_le_bytes().to_vec()), // RecurrenceType = Daily
        ("03", "02", 2880i32.to_le_bytes().to_vec()), // Interval, 2 days in minutes
        ("03", "03", 8227i32.to_le_bytes().to_vec()), // EndType = None
    ]);
    let input = event_record(rrule);

    let map = olkdata::parse(&input).expect("event entity should decode");
    let rrule = map.get("RRule").and_then(Value::as_map).expect("RRule present");
    assert_eq!(rrule.get("RecurrenceType"), Some(&Value::Text("Daily".to_string())));
    assert_eq!(rrule.get("Interval"), Some(&Value::Int(2)));
}

#[test]
fn month_nth_last_friday_becomes_day_fr_setpos_minus_one() {
    let rrule = build_collection(&[
        ("03", "01", 3i32.to_le_bytes().to_vec()), // RecurrenceType = MonthNth
        ("03", "09", 32i32.to_le_bytes().to_vec()), // MonthDOW bitmask: bit 5 = Friday
        ("03", "0A", 5i32.to_le_bytes().to_vec()),  // MonthNth = 5 ("last")
        ("03", "03", 8227i32.to_le_bytes().to_vec()), // EndType = None
    ]);
    let input = event_record(rrule);

    let map = olkdata::parse(&input).expect("event entity should decode");
    let rrule = map.get("RRule").and_then(Value::as_map).expect("RRule present");
    assert_eq!(rrule.get("Day"), Some(&Value::Text("FR".to_string())));
    assert_eq!(rrule.get("SetPos"), Some(&Value::Int(-1)));
    assert!(rrule.get("MonthDOW").is_none());
    assert!(rrule.get("MonthNth").is_none());
}
