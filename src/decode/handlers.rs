//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Handler functions referenced from `0D:*` dictionary entries whose shape
//! isn't a plain nested collection or list: each is a genuine parser of its
//! own over the raw bytes the primitive decode step passed through.

use crate::schema::enums::{OL_ACTION, OL_USER_TYPE};
use crate::value::{DateTimeValue, PropertyMap, Value};

use super::collection::read_raw_items;
use super::primitive;

/// `0D:07` (Event `ReplyTo`): one ignored byte, two `i16`s (a constant `1`
/// and the entry count), then that many length-prefixed ASCII emails, each
/// immediately followed by a duplicate length byte and 4 trailing zero bytes.
pub fn reply_to_list(value: Value) -> Value {
    let bytes = match value.as_bytes() {
        Some(b) => b,
        None => return value,
    };
    if bytes.len() < 5 {
        log::warn!(target: "property_decoder", "reply-to list shorter than header, {} bytes", bytes.len());
        return Value::List(Vec::new());
    }
    let count = i16::from_le_bytes([bytes[3], bytes[4]]).max(0) as usize;

    let mut entries = Vec::with_capacity(count);
    let mut pos = 5usize;
    for _ in 0..count {
        if pos + 4 > bytes.len() {
            log::warn!(target: "property_decoder", "reply-to list truncated before entry length");
            break;
        }
        let size = i32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]).max(0) as usize;
        let string_start = pos + 5;
        let string_end = string_start + size;
        if string_end > bytes.len() {
            log::warn!(target: "property_decoder", "reply-to list entry overruns buffer");
            break;
        }
        let address = primitive::ansi_string(&bytes[string_start..string_end]);
        let mut entry = PropertyMap::new();
        entry.insert("Address".to_string(), Value::Text(address));
        entries.push(entry);
        pos = string_end + 4;
    }
    Value::List(entries)
}

/// Parses a single user record (28-byte header, then length-prefixed email
/// and display name). Shared by `0D:0D` (Event `Organizer`) and by each
/// element of a user list.
fn parse_user(bytes: &[u8]) -> PropertyMap {
    let mut map = PropertyMap::new();
    if bytes.len() < 28 {
        log::warn!(target: "property_decoder", "user record shorter than 28-byte header, {} bytes", bytes.len());
        return map;
    }
    let user_type = bytes[1] as i64;
    map.insert("Type".to_string(), OL_USER_TYPE.describe(user_type));

    let mut pos = 28usize;
    if pos + 4 > bytes.len() {
        return map;
    }
    let email_len = i32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]).max(0) as usize;
    pos += 4;
    let email_end = (pos + email_len).min(bytes.len());
    map.insert("Address".to_string(), Value::Text(primitive::ansi_string(&bytes[pos..email_end])));
    pos = email_end;

    if pos + 4 > bytes.len() {
        return map;
    }
    let name_len = i32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]).max(0) as usize;
    pos += 4;
    let name_end = (pos + name_len).min(bytes.len());
    map.insert("Name".to_string(), Value::Text(primitive::utf16_string(&bytes[pos..name_end])));

    map
}

/// `0D:0D` (Event `Organizer`): a single user record.
pub fn user_single(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) => Value::Map(parse_user(bytes)),
        None => value,
    }
}

/// `0D:03/04/06/1E/1F/20/2D` (Message `From`/`From2`/`From3`/`To`/`CC`/`BCC`/
/// `MeetingAttendees`): a 4-byte count, one ignored byte, then that many
/// 2-byte-size-prefixed user records.
pub fn user_list(value: Value) -> Value {
    let bytes = match value.as_bytes() {
        Some(b) => b,
        None => return value,
    };
    if bytes.len() < 5 {
        log::warn!(target: "property_decoder", "user list shorter than header, {} bytes", bytes.len());
        return Value::List(Vec::new());
    }
    let count = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]).max(0) as usize;

    let mut entries = Vec::with_capacity(count);
    let mut pos = 5usize;
    for _ in 0..count {
        if pos + 2 > bytes.len() {
            log::warn!(target: "property_decoder", "user list truncated before entry size");
            break;
        }
        let size = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;
        let end = (pos + size).min(bytes.len());
        entries.push(parse_user(&bytes[pos..end]));
        pos = end;
    }
    Value::List(entries)
}

/// `0D:C1` (Message `ActionsTaken`): shaped like a collection, but its items
/// are addressed positionally rather than by resolved property name.
pub fn actions_taken_list(value: Value) -> Value {
    let bytes = match value.as_bytes() {
        Some(b) => b,
        None => return value,
    };
    let items = match read_raw_items(bytes, "ActionsTaken") {
        Ok(items) => items,
        Err(e) => {
            log::warn!(target: "property_decoder", "actions-taken list is malformed: {}", e);
            return Value::List(Vec::new());
        }
    };
    let mut by_key = std::collections::HashMap::new();
    for (key, data) in &items {
        by_key.insert(key.lookup(), data.as_slice());
    }

    let count = match by_key.get("00:01") {
        Some(data) if data.len() >= 2 => i16::from_le_bytes([data[0], data[1]]).max(0) as usize,
        _ => {
            log::warn!(target: "property_decoder", "actions-taken list missing action count");
            return Value::List(Vec::new());
        }
    };

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let type_key = format!("00:{:02X}", 100 + 10 * i);
        let date_key = format!("00:{:02X}", 101 + 10 * i);
        let record_id_key = format!("00:{:02X}", 102 + 10 * i);

        let mut entry = PropertyMap::new();
        if let Some(data) = by_key.get(type_key.as_str()).filter(|d| d.len() >= 2) {
            let code = i16::from_le_bytes([data[0], data[1]]) as i64;
            entry.insert("Type".to_string(), OL_ACTION.describe(code));
        }
        if let Some(data) = by_key.get(date_key.as_str()).filter(|d| d.len() >= 8) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&data[..8]);
            let seconds = f64::from_le_bytes(buf);
            entry.insert(
                "Date".to_string(),
                Value::DateTime(DateTimeValue::new(primitive::mac_absolute_seconds(seconds))),
            );
        }
        let record_id = by_key
            .get(record_id_key.as_str())
            .filter(|d| d.len() >= 4)
            .map(|d| i32::from_le_bytes([d[0], d[1], d[2], d[3]]))
            .unwrap_or(-1);
        entry.insert("RecordID".to_string(), Value::Int(record_id));

        entries.push(entry);
    }
    Value::List(entries)
}

/// `02:01` (Message `HasMessageSource`): the primitive-decoded `i16` is `1`
/// exactly when the message has a source block.
pub fn has_message_source(value: Value) -> Value {
    match value.as_i64() {
        Some(h) => Value::Bool(h == 1),
        None => value,
    }
}

/// Reverses and ASCII-decodes a raw four-char type code (the `ol_type_code`
/// override used for `MessageType`, `x-mac-type`/`x-mac-creator`, `ServerType`,
/// `EncryptionAlgorithm`, `SigningAlgorithm`, `FolderType`, `PictureFormat`,
/// and the attachment `type4A01`/`type4B01` fields).
pub fn type_code_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if bytes.len() == 4 => {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(bytes);
            match primitive::four_char_code(&arr) {
                Some(s) => Value::Text(s),
                None => Value::Null,
            }
        }
        _ => value,
    }
}

/// Raw bytes to a little-endian `i64` (`int2B`, `ConversationID`, `int4C01`,
/// `int5C01`): the tag's own primitive width doesn't match the actual field.
pub fn long_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if bytes.len() >= 8 => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes[..8]);
            Value::Long(i64::from_le_bytes(buf))
        }
        _ => value,
    }
}

/// Raw single byte to a signed 8-bit integer (`OlkSavedSearch`'s `int06`).
pub fn int8_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if !bytes.is_empty() => Value::Int(bytes[0] as i8 as i32),
        _ => value,
    }
}

/// A day-of-week bitmask, joined into the comma-separated RRule form used by
/// `OlkRecurrence`'s `WeekDay` and `MonthDOW` fields.
pub fn day_of_week_csv(value: Value) -> Value {
    match value.as_i64() {
        Some(mask) => Value::Text(primitive::day_of_week_list(mask as u8).join(",")),
        None => value,
    }
}

/// A primitive-decoded `i32`/`i64` of Windows-epoch-minutes to a `DateTime`.
pub fn windows_minutes(value: Value) -> Value {
    match value.as_i64() {
        Some(minutes) => Value::DateTime(DateTimeValue::new(primitive::windows_epoch_minutes(minutes))),
        None => value,
    }
}

/// As `windows_minutes`, but reading the minutes from raw bytes first (the
/// timezone sub-property `StartDate` fields, whose tag is raw by default).
pub fn windows_minutes_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if bytes.len() >= 4 => {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(&bytes[..4]);
            let minutes = i32::from_le_bytes(arr) as i64;
            Value::DateTime(DateTimeValue::new(primitive::windows_epoch_minutes(minutes)))
        }
        _ => value,
    }
}

/// Raw bytes as UTF-8 text (`TZID`, `TZLongName`, and the `RRule`/`OffsetTo`/
/// `OffsetFrom` timezone sub-properties, all raw by tag).
pub fn utf8_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) => Value::Text(primitive::utf8_string(bytes)),
        None => value,
    }
}

/// Raw bytes as a little-endian `i32` (`MSTZID`).
pub fn int_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if bytes.len() >= 4 => {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(&bytes[..4]);
            Value::Int(i32::from_le_bytes(arr))
        }
        _ => value,
    }
}

/// Raw 6 bytes of `00 R 00 B 00 G` to `#RRBBGG` hex (`OlkCategory`'s
/// `BackgroundColor`).
pub fn color_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) if bytes.len() >= 6 => {
            let mut arr = [0u8; 6];
            arr.copy_from_slice(&bytes[..6]);
            Value::Color(primitive::color_hex(&arr))
        }
        _ => value,
    }
}

/// Raw bytes to a flat list of dates (`OlkRecurrence`'s `RecurrenceDates`/
/// `ExceptionDates`).
pub fn date_list_from_bytes(value: Value) -> Value {
    match value.as_bytes() {
        Some(bytes) => Value::DateList(primitive::parse_date_list(bytes)),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_to_list_parses_two_entries() {
        let mut bytes = vec![0u8, 0x00, 0x00, 0x01, 0x00]; // ignored byte, const=0, count=1
        bytes.extend_from_slice(&3i32.to_le_bytes());
        bytes.push(3); // duplicate length byte
        bytes.extend_from_slice(b"abc");
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        let result = reply_to_list(Value::Bytes(bytes));
        match result {
            Value::List(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].get("Address"), Some(&Value::Text("abc".to_string())));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn actions_taken_list_reads_positional_fields() {
        // count=1, header_size=12+2*8=28, body_size=2+2+4=8
        let mut input = vec![2u8, 0, 0, 0, 28, 0, 0, 0, 8, 0, 0, 0];
        // size array: (00,01) size=2 ; (00,64) size=2 ; (00,66) size=4
        input.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 2, 0, 0, 0]);
        input.extend_from_slice(&[0x64, 0x00, 0x00, 0x00, 2, 0, 0, 0]);
        input.extend_from_slice(&[0x66, 0x00, 0x00, 0x00, 4, 0, 0, 0]);
        // body: count=1, type=2 (Reply), record id=7
        input.extend_from_slice(&1i16.to_le_bytes());
        input.extend_from_slice(&2i16.to_le_bytes());
        input.extend_from_slice(&7i32.to_le_bytes());

        let result = actions_taken_list(Value::Bytes(input));
        match result {
            Value::List(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].get("Type"), Some(&Value::Text("Reply".to_string())));
                assert_eq!(entries[0].get("RecordID"), Some(&Value::Int(7)));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
