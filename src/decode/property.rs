//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The property decoder: resolves a raw `(key, bytes)` pair against the
//! global dictionary and the active class schema, decodes the primitive
//! value, and applies whatever handler the entry names.

use crate::key::PropertyKey;
use crate::schema::{dictionary, DecodingMode, Handler, Schema};
use crate::value::{DateTimeValue, Value};

use super::primitive;

fn decode_primitive(key: &PropertyKey, bytes: &[u8]) -> Value {
    match key.tag.as_str() {
        "02" => match primitive::i16(bytes) {
            Ok((_, v)) => Value::Int(v as i32),
            Err(_) => {
                log::warn!(target: "property_decoder", "short i16 payload for {}", key);
                Value::Bytes(bytes.to_vec())
            }
        },
        "03" => match primitive::i32(bytes) {
            Ok((_, v)) => Value::Int(v),
            Err(_) => {
                log::warn!(target: "property_decoder", "short i32 payload for {}", key);
                Value::Bytes(bytes.to_vec())
            }
        },
        "0B" => match primitive::boolean(bytes) {
            Ok((_, v)) => Value::Bool(v),
            Err(_) => {
                log::warn!(target: "property_decoder", "short bool payload for {}", key);
                Value::Bytes(bytes.to_vec())
            }
        },
        "14" | "20" => match primitive::i64(bytes) {
            Ok((_, v)) => Value::Long(v),
            Err(_) => {
                log::warn!(target: "property_decoder", "short i64 payload for {}", key);
                Value::Bytes(bytes.to_vec())
            }
        },
        "4D" => {
            if bytes.len() < 8 {
                log::warn!(target: "property_decoder", "short mac-absolute-date payload for {}", key);
                return Value::Bytes(bytes.to_vec());
            }
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes[..8]);
            let seconds = f64::from_le_bytes(buf);
            Value::DateTime(DateTimeValue::new(primitive::mac_absolute_seconds(seconds)))
        }
        "1E" => Value::Text(primitive::ansi_string(bytes)),
        "1F" => Value::Text(primitive::utf16_string(bytes)),
        "1D" => Value::Text(primitive::utf8_string(bytes)),
        "08" | "0D" | "48" => Value::Bytes(bytes.to_vec()),
        tag if tag.starts_with("4643")
            || tag.starts_with("5A54")
            || tag.starts_with("614E")
            || tag.starts_with("7453")
            || tag.starts_with("4C44") =>
        {
            Value::Bytes(bytes.to_vec())
        }
        _ => {
            log::debug!(target: "property_decoder", "unknown variant tag {} ({} bytes)", key, bytes.len());
            Value::Bytes(bytes.to_vec())
        }
    }
}

fn apply_handler(handler: &Handler, value: Value, bytes: &[u8], key: &PropertyKey, class_name: &str) -> Value {
    match handler {
        Handler::None => value,
        Handler::Collection(sub) => match super::collection::read_collection(bytes, sub) {
            Ok(map) => Value::Map(map),
            Err(e) => {
                log::warn!(
                    target: "property_decoder",
                    "sub-collection for {} in {} failed to decode: {}",
                    key, class_name, e
                );
                Value::Map(Default::default())
            }
        },
        Handler::List(sub) => match super::list::read_list(bytes, sub) {
            Ok(items) => Value::List(items),
            Err(e) => {
                log::warn!(
                    target: "property_decoder",
                    "sub-list for {} in {} failed to decode: {}",
                    key, class_name, e
                );
                Value::List(Vec::new())
            }
        },
        Handler::Enum(table) => match value.as_i64() {
            Some(code) => table.describe(code),
            None => {
                log::debug!(target: "property_decoder", "enum handler for {} given a non-integer value", key);
                value
            }
        },
        Handler::Function(f) => f(value),
    }
}

/// Decodes one raw `(key, bytes)` pair under the active schema. Returns
/// `None` if the resulting property should be dropped (a skip filter, or
/// the hard-coded footer set).
pub fn decode_property(key: &PropertyKey, bytes: &[u8], schema: &'static Schema) -> Option<(String, Value)> {
    let key_str = key.lookup();

    let (mut name, mut mode, mut handler) = match dictionary::lookup(&key_str) {
        Some(entry) => (entry.name.to_string(), entry.mode, entry.handler),
        None => {
            log::debug!(target: "property_decoder", "unmapped key {} in {}", key, schema.class_name);
            (key_str.clone(), DecodingMode::Primitive, Handler::None)
        }
    };
    if let Some(over) = schema.override_for(&key_str) {
        name = over.name.to_string();
        mode = over.mode;
        handler = over.handler;
    }

    let value = match mode {
        DecodingMode::Raw => Value::Bytes(bytes.to_vec()),
        DecodingMode::Primitive => decode_primitive(key, bytes),
    };

    let value = apply_handler(&handler, value, bytes, key, schema.class_name);

    if let Some(renamed) = schema.remap_for(&key_str) {
        name = renamed.to_string();
    }

    if schema.should_skip(&name) {
        return None;
    }

    Some((name, value))
}
