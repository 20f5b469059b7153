//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The decoded property model.
//!
//! A decoded record is a `PropertyMap`: a flat, ordered-by-name mapping from
//! a human-readable property name to a `Value`. A `Value` is one of:
//!
//! 1. Null.
//! 2. Bool.
//! 3. Int, a 32-bit signed integer.
//! 4. Long, a 64-bit signed integer.
//! 5. Float, a 64-bit double.
//! 6. Text.
//! 7. Bytes, an opaque blob passed through raw.
//! 8. DateTime, a naive timestamp with an optional timezone label.
//! 9. Date, a calendar date with no time component.
//! 10. Map, a nested `PropertyMap`.
//! 11. List, an ordered list of `PropertyMap`s of the same sub-schema.
//! 12. IntList / DateList, flat lists of scalars.
//! 13. Color, a `#RRBBGG` hex string.
//! 14. TypeCode, a reversed four-character code (or absent if all-zero).

use std::collections::BTreeMap;

use serde::Serialize;

/// A naive timestamp paired with an optional IANA-style timezone label.
///
/// The label is attached, never used to convert the instant: the source
/// format stores organizer timestamps without a zone and relies on a
/// sibling `Timezone` property to say which zone they were taken in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DateTimeValue {
    pub naive: chrono::NaiveDateTime,
    pub timezone: Option<String>,
}

impl DateTimeValue {
    pub fn new(naive: chrono::NaiveDateTime) -> Self {
        DateTimeValue { naive, timezone: None }
    }

    pub fn with_timezone(naive: chrono::NaiveDateTime, timezone: impl Into<String>) -> Self {
        DateTimeValue { naive, timezone: Some(timezone.into()) }
    }

    /// Replace the timezone label in place, leaving the instant untouched.
    pub fn attach_timezone(&mut self, timezone: impl Into<String>) {
        self.timezone = Some(timezone.into());
    }
}

/// Any value a decoded property can hold.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    DateTime(DateTimeValue),
    Date(chrono::NaiveDate),
    Map(PropertyMap),
    List(Vec<PropertyMap>),
    IntList(Vec<i64>),
    DateList(Vec<chrono::NaiveDate>),
    Color(String),
    TypeCode(Option<String>),
}

impl Value {
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut PropertyMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i as i64),
            Value::Long(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropertyMap]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }
}

/// A decoded record, or a decoded sub-collection: name to value, each name
/// appearing at most once. Backed by a `BTreeMap` purely for deterministic
/// iteration order in tests and logs; the format imposes no ordering.
pub type PropertyMap = BTreeMap<String, Value>;
