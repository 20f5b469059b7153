//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The schema registry.
//!
//! A single, read-only structure built once per process: the global property
//! dictionary (`dictionary`), the per-class schema overlays (`classes`), and
//! the small enum lookup tables they reference (`enums`). Nothing here is
//! mutated after the first access; callers only ever see `&'static` data.

pub mod classes;
pub mod dictionary;
pub mod enums;

use crate::value::Value;

/// First letter of the source format's two-letter mode flag: whether the
/// primitive decode step (dispatch on variant tag) runs at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodingMode {
    /// Skip the primitive decode step; the value stays raw bytes.
    Raw,
    /// Apply the variant-tag primitive decode first.
    Primitive,
}

/// A function applied to the value produced by the primitive decode step
/// (or, for tags with no primitive decode of their own such as `0D`, to the
/// raw bytes wrapped as `Value::Bytes`).
pub type HandlerFn = fn(Value) -> Value;

/// Second letter of the source format's mode flag: what, if anything, happens
/// after the primitive decode step.
#[derive(Clone, Copy)]
pub enum Handler {
    /// No further processing (`X`).
    None,
    /// Decode as a nested collection using the given sub-schema (`C`).
    Collection(&'static Schema),
    /// Decode as a homogeneous list of collections using the given sub-schema (`L`).
    List(&'static Schema),
    /// Look the decoded value up in a static enum table (`E`).
    Enum(&'static enums::EnumTable),
    /// Invoke an arbitrary handler function (`F`).
    Function(HandlerFn),
}

/// One entry in the global property dictionary or a schema override: the
/// human-readable name, whether to skip the primitive decode, and what
/// handler (if any) to run afterward.
#[derive(Clone, Copy)]
pub struct DictEntry {
    pub name: &'static str,
    pub mode: DecodingMode,
    pub handler: Handler,
}

impl DictEntry {
    pub const fn primitive(name: &'static str) -> Self {
        DictEntry { name, mode: DecodingMode::Primitive, handler: Handler::None }
    }

    pub const fn raw(name: &'static str) -> Self {
        DictEntry { name, mode: DecodingMode::Raw, handler: Handler::None }
    }

    pub const fn primitive_enum(name: &'static str, table: &'static enums::EnumTable) -> Self {
        DictEntry { name, mode: DecodingMode::Primitive, handler: Handler::Enum(table) }
    }

    pub const fn primitive_fn(name: &'static str, f: HandlerFn) -> Self {
        DictEntry { name, mode: DecodingMode::Primitive, handler: Handler::Function(f) }
    }

    pub const fn raw_fn(name: &'static str, f: HandlerFn) -> Self {
        DictEntry { name, mode: DecodingMode::Raw, handler: Handler::Function(f) }
    }

    pub const fn collection(name: &'static str, sub: &'static Schema) -> Self {
        DictEntry { name, mode: DecodingMode::Primitive, handler: Handler::Collection(sub) }
    }

    pub const fn list(name: &'static str, sub: &'static Schema) -> Self {
        DictEntry { name, mode: DecodingMode::Primitive, handler: Handler::List(sub) }
    }
}

/// Per-record-class (or per-nested-sub-schema) modifications to the global
/// property dictionary. All four set fields default empty.
pub struct Schema {
    pub class_name: &'static str,
    pub overrides: &'static [(&'static str, DictEntry)],
    pub remap: &'static [(&'static str, &'static str)],
    pub skip_null: &'static [&'static str],
    pub skip_dupe: &'static [&'static str],
    pub skip_indb: &'static [&'static str],
}

/// Footer keys dropped unconditionally regardless of schema, per the
/// hard-coded `skip_items` list in the reference implementation.
pub const FOOTER_SKIP: &[&str] = &["foot14", "foot15", "foot16"];

impl Schema {
    pub fn override_for(&self, key: &str) -> Option<&'static DictEntry> {
        self.overrides.iter().find(|(k, _)| *k == key).map(|(_, entry)| entry)
    }

    pub fn remap_for(&self, key: &str) -> Option<&'static str> {
        self.remap.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
    }

    pub fn should_skip(&self, name: &str) -> bool {
        FOOTER_SKIP.contains(&name)
            || self.skip_null.contains(&name)
            || self.skip_dupe.contains(&name)
    }
}
