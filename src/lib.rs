//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! A native Rust decoder for the binary record blobs in a desktop mail
//! client's on-disk cache: messages, events, contacts, tasks, notes,
//! folders, categories, signatures, saved searches, accounts, and global
//! preferences.
//!
//! [`parse`] is the entry point: give it one record's raw bytes and get back
//! a [`value::PropertyMap`], or a fatal [`error::Error`] if the envelope
//! itself is unreadable. Everything else the source format can produce —
//! unmapped keys, unrecognized enum members, truncated sub-structures,
//! unknown block types — is non-fatal and reported on the `log` facade.

pub mod block;
pub mod decode;
pub mod error;
pub mod key;
pub mod postprocess;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use value::{PropertyMap, Value};

/// Decodes one record blob into a property map.
pub fn parse(input: &[u8]) -> Result<PropertyMap> {
    decode::envelope::parse(input)
}
