//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use std;
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal decode error. Every other condition the decoder encounters (unmapped
/// keys, unknown enum members, datetime overflow, trailing bytes, unknown
/// block types) is non-fatal and reported on the `log` facade instead of here.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The 4-byte record magic did not match `D0 0D 00 00`.
    BadMagic { found: [u8; 4] },
    /// An entity record's class-id has no registered schema.
    UnknownClassId(i32),
    /// A slice was shorter than a fixed-size field or header demanded.
    UnexpectedEof {
        context: &'static str,
        needed: usize,
        available: usize,
    },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadMagic { found } =>
                write!(formatter, "bad record magic: {:02X?}", found),
            Error::UnknownClassId(id) =>
                write!(formatter, "unknown entity class-id: {}", id),
            Error::UnexpectedEof { context, needed, available } =>
                write!(
                    formatter,
                    "unexpected end of input in {}: needed {} bytes, had {}",
                    context, needed, available
                ),
        }
    }
}

impl std::error::Error for Error {}
