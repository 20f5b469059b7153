//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! `RcnA` block body: a chunked list of name/address fields, little-endian
//! throughout like the rest of the format (the `ExSM` block is the odd one
//! out in this module).

use crate::decode::primitive;
use crate::value::{PropertyMap, Value};

/// Splits `body` into `n_chunks` chunks: a leading `i32` chunk count, that
/// many `i16` chunk sizes, then the chunks themselves in order.
fn split_chunks(body: &[u8]) -> Option<Vec<&[u8]>> {
    if body.len() < 4 {
        return None;
    }
    let n_chunks = i32::from_le_bytes([body[0], body[1], body[2], body[3]]).max(0) as usize;

    let sizes_start = 4;
    let sizes_end = sizes_start + n_chunks * 2;
    if body.len() < sizes_end {
        log::warn!(target: "block_recent_addresses", "truncated chunk-size array");
        return None;
    }
    let sizes: Vec<usize> = body[sizes_start..sizes_end]
        .chunks_exact(2)
        .map(|w| u16::from_le_bytes([w[0], w[1]]) as usize)
        .collect();

    let mut chunks = Vec::with_capacity(n_chunks);
    let mut pos = sizes_end;
    for size in sizes {
        let end = (pos + size).min(body.len());
        if pos + size > body.len() {
            log::warn!(target: "block_recent_addresses", "chunk overruns buffer, truncating");
        }
        chunks.push(&body[pos..end]);
        pos = end;
    }
    Some(chunks)
}

/// Splits one text chunk into the pieces named by a parallel chunk of
/// little-endian `i32` offsets into it.
fn split_with_offsets<'a>(text: &'a [u8], sizes_raw: &[u8]) -> Vec<&'a [u8]> {
    let offsets: Vec<i64> = sizes_raw
        .chunks_exact(4)
        .map(|w| i32::from_le_bytes([w[0], w[1], w[2], w[3]]) as i64)
        .collect();
    if offsets.is_empty() {
        return Vec::new();
    }
    let mut pieces = Vec::with_capacity(offsets.len() - 1);
    let mut x0 = offsets[0].max(0) as usize;
    for &x1 in &offsets[1..] {
        let x1 = (x1.max(0) as usize).min(text.len());
        let x0c = x0.min(text.len());
        pieces.push(&text[x0c..x1.max(x0c)]);
        x0 = x1;
    }
    pieces
}

pub fn parse(body: &[u8]) -> PropertyMap {
    let mut map = PropertyMap::new();

    let mut chunks = match split_chunks(body) {
        Some(c) => c.into_iter(),
        None => {
            map.insert("RecentAddresses".to_string(), Value::List(Vec::new()));
            return map;
        }
    };

    let listcount = match chunks.next() {
        Some(c) if c.len() >= 4 => i32::from_le_bytes([c[0], c[1], c[2], c[3]]).max(0) as usize,
        _ => {
            map.insert("RecentAddresses".to_string(), Value::List(Vec::new()));
            return map;
        }
    };

    let mut fields: Vec<Vec<&[u8]>> = Vec::with_capacity(listcount);
    for _ in 0..listcount {
        let values = match chunks.next() {
            Some(v) => v,
            None => break,
        };
        let sizes_raw = match chunks.next() {
            Some(s) => s,
            None => break,
        };
        fields.push(split_with_offsets(values, sizes_raw));
    }

    let addresses = if fields.len() == 3 {
        let count = fields.iter().map(|f| f.len()).min().unwrap_or(0);
        (0..count)
            .map(|i| {
                let mut entry = PropertyMap::new();
                entry.insert("Address".to_string(), Value::Text(primitive::ansi_string(fields[0][i])));
                entry.insert("FirstName".to_string(), Value::Text(primitive::utf16_string(fields[1][i])));
                entry.insert("LastName".to_string(), Value::Text(primitive::utf16_string(fields[2][i])));
                entry
            })
            .collect()
    } else {
        log::warn!(
            target: "block_recent_addresses",
            "expected 3 address fields (address/first/last), found {}",
            fields.len()
        );
        Vec::new()
    };

    map.insert("RecentAddresses".to_string(), Value::List(addresses));
    map
}
