//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! `ExSM` block body: the one corner of this decoder that is big-endian.
//! Everything past `part1` is read best-effort — a short or absent tail is
//! expected, not an error.

use crate::value::{PropertyMap, Value};

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.pos + n > self.bytes.len() {
            return None;
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    fn i32_be(&mut self) -> Option<i32> {
        self.take(4).map(|b| i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u32_be(&mut self) -> Option<u32> {
        self.take(4).map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn utf8_be_prefixed(&mut self) -> Option<String> {
        let len = self.i32_be()?.max(0) as usize;
        let bytes = self.take(len)?;
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

pub fn parse(body: &[u8]) -> PropertyMap {
    let mut map = PropertyMap::new();
    let mut cur = Cursor::new(body);

    if cur.take(8).is_none() {
        log::warn!(target: "block_sync_map", "sync-map body shorter than the 8-byte preamble");
        return map;
    }

    let flag1 = match cur.take(8) {
        Some(b) => b.to_vec(),
        None => {
            log::warn!(target: "block_sync_map", "sync-map body truncated before flag1");
            return map;
        }
    };
    map.insert("flag1".to_string(), Value::Bytes(flag1));

    let size1 = match cur.i32_be() {
        Some(s) => s.max(0) as usize,
        None => {
            log::warn!(target: "block_sync_map", "sync-map body truncated before size1");
            return map;
        }
    };
    let part1 = match cur.take(size1) {
        Some(b) => b.to_vec(),
        None => {
            log::warn!(target: "block_sync_map", "sync-map part1 overruns buffer");
            return map;
        }
    };
    map.insert("part1".to_string(), Value::Bytes(part1));

    if cur.take(4).is_none() {
        return map;
    }

    let count = match cur.i32_be() {
        Some(c) => c.max(0) as usize,
        None => return map,
    };
    let notnull = cur.i32_be().unwrap_or(0) == 1;

    let mut items = Vec::new();
    if notnull {
        for _ in 0..count {
            let mut item = PropertyMap::new();
            let h = match cur.take(20) {
                Some(b) => b.to_vec(),
                None => {
                    log::warn!(target: "block_sync_map", "sync-map item truncated before header");
                    break;
                }
            };
            item.insert("h".to_string(), Value::Bytes(h));

            let exchange_id = match cur.utf8_be_prefixed() {
                Some(s) => s,
                None => {
                    log::warn!(target: "block_sync_map", "sync-map item truncated before ExchangeID");
                    break;
                }
            };
            item.insert("ExchangeID".to_string(), Value::Text(exchange_id));

            let change_key = match cur.utf8_be_prefixed() {
                Some(s) => s,
                None => {
                    log::warn!(target: "block_sync_map", "sync-map item truncated before ExchangeChangeKey");
                    break;
                }
            };
            item.insert("ExchangeChangeKey".to_string(), Value::Text(change_key));

            let extra_count = match cur.i32_be() {
                Some(c) => c.max(0) as usize,
                None => {
                    log::warn!(target: "block_sync_map", "sync-map item truncated before extra-pair count");
                    break;
                }
            };
            let mut truncated = false;
            for _ in 0..extra_count {
                let klen = match cur.u32_be() {
                    Some(l) => l as usize,
                    None => {
                        truncated = true;
                        break;
                    }
                };
                let key = match cur.take(klen) {
                    Some(b) => String::from_utf8_lossy(b).into_owned(),
                    None => {
                        truncated = true;
                        break;
                    }
                };
                let vlen = match cur.u32_be() {
                    Some(l) => l as usize,
                    None => {
                        truncated = true;
                        break;
                    }
                };
                let value = match cur.take(vlen) {
                    Some(b) => String::from_utf8_lossy(b).into_owned(),
                    None => {
                        truncated = true;
                        break;
                    }
                };
                item.insert(key, Value::Text(value));
            }
            if truncated {
                log::warn!(target: "block_sync_map", "sync-map item truncated inside extra key/value pairs");
                items.push(item);
                break;
            }

            if cur.take(4).is_none() {
                log::warn!(target: "block_sync_map", "sync-map item truncated before trailer");
                items.push(item);
                break;
            }
            items.push(item);
        }
    }
    map.insert(
        "items".to_string(),
        Value::List(items),
    );

    let trimmed = {
        let bytes = cur.rest();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let end = bytes.iter().rposition(|&b| b != 0).map(|i| i + 1).unwrap_or(0);
        if start < end { bytes[start..end].to_vec() } else { Vec::new() }
    };
    if !trimmed.is_empty() {
        map.insert("rem".to_string(), Value::Bytes(trimmed));
    }

    map
}
