//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Primitive readers: the scalar decodes a property's raw bytes can dispatch
//! to once its variant tag is known. Every multi-byte integer here is
//! little-endian, matching the on-disk format throughout the entity and
//! collection layers and the `RcnA` block body. The `ExSM` block body is the
//! sole big-endian exception and is decoded separately in `crate::block`.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use nom::number::complete::{le_i16, le_i32, le_i64, le_u8};
use nom::IResult;

/// `1601-01-01T00:00:00`, the epoch Windows-epoch-minutes timestamps count from.
fn windows_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd(1601, 1, 1).and_hms(0, 0, 0)
}

/// `2001-01-01T00:00:00`, the epoch Mac-absolute-seconds timestamps count from.
fn mac_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd(2001, 1, 1).and_hms(0, 0, 0)
}

/// The value substituted when a timestamp overflows `NaiveDateTime`'s range.
fn max_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd(9999, 12, 31).and_hms(23, 59, 59)
}

pub fn i16(input: &[u8]) -> IResult<&[u8], i16> {
    le_i16(input)
}

pub fn i32(input: &[u8]) -> IResult<&[u8], i32> {
    le_i32(input)
}

pub fn i64(input: &[u8]) -> IResult<&[u8], i64> {
    le_i64(input)
}

pub fn boolean(input: &[u8]) -> IResult<&[u8], bool> {
    nom::combinator::map(le_u8, |b| b != 0)(input)
}

/// Windows-epoch-minutes to a naive datetime. Minutes that push the result
/// out of `NaiveDateTime`'s representable range are logged and clamped.
pub fn windows_epoch_minutes(minutes: i64) -> NaiveDateTime {
    match windows_epoch().checked_add_signed(Duration::minutes(minutes)) {
        Some(dt) => dt,
        None => {
            log::warn!(
                target: "primitive_reader",
                "windows-epoch-minutes value {} is out of range, clamping",
                minutes
            );
            max_datetime()
        }
    }
}

/// Mac-absolute-seconds (a 64-bit float) to a naive datetime.
pub fn mac_absolute_seconds(seconds: f64) -> NaiveDateTime {
    let whole = seconds.trunc() as i64;
    let nanos = ((seconds.fract()) * 1_000_000_000.0).round() as i64;
    match mac_epoch()
        .checked_add_signed(Duration::seconds(whole))
        .and_then(|dt| dt.checked_add_signed(Duration::nanoseconds(nanos)))
    {
        Some(dt) => dt,
        None => {
            log::warn!(
                target: "primitive_reader",
                "mac-absolute-seconds value {} is out of range, clamping",
                seconds
            );
            max_datetime()
        }
    }
}

/// Decodes a single-byte ANSI/Latin-1-superset string: every byte maps
/// directly to the Unicode codepoint of the same value, so the decode never
/// fails, unlike a strict ASCII or UTF-8 decode would on high bytes.
pub fn ansi_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decodes a UTF-16LE string, substituting the replacement character for any
/// unpaired surrogate rather than failing the whole decode.
pub fn utf16_string(bytes: &[u8]) -> String {
    let code_units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&code_units).unwrap_or_else(|_| {
        log::debug!(target: "primitive_reader", "lossy utf-16 decode, {} bytes", bytes.len());
        String::from_utf16_lossy(&code_units)
    })
}

/// Decodes a UTF-8 string, substituting the replacement character for any
/// invalid sequence rather than failing the whole decode.
pub fn utf8_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap_or_else(|e| {
        log::debug!(target: "primitive_reader", "lossy utf-8 decode, {} bytes", bytes.len());
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

/// A four-char type code: four raw bytes reversed and read as ASCII.
/// An all-zero code decodes to `None`.
pub fn four_char_code(bytes: &[u8; 4]) -> Option<String> {
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    Some(reversed.iter().map(|&b| b as char).collect())
}

/// A day-of-week bitmask (LSB = Sunday) to the ordered list of two-letter codes.
pub fn day_of_week_list(mask: u8) -> Vec<&'static str> {
    const DAYS: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];
    (0..7).filter(|bit| mask & (1 << bit) != 0).map(|bit| DAYS[bit as usize]).collect()
}

/// A six-byte `00 R 00 B 00 G` color triple to lowercase `#RRBBGG` hex.
pub fn color_hex(bytes: &[u8; 6]) -> String {
    format!("#{:02x}{:02x}{:02x}", bytes[1], bytes[3], bytes[5])
}

/// Drops the leading 4 bytes (ground truth: they are never read as a count,
/// despite the "first four are the length" comment in the reference source)
/// and reads the remainder as consecutive little-endian `i32`s.
pub fn parse_int_list(chunk: &[u8]) -> Vec<i64> {
    if chunk.len() < 4 {
        log::warn!(target: "primitive_reader", "int list shorter than 4-byte prefix, {} bytes", chunk.len());
        return Vec::new();
    }
    chunk[4..]
        .chunks_exact(4)
        .map(|w| i32::from_le_bytes([w[0], w[1], w[2], w[3]]) as i64)
        .collect()
}

/// As `parse_int_list`, but reads 64-bit elements.
pub fn parse_long_list(chunk: &[u8]) -> Vec<i64> {
    if chunk.len() < 4 {
        log::warn!(target: "primitive_reader", "long list shorter than 4-byte prefix, {} bytes", chunk.len());
        return Vec::new();
    }
    chunk[4..]
        .chunks_exact(8)
        .map(|w| {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(w);
            i64::from_le_bytes(buf)
        })
        .collect()
}

/// Reads the entire slice (no leading bytes dropped) as consecutive
/// little-endian `i32` Windows-epoch-minutes values, truncated to date-only.
pub fn parse_date_list(chunk: &[u8]) -> Vec<NaiveDate> {
    chunk
        .chunks_exact(4)
        .map(|w| {
            let minutes = i32::from_le_bytes([w[0], w[1], w[2], w[3]]) as i64;
            windows_epoch_minutes(minutes).date()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_epoch_minutes_zero_is_epoch() {
        assert_eq!(windows_epoch_minutes(0), windows_epoch());
    }

    #[test]
    fn windows_epoch_minutes_clamps_on_overflow() {
        assert_eq!(windows_epoch_minutes(i64::MAX), max_datetime());
    }

    #[test]
    fn mac_absolute_seconds_zero_is_epoch() {
        assert_eq!(mac_absolute_seconds(0.0), mac_epoch());
    }

    #[test]
    fn ansi_string_passes_high_bytes_through() {
        assert_eq!(ansi_string(&[0x41, 0xE9]), "A\u{E9}");
    }

    #[test]
    fn utf16_string_decodes_ascii() {
        assert_eq!(utf16_string(&[0x48, 0x00, 0x69, 0x00]), "Hi");
    }

    #[test]
    fn four_char_code_reverses_bytes() {
        assert_eq!(four_char_code(&[0x42, 0x67, 0x6D, 0x49]).as_deref(), Some("ImgB"));
    }

    #[test]
    fn four_char_code_all_zero_is_none() {
        assert_eq!(four_char_code(&[0, 0, 0, 0]), None);
    }

    #[test]
    fn day_of_week_list_orders_su_through_sa() {
        // Monday + Wednesday + Friday
        assert_eq!(day_of_week_list(0b0010_1010), vec!["MO", "WE", "FR"]);
    }

    #[test]
    fn color_hex_formats_rbg_fields() {
        assert_eq!(color_hex(&[0x00, 0xAA, 0x00, 0xBB, 0x00, 0xCC]), "#aabbcc");
    }

    #[test]
    fn parse_int_list_drops_leading_four_bytes() {
        let chunk = [0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
        assert_eq!(parse_int_list(&chunk), vec![1, 2]);
    }

    #[test]
    fn parse_date_list_uses_whole_slice() {
        let chunk = [0x00, 0x00, 0x00, 0x00];
        assert_eq!(parse_date_list(&chunk), vec![windows_epoch().date()]);
    }
}
