//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! `OlkMain` post-processing: compose each country's five-line postal
//! address template out of its `part_*` fields and separators into one
//! `format_string`, keyed by `country_code`.

use crate::value::{PropertyMap, Value};

fn text(fmt: &mut PropertyMap, key: &str) -> Option<String> {
    match fmt.remove(key) {
        Some(Value::Text(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn compose(mut fmt: PropertyMap) -> (String, PropertyMap) {
    let code = text(&mut fmt, "country_code").unwrap_or_default();
    let mut out = String::new();

    if let Some(p1) = text(&mut fmt, "part_1") {
        out.push('{');
        out.push_str(&p1);
        out.push('}');
    }
    if let Some(p2) = text(&mut fmt, "part_2") {
        out.push('\n');
        out.push('{');
        out.push_str(&p2);
        out.push('}');
    }

    let p5 = text(&mut fmt, "part_5");
    let p6 = text(&mut fmt, "part_6");
    let p7 = text(&mut fmt, "part_7");
    let sep_5_6 = format!("{} ", text(&mut fmt, "sep_5_6").unwrap_or_default());
    if p5.is_some() || p6.is_some() || p7.is_some() {
        out.push('\n');
    }
    if let Some(p5) = &p5 {
        out.push('{');
        out.push_str(p5);
        out.push('}');
        if p6.is_some() || p7.is_some() {
            out.push_str(&sep_5_6);
        }
    }
    if let Some(p6) = &p6 {
        out.push('{');
        out.push_str(p6);
        out.push('}');
        if p7.is_some() {
            out.push(' ');
        }
    }
    if let Some(p7) = &p7 {
        out.push('{');
        out.push_str(p7);
        out.push('}');
    }

    let p9 = text(&mut fmt, "part_9");
    let pa = text(&mut fmt, "part_A");
    let sep_9_a = format!("{} ", text(&mut fmt, "sep_9_A").unwrap_or_default());
    if p9.is_some() || pa.is_some() {
        out.push('\n');
    }
    if let Some(p9) = &p9 {
        out.push('{');
        out.push_str(p9);
        out.push('}');
        if pa.is_some() {
            out.push_str(&sep_9_a);
        }
    }
    if let Some(pa) = &pa {
        out.push('{');
        out.push_str(pa);
        out.push('}');
    }

    if let Some(pd) = text(&mut fmt, "part_D") {
        out.push('\n');
        out.push('{');
        out.push_str(&pd);
        out.push('}');
    }

    let mut entry = PropertyMap::new();
    entry.insert("format_string".to_string(), Value::Text(out));
    entry.insert("int14".to_string(), fmt.remove("int14").unwrap_or(Value::Null));
    let sep_street = match fmt.remove("sep_street") {
        Some(Value::Text(s)) => s,
        _ => " ".to_string(),
    };
    entry.insert("sep_street".to_string(), Value::Text(sep_street));

    (code, entry)
}

pub fn apply(mut out: PropertyMap) -> PropertyMap {
    if let Some(Value::List(formats)) = out.remove("AddressFormats") {
        let mut map = PropertyMap::new();
        for fmt in formats {
            let (code, entry) = compose(fmt);
            map.insert(code, Value::Map(entry));
        }
        out.insert("AddressFormats".to_string(), Value::Map(map));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_multi_line_format_string() {
        let mut fmt = PropertyMap::new();
        fmt.insert("country_code".to_string(), Value::Text("US".to_string()));
        fmt.insert("part_1".to_string(), Value::Text("Street".to_string()));
        fmt.insert("part_2".to_string(), Value::Text("City".to_string()));
        fmt.insert("part_5".to_string(), Value::Text("State".to_string()));
        fmt.insert("part_6".to_string(), Value::Text("ZIP".to_string()));
        fmt.insert("sep_5_6".to_string(), Value::Text(",".to_string()));
        fmt.insert("sep_street".to_string(), Value::Text(" ".to_string()));

        let mut out = PropertyMap::new();
        out.insert("AddressFormats".to_string(), Value::List(vec![fmt]));

        let out = apply(out);
        let formats = out.get("AddressFormats").and_then(Value::as_map).unwrap();
        let us = formats.get("US").and_then(Value::as_map).unwrap();
        assert_eq!(
            us.get("format_string"),
            Some(&Value::Text("{Street}\n{City}\n{State}, {ZIP}".to_string()))
        );
    }

    #[test]
    fn missing_sep_street_defaults_to_space() {
        let mut fmt = PropertyMap::new();
        fmt.insert("country_code".to_string(), Value::Text("ZZ".to_string()));
        let mut out = PropertyMap::new();
        out.insert("AddressFormats".to_string(), Value::List(vec![fmt]));

        let out = apply(out);
        let formats = out.get("AddressFormats").and_then(Value::as_map).unwrap();
        let zz = formats.get("ZZ").and_then(Value::as_map).unwrap();
        assert_eq!(zz.get("sep_street"), Some(&Value::Text(" ".to_string())));
    }
}
