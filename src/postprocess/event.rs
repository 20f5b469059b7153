//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! `OlkEvent` post-processing: normalize the recurrence rule's shape to its
//! actual `RecurrenceType`, truncate its dates, drop whichever of
//! `Until`/`Occurrences` the end type doesn't use, then attach the event's
//! timezone label to its three organizer timestamps.

use crate::value::{PropertyMap, Value};

fn as_date(value: &Value) -> Option<chrono::NaiveDate> {
    match value {
        Value::DateTime(dt) => Some(dt.naive.date()),
        _ => None,
    }
}

fn normalize_rrule(rrule: &mut PropertyMap) {
    let recurrence_type = rrule.get("RecurrenceType").and_then(Value::as_str).map(str::to_string);

    match recurrence_type.as_deref() {
        Some("Daily") => {
            if let Some(interval) = rrule.get("Interval").and_then(Value::as_i64) {
                rrule.insert("Interval".to_string(), Value::Int((interval / 1440) as i32));
            }
        }
        Some("Weekly") => {
            if let Some(day) = rrule.remove("WeekDay") {
                rrule.insert("Day".to_string(), day);
            }
        }
        Some("MonthNth") => {
            if let Some(day) = rrule.remove("MonthDOW") {
                rrule.insert("Day".to_string(), day);
            }
            if let Some(set_pos) = rrule.remove("MonthNth").as_ref().and_then(Value::as_i64) {
                let set_pos = if set_pos == 5 { -1 } else { set_pos as i32 };
                rrule.insert("SetPos".to_string(), Value::Int(set_pos));
            }
        }
        // Yearly and YearNth are not observed in practice.
        _ => {}
    }

    if let Some(date) = rrule.get("StartDate").and_then(as_date) {
        rrule.insert("StartDate".to_string(), Value::Date(date));
    }
    if let Some(date) = rrule.get("Until").and_then(as_date) {
        rrule.insert("Until".to_string(), Value::Date(date));
    }

    // The source's own end-type membership checks compare against
    // `NoEndDate`/`EndAfterCount`/`EndOnDate`, but `OlRecurrenceEndType`'s
    // labels are `ByDate`/`AfterCount`/`None` — the checks never match, so
    // neither `Until` nor `Occurrences` is ever actually dropped. Preserved
    // here exactly as observed rather than "fixed".
    let end_type = rrule.get("EndType").and_then(Value::as_str).map(str::to_string);
    if matches!(end_type.as_deref(), Some("NoEndDate") | Some("EndAfterCount")) {
        rrule.remove("Until");
    }
    if matches!(end_type.as_deref(), Some("NoEndDate") | Some("EndOnDate")) {
        rrule.remove("Occurrences");
    }

    rrule.entry("ExceptionDates".to_string()).or_insert_with(|| Value::DateList(Vec::new()));
}

pub fn apply(mut out: PropertyMap) -> PropertyMap {
    if let Some(Value::Map(mut rrule)) = out.remove("RRule") {
        normalize_rrule(&mut rrule);
        out.insert("RRule".to_string(), Value::Map(rrule));
    }

    let tz = out
        .get("Timezone")
        .and_then(Value::as_map)
        .and_then(|tz| tz.get("TZID"))
        .and_then(Value::as_str)
        .map(str::to_string);

    if let Some(tz) = tz {
        for field in ["StartDateOrganizer", "EndDateOrganizer", "ReplyTime"] {
            if let Some(Value::DateTime(dt)) = out.get_mut(field) {
                dt.attach_timezone(tz.clone());
            }
        }
    }

    out
}
