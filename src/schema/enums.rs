//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Small integer-keyed label tables. Unknown keys return `EnumValue::Unknown`
//! rather than failing the decode, per the "enum tables" design note: a
//! record using a code this table has never seen is far more likely than a
//! parser bug.

/// The result of looking a code up in an `EnumTable`.
#[derive(Clone, Debug, PartialEq)]
pub enum EnumValue {
    /// The code mapped to a known label.
    Label(&'static str),
    /// The code mapped explicitly to "no value" (as opposed to being unmapped).
    Null,
    /// The code is not present in the table.
    Unknown(i64),
}

/// A static `code -> label` table. `None` in an entry means the code maps
/// explicitly to "no value" rather than to a label.
pub struct EnumTable {
    pub name: &'static str,
    pub entries: &'static [(i64, Option<&'static str>)],
}

impl EnumTable {
    pub fn lookup(&self, code: i64) -> EnumValue {
        for (k, v) in self.entries {
            if *k == code {
                return match v {
                    Some(label) => EnumValue::Label(label),
                    None => EnumValue::Null,
                };
            }
        }
        log::debug!(target: "schema_registry", "unknown member {} for enum {}", code, self.name);
        EnumValue::Unknown(code)
    }

    /// As `lookup`, but rendered directly as the decoded property's `Value`:
    /// a known label becomes text, an explicit null becomes `Value::Null`,
    /// and an unrecognized code passes through as its raw integer.
    pub fn describe(&self, code: i64) -> crate::value::Value {
        match self.lookup(code) {
            EnumValue::Label(label) => crate::value::Value::Text(label.to_string()),
            EnumValue::Null => crate::value::Value::Null,
            EnumValue::Unknown(n) => crate::value::Value::Long(n),
        }
    }
}

macro_rules! enum_table {
    ($vis:vis static $name:ident = $display:expr => { $($code:expr => $label:expr),* $(,)? }) => {
        $vis static $name: EnumTable = EnumTable {
            name: $display,
            entries: &[ $(($code, $label)),* ],
        };
    };
}

enum_table!(pub static OL_REPEATS = "OlRepeats" => {
    8202 => Some("Daily"),
    8203 => Some("Weekly"),
    8204 => Some("Monthly"),
    8205 => Some("Yearly"),
});

enum_table!(pub static OL_RECURRENCE_END_TYPE = "OlRecurrenceEndType" => {
    8225 => Some("ByDate"),
    8226 => Some("AfterCount"),
    8227 => Some("None"),
});

enum_table!(pub static OL_RECURRENCE_TYPE = "OlRecurrenceType" => {
    0 => Some("Daily"),
    1 => Some("Weekly"),
    2 => Some("Monthly"),
    3 => Some("MonthNth"),
    5 => Some("Yearly"),
    6 => Some("YearNth"),
});

enum_table!(pub static OL_BUSY_STATUS = "OlBusyStatus" => {
    0 => Some("BUSY"),
    1 => Some("FREE"),
    2 => Some("TENTATIVE"),
    3 => Some("OOF"),
});

enum_table!(pub static RESPONSE = "RESPONSE" => {
    0 => Some("None"),
    1 => Some("Accepted"),
    2 => Some("Tentative"),
});

// Off by 1 from OlMeetingRecipientType, maybe because Organizer is separate.
enum_table!(pub static OL_RECIPIENT_TYPE = "OlRecipientType" => {
    0 => Some("Required"),
    1 => Some("Optional"),
    2 => Some("Resource"),
});

enum_table!(pub static OL_SEARCH_TYPE = "OlSearchType" => {
    1 => Some("Mail"),
    2 => Some("Contact"),
    4 => Some("Task"),
    5 => Some("Note"),
});

enum_table!(pub static OL_FOLDER_CLASS = "OlFolderClass" => {
    0 => Some("Mail"),
    1 => Some("Contact"),
    2 => Some("Event"),
    4 => Some("Note"),
    5 => Some("Task"),
    7 => Some("Group"),
});

enum_table!(pub static OL_SENSITIVITY = "OlSensitivity" => {
    0 => Some("PUBLIC"),
    1 => Some("X-PERSONAL"),
    2 => Some("PRIVATE"),
    3 => Some("CONFIDENTIAL"),
});

enum_table!(pub static OL_PRIORITY = "OlPriority" => {
    1 => Some("High"),
    2 => Some("HighOverride"),
    3 => Some("Normal"),
    4 => Some("LowOverride"),
    5 => Some("Low"),
});

enum_table!(pub static OL_ADDRESS_PART = "OlAddressPart" => {
    2 => Some("Street"),
    3 => Some("City"),
    4 => Some("State"),
    5 => Some("ZIP"),
    6 => Some("Country"),
});

enum_table!(pub static OL_TIME_UNIT = "OlTimeUnit" => {
    1 => Some("Minutes"),
    2 => Some("Hours"),
    3 => Some("Days"),
});

enum_table!(pub static OL_DAY_OF_WEEK = "OlDayOfWeek" => {
    1 => Some("SU"),
    2 => Some("MO"),
    3 => Some("TU"),
    4 => Some("WE"),
    5 => Some("TH"),
    6 => Some("FR"),
    7 => Some("SA"),
});

enum_table!(pub static OL_ORGANIZER_TYPE = "OlOrganizerType" => {
    0 => Some("Other"),
    128 => Some("CalendarOwner"),
});

enum_table!(pub static OL_ACTION = "OlAction" => {
    2 => Some("Reply"),
    3 => Some("Forward"),
    11 => Some("ReplyAll"),
});

enum_table!(pub static OL_USER_TYPE = "OlUserType" => {
    1 => Some("DistributionList"),
    2 => Some("User"),
    3 => None,
    4 => Some("AttendeeMe"),
    8 => Some("AttendeeUnknown"),
});

enum_table!(pub static OL_FLAG_STATUS = "OlFlagStatus" => {
    0 => None,
    1 => Some("Flagged"),
    2 => Some("Completed"),
});

enum_table!(pub static OL_ATTENDEE_TYPE = "OlAttendeeType" => {
    0 => Some("User"),
    2 => Some("Contact Group"),
});

// https://docs.microsoft.com/en-us/openspecs/windows_protocols/ms-lcid/a9eac961-e77d-41a6-90a5-ce1a8b0cdb9c
enum_table!(pub static LOCALE = "LOCALE" => {
    0 => None,
    1033 => Some("en-US"),
});
