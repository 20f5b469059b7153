//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Per-record-class schema overlays: the `override`/`remap`/`skip_null`/
//! `skip_dupe`/`skip_indb` sets layered on top of the global property
//! dictionary for each of the twenty-one entity and nested-collection
//! classes, plus the class-id lookup table used by the record envelope.

use crate::decode::handlers;
use crate::schema::enums::*;
use crate::schema::{DictEntry, Schema};

pub static OLK_MAIN: Schema = Schema {
    class_name: "OlkMain",
    overrides: &[("03:03", DictEntry::raw("BlockID"))],
    remap: &[],
    skip_null: &[],
    skip_dupe: &[],
    skip_indb: &["BlockID"],
};

pub static OLK_FOLDER: Schema = Schema {
    class_name: "OlkFolder",
    overrides: &[],
    remap: &[],
    skip_null: &["bool5F01", "bool6001"],
    skip_dupe: &[],
    skip_indb: &[
        "FolderID",
        "AccountUID",
        "ExchangeID",
        "ExchangeChangeKey",
        "Name",
        "OnlineFolderType",
        "SyncMapBlockID",
        "FolderSyncBlockID",
    ],
};

pub static OLK_MESSAGE: Schema = Schema {
    class_name: "OlkMessage",
    overrides: &[
        ("02:01", DictEntry::primitive_fn("HasMessageSource", handlers::has_message_source)),
        ("03:04", DictEntry::raw_fn("MessageType", handlers::type_code_from_bytes)),
        ("03:07", DictEntry::raw("MessageSourceBlockID")),
        ("03:2B", DictEntry::raw_fn("int2B", handlers::long_from_bytes)),
        ("03:14", DictEntry::primitive("int14")),
    ],
    remap: &[
        ("03:1A", "DownloadState"),
        ("1E:04", "Headers"),
        ("1F:01", "Subject"),
        ("1F:1E", "Body"),
        ("1F:23", "RecipientList"),
        ("1F:6A", "CardData"),
    ],
    skip_null: &[],
    skip_dupe: &[
        "From2",
        "From3",
        "ThreadTopic2",
        "References2",
        "References3",
        "Reminder2",
        "HasAttachmentOrInline",
        "Sent2",
        "HasvCalendar",
    ],
    skip_indb: &[
        "DownloadState",
        "ConversationID",
        "FolderID",
        "AccountUID",
        "Sent",
        "ExchangeID",
        "ExchangeChangeKey",
        "TimeReceived",
        "Priority",
        "Read",
        "ThreadTopic",
        "MessageID",
        "Preview",
        "HasAttachment",
        "HasReminder",
        "PartiallyDownloaded",
        "RecipientList",
        "MentionedMe",
        "SuppressAutobackfill",
        "MessageSourceBlockID",
        "MsrcBlockStruct",
    ],
};

pub static OLK_CONTACT: Schema = Schema {
    class_name: "OlkContact",
    overrides: &[],
    remap: &[
        ("1F:01", "FirstName"),
        ("1F:02", "LastName"),
        ("1F:04", "Notes"),
        ("1F:08", "HomeAddressState"),
        ("1F:09", "HomeAddressPostalCode"),
        ("1F:0A", "HomeAddressCountry"),
        ("1F:0B", "PhoneHome"),
        ("1F:0C", "PhoneHomeFax"),
        ("1F:0E", "WebPageHome"),
        ("1F:1E", "PhoneWorkFax"),
        ("1F:23", "PhonePrimary"),
        ("1F:5A", "Phone1"),
        ("1F:5B", "Phone2"),
        ("1F:5C", "Phone3"),
        ("1F:5D", "Phone4"),
    ],
    skip_null: &[],
    skip_dupe: &[],
    skip_indb: &["FolderID", "AccountUID", "ExchangeID", "ExchangeChangeKey", "UUID", "HasReminder", "PictureBlockID"],
};

pub static OLK_ACCOUNT_EXCHANGE: Schema = Schema {
    class_name: "OlkAccountExchange",
    overrides: &[],
    remap: &[],
    skip_null: &[],
    skip_dupe: &["EmailAddressUnicode", "EmailAddress2"],
    skip_indb: &["MailAccountUID", "DisplayName", "EmailAddress", "LDAPAccountUID"],
};

pub static OLK_NOTE: Schema = Schema {
    class_name: "OlkNote",
    overrides: &[],
    remap: &[],
    skip_null: &[],
    skip_dupe: &[],
    skip_indb: &["FolderID", "AccountUID", "ExchangeID", "ExchangeChangeKey", "UUID", "ModDate", "Title"],
};

pub static OLK_TASK: Schema = Schema {
    class_name: "OlkTask",
    overrides: &[],
    remap: &[("1F:0B", "Body")],
    skip_null: &[],
    skip_dupe: &[],
    skip_indb: &[
        "FolderID",
        "AccountUID",
        "ExchangeID",
        "ExchangeChangeKey",
        "UUID",
        "ModDate",
        "Name",
        "StartDate",
        "DueDate",
        "Completed",
        "HasReminder",
    ],
};

pub static OLK_EVENT: Schema = Schema {
    class_name: "OlkEvent",
    overrides: &[
        ("03:03", DictEntry::primitive_enum("OrganizerIsCalendarOwner", &OL_ORGANIZER_TYPE)),
        ("03:0E", DictEntry::primitive_fn("NextReminderTime", handlers::windows_minutes)),
    ],
    remap: &[
        ("03:1A", "MasterRecordID"),
        ("1E:04", "CalendarUID"),
        ("1F:01", "Body"),
        ("1F:02", "Subject"),
        ("1F:04", "Location"),
        ("1F:08", "Conference"),
        ("1F:09", "ConferenceJoinLink"),
        ("1F:0A", "ConferenceHTTPJoinLink"),
        ("1F:0B", "ConferenceCapabilities"),
        ("1F:0C", "ConferenceInBand"),
    ],
    skip_null: &[
        // Maybe not null, but not useful
        "DismissTime",
        "DownloadDate",
        "MessageSize",
        "Overdue",
        "AttachmentExchangeID",
        "AttachmentBlockID",
        // Null or zero
        "bool0E",
        "bool13",
        "bool18",
    ],
    skip_dupe: &["ReplyTo", "DownloadDate2", "Address", "Timezone2"],
    skip_indb: &[
        "MasterRecordID",
        "RecurrenceID",
        "AttendeeCount",
        "FolderID",
        "AccountUID",
        "ExchangeID",
        "ExchangeChangeKey",
        "UUID",
        "ModDate",
        "CalendarUID",
        "StartDateUTC",
        "EndDateUTC",
        "IsRecurring",
        "AllowNewTimeProposal",
    ],
};

pub static OLK_CATEGORY: Schema = Schema {
    class_name: "OlkCategory",
    overrides: &[],
    remap: &[],
    skip_null: &["short3201", "date3501", "date3601", "date3701", "date3801", "date3901"],
    skip_dupe: &[],
    skip_indb: &["AccountUID", "ExchangeGUID", "Name", "IsLocalCategory"],
};

pub static OLK_ACCOUNT_MAIL: Schema = Schema {
    class_name: "OlkAccountMail",
    overrides: &[],
    remap: &[],
    skip_null: &[],
    skip_dupe: &["EmailAddressUnicode"],
    skip_indb: &["ExchangeAccountUID", "EmailAddress", "DisplayName"],
};

pub static OLK_SAVED_SEARCH: Schema = Schema {
    class_name: "OlkSavedSearch",
    overrides: &[
        ("03:04", DictEntry::primitive_enum("SearchType", &OL_SEARCH_TYPE)),
        ("03:06", DictEntry::raw_fn("int06", handlers::int8_from_bytes)),
    ],
    remap: &[("1F:01", "Name")],
    skip_null: &["int02", "int06", "int09", "int0A", "long01"],
    skip_dupe: &[],
    skip_indb: &[],
};

pub static OLK_SIGNATURE: Schema =
    Schema { class_name: "OlkSignature", overrides: &[], remap: &[], skip_null: &[], skip_dupe: &[], skip_indb: &[] };

pub static OLK_RECURRENCE: Schema = Schema {
    class_name: "OlkRecurrence",
    overrides: &[
        ("02:01", DictEntry::primitive_enum("Repeats", &OL_REPEATS)),
        ("03:01", DictEntry::primitive_enum("RecurrenceType", &OL_RECURRENCE_TYPE)),
        ("03:03", DictEntry::primitive_enum("EndType", &OL_RECURRENCE_END_TYPE)),
        ("03:07", DictEntry::primitive_fn("WeekDay", handlers::day_of_week_csv)),
        ("03:09", DictEntry::primitive_fn("MonthDOW", handlers::day_of_week_csv)),
        ("03:10", DictEntry::primitive_fn("Until", handlers::windows_minutes)),
        ("0D:01", DictEntry::primitive_fn("RecurrenceDates", handlers::date_list_from_bytes)),
        ("0D:02", DictEntry::primitive_fn("ExceptionDates", handlers::date_list_from_bytes)),
    ],
    remap: &[("02:01", "Freq"), ("03:02", "Interval"), ("03:04", "Occurrences"), ("03:0A", "MonthNth")],
    skip_null: &["MessageSize"],
    skip_dupe: &["AlarmTrigger"],
    skip_indb: &[],
};

pub static OLK_ATTENDEE: Schema = Schema {
    class_name: "OlkAttendee",
    overrides: &[
        ("03:01", DictEntry::primitive_enum("RecipientType", &OL_RECIPIENT_TYPE)),
        ("03:02", DictEntry::primitive_enum("AttendeeType", &OL_ATTENDEE_TYPE)),
    ],
    remap: &[("0B:02", "bool02"), ("0B:03", "bool03")],
    skip_null: &["bool02", "bool03", "bool04"],
    skip_dupe: &[],
    skip_indb: &[],
};

pub static OLK_TIMEZONE: Schema =
    Schema { class_name: "OlkTimezone", overrides: &[], remap: &[], skip_null: &[], skip_dupe: &["TZLongName"], skip_indb: &[] };

pub static OLK_TZ_PROP: Schema =
    Schema { class_name: "OlkTZProp", overrides: &[], remap: &[], skip_null: &[], skip_dupe: &[], skip_indb: &[] };

pub static OLK_ATTACHMENT: Schema = Schema {
    class_name: "OlkAttachment",
    overrides: &[("03:4C01", DictEntry::raw_fn("int4C01", handlers::long_from_bytes))],
    remap: &[],
    skip_null: &[],
    skip_dupe: &["FileNameUnicode"],
    skip_indb: &["AttachmentBlockID"],
};

pub static OLK_CONTENT_TYPE: Schema = Schema {
    class_name: "OlkContentType",
    overrides: &[
        ("03:04", DictEntry::raw_fn("x-mac-creator", handlers::type_code_from_bytes)),
        ("03:05", DictEntry::raw_fn("x-mac-type", handlers::type_code_from_bytes)),
    ],
    remap: &[
        ("02:01", "ContentTypeId"),
        ("02:02", "ContentSubtypeId"),
        ("03:01", "StartPos"),
        ("03:02", "HeaderEndPos"),
        ("03:03", "BodyEndPos"),
        ("1E:01", "ContentType"),
        ("1E:03", "Charset"),
        ("1E:04", "ContentID"),
        ("1F:01", "FileName"),
        ("1F:02", "FileNameUnicode"),
    ],
    skip_null: &[],
    skip_dupe: &["FileNameUnicode", "ContentTypeId", "ContentSubtypeId"],
    skip_indb: &[],
};

pub static OLK_MULTIPART_TYPE: Schema = Schema {
    class_name: "OlkMultipartType",
    overrides: &[("0D:01", DictEntry::list("Parts", &OLK_CONTENT_TYPE))],
    remap: &[
        ("02:01", "ContentTypeId"),
        ("02:02", "ContentSubtypeId"),
        ("03:01", "StartPos"),
        ("03:02", "HeaderEndPos"),
        ("03:03", "BodyEndPos"),
        ("1E:01", "ContentType"),
        ("1E:02", "Boundary"),
    ],
    skip_null: &[],
    skip_dupe: &["ContentTypeId", "ContentSubtypeId"],
    skip_indb: &[],
};

pub static OLK_ADDRESS_FORMAT: Schema = Schema {
    class_name: "OlkMainCountry",
    overrides: &[
        ("03:01", DictEntry::primitive_enum("part_1", &OL_ADDRESS_PART)), // Sep = Line break
        ("03:02", DictEntry::primitive_enum("part_2", &OL_ADDRESS_PART)), // Sep = Line break
        ("03:05", DictEntry::primitive_enum("part_5", &OL_ADDRESS_PART)), // Sep = unicode05
        ("03:06", DictEntry::primitive_enum("part_6", &OL_ADDRESS_PART)), // Sep = Space
        ("03:07", DictEntry::primitive_enum("part_7", &OL_ADDRESS_PART)), // Sep = Line break
        ("03:09", DictEntry::primitive_enum("part_9", &OL_ADDRESS_PART)), // Sep = unicode08
        ("03:0A", DictEntry::primitive_enum("part_A", &OL_ADDRESS_PART)), // Sep = Line break
        ("03:0D", DictEntry::primitive_enum("part_D", &OL_ADDRESS_PART)),
        ("03:14", DictEntry::primitive("int14")),
    ],
    remap: &[
        ("0B:02", "bool02"), // Always true
        ("0B:03", "bool03"), // Always true except for AU
        ("1F:01", "country_code"),
        ("1F:02", "sep_street"), // Street / House Num separator
        ("1F:05", "sep_5_6"),    // Separator for items 5 and 6
        ("1F:08", "sep_9_A"),    // Separator for items 9 and A
    ],
    skip_null: &["bool02", "bool03"],
    skip_dupe: &[],
    skip_indb: &[],
};

pub static OLK_ACTIONS_TAKEN: Schema =
    Schema { class_name: "OlkActionsTaken", overrides: &[], remap: &[], skip_null: &[], skip_dupe: &[], skip_indb: &[] };

/// Top-level record class id, as read from the record envelope, to its schema.
pub fn schema_for_class(class_id: i32) -> Option<&'static Schema> {
    match class_id {
        1 => Some(&OLK_MAIN),
        2 => Some(&OLK_FOLDER),
        3 => Some(&OLK_MESSAGE),
        4 => Some(&OLK_CONTACT),
        5 => Some(&OLK_ACCOUNT_EXCHANGE),
        6 => Some(&OLK_NOTE),
        7 => Some(&OLK_TASK),
        8 => Some(&OLK_EVENT),
        9 => Some(&OLK_CATEGORY),
        14 => Some(&OLK_ACCOUNT_MAIL),
        19 => Some(&OLK_SAVED_SEARCH),
        21 => Some(&OLK_SIGNATURE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_twelve_entity_classes_are_mapped() {
        let ids = [1, 2, 3, 4, 5, 6, 7, 8, 9, 14, 19, 21];
        for id in ids {
            assert!(schema_for_class(id).is_some(), "class {} unmapped", id);
        }
    }

    #[test]
    fn unknown_class_id_is_none() {
        assert!(schema_for_class(999).is_none());
    }

    #[test]
    fn override_and_remap_compose_on_recurrence() {
        // '02:01' is overridden to 'Repeats' but then remapped to 'Freq' —
        // remap always wins, matching the reference implementation's order.
        let remapped = OLK_RECURRENCE.remap_for("02:01");
        assert_eq!(remapped, Some("Freq"));
    }
}
