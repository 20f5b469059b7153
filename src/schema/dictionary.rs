//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The global property dictionary: every `(variant_tag:index)` key seen
//! across all record classes, mapped to a display name and (when the source
//! format calls for one) a raw-mode flag and a handler. Per-class schemas in
//! [`crate::schema::classes`] layer overrides, remaps, and skip sets on top
//! of this table; they never replace it wholesale.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::decode::handlers;
use crate::schema::classes::*;
use crate::schema::enums::*;
use crate::schema::DictEntry;

static ENTRIES: &[(&str, DictEntry)] = &[
    // integers (2 bytes signed)
    ("02:01", DictEntry::primitive("short01")), // Message; Attachment Details; Recurrence Freq
    ("02:02", DictEntry::primitive("short02")), // Attachment Details, ?
    ("02:03", DictEntry::primitive("short03")), // Attachment Details, ?
    ("02:04", DictEntry::primitive("short04")), // Attachment Details, ?
    ("02:06", DictEntry::primitive("short06")), // Message
    ("02:65", DictEntry::raw("DefaultEmailRaw")), // Contact
    ("02:77", DictEntry::raw("DefaultIMRaw")), // Contact
    ("02:80", DictEntry::primitive_enum("Sensitivity", &OL_SENSITIVITY)), // Message, Contact
    ("02:81", DictEntry::primitive_enum("Priority", &OL_PRIORITY)), // Message, Event
    ("02:82", DictEntry::primitive("short82")), // Event, Task
    ("02:D4", DictEntry::raw("shortD4")), // Contact
    ("02:2C01", DictEntry::primitive("DownloadHeadersOnly")), // Accounts (both)
    ("02:2D01", DictEntry::primitive("SpecialFolderType")), // Folder = {1-10,12,14,99,103,106}
    ("02:2F01", DictEntry::primitive_enum("CalendarWeekStart", &OL_DAY_OF_WEEK)), // Main
    ("02:3001", DictEntry::primitive_enum("DefaultEventReminderUnit", &OL_TIME_UNIT)), // Main
    ("02:3101", DictEntry::primitive_enum("LocaleIdentifier", &LOCALE)), // Main
    ("02:3201", DictEntry::raw("short3201")), // Category, always 0
    ("02:3301", DictEntry::primitive("OnlineFolderType")), // Folder = {None, 1}
    ("02:3901", DictEntry::primitive("shortCalendar1")), // Folder
    ("02:3A01", DictEntry::primitive("shortCalendar2")), // Folder
    // integers (4 bytes signed)
    ("03:00", DictEntry::primitive("RecordID")),
    ("03:01", DictEntry::primitive("int01")), // Attendee Type, Recurrence Type
    ("03:02", DictEntry::primitive("int02")), // Search, always 1; Attendee
    ("03:03", DictEntry::primitive("int03")), // Main, Event My Meeting, Msg 528 vs. 36
    ("03:04", DictEntry::primitive("int04")), // Main=0/1, SearchType, MessageType
    ("03:05", DictEntry::primitive("MessageSize")), // Message, Event (always 0 for Event)
    ("03:06", DictEntry::primitive("AlarmTrigger")), // Message, Event (always 0 for Msg)
    ("03:07", DictEntry::primitive("int07")), // Event, always 0, deprecated in v16
    ("03:08", DictEntry::primitive("MonthDay")), // Recurrence
    ("03:09", DictEntry::primitive("int09")), // Search, always 2
    ("03:0A", DictEntry::primitive("int0A")), // Search, always 0
    ("03:0C", DictEntry::primitive_enum("Response", &RESPONSE)),
    ("03:0D", DictEntry::primitive("int0D")), // Main, 107 or null
    ("03:0E", DictEntry::primitive("int0E")), // Main, 105 or null; Event next reminder
    ("03:0F", DictEntry::primitive_fn("StartDate", handlers::windows_minutes)), // Recurrence
    ("03:10", DictEntry::primitive("int10")), // Message, Recurrence Until
    ("03:13", DictEntry::primitive_fn("StartDateUTC", handlers::windows_minutes)), // Event
    ("03:14", DictEntry::primitive_fn("EndDateUTC", handlers::windows_minutes)), // Event, Message (something else)
    ("03:15", DictEntry::primitive("int15")), // Message, 651 or null
    ("03:16", DictEntry::primitive("int16")), // Event, null or in the 1-400 range
    ("03:17", DictEntry::primitive_fn("StartDateOrganizer", handlers::windows_minutes)), // Event
    ("03:18", DictEntry::primitive_fn("EndDateOrganizer", handlers::windows_minutes)), // Event
    ("03:1A", DictEntry::primitive("int1A")), // Event: MasterRecordID; Message: DownloadState
    ("03:1D", DictEntry::primitive_enum("BusyStatus", &OL_BUSY_STATUS)), // Event
    ("03:1E", DictEntry::primitive("RecurrenceID")), // Event
    ("03:20", DictEntry::primitive("AttendeeCount")), // Event
    ("03:23", DictEntry::primitive("int23")), // Message
    ("03:24", DictEntry::primitive("int24")), // Event, null or 0, 1, 2, 3, deprecated in v16
    ("03:27", DictEntry::primitive("int27")), // Message
    ("03:29", DictEntry::raw_fn("ConversationID", handlers::long_from_bytes)),
    ("03:2A", DictEntry::primitive("int2A")), // Message, null or 0, 1
    ("03:2B", DictEntry::primitive("int2B")), // Message
    ("03:35", DictEntry::primitive("int35")), // Contact, always 0
    ("03:64", DictEntry::primitive("EmailCount")), // Contact
    ("03:76", DictEntry::primitive("IMCount")), // Contact
    ("03:80", DictEntry::primitive("intCalendar3")), // Folder
    ("03:94", DictEntry::primitive("int94")), // Contact
    ("03:9E", DictEntry::primitive("int9E")), // Contact, always 0
    ("03:E3", DictEntry::primitive_enum("FlagStatus", &OL_FLAG_STATUS)), // Message
    ("03:E4", DictEntry::primitive("EmailTypesRaw")), // Contact
    ("03:E5", DictEntry::primitive("IMTypesRaw")), // Contact
    ("03:2C01", DictEntry::raw_fn("ServerType", handlers::type_code_from_bytes)), // Account (Mail)
    ("03:2E01", DictEntry::primitive("UseSignatureNewMessage")), // Account (Mail)
    ("03:2F01", DictEntry::primitive("UseSignatureReplyForward")), // Account (Mail)
    ("03:3001", DictEntry::primitive("int3001")), // Account (Exchange), 30
    ("03:3201", DictEntry::primitive("DirectoryServiceMaxResults")), // Account (Exchange)
    ("03:3701", DictEntry::primitive("int3701")), // Account (Exchange), 20
    ("03:3801", DictEntry::primitive("ExchangeServerPort")), // Accounts (both)
    ("03:3901", DictEntry::primitive("int3901")), // Account (Exchange), 25
    ("03:3A01", DictEntry::primitive("DirectoryServicePort")), // Account (Exchange)
    ("03:3D01", DictEntry::raw_fn("EncryptionAlgorithm", handlers::type_code_from_bytes)), // Accounts (both)
    ("03:3E01", DictEntry::raw_fn("SigningAlgorithm", handlers::type_code_from_bytes)), // Account (Exchange)
    ("03:3F01", DictEntry::primitive("int3F01")), // Account (Exchange), 2
    ("03:4701", DictEntry::primitive("int4701")), // Account (Exchange), 10
    ("03:4801", DictEntry::raw_fn("x-mac-type", handlers::type_code_from_bytes)), // Attachment
    ("03:4901", DictEntry::raw_fn("x-mac-creator", handlers::type_code_from_bytes)), // Attachment
    ("03:4A01", DictEntry::raw_fn("type4A01", handlers::type_code_from_bytes)), // Attachment
    ("03:4B01", DictEntry::raw_fn("type4B01", handlers::type_code_from_bytes)), // Attachment
    ("03:4C01", DictEntry::primitive("int4C01")), // Attachment
    ("03:4E01", DictEntry::raw_fn("FolderType", handlers::type_code_from_bytes)), // Folder
    ("03:4F01", DictEntry::primitive_enum("FolderClass", &OL_FOLDER_CLASS)), // Folder
    ("03:5101", DictEntry::primitive("ItemCount")), // Folder
    ("03:5201", DictEntry::primitive("FolderID")), // Folder
    ("03:5401", DictEntry::primitive("CalendarDefaultTimezone")), // Main, in ms_tzid
    ("03:5501", DictEntry::primitive("CalendarWorkDayStarts")), // Main, minutes
    ("03:5601", DictEntry::primitive("CalendarWorkDayEnds")), // Main, minutes
    ("03:5701", DictEntry::primitive("DefaultEventReminderBefore")), // Main
    ("03:5801", DictEntry::primitive("int5801")), // Main, null or 1
    ("03:5901", DictEntry::primitive("int5901")), // Category, null or 0/2/6
    ("03:5A01", DictEntry::primitive("int5A01")), // Category, null or 0/1
    ("03:5B01", DictEntry::primitive("int5B01")), // Attachment, ?
    ("03:5C01", DictEntry::raw_fn("int5C01", handlers::long_from_bytes)), // Attachment, ?
    ("03:E803", DictEntry::raw("PictureBlockID")), // Contact Picture
    ("03:E903", DictEntry::raw_fn("PictureFormat", handlers::type_code_from_bytes)), // Contact Picture
    // bstrings
    ("08:03", DictEntry::primitive("bytes03")), // Message
    ("08:04", DictEntry::primitive("bytes04")), // Message
    ("08:05", DictEntry::primitive("SearchData")), // Search
    // booleans
    ("0B:02", DictEntry::primitive("bool02")), // Attendee, Country always true
    ("0B:03", DictEntry::primitive("IsRecurring")), // Event Is Recurring, Attendee
    ("0B:04", DictEntry::primitive("bool04")), // Attendee
    ("0B:05", DictEntry::primitive("Completed")), // Task
    ("0B:06", DictEntry::primitive("bool06")), // Task, always false, deprecated in v16
    ("0B:07", DictEntry::primitive("AllDayEvent")), // Event
    ("0B:08", DictEntry::primitive("HasReminder")), // Task, Message, Contact
    ("0B:09", DictEntry::primitive("bool09")), // Event
    ("0B:0A", DictEntry::primitive("bool0A")), // Event
    ("0B:0B", DictEntry::primitive("IsMyMeeting")), // Event
    ("0B:0D", DictEntry::primitive("bool0D")), // Event
    ("0B:0E", DictEntry::primitive("bool0E")), // Event
    ("0B:0F", DictEntry::primitive("bool0F")), // Event
    ("0B:10", DictEntry::primitive("Overdue")), // Task, Event
    ("0B:11", DictEntry::primitive("AllowNewTimeProposal")), // Event
    ("0B:13", DictEntry::primitive("bool13")), // Event
    ("0B:14", DictEntry::primitive("IsCancelled")), // Event
    ("0B:15", DictEntry::primitive("CanJoinOnline")), // Event
    ("0B:16", DictEntry::primitive("DoNotForward")), // Event
    ("0B:18", DictEntry::primitive("bool18")), // Event
    ("0B:1F", DictEntry::primitive("bool1F")), // Message
    ("0B:23", DictEntry::primitive("HasDownloadedExternalImages")), // Message
    ("0B:24", DictEntry::primitive("bool24")), // Message, false or null
    ("0B:25", DictEntry::primitive("bool25")), // Message, false or null
    ("0B:36", DictEntry::primitive("bool36")), // Message
    ("0B:38", DictEntry::primitive("bool38")), // Message
    ("0B:39", DictEntry::primitive("bool39")), // Message
    ("0B:3C", DictEntry::primitive("bool3C")), // Message
    ("0B:3D", DictEntry::primitive("DidReply")), // Message
    ("0B:3E", DictEntry::primitive("DidForward")), // Message
    ("0B:40", DictEntry::primitive("bool40")), // Message, false or null
    ("0B:41", DictEntry::primitive("HasAttachmentOrInline")), // Message
    ("0B:42", DictEntry::primitive("Sent")), // Message
    ("0B:4A", DictEntry::primitive("Sent2")), // Message
    ("0B:4B", DictEntry::primitive("PartiallyDownloaded")), // Message
    ("0B:4D", DictEntry::primitive("HasvCalendar")), // Message
    ("0B:50", DictEntry::primitive("SuppressAutobackfill")), // Message
    ("0B:51", DictEntry::primitive("MentionedMe")), // Message
    ("0B:52", DictEntry::primitive("bool52")), // Message
    ("0B:53", DictEntry::primitive("HasAttachment")), // Message
    ("0B:55", DictEntry::primitive("bool55")), // Message
    ("0B:E1", DictEntry::primitive("boolE1")), // Contact, always false
    ("0B:E2", DictEntry::primitive("JapaneseFormat")), // Contact
    ("0B:2C01", DictEntry::primitive("bool2C01")), // Account (Mail), true
    ("0B:2D01", DictEntry::primitive("bool2D01")), // Account (Exchange), true
    ("0B:3301", DictEntry::primitive("SignOutgoingMessages")), // Account (both)
    ("0B:3401", DictEntry::primitive("SignIncludeCertificate")), // Account (both)
    ("0B:3501", DictEntry::primitive("SignSendAsClearText")), // Account (both)
    ("0B:3601", DictEntry::primitive("EncryptOutgoingMessages")), // Accounts (both)
    ("0B:3B01", DictEntry::primitive("bool3B01")), // Account (Exchange), true
    ("0B:3C01", DictEntry::primitive("bool3C01")), // Account (Exchange), false
    ("0B:3D01", DictEntry::primitive("bool3D01")), // Account (Exchange), true
    ("0B:3F01", DictEntry::primitive("DirectoryServiceUseSSL")), // Account (Exchange)
    ("0B:4001", DictEntry::primitive("DirectoryServiceUseExchangeCreds")), // Account (Exchange)
    ("0B:5301", DictEntry::primitive("bool5301")), // Account (Exchange), false
    ("0B:5401", DictEntry::primitive("bool5401")), // Account (Exchange), false
    ("0B:5601", DictEntry::primitive("bool5601")), // Account (Exchange), true
    ("0B:5A01", DictEntry::primitive("bool5A01")), // Account (Exchange), true
    ("0B:5B01", DictEntry::primitive("bool5B01")), // Attachment, ?
    ("0B:5C01", DictEntry::primitive("bool5C01")), // Attachment, ?
    ("0B:5E01", DictEntry::primitive("bool5E01")), // Attachment, ?
    ("0B:5F01", DictEntry::primitive("bool5F01")), // Folder, false or null
    ("0B:6001", DictEntry::primitive("bool6001")), // Folder, false or null
    ("0B:6401", DictEntry::primitive("bool6401")), // Folder
    ("0B:6501", DictEntry::primitive("ContainsPartialDwnldMsgs")), // Folder
    ("0B:6601", DictEntry::primitive("WorkOffline")), // Main
    ("0B:6701", DictEntry::primitive("bool6701")), // Main, 1/2
    ("0B:6801", DictEntry::primitive("DefaultEventReminderEnabled")), // Main
    ("0B:6901", DictEntry::primitive("PlaySoundNewMessage")), // Main
    ("0B:6A01", DictEntry::primitive("PlaySoundNoNewMessages")), // Main
    ("0B:6B01", DictEntry::primitive("PlaySoundSentMessage")), // Main
    ("0B:6C01", DictEntry::primitive("PlaySoundSyncError")), // Main
    ("0B:6D01", DictEntry::primitive("PlaySoundWelcome")), // Main
    ("0B:6E01", DictEntry::primitive("PlaySoundReminder")), // Main
    ("0B:6F01", DictEntry::primitive("CalendarWorkWeekSu")), // Main
    ("0B:7001", DictEntry::primitive("CalendarWorkWeekMo")), // Main
    ("0B:7101", DictEntry::primitive("CalendarWorkWeekTu")), // Main
    ("0B:7201", DictEntry::primitive("CalendarWorkWeekWe")), // Main
    ("0B:7301", DictEntry::primitive("CalendarWorkWeekTh")), // Main
    ("0B:7401", DictEntry::primitive("CalendarWorkWeekFr")), // Main
    ("0B:7501", DictEntry::primitive("CalendarWorkWeekSa")), // Main
    ("0B:7601", DictEntry::primitive("NotifyBounceIconInDock")), // Main
    ("0B:7801", DictEntry::primitive("ReplyWithDefaultEmailAccount")), // Main
    ("0B:7901", DictEntry::primitive("AssignMessagesToContactCategories")), // Main
    ("0B:7A01", DictEntry::primitive("NotifyDisplayAlert")), // Main
    ("0B:7B01", DictEntry::primitive("NotifyShowPreviewInAlert")), // Main
    ("0B:7C01", DictEntry::primitive("bool7C01")), // Category, 5/15
    ("0B:7D01", DictEntry::primitive("Read")), // Message
    ("0B:7E01", DictEntry::primitive("IsLocalCategory")), // Category
    ("0B:8001", DictEntry::primitive("bool8001")), // Accounts (both), true
    ("0B:8101", DictEntry::primitive("bool8101")), // Account (Mail)
    ("0B:8201", DictEntry::primitive("bool8201")), // Account (Mail)
    ("0B:8601", DictEntry::primitive("bool8601")), // Account (Mail)
    ("0B:9501", DictEntry::primitive("bool9501")), // Folder
    ("0B:9801", DictEntry::primitive("bool9801")), // Account (Mail)
    ("0B:9A01", DictEntry::primitive("SyncSharedMailboxes")), // Account (Exchange)
    ("0B:9B01", DictEntry::primitive("bool9B01")), // Folder
    ("0B:9C01", DictEntry::primitive("bool9C01")), // Account (Exchange)
    ("0B:9D01", DictEntry::primitive("bool9D01")), // Folder
    ("0B:9E01", DictEntry::primitive("bool9E01")), // Account (Exchange)
    ("0B:9F01", DictEntry::primitive("bool9F01")), // Folder
    ("0B:A101", DictEntry::primitive("boolA101")), // Folder
    ("0B:A201", DictEntry::primitive("boolA201")), // Folder
    ("0B:A301", DictEntry::primitive("boolA301")), // Folder
    ("0B:A401", DictEntry::primitive("boolA401")), // Account (Mail)
    ("0B:A501", DictEntry::primitive("boolA501")), // Account (Mail)
    // data access objects - collections, lists, etc.
    //  Recurrence, MessageSourceHeader
    ("0D:01", DictEntry::primitive("obj01")),
    //  Events
    ("0D:02", DictEntry::collection("RRule", &OLK_RECURRENCE)),
    ("0D:07", DictEntry::primitive_fn("ReplyTo", handlers::reply_to_list)),
    ("0D:09", DictEntry::collection("Timezone", &OLK_TIMEZONE)),
    ("0D:0B", DictEntry::list("Attendees", &OLK_ATTENDEE)),
    ("0D:0D", DictEntry::primitive_fn("Organizer", handlers::user_single)),
    ("0D:0E", DictEntry::primitive("AttachmentExchangeID")),
    ("0D:0F", DictEntry::collection("Timezone2", &OLK_TIMEZONE)), // duplicate
    ("0D:82", DictEntry::primitive("AttachmentBlockID")),
    //  Messages
    ("0D:03", DictEntry::primitive_fn("From", handlers::user_list)),
    ("0D:04", DictEntry::primitive_fn("From2", handlers::user_list)), // same as from
    ("0D:05", DictEntry::collection("MsrcBlockStruct", &OLK_MULTIPART_TYPE)),
    ("0D:06", DictEntry::primitive_fn("From3", handlers::user_list)), // same as from
    ("0D:1E", DictEntry::primitive_fn("To", handlers::user_list)),
    ("0D:1F", DictEntry::primitive_fn("CC", handlers::user_list)),
    ("0D:20", DictEntry::primitive_fn("BCC", handlers::user_list)),
    ("0D:21", DictEntry::list("AttachmentMetadata", &OLK_ATTACHMENT)),
    ("0D:2D", DictEntry::primitive_fn("MeetingAttendees", handlers::user_list)),
    ("0D:C1", DictEntry::primitive_fn("ActionsTaken", handlers::actions_taken_list)),
    ("0D:80", DictEntry::primitive("0D:80")), // present but empty in the source table
    //  Contacts
    ("0D:62", DictEntry::primitive("obj62")), // always 0? probably a list, but not sure of what
    //  Attachments
    ("0D:3301", DictEntry::collection("AttcBlockStruct", &OLK_CONTENT_TYPE)),
    ("0D:3E01", DictEntry::primitive("obj3E01")),
    //  Categories
    ("0D:3401", DictEntry::primitive_fn("BackgroundColor", handlers::color_from_bytes)),
    //  Main
    ("0D:3801", DictEntry::primitive("0D:3801")), // present but empty in the source table
    ("0D:3901", DictEntry::list("AddressFormats", &OLK_ADDRESS_FORMAT)),
    ("0D:4501", DictEntry::primitive("NewOutlookObject")), // something to do with New Outlook
    //  Time Zone
    ("0D:3F01", DictEntry::list("Standard", &OLK_TZ_PROP)),
    ("0D:4001", DictEntry::list("Daylight", &OLK_TZ_PROP)),
    //  Account (both)
    ("0D:2C01", DictEntry::primitive("Certificates")),
    //  Account (Exchange)
    ("0D:4201", DictEntry::primitive("bplist1")),
    ("0D:4301", DictEntry::primitive("bplist2")),
    // long integers (8 bytes signed)
    ("14:01", DictEntry::primitive("long01")), // Search, always 0
    ("14:61", DictEntry::raw("long61")), // Contact
    ("14:2C01", DictEntry::raw("AttachmentBlockID")), // Attachment Block Id
    ("14:2D01", DictEntry::raw("SyncMapBlockID")), // Folder SyncMap Block Id
    ("14:2E01", DictEntry::raw("FolderSyncBlockID")), // Folder SyncMap Block Id
    ("14:3001", DictEntry::primitive("AccountUID")), // Event, Category
    ("14:3201", DictEntry::primitive("ExchangeAccountUID")), // Account (Mail)
    ("14:3301", DictEntry::primitive("MailAccountUID")), // Main
    ("14:3401", DictEntry::primitive("LDAPAccountUID")), // Account (Exchange)
    ("14:3601", DictEntry::primitive("ExchangeAccountUID")), // Main
    ("14:3701", DictEntry::primitive("long3701")), // Main, 55834574849
    ("14:3801", DictEntry::primitive("MailAccountUID")), // Main
    ("14:3901", DictEntry::primitive("GroupID")),
    // user-defined blobs
    //  Contact
    ("1D:66", DictEntry::primitive("EmailAddress_1")),
    ("1D:67", DictEntry::primitive("EmailAddress_2")),
    ("1D:68", DictEntry::primitive("EmailAddress_3")),
    ("1D:69", DictEntry::primitive("EmailAddress_4")),
    ("1D:6A", DictEntry::primitive("EmailAddress_5")),
    ("1D:6B", DictEntry::primitive("EmailAddress_6")),
    ("1D:6C", DictEntry::primitive("EmailAddress_7")),
    ("1D:6D", DictEntry::primitive("EmailAddress_8")),
    ("1D:6E", DictEntry::primitive("EmailAddress_9")),
    ("1D:6F", DictEntry::primitive("EmailAddress_10")),
    ("1D:70", DictEntry::primitive("EmailAddress_11")),
    ("1D:71", DictEntry::primitive("EmailAddress_12")),
    ("1D:72", DictEntry::primitive("EmailAddress_13")),
    ("1D:78", DictEntry::primitive("IMAddress_1")),
    ("1D:79", DictEntry::primitive("IMAddress_2")),
    ("1D:7A", DictEntry::primitive("IMAddress_3")),
    ("1D:7B", DictEntry::primitive("IMAddress_4")),
    ("1D:7C", DictEntry::primitive("IMAddress_5")),
    ("1D:7D", DictEntry::primitive("IMAddress_6")),
    ("1D:7E", DictEntry::primitive("IMAddress_7")),
    ("1D:7F", DictEntry::primitive("IMAddress_8")),
    ("1D:80", DictEntry::primitive("IMAddress_9")),
    ("1D:81", DictEntry::primitive("IMAddress_10")),
    ("1D:82", DictEntry::primitive("IMAddress_11")),
    ("1D:83", DictEntry::primitive("IMAddress_12")),
    ("1D:84", DictEntry::primitive("IMAddress_13")),
    // ANSI strings
    ("1E:01", DictEntry::primitive("Address")), // Event, Attendee
    ("1E:02", DictEntry::primitive("MessageID")),
    ("1E:03", DictEntry::primitive("string03")), // Message.Simple?
    ("1E:04", DictEntry::primitive("string04")), // Event CalendarUID, Message Header
    ("1E:07", DictEntry::primitive("string07")), // Event, ?
    ("1E:0A", DictEntry::primitive("MessageClass")), // Event
    ("1E:1E", DictEntry::primitive("References2")), // Message, only present once, similar to references
    ("1E:1F", DictEntry::primitive("References3")), // Message, only present once, similar to references
    ("1E:22", DictEntry::primitive("InReplyTo")), // Message
    ("1E:23", DictEntry::primitive("vCalendar")), // Message
    ("1E:24", DictEntry::primitive("References")), // Message
    ("1E:25", DictEntry::primitive("string25")), // Message
    ("1E:2B", DictEntry::primitive("string2B")), // Message
    ("1E:2C", DictEntry::primitive("string2C")), // Message
    ("1E:40", DictEntry::primitive("MessageClass")), // Message
    ("1E:41", DictEntry::primitive("string41")), // Message
    ("1E:67", DictEntry::primitive("ExchangeID")),
    ("1E:68", DictEntry::primitive("ExchangeChangeKey")),
    ("1E:2C01", DictEntry::primitive("EmailAddress")), // Accounts (both)
    ("1E:2D01", DictEntry::primitive("ExchangeServerURL")), // Accounts (both)
    ("1E:3101", DictEntry::primitive("string3101")), // Account (Exchange), AAMK...AAA=
    ("1E:3401", DictEntry::primitive("string3401")), // Account (Exchange), empty
    ("1E:3501", DictEntry::primitive("directory_service_search_base")), // Account (Exchange)
    ("1E:3801", DictEntry::primitive("string3801")), // Account (Exchange), empty
    ("1E:3901", DictEntry::primitive("string3901")), // Account (Exchange), empty
    ("1E:3A01", DictEntry::primitive("EmailAddress2")), // Account (Exchange)
    ("1E:3B01", DictEntry::primitive("OutlookOABURL")), // Account (Exchange)
    ("1E:3C01", DictEntry::primitive("ReceiptIPAddress")), // Account (Exchange)
    ("1E:3E01", DictEntry::primitive("FileType")), // Attachment
    ("1E:3F01", DictEntry::primitive("ContentType")), // Attachment
    ("1E:4001", DictEntry::primitive("FileName")), // Attachment
    ("1E:4201", DictEntry::primitive("ExchangeGUID")), // Category
    ("1E:4301", DictEntry::primitive("OutlookManageURL")), // Account (both)
    ("1E:4401", DictEntry::primitive("OutlookClutterURL")),
    ("1E:4D01", DictEntry::primitive("OutlookAPIURL")), // Account (Exchange)
    ("1E:4E01", DictEntry::primitive("CalendarOwnerAccount")), // Folder
    ("1E:4F01", DictEntry::primitive("OutlookSearchURL")), // Account (Exchange)
    ("1E:5001", DictEntry::primitive("CalendarToken")), // Folder
    ("1E:5101", DictEntry::primitive("string5101")), // Attachment
    ("1E:5201", DictEntry::primitive("ExchangeEWSURL")), // Account (Exchange)
    // Unicode strings (message contents, xml, etc.)
    ("1F:01", DictEntry::primitive("Name")), // Contact first name, Event body, Message subject, Search/Task/Attendee name
    ("1F:02", DictEntry::primitive("unicode02")), // Contact last name, Event subject
    ("1F:04", DictEntry::primitive("unicode04")), // Contact body, Event location
    ("1F:05", DictEntry::primitive("CalendarOwnerName")), // Event
    ("1F:06", DictEntry::primitive("HomeAddressStreet")), // Contact
    ("1F:07", DictEntry::primitive("HomeAddressCity")), // Contact
    ("1F:08", DictEntry::primitive("unicode08")), // Event conference; Country, - or ,; Contact Home Address
    ("1F:09", DictEntry::primitive("unicode09")), // Event conference; Contact Home Address
    ("1F:0A", DictEntry::primitive("unicode0A")), // Event conference; Contact Home Address
    ("1F:0B", DictEntry::primitive("unicode0B")), // Event conference; Contact Home Phone; Task body
    ("1F:0C", DictEntry::primitive("unicode0C")), // Event conference; Contact Home Fax
    ("1F:0D", DictEntry::primitive("ConferenceSettings")), // Event conference
    ("1F:0E", DictEntry::primitive("ConferenceSettings2")), // Event conference
    ("1F:0F", DictEntry::primitive("PhoneHome2")), // Contact
    ("1F:10", DictEntry::primitive("ConferenceUUID")), // Event conference
    ("1F:14", DictEntry::primitive("Company")), // Contact
    ("1F:15", DictEntry::primitive("WorkTitle")), // Contact
    ("1F:16", DictEntry::primitive("WorkAddressStreet")), // Contact
    ("1F:17", DictEntry::primitive("WorkAddressCity")), // Contact
    ("1F:18", DictEntry::primitive("WorkAddressState")), // Contact
    ("1F:19", DictEntry::primitive("WorkAddressPostalCode")), // Contact
    ("1F:1A", DictEntry::primitive("WorkAddressCountry")), // Contact
    ("1F:1B", DictEntry::primitive("Department")), // Contact
    ("1F:1C", DictEntry::primitive("OfficeLocation")), // Contact
    ("1F:1D", DictEntry::primitive("PhoneWork")), // Contact
    ("1F:1E", DictEntry::primitive("unicode1E")), // Message body; Contact Work Fax
    ("1F:1F", DictEntry::primitive("PhonePager")), // Contact
    ("1F:20", DictEntry::primitive("WebPageWork")), // Contact
    ("1F:21", DictEntry::primitive("PhoneMobile")), // Contact
    ("1F:22", DictEntry::primitive("PhoneWork2")), // Contact
    ("1F:23", DictEntry::primitive("unicode23")), // Message Recipients; Contact Primary Phone
    ("1F:24", DictEntry::primitive("Alias")), // Contact
    ("1F:25", DictEntry::primitive("PhoneAssistant")), // Contact
    ("1F:27", DictEntry::primitive("Preview")), // Message
    ("1F:2A", DictEntry::primitive("ThreadTopic")), // Message
    ("1F:2F", DictEntry::primitive("ThreadTopic2")), // Message
    ("1F:3E", DictEntry::primitive("Nickname")), // Contact
    ("1F:3F", DictEntry::primitive("Title")), // Contact
    ("1F:40", DictEntry::primitive("Suffix")), // Contact
    ("1F:41", DictEntry::primitive("Custom1")), // Contact
    ("1F:42", DictEntry::primitive("Custom2")), // Contact
    ("1F:43", DictEntry::primitive("Custom3")), // Contact
    ("1F:44", DictEntry::primitive("Custom4")), // Contact
    ("1F:45", DictEntry::primitive("Custom5")), // Contact
    ("1F:46", DictEntry::primitive("Custom6")), // Contact
    ("1F:47", DictEntry::primitive("Custom7")), // Contact
    ("1F:48", DictEntry::primitive("Custom8")), // Contact
    ("1F:49", DictEntry::primitive("Date1")), // Contact, DOW, Mon DD, YYYY
    ("1F:4A", DictEntry::primitive("Date2")), // Contact, DOW, Mon DD, YYYY
    ("1F:4B", DictEntry::primitive("Birthday")), // Contact, DOW, Mon DD, YYYY
    ("1F:4C", DictEntry::primitive("Anniversairy")), // Contact, DOW, Mon DD, YYYY
    ("1F:57", DictEntry::primitive("YomiLastName")), // Contact
    ("1F:58", DictEntry::primitive("YomiFirstName")), // Contact
    ("1F:59", DictEntry::primitive("YomiCompanyName")), // Contact
    ("1F:5A", DictEntry::primitive("XML:Tasks")), // Event/Message; Contact Extra Phones
    ("1F:5B", DictEntry::primitive("XML:Meetings")), // Event/Message; Contact Extra Phones
    ("1F:5C", DictEntry::primitive("XML:Addresses")), // Event/Message; Contact Extra Phones
    ("1F:5D", DictEntry::primitive("XML:Emails")), // Event/Message; Contact Extra Phones
    ("1F:5E", DictEntry::primitive("XML:Phones")), // Event, Message
    ("1F:5F", DictEntry::primitive("XML:Urls")), // Event, Message
    ("1F:60", DictEntry::primitive("XML:Contacts")), // Event, Message
    ("1F:61", DictEntry::primitive("ThreadTopic")), // Event, Message
    ("1F:62", DictEntry::primitive("HTMLBody")), // Message
    ("1F:6A", DictEntry::primitive("MiddleName")), // Contact, for Message this is Card Data
    ("1F:C8", DictEntry::primitive("Spouse")), // Contact
    ("1F:C9", DictEntry::primitive("Child")), // Contact
    ("1F:D5", DictEntry::primitive("AstrologicalSign")), // Contact
    ("1F:D6", DictEntry::primitive("Age")), // Contact
    ("1F:E5", DictEntry::primitive("BloodType")), // Contact
    ("1F:E6", DictEntry::primitive("InterestsHobbies")), // Contact
    ("1F:E7", DictEntry::primitive("Initials")), // Contact
    ("1F:FA", DictEntry::primitive("HomeAddressFormat")), // Contact, Country Code
    ("1F:FB", DictEntry::primitive("WorkAddressFormat")), // Contact, Country Code
    ("1F:FD", DictEntry::primitive("PhoneOther")), // Contact
    ("1F:FE", DictEntry::primitive("PhoneOtherFax")), // Contact
    ("1F:FF", DictEntry::primitive("PhoneRadio")), // Contact
    ("1F:0001", DictEntry::primitive("OtherAddressStreet")), // Contact
    ("1F:0101", DictEntry::primitive("OtherAddressCity")), // Contact
    ("1F:0201", DictEntry::primitive("OtherAddressState")), // Contact
    ("1F:0301", DictEntry::primitive("OtherAddressPostalCode")), // Contact
    ("1F:0401", DictEntry::primitive("OtherAddressCountry")), // Contact
    ("1F:0601", DictEntry::primitive("OtherAddressFormat")), // Contact, Seems bugged in Outlook 16
    ("1F:2C01", DictEntry::primitive("DisplayName")), // Accounts (both)
    ("1F:2E01", DictEntry::primitive("UserName")), // Accounts (Mail)
    ("1F:2F01", DictEntry::primitive("EmailAddressUnicode")), // Accounts (both), same as string email address
    ("1F:3101", DictEntry::primitive("unicode3101")), // Account (Exchange), null or empty
    ("1F:3401", DictEntry::primitive("FileNameUnicode")), // Attachment
    ("1F:3501", DictEntry::primitive("Name")), // Category
    ("1F:3601", DictEntry::primitive("Name")), // Folder
    ("1F:3701", DictEntry::primitive("Title")), // Note
    ("1F:3801", DictEntry::primitive("Body")), // Note
    ("1F:3901", DictEntry::primitive("Name")), // Signature
    ("1F:3A01", DictEntry::primitive("Body")), // Signature
    ("1F:3B01", DictEntry::primitive("SoundSet")), // Main
    ("1F:3C01", DictEntry::primitive("DefaultCategory")), // Accounts (Exchange)
    ("1F:4401", DictEntry::primitive("unicode4401")), // Attachment
    ("1F:4C01", DictEntry::primitive("CalendarOwnerName")), // Folder
    // additional long codes
    //   14 == max(15.values()) except for a few Messages
    //   Mostly 1, but can be up to 15
    //   16 is not always present, always zero except for a few Messages
    //   Can be 1, 4, or 5 when non-zero
    ("20:14", DictEntry::primitive("foot14")),
    // The reference implementation's `foot15` override re-enters the
    // size-array reader with 8-byte values; it is always dropped by the
    // footer skip set regardless of class, so its decoded value is never
    // observable and is left raw here.
    ("20:15", DictEntry::raw("foot15")),
    ("20:16", DictEntry::primitive("foot16")),
    // GUIDs for a class (CLSID)
    ("48:00", DictEntry::primitive("UUID")), // Category, Contact, Event, Note, Task
    // Apple Mac Absolute timestamps (seconds since Jan 1 2001)
    ("4D:01", DictEntry::primitive("TimeSent")),
    ("4D:02", DictEntry::primitive("TimeReceived")),
    ("4D:04", DictEntry::primitive("ModDate")),
    ("4D:09", DictEntry::primitive("StartDate")), // Task
    ("4D:0A", DictEntry::primitive("CompletedDate")), // Task
    ("4D:0B", DictEntry::primitive("DueDate")), // Task
    ("4D:0C", DictEntry::primitive("Reminder")), // Task
    ("4D:0D", DictEntry::primitive("Reminder2")), // Task, same as reminder
    ("4D:10", DictEntry::primitive("DownloadDate2")), // Event, sent by me, same as 11
    ("4D:11", DictEntry::primitive("DownloadDate")),
    ("4D:12", DictEntry::primitive("CreationTime")),
    ("4D:15", DictEntry::primitive("date15")), // Message, off from Received by ~seconds
    ("4D:16", DictEntry::primitive("DismissTime")), // Event
    ("4D:17", DictEntry::primitive("ReplyTime")), // Event
    ("4D:18", DictEntry::primitive("OwnerCriticalChange")), // Event
    ("4D:19", DictEntry::primitive("date19")), // Event
    ("4D:1A", DictEntry::primitive("date1A")), // Message, similar to date15?
    ("4D:1B", DictEntry::primitive("ScheduledSendDate")), // Message
    ("4D:2C01", DictEntry::primitive("date2C01")), // Account (Exchange), 2016-08-27
    ("4D:2D01", DictEntry::primitive("date2D01")), // Account (Exchange)
    ("4D:2E01", DictEntry::primitive("date2E01")), // Folder, ?
    ("4D:2F01", DictEntry::primitive("date2F01")), // Folder, ?
    ("4D:3001", DictEntry::primitive("date3001")), // Folder
    ("4D:3101", DictEntry::primitive("CreatedDate")), // Note
    ("4D:3201", DictEntry::primitive("CreatedDate")), // Account (Exchange)
    ("4D:3301", DictEntry::primitive("CreatedDate")), // Category
    ("4D:3401", DictEntry::primitive("date3401")), // Category, null except one
    ("4D:3501", DictEntry::primitive("date3501")), // Category, always null
    ("4D:3601", DictEntry::primitive("date3601")), // Category, always null
    ("4D:3701", DictEntry::primitive("date3701")), // Category, always null
    ("4D:3801", DictEntry::primitive("date3801")), // Category, always null
    ("4D:3901", DictEntry::primitive("date3901")), // Category, always null
    ("4D:3A01", DictEntry::primitive("date3A01")), // Account (Exchange), 2016-08-27
    ("4D:3D01", DictEntry::primitive("date3D01")), // Account (Mail)
    // timezone sub-namespace attributes
    ("4643:7A74", DictEntry::raw_fn("TZID", handlers::utf8_from_bytes)),
    ("5A54:4449", DictEntry::raw_fn("MSTZID", handlers::int_from_bytes)),
    ("614E:656D", DictEntry::raw_fn("TZLongName", handlers::utf8_from_bytes)),
    // 7453 -> STANDARD time property
    ("7453:6C52", DictEntry::raw_fn("RRule", handlers::utf8_from_bytes)),
    ("7453:6F54", DictEntry::raw_fn("OffsetTo", handlers::utf8_from_bytes)),
    ("7453:7246", DictEntry::raw_fn("OffsetFrom", handlers::utf8_from_bytes)),
    ("7453:7453", DictEntry::raw_fn("StartDate", handlers::windows_minutes_from_bytes)),
    // 4C44 -> DAYLIGHT time property
    ("4C44:6C52", DictEntry::raw_fn("RRule", handlers::utf8_from_bytes)),
    ("4C44:6F54", DictEntry::raw_fn("OffsetTo", handlers::utf8_from_bytes)),
    ("4C44:7246", DictEntry::raw_fn("OffsetFrom", handlers::utf8_from_bytes)),
    ("4C44:7453", DictEntry::raw_fn("StartDate", handlers::windows_minutes_from_bytes)),
];

static DICTIONARY: Lazy<HashMap<&'static str, DictEntry>> = Lazy::new(|| ENTRIES.iter().copied().collect());

/// Looks a `tag:index` key up in the global dictionary.
pub fn lookup(key: &str) -> Option<DictEntry> {
    DICTIONARY.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in ENTRIES {
            assert!(seen.insert(*key), "duplicate dictionary key {}", key);
        }
    }

    #[test]
    fn known_scalar_entry() {
        let entry = lookup("03:05").unwrap();
        assert_eq!(entry.name, "MessageSize");
    }

    #[test]
    fn collection_entry_points_at_recurrence_schema() {
        let entry = lookup("0D:02").unwrap();
        assert_eq!(entry.name, "RRule");
        assert!(matches!(entry.handler, crate::schema::Handler::Collection(_)));
    }

    #[test]
    fn unmapped_key_is_none() {
        assert!(lookup("99:99").is_none());
    }

    #[test]
    fn empty_tuple_entries_still_resolve_to_suppress_unmapped_logging() {
        assert!(lookup("0D:80").is_some());
        assert!(lookup("0D:3801").is_some());
    }
}
