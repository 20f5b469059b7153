//
// Copyright 2020 Olk Data Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Class-specific cleanup applied to a fully-decoded entity map before it is
//! returned: normalizing the recurrence rule, assembling contact address
//! lists, composing address-format strings, and (applied unconditionally
//! afterward, for every entity) coalescing `XML:*` keys under one `XML` map.

pub mod contact;
pub mod event;
pub mod main_account;
pub mod xml;
