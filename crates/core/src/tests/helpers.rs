// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EntityStore, TicketDraft};
use repair_shop_audit::{Actor, Cause};
use repair_shop_domain::{RepairType, TechnicianRef};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(
        String::from("2"),
        String::from("Tech User"),
        String::from("technician"),
    )
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Console request"))
}

pub fn create_test_technician() -> TechnicianRef {
    TechnicianRef {
        id: String::from("2"),
        name: String::from("Tech User"),
    }
}

pub fn create_test_store() -> EntityStore {
    EntityStore::seeded().unwrap()
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2023-08-01 12:00 UTC)
}

/// The intake form for John Doe's flickering desktop.
pub fn create_valid_draft() -> TicketDraft {
    TicketDraft {
        date_time: None,
        customer_id: Some(String::from("1")),
        equipment_id: Some(String::from("1")),
        repair_type: RepairType::Repair,
        repair_details: String::from("Screen flicker"),
    }
}
