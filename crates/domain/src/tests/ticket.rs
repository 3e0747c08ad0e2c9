// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CustomerRef, DomainError, EquipmentRef, NewTicket, Note, RepairTicket, RepairType,
    SYSTEM_ACTOR_NAME, StatusChange, TechnicianRef, TicketId, TicketStatus,
};
use time::macros::datetime;

fn create_new_ticket() -> NewTicket {
    NewTicket {
        id: TicketId::new(2023, 5),
        date_time: datetime!(2023-07-15 09:00 UTC),
        technician: TechnicianRef {
            id: String::from("2"),
            name: String::from("Tech User"),
        },
        customer: CustomerRef {
            id: String::from("1"),
            name: String::from("John Doe"),
            agency: String::from("Cascada"),
            position: String::from("Supervisor"),
        },
        equipment: EquipmentRef {
            id: String::from("1"),
            tag_number: String::from("05-04545"),
            equipment_type: String::from("Desktop"),
            brand: String::from("Dell"),
            model: String::from("OptiPlex 7090"),
        },
        repair_type: RepairType::Repair,
        repair_details: String::from("Screen flicker"),
    }
}

fn open_ticket() -> RepairTicket {
    RepairTicket::open(create_new_ticket(), datetime!(2023-07-15 09:00 UTC))
}

fn create_note(id: &str) -> Note {
    Note {
        id: id.to_string(),
        text: String::from("Checked cables"),
        created_by: String::from("Tech User"),
        created_at: datetime!(2023-07-15 10:00 UTC),
    }
}

#[test]
fn test_ticket_id_format_is_zero_padded() {
    assert_eq!(TicketId::new(2023, 4).to_string(), "RT-2023-0004");
    assert_eq!(TicketId::new(2024, 12345).to_string(), "RT-2024-12345");
}

#[test]
fn test_ticket_id_parses() {
    let id: TicketId = "RT-2023-0002".parse().unwrap();
    assert_eq!(id.year(), 2023);
    assert_eq!(id.sequence(), 2);
}

#[test]
fn test_ticket_id_round_trips_long_sequence() {
    let id: TicketId = "RT-2024-12345".parse().unwrap();
    assert_eq!(id, TicketId::new(2024, 12345));
}

#[test]
fn test_non_canonical_ticket_ids_are_rejected() {
    for raw in ["RT-2023-00001", "RT-02023-0001", "RT-2023-1", "RT-2023-010000"] {
        assert_eq!(
            raw.parse::<TicketId>().unwrap_err(),
            DomainError::InvalidTicketId(raw.to_string()),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_malformed_ticket_ids_are_rejected() {
    for raw in [
        "",
        "RT-2023",
        "XX-2023-0001",
        "RT--0001",
        "RT-2023-",
        "RT-20a3-0001",
    ] {
        assert_eq!(
            raw.parse::<TicketId>().unwrap_err(),
            DomainError::InvalidTicketId(raw.to_string()),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_ticket_status_wire_names() {
    for status in TicketStatus::ALL {
        assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
    }
    assert_eq!(TicketStatus::InProgress.label(), "In Progress");
    assert!("done".parse::<TicketStatus>().is_err());
}

#[test]
fn test_repair_type_wire_names() {
    assert_eq!(
        "software_issue".parse::<RepairType>().unwrap(),
        RepairType::SoftwareIssue
    );
    assert_eq!(RepairType::HardwareIssue.to_string(), "hardware_issue");
    assert!("upgrade".parse::<RepairType>().is_err());
}

#[test]
fn test_opened_ticket_starts_pending_with_system_entry() {
    let ticket: RepairTicket =
        RepairTicket::open(create_new_ticket(), datetime!(2023-07-15 09:05 UTC));

    assert_eq!(ticket.status(), TicketStatus::Pending);
    assert!(ticket.notes().is_empty());
    assert_eq!(ticket.status_history().len(), 1);
    assert_eq!(ticket.status_history()[0].status, TicketStatus::Pending);
    assert_eq!(ticket.status_history()[0].changed_by, SYSTEM_ACTOR_NAME);
    assert_eq!(
        ticket.status_history()[0].timestamp,
        datetime!(2023-07-15 09:05 UTC)
    );
}

#[test]
fn test_status_change_overwrites_status() {
    let mut ticket: RepairTicket = open_ticket();

    ticket.push_status_change(StatusChange {
        status: TicketStatus::InProgress,
        changed_by: String::from("Tech User"),
        timestamp: datetime!(2023-07-15 10:00 UTC),
    });

    assert_eq!(ticket.status(), TicketStatus::InProgress);
    assert_eq!(ticket.status_history().len(), 2);
}

#[test]
fn test_status_change_timestamp_never_goes_backwards() {
    let mut ticket: RepairTicket = open_ticket();

    ticket.push_status_change(StatusChange {
        status: TicketStatus::Completed,
        changed_by: String::from("Tech User"),
        timestamp: datetime!(2023-07-14 09:00 UTC),
    });

    assert_eq!(
        ticket.status_history()[1].timestamp,
        datetime!(2023-07-15 09:00 UTC)
    );
}

#[test]
fn test_duplicate_note_id_is_rejected() {
    let mut ticket: RepairTicket = open_ticket();

    ticket.push_note(create_note("n1")).unwrap();
    let result: Result<(), DomainError> = ticket.push_note(create_note("n1"));

    assert!(matches!(result, Err(DomainError::DuplicateNoteId { .. })));
    assert_eq!(ticket.notes().len(), 1);
}

#[test]
fn test_restore_accepts_consistent_history() {
    let history: Vec<StatusChange> = vec![
        StatusChange {
            status: TicketStatus::Pending,
            changed_by: String::from(SYSTEM_ACTOR_NAME),
            timestamp: datetime!(2023-07-15 09:00 UTC),
        },
        StatusChange {
            status: TicketStatus::Completed,
            changed_by: String::from("Tech User"),
            timestamp: datetime!(2023-07-15 11:00 UTC),
        },
    ];

    let ticket: RepairTicket = RepairTicket::restore(
        create_new_ticket(),
        TicketStatus::Completed,
        vec![create_note("note1")],
        history,
    )
    .unwrap();

    assert_eq!(ticket.status(), TicketStatus::Completed);
    assert_eq!(ticket.notes().len(), 1);
    assert_eq!(ticket.status_history().len(), 2);
}

#[test]
fn test_restore_rejects_empty_history() {
    let result: Result<RepairTicket, DomainError> = RepairTicket::restore(
        create_new_ticket(),
        TicketStatus::Pending,
        Vec::new(),
        Vec::new(),
    );

    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusHistory { .. })
    ));
}

#[test]
fn test_restore_rejects_mismatched_current_status() {
    let history: Vec<StatusChange> = vec![StatusChange {
        status: TicketStatus::Pending,
        changed_by: String::from(SYSTEM_ACTOR_NAME),
        timestamp: datetime!(2023-07-15 09:00 UTC),
    }];

    let result: Result<RepairTicket, DomainError> = RepairTicket::restore(
        create_new_ticket(),
        TicketStatus::Completed,
        Vec::new(),
        history,
    );

    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusHistory { .. })
    ));
}

#[test]
fn test_restore_rejects_history_not_opened_by_system() {
    let history: Vec<StatusChange> = vec![StatusChange {
        status: TicketStatus::Pending,
        changed_by: String::from("Tech User"),
        timestamp: datetime!(2023-07-15 09:00 UTC),
    }];

    let result: Result<RepairTicket, DomainError> = RepairTicket::restore(
        create_new_ticket(),
        TicketStatus::Pending,
        Vec::new(),
        history,
    );

    assert!(result.is_err());
}

#[test]
fn test_ticket_serializes_with_wire_names() {
    let ticket: RepairTicket = open_ticket();

    let json: serde_json::Value = serde_json::to_value(&ticket).unwrap();

    assert_eq!(json["id"], "RT-2023-0005");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["repairType"], "repair");
    assert_eq!(json["equipment"]["type"], "Desktop");
    assert_eq!(json["statusHistory"][0]["changedBy"], "System");
    assert_eq!(json["dateTime"], "2023-07-15T09:00:00Z");
}
