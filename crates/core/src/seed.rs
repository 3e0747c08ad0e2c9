// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The sample workshop data the console starts with.

use crate::error::CoreError;
use crate::store::EntityStore;
use repair_shop_domain::{
    Customer, CustomerRef, DomainError, Equipment, EquipmentRef, NewTicket, Note, RepairTicket,
    RepairType, SYSTEM_ACTOR_NAME, StatusChange, TechnicianRef, TicketId, TicketStatus,
};
use time::OffsetDateTime;
use time::macros::datetime;

const TECHNICIAN_ID: &str = "2";
const TECHNICIAN_NAME: &str = "Tech User";

/// Returns the sample customers.
#[must_use]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "1",
            "John Doe",
            "Cascada",
            "Supervisor Operativo administrativo",
            datetime!(2023-01-15 08:00 UTC),
        ),
        Customer::new(
            "2",
            "Jane Smith",
            "San Martin",
            "Plataforma",
            datetime!(2023-03-22 10:30 UTC),
        ),
    ]
}

/// Returns the sample equipment inventory.
#[must_use]
pub fn sample_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: String::from("1"),
            tag_number: String::from("05-04545"),
            equipment_type: String::from("Desktop"),
            brand: String::from("Dell"),
            model: String::from("OptiPlex 7090"),
            serial_number: String::from("DLL7090123"),
            entry_date: datetime!(2023-01-15 08:00 UTC),
        },
        Equipment {
            id: String::from("2"),
            tag_number: String::from("05-06060"),
            equipment_type: String::from("Laptop"),
            brand: String::from("Lenovo"),
            model: String::from("ThinkPad T14"),
            serial_number: String::from("LNV14789"),
            entry_date: datetime!(2023-02-20 09:30 UTC),
        },
    ]
}

/// Returns the four sample tickets.
///
/// # Errors
///
/// Returns an error if a sample ticket's recorded history is inconsistent.
pub fn sample_tickets() -> Result<Vec<RepairTicket>, DomainError> {
    Ok(vec![
        RepairTicket::restore(
            header(
                1,
                datetime!(2023-07-01 09:30 UTC),
                customer("1", "John Doe", "Marketing Department", "Marketing Manager"),
                equipment("1", "05-04545", "Desktop", "Dell", "OptiPlex 7090"),
                RepairType::Maintenance,
                "Regular maintenance and cleaning of internal components",
            ),
            TicketStatus::Completed,
            vec![note(
                "note1",
                "Completed regular maintenance procedures",
                datetime!(2023-07-01 11:45 UTC),
            )],
            vec![
                opened(datetime!(2023-07-01 09:30 UTC)),
                changed(TicketStatus::Completed, datetime!(2023-07-01 11:45 UTC)),
            ],
        )?,
        RepairTicket::restore(
            header(
                2,
                datetime!(2023-07-05 14:00 UTC),
                customer("2", "Jane Smith", "HR Department", "HR Coordinator"),
                equipment("2", "08-12345", "Laptop", "HP", "ProBook 450 G8"),
                RepairType::SoftwareIssue,
                "Operating system corruption, requires reinstallation and data backup.",
            ),
            TicketStatus::InProgress,
            vec![
                note(
                    "note2a",
                    "Initial diagnostic completed. OS corrupted. Backing up user data.",
                    datetime!(2023-07-05 15:30 UTC),
                ),
                note(
                    "note2b",
                    "Reinstallation of Windows in progress.",
                    datetime!(2023-07-05 17:00 UTC),
                ),
            ],
            vec![
                opened(datetime!(2023-07-05 14:00 UTC)),
                changed(TicketStatus::InProgress, datetime!(2023-07-05 15:00 UTC)),
            ],
        )?,
        RepairTicket::restore(
            header(
                3,
                datetime!(2023-07-10 10:15 UTC),
                customer("3", "Peter Jones", "IT Department", "Network Admin"),
                equipment("3", "12-98765", "Monitor", "LG", "UltraGear 27GN950"),
                RepairType::HardwareIssue,
                "Monitor not turning on, suspect power supply issue.",
            ),
            TicketStatus::PendingParts,
            vec![note(
                "note3a",
                "Diagnosed faulty power supply. Ordered replacement part.",
                datetime!(2023-07-10 11:30 UTC),
            )],
            vec![
                opened(datetime!(2023-07-10 10:15 UTC)),
                changed(TicketStatus::PendingParts, datetime!(2023-07-10 11:30 UTC)),
            ],
        )?,
        RepairTicket::restore(
            header(
                4,
                datetime!(2023-07-12 08:45 UTC),
                customer("1", "John Doe", "Marketing Department", "Marketing Manager"),
                equipment("4", "05-04546", "Printer", "Epson", "EcoTank ET-2760"),
                RepairType::Other,
                "Printer not connecting to network. Driver issue suspected.",
            ),
            TicketStatus::Pending,
            Vec::new(),
            vec![opened(datetime!(2023-07-12 08:45 UTC))],
        )?,
    ])
}

impl EntityStore {
    /// Creates a store holding the sample customers, equipment and tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample data violates a store invariant.
    pub fn seeded() -> Result<Self, CoreError> {
        Ok(Self::with_records(
            sample_customers(),
            sample_equipment(),
            sample_tickets()?,
        )?)
    }
}

fn header(
    sequence: u32,
    date_time: OffsetDateTime,
    customer: CustomerRef,
    equipment: EquipmentRef,
    repair_type: RepairType,
    repair_details: &str,
) -> NewTicket {
    NewTicket {
        id: TicketId::new(2023, sequence),
        date_time,
        technician: TechnicianRef {
            id: String::from(TECHNICIAN_ID),
            name: String::from(TECHNICIAN_NAME),
        },
        customer,
        equipment,
        repair_type,
        repair_details: repair_details.to_string(),
    }
}

fn customer(id: &str, name: &str, agency: &str, position: &str) -> CustomerRef {
    CustomerRef {
        id: id.to_string(),
        name: name.to_string(),
        agency: agency.to_string(),
        position: position.to_string(),
    }
}

fn equipment(
    id: &str,
    tag_number: &str,
    equipment_type: &str,
    brand: &str,
    model: &str,
) -> EquipmentRef {
    EquipmentRef {
        id: id.to_string(),
        tag_number: tag_number.to_string(),
        equipment_type: equipment_type.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
    }
}

fn note(id: &str, text: &str, created_at: OffsetDateTime) -> Note {
    Note {
        id: id.to_string(),
        text: text.to_string(),
        created_by: String::from(TECHNICIAN_NAME),
        created_at,
    }
}

fn opened(timestamp: OffsetDateTime) -> StatusChange {
    StatusChange {
        status: TicketStatus::Pending,
        changed_by: String::from(SYSTEM_ACTOR_NAME),
        timestamp,
    }
}

fn changed(status: TicketStatus, timestamp: OffsetDateTime) -> StatusChange {
    StatusChange {
        status,
        changed_by: String::from(TECHNICIAN_NAME),
        timestamp,
    }
}
