// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Equipment, User, UserRole};
use time::macros::datetime;

fn create_test_equipment() -> Equipment {
    Equipment {
        id: String::from("1"),
        tag_number: String::from("05-04545"),
        equipment_type: String::from("Desktop"),
        brand: String::from("Dell"),
        model: String::from("OptiPlex 7090"),
        serial_number: String::from("DLL7090123"),
        entry_date: datetime!(2023-01-15 08:00 UTC),
    }
}

#[test]
fn test_user_role_round_trips_through_str() {
    assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
    assert_eq!(
        "technician".parse::<UserRole>().unwrap(),
        UserRole::Technician
    );
    assert!("owner".parse::<UserRole>().is_err());
    assert_eq!(UserRole::Technician.to_string(), "technician");
}

#[test]
fn test_user_serializes_without_password_and_camel_case() {
    let user: User = User::new(
        "1",
        "Admin User",
        "555-0100",
        "admin@example.com",
        UserRole::Admin,
    );

    let json: String = serde_json::to_string(&user).unwrap();

    assert!(json.contains("\"role\":\"admin\""));
    assert!(!json.contains("password"));
    assert!(!json.contains("avatar"));
}

#[test]
fn test_user_with_avatar_is_serialized() {
    let user: User = User::new(
        "2",
        "Tech User",
        "555-0101",
        "tech@example.com",
        UserRole::Technician,
    )
    .with_avatar("https://example.com/a.png");

    let json: String = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();

    assert_eq!(back, user);
    assert!(!back.is_admin());
}

#[test]
fn test_equipment_tag_match_is_case_insensitive() {
    let mut equipment: Equipment = create_test_equipment();
    equipment.tag_number = String::from("AB-100");

    assert!(equipment.matches_tag("ab-100"));
    assert!(equipment.matches_tag("  AB-100 "));
    assert!(!equipment.matches_tag("AB-10"));
}

#[test]
fn test_equipment_serializes_type_field() {
    let equipment: Equipment = create_test_equipment();

    let json: String = serde_json::to_string(&equipment).unwrap();

    assert!(json.contains("\"type\":\"Desktop\""));
    assert!(json.contains("\"tagNumber\":\"05-04545\""));
    assert!(json.contains("\"entryDate\":\"2023-01-15T08:00:00Z\""));
}
