// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_shop_audit::Cause;
use repair_shop_persistence::Persistence;

use crate::{AppContext, ConsoleConfig, CreateTicketRequest, LoginRequest, login};

/// The lowest work factor bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_config() -> ConsoleConfig {
    ConsoleConfig {
        bcrypt_cost: TEST_BCRYPT_COST,
        ..ConsoleConfig::immediate()
    }
}

pub fn create_test_context() -> AppContext {
    AppContext::new(create_test_config(), Persistence::new_in_memory()).unwrap()
}

pub async fn create_signed_in_context() -> AppContext {
    let mut ctx: AppContext = create_test_context();
    login(&mut ctx, &admin_login()).await.unwrap();
    ctx
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-100"), String::from("Console request"))
}

pub fn admin_login() -> LoginRequest {
    LoginRequest {
        email: String::from("admin@example.com"),
        password: String::from("admin123"),
    }
}

pub fn tech_login() -> LoginRequest {
    LoginRequest {
        email: String::from("tech@example.com"),
        password: String::from("tech123"),
    }
}

/// John Doe's flickering desktop, received on 1 August 2023.
pub fn create_valid_ticket_request() -> CreateTicketRequest {
    CreateTicketRequest {
        date_time: Some(String::from("2023-08-01T09:30")),
        customer_id: Some(String::from("1")),
        equipment_id: Some(String::from("1")),
        repair_type: Some(String::from("hardware_issue")),
        repair_details: String::from("Screen flicker"),
    }
}
