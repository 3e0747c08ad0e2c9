// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod adapter_tests;
mod file_tests;
mod memory_tests;

use serde::{Deserialize, Serialize};

/// A small record standing in for a stored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: String,
    pub name: String,
}

pub fn create_test_record() -> TestRecord {
    TestRecord {
        id: String::from("1"),
        name: String::from("Admin User"),
    }
}
