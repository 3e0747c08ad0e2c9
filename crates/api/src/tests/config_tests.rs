// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use crate::{ConsoleConfig, DEFAULT_SESSION_KEY};

#[test]
fn test_default_latencies_match_console_timings() {
    let config: ConsoleConfig = ConsoleConfig::default();

    assert_eq!(config.login_latency(), Duration::from_millis(800));
    assert_eq!(config.create_ticket_latency(), Duration::from_millis(1000));
    assert_eq!(config.status_change_latency(), Duration::from_millis(800));
    assert_eq!(config.add_note_latency(), Duration::ZERO);
    assert_eq!(config.profile_latency(), Duration::from_millis(1000));
    assert_eq!(config.session_key, DEFAULT_SESSION_KEY);
    assert_eq!(config.min_password_length, 8);
    assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
}

#[test]
fn test_immediate_removes_every_delay() {
    let config: ConsoleConfig = ConsoleConfig::immediate();

    assert!(config.login_latency().is_zero());
    assert!(config.create_ticket_latency().is_zero());
    assert!(config.status_change_latency().is_zero());
    assert!(config.add_note_latency().is_zero());
    assert!(config.profile_latency().is_zero());
    assert_eq!(config.session_key, DEFAULT_SESSION_KEY);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: ConsoleConfig =
        ConsoleConfig::from_json(r#"{"loginLatencyMs": 25, "sessionKey": "bench"}"#).unwrap();

    assert_eq!(config.login_latency(), Duration::from_millis(25));
    assert_eq!(config.session_key, "bench");
    assert_eq!(config.create_ticket_latency_ms, 1000);
    assert_eq!(config.min_password_length, 8);
}

#[test]
fn test_empty_json_object_is_default() {
    assert_eq!(
        ConsoleConfig::from_json("{}").unwrap(),
        ConsoleConfig::default()
    );
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(ConsoleConfig::from_json(r#"{"loginLatencyMs": "slow"}"#).is_err());
    assert!(ConsoleConfig::from_json("not json").is_err());
}
