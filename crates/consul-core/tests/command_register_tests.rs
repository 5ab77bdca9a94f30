//! Command Register Tests
//!
//! Verifies the genesis command value, controller-gated overwrites and the
//! dictator-mode involution.

use consul_core::model::{Address, Bytes32, Role};
use consul_core::{apply, Command, Registry};

fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

fn with_controller() -> Registry {
    let state = Registry::new(addr(1));
    apply(
        state,
        addr(1),
        Command::GrantRole {
            role: Role::Controller,
            address: addr(2),
        },
    )
    .unwrap()
}

#[test]
fn test_initial_command_is_report_digest() {
    let state = Registry::new(addr(1));
    assert_eq!(state.current_command(), Bytes32::hash_of(b"REPORT"));
    assert_eq!(state.current_command(), Registry::genesis_command());
}

#[test]
fn test_controller_changes_command() {
    let state = with_controller();
    let new_command = Bytes32::hash_of(b"NEW_COMMAND");

    let state = apply(state, addr(2), Command::ChangeCommand { new_command }).unwrap();

    assert_eq!(state.current_command(), new_command);
}

#[test]
fn test_change_command_keeps_only_latest_value() {
    let state = with_controller();

    let state = apply(
        state,
        addr(2),
        Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"FIRST"),
        },
    )
    .unwrap();
    let state = apply(
        state,
        addr(2),
        Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"SECOND"),
        },
    )
    .unwrap();

    assert_eq!(state.current_command(), Bytes32::hash_of(b"SECOND"));
}

#[test]
fn test_non_controller_cannot_change_command() {
    let state = with_controller();
    let before = state.current_command();

    let err = apply(
        state.clone(),
        addr(9),
        Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"X"),
        },
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Address does not have controller permission"
    );
    assert_eq!(state.current_command(), before);
}

#[test]
fn test_dictator_mode_starts_off() {
    let state = Registry::new(addr(1));
    assert!(!state.dictator_mode());
}

#[test]
fn test_toggle_dictator_mode_is_involution() {
    let state = Registry::new(addr(1));

    let state = apply(state, addr(1), Command::ToggleDictatorMode).unwrap();
    assert!(state.dictator_mode());

    let state = apply(state, addr(1), Command::ToggleDictatorMode).unwrap();
    assert!(!state.dictator_mode());
}

#[test]
fn test_dictator_mode_does_not_affect_authorization() {
    // The flag is inert state: flipping it changes nothing about who may do
    // what
    let state = with_controller();
    let state = apply(state, addr(1), Command::ToggleDictatorMode).unwrap();

    // Controller still changes commands, outsiders still cannot
    let state = apply(
        state,
        addr(2),
        Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"X"),
        },
    )
    .unwrap();
    let err = apply(state, addr(9), Command::ToggleDictatorMode).unwrap_err();
    assert_eq!(err.to_string(), "Address does not have owner permission");
}
