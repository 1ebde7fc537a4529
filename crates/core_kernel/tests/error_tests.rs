//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{ExpenseId, GroupId};

#[test]
fn test_invalid_identifier_keeps_kind_and_value() {
    let error = "GRP-nope".parse::<GroupId>().unwrap_err();

    match error {
        CoreError::InvalidIdentifier { kind, value, .. } => {
            assert_eq!(kind, "GRP");
            assert_eq!(value, "GRP-nope");
        }
        other => panic!("Expected InvalidIdentifier, got {:?}", other),
    }
}

#[test]
fn test_invalid_identifier_display() {
    let error = "12345".parse::<ExpenseId>().unwrap_err();
    assert!(error.to_string().starts_with("Invalid EXP identifier '12345'"));
}

#[test]
fn test_invalid_identifier_has_source() {
    let error = "EXP-zzz".parse::<ExpenseId>().unwrap_err();
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_core_error_not_found() {
    let id = ExpenseId::new();
    let error = CoreError::not_found("Expense", id);

    match &error {
        CoreError::NotFound { entity, id: shown } => {
            assert_eq!(*entity, "Expense");
            assert_eq!(shown, &id.to_string());
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(error.to_string(), format!("Expense not found: {}", id));
}
