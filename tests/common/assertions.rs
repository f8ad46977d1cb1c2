//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a data access result failed with the given kind
#[macro_export]
macro_rules! assert_data_err {
    ($result:expr, $kind:expr) => {
        match $result {
            Err(e) => assert_eq!(e.kind, $kind, "unexpected error: {}", e),
            Ok(value) => panic!("Expected Err({:?}), got Ok: {:?}", $kind, value),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{:?}' to contain '{:?}'",
            $haystack,
            $needle
        );
    };
}
