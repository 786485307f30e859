//! A collection of utilities shared by the light client crates.

#![deny(clippy::nursery, clippy::pedantic, missing_docs)]

pub mod serde;

/// Ensure that a condition is true, otherwise return an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
