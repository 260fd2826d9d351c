//! Overflow-safe unsigned arithmetic.
//!
//! Addition and subtraction that report overflow and underflow as values
//! instead of wrapping or panicking. The crate is usable from Rust through
//! the `safe_add`/`safe_sub` functions here, and from C through the
//! `#[repr(C)]` surface in [`ffi`] (the library builds as a cdylib and a
//! staticlib for that purpose).

pub mod ffi;

use thiserror::Error;

/// The result left the representable range of the operand width.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    #[error("unsigned addition overflow")]
    Overflow,
    #[error("unsigned subtraction underflow")]
    Underflow,
}

/// Adds two u32 values, rejecting the addition if the mathematical sum
/// exceeds `u32::MAX`. A sum of exactly `u32::MAX` is in range and succeeds.
pub fn safe_add(x: u32, y: u32) -> Result<u32, ArithError> {
    x.checked_add(y).ok_or(ArithError::Overflow)
}

/// Subtracts `y` from `x`, rejecting the subtraction when `y > x` since the
/// difference would be negative.
pub fn safe_sub(x: u32, y: u32) -> Result<u32, ArithError> {
    x.checked_sub(y).ok_or(ArithError::Underflow)
}

/// 64-bit variant of [`safe_add`].
pub fn safe_add64(x: u64, y: u64) -> Result<u64, ArithError> {
    x.checked_add(y).ok_or(ArithError::Overflow)
}

/// 64-bit variant of [`safe_sub`].
pub fn safe_sub64(x: u64, y: u64) -> Result<u64, ArithError> {
    x.checked_sub(y).ok_or(ArithError::Underflow)
}
