//! Number rendering in the style of a TI-84 graphing calculator.

pub mod number;

pub use number::{format_number, strip_trailing_zeros, MAX_DECIMALS, SIGNIFICANT_DIGITS};
