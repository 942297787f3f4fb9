//! ASCII normalization of model output.
//!
//! Chat models answer with a mix of LaTeX, Unicode math symbols, superscripts
//! and markdown. [`normalize`] rewrites the math parts into the small ASCII
//! dialect that the equation compiler accepts
//! (`+ - * / ^ ( ) sqrt() pi abs() <= >= != E<exp>`) and leaves prose alone.

pub mod decimals;
pub mod latex;
pub mod normalize;
pub mod unicode;

pub use decimals::{detect_decimal_preference, MAX_DECIMALS};
pub use normalize::normalize;
