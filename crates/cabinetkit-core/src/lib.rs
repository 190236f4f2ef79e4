//! # CabinetKit Core
//!
//! Core value types, unit helpers, and error types shared by the CabinetKit
//! crates. Everything here is plain data; no type holds mutable shared state.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::ParseError;
pub use geometry::{Dimensions, Rect, Size};
pub use units::{
    deserialize_length, format_fraction, format_length, parse_length, MeasurementSystem,
};
