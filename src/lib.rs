//! # dateserial
//!
//! Date-based serial numbers packed into a single `i64`.
//!
//! An id is the decimal concatenation of a date, an optional filler and a
//! serial, e.g. `250511` + `1100` + `0005` = `25051111000005`:
//! - 🔢 Human-scannable (the date is readable in the digits)
//! - 📏 Bounded by the 19-digit budget of `i64`
//! - 🧪 Deterministic given the serial; randomness is injected
//!
//! Ids are not globally unique. Collisions are improbable only within a
//! short window and a small number of generators.

#![forbid(unsafe_code)]

mod config;
mod encoder;
mod error;
mod generator;
mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{EncodingRequest, SerialPadding};
pub use encoder::{DigitBudget, SerialEncoder};
pub use error::{DateSerialError, Result};
pub use generator::DateSerialGenerator;
pub use source::SerialSource;
#[cfg(feature = "rand")]
pub use source::{SharedRandom, ThreadRandom};
