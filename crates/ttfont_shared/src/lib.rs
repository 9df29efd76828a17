//! Shared functionality
//!
//! This crate supplies the byte cursor and the error types that the font container
//! decoders are built on.
//!

pub mod byte_cursor;
pub mod errors;

pub use errors::{Error, Result};
