//! Error types and error handling for the front-end.
//!
//! This module defines the errors produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - One error variant per syntax diagnostic
//! - Error naming and tips used when rendering snippets
//! - The driver's I/O failure type

pub mod errors;
