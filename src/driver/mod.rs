//! Read loop over top-level units.
//!
//! The driver decides how results are shown and how the parser
//! resynchronizes after an error; the parser itself only returns results.

pub mod driver;

#[cfg(test)]
mod tests;
