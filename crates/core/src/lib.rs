//! # resultflow
//!
//! A two-variant `Result` container for chaining fallible operations in a
//! Railway-Oriented style, without hiding failures behind panics.
//!
//! ## Error Handling
//!
//! - `and_then`, `map`, `map_err` short-circuit on the non-matching variant
//! - `value()` / `error()` return `Option`, so introspection never fails
//! - `expect(message)` returns a recoverable [`Error`]
//! - `unwrap()` is the only operation that panics
//!
//! ```
//! use resultflow::{ok, Result};
//!
//! fn parse_int(input: &str) -> Result<i64, String> {
//!     input.trim().parse::<i64>().map_err(|e| e.to_string()).into()
//! }
//!
//! let doubled = ok::<_, String>("21").and_then(parse_int).map(|n| n * 2);
//! assert_eq!(doubled.to_string(), "Ok(42)");
//! ```

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod error;
pub mod result;

pub use error::{Error, UNWRAP_ON_ERR};
pub use result::{err, ok, Result};
