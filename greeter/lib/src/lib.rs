//! # greeter
//!
//! A tiny value type that holds a name and prints a greeting for it.
//!
//! ## Quick Start
//!
//! ```
//! use greeter::Greeter;
//!
//! let greeter = Greeter::default();
//! assert_eq!(greeter.message(), "Hello, World from Go!");
//!
//! let mut out = Vec::new();
//! greeter.greet_to(&mut out).unwrap();
//! assert_eq!(out, b"Hello, World from Go!\n");
//! ```
//!
//! ## Modules
//!
//! - [`greeter`] - The `Greeter` type and its serializable [`Greeting`]
//! - [`error`] - Errors raised while writing a greeting

pub mod error;
pub mod greeter;

pub use crate::error::GreetError;
pub use crate::greeter::{DEFAULT_NAME, DEFAULT_RUNTIME_LABEL, Greeter, Greeting};
