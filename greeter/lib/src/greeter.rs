//! The `Greeter` value type.
//!
//! A `Greeter` holds a name and a runtime label. Both are fixed once the
//! greeter is built, so greeting is repeatable and produces the same line
//! every time.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GreetError;

/// Name greeted by [`Greeter::default`].
pub const DEFAULT_NAME: &str = "World";

/// Runtime label shown after "from" unless overridden.
pub const DEFAULT_RUNTIME_LABEL: &str = "Go";

/// Holds a name and produces a greeting that references it.
///
/// ## Examples
///
/// ```
/// use greeter::Greeter;
///
/// let greeter = Greeter::new("Ferris").with_label("Rust");
/// assert_eq!(greeter.message(), "Hello, Ferris from Rust!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
    label: String,
}

impl Greeter {
    /// Creates a greeter for `name`. Any string is accepted, including empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(name = %name, "creating greeter");
        Self {
            name,
            label: DEFAULT_RUNTIME_LABEL.to_string(),
        }
    }

    /// Replaces the runtime label shown in the greeting.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The greeting text without a trailing newline.
    pub fn message(&self) -> String {
        format!("Hello, {} from {}!", self.name, self.label)
    }

    /// A serializable snapshot of the greeting.
    pub fn greeting(&self) -> Greeting {
        Greeting {
            name: self.name.clone(),
            label: self.label.clone(),
            message: self.message(),
        }
    }

    /// Writes the greeting line to `writer` and flushes it.
    ///
    /// ## Errors
    ///
    /// Returns [`GreetError::Output`] if the write or the flush fails.
    pub fn greet_to<W: Write>(&self, mut writer: W) -> Result<(), GreetError> {
        let line = self.message();
        trace!(bytes = line.len() + 1, "writing greeting");
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the greeting line to standard output.
    ///
    /// ## Errors
    ///
    /// Returns [`GreetError::Output`] if stdout is closed or otherwise
    /// rejects the write.
    pub fn greet(&self) -> Result<(), GreetError> {
        debug!(name = %self.name, label = %self.label, "greeting");
        self.greet_to(io::stdout().lock())
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

/// A greeting in structured form, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// The greeted name
    pub name: String,
    /// The runtime label
    pub label: String,
    /// The full greeting text, without a trailing newline
    pub message: String,
}
