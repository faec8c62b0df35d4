//! Error returned by the checked accessors.

use core::fmt;

/// A value was requested from a container that holds nothing.
///
/// Returned by `try_value` / `try_value_mut`. The checked accessors
/// (`value`, `Deref`) panic with this error's message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl EmptyError {
    pub(crate) const MESSAGE: &'static str = "accessed the value of an empty optional";
}

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl core::error::Error for EmptyError {}
