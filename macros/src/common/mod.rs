// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - attrs: #[destruct(...)] option parsing

mod attrs;

pub use attrs::*;
