#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library types
// - alloc: Destruct answers for alloc types in no_std
// - derive: re-exports #[derive(Destruct)]

//! # inplace-optional
//!
//! An optional value that lives in one inline slot, with the lifetime of the
//! held value managed explicitly.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent), If, And, Not               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Destruct Capability                                     |
//! |  - Destruct::Trivial answers "no drop glue?" per type             |
//! |  - impls for core/alloc/std types, #[derive(Destruct)]            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Containers                                              |
//! |  - Inline<T>  (trivial, const fn)                                 |
//! |  - Managed<T> (MaybeUninit + explicit drop)                       |
//! |  - Optional<T> = Trivial::If<Inline<T>, Managed<T>>               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Accessing an empty container
//!
//! Dereferencing (`*opt`, `value()`) is checked and panics when empty;
//! `try_value()` reports [`EmptyError`]; `value_unchecked()` is `unsafe` and
//! keeps the zero-cost, undefined-on-empty contract.
//!
//! ## Quick Start
//!
//! ```ignore
//! use inplace_optional::prelude::*;
//!
//! const LIMIT: Inline<u32> = Inline::new(10);
//!
//! let mut name: Optional<String> = Slot::some(String::from("hello"));
//! let copy = name.clone();
//! name.reset();
//! assert!(!name.has_value());
//! assert_eq!(copy.value(), "hello");
//! assert_eq!(LIMIT.value_or(0), 10);
//! ```

// Allow `::inplace_optional` to work inside the crate itself
extern crate self as inplace_optional;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Destruct Capability
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 2: Containers
// =============================================================================
pub mod optional;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{Destruct, NeedsCleanup, is_trivially_destructible};
pub use error::EmptyError;
pub use optional::{Inline, Managed, Optional, Slot};
pub use primitives::{Absent, Bool, Present};

#[cfg(feature = "derive")]
pub use macros::Destruct;

/// Common items.
pub mod prelude {
    pub use crate::capability::Destruct;
    pub use crate::optional::{Inline, Managed, Optional, Slot};
    #[cfg(feature = "derive")]
    pub use macros::Destruct;
}
