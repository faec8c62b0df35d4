//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Destruct)]` | on struct/enum | Answer the Destruct capability |

pub mod destruct;

pub use destruct::expand_derive_destruct;
