//! Procedural macros for inplace-optional
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Destruct)]` | struct/enum | Declare whether the type needs cleanup |
//! | `define_impl_*_macro!()` | - | Internal: Destruct impls for std types |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, PartialEq, Destruct)]
//! #[destruct(eq)]
//! struct Point { x: i32, y: i32 }
//!
//! const ORIGIN: Optional<Point> = Inline::new(Point { x: 0, y: 0 });
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate the impl_core_types! macro for primitives and core types.
#[proc_macro]
pub fn define_impl_core_types_macro(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_impl_core_types_macro().into()
}

/// Generate the impl_alloc_types! macro for alloc types.
#[proc_macro]
pub fn define_impl_alloc_types_macro(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_impl_alloc_types_macro().into()
}

/// Generate the impl_std_lib_types! macro for std types.
#[proc_macro]
pub fn define_impl_std_lib_types_macro(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_impl_std_lib_types_macro().into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to answer the `Destruct` capability.
///
/// The type is trivially destructible iff all of its fields are.
///
/// # Options
///
/// - `#[destruct(managed)]` - the type has a `Drop` impl; always `Absent`
/// - `#[destruct(eq)]` - also implement `Self == Inline<Self>` / `Self == Managed<Self>`
///
/// # Usage
/// ```ignore
/// #[derive(Destruct)]
/// struct Point { x: i32, y: i32 }        // Inline<Point>
///
/// #[derive(Destruct)]
/// struct Named { name: String }          // Managed<Named>
///
/// #[derive(Destruct)]
/// #[destruct(managed)]
/// struct Guard(u32);
/// impl Drop for Guard {
///     fn drop(&mut self) {}
/// }
/// ```
#[proc_macro_derive(Destruct, attributes(destruct))]
pub fn derive_destruct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_destruct(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
