//! # Layer 1: Destruct Capability
//!
//! Answers, at the type level, whether a type can be torn down without
//! running any cleanup code.
//!
//! ```text
//! T -> <T as Destruct>::Trivial -> Present | Absent -> Inline<T> | Managed<T>
//! ```
//!
//! The answer is a [`Bool`] so it composes: a struct is trivial iff every
//! field is trivial, which is what `#[derive(Destruct)]` computes with
//! [`Bool::And`]. Stable Rust cannot select an impl by the presence of drop
//! glue, so the answer is declared (by the impls in [`std_types`] or by the
//! derive) and then checked against [`core::mem::needs_drop`] the first time
//! the trivial variant is instantiated.

pub mod std_types;

use core::marker::PhantomData;
use core::mem::needs_drop;

use crate::primitives::Bool;

/// Capability: "can a value of this type be destroyed with no observable
/// side effect and no generated cleanup code?"
///
/// # Usage
/// ```ignore
/// #[derive(Destruct)]
/// struct Point { x: i32, y: i32 }          // Trivial = Present
///
/// #[derive(Destruct)]
/// struct Named { name: String, id: u32 }   // Trivial = Absent
///
/// #[derive(Destruct)]
/// #[destruct(managed)]
/// struct Guard(u32);                       // has a Drop impl
/// impl Drop for Guard { fn drop(&mut self) {} }
/// ```
pub trait Destruct {
    /// `Present` if trivially destructible, `Absent` otherwise.
    type Trivial: Bool;

    /// Value-level mirror of [`Destruct::Trivial`].
    const TRIVIAL: bool = <Self::Trivial as Bool>::VALUE;
}

/// Type-level negation of the capability: `Present` when `T` needs cleanup.
pub type NeedsCleanup<T> = <<T as Destruct>::Trivial as Bool>::Not;

/// Raw drop-glue query, total over every sized type.
///
/// Unlike [`Destruct`] this needs no impl, but its answer cannot drive type
/// selection on stable Rust.
#[inline(always)]
pub const fn is_trivially_destructible<T>() -> bool {
    !needs_drop::<T>()
}

/// Compile-time proof that `T` carries no drop glue.
///
/// Evaluating [`AssertTrivial::OK`] for a type with drop glue is a
/// post-monomorphization error, which is how a wrong `Destruct` answer
/// (for example a derived `Present` on a type with a `Drop` impl) surfaces.
#[doc(hidden)]
pub struct AssertTrivial<T>(PhantomData<T>);

impl<T> AssertTrivial<T> {
    pub const OK: () = assert!(
        !needs_drop::<T>(),
        "type has drop glue but was declared trivially destructible; use #[destruct(managed)]"
    );
}
