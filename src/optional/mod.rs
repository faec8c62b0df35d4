//! # Layer 2: Optional Containers
//!
//! ```text
//! optional/
//! ├── managed.rs - Managed<T>: MaybeUninit slot, explicit write / drop_in_place
//! └── inline.rs  - Inline<T>:  const fn surface for types without drop glue
//! ```
//!
//! [`Optional<T>`] picks one of the two at compile time from
//! `<T as Destruct>::Trivial`:
//!
//! ```ignore
//! let a: Optional<u32> = Slot::some(5);                  // Inline<u32>
//! let b: Optional<String> = Slot::some("x".to_string()); // Managed<String>
//! ```
//!
//! Generic code names the shared surface through [`Slot`]:
//!
//! ```ignore
//! fn first_or<T: Destruct + Clone>(items: &[T], default: T) -> T
//! where
//!     Optional<T>: Slot<T>,
//! {
//!     let slot: Optional<T> = match items.first() {
//!         Some(item) => Slot::some(item.clone()),
//!         None => Slot::none(),
//!     };
//!     Slot::value_or(&slot, default)
//! }
//! ```

pub mod inline;
pub mod managed;

pub use inline::Inline;
pub use managed::Managed;

use crate::capability::Destruct;
use crate::error::EmptyError;
use crate::primitives::Bool;

/// The container variant selected for `T`.
///
/// - `T::Trivial = Present` → [`Inline<T>`]
/// - `T::Trivial = Absent`  → [`Managed<T>`]
pub type Optional<T> = <<T as Destruct>::Trivial as Bool>::If<Inline<T>, Managed<T>>;

/// Operations shared by both variants.
///
/// Assignment from a bare `T` is deliberately absent: only [`Inline::set`]
/// offers it.
pub trait Slot<T>: Sized {
    fn none() -> Self;

    fn some(value: T) -> Self;

    fn has_value(&self) -> bool;

    fn try_value(&self) -> Result<&T, EmptyError>;

    fn try_value_mut(&mut self) -> Result<&mut T, EmptyError>;

    /// # Safety
    /// The container must hold a value.
    unsafe fn value_unchecked(&self) -> &T;

    fn value_or(&self, default: T) -> T
    where
        T: Clone;

    fn reset(&mut self);

    fn take(&mut self) -> Self;

    fn into_option(self) -> Option<T>;
}

/// Forward every `Slot` method to the inherent method of the same name.
macro_rules! impl_slot {
    ($ty:ident) => {
        impl<T> Slot<T> for $ty<T> {
            #[inline]
            fn none() -> Self {
                $ty::none()
            }

            #[inline]
            fn some(value: T) -> Self {
                $ty::new(value)
            }

            #[inline]
            fn has_value(&self) -> bool {
                $ty::has_value(self)
            }

            #[inline]
            fn try_value(&self) -> Result<&T, EmptyError> {
                $ty::try_value(self)
            }

            #[inline]
            fn try_value_mut(&mut self) -> Result<&mut T, EmptyError> {
                $ty::try_value_mut(self)
            }

            #[inline]
            unsafe fn value_unchecked(&self) -> &T {
                // SAFETY: upheld by the caller
                unsafe { $ty::value_unchecked(self) }
            }

            #[inline]
            fn value_or(&self, default: T) -> T
            where
                T: Clone,
            {
                match $ty::try_value(self) {
                    Ok(value) => value.clone(),
                    Err(_) => default,
                }
            }

            #[inline]
            fn reset(&mut self) {
                $ty::reset(self)
            }

            #[inline]
            fn take(&mut self) -> Self {
                $ty::take(self)
            }

            #[inline]
            fn into_option(self) -> Option<T> {
                $ty::into_option(self)
            }
        }
    };
}

impl_slot!(Inline);
impl_slot!(Managed);
