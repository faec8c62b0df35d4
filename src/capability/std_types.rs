//! `Destruct` answers for primitive, core, alloc and std types.
//!
//! The type tables live in the `macros` crate; each `define_*` call below
//! expands to a local `macro_rules!` that feeds every table row through
//! [`impl_destruct!`] and, for comparable types, [`impl_reverse_eq!`].

use super::Destruct;
use crate::optional::{Inline, Managed};
use crate::primitives::{Absent, Bool, Present};

/// Implement `Destruct` for one type.
///
/// - `trivial` / `managed` fix the answer.
/// - `inherit [A, B]` ANDs the answers of the listed parameters.
macro_rules! impl_destruct {
    (trivial $ty:ty) => {
        impl Destruct for $ty {
            type Trivial = Present;
        }
    };
    (managed $ty:ty) => {
        impl Destruct for $ty {
            type Trivial = Absent;
        }
    };
    (@generic [$($g:tt)*] trivial $ty:ty) => {
        impl<$($g)*> Destruct for $ty {
            type Trivial = Present;
        }
    };
    (@generic [$($g:tt)*] managed $ty:ty) => {
        impl<$($g)*> Destruct for $ty {
            type Trivial = Absent;
        }
    };
    (@generic [$($g:tt)*] inherit [$($p:ident),+] $ty:ty) => {
        impl<$($g)*> Destruct for $ty
        where
            $($p: Destruct,)+
        {
            type Trivial = impl_destruct!(@and $($p),+);
        }
    };
    (@and $last:ident) => {
        <$last as Destruct>::Trivial
    };
    (@and $first:ident, $($rest:ident),+) => {
        <<$first as Destruct>::Trivial as Bool>::And<impl_destruct!(@and $($rest),+)>
    };
}

/// Implement `T == Inline<T>` and `T == Managed<T>` (the container on the right).
macro_rules! impl_reverse_eq {
    (@generic [$($g:tt)*] $ty:ty) => {
        impl<$($g)*> PartialEq<Inline<$ty>> for $ty
        where
            $ty: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &Inline<$ty>) -> bool {
                other == self
            }
        }

        impl<$($g)*> PartialEq<Managed<$ty>> for $ty
        where
            $ty: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &Managed<$ty>) -> bool {
                other == self
            }
        }
    };
    ($ty:ty) => {
        impl_reverse_eq!(@generic [] $ty);
    };
}

/// Tuples are trivial iff every element is.
macro_rules! impl_tuples {
    ($($name:ident),+) => {
        impl<$($name: Destruct),+> Destruct for ($($name,)+) {
            type Trivial = impl_destruct!(@and $($name),+);
        }
    };
}

/// Function pointers never own anything.
///
/// Higher-ranked pointers such as `fn(&u8)` (`for<'a> fn(&'a u8)`) are
/// distinct types and are not covered.
macro_rules! impl_fn_pointers {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Destruct for fn($($arg),*) -> R {
            type Trivial = Present;
        }
        impl<R, $($arg),*> Destruct for unsafe fn($($arg),*) -> R {
            type Trivial = Present;
        }
        impl<R, $($arg),*> Destruct for extern "C" fn($($arg),*) -> R {
            type Trivial = Present;
        }
        impl<R, $($arg),*> Destruct for unsafe extern "C" fn($($arg),*) -> R {
            type Trivial = Present;
        }
    };
}

macros::define_impl_core_types_macro!();
impl_core_types!();

#[cfg(feature = "alloc")]
macros::define_impl_alloc_types_macro!();
#[cfg(feature = "alloc")]
impl_alloc_types!();

#[cfg(feature = "std")]
macros::define_impl_std_lib_types_macro!();
#[cfg(feature = "std")]
impl_std_lib_types!();

impl_tuples!(A);
impl_tuples!(A, B);
impl_tuples!(A, B, C);
impl_tuples!(A, B, C, D);
impl_tuples!(A, B, C, D, E);
impl_tuples!(A, B, C, D, E, F);
impl_tuples!(A, B, C, D, E, F, G);
impl_tuples!(A, B, C, D, E, F, G, H);
impl_tuples!(A, B, C, D, E, F, G, H, I);
impl_tuples!(A, B, C, D, E, F, G, H, I, J);
impl_tuples!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuples!(A, B, C, D, E, F, G, H, I, J, K, L);

impl_fn_pointers!();
impl_fn_pointers!(A);
impl_fn_pointers!(A, B);
impl_fn_pointers!(A, B, C);
impl_fn_pointers!(A, B, C, D);
impl_fn_pointers!(A, B, C, D, E);
impl_fn_pointers!(A, B, C, D, E, F);
