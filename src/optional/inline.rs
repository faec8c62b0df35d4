//! Trivial-value variant: usable in `const` contexts.
//!
//! `T` has no drop glue, so destroying the held value is a no-op and every
//! state change is a plain store. That keeps construction, copy, presence
//! queries, `value_or`, `set` and `reset` callable from `const fn`.

use core::fmt;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};
use core::ptr;

use crate::capability::{AssertTrivial, Destruct};
use crate::error::EmptyError;

/// Optional value for trivially destructible types.
///
/// Instantiating it for a type with drop glue is a compile-time error.
///
/// ```ignore
/// const ANSWER: Inline<u32> = Inline::new(42);
/// const NOTHING: Inline<u32> = Inline::none();
///
/// const _: () = assert!(ANSWER.has_value() && !NOTHING.has_value());
/// const _: () = assert!(NOTHING.value_or(7) == 7);
/// ```
pub struct Inline<T> {
    present: bool,
    slot: MaybeUninit<T>,
}

impl<T> Inline<T> {
    /// Empty container.
    #[inline]
    pub const fn none() -> Self {
        let () = AssertTrivial::<T>::OK;
        Self { present: false, slot: MaybeUninit::uninit() }
    }

    /// Container holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        let () = AssertTrivial::<T>::OK;
        Self { present: true, slot: MaybeUninit::new(value) }
    }

    #[inline]
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// Borrow the held value.
    ///
    /// # Panics
    /// If the container is empty (a compile error when evaluated in `const`).
    #[inline]
    #[track_caller]
    pub const fn value(&self) -> &T {
        if !self.present {
            panic!("accessed the value of an empty optional");
        }
        // SAFETY: present => slot is initialized
        unsafe { self.slot.assume_init_ref() }
    }

    /// Mutably borrow the held value.
    ///
    /// # Panics
    /// If the container is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.try_value_mut() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    pub const fn try_value(&self) -> Result<&T, EmptyError> {
        if self.present {
            // SAFETY: present => slot is initialized
            Ok(unsafe { self.slot.assume_init_ref() })
        } else {
            Err(EmptyError)
        }
    }

    #[inline]
    pub fn try_value_mut(&mut self) -> Result<&mut T, EmptyError> {
        if self.present {
            // SAFETY: present => slot is initialized
            Ok(unsafe { self.slot.assume_init_mut() })
        } else {
            Err(EmptyError)
        }
    }

    /// Borrow the held value without checking presence.
    ///
    /// # Safety
    /// The container must hold a value.
    #[inline]
    pub const unsafe fn value_unchecked(&self) -> &T {
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_ref() }
    }

    /// # Safety
    /// The container must hold a value.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.present, "{}", EmptyError::MESSAGE);
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_mut() }
    }

    /// A copy of the held value, or `default` when empty.
    ///
    /// Needs `T: Copy` to stay `const`, where [`Managed::value_or`] takes
    /// `T: Clone`. For trivial types that are only `Clone`, use
    /// [`Slot::value_or`].
    ///
    /// [`Managed::value_or`]: crate::Managed::value_or
    /// [`Slot::value_or`]: crate::Slot::value_or
    #[inline]
    pub const fn value_or(&self, default: T) -> T
    where
        T: Copy,
    {
        if self.present {
            // SAFETY: present => slot is initialized
            unsafe { *self.slot.assume_init_ref() }
        } else {
            default
        }
    }

    /// Replace the content with `value`; the container ends holding it.
    ///
    /// Only the trivial variant can be assigned from a bare value.
    #[inline]
    pub const fn set(&mut self, value: T) {
        self.reset();
        self.slot = MaybeUninit::new(value);
        self.present = true;
    }

    /// Destroy the held value, if any, and leave the container empty.
    #[inline]
    pub const fn reset(&mut self) {
        if self.present {
            self.present = false;
            self.destroy();
        }
    }

    /// Copy-assign from `other`.
    ///
    /// Needs `T: Copy` to stay `const`, where [`Managed::assign`] takes
    /// `T: Clone`; trivial types that are only `Clone` go through
    /// [`Clone::clone_from`]. There is no identity check: the source is
    /// copied out before the target is reset.
    ///
    /// [`Managed::assign`]: crate::Managed::assign
    #[inline]
    pub const fn assign(&mut self, other: &Self)
    where
        T: Copy,
    {
        let source = *other;
        self.reset();
        if source.present {
            self.slot = source.slot;
            self.present = true;
        }
    }

    /// Move-assign from `other`, leaving `other` empty.
    #[inline]
    pub fn take_from(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }
        *self = other.take();
    }

    /// Move the content into a new container, leaving `self` empty.
    #[inline]
    pub const fn take(&mut self) -> Self {
        // SAFETY: MaybeUninit<T> is valid for any bit pattern; the source
        // slot is dead once the flag is cleared
        let taken = Self { present: self.present, slot: unsafe { ptr::read(&self.slot) } };
        self.present = false;
        taken
    }

    /// Convert into a `core::option::Option`.
    #[inline]
    pub const fn into_option(self) -> Option<T> {
        if self.present {
            // SAFETY: present => slot is initialized
            Some(unsafe { self.slot.assume_init() })
        } else {
            None
        }
    }

    /// T has no drop glue: the slot is simply abandoned.
    #[inline(always)]
    const fn destroy(&mut self) {}
}

impl<T> Default for Inline<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Inline<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Inline<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }
}

impl<T: Clone> Clone for Inline<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.try_value() {
            Ok(value) => Self { present: true, slot: MaybeUninit::new(value.clone()) },
            Err(_) => Self { present: false, slot: MaybeUninit::uninit() },
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.reset();
        if let Ok(value) = source.try_value() {
            self.set(value.clone());
        }
    }
}

impl<T: Copy> Copy for Inline<T> {}

impl<T> Deref for Inline<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for Inline<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T: PartialEq> PartialEq for Inline<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.try_value(), other.try_value()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Inline<T> {}

impl<T: PartialEq> PartialEq<T> for Inline<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        matches!(self.try_value(), Ok(value) if value == other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Inline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_value() {
            Ok(value) => f.debug_tuple("Inline").field(value).finish(),
            Err(_) => f.write_str("Inline(<empty>)"),
        }
    }
}

impl<T: Destruct> Destruct for Inline<T> {
    type Trivial = T::Trivial;
}
