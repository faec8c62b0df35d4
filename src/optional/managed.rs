//! General-value variant: explicit in-place construction and destruction.
//!
//! The slot is a `MaybeUninit<T>` paired with a presence flag. Every path
//! that changes presence goes through [`Managed::install`] or
//! [`Managed::reset`], so a live value is never overwritten without being
//! dropped and never dropped twice.

use core::fmt;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};
use core::ptr;

use crate::capability::Destruct;
use crate::error::EmptyError;
use crate::primitives::Absent;

/// Optional value for types that need cleanup.
///
/// # Invariants
///
/// - `present == false`: `slot` holds no live `T`.
/// - `present == true`: `slot` holds exactly one live `T`, owned by `self`.
///
/// # Example
/// ```ignore
/// let mut a = Managed::new(String::from("hello"));
/// let b = a.clone();
/// a.reset();
/// assert!(!a.has_value());
/// assert_eq!(b, "hello");
/// ```
pub struct Managed<T> {
    present: bool,
    slot: MaybeUninit<T>,
}

impl<T> Managed<T> {
    /// Empty container.
    #[inline]
    pub const fn none() -> Self {
        Self { present: false, slot: MaybeUninit::uninit() }
    }

    /// Container holding `value` (move construction).
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { present: true, slot: MaybeUninit::new(value) }
    }

    /// Container holding a duplicate of `value` (copy construction).
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone())
    }

    #[inline]
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// Borrow the held value.
    ///
    /// # Panics
    /// If the container is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
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
    pub fn try_value(&self) -> Result<&T, EmptyError> {
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
    /// The container must hold a value. Calling this on an empty container
    /// is undefined behavior.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.present, "{}", EmptyError::MESSAGE);
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_ref() }
    }

    /// Mutably borrow the held value without checking presence.
    ///
    /// # Safety
    /// The container must hold a value.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.present, "{}", EmptyError::MESSAGE);
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_mut() }
    }

    /// A copy of the held value, or `default` when empty.
    #[inline]
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.try_value() {
            Ok(value) => value.clone(),
            Err(_) => default,
        }
    }

    /// Destroy the held value, if any, and leave the container empty.
    #[inline]
    pub fn reset(&mut self) {
        if self.present {
            // flag cleared before the destructor runs: a panicking drop
            // leaves an empty container behind
            self.present = false;
            // SAFETY: the slot was live and is now unreachable
            unsafe { self.destroy() };
        }
    }

    /// Copy-assign from `other`.
    ///
    /// Assigning a container to itself leaves it untouched.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        if ptr::eq(self, other) {
            return;
        }
        self.reset();
        if let Ok(value) = other.try_value() {
            self.install(value.clone());
        }
    }

    /// Move-assign from `other`: the old value is destroyed, `other`'s value
    /// is relocated into `self` and `other` ends empty.
    pub fn take_from(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }
        self.reset();
        if let Some(value) = other.take_value() {
            self.install(value);
        }
    }

    /// Relocate the held value into a new container, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        match self.take_value() {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }

    /// Convert into a `core::option::Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    /// Move the value out of the slot, clearing the flag.
    fn take_value(&mut self) -> Option<T> {
        if self.present {
            self.present = false;
            // SAFETY: present => initialized; the flag is cleared so the slot
            // is never read or dropped again
            Some(unsafe { self.slot.assume_init_read() })
        } else {
            None
        }
    }

    /// Placement-construct `value` into an empty slot.
    #[inline]
    fn install(&mut self, value: T) {
        debug_assert!(!self.present);
        self.slot.write(value);
        self.present = true;
    }

    /// Run T's destructor in place.
    ///
    /// # Safety
    /// The slot must hold a live value that nothing will read or drop again.
    #[inline]
    unsafe fn destroy(&mut self) {
        // SAFETY: upheld by the caller
        unsafe { ptr::drop_in_place(self.slot.as_mut_ptr()) }
    }
}

impl<T> Drop for Managed<T> {
    #[inline]
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Managed<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Managed<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Managed<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }
}

impl<T: Clone> Clone for Managed<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.try_value() {
            Ok(value) => Self::from_ref(value),
            Err(_) => Self::none(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> Deref for Managed<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for Managed<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T: PartialEq> PartialEq for Managed<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.try_value(), other.try_value()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Managed<T> {}

impl<T: PartialEq> PartialEq<T> for Managed<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        matches!(self.try_value(), Ok(value) if value == other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Managed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_value() {
            Ok(value) => f.debug_tuple("Managed").field(value).finish(),
            Err(_) => f.write_str("Managed(<empty>)"),
        }
    }
}

// Managed carries a Drop impl regardless of T.
impl<T> Destruct for Managed<T> {
    type Trivial = Absent;
}
