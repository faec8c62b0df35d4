//! Tests for Managed<T>: explicit construction and destruction.
//!
//! `assign`, `take_from` and `clone_from` skip work when both sides are the
//! same container. Safe code cannot alias `&mut self` with the argument, so
//! that branch is unreachable here; the tests below cover assignment from a
//! clone of the target instead.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use inplace_optional::{Destruct, EmptyError, Managed};

// =============================================================================
// Drop tracking
// =============================================================================

/// Records every drop into a shared log.
#[derive(Debug, Destruct)]
#[destruct(managed)]
struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Tracked {
    fn new(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Self {
        Self { id, log: Rc::clone(log) }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        // Clones get id + 100 so their drops are distinguishable.
        Self { id: self.id + 100, log: Rc::clone(&self.log) }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn new_log() -> Rc<RefCell<Vec<u32>>> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Counts its drop, then panics.
#[derive(Destruct)]
#[destruct(managed)]
struct Exploding {
    drops: Rc<Cell<u32>>,
}

impl Drop for Exploding {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
        panic!("exploding drop");
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_default_is_empty() {
    let a: Managed<String> = Managed::none();
    assert!(!a.has_value());
    assert!(!Managed::<String>::default().has_value());
    assert_eq!(a.try_value(), Err(EmptyError));
}

#[test]
fn test_value_construction() {
    let a = Managed::new(String::from("hello"));
    assert!(a.has_value());
    assert_eq!(a.value(), "hello");
    assert_eq!(&*a, "hello");

    let source = String::from("copied");
    let b = Managed::from_ref(&source);
    assert_eq!(b.value(), &source);

    let c: Managed<String> = String::from("from").into();
    assert_eq!(c.value(), "from");

    let d: Managed<String> = None.into();
    assert!(!d.has_value());
}

#[test]
fn test_copy_survives_original() {
    let original = Managed::new(String::from("hello"));
    let copy = original.clone();
    drop(original);
    assert_eq!(copy.value(), "hello");
}

#[test]
fn test_clone_of_empty_is_empty() {
    let a: Managed<String> = Managed::none();
    assert!(!a.clone().has_value());
}

#[test]
fn test_take_relocates() {
    let log = new_log();
    let mut a = Managed::new(Tracked::new(1, &log));
    let b = a.take();

    assert!(!a.has_value());
    assert_eq!(b.value().id, 1);
    assert!(log.borrow().is_empty());

    drop(a);
    assert!(log.borrow().is_empty());
    drop(b);
    assert_eq!(*log.borrow(), vec![1]);
}

// =============================================================================
// Destruction
// =============================================================================

#[test]
fn test_drop_runs_once() {
    let log = new_log();
    {
        let _a = Managed::new(Tracked::new(1, &log));
        let _empty: Managed<Tracked> = Managed::none();
    }
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn test_reset_is_idempotent() {
    let log = new_log();
    let mut a = Managed::new(Tracked::new(7, &log));

    a.reset();
    assert!(!a.has_value());
    assert_eq!(*log.borrow(), vec![7]);

    a.reset();
    assert!(!a.has_value());
    drop(a);
    assert_eq!(*log.borrow(), vec![7]);
}

#[test]
fn test_into_option_moves_value_out() {
    let log = new_log();
    let a = Managed::new(Tracked::new(3, &log));
    let inner = a.into_option();
    assert!(log.borrow().is_empty());
    assert_eq!(inner.as_ref().map(|t| t.id), Some(3));
    drop(inner);
    assert_eq!(*log.borrow(), vec![3]);

    assert!(Managed::<String>::none().into_option().is_none());
}

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn test_assign_destroys_old_before_copy() {
    let log = new_log();
    let mut target = Managed::new(Tracked::new(1, &log));
    let source = Managed::new(Tracked::new(2, &log));

    target.assign(&source);
    assert_eq!(*log.borrow(), vec![1]);
    assert_eq!(target.value().id, 102);
    assert_eq!(source.value().id, 2);
}

#[test]
fn test_assign_from_empty_clears() {
    let log = new_log();
    let mut target = Managed::new(Tracked::new(1, &log));
    target.assign(&Managed::none());

    assert!(!target.has_value());
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn test_assign_onto_empty() {
    let mut target: Managed<String> = Managed::none();
    target.assign(&Managed::new(String::from("x")));
    assert_eq!(target.value(), "x");
}

#[test]
fn test_clone_from_matches_assign() {
    let mut target = Managed::new(String::from("old"));
    let source = Managed::new(String::from("new"));
    target.clone_from(&source);
    assert_eq!(target, source);
}

#[test]
fn test_assign_from_own_clone_replaces_value() {
    let log = new_log();
    let mut a = Managed::new(Tracked::new(5, &log));

    a = a.clone();
    assert_eq!(a.value().id, 105);
    assert_eq!(*log.borrow(), vec![5]);

    let snapshot = a.clone();
    a.clone_from(&snapshot);
    assert_eq!(a.value().id, 305);
    assert_eq!(*log.borrow(), vec![5, 105]);

    let mut empty: Managed<Tracked> = Managed::none();
    empty = empty.clone();
    assert!(!empty.has_value());
}

#[test]
fn test_panicking_drop_leaves_empty_container() {
    let drops = Rc::new(Cell::new(0));
    let mut slot = Managed::new(Exploding { drops: Rc::clone(&drops) });

    let result = panic::catch_unwind(AssertUnwindSafe(|| slot.reset()));
    assert!(result.is_err());
    assert!(!slot.has_value());
    assert_eq!(drops.get(), 1);

    slot.reset();
    drop(slot);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_take_from_relocates() {
    let log = new_log();
    let mut target = Managed::new(Tracked::new(1, &log));
    let mut source = Managed::new(Tracked::new(2, &log));

    target.take_from(&mut source);
    assert_eq!(*log.borrow(), vec![1]);
    assert_eq!(target.value().id, 2);
    assert!(!source.has_value());

    target.take_from(&mut source);
    assert!(!target.has_value());
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn test_copies_are_independent() {
    let mut a = Managed::new(vec![1, 2, 3]);
    let mut b = a.clone();

    a.value_mut().push(4);
    assert_eq!(b.value(), &vec![1, 2, 3]);

    b.value_mut().clear();
    assert_eq!(a.value(), &vec![1, 2, 3, 4]);
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn test_value_or() {
    let a = Managed::new(String::from("held"));
    let b: Managed<String> = Managed::none();
    assert_eq!(a.value_or(String::from("default")), "held");
    assert_eq!(b.value_or(String::from("default")), "default");
}

#[test]
fn test_try_value_mut() {
    let mut a = Managed::new(String::from("a"));
    a.try_value_mut().unwrap().push('b');
    assert_eq!(a.value(), "ab");

    let mut empty: Managed<String> = Managed::none();
    assert_eq!(empty.try_value_mut(), Err(EmptyError));
}

#[test]
fn test_unchecked_access() {
    let mut a = Managed::new(10u64);
    unsafe {
        *a.value_unchecked_mut() += 1;
        assert_eq!(*a.value_unchecked(), 11);
    }
}

#[test]
#[should_panic(expected = "accessed the value of an empty optional")]
fn test_deref_empty_panics() {
    let a: Managed<String> = Managed::none();
    let _ = a.len();
}

#[test]
fn test_error_display() {
    assert_eq!(EmptyError.to_string(), "accessed the value of an empty optional");
}

// =============================================================================
// Equality & formatting
// =============================================================================

#[test]
fn test_equality() {
    let empty: Managed<String> = Managed::none();
    let hello = Managed::new(String::from("hello"));
    let world = Managed::new(String::from("world"));

    assert_eq!(empty, Managed::none());
    assert_ne!(empty, hello);
    assert_ne!(hello, empty);
    assert_eq!(hello, hello.clone());
    assert_ne!(hello, world);

    assert!(hello == String::from("hello"));
    assert!(String::from("hello") == hello);
    assert!(empty != String::from("hello"));
    assert!(String::from("hello") != empty);
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Managed::new(String::from("x"))), "Managed(\"x\")");
    assert_eq!(format!("{:?}", Managed::<String>::none()), "Managed(<empty>)");
}
