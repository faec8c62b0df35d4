//! Standard library type tables for `Destruct` generation.
//!
//! Every row is `(type path, generics, answer, reverse-eq)`. The expanded
//! `macro_rules!` call `impl_destruct!` / `impl_reverse_eq!`, both defined
//! at the expansion site.

use proc_macro2::TokenStream;
use quote::quote;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypeKind {
    Concrete,
    Generic(&'static str),
}

/// Destruct answer for a table row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Answer {
    Trivial,
    Managed,
    /// AND of the listed type parameters' answers.
    Inherit(&'static str),
}

use Answer::*;
use TypeKind::*;

type Row = (&'static str, TypeKind, Answer, bool);

/// Primitive and core types (always available).
pub const CORE_TYPES: &[Row] = &[
    ("()", Concrete, Trivial, true),
    ("bool", Concrete, Trivial, true),
    ("char", Concrete, Trivial, true),

    // Unsigned integers
    ("u8", Concrete, Trivial, true),
    ("u16", Concrete, Trivial, true),
    ("u32", Concrete, Trivial, true),
    ("u64", Concrete, Trivial, true),
    ("u128", Concrete, Trivial, true),
    ("usize", Concrete, Trivial, true),

    // Signed integers
    ("i8", Concrete, Trivial, true),
    ("i16", Concrete, Trivial, true),
    ("i32", Concrete, Trivial, true),
    ("i64", Concrete, Trivial, true),
    ("i128", Concrete, Trivial, true),
    ("isize", Concrete, Trivial, true),

    // Floats
    ("f32", Concrete, Trivial, true),
    ("f64", Concrete, Trivial, true),

    // NonZero
    ("core::num::NonZeroU8", Concrete, Trivial, true),
    ("core::num::NonZeroU16", Concrete, Trivial, true),
    ("core::num::NonZeroU32", Concrete, Trivial, true),
    ("core::num::NonZeroU64", Concrete, Trivial, true),
    ("core::num::NonZeroU128", Concrete, Trivial, true),
    ("core::num::NonZeroUsize", Concrete, Trivial, true),
    ("core::num::NonZeroI8", Concrete, Trivial, true),
    ("core::num::NonZeroI16", Concrete, Trivial, true),
    ("core::num::NonZeroI32", Concrete, Trivial, true),
    ("core::num::NonZeroI64", Concrete, Trivial, true),
    ("core::num::NonZeroI128", Concrete, Trivial, true),
    ("core::num::NonZeroIsize", Concrete, Trivial, true),

    // Arrays
    ("[T; N]", Generic("T, const N: usize"), Inherit("T"), true),

    // Pointers and references
    ("&T", Generic("T: ?Sized"), Trivial, false),
    ("&mut T", Generic("T: ?Sized"), Trivial, false),
    ("*const T", Generic("T: ?Sized"), Trivial, false),
    ("*mut T", Generic("T: ?Sized"), Trivial, false),

    // Option/Result
    ("Option<T>", Generic("T"), Inherit("T"), true),
    ("Result<T, E>", Generic("T, E"), Inherit("T, E"), true),

    // Cell types
    ("core::cell::Cell<T>", Generic("T"), Inherit("T"), false),
    ("core::cell::RefCell<T>", Generic("T"), Inherit("T"), false),
    ("core::cell::UnsafeCell<T>", Generic("T"), Inherit("T"), false),
    ("core::cell::OnceCell<T>", Generic("T"), Inherit("T"), false),

    // Memory types: never run the inner destructor
    ("core::mem::ManuallyDrop<T>", Generic("T"), Trivial, false),
    ("core::mem::MaybeUninit<T>", Generic("T"), Trivial, false),

    // Pin
    ("core::pin::Pin<T>", Generic("T"), Inherit("T"), false),

    // Marker types
    ("core::marker::PhantomData<T>", Generic("T: ?Sized"), Trivial, false),
    ("core::marker::PhantomPinned", Concrete, Trivial, true),

    // Range types
    ("core::ops::Range<T>", Generic("T"), Inherit("T"), true),
    ("core::ops::RangeFrom<T>", Generic("T"), Inherit("T"), true),
    ("core::ops::RangeTo<T>", Generic("T"), Inherit("T"), true),
    ("core::ops::RangeInclusive<T>", Generic("T"), Inherit("T"), true),
    ("core::ops::RangeToInclusive<T>", Generic("T"), Inherit("T"), true),
    ("core::ops::RangeFull", Concrete, Trivial, true),
    ("core::ops::Bound<T>", Generic("T"), Inherit("T"), true),

    // Ordering
    ("core::cmp::Ordering", Concrete, Trivial, true),
    ("core::cmp::Reverse<T>", Generic("T"), Inherit("T"), true),

    // Time
    ("core::time::Duration", Concrete, Trivial, true),

    // Numeric wrappers
    ("core::num::Wrapping<T>", Generic("T"), Inherit("T"), true),
    ("core::num::Saturating<T>", Generic("T"), Inherit("T"), true),

    // Async/Task
    ("core::task::Poll<T>", Generic("T"), Inherit("T"), true),
    ("core::task::Waker", Concrete, Managed, false),

    // Misc
    ("core::convert::Infallible", Concrete, Trivial, true),
    ("core::alloc::Layout", Concrete, Trivial, true),

    // Atomics
    ("core::sync::atomic::AtomicBool", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicI8", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicI16", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicI32", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicI64", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicIsize", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicU8", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicU16", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicU32", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicU64", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicUsize", Concrete, Trivial, false),
    ("core::sync::atomic::AtomicPtr<T>", Generic("T"), Trivial, false),
];

/// Alloc library types (requires "alloc" feature). All own heap memory.
pub const ALLOC_TYPES: &[Row] = &[
    // Strings
    ("alloc::string::String", Concrete, Managed, true),
    ("alloc::ffi::CString", Concrete, Managed, true),

    // Smart pointers
    ("alloc::boxed::Box<T>", Generic("T: ?Sized"), Managed, false),
    ("alloc::rc::Rc<T>", Generic("T: ?Sized"), Managed, false),
    ("alloc::sync::Arc<T>", Generic("T: ?Sized"), Managed, false),
    ("alloc::rc::Weak<T>", Generic("T: ?Sized"), Managed, false),
    ("alloc::sync::Weak<T>", Generic("T: ?Sized"), Managed, false),

    // Collections
    ("alloc::vec::Vec<T>", Generic("T"), Managed, true),
    ("alloc::collections::VecDeque<T>", Generic("T"), Managed, true),
    ("alloc::collections::LinkedList<T>", Generic("T"), Managed, true),
    ("alloc::collections::BinaryHeap<T>", Generic("T"), Managed, false),
    ("alloc::collections::BTreeMap<K, V>", Generic("K, V"), Managed, true),
    ("alloc::collections::BTreeSet<T>", Generic("T"), Managed, true),

    // Cow: managed even when the owned form is trivial (`Cow<'_, u8>`)
    ("alloc::borrow::Cow<'a, B>", Generic("'a, B: ?Sized + alloc::borrow::ToOwned + 'a"), Managed, true),
];

/// Standard library types (requires "std" feature).
pub const STD_TYPES: &[Row] = &[
    // std::path / std::ffi
    ("std::path::PathBuf", Concrete, Managed, true),
    ("std::ffi::OsString", Concrete, Managed, true),

    // std::fs / std::process / std::thread
    ("std::fs::File", Concrete, Managed, false),
    ("std::process::Command", Concrete, Managed, false),
    ("std::process::Child", Concrete, Managed, false),
    ("std::process::ExitStatus", Concrete, Trivial, true),
    ("std::thread::Thread", Concrete, Managed, false),
    ("std::thread::JoinHandle<T>", Generic("T"), Managed, false),

    // std::io
    ("std::io::Error", Concrete, Managed, false),
    ("std::io::ErrorKind", Concrete, Trivial, true),

    // std::net
    ("std::net::IpAddr", Concrete, Trivial, true),
    ("std::net::Ipv4Addr", Concrete, Trivial, true),
    ("std::net::Ipv6Addr", Concrete, Trivial, true),
    ("std::net::SocketAddr", Concrete, Trivial, true),
    ("std::net::SocketAddrV4", Concrete, Trivial, true),
    ("std::net::SocketAddrV6", Concrete, Trivial, true),

    // std::time
    ("std::time::Instant", Concrete, Trivial, true),
    ("std::time::SystemTime", Concrete, Trivial, true),

    // std::collections
    ("std::collections::HashMap<K, V, S>", Generic("K, V, S"), Managed, false),
    ("std::collections::HashSet<T, S>", Generic("T, S"), Managed, false),
    ("std::collections::hash_map::RandomState", Concrete, Trivial, false),

    // std::sync: lock primitives carry drop glue on some targets (pthread
    // backed), so they are managed everywhere
    ("std::sync::Mutex<T>", Generic("T: ?Sized"), Managed, false),
    ("std::sync::RwLock<T>", Generic("T: ?Sized"), Managed, false),
    ("std::sync::Condvar", Concrete, Managed, false),
    ("std::sync::Barrier", Concrete, Managed, false),
    ("std::sync::OnceLock<T>", Generic("T"), Managed, false),
];

/// Expand one row into `impl_destruct!` (and optionally `impl_reverse_eq!`) calls.
fn expand_row(row: &Row) -> TokenStream {
    let (path, kind, answer, eq) = *row;
    let ty: TokenStream = path
        .parse()
        .unwrap_or_else(|_| panic!("Failed to parse type: {}", path));

    let destruct = match (kind, answer) {
        (Concrete, Trivial) => quote! { impl_destruct!(trivial #ty); },
        (Concrete, Managed) => quote! { impl_destruct!(managed #ty); },
        (Concrete, Inherit(_)) => panic!("concrete type {} cannot inherit", path),
        (Generic(g), answer) => {
            let generics: TokenStream = g.parse().expect("Failed to parse generics");
            match answer {
                Trivial => quote! { impl_destruct!(@generic [#generics] trivial #ty); },
                Managed => quote! { impl_destruct!(@generic [#generics] managed #ty); },
                Inherit(params) => {
                    let params: TokenStream = params.parse().expect("Failed to parse params");
                    quote! { impl_destruct!(@generic [#generics] inherit [#params] #ty); }
                }
            }
        }
    };

    let reverse_eq = match (eq, kind) {
        (false, _) => quote! {},
        (true, Concrete) => quote! { impl_reverse_eq!(#ty); },
        (true, Generic(g)) => {
            let generics: TokenStream = g.parse().expect("Failed to parse generics");
            quote! { impl_reverse_eq!(@generic [#generics] #ty); }
        }
    };

    quote! { #destruct #reverse_eq }
}

fn expand_table(name: &str, doc: &str, prelude: TokenStream, rows: &[Row]) -> TokenStream {
    let name = quote::format_ident!("{}", name);
    let impls = rows.iter().map(expand_row);

    quote! {
        #[doc = #doc]
        macro_rules! #name {
            () => {
                #prelude
                #(#impls)*
            };
        }
    }
}

/// Generate the impl_core_types! macro for primitives and core types.
pub fn expand_impl_core_types_macro() -> TokenStream {
    expand_table(
        "impl_core_types",
        "Implement Destruct for all primitive and core types.",
        quote! {},
        CORE_TYPES,
    )
}

/// Generate the impl_alloc_types! macro for alloc types.
pub fn expand_impl_alloc_types_macro() -> TokenStream {
    expand_table(
        "impl_alloc_types",
        "Implement Destruct for alloc types (Vec, Box, String, etc).",
        quote! { extern crate alloc; },
        ALLOC_TYPES,
    )
}

/// Generate the impl_std_lib_types! macro for std types.
pub fn expand_impl_std_lib_types_macro() -> TokenStream {
    expand_table(
        "impl_std_lib_types",
        "Implement Destruct for std types (std::fs, std::net, etc).",
        quote! { extern crate std; },
        STD_TYPES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rows() -> impl Iterator<Item = &'static Row> {
        CORE_TYPES.iter().chain(ALLOC_TYPES).chain(STD_TYPES)
    }

    #[test]
    fn test_every_row_parses() {
        for row in all_rows() {
            let tokens = expand_row(row).to_string();
            assert!(tokens.contains("impl_destruct"), "row {} produced {}", row.0, tokens);
        }
    }

    #[test]
    fn test_inherit_rows_are_generic() {
        for (path, kind, answer, _) in all_rows() {
            if let Inherit(params) = answer {
                let Generic(g) = kind else {
                    panic!("{} inherits but is concrete", path);
                };
                for param in params.split(',').map(str::trim) {
                    assert!(g.contains(param), "{} inherits unknown param {}", path, param);
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_rows() {
        let mut seen = std::collections::HashSet::new();
        for (path, ..) in all_rows() {
            assert!(seen.insert(*path), "duplicate row {}", path);
        }
    }

    #[test]
    fn test_alloc_rows_are_managed() {
        assert!(ALLOC_TYPES.iter().all(|(_, _, answer, _)| *answer == Managed));
    }

    #[test]
    fn test_lock_rows_are_managed() {
        for path in ["std::sync::Mutex<T>", "std::sync::RwLock<T>", "std::sync::Condvar"] {
            let row = STD_TYPES.iter().find(|(p, ..)| *p == path);
            assert!(matches!(row, Some((_, _, Managed, _))), "{} must be managed", path);
        }
    }

    #[test]
    fn test_lifetime_generics_expand() {
        let row = ALLOC_TYPES.iter().find(|(p, ..)| p.starts_with("alloc::borrow::Cow"));
        let tokens = expand_row(row.expect("Cow row")).to_string();
        assert!(tokens.contains("'a"), "{}", tokens);
    }
}
