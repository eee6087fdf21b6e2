//! Truth coercion for predicate results.
//!
//! Closure-backed requirements accept any predicate whose return type
//! implements [`Truthy`]. The table below is the single coercion rule used
//! everywhere a predicate result is turned into "met" / "not met":
//!
//! | Type | Falsy when |
//! |------|------------|
//! | `bool` | `false` |
//! | integers | `0` |
//! | `f32` / `f64` | `0.0` (NaN is truthy) |
//! | `&str` / `String` | empty, or exactly `"0"` |
//! | `()` | always |
//! | `Option<T>` | `None`, or the inner value is falsy |
//! | `Result<T, E>` | `Err(_)`, or the inner value is falsy |
//! | collections | empty |
//!
//! Note that `"0.0"` and `"false"` are truthy strings.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Coerce a value into a boolean "met" result.
pub trait Truthy {
    /// Whether this value counts as a passing check.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty() && self != "0"
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// A failed evaluation counts as "not met" rather than propagating.
impl<T: Truthy, E> Truthy for Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_ok_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
