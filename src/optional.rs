//! # Optional Module
//!
//! The `Optional<T>` container: a value that is either present or absent.
//!
//! Every operation consumes or borrows the container and returns a new one,
//! so a value is never mutated in place. Work chained with [`Optional::map`]
//! and [`Optional::flat_map`] stops at the first absent value without any
//! explicit branching at the call site.
//!
//! ## Example
//!
//! ```
//! use optional_value::{from_nullable, Optional};
//!
//! let port = from_nullable(Some("8080"))
//!     .flat_map(|text| Optional::from_nullable(text.parse::<u16>().ok()))
//!     .map(|port| port + 1)
//!     .get_or_else(|| 80);
//! assert_eq!(port, 8081);
//!
//! assert_eq!(Optional::<u16>::absent().to_string(), "Nothing");
//! assert_eq!(Optional::present(1).to_string(), "Just(1)");
//! ```

use std::fmt;

use crate::error::{OptionalError, Result};

/// A value that may be missing.
///
/// `Absent` is declared first, so it orders before every `Present` value.
/// Two absent values always compare equal, and two present values compare
/// equal exactly when their payloads do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// Holds nothing. Displayed as `Nothing`.
    Absent,
    /// Holds a value. Displayed as `Just(value)`.
    Present(T),
}

use Optional::{Absent, Present};

impl<T> Optional<T> {
    /// The canonical absent value, fixed at compile time.
    pub const ABSENT: Self = Absent;

    /// Wraps `value` without inspecting it.
    ///
    /// Wrapping an `Optional` yields a nested `Optional`; nothing is
    /// flattened implicitly. Use [`Optional::flatten`] for that.
    pub const fn present(value: T) -> Self {
        Present(value)
    }

    pub const fn absent() -> Self {
        Self::ABSENT
    }

    /// Bridges an ambient `Option` into the closed `Optional` type.
    ///
    /// Only `None` maps to `Absent`. Falsy-looking payloads such as `0`,
    /// `""` or an empty `Vec` stay present.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload, producing an `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Extracts the payload.
    ///
    /// Fails with [`OptionalError::EmptyValue`] on an absent value. That is a
    /// logic error on the caller's side; check [`Optional::is_present`] first
    /// or use [`Optional::get_or_else`].
    pub fn get(self) -> Result<T> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(OptionalError::EmptyValue),
        }
    }

    /// Returns the payload, or the result of `supplier` when absent.
    ///
    /// `supplier` is only called for an absent value.
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Absent => supplier(),
        }
    }

    pub fn get_or(self, default: T) -> T {
        self.get_or_else(|| default)
    }

    pub fn ok_or<E>(self, err: E) -> std::result::Result<T, E> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(err),
        }
    }

    /// Chains a computation that itself may produce nothing.
    ///
    /// On an absent value `f` is never called. Otherwise the result of
    /// `f(value)` is returned as is. `f` has to return an `Optional`; a bare
    /// value is rejected at compile time:
    ///
    /// ```compile_fail
    /// use optional_value::Optional;
    ///
    /// let _ = Optional::present(1).flat_map(|x| x + 1);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Optional::ABSENT,
        }
    }

    /// Alias of [`Optional::flat_map`].
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.flat_map(f)
    }

    /// Transforms the payload, keeping the container shape.
    ///
    /// Defined as `flat_map` followed by `present`. A panic inside `f`
    /// reaches the caller untouched.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Optional::present(f(value)))
    }

    /// Applies a wrapped function to the wrapped value.
    ///
    /// An absent receiver yields `Absent` without looking at `wrapped`.
    /// A present receiver yields `Absent` when `wrapped` is absent and
    /// `Present(f(value))` otherwise.
    pub fn ap<U, F>(self, wrapped: Optional<F>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => wrapped.map(|f| f(value)),
            Absent => Optional::ABSENT,
        }
    }

    /// Keeps the payload only when `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| if predicate(&value) { Present(value) } else { Absent })
    }

    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }

    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Present(value) => Present(value),
            Absent => supplier(),
        }
    }

    /// Pairs two optionals of possibly different types.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.flat_map(|left| other.map(|right| (left, right)))
    }

    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(left, right)| f(left, right))
    }

    /// Calls `f` with a reference to the payload and returns `self` unchanged.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Present(value) = &self {
            f(value);
        }
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref() }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T, E> Optional<std::result::Result<T, E>> {
    /// Turns `Optional<Result<T, E>>` into `Result<Optional<T>, E>`.
    pub fn transpose(self) -> std::result::Result<Optional<T>, E> {
        match self {
            Present(Ok(value)) => Ok(Present(value)),
            Present(Err(err)) => Err(err),
            Absent => Ok(Absent),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Just({})", value),
            Absent => f.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

/// Iterator over the zero or one items of an [`Optional`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Optional<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        std::mem::take(&mut self.inner).into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_present());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

/// Borrowing iterator over the zero or one items of an [`Optional`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Optional<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        std::mem::take(&mut self.inner).into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_present());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub fn present<T>(value: T) -> Optional<T> {
    Optional::present(value)
}

pub fn absent<T>() -> Optional<T> {
    Optional::absent()
}

pub fn from_nullable<T>(value: Option<T>) -> Optional<T> {
    Optional::from_nullable(value)
}
