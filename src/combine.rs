//! Combining several optionals at once.
//!
//! [`zip_all`] gathers the payloads of many optionals into one `Vec`, and
//! [`lift`] feeds such a gathered `Vec` into an ordinary function. Both
//! evaluate their inputs strictly left to right and consume every input,
//! even after an absent one has already decided the result.
//!
//! For a fixed number of optionals with mixed payload types, [`lift_tuple`]
//! and the `lift!` macro work over a tuple instead, and a function of the
//! wrong arity is a compile error.

use crate::error::{OptionalError, Result};
use crate::optional::Optional;

/// Collects the payloads of `optionals` in order.
///
/// Starts from `Present(vec![])` and folds each input in with `flat_map`,
/// so a single absent input makes the whole result absent. An empty input
/// gives `Present(vec![])`.
pub fn zip_all<T, I>(optionals: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    optionals
        .into_iter()
        .fold(Optional::present(Vec::new()), |acc, next| {
            acc.flat_map(|mut values| {
                next.map(|value| {
                    values.push(value);
                    values
                })
            })
        })
}

impl<T> FromIterator<Optional<T>> for Optional<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        zip_all(iter)
    }
}

/// A function that can be called with a runtime-sized argument list.
///
/// `Args` is a tuple marker naming the arity, so one closure type only ever
/// matches one implementation.
pub trait Lift<T, U, Args> {
    fn arity(&self) -> usize;

    /// Calls the function with `args`, failing with
    /// [`OptionalError::Arity`] when the count does not match.
    fn call_with(self, args: Vec<T>) -> Result<U>;
}

macro_rules! replace_ty {
    ($_arg:ident, $sub:ty) => {
        $sub
    };
}

macro_rules! impl_lift {
    ($n:expr; $($arg:ident),+) => {
        impl<F, T, U> Lift<T, U, ($(replace_ty!($arg, T),)+)> for F
        where
            F: FnOnce($(replace_ty!($arg, T)),+) -> U,
        {
            fn arity(&self) -> usize {
                $n
            }

            fn call_with(self, args: Vec<T>) -> Result<U> {
                let found = args.len();
                let [$($arg),+]: [T; $n] = args
                    .try_into()
                    .map_err(|_| OptionalError::Arity { expected: $n, found })?;
                Ok(self($($arg),+))
            }
        }
    };
}

impl_lift!(1; a);
impl_lift!(2; a, b);
impl_lift!(3; a, b, c);
impl_lift!(4; a, b, c, d);
impl_lift!(5; a, b, c, d, e);
impl_lift!(6; a, b, c, d, e, g);

/// Lifts `f` into the optional context.
///
/// The inputs are zipped with [`zip_all`] and the result is applied to `f`
/// through [`Optional::ap`]. Returns `Ok(Absent)` when any input is absent,
/// in which case `f` is never called and its arity is never checked.
/// Otherwise an arity mismatch surfaces as [`OptionalError::Arity`].
///
/// ```
/// use optional_value::{lift, present, absent};
///
/// fn volume(w: u32, h: u32, d: u32) -> u32 {
///     w * h * d
/// }
///
/// assert_eq!(lift(volume, [present(2), present(3), present(4)]), Ok(present(24)));
/// assert_eq!(lift(volume, [present(2), absent(), present(4)]), Ok(absent()));
/// assert!(lift(volume, [present(2), present(3)]).is_err());
/// ```
pub fn lift<T, U, Args, F, I>(f: F, optionals: I) -> Result<Optional<U>>
where
    F: Lift<T, U, Args>,
    I: IntoIterator<Item = Optional<T>>,
{
    zip_all(optionals)
        .ap(Optional::present(|args: Vec<T>| f.call_with(args)))
        .transpose()
}

/// Zips two or more optionals into `Optional<Vec<_>>`.
///
/// ```
/// use optional_value::{zip, present, absent, Optional};
///
/// assert_eq!(zip!(present(1), present(1)), present(vec![1, 1]));
/// assert_eq!(zip!(present(1), absent(), present(1)), Optional::absent());
/// ```
#[macro_export]
macro_rules! zip {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combine::zip_all([$first, $($rest),+])
    };
}

/// A function lifted over a fixed tuple of optionals.
///
/// `Args` is the tuple of optionals, e.g. `(Optional<String>, Optional<u32>)`
/// for a `FnOnce(String, u32) -> U`. The argument types may all differ.
pub trait LiftTuple<Args> {
    type Output;

    fn lift_tuple(self, args: Args) -> Optional<Self::Output>;
}

// Nests one flat_map per optional, left to right, ending in a flat tuple.
macro_rules! gather {
    (($($done:ident),*);) => {
        Optional::present(($($done,)*))
    };
    (($($done:ident),*); $next:ident $(, $rest:ident)*) => {
        $next.flat_map(|$next| gather!(($($done,)* $next); $($rest),*))
    };
}

macro_rules! impl_lift_tuple {
    ($($arg:ident: $ty:ident),+) => {
        impl<Fun, $($ty,)+ U> LiftTuple<($(Optional<$ty>,)+)> for Fun
        where
            Fun: FnOnce($($ty),+) -> U,
        {
            type Output = U;

            fn lift_tuple(self, args: ($(Optional<$ty>,)+)) -> Optional<U> {
                let ($($arg,)+) = args;
                gather!((); $($arg),+)
                    .ap(Optional::present(move |($($arg,)+): ($($ty,)+)| self($($arg),+)))
            }
        }
    };
}

impl_lift_tuple!(a: A);
impl_lift_tuple!(a: A, b: B);
impl_lift_tuple!(a: A, b: B, c: C);
impl_lift_tuple!(a: A, b: B, c: C, d: D);
impl_lift_tuple!(a: A, b: B, c: C, d: D, e: E);
impl_lift_tuple!(a: A, b: B, c: C, d: D, e: E, g: G);

/// Lifts `f` over a tuple of optionals whose payload types may differ.
///
/// Returns `Present(f(v1, .., vN))` when every optional is present and
/// `Absent` otherwise, in which case `f` is never called.
///
/// ```
/// use optional_value::{lift_tuple, present, absent, Optional};
///
/// let label = |name: &str, age: u32| format!("{} ({})", name, age);
/// assert_eq!(lift_tuple(label, (present("Ada"), present(36))), present("Ada (36)".to_string()));
/// assert_eq!(lift_tuple(label, (present("Ada"), absent())), Optional::absent());
/// ```
pub fn lift_tuple<Args, F>(f: F, args: Args) -> Optional<F::Output>
where
    F: LiftTuple<Args>,
{
    f.lift_tuple(args)
}

/// Variadic form of [`lift_tuple`](crate::combine::lift_tuple).
///
/// A function whose parameter count differs from the number of optionals
/// does not compile.
#[macro_export]
macro_rules! lift {
    ($f:expr, $($optional:expr),+ $(,)?) => {
        $crate::combine::lift_tuple($f, ($($optional,)+))
    };
}
