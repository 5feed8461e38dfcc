//! Type-erased optionals with runtime contract checks.
//!
//! [`Optional`] rejects a `flat_map` function that returns a bare value, or an
//! `ap` argument that is not a wrapped function, at compile time. Once payloads
//! are erased to [`AnyValue`], for example when they come from a scripting
//! bridge, those shapes can only be checked at run time. [`DynOptional`]
//! performs exactly those checks and reports
//! [`OptionalError::ContractViolation`].

use std::any::{type_name, Any};
use std::fmt;

use crate::error::{OptionalError, Result};
use crate::optional::Optional;

pub type AnyValue = Box<dyn Any + Send + Sync>;

/// The only callable shape accepted by [`DynOptional::ap`].
pub type DynFn = Box<dyn FnOnce(AnyValue) -> AnyValue + Send + Sync>;

#[derive(Debug)]
pub struct DynOptional(Optional<AnyValue>);

impl DynOptional {
    pub fn present<T: Any + Send + Sync>(value: T) -> Self {
        DynOptional(Optional::present(Box::new(value)))
    }

    /// Wraps an already boxed payload without boxing it again.
    pub fn from_boxed(value: AnyValue) -> Self {
        DynOptional(Optional::present(value))
    }

    pub fn absent() -> Self {
        DynOptional(Optional::ABSENT)
    }

    /// Wraps `f` as a [`DynFn`], ready to be passed to [`DynOptional::ap`].
    pub fn function<F>(f: F) -> Self
    where
        F: FnOnce(AnyValue) -> AnyValue + Send + Sync + 'static,
    {
        let f: DynFn = Box::new(f);
        Self::present(f)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_present()
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_absent()
    }

    /// Erases this optional itself, e.g. to return it from a `flat_map` step.
    pub fn into_any(self) -> AnyValue {
        Box::new(self)
    }

    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(AnyValue) -> AnyValue,
    {
        DynOptional(self.0.map(f))
    }

    /// Like [`Optional::flat_map`], but `f`'s result is checked to be a
    /// `DynOptional` before it is returned.
    pub fn flat_map<F>(self, f: F) -> Result<Self>
    where
        F: FnOnce(AnyValue) -> AnyValue,
    {
        self.0
            .map(|value| expect_optional(f(value), "flat_map"))
            .transpose()
            .map(|nested| nested.get_or_else(DynOptional::absent))
    }

    /// Like [`Optional::ap`]. `wrapped` must be an erased `DynOptional`
    /// holding a [`DynFn`]; it is not inspected at all when `self` is absent.
    pub fn ap(self, wrapped: AnyValue) -> Result<Self> {
        let value = match self.0 {
            Optional::Present(value) => value,
            Optional::Absent => return Ok(Self::absent()),
        };

        let f = match expect_optional(wrapped, "ap")?.0 {
            Optional::Present(f) => f,
            Optional::Absent => return Ok(Self::absent()),
        };
        let f = f
            .downcast::<DynFn>()
            .map_err(|_| OptionalError::ContractViolation {
                operation: "ap",
                expected: "an optional wrapping a one-argument function",
                found: "an optional wrapping a non-callable value",
            })?;

        Ok(DynOptional(Optional::present(value).ap(Optional::present(*f))))
    }

    /// Recovers a typed [`Optional`], failing when the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<Optional<T>> {
        self.0
            .map(|value| {
                value
                    .downcast::<T>()
                    .map(|value| *value)
                    .map_err(|_| OptionalError::ContractViolation {
                        operation: "downcast",
                        expected: type_name::<T>(),
                        found: "a value of another type",
                    })
            })
            .transpose()
    }
}

impl Default for DynOptional {
    fn default() -> Self {
        Self::absent()
    }
}

impl fmt::Display for DynOptional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Optional::Present(_) => f.write_str("Just(<opaque>)"),
            Optional::Absent => f.write_str("Nothing"),
        }
    }
}

fn expect_optional(value: AnyValue, operation: &'static str) -> Result<DynOptional> {
    value
        .downcast::<DynOptional>()
        .map(|optional| *optional)
        .map_err(|_| OptionalError::ContractViolation {
            operation,
            expected: "an optional",
            found: "a bare value",
        })
}
