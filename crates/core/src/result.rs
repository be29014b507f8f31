//! The two-variant `Result` container and its Railway-Oriented combinators.
//!
//! A `Result<V, E>` is either `Ok(V)` or `Err(E)` for its whole lifetime.
//! Combinators take the receiver by value and move the payload through, so an
//! error that short-circuits a chain is the very same error that entered it.

use std::fmt;

use crate::error::{Error, UNWRAP_ON_ERR};

/// Either a success value or an error value.
///
/// Instead of signalling failure out of band, a fallible function returns
/// `Result<V, E>` where `V` is the "happy case" and `E` describes what went
/// wrong, typically an error type or a `String`.
///
/// # Examples
///
/// ```
/// use resultflow::{err, ok, Result};
///
/// fn divide(a: i32, b: i32) -> Result<i32, String> {
///     if b == 0 {
///         err("can't divide by zero".to_string())
///     } else {
///         ok(a / b)
///     }
/// }
///
/// let doubled = divide(10, 5).map(|q| q * 2);
/// assert_eq!(doubled, ok(4));
/// assert_eq!(divide(1, 0).to_string(), "Err(can't divide by zero)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<V, E> {
    /// Success case.
    Ok(V),
    /// Failure case.
    Err(E),
}

/// Wrap `value` in the `Ok` variant.
pub const fn ok<V, E>(value: V) -> Result<V, E> {
    Result::Ok(value)
}

/// Wrap `error` in the `Err` variant.
pub const fn err<V, E>(error: E) -> Result<V, E> {
    Result::Err(error)
}

impl<V, E> Result<V, E> {
    /// Wrap `value` in the `Ok` variant.
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Wrap `error` in the `Err` variant.
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// `true` if this is an `Ok` value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// `true` if this is an `Err` value.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the success value, `None` if this is an `Err`.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrow the error, `None` if this is an `Ok`.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Take the success value, discarding an error.
    #[must_use]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Take the error, discarding a success value.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Convert `&Result<V, E>` into `Result<&V, &E>`.
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`UNWRAP_ON_ERR`] if this is an `Err`. Use [`Self::expect`]
    /// for a recoverable failure carrying a message of your own.
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => {
                tracing::error!("{}", UNWRAP_ON_ERR);
                std::panic::panic_any(UNWRAP_ON_ERR)
            }
        }
    }

    /// Return the success value, or an [`Error::Expectation`] carrying
    /// `message` if this is an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Expectation`] whose message is exactly `message` when
    /// called on an `Err`.
    pub fn expect(self, message: impl Into<String>) -> std::result::Result<V, Error> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => {
                let error = Error::expectation(message);
                tracing::debug!(
                    expectation = error.message(),
                    "expectation failed on Err value"
                );
                Err(error)
            }
        }
    }

    /// Chain a fallible operation on the success value.
    ///
    /// On `Err` the function is not called and the error is passed through.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the success value, leaving an error untouched.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the error, leaving a success value untouched.
    pub fn map_err<F, O>(self, op: O) -> Result<V, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(op(error)),
        }
    }

    /// Map both sides in a single operation.
    pub fn bimap<U, F, OkFn, ErrFn>(self, ok_fn: OkFn, err_fn: ErrFn) -> Result<U, F>
    where
        OkFn: FnOnce(V) -> U,
        ErrFn: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(ok_fn(value)),
            Self::Err(error) => Result::Err(err_fn(error)),
        }
    }

    /// Run a side effect on the success value and hand the same result back.
    ///
    /// The side-effect-only form of [`Self::and_then`].
    pub fn tap<F: FnOnce(&V)>(self, f: F) -> Self {
        self.and_then(|value| {
            f(&value);
            Self::Ok(value)
        })
    }

    /// Run a side effect on the error and hand the same result back.
    pub fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Err(ref error) = self {
            f(error);
        }
        self
    }

    /// Convert into the standard library's `Result` so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns the payload of an `Err` as the standard `Err`.
    pub fn into_std(self) -> std::result::Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<V, E: fmt::Display> Result<V, E> {
    /// Take the success value, logging the error if present.
    #[must_use]
    pub fn into_value_logged(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(error) => {
                tracing::error!("Operation failed: {}", error);
                None
            }
        }
    }

    /// Get the value or a default, logging the error if present.
    pub fn or_default_logged(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                tracing::error!("Operation failed, using default: {}", error);
                default
            }
        }
    }
}

impl<V, E> From<std::result::Result<V, E>> for Result<V, E> {
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for std::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.into_std()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Result<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}
