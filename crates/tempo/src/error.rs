// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;

/// The result type for fallible operations that use the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur when working with durations, times and clocks.
///
/// Most operations in this crate are total. The exceptions are:
///
/// * Division-like operations on [`Duration`][crate::Duration] whose divisor is zero.
/// * Moving a `MockClock` backwards through `elapse`.
/// * Converting to types with a narrower range, such as [`SystemTime`][std::time::SystemTime].
///
/// Use [`Error::kind`] to tell these apart.
///
/// # Examples
///
/// ```
/// use tempo::{ErrorKind, Seconds};
///
/// let error = Seconds::new(10.0).slice(0.0).unwrap_err();
/// assert!(matches!(error.kind(), ErrorKind::DivisionByZero));
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

/// The kind of an [`Error`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The divisor of a division-like operation is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A clock was asked to elapse a negative duration.
    #[error("clock cannot go backwards")]
    InvalidDirection,

    /// A value does not fit into the target representation.
    #[error("{0}")]
    OutOfRange(Cow<'static, str>),
}

impl Error {
    pub(crate) const fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub(crate) const fn division_by_zero() -> Self {
        Self::from_kind(ErrorKind::DivisionByZero)
    }

    pub(crate) const fn invalid_direction() -> Self {
        Self::from_kind(ErrorKind::InvalidDirection)
    }

    pub(crate) fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_kind(ErrorKind::OutOfRange(message.into()))
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.0
    }
}
