//! Domain-level error type used by the rules core.
//!
//! Rule violations raised by player commands are not errors in this sense:
//! they are reported back to the issuer as `RuleViolation` codes. `DomainError`
//! covers failures to construct or interpret domain values (card tokens,
//! game setup, broken invariants). Services convert it into `AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for domain input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    PlayerCount,
    DuplicatePlayer,
    InvalidSettings,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input could not be turned into a valid domain value
    Validation(ValidationKind, String),
    /// Internal state no longer satisfies a game invariant
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
