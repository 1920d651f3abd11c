#[allow(missing_docs)]
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Error returned by a geometric construction or operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// Operand is not acceptable, such as a non-finite coordinate or scalar.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the offending argument.
        reason: String,
    },
    /// Attempt to construct a point with zero coordinates.
    #[error("cannot construct a point from an empty list of coordinates")]
    EmptyPoint,
    /// Operands have different numbers of dimensions.
    #[error("dimension mismatch: expected {expected}D, got {got}D")]
    DimensionMismatch {
        /// Number of dimensions of the receiver.
        expected: usize,
        /// Number of dimensions of the operand.
        got: usize,
    },
    /// Operation is not defined for this type.
    #[error("{op} is not supported for {ty}")]
    UnsupportedOperation {
        /// Name of the operation.
        op: &'static str,
        /// Name of the type.
        ty: &'static str,
    },
    /// Construction parameter is outside the valid geometric domain.
    #[error("domain error: {reason}")]
    DomainError {
        /// Description of the offending parameter.
        reason: String,
    },
}

/// Kind of [`GeometryError`], without any details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorKind {
    InvalidArgument,
    EmptyPoint,
    DimensionMismatch,
    UnsupportedOperation,
    DomainError,
}

impl GeometryError {
    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::EmptyPoint => ErrorKind::EmptyPoint,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::DomainError { .. } => ErrorKind::DomainError,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(op: &'static str, ty: &'static str) -> Self {
        Self::UnsupportedOperation { op, ty }
    }

    /// Returns an error if `got` differs from `expected`.
    pub(crate) fn check_ndim(expected: usize, got: usize) -> Result<()> {
        match expected == got {
            true => Ok(()),
            false => Err(Self::DimensionMismatch { expected, got }),
        }
    }

    /// Returns an error if `x` is not a finite real number.
    pub(crate) fn check_finite(x: f64, what: &str) -> Result<()> {
        match x.is_finite() {
            true => Ok(()),
            false => Err(Self::invalid_argument(format!(
                "{what} must be a finite real number, got {x}"
            ))),
        }
    }
}
