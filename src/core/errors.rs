use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum CreationError {
    TooFewEdges { requested: usize },
    NonFiniteRange { low: f64, high: f64 },
    LowGeHigh { low: f64, high: f64 },
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CreationError::TooFewEdges { requested } => {
                write!(f, "at least 2 bin edges are required, got {}", requested)
            }
            CreationError::NonFiniteRange { low, high } => {
                write!(f, "bin range ({}, {}) is not finite", low, high)
            }
            CreationError::LowGeHigh { low, high } => {
                write!(f, "bin range low {} must be below high {}", low, high)
            }
        }
    }
}

impl Error for CreationError {}

/// Shape of a counts buffer as `(rows, cols)`.
pub type Shape = (usize, usize);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FillError {
    InvalidArgument { context: &'static str, message: String },
    ShapeMismatch { expected: Shape, actual: Shape },
    EdgesMismatch,
}

impl FillError {
    pub(crate) fn wrong_arity(context: &'static str, actual: usize) -> FillError {
        FillError::InvalidArgument {
            context,
            message: format!("EffHistogram only accepts 2 input params, h_pass and h_total (got {})", actual),
        }
    }
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FillError::InvalidArgument { context, ref message } => write!(f, "{}: {}", context, message),
            FillError::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            FillError::EdgesMismatch => f.write_str("accumulators do not share the same bin edges"),
        }
    }
}

impl Error for FillError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SerializationError {
    NameTooLong(usize),
    ShapeExceedsU32 { rows: usize, cols: usize },
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SerializationError::NameTooLong(len) => write!(f, "accumulator name of {} bytes cannot be encoded", len),
            SerializationError::ShapeExceedsU32 { rows, cols } => {
                write!(f, "shape {}x{} does not fit the payload header", rows, cols)
            }
        }
    }
}

impl Error for SerializationError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeserializationError {
    CookieNotRecognized(u32),
    Truncated,
    InvalidName,
    UnknownValueKind(u8),
    PayloadSizeMismatch { expected: usize, actual: usize },
    DecompressionFailed,
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DeserializationError::CookieNotRecognized(cookie) => write!(f, "unrecognized payload cookie {:#x}", cookie),
            DeserializationError::Truncated => f.write_str("payload ended early"),
            DeserializationError::InvalidName => f.write_str("accumulator name is not valid UTF-8"),
            DeserializationError::UnknownValueKind(kind) => write!(f, "unknown value kind {}", kind),
            DeserializationError::PayloadSizeMismatch { expected, actual } => {
                write!(f, "payload holds {} values, header announces {}", actual, expected)
            }
            DeserializationError::DecompressionFailed => f.write_str("payload could not be inflated"),
        }
    }
}

impl Error for DeserializationError {}
