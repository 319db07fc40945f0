//! Error types for tricodec operations.
//!
//! Empty input is deliberately absent from this taxonomy: every codec maps a
//! zero-length input to a zero-sized result instead of failing.

use std::io;
use thiserror::Error;

/// The main error type shared by all tricodec codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A code table assigned an empty code to a symbol.
    #[error("Degenerate alphabet: symbol {symbol} has an empty code")]
    DegenerateAlphabet {
        /// The symbol whose code is empty.
        symbol: u8,
    },

    /// The arithmetic interval collapsed (`low >= high`).
    #[error("Interval collapsed at symbol {step}")]
    PrecisionOverflow {
        /// Zero-based index of the symbol being coded.
        step: usize,
    },

    /// A dictionary code exceeded the configured code width.
    #[error("Dictionary overflow: code {next_code} exceeds maximum {max_code}")]
    DictionaryOverflow {
        /// Code that could not be represented.
        next_code: u32,
        /// Largest representable code.
        max_code: u32,
    },

    /// An invalid code was encountered while decoding.
    #[error("Invalid code {code} at bit position {position}")]
    InvalidCode {
        /// The offending code.
        code: u32,
        /// Bit position where the code was read.
        position: u64,
    },

    /// Invalid bit width requested.
    #[error("Invalid bit width: {0}")]
    InvalidBitWidth(u8),

    /// The packed stream ended before decoding finished.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where data ran out.
        position: u64,
    },

    /// The model does not fit the packed stream it is paired with.
    #[error("Model mismatch: {message}")]
    ModelMismatch {
        /// Description of the mismatch.
        message: String,
    },
}

/// Result type alias for tricodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an invalid code error.
    pub fn invalid_code(code: u32, position: u64) -> Self {
        Self::InvalidCode { code, position }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// Create a model mismatch error.
    pub fn model_mismatch(message: impl Into<String>) -> Self {
        Self::ModelMismatch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::invalid_code(4097, 120);
        assert!(err.to_string().contains("4097"));

        let err = CodecError::DictionaryOverflow {
            next_code: 4096,
            max_code: 4095,
        };
        assert!(err.to_string().contains("Dictionary overflow"));

        let err = CodecError::model_mismatch("symbol count is zero");
        assert!(err.to_string().contains("symbol count"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CodecError = io_err.into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
