use std::fmt;

/// Errors returned by the codecs.
///
/// All of these are recoverable: the input was rejected and nothing was
/// written anywhere. Retrying with the same input gives the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerdeError {
    /// A marshaled element did not have the exact length of its type.
    LengthMismatch { expected: usize, actual: usize },
    /// An integer needs more words than a scalar can hold.
    EncodingOverflow { words_needed: usize, max_words: usize },
    /// A floating point digit is not an integer a double represents exactly.
    DigitOutOfRange { index: usize },
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerdeError::LengthMismatch { expected, actual } => write!(
                f,
                "Wrong length of marshaled element: expected {} bytes but got {}",
                expected, actual
            ),
            SerdeError::EncodingOverflow {
                words_needed,
                max_words,
            } => write!(
                f,
                "Integer needs {} words, cannot be converted to a scalar of {} words",
                words_needed, max_words
            ),
            SerdeError::DigitOutOfRange { index } => write!(
                f,
                "Digit {} is not an exactly representable integer",
                index
            ),
        }
    }
}

impl std::error::Error for SerdeError {}

pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), SerdeError> {
    if bytes.len() != expected {
        return Err(SerdeError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
