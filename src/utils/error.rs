use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid input")]
    InvalidInput { input: String },

    #[error("Input value out of range.")]
    OutOfRange { input: String, reason: String },

    #[error("Invalid input. The minimum length of a binary input should be 3.")]
    BinaryTooShort { length: usize },

    #[error("Value {value} does not fit in {width} bits")]
    Overflow { value: i64, width: usize },

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    OutOfRange,
    Overflow,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad user input; fixable by retyping the value.
    High,
    /// A fault in the converter itself.
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidInput { .. } => ErrorCategory::InvalidInput,
            ConvertError::OutOfRange { .. } | ConvertError::BinaryTooShort { .. } => {
                ErrorCategory::OutOfRange
            }
            ConvertError::Overflow { .. } => ErrorCategory::Overflow,
            ConvertError::Pattern(_) | ConvertError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::InvalidInput | ErrorCategory::OutOfRange => ErrorSeverity::High,
            ErrorCategory::Overflow | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// The single diagnostic line shown on stderr.
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InvalidInput { input } => format!(
                "'{}' is not a numeral; use 10, -256, b10111 or 0xF7",
                input
            ),
            ConvertError::OutOfRange { reason, .. } => reason.clone(),
            ConvertError::BinaryTooShort { length } => format!(
                "Binary input has {} characters; write 'b', the sign bit and at least one more bit",
                length
            ),
            ConvertError::Overflow { .. } => {
                "Width inference produced a width too small for the value".to_string()
            }
            ConvertError::Pattern(_) | ConvertError::Serialization(_) => {
                "Internal error; rerun with --verbose and report it".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
