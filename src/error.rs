//! Error types for simdstat operations.
//!
//! Unchecked kernels never return these; they surface from buffer allocation
//! and from the checked kernel layer in [`crate::kernels::checked`].

use std::fmt;

/// Errors that can occur during simdstat operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdstatError {
    /// Memory allocation failed.
    AllocationError {
        /// The size that was requested to be allocated, in bytes.
        requested_size: usize,
        /// The alignment that was requested.
        requested_alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Invalid layout parameters were provided.
    LayoutError {
        /// The size parameter that caused the error.
        size: usize,
        /// The alignment parameter that caused the error.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A kernel precondition was violated (length mismatch, misaligned
    /// buffer, empty input, zero window).
    InvalidArgument {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimdstatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdstatError::AllocationError {
                requested_size,
                requested_alignment,
                message,
            } => write!(
                f,
                "Memory allocation failed: {} (requested {} bytes with {} byte alignment)",
                message, requested_size, requested_alignment
            ),
            SimdstatError::LayoutError {
                size,
                alignment,
                message,
            } => write!(
                f,
                "Invalid memory layout: {} (size: {}, alignment: {})",
                message, size, alignment
            ),
            SimdstatError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for SimdstatError {}

/// Result type alias for simdstat operations.
pub type Result<T> = std::result::Result<T, SimdstatError>;

/// Creates an allocation error.
pub fn allocation_error(size: usize, alignment: usize, message: impl Into<String>) -> SimdstatError {
    SimdstatError::AllocationError {
        requested_size: size,
        requested_alignment: alignment,
        message: message.into(),
    }
}

/// Creates a layout error.
pub fn layout_error(size: usize, alignment: usize, message: impl Into<String>) -> SimdstatError {
    SimdstatError::LayoutError {
        size,
        alignment,
        message: message.into(),
    }
}

/// Creates an invalid argument error.
pub fn invalid_argument(message: impl Into<String>) -> SimdstatError {
    SimdstatError::InvalidArgument {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_error_display() {
        let error = allocation_error(1024, 64, "out of memory");
        let display = format!("{}", error);
        assert!(display.contains("Memory allocation failed"));
        assert!(display.contains("1024 bytes"));
        assert!(display.contains("64 byte alignment"));
        assert!(display.contains("out of memory"));
    }

    #[test]
    fn test_layout_error_display() {
        let error = layout_error(usize::MAX, 64, "size overflows isize");
        let display = format!("{}", error);
        assert!(display.contains("Invalid memory layout"));
        assert!(display.contains("alignment: 64"));
        assert!(display.contains("size overflows isize"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = invalid_argument("window size must be non-zero");
        let display = format!("{}", error);
        assert!(display.contains("Invalid argument"));
        assert!(display.contains("window size must be non-zero"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = allocation_error(1024, 64, "test");
        let error2 = allocation_error(1024, 64, "test");
        let error3 = allocation_error(2048, 64, "test");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_argument("test error");

        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
