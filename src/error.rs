//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the crate.
///
/// Map lookups and removals never produce one of these; absence is
/// reported through `Option::None` or a `false` return.
#[derive(Error, Debug)]
pub enum Error {
    /// A `Values` cursor was advanced past its last element.
    #[error("iterator exhausted")]
    Exhausted,

    /// Initial capacity must be a non-zero power of two.
    #[error("invalid capacity {capacity}: must be a non-zero power of two")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// Load factor must be finite and in `(0, 1]`.
    #[error("invalid load factor {load_factor}: must be in (0, 1]")]
    InvalidLoadFactor {
        /// The rejected load factor
        load_factor: f64,
    },

    /// I/O failure while reading or writing a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A log line did not have the `<status> <timestamp>` shape.
    #[error("malformed log line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_render() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "I/O error: gone");
    }

    #[test]
    fn config_errors_render_offending_value() {
        let e = Error::InvalidCapacity { capacity: 12 };
        assert!(e.to_string().contains("12"));
        let e = Error::InvalidLoadFactor { load_factor: 1.5 };
        assert!(e.to_string().contains("1.5"));
    }
}
