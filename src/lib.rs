use error_set::error_set;
use std::io::{Read, Write};

mod filter;
mod line;

pub use filter::{CancelMoved, HeaderMode, cancel_moved};
pub use line::{Change, ChangeKind, Line};

error_set! {
    /// Errors from driving a filter pass over an input/output stream.
    ///
    /// Filtering itself is total; only the surrounding I/O can fail.
    FilterError := {
        #[display("Failed to read input: {message}")]
        ReadFailed { message: String },
        #[display("Input is not valid UTF-8: {message}")]
        InvalidUtf8 { message: String },
        #[display("Failed to write output: {message}")]
        WriteFailed { message: String },
    }
}

/// Main interface for filtering moved-line pairs out of diff streams
pub struct MoveFilter {
    headers: HeaderMode,
}

impl MoveFilter {
    /// Create a filter with the given header handling
    pub fn new(headers: HeaderMode) -> Self {
        Self { headers }
    }

    /// Filter an in-memory diff, returning the surviving lines joined with
    /// `\n` (no trailing newline).
    ///
    /// # Examples
    /// ```
    /// use diff_unmove::{HeaderMode, MoveFilter};
    ///
    /// let filter = MoveFilter::new(HeaderMode::Keep);
    /// let output = filter.filter_str("--- f\n-x\n+x\n+++ f");
    /// assert_eq!(output, "--- f\n+++ f");
    /// ```
    pub fn filter_str(&self, input: &str) -> String {
        cancel_moved(input.lines(), self.headers)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Read `reader` to completion, filter, and write each surviving line
    /// newline-terminated to `writer`.
    ///
    /// # Examples
    /// ```no_run
    /// # use diff_unmove::{HeaderMode, MoveFilter};
    /// let stdin = std::io::stdin();
    /// let stdout = std::io::stdout();
    /// MoveFilter::new(HeaderMode::Keep)
    ///     .run(stdin.lock(), stdout.lock())
    ///     .unwrap();
    /// ```
    pub fn run(&self, mut reader: impl Read, mut writer: impl Write) -> Result<(), FilterError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| FilterError::ReadFailed {
                message: e.to_string(),
            })?;

        let input = String::from_utf8(bytes).map_err(|e| FilterError::InvalidUtf8 {
            message: e.to_string(),
        })?;

        for line in cancel_moved(input.lines(), self.headers) {
            writeln!(writer, "{line}").map_err(|e| FilterError::WriteFailed {
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}
