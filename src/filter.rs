//! Move-pair cancellation over a diff line stream.
//!
//! A moved line shows up in a unified diff as a removal in one place and an
//! identical addition in another. [`cancel_moved`] walks the stream once,
//! holding unmatched `+`/`-` lines in a pending buffer scoped to the current
//! `---`/`+++` block; when a line's inverse arrives, both disappear from the
//! output.
//!
//! # Matching
//!
//! - Content is compared trimmed of surrounding whitespace.
//! - The buffer is searched newest-first, so the most recent unmatched
//!   opposite line cancels first (a moved line tends to sit next to its
//!   reinsertion point).
//! - Header lines flush the buffer in arrival order and reset matching;
//!   pairs never cancel across blocks.
//! - Lines that carry no payload past their first character are dropped.
//!
//! # Examples
//!
//! ```
//! use diff_unmove::{HeaderMode, cancel_moved};
//!
//! let lines = ["--- a/f", "-moved", "+kept", "+moved", "+++ b/f"];
//! let output: Vec<String> = cancel_moved(lines, HeaderMode::Keep).collect();
//! assert_eq!(output, vec!["--- a/f", "+kept", "+++ b/f"]);
//! ```

use crate::line::{Change, Line};
use std::collections::VecDeque;

/// Whether `---`/`+++` header lines are re-emitted or suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Re-emit header lines (they still flush the pending buffer)
    #[default]
    Keep,
    /// Suppress header lines entirely
    Strip,
}

/// Build a lazy move-pair cancelling iterator over `lines`.
///
/// Output lines come trimmed of trailing whitespace; change lines come as
/// marker plus fully trimmed content. The iterator is restartable only by
/// building a new one over fresh input.
pub fn cancel_moved<I>(lines: I, headers: HeaderMode) -> CancelMoved<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    CancelMoved {
        input: lines.into_iter(),
        headers,
        pending: Vec::new(),
        ready: VecDeque::new(),
        exhausted: false,
    }
}

/// Iterator returned by [`cancel_moved`].
///
/// `pending` holds unmatched changes for the current block; `ready` holds
/// lines already cleared for emission. Buffered changes surface when a header
/// arrives or input ends, so a change separated from its block boundary by
/// context lines is emitted after those context lines.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct CancelMoved<I> {
    input: I,
    headers: HeaderMode,
    pending: Vec<Change>,
    ready: VecDeque<String>,
    exhausted: bool,
}

impl<I> CancelMoved<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn consume(&mut self, raw: &str) {
        match Line::classify(raw) {
            Line::Blank => {}
            Line::Header(header) => {
                self.flush_pending();
                if self.headers == HeaderMode::Keep {
                    self.ready.push_back(header);
                }
            }
            Line::Change(change) => {
                // Newest-first search: rposition finds the most recently
                // buffered inverse
                match self
                    .pending
                    .iter()
                    .rposition(|buffered| buffered.is_inverse_of(&change))
                {
                    Some(index) => {
                        self.pending.remove(index);
                    }
                    None => self.pending.push(change),
                }
            }
            Line::Context(text) => self.ready.push_back(text),
        }
    }

    /// Emit all buffered changes in arrival order and clear the buffer
    fn flush_pending(&mut self) {
        for change in self.pending.drain(..) {
            self.ready.push_back(change.to_string());
        }
    }
}

impl<I> Iterator for CancelMoved<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Some(line);
            }
            if self.exhausted {
                return None;
            }
            match self.input.next() {
                Some(raw) => self.consume(raw.as_ref()),
                None => {
                    self.exhausted = true;
                    self.flush_pending();
                }
            }
        }
    }
}
