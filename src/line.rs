use std::fmt;

/// Direction of a change line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Line prefixed with `+`
    Add,
    /// Line prefixed with `-`
    Delete,
}

impl ChangeKind {
    /// The marker character this kind is written with
    pub fn marker(self) -> char {
        match self {
            ChangeKind::Add => '+',
            ChangeKind::Delete => '-',
        }
    }

    /// The kind a matching moved line would carry
    pub fn opposite(self) -> Self {
        match self {
            ChangeKind::Add => ChangeKind::Delete,
            ChangeKind::Delete => ChangeKind::Add,
        }
    }
}

/// An added or removed line from a diff stream.
///
/// Content is stored trimmed of surrounding whitespace; that trimmed form is
/// both the match key for move-pair cancellation and the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub content: String,
}

impl Change {
    /// True if `other` is the same content carried by the opposite marker
    pub fn is_inverse_of(&self, other: &Change) -> bool {
        self.kind == other.kind.opposite() && self.content == other.content
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.content)
    }
}

/// Classification of one raw input line.
///
/// Classification is total: any string maps to exactly one variant and no
/// input is ever rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Nothing but whitespace after the first character (or no first
    /// character at all). Blank lines are dropped from the stream entirely.
    Blank,
    /// A `---` / `+++` file header, trimmed of trailing whitespace
    Header(String),
    /// An added or removed line
    Change(Change),
    /// Any other payload, trimmed of trailing whitespace
    Context(String),
}

impl Line {
    /// Classify a raw input line.
    ///
    /// The blank check inspects everything after the first character, no
    /// matter what that character is, so a one-character line counts as
    /// blank. Header detection runs before marker dispatch: `---` is a
    /// header, not a deletion.
    ///
    /// # Examples
    ///
    /// ```
    /// use diff_unmove::{ChangeKind, Line};
    ///
    /// assert_eq!(Line::classify("+"), Line::Blank);
    /// assert_eq!(Line::classify("--- a/file"), Line::Header("--- a/file".to_string()));
    /// match Line::classify("+    new line  ") {
    ///     Line::Change(change) => {
    ///         assert_eq!(change.kind, ChangeKind::Add);
    ///         assert_eq!(change.content, "new line");
    ///     }
    ///     other => panic!("expected change, got {other:?}"),
    /// }
    /// ```
    pub fn classify(raw: &str) -> Line {
        // First *character*, not first byte: multibyte input must not panic
        let mut chars = raw.chars();
        let marker = chars.next();
        let rest = chars.as_str();

        if rest.trim().is_empty() {
            return Line::Blank;
        }

        if raw.starts_with("---") || raw.starts_with("+++") {
            return Line::Header(raw.trim_end().to_string());
        }

        match marker {
            Some('+') => Line::Change(Change {
                kind: ChangeKind::Add,
                content: rest.trim().to_string(),
            }),
            Some('-') => Line::Change(Change {
                kind: ChangeKind::Delete,
                content: rest.trim().to_string(),
            }),
            _ => Line::Context(raw.trim_end().to_string()),
        }
    }
}
