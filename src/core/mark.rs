//! Per-letter feedback marks

use std::fmt;

/// Feedback for a single letter
///
/// Variants are declared weakest first, so the derived ordering is
/// `Unknown < Absent < Present < Exact`. Keyboard folding relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterMark {
    /// Not yet touched by any guess
    #[default]
    Unknown,
    /// No unmatched occurrence left in the secret
    Absent,
    /// In the secret, but at another position
    Present,
    /// Same letter at the same position
    Exact,
}

impl LetterMark {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unknown => '⬜',
        }
    }

    /// Single-character code: E(xact), P(resent), A(bsent), ? for unknown
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'E',
            Self::Present => 'P',
            Self::Absent => 'A',
            Self::Unknown => '?',
        }
    }
}

impl fmt::Display for LetterMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
