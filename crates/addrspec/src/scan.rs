//! Single-pass address scanner.
//!
//! The scanner walks the candidate once, left to right, deciding every
//! character from a handful of flags, a comment-nesting counter and the
//! position where the domain part begins. There is no lookahead and no
//! backtracking. Once the walk finishes, the domain substring is handed to
//! [`domain::labels_valid`] for the per-label checks.
//!
//! Indices are `char` positions, so the length limits count Unicode scalar
//! values rather than bytes.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::domain;
use crate::{MAX_ADDRESS_LEN, MAX_LOCAL_PART_LEN};

/// Rule that rejected a candidate. Only used for trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// Non-ASCII, NUL or LF in the local part.
    LocalCharacter,
    /// Candidate longer than [`MAX_ADDRESS_LEN`].
    TooLong,
    /// Local part longer than [`MAX_LOCAL_PART_LEN`].
    LocalTooLong,
    /// Something other than `@` or `.` right after a closing quote.
    AfterQuotedBlock,
    /// A second separator.
    SecondAt,
    /// Local part ends with a dot.
    DotBeforeAt,
    /// `)` with no open comment.
    UnmatchedClose,
    /// `\` outside a quoted string or comment.
    StrayBackslash,
    /// `"` in the domain outside a comment.
    QuoteInDomain,
    /// `"` opening somewhere other than the start or after a dot.
    MisplacedQuote,
    /// Dot at the start of the local or domain part, or at the very end.
    MisplacedDot,
    /// Two unquoted dots in a row.
    ConsecutiveDots,
    /// Space, comma, bracket or control character outside quotes.
    UnquotedSpecial,
    /// Domain character that is not a letter, digit or `-`.
    DomainCharacter,
    /// Comment still open at end of input.
    UnclosedComment,
    /// No separating `@`.
    MissingAt,
    /// Nothing after the `@`.
    EmptyDomain,
    /// Nothing before the `@`.
    EmptyLocalPart,
    /// A domain label failed the label checks.
    DomainLabel,
}

type Step = std::result::Result<(), Rejection>;

/// Per-call scan state.
#[derive(Debug, Default)]
struct ScanState {
    /// Inside a quoted string.
    quoted: bool,
    /// The previous character was an active backslash.
    escaped: bool,
    /// Past the separating `@`.
    in_domain: bool,
    /// The previous significant character was an unquoted dot.
    after_dot: bool,
    /// The previous character closed a quoted string.
    just_closed_quote: bool,
    /// Open, unmatched `(` count.
    comment_depth: usize,
    /// Character index one past the separating `@`.
    domain_start: usize,
    /// Byte offset matching `domain_start`.
    domain_offset: usize,
}

impl ScanState {
    fn step(&mut self, index: usize, offset: usize, ch: char, is_last: bool) -> Step {
        if !self.in_domain && (u32::from(ch) > 126 || ch == '\0' || ch == '\n') {
            return Err(Rejection::LocalCharacter);
        }

        if index >= MAX_ADDRESS_LEN {
            return Err(Rejection::TooLong);
        }

        if self.just_closed_quote {
            if ch != '@' && ch != '.' {
                return Err(Rejection::AfterQuotedBlock);
            }
            self.just_closed_quote = false;
        }

        match ch {
            '@' => self.at_sign(index, offset),
            '(' => {
                if !self.quoted && !self.escaped {
                    self.comment_depth += 1;
                }
                self.clear();
                Ok(())
            }
            ')' => {
                if !self.quoted && !self.escaped {
                    if self.comment_depth == 0 {
                        return Err(Rejection::UnmatchedClose);
                    }
                    self.comment_depth -= 1;
                }
                self.clear();
                Ok(())
            }
            '\\' => {
                if !self.quoted && self.comment_depth == 0 {
                    return Err(Rejection::StrayBackslash);
                }
                self.escaped = !self.escaped;
                self.after_dot = false;
                Ok(())
            }
            '"' => self.quote(index),
            '.' => self.dot(index, is_last),
            ' ' | ',' | '[' | ']' | '\u{1}'..='\u{9}' | '\u{b}' | '\u{d}' | '\u{f}' => {
                if !self.quoted {
                    return Err(Rejection::UnquotedSpecial);
                }
                self.other(ch)
            }
            _ => self.other(ch),
        }
    }

    fn at_sign(&mut self, index: usize, offset: usize) -> Step {
        if self.in_domain {
            return Err(Rejection::SecondAt);
        }
        if self.after_dot {
            return Err(Rejection::DotBeforeAt);
        }

        if !self.quoted {
            self.in_domain = true;
            self.domain_start = index + 1;
            self.domain_offset = offset + 1;
            if index > MAX_LOCAL_PART_LEN {
                return Err(Rejection::LocalTooLong);
            }
        }

        self.clear();
        Ok(())
    }

    fn quote(&mut self, index: usize) -> Step {
        if self.in_domain && self.comment_depth == 0 {
            return Err(Rejection::QuoteInDomain);
        }

        if !self.escaped {
            if index != 0 && !self.after_dot && !self.quoted {
                return Err(Rejection::MisplacedQuote);
            }
            if self.quoted {
                self.just_closed_quote = true;
            }
            self.quoted = !self.quoted;
        }

        self.clear();
        Ok(())
    }

    fn dot(&mut self, index: usize, is_last: bool) -> Step {
        if index == 0 || (self.in_domain && index == self.domain_start) || is_last {
            return Err(Rejection::MisplacedDot);
        }

        if !self.quoted {
            if self.after_dot {
                return Err(Rejection::ConsecutiveDots);
            }
            self.after_dot = true;
        }

        self.escaped = false;
        Ok(())
    }

    fn other(&mut self, ch: char) -> Step {
        self.clear();
        if self.in_domain && !is_domain_char(ch) {
            return Err(Rejection::DomainCharacter);
        }
        Ok(())
    }

    const fn clear(&mut self) {
        self.after_dot = false;
        self.escaped = false;
    }

    fn finish(&self, candidate: &str) -> Step {
        if self.comment_depth != 0 {
            return Err(Rejection::UnclosedComment);
        }
        if !self.in_domain {
            return Err(Rejection::MissingAt);
        }
        if self.domain_offset == candidate.len() {
            return Err(Rejection::EmptyDomain);
        }
        if self.domain_start == 1 {
            return Err(Rejection::EmptyLocalPart);
        }
        if !domain::labels_valid(&candidate[self.domain_offset..]) {
            return Err(Rejection::DomainLabel);
        }
        Ok(())
    }
}

/// Unicode letters (`L*`) and decimal digits (`Nd`), plus `-`.
fn is_domain_char(ch: char) -> bool {
    ch == '-'
        || matches!(
            get_general_category(ch),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
        )
}

/// Scans `candidate` and returns the byte offset where its domain part
/// begins, or `None` if it is not a valid address.
pub(crate) fn split(candidate: &str) -> Option<usize> {
    let mut state = ScanState::default();

    for (index, (offset, ch)) in candidate.char_indices().enumerate() {
        let is_last = offset + ch.len_utf8() == candidate.len();
        if let Err(rule) = state.step(index, offset, ch, is_last) {
            tracing::trace!(?rule, index, "address rejected");
            return None;
        }
    }

    if let Err(rule) = state.finish(candidate) {
        tracing::trace!(?rule, "address rejected");
        return None;
    }

    Some(state.domain_offset)
}

/// Returns `true` if `candidate` is a syntactically valid email address.
///
/// Validation is purely syntactic. Nothing is normalized and no DNS lookup
/// is made. The result carries no detail about why a candidate failed.
///
/// # Examples
///
/// ```
/// use addrspec::is_valid;
///
/// assert!(is_valid("user@example.com"));
/// assert!(is_valid("\"quoted user\"@example.com"));
/// assert!(!is_valid("user..name@example.com"));
/// assert!(!is_valid("user@[192.168.1.1]"));
/// ```
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    split(candidate).is_some()
}
