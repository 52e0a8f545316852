use std::collections::HashSet;
use tracing::debug;

/// The broad classes of problem a message can have. None of them stop a
/// decode; they are all reported alongside whatever could be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Structural,
    UnknownTag,
    FieldCount,
    NumericFormat,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsingError {
    UnexpectedCharacter(usize, char),
    UnterminatedLiteral(usize),
    UnknownKeyword(usize, String),
    UnexpectedEndOfInput(usize),
    UnclosedGroup(usize),
    UnmatchedCloseParen(usize),
    GroupEnded(usize),
    Expected(usize, &'static str),
    ExpectedField(usize, &'static str, String),
    UnknownTag(usize, String),
    FieldCount(usize, &'static str, usize, usize),
    ExtraFields(usize, &'static str, usize),
    InvalidNumber(usize, String),
    DuplicateReading(usize, String),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnexpectedCharacter(offset, _) => *offset,
            ParsingError::UnterminatedLiteral(offset) => *offset,
            ParsingError::UnknownKeyword(offset, _) => *offset,
            ParsingError::UnexpectedEndOfInput(offset) => *offset,
            ParsingError::UnclosedGroup(offset) => *offset,
            ParsingError::UnmatchedCloseParen(offset) => *offset,
            ParsingError::GroupEnded(offset) => *offset,
            ParsingError::Expected(offset, _) => *offset,
            ParsingError::ExpectedField(offset, _, _) => *offset,
            ParsingError::UnknownTag(offset, _) => *offset,
            ParsingError::FieldCount(offset, _, _, _) => *offset,
            ParsingError::ExtraFields(offset, _, _) => *offset,
            ParsingError::InvalidNumber(offset, _) => *offset,
            ParsingError::DuplicateReading(offset, _) => *offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParsingError::UnexpectedCharacter(_, _)
            | ParsingError::UnterminatedLiteral(_)
            | ParsingError::UnknownKeyword(_, _) => ErrorKind::Lexical,
            ParsingError::UnexpectedEndOfInput(_)
            | ParsingError::UnclosedGroup(_)
            | ParsingError::UnmatchedCloseParen(_)
            | ParsingError::GroupEnded(_)
            | ParsingError::Expected(_, _)
            | ParsingError::ExpectedField(_, _, _) => ErrorKind::Structural,
            ParsingError::UnknownTag(_, _) => ErrorKind::UnknownTag,
            ParsingError::FieldCount(_, _, _, _) | ParsingError::ExtraFields(_, _, _) => {
                ErrorKind::FieldCount
            }
            ParsingError::InvalidNumber(_, _) => ErrorKind::NumericFormat,
            ParsingError::DuplicateReading(_, _) => ErrorKind::Duplicate,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnexpectedCharacter(_, c) => format!("unexpected character '{}'", c),
            ParsingError::UnterminatedLiteral(_) => "unterminated quoted text".to_string(),
            ParsingError::UnknownKeyword(_, keyword) => format!("unknown keyword '{}'", keyword),
            ParsingError::UnexpectedEndOfInput(_) => "unexpected end of input".to_string(),
            ParsingError::UnclosedGroup(_) => "group is never closed".to_string(),
            ParsingError::UnmatchedCloseParen(_) => "unmatched ')'".to_string(),
            ParsingError::GroupEnded(_) => "group ends prematurely".to_string(),
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::ExpectedField(_, name, found) => {
                format!("expected field '{}' but found '{}'", name, found)
            }
            ParsingError::UnknownTag(_, tag) => format!("unknown tag '{}'", tag),
            ParsingError::FieldCount(_, field, expected, found) => format!(
                "'{}' should have {} value{} but has {}",
                field,
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            ParsingError::ExtraFields(_, tag, count) => format!(
                "{} unexpected field{} after '{}'",
                count,
                if *count == 1 { "" } else { "s" },
                tag
            ),
            ParsingError::InvalidNumber(_, literal) => format!("'{}' is not a number", literal),
            ParsingError::DuplicateReading(_, label) => {
                format!("'{}' was reported more than once", label)
            }
        }
    }
}

/// Collects the non-fatal problems found while decoding one message.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ParsingError>,
    seen: HashSet<ParsingError>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    /// Record a problem. The same error at the same offset is only kept once.
    pub fn record(&mut self, error: ParsingError) {
        if !self
            .seen
            .insert(error.clone())
        {
            return;
        }
        debug!(offset = error.offset(), kind = ?error.kind(), "{}", error.message());
        self.errors
            .push(error);
    }

    pub fn len(&self) -> usize {
        self.errors
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors
            .is_empty()
    }

    pub fn into_inner(self) -> Vec<ParsingError> {
        self.errors
    }
}
