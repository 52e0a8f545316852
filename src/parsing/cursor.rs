//! Navigation over the nested groups of a perceptor message.
//!
//! Every field of every tag sits at a fixed place relative to its siblings,
//! so rather than building a tree the extractors walk the text directly with
//! [`Cursor::enter`], [`Cursor::skip`], [`Cursor::take`] and
//! [`Cursor::exit`]. Each primitive costs only the length of what it
//! consumes.

use crate::parsing::ParsingError;

/// A slice of the message: either a bare word or a whole balanced group,
/// parentheses included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub text: &'i str,
    pub offset: usize,
}

impl<'i> Token<'i> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_group(&self) -> bool {
        self.text
            .starts_with('(')
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    source: &'i str,
    offset: usize,
    depth: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(content: &'i str) -> Cursor<'i> {
        Cursor {
            source: content,
            offset: 0,
            depth: 0,
        }
    }

    /// A cursor confined to one token. Offsets it reports stay relative to
    /// the whole message the token came from.
    pub fn over(token: Token<'i>) -> Cursor<'i> {
        Cursor {
            source: token.text,
            offset: token.offset,
            depth: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_finished(&self) -> bool {
        self.source
            .trim_ascii_start()
            .is_empty()
    }

    /// Skip whitespace and report the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.trim_whitespace();
        self.source
            .chars()
            .next()
    }

    /// True if nothing but a closing parenthesis (or nothing at all) remains
    /// at the current depth.
    pub fn at_group_end(&mut self) -> bool {
        matches!(self.peek(), None | Some(')'))
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn trim_whitespace(&mut self) {
        let l = self
            .source
            .bytes()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        self.advance(l);
    }

    /// Consume the next sibling: a whole balanced group if one opens here,
    /// otherwise the run of characters up to the next space or parenthesis.
    pub fn take(&mut self) -> Result<Token<'i>, ParsingError> {
        self.trim_whitespace();

        let bytes = self
            .source
            .as_bytes();

        match bytes.first() {
            None => Err(ParsingError::UnexpectedEndOfInput(self.offset)),
            Some(b')') => {
                if self.depth == 0 {
                    Err(ParsingError::UnmatchedCloseParen(self.offset))
                } else {
                    Err(ParsingError::GroupEnded(self.offset))
                }
            }
            Some(b'(') => {
                let mut level = 0usize;
                for (i, b) in bytes
                    .iter()
                    .enumerate()
                {
                    match b {
                        b'(' => level += 1,
                        b')' => {
                            level -= 1;
                            if level == 0 {
                                return Ok(self.consume(i + 1));
                            }
                        }
                        _ => {}
                    }
                }
                Err(ParsingError::UnclosedGroup(self.offset))
            }
            Some(_) => {
                let width = bytes
                    .iter()
                    .position(|b| b.is_ascii_whitespace() || *b == b'(' || *b == b')')
                    .unwrap_or(bytes.len());
                Ok(self.consume(width))
            }
        }
    }

    fn consume(&mut self, width: usize) -> Token<'i> {
        let token = Token {
            text: &self.source[..width],
            offset: self.offset,
        };
        self.advance(width);
        token
    }

    /// Pass over `n` siblings. On failure the cursor is left where the
    /// missing sibling should have been.
    pub fn skip(&mut self, n: usize) -> Result<(), ParsingError> {
        for _ in 0..n {
            self.take()?;
        }
        Ok(())
    }

    /// Descend into `n` directly nested groups.
    pub fn enter(&mut self, n: usize) -> Result<(), ParsingError> {
        for _ in 0..n {
            match self.peek() {
                Some('(') => {
                    self.advance(1);
                    self.depth += 1;
                }
                Some(_) => {
                    return Err(ParsingError::Expected(self.offset, "an opening parenthesis"));
                }
                None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
            }
        }
        Ok(())
    }

    /// Climb out of `n` enclosing groups. Any siblings not yet consumed at a
    /// level being left are passed over.
    pub fn exit(&mut self, n: usize) -> Result<(), ParsingError> {
        for _ in 0..n {
            if self.depth == 0 {
                return Err(ParsingError::Expected(self.offset, "an enclosing group"));
            }
            loop {
                match self.peek() {
                    Some(')') => {
                        self.advance(1);
                        self.depth -= 1;
                        break;
                    }
                    Some(_) => {
                        self.take()?;
                    }
                    None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
                }
            }
        }
        Ok(())
    }

    /// Step past a `)` that closes nothing, so that the groups after it can
    /// still be read. Does nothing if the next character is anything else.
    pub fn skip_unmatched(&mut self) {
        if self.peek() == Some(')') {
            self.advance(1);
        }
    }

    pub fn skip_to_end(&mut self) {
        self.advance(
            self.source
                .len(),
        );
        self.depth = 0;
    }
}
