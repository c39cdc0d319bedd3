/// A whitespace-delimited token with its position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken<'a> {
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

/// Lexer for splitting notation into located tokens.
///
/// Any run of Unicode whitespace separates tokens; newlines only matter
/// for the reported positions.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let (pos, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some((pos, c))
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    pub fn tokenize(&mut self) -> Vec<LocatedToken<'a>> {
        self.by_ref().collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LocatedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let &(start, _) = self.peek()?;
        let line = self.line;
        let column = self.column;

        let mut end = self.input.len();
        while let Some(&(pos, c)) = self.peek() {
            if c.is_whitespace() {
                end = pos;
                break;
            }
            self.advance();
        }

        Some(LocatedToken {
            text: &self.input[start..end],
            line,
            column,
        })
    }
}
