use crate::ast::{Token, TokenKind};
use crate::error::ExprError;

/// Identifier characters: Unicode letters and digits, `_`, and `$`.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Keywords are matched case-insensitively; everything else that scans as
/// a word is a variable reference with its casing preserved.
fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "not" => Some(TokenKind::Not),
        "upcase" => Some(TokenKind::Upcase),
        "locase" => Some(TokenKind::Locase),
        "lcap" => Some(TokenKind::Lcap),
        "contains" => Some(TokenKind::Contains),
        "startswith" => Some(TokenKind::StartsWith),
        "endswith" => Some(TokenKind::EndsWith),
        "and" => Some(TokenKind::And),
        "xor" => Some(TokenKind::Xor),
        "or" => Some(TokenKind::Or),
        "if" => Some(TokenKind::If),
        "then" => Some(TokenKind::Then),
        "else" => Some(TokenKind::Else),
        _ => None,
    }
}

/// Pull-based tokenizer with a single token of lookahead.
///
/// `peek` computes and memoizes the current token; `next` returns and
/// consumes it. Tokens carry half-open character spans into the original
/// source so errors can point at the exact offence.
pub struct Lexer {
    source: String,
    input: Vec<char>,
    position: usize,
    /// Lookahead buffer; filled by `peek`, drained by `next`.
    current: Option<Token>,
    /// Surface comments as tokens instead of skipping them.
    keep_comments: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            source: input.to_string(),
            input: input.chars().collect(),
            position: 0,
            current: None,
            keep_comments: false,
        }
    }

    /// A lexer that emits comment tokens instead of discarding them,
    /// for token-stream inspection and highlighting.
    pub fn with_comments(input: &str) -> Self {
        Lexer {
            keep_comments: true,
            ..Lexer::new(input)
        }
    }

    /// The original expression text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The current token, without consuming it.
    pub fn peek(&mut self) -> Result<&Token, ExprError> {
        if self.current.is_none() {
            self.current = Some(self.scan_token()?);
        }
        match self.current.as_ref() {
            Some(token) => Ok(token),
            None => unreachable!("lookahead buffer filled above"),
        }
    }

    /// The current token, consuming it.
    pub fn next(&mut self) -> Result<Token, ExprError> {
        match self.current.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, ExprError> {
        loop {
            self.skip_whitespace();
            if self.current_char() != Some('/') {
                break;
            }
            match self.peek_char(1) {
                Some('/') => {
                    let token = self.read_line_comment();
                    if self.keep_comments {
                        return Ok(token);
                    }
                }
                Some('*') => {
                    let token = self.read_block_comment()?;
                    if self.keep_comments {
                        return Ok(token);
                    }
                }
                // A lone '/' falls through to the invalid-character error
                _ => break,
            }
        }

        let start = self.position;
        match self.current_char() {
            None => Ok(Token::new(TokenKind::Eof, start, 0)),
            Some('+') => Ok(self.symbol(TokenKind::Plus, 1)),
            Some('{') => Ok(self.symbol(TokenKind::LBrace, 1)),
            Some('}') => Ok(self.symbol(TokenKind::RBrace, 1)),
            Some('(') => Ok(self.symbol(TokenKind::LParen, 1)),
            Some(')') => Ok(self.symbol(TokenKind::RParen, 1)),
            Some('?') => Ok(self.symbol(TokenKind::Question, 1)),
            Some('^') => Ok(self.symbol(TokenKind::Xor, 1)),
            Some('&') => {
                let len = if self.peek_char(1) == Some('&') { 2 } else { 1 };
                Ok(self.symbol(TokenKind::And, len))
            }
            Some('|') => {
                let len = if self.peek_char(1) == Some('|') { 2 } else { 1 };
                Ok(self.symbol(TokenKind::Or, len))
            }
            Some('=') => match self.peek_char(1) {
                Some('=') => Ok(self.symbol(TokenKind::EqEq, 2)),
                Some('~') => Ok(self.symbol(TokenKind::RegexMatch, 2)),
                _ => Err(ExprError::lexical(
                    &self.source,
                    start,
                    "unexpected '=' (expected '==' or '=~')",
                )),
            },
            Some('!') => match self.peek_char(1) {
                Some('=') => Ok(self.symbol(TokenKind::NotEq, 2)),
                Some('~') => Ok(self.symbol(TokenKind::RegexNotMatch, 2)),
                _ => Ok(self.symbol(TokenKind::Not, 1)),
            },
            Some('"') => self.read_string(),
            Some(ch) if is_word_char(ch) => Ok(self.read_word()),
            Some(ch) => Err(ExprError::lexical(
                &self.source,
                start,
                format!("invalid character in input: '{}'", ch),
            )),
        }
    }

    fn symbol(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.position;
        self.position += len;
        Token::new(kind, start, len)
    }

    /// A quoted string literal. A doubled quote inside the literal is an
    /// escaped quote character, not a terminator.
    fn read_string(&mut self) -> Result<Token, ExprError> {
        let start = self.position;
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                // Positioned at the opening quote so the host can point
                // at where the string began.
                None => {
                    return Err(ExprError::lexical(
                        &self.source,
                        start,
                        "unterminated string literal",
                    ));
                }
                Some('"') => {
                    if self.peek_char(1) == Some('"') {
                        value.push('"');
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        let len = self.position - start;
                        return Ok(Token::with_text(TokenKind::String, value, start, len));
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Maximal run of word characters: a keyword or a variable name.
    fn read_word(&mut self) -> Token {
        let start = self.position;
        let mut word = String::new();
        while let Some(ch) = self.current_char() {
            if is_word_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let len = self.position - start;
        match keyword_kind(&word.to_lowercase()) {
            Some(kind) => Token::new(kind, start, len),
            None => Token::with_text(TokenKind::Variable, word, start, len),
        }
    }

    fn read_line_comment(&mut self) -> Token {
        let start = self.position;
        self.advance(); // '/'
        self.advance(); // '/'
        let mut body = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            body.push(ch);
            self.advance();
        }
        let len = self.position - start;
        Token::with_text(TokenKind::Comment, body, start, len)
    }

    fn read_block_comment(&mut self) -> Result<Token, ExprError> {
        let start = self.position;
        self.advance(); // '/'
        self.advance(); // '*'
        let mut body = String::new();
        loop {
            match self.current_char() {
                None => {
                    return Err(ExprError::lexical(
                        &self.source,
                        start,
                        "unterminated block comment",
                    ));
                }
                Some('*') if self.peek_char(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    let len = self.position - start;
                    return Ok(Token::with_text(TokenKind::Comment, body, start, len));
                }
                Some(ch) => {
                    body.push(ch);
                    self.advance();
                }
            }
        }
    }
}

#[test]
fn test_keywords_case_insensitive() {
    let mut lexer = Lexer::new("IF Then ELSE Contains UPCASE");
    assert_eq!(lexer.next().unwrap().kind, TokenKind::If);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Then);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Else);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Contains);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Upcase);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("$file + \"x\"");
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Variable);
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Variable);
    assert_eq!(lexer.next().unwrap().text.as_deref(), Some("$file"));
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Plus);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::String);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Eof);
}
