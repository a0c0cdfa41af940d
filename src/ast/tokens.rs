/// The kind of a lexical token.
///
/// A closed set: the parser dispatches on it with exhaustive matches, so
/// adding a kind is a compile error everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Unary operators
    /// Boolean negation (`not` or `!`)
    Not,

    /// Uppercase transform (`upcase`)
    Upcase,

    /// Lowercase transform (`locase`)
    Locase,

    /// First-letter capitalisation (`lcap`)
    Lcap,

    // Binary string operators
    /// Substring test (`contains`)
    Contains,

    /// Prefix test (`startswith`)
    StartsWith,

    /// Suffix test (`endswith`)
    EndsWith,

    /// String concatenation (`+`)
    Plus,

    // Comparison operators
    /// Equality (`==`)
    EqEq,

    /// Inequality (`!=`)
    NotEq,

    /// Regex match (`=~`)
    RegexMatch,

    /// Regex non-match (`!~`)
    RegexNotMatch,

    // Logical operators
    /// Logical AND (`and`, `&`, or `&&`)
    And,

    /// Logical XOR (`xor` or `^`)
    Xor,

    /// Logical OR (`or`, `|`, or `||`)
    Or,

    // Literals
    /// Quoted string literal; the decoded text is the token payload
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "say ""hi"""
    /// ```
    String,

    /// Context variable reference; the case-preserved name is the payload
    ///
    /// # Examples
    /// ```text
    /// $projectName
    /// fileName
    /// ```
    Variable,

    // Control keywords
    /// Conditional opener (`if`)
    If,

    /// Then-branch separator (`then`)
    Then,

    /// Else-branch separator (`else`), also the ternary's separator
    Else,

    /// Ternary marker (`?`)
    Question,

    // Grouping delimiters (the two pairs are interchangeable, but an
    // opener must be closed by its own kind)
    /// `{`
    LBrace,

    /// `}`
    RBrace,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// Comment body; emitted only in the comment-preserving lexer mode
    Comment,

    /// End of input
    Eof,
}

impl TokenKind {
    /// The literal rendering used verbatim in error messages.
    ///
    /// Both bracket pairs render as `(` / `)` since they are
    /// interchangeable as grouping.
    pub fn literal(self) -> &'static str {
        match self {
            TokenKind::Not => "not",
            TokenKind::Upcase => "upcase",
            TokenKind::Locase => "locase",
            TokenKind::Lcap => "lcap",
            TokenKind::Contains => "contains",
            TokenKind::StartsWith => "startswith",
            TokenKind::EndsWith => "endswith",
            TokenKind::Plus => "+",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::RegexMatch => "=~",
            TokenKind::RegexNotMatch => "!~",
            TokenKind::And => "and",
            TokenKind::Xor => "xor",
            TokenKind::Or => "or",
            TokenKind::String => "<string_literal>",
            TokenKind::Variable => "<variable>",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Question => "?",
            TokenKind::LBrace | TokenKind::LParen => "(",
            TokenKind::RBrace | TokenKind::RParen => ")",
            TokenKind::Comment => "<comment>",
            TokenKind::Eof => "<EOF>",
        }
    }
}

/// A lexical token with its half-open source span `[pos, pos + len)`.
///
/// Offsets count characters of the original expression text; error
/// reporting depends on them being exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// Payload: the decoded text of a string literal, the case-preserved
    /// name of a variable, or the body of a comment. `None` for every
    /// other kind.
    pub text: Option<String>,

    /// Character offset of the token's first character.
    pub pos: usize,

    /// Number of characters the token spans.
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize, len: usize) -> Self {
        Token {
            kind,
            text: None,
            pos,
            len,
        }
    }

    pub fn with_text(kind: TokenKind, text: String, pos: usize, len: usize) -> Self {
        Token {
            kind,
            text: Some(text),
            pos,
            len,
        }
    }
}
