use std::fmt;

/// Which phase of the pipeline produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid character, unterminated string or block comment,
    /// malformed two-character operator.
    Lexical,

    /// Unexpected token, missing closing delimiter or keyword.
    Syntax,

    /// Type mismatch on an operator or an invalid regex pattern.
    /// Does not invalidate the parsed tree; evaluation may be retried
    /// with a corrected variable context.
    Evaluation,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Evaluation => "evaluation",
        }
    }
}

/// The single error family shared by lexer, parser, and evaluator.
///
/// Lexical and syntax errors carry the expression text and the character
/// offset of the offence. Evaluation errors carry neither: the tree holds
/// no spans, and the host only needs to know the evaluation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprError {
    pub kind: ErrorKind,
    pub message: String,
    /// Character offset into the expression text, when known.
    pub pos: Option<usize>,
    /// The full expression text, for lexical and syntax errors.
    pub source: Option<String>,
}

impl ExprError {
    pub fn lexical(source: &str, pos: usize, message: impl Into<String>) -> Self {
        ExprError {
            kind: ErrorKind::Lexical,
            message: message.into(),
            pos: Some(pos),
            source: Some(source.to_string()),
        }
    }

    pub fn syntax(source: &str, pos: usize, message: impl Into<String>) -> Self {
        ExprError {
            kind: ErrorKind::Syntax,
            message: message.into(),
            pos: Some(pos),
            source: Some(source.to_string()),
        }
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        ExprError {
            kind: ErrorKind::Evaluation,
            message: message.into(),
            pos: None,
            source: None,
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(
                f,
                "{} error at offset {}: {}",
                self.kind.label(),
                pos,
                self.message
            ),
            None => write!(f, "{} error: {}", self.kind.label(), self.message),
        }
    }
}

impl std::error::Error for ExprError {}
