//! Token-stream inspection for debugging expressions

use std::fmt::Write;

use super::CliError;
use crate::{Lexer, TokenKind};

/// Render the token stream of an expression, one token per line: the
/// half-open span, the kind's literal, and the payload if there is one.
///
/// With `keep_comments` set, comments appear in the stream instead of
/// being skipped.
pub fn dump_tokens(expression: &str, keep_comments: bool) -> Result<String, CliError> {
    let mut lexer = if keep_comments {
        Lexer::with_comments(expression)
    } else {
        Lexer::new(expression)
    };

    let mut listing = String::new();
    loop {
        let token = lexer.next()?;
        let span = format!("{}..{}", token.pos, token.pos + token.len);
        match &token.text {
            Some(text) => {
                let _ = writeln!(listing, "{:<10} {:<18} {:?}", span, token.kind.literal(), text);
            }
            None => {
                let _ = writeln!(listing, "{:<10} {}", span, token.kind.literal());
            }
        }
        if token.kind == TokenKind::Eof {
            return Ok(listing);
        }
    }
}
