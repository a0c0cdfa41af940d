use crate::{
    ast::{BinOp, Expr, Token, TokenKind, UnaryOp},
    error::ExprError,
    lexer::Lexer,
};

/// Maximum expression tree height. Groupings, conditionals, unary
/// chains, and left-associative operator chains all count: evaluation
/// recurses once per level, so pathological input must become a syntax
/// error instead of a stack fault.
const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser with one token of lookahead.
///
/// Precedence, lowest to highest binding: conditional, `or`, `xor`,
/// `and`, comparison (`==` `!=` `=~` `!~`, non-chaining), concatenation
/// `+`, string relations (`contains` `startswith` `endswith`), unary
/// prefix (`not` `upcase` `locase` `lcap`), primary.
///
/// Parsing is all-or-nothing: an error invalidates the whole attempt and
/// no partial tree escapes.
pub struct Parser {
    lexer: Lexer,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer, depth: 0 }
    }

    /// Parse a complete expression; the entire input must be consumed.
    pub fn parse(&mut self) -> Result<Expr, ExprError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Eof)?;
        Ok(expr)
    }

    fn kind(&mut self) -> Result<TokenKind, ExprError> {
        Ok(self.lexer.peek()?.kind)
    }

    fn check(&mut self, kind: TokenKind) -> Result<bool, ExprError> {
        Ok(self.kind()? == kind)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ExprError> {
        let (found, pos) = {
            let token = self.lexer.peek()?;
            (token.kind, token.pos)
        };
        if found == expected {
            self.lexer.next()
        } else if found == TokenKind::Eof {
            Err(self.syntax_error(
                pos,
                format!(
                    "unexpected end of expression, expected '{}'",
                    expected.literal()
                ),
            ))
        } else {
            Err(self.syntax_error(
                pos,
                format!(
                    "expected '{}', found '{}'",
                    expected.literal(),
                    found.literal()
                ),
            ))
        }
    }

    fn syntax_error(&self, pos: usize, message: String) -> ExprError {
        ExprError::syntax(self.lexer.source(), pos, message)
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let pos = self.lexer.peek()?.pos;
            return Err(self.syntax_error(pos, "expression is nested too deeply".to_string()));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn leave_n(&mut self, n: usize) {
        self.depth -= n;
    }

    fn parse_expression(&mut self) -> Result<Expr, ExprError> {
        self.parse_conditional()
    }

    /// Both conditional surface forms, right-associative:
    /// `if COND then A else B` and `COND ? A else B`. The language has no
    /// `:` token; `else` is the ternary's else separator.
    fn parse_conditional(&mut self) -> Result<Expr, ExprError> {
        self.enter()?;
        let expr = if self.check(TokenKind::If)? {
            self.lexer.next()?;
            let condition = self.parse_conditional()?;
            self.expect(TokenKind::Then)?;
            let then_branch = self.parse_conditional()?;
            self.expect(TokenKind::Else)?;
            let else_branch = self.parse_conditional()?;
            Expr::Conditional {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            }
        } else {
            let condition = self.parse_or()?;
            if self.check(TokenKind::Question)? {
                self.lexer.next()?;
                let then_branch = self.parse_conditional()?;
                self.expect(TokenKind::Else)?;
                let else_branch = self.parse_conditional()?;
                Expr::Conditional {
                    condition: Box::new(condition),
                    then_branch: Box::new(then_branch),
                    else_branch: Box::new(else_branch),
                }
            } else {
                condition
            }
        };
        self.leave();
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_xor()?;
        // The left-leaning tree grows one level per operator, so each
        // chain link is charged against the depth budget.
        let mut links = 0;

        while self.check(TokenKind::Or)? {
            self.lexer.next()?;
            self.enter()?;
            links += 1;
            let right = self.parse_xor()?;
            left = Expr::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        self.leave_n(links);
        Ok(left)
    }

    fn parse_xor(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_and()?;
        let mut links = 0;

        while self.check(TokenKind::Xor)? {
            self.lexer.next()?;
            self.enter()?;
            links += 1;
            let right = self.parse_and()?;
            left = Expr::BinaryOp {
                op: BinOp::Xor,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        self.leave_n(links);
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_comparison()?;
        let mut links = 0;

        while self.check(TokenKind::And)? {
            self.lexer.next()?;
            self.enter()?;
            links += 1;
            let right = self.parse_comparison()?;
            left = Expr::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        self.leave_n(links);
        Ok(left)
    }

    /// Comparisons do not chain: `a == b == c` needs explicit grouping.
    fn parse_comparison(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_concat()?;

        if let Some(op) = match self.kind()? {
            TokenKind::EqEq => Some(BinOp::Equal),
            TokenKind::NotEq => Some(BinOp::NotEqual),
            TokenKind::RegexMatch => Some(BinOp::RegexMatch),
            TokenKind::RegexNotMatch => Some(BinOp::RegexNotMatch),
            _ => None,
        } {
            self.lexer.next()?;
            let right = self.parse_concat()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_concat(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_relation()?;
        let mut links = 0;

        while self.check(TokenKind::Plus)? {
            self.lexer.next()?;
            self.enter()?;
            links += 1;
            let right = self.parse_relation()?;
            left = Expr::BinaryOp {
                op: BinOp::Concat,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        self.leave_n(links);
        Ok(left)
    }

    fn parse_relation(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_unary()?;
        let mut links = 0;

        loop {
            let op = match self.kind()? {
                TokenKind::Contains => BinOp::Contains,
                TokenKind::StartsWith => BinOp::StartsWith,
                TokenKind::EndsWith => BinOp::EndsWith,
                _ => break,
            };

            self.lexer.next()?;
            self.enter()?;
            links += 1;
            let right = self.parse_unary()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        self.leave_n(links);
        Ok(left)
    }

    /// Unary prefixes are right-associative and bind tighter than every
    /// binary operator: `upcase a + b` is `(upcase a) + b`.
    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.kind()? {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Upcase => Some(UnaryOp::Upcase),
            TokenKind::Locase => Some(UnaryOp::Locase),
            TokenKind::Lcap => Some(UnaryOp::Lcap),
            _ => None,
        };

        match op {
            Some(op) => {
                self.lexer.next()?;
                self.enter()?;
                let operand = self.parse_unary()?;
                self.leave();
                Ok(Expr::UnaryOp {
                    op,
                    operand: Box::new(operand),
                })
            }
            None => self.parse_primary(),
        }
    }

    /// Primary: string literal, variable reference, or a grouped
    /// sub-expression. An opener must be closed by its own delimiter
    /// kind; grouping affects parse order only and creates no node.
    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let token = self.lexer.next()?;
        match token.kind {
            TokenKind::String => Ok(Expr::Literal(token.text.unwrap_or_default())),
            TokenKind::Variable => Ok(Expr::Variable(token.text.unwrap_or_default())),
            TokenKind::LParen => {
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBrace => {
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RBrace)?;
                Ok(expr)
            }
            TokenKind::Eof => Err(self.syntax_error(
                token.pos,
                "unexpected end of expression, expected a value".to_string(),
            )),
            other => Err(self.syntax_error(
                token.pos,
                format!("unexpected '{}' in expression", other.literal()),
            )),
        }
    }
}
