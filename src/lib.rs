pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Expr, Token, TokenKind, UnaryOp};
pub use error::{ErrorKind, ExprError};
pub use evaluator::{Evaluator, VariableResolver};
pub use lexer::Lexer;
pub use parser::Parser;
pub use value::Value;
