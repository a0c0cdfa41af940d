//! # Caption Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens and AST for the caption expression
//! language, a tiny typed language that computes a display string (a
//! window caption) from named context variables.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer, with source spans
//! - **[expressions]** - Expression nodes (literals, variables, operators, conditionals)
//! - **[operators]** - Unary and binary operators
//!
//! ## The Language at a Glance
//!
//! ```text
//! if $projectName == "" then $fileName
//! else $projectName + " - " + $fileName
//! ```
//!
//! Expressions combine string literals, `$variables`, string operators
//! (`+`, `contains`, `startswith`, `endswith`, `upcase`, `locase`,
//! `lcap`), comparisons (`==`, `!=`, `=~`, `!~`), boolean logic (`and`,
//! `or`, `xor`, `not`) and conditionals. The ternary form uses `else` as
//! its separator:
//!
//! ```text
//! $modified ? "*" + $fileName else $fileName
//! ```
//!
//! Both `( )` and `{ }` group sub-expressions. Line (`//`) and block
//! (`/* */`) comments are skipped.
//!
//! ## Type System
//!
//! Two value types, string and boolean, with no implicit coercion. Every
//! operator has a fixed signature; a mismatch is an evaluation error. A
//! boolean at the root renders as `"true"` / `"false"`.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::{BinOp, UnaryOp};
pub use tokens::{Token, TokenKind};
