use crate::ast::{BinOp, UnaryOp};

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Built bottom-up by the parser and immutable afterwards: the same tree
/// is re-walked by the evaluator on every title refresh, against whatever
/// variable context is current at the time. Children are owned
/// exclusively; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal
    ///
    /// # Example
    /// ```text
    /// "untitled"
    /// ```
    Literal(String),

    /// Context variable reference, resolved at evaluation time
    ///
    /// The name keeps its original casing.
    ///
    /// # Example
    /// ```text
    /// $projectName
    /// ```
    Variable(String),

    /// Unary prefix operation
    ///
    /// # Example
    /// ```text
    /// upcase $fileName
    /// ```
    UnaryOp { op: UnaryOp, operand: Box<Expr> },

    /// Binary operation
    ///
    /// # Example
    /// ```text
    /// $projectName + " - " + $fileName
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional, produced by both surface forms:
    /// `if c then a else b` and `c ? a else b`
    ///
    /// Only the selected branch is ever evaluated.
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}
