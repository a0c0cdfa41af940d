/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Boolean negation (`not`, `!`)
    Not,

    /// All-uppercase transform (`upcase`)
    Upcase,

    /// All-lowercase transform (`locase`)
    Locase,

    /// First letter uppercased, rest lowercased (`lcap`)
    Lcap,
}

impl UnaryOp {
    /// Surface form for error messages.
    pub fn literal(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Upcase => "upcase",
            UnaryOp::Locase => "locase",
            UnaryOp::Lcap => "lcap",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // String
    /// Concatenation (`+`)
    Concat,

    /// Substring test (`contains`)
    Contains,

    /// Prefix test (`startswith`)
    StartsWith,

    /// Suffix test (`endswith`)
    EndsWith,

    // Comparison
    /// Equality (`==`), same-type operands only
    Equal,

    /// Inequality (`!=`), same-type operands only
    NotEqual,

    /// Regex match (`=~`)
    RegexMatch,

    /// Regex non-match (`!~`)
    RegexNotMatch,

    // Logical
    /// Logical AND (`and`), short-circuits
    And,

    /// Logical XOR (`xor`), evaluates both sides
    Xor,

    /// Logical OR (`or`), short-circuits
    Or,
}

impl BinOp {
    /// Surface form for error messages.
    pub fn literal(self) -> &'static str {
        match self {
            BinOp::Concat => "+",
            BinOp::Contains => "contains",
            BinOp::StartsWith => "startswith",
            BinOp::EndsWith => "endswith",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::RegexMatch => "=~",
            BinOp::RegexNotMatch => "!~",
            BinOp::And => "and",
            BinOp::Xor => "xor",
            BinOp::Or => "or",
        }
    }
}
