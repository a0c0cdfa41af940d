use std::fmt;

/// A runtime value produced by evaluating an expression.
///
/// The language knows exactly two types. There is no numeric type and no
/// implicit coercion between the two; every operator declares fixed input
/// and output types, and a mismatch is an evaluation error.
///
/// # Examples
///
/// ```
/// use caption_lang::Value;
///
/// let title = Value::String("main.rs".to_string());
/// let modified = Value::Boolean(true);
///
/// assert_eq!(title.render(), "main.rs");
/// assert_eq!(modified.render(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// UTF-8 string
    String(String),

    /// Boolean (true/false)
    Boolean(bool),
}

impl Value {
    /// Human-readable type name, used in evaluation error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Render the value as display text.
    ///
    /// Strings render as themselves. A boolean result renders as the
    /// fixed literals `"true"` / `"false"`; this is the canonical form
    /// used when a whole expression evaluates to a boolean root.
    pub fn render(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Boolean(true) => "true".to_string(),
            Value::Boolean(false) => "false".to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
