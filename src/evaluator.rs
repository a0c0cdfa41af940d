use std::collections::HashMap;
use std::collections::hash_map::Entry;

use regex::Regex;

use crate::{
    ast::{BinOp, Expr, UnaryOp},
    error::ExprError,
    value::Value,
};

/// Cap on cached compiled patterns.
const PATTERN_CACHE_LIMIT: usize = 64;

/// Supplies current values for context variables during evaluation.
///
/// The lookup is treated as a read-only snapshot for the duration of one
/// evaluation. Returning `None` is not an error: an unresolved variable
/// evaluates to the empty string, so a stale or missing variable never
/// breaks caption rendering.
pub trait VariableResolver {
    fn resolve(&self, name: &str) -> Option<Value>;
}

impl VariableResolver for HashMap<String, Value> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl VariableResolver for HashMap<String, String> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).map(|s| Value::String(s.clone()))
    }
}

/// The empty context: every variable is unresolved.
impl VariableResolver for () {
    fn resolve(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Walks a parsed expression tree and produces its value.
///
/// The tree is immutable, so the same `Expr` may be evaluated repeatedly
/// (once per caption refresh) against whatever variable context is
/// current. Compiled regex patterns are cached keyed by pattern text so
/// repeated passes do not recompile them.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use caption_lang::{Evaluator, Lexer, Parser};
///
/// let lexer = Lexer::new(r#"if $project == "" then $file else $project + " - " + $file"#);
/// let mut parser = Parser::new(lexer);
/// let expr = parser.parse().unwrap();
///
/// let mut vars = HashMap::new();
/// vars.insert("$project".to_string(), "demo".to_string());
/// vars.insert("$file".to_string(), "main.rs".to_string());
///
/// let mut evaluator = Evaluator::new();
/// let title = evaluator.eval_to_string(&expr, &vars).unwrap();
/// assert_eq!(title, "demo - main.rs");
/// ```
#[derive(Default)]
pub struct Evaluator {
    patterns: HashMap<String, Regex>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a tree to its final display string.
    ///
    /// A boolean root renders as the fixed literals `"true"` / `"false"`.
    pub fn eval_to_string(
        &mut self,
        expr: &Expr,
        vars: &dyn VariableResolver,
    ) -> Result<String, ExprError> {
        Ok(self.eval(expr, vars)?.render())
    }

    /// Evaluate a tree to a typed value.
    pub fn eval(&mut self, expr: &Expr, vars: &dyn VariableResolver) -> Result<Value, ExprError> {
        match expr {
            Expr::Literal(s) => Ok(Value::String(s.clone())),
            Expr::Variable(name) => Ok(vars
                .resolve(name)
                .unwrap_or_else(|| Value::String(String::new()))),
            Expr::UnaryOp { op, operand } => self.eval_unary(*op, operand, vars),
            Expr::BinaryOp { op, left, right } => self.eval_binary(*op, left, right, vars),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                // Only the selected branch is evaluated; errors latent in
                // the untaken branch never surface.
                if self.eval_bool(condition, vars, "if")? {
                    self.eval(then_branch, vars)
                } else {
                    self.eval(else_branch, vars)
                }
            }
        }
    }

    fn eval_unary(
        &mut self,
        op: UnaryOp,
        operand: &Expr,
        vars: &dyn VariableResolver,
    ) -> Result<Value, ExprError> {
        match op {
            UnaryOp::Not => Ok(Value::Boolean(
                !self.eval_bool(operand, vars, op.literal())?,
            )),
            UnaryOp::Upcase => Ok(Value::String(
                self.eval_string(operand, vars, op.literal())?.to_uppercase(),
            )),
            UnaryOp::Locase => Ok(Value::String(
                self.eval_string(operand, vars, op.literal())?.to_lowercase(),
            )),
            UnaryOp::Lcap => {
                let text = self.eval_string(operand, vars, op.literal())?;
                Ok(Value::String(capitalize(&text)))
            }
        }
    }

    fn eval_binary(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        vars: &dyn VariableResolver,
    ) -> Result<Value, ExprError> {
        match op {
            // 'and'/'or' short-circuit: the right side is not evaluated
            // when the left side already determines the result.
            BinOp::And => {
                if !self.eval_bool(left, vars, op.literal())? {
                    Ok(Value::Boolean(false))
                } else {
                    Ok(Value::Boolean(self.eval_bool(right, vars, op.literal())?))
                }
            }
            BinOp::Or => {
                if self.eval_bool(left, vars, op.literal())? {
                    Ok(Value::Boolean(true))
                } else {
                    Ok(Value::Boolean(self.eval_bool(right, vars, op.literal())?))
                }
            }
            // 'xor' cannot short-circuit; both sides always evaluate.
            BinOp::Xor => {
                let lhs = self.eval_bool(left, vars, op.literal())?;
                let rhs = self.eval_bool(right, vars, op.literal())?;
                Ok(Value::Boolean(lhs ^ rhs))
            }
            BinOp::Concat => {
                let mut lhs = self.eval_string(left, vars, op.literal())?;
                let rhs = self.eval_string(right, vars, op.literal())?;
                lhs.push_str(&rhs);
                Ok(Value::String(lhs))
            }
            BinOp::Contains => {
                let lhs = self.eval_string(left, vars, op.literal())?;
                let rhs = self.eval_string(right, vars, op.literal())?;
                Ok(Value::Boolean(lhs.contains(&rhs)))
            }
            BinOp::StartsWith => {
                let lhs = self.eval_string(left, vars, op.literal())?;
                let rhs = self.eval_string(right, vars, op.literal())?;
                Ok(Value::Boolean(lhs.starts_with(&rhs)))
            }
            BinOp::EndsWith => {
                let lhs = self.eval_string(left, vars, op.literal())?;
                let rhs = self.eval_string(right, vars, op.literal())?;
                Ok(Value::Boolean(lhs.ends_with(&rhs)))
            }
            BinOp::Equal | BinOp::NotEqual => {
                let lhs = self.eval(left, vars)?;
                let rhs = self.eval(right, vars)?;
                let equal = match (&lhs, &rhs) {
                    (Value::String(a), Value::String(b)) => a == b,
                    (Value::Boolean(a), Value::Boolean(b)) => a == b,
                    _ => {
                        return Err(ExprError::evaluation(format!(
                            "'{}' requires operands of the same type, got {} and {}",
                            op.literal(),
                            lhs.type_name(),
                            rhs.type_name()
                        )));
                    }
                };
                Ok(Value::Boolean(if op == BinOp::Equal { equal } else { !equal }))
            }
            BinOp::RegexMatch | BinOp::RegexNotMatch => {
                let text = self.eval_string(left, vars, op.literal())?;
                let pattern = self.eval_string(right, vars, op.literal())?;
                let matched = self.pattern(&pattern)?.is_match(&text);
                Ok(Value::Boolean(if op == BinOp::RegexMatch {
                    matched
                } else {
                    !matched
                }))
            }
        }
    }

    fn eval_bool(
        &mut self,
        expr: &Expr,
        vars: &dyn VariableResolver,
        op: &str,
    ) -> Result<bool, ExprError> {
        match self.eval(expr, vars)? {
            Value::Boolean(b) => Ok(b),
            other => Err(ExprError::evaluation(format!(
                "'{}' expects a boolean operand, got {}",
                op,
                other.type_name()
            ))),
        }
    }

    fn eval_string(
        &mut self,
        expr: &Expr,
        vars: &dyn VariableResolver,
        op: &str,
    ) -> Result<String, ExprError> {
        match self.eval(expr, vars)? {
            Value::String(s) => Ok(s),
            other => Err(ExprError::evaluation(format!(
                "'{}' expects a string operand, got {}",
                op,
                other.type_name()
            ))),
        }
    }

    fn pattern(&mut self, pattern: &str) -> Result<&Regex, ExprError> {
        // Patterns are usually literals, but a pattern built from a
        // variable changes per refresh; the cache resets at the cap so
        // it cannot grow without bound in a long-lived evaluator.
        if self.patterns.len() >= PATTERN_CACHE_LIMIT && !self.patterns.contains_key(pattern) {
            self.patterns.clear();
        }
        match self.patterns.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let compiled = Regex::new(pattern).map_err(|e| {
                    ExprError::evaluation(format!(
                        "invalid regular expression '{}': {}",
                        pattern, e
                    ))
                })?;
                Ok(entry.insert(compiled))
            }
        }
    }
}

/// First letter uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
