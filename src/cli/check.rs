//! Evaluate caption expressions against variable bindings

use std::collections::HashMap;

use super::CliError;
use crate::{Evaluator, Lexer, Parser, Value};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The caption expression to evaluate
    pub expression: String,
    /// `name=value` bindings; the values `true`/`false` bind booleans
    pub vars: Vec<String>,
    /// JSON object of bindings; string, boolean, and number members accepted
    pub json: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of an eval operation
#[derive(Debug)]
pub enum EvalResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The rendered caption text
    Rendered(String),
}

/// Parse an expression and, unless `syntax_only` is set, evaluate it
/// against the given bindings. `--var` bindings win over JSON ones.
pub fn execute_eval(options: &EvalOptions) -> Result<EvalResult, CliError> {
    let lexer = Lexer::new(&options.expression);
    let mut parser = Parser::new(lexer);
    let expr = parser.parse()?;

    if options.syntax_only {
        return Ok(EvalResult::SyntaxValid);
    }

    let mut variables: HashMap<String, Value> = HashMap::new();
    if let Some(json) = &options.json {
        merge_json_bindings(&mut variables, json)?;
    }
    for binding in &options.vars {
        let (name, value) = parse_binding(binding)?;
        variables.insert(name, value);
    }

    let mut evaluator = Evaluator::new();
    let rendered = evaluator.eval_to_string(&expr, &variables)?;
    Ok(EvalResult::Rendered(rendered))
}

fn parse_binding(binding: &str) -> Result<(String, Value), CliError> {
    let Some((name, value)) = binding.split_once('=') else {
        return Err(CliError::BadBinding(binding.to_string()));
    };
    if name.is_empty() {
        return Err(CliError::BadBinding(binding.to_string()));
    }
    let value = match value {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        other => Value::String(other.to_string()),
    };
    Ok((name.to_string(), value))
}

fn merge_json_bindings(
    variables: &mut HashMap<String, Value>,
    json: &str,
) -> Result<(), CliError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Object(members) = parsed else {
        return Err(CliError::BadBinding(
            "JSON bindings must be an object".to_string(),
        ));
    };

    for (name, member) in members {
        let value = match member {
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // Numbers bind as their display text; the language has no
            // numeric type.
            serde_json::Value::Number(n) => Value::String(n.to_string()),
            _ => {
                return Err(CliError::BadBinding(format!(
                    "variable '{}' has an unsupported JSON type",
                    name
                )));
            }
        };
        variables.insert(name, value);
    }
    Ok(())
}
