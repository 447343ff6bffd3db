//! Stack evaluation of postfix (RPN) arithmetic expressions.
//!
//! By the time an expression reaches this evaluator every cell reference has
//! been substituted away, so valid tokens are numeric literals or one of
//! `+ - * /`.

use crate::error::{EngineError, Result};

/// Evaluate a fully-numeric postfix expression.
///
/// Binary operators pop their right operand first: `10 4 -` is 6 and
/// `8 2 /` is 4. Division follows IEEE-754, so a zero divisor yields an
/// infinity rather than an error. The result is the final stack top.
pub fn eval_rpn(expr: &str) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in expr.split_whitespace() {
        let value = match token {
            "+" => {
                let (a, b) = pop_operands(&mut stack, "+")?;
                a + b
            }
            "-" => {
                let (a, b) = pop_operands(&mut stack, "-")?;
                a - b
            }
            "*" => {
                let (a, b) = pop_operands(&mut stack, "*")?;
                a * b
            }
            "/" => {
                let (a, b) = pop_operands(&mut stack, "/")?;
                a / b
            }
            _ => token
                .parse::<f64>()
                .map_err(|_| EngineError::InvalidToken(token.to_string()))?,
        };
        stack.push(value);
    }

    stack.pop().ok_or(EngineError::EmptyExpression)
}

fn pop_operands(stack: &mut Vec<f64>, op: &'static str) -> Result<(f64, f64)> {
    let b = stack.pop().ok_or(EngineError::StackUnderflow { op })?;
    let a = stack.pop().ok_or(EngineError::StackUnderflow { op })?;
    Ok((a, b))
}
