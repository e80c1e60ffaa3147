//! Reverse Polish Notation evaluation.
//!
//! Operands are pushed; an operator pops its right then left operand and
//! pushes the result. Division truncates toward zero. All arithmetic is
//! checked, and a well-formed expression leaves exactly one value behind.

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    fn apply(self, lhs: i64, rhs: i64, position: usize) -> Result<i64> {
        let value = match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => {
                if rhs == 0 {
                    return Err(EngineError::DivisionByZero { position });
                }
                lhs.checked_div(rhs)
            }
        };
        value.ok_or(EngineError::Overflow { position })
    }
}

/// Evaluate an RPN token stream such as `["2", "1", "+", "3", "*"]`.
///
/// # Errors
/// - [`EngineError::MalformedExpression`] for empty input, unknown tokens,
///   operators without two operands, or operands left over at the end.
/// - [`EngineError::DivisionByZero`] and [`EngineError::Overflow`] for
///   arithmetic failures, tagged with the offending token position.
pub fn eval_rpn<S: AsRef<str>>(tokens: &[S]) -> Result<i64> {
    let mut operands: Vec<i64> = Vec::with_capacity(tokens.len() / 2 + 1);

    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if let Some(op) = Op::parse(token) {
            let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                return Err(EngineError::malformed(
                    position,
                    format!("operator `{token}` needs two operands"),
                ));
            };
            operands.push(op.apply(lhs, rhs, position)?);
        } else {
            let value = token.parse::<i64>().map_err(|_| {
                EngineError::malformed(position, format!("unrecognized token `{token}`"))
            })?;
            operands.push(value);
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(EngineError::malformed(0, "empty expression")),
        [..] => Err(EngineError::malformed(
            tokens.len(),
            format!("{} operands left without an operator", operands.len()),
        )),
    }
}
