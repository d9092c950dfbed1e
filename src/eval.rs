//! Call-by-value big-step evaluation. Reduction is purely substitution based:
//! there is no environment, so the top-level term must be closed.

use log::trace;

use crate::errors::EvalError;
use crate::syntax::{Substitutable, Term, Value};

pub fn evaluate(term: &Term) -> Result<Value, EvalError> {
    match term {
        Term::Bool(b) => Ok(Value::Bool(*b)),
        Term::Int(n) => Ok(Value::Int(*n)),
        Term::Str(s) => Ok(Value::Str(s.clone())),
        Term::Unit => Ok(Value::Unit),
        Term::Nil => Ok(Value::Nil),
        Term::Abs(param, body) => Ok(Value::Fun(param.clone(), body.clone())),
        Term::Wildcard(body) => Ok(Value::Wildcard(body.clone())),
        Term::Var(s) => Err(EvalError::UnexpectedVariable(s.clone())),
        // a failing operand reports its own error, only a bad sum is Addition
        Term::Add(left, right) => {
            let sum = match (evaluate(left)?, evaluate(right)?) {
                (Value::Int(a), Value::Int(b)) => a.checked_add(b),
                _ => None,
            };
            sum.map(Value::Int).ok_or_else(|| {
                EvalError::Addition((**left).clone(), (**right).clone())
            })
        }
        Term::App(func, arg) => match evaluate(func)? {
            Value::Fun(param, body) => {
                let arg = Term::from(evaluate(arg)?);
                evaluate(&substitute_logged(*body, &param, &arg))
            }
            Value::Wildcard(body) => {
                // the argument is still evaluated, it just goes unused
                evaluate(arg)?;
                evaluate(&body)
            }
            _ => Err(EvalError::NotAFunction((**func).clone())),
        },
        Term::If(cond, t1, t2) => match evaluate(cond)? {
            Value::Bool(true) => evaluate(t1),
            Value::Bool(false) => evaluate(t2),
            actual => Err(EvalError::WrongValue {
                actual,
                expected: "a boolean value".into(),
            }),
        },
        Term::IsZero(t) => match evaluate(t)? {
            Value::Int(n) => Ok(Value::Bool(n == 0)),
            _ => Err(EvalError::IsZeroFailed((**t).clone())),
        },
        Term::Ascribe(t, _) => evaluate(t),
        Term::Cons(head, tail) => {
            let head = evaluate(head)?;
            let tail = evaluate(tail)?;
            Ok(Value::cons(head, tail))
        }
        Term::IsEmpty(list) => match evaluate(list)? {
            Value::Nil => Ok(Value::Bool(true)),
            Value::Cons(_, _) => Ok(Value::Bool(false)),
            actual => Err(EvalError::WrongValue {
                actual,
                expected: "a list value".into(),
            }),
        },
        Term::Head(list) => match evaluate(list)? {
            Value::Cons(head, _) => Ok(*head),
            actual => Err(EvalError::WrongValue {
                actual,
                expected: "a non-empty list".into(),
            }),
        },
        Term::Tail(list) => match evaluate(list)? {
            Value::Cons(_, tail) => Ok(*tail),
            actual => Err(EvalError::WrongValue {
                actual,
                expected: "a non-empty list".into(),
            }),
        },
        // sugar for an immediate application, except the bound term is
        // substituted before it is evaluated
        Term::Let(x, val, body) => {
            evaluate(&substitute_logged((**body).clone(), x, val))
        }
    }
}

fn substitute_logged(term: Term, name: &str, replacement: &Term) -> Term {
    trace!("replacing {} with {} in {}", name, replacement, term);
    let result = term.substitute(name, replacement);
    trace!("substitution result: {}", result);
    result
}
