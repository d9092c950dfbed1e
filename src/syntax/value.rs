use std::fmt;

use crate::syntax::Term;

/// Result of evaluating a term. Functions keep their body unevaluated and
/// capture no environment: free variables are resolved by substitution when
/// the function is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    Unit,
    Fun(String, Box<Term>),
    Wildcard(Box<Term>),
    Nil,
    Cons(Box<Value>, Box<Value>),
}

impl Value {
    pub fn cons(head: Value, tail: Value) -> Value {
        Value::Cons(Box::new(head), Box::new(tail))
    }
}

/// Re-embed a value as a term so it can be substituted into a function body
impl From<Value> for Term {
    fn from(val: Value) -> Term {
        match val {
            Value::Bool(b) => Term::Bool(b),
            Value::Int(n) => Term::Int(n),
            Value::Str(s) => Term::Str(s),
            Value::Unit => Term::Unit,
            Value::Fun(param, body) => Term::Abs(param, body),
            Value::Wildcard(body) => Term::Wildcard(body),
            Value::Nil => Term::Nil,
            Value::Cons(head, tail) => {
                Term::cons(Term::from(*head), Term::from(*tail))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Unit => write!(f, "unit"),
            Value::Fun(_, _) | Value::Wildcard(_) => write!(f, "<fun>"),
            Value::Nil => write!(f, "[]"),
            Value::Cons(head, tail) => {
                let mut items = vec![head.to_string()];
                let mut rest: &Value = tail;
                while let Value::Cons(head, tail) = rest {
                    items.push(head.to_string());
                    rest = &**tail;
                }
                match rest {
                    Value::Nil => write!(f, "[{}]", items.join(", ")),
                    // improper list, only reachable through untyped terms
                    other => write!(f, "{} :: {}", items.join(" :: "), other),
                }
            }
        }
    }
}
