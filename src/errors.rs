use thiserror::Error;

use crate::syntax::{Term, Type, Value};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("eval error: cannot add {0} and {1}")]
    Addition(Term, Term),
    /// Not produced by any current rule
    #[error("eval error: ascription of {0} to {1} failed")]
    AscriptionFailed(Term, Type),
    #[error("eval error: expected {expected} but got {actual}")]
    WrongValue { actual: Value, expected: String },
    #[error("eval error: {0} is not a function")]
    NotAFunction(Term),
    #[error("eval error: unexpected free variable {0}")]
    UnexpectedVariable(String),
    #[error("eval error: isZero? expects an integer, got {0}")]
    IsZeroFailed(Term),
    /// Not produced by any current rule
    #[error("eval error: conditional on {0} failed")]
    ConditionalFailed(Term),
    /// Not produced by any current rule
    #[error("eval error: applying {0} to {1} failed")]
    ApplicationFailed(Term, Term),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum TypeError {
    /// Not produced by any current rule
    #[error("Type mismatch between {0} and {1}")]
    TypeMismatch(Type, Type),
    #[error("Expected {expected} but got {actual} in {term}")]
    BadTypeIn {
        term: Term,
        actual: Type,
        expected: Type,
    },
    #[error("Type check failed with type {expected} in {term}")]
    CheckFailed { term: Term, expected: Type },
    #[error("Variable {0} not found in context")]
    VariableNotInContext(String),
    #[error("Unification of {0} and {1} failed")]
    UnificationFailed(Type, Type),
}

/// Anything that can go wrong while the driver typechecks and runs a term
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
