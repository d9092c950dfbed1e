//! A small lambda calculus with booleans, integers, strings, unit, lists and
//! monomorphic let, together with a substitution-based evaluator and two
//! independent typing disciplines over the same terms: bidirectional checking
//! and unification-based inference.

pub mod assoclist;
pub mod demos;
pub mod errors;
pub mod eval;
pub mod program;
pub mod syntax;
pub mod typecheck;
pub mod wasm;

pub use assoclist::Context;
pub use errors::{Error, EvalError, TypeError};
pub use program::Program;
pub use syntax::{Term, Type, Value};
pub use typecheck::TypeSubstitution;

/// Run a closed term to a value
pub fn evaluate(term: &Term) -> Result<Value, EvalError> {
    eval::evaluate(term)
}

/// Bidirectional checking mode: does `term` have type `ty`?
pub fn check_type(term: &Term, ty: &Type, context: &Context) -> Result<bool, TypeError> {
    typecheck::bidirectional::check(term, ty, context)
}

/// Bidirectional inference mode: unannotated functions are rejected
pub fn infer_type_bidirectional(term: &Term, context: &Context) -> Result<Type, TypeError> {
    typecheck::bidirectional::infer(term, context)
}

/// Principal type of `term` by unification, fully substituted
pub fn infer_type_unification(term: &Term, context: &Context) -> Result<Type, TypeError> {
    typecheck::infer::typecheck(term, context)
}

pub fn unify_types(left: &Type, right: &Type) -> Result<TypeSubstitution, TypeError> {
    typecheck::unify(left, right)
}
