use crate::assoclist::Context;
use crate::errors::TypeError;
use crate::syntax::{Term, Type};

pub mod bidirectional;
pub mod infer;
pub mod subst;
pub mod unify;

pub use self::subst::TypeSubstitution;
pub use self::unify::unify;

/// Either typing discipline, as a plain function so a driver can swap them
pub type TypeChecker = fn(&Term, &Context) -> Result<Type, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // terms both disciplines can type, with the annotations bidirectional
    // checking needs
    fn typeable() -> Vec<Term> {
        let int_fn = Type::arr(Type::Int, Type::Int);
        vec![
            Term::add(Term::Int(1), Term::Int(2)),
            Term::if_(Term::is_zero(Term::Int(0)), Term::string("a"), Term::string("b")),
            Term::app(
                Term::ascribe(
                    Term::abs("x", Term::add(Term::var("x"), Term::Int(2))),
                    int_fn.clone(),
                ),
                Term::Int(4),
            ),
            Term::ascribe(Term::wildcard(Term::Unit), Type::arr(Type::Bool, Type::Unit)),
            Term::tail(Term::list(vec![Term::Bool(true), Term::Bool(false)])),
            Term::is_empty(Term::ascribe(Term::Nil, Type::list(Type::Int))),
            Term::let_in(
                "f",
                Term::ascribe(Term::abs("n", Term::is_zero(Term::var("n"))), Type::arr(Type::Int, Type::Bool)),
                Term::cons(Term::app(Term::var("f"), Term::Int(3)), Term::Nil),
            ),
            Term::head(Term::list(vec![Term::ascribe(Term::abs("y", Term::var("y")), int_fn)])),
        ]
    }

    #[test]
    fn disciplines_agree() {
        let checkers: [TypeChecker; 2] = [bidirectional::infer, infer::typecheck];
        for term in typeable() {
            let types: Vec<_> = checkers
                .iter()
                .map(|typecheck| typecheck(&term, &Context::empty()))
                .collect();
            assert!(types[0].is_ok(), "{} failed: {:?}", term, types[0]);
            assert_eq!(types[0], types[1], "disagreement on {}", term);
        }
    }

    #[test]
    fn checking_agrees_with_inference() {
        for term in typeable() {
            let ty = infer::typecheck(&term, &Context::empty()).unwrap();
            assert_eq!(bidirectional::check(&term, &ty, &Context::empty()), Ok(true));
        }
    }
}
