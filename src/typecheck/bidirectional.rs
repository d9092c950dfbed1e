//! Bidirectional typechecking: `check` pushes a known type into a term, `infer`
//! synthesizes one. Neither produces type variables, so unannotated functions
//! only typecheck when checked against a function type or ascribed.

use log::debug;

use crate::assoclist::Context;
use crate::errors::TypeError;
use crate::syntax::{Term, Type};

/// Does `term` have type `ty` under `context`?
///
/// The fallback rule infers a type and compares it with `ty`. If inference
/// fails, the failure is logged and reported as `false`, so the reason it
/// failed is lost to the caller.
pub fn check(term: &Term, ty: &Type, context: &Context) -> Result<bool, TypeError> {
    match (term, ty) {
        (Term::Abs(param, body), Type::Arr(from, to)) => {
            check(body, to, &context.adding(param.clone(), (**from).clone()))
        }
        (Term::Wildcard(body), Type::Arr(_, to)) => check(body, to, context),
        (Term::Abs(_, _), _) | (Term::Wildcard(_), _) => Ok(false),
        (Term::Nil, Type::List(_)) => Ok(true),
        _ => match infer(term, context) {
            Ok(inferred) => Ok(inferred == *ty),
            Err(err) => {
                debug!("check: {} against {} failed: {}", term, ty, err);
                Ok(false)
            }
        },
    }
}

pub fn infer(term: &Term, context: &Context) -> Result<Type, TypeError> {
    match term {
        Term::Bool(_) => Ok(Type::Bool),
        Term::Int(_) => Ok(Type::Int),
        Term::Str(_) => Ok(Type::Str),
        Term::Unit => Ok(Type::Unit),
        Term::Var(s) => context
            .lookup(s.as_str())
            .cloned()
            .ok_or_else(|| TypeError::VariableNotInContext(s.clone())),
        Term::Add(left, right) => {
            require(left, &Type::Int, context)?;
            require(right, &Type::Int, context)?;
            Ok(Type::Int)
        }
        Term::IsZero(t) => {
            require(t, &Type::Int, context)?;
            Ok(Type::Bool)
        }
        Term::If(cond, if_, else_) => {
            require(cond, &Type::Bool, context)?;
            let ty = infer(if_, context)?;
            require(else_, &ty, context)?;
            Ok(ty)
        }
        Term::App(func, arg) => match infer(func, context)? {
            Type::Arr(from, to) => {
                require(arg, &from, context)?;
                Ok(*to)
            }
            actual => Err(TypeError::BadTypeIn {
                term: (**func).clone(),
                actual,
                expected: Type::arr(unknown(), unknown()),
            }),
        },
        Term::Ascribe(t, ty) => {
            require(t, ty, context)?;
            Ok(ty.clone())
        }
        // the parameter type cannot be synthesized, only checked
        Term::Abs(_, _) | Term::Wildcard(_) => Err(TypeError::CheckFailed {
            term: term.clone(),
            expected: Type::arr(unknown(), unknown()),
        }),
        Term::Nil => Err(TypeError::CheckFailed {
            term: term.clone(),
            expected: Type::list(unknown()),
        }),
        Term::Cons(head, tail) => {
            let elem = infer(head, context)?;
            let list = Type::list(elem);
            require(tail, &list, context)?;
            Ok(list)
        }
        Term::IsEmpty(list) => infer_elem(list, context).map(|_| Type::Bool),
        Term::Head(list) => infer_elem(list, context),
        Term::Tail(list) => infer_elem(list, context).map(Type::list),
        Term::Let(x, val, body) => {
            let ty = infer(val, context)?;
            infer(body, &context.adding(x.clone(), ty))
        }
    }
}

/// Stand-in for a type the checker has no way of knowing, used in errors
fn unknown() -> Type {
    Type::var("?")
}

fn require(term: &Term, ty: &Type, context: &Context) -> Result<(), TypeError> {
    if check(term, ty, context)? {
        Ok(())
    } else {
        Err(TypeError::CheckFailed {
            term: term.clone(),
            expected: ty.clone(),
        })
    }
}

/// Infer the type of a list operand and return its element type
fn infer_elem(list: &Term, context: &Context) -> Result<Type, TypeError> {
    match infer(list, context)? {
        Type::List(elem) => Ok(*elem),
        actual => Err(TypeError::BadTypeIn {
            term: list.clone(),
            actual,
            expected: Type::list(unknown()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn infer_term(term: &Term) -> String {
        infer(term, &Context::empty())
            .map(|ty| ty.to_string())
            .unwrap_or_else(|err| err.to_string())
    }

    fn int_to_int() -> Type {
        Type::arr(Type::Int, Type::Int)
    }

    #[test]
    fn check_functions() {
        let id = Term::abs("x", Term::var("x"));
        assert_eq!(check(&id, &int_to_int(), &Context::empty()), Ok(true));
        assert_eq!(check(&id, &Type::Int, &Context::empty()), Ok(false));
        assert_eq!(
            check(&id, &Type::arr(Type::Int, Type::Bool), &Context::empty()),
            Ok(false)
        );
    }

    #[test]
    fn check_wildcard_does_not_bind() {
        let ctx = Context::empty().adding("y".into(), Type::Str);
        let konst = Term::wildcard(Term::var("y"));
        assert_eq!(check(&konst, &Type::arr(Type::Int, Type::Str), &ctx), Ok(true));
        assert_eq!(check(&konst, &Type::arr(Type::Int, Type::Int), &ctx), Ok(false));
    }

    #[test]
    fn check_nil_against_any_list() {
        let ctx = Context::empty();
        assert_eq!(check(&Term::Nil, &Type::list(Type::Int), &ctx), Ok(true));
        assert_eq!(check(&Term::Nil, &Type::list(int_to_int()), &ctx), Ok(true));
        assert_eq!(check(&Term::Nil, &Type::Int, &ctx), Ok(false));
    }

    #[test]
    fn infer_base() {
        assert_eq!(infer_term(&Term::Bool(true)), "Bool");
        assert_eq!(infer_term(&Term::string("s")), "String");
        assert_eq!(infer_term(&Term::Unit), "Unit");
        assert_eq!(
            infer_term(&Term::add(Term::Int(1), Term::Int(2))),
            "Int"
        );
        assert_eq!(
            infer_term(&Term::add(Term::Int(1), Term::Bool(true))),
            "Type check failed with type Int in true"
        );
        assert_eq!(
            infer_term(&Term::var("x")),
            "Variable x not found in context"
        );
    }

    #[test]
    fn infer_conditional() {
        assert_eq!(
            infer_term(&Term::if_(Term::Bool(true), Term::Int(0), Term::Int(2))),
            "Int"
        );
        assert_eq!(
            infer_term(&Term::if_(Term::Int(0), Term::Int(0), Term::Int(2))),
            "Type check failed with type Bool in 0"
        );
        assert_eq!(
            infer_term(&Term::if_(Term::Bool(true), Term::Int(0), Term::Bool(false))),
            "Type check failed with type Int in false"
        );
    }

    #[test]
    fn infer_application_needs_annotation() {
        let inc = Term::abs("x", Term::add(Term::var("x"), Term::Int(1)));
        assert_eq!(
            infer_term(&Term::app(inc.clone(), Term::Int(0))),
            "Type check failed with type (? -> ?) in (λx.(+ x 1))"
        );
        assert_eq!(
            infer_term(&Term::app(Term::ascribe(inc, int_to_int()), Term::Int(0))),
            "Int"
        );
        assert_eq!(
            infer_term(&Term::app(Term::Int(3), Term::Int(4))),
            "Expected (? -> ?) but got Int in 3"
        );
    }

    #[test]
    fn infer_ascribed_is_zero() {
        let term = Term::app(
            Term::ascribe(
                Term::abs("x", Term::is_zero(Term::var("x"))),
                Type::arr(Type::Int, Type::Bool),
            ),
            Term::Int(1),
        );
        assert_eq!(infer_term(&term), "Bool");
    }

    #[test]
    fn infer_lists() {
        let list = Term::list(vec![Term::Int(1), Term::Int(2)]);
        assert_eq!(infer_term(&list), "List<Int>");
        assert_eq!(infer_term(&Term::head(list.clone())), "Int");
        assert_eq!(infer_term(&Term::tail(list.clone())), "List<Int>");
        assert_eq!(infer_term(&Term::is_empty(list)), "Bool");
        assert_eq!(
            infer_term(&Term::cons(Term::Int(1), Term::list(vec![Term::Bool(true)]))),
            "Type check failed with type List<Int> in (cons true nil)"
        );
        assert_eq!(
            infer_term(&Term::Nil),
            "Type check failed with type List<?> in nil"
        );
        assert_eq!(
            infer_term(&Term::ascribe(Term::Nil, Type::list(Type::Str))),
            "List<String>"
        );
        assert_eq!(
            infer_term(&Term::head(Term::Int(1))),
            "Expected List<?> but got Int in 1"
        );
    }

    #[test]
    fn infer_let() {
        let term = Term::let_in(
            "f",
            Term::ascribe(
                Term::abs("x", Term::add(Term::var("x"), Term::var("x"))),
                int_to_int(),
            ),
            Term::app(Term::var("f"), Term::Int(2)),
        );
        assert_eq!(infer_term(&term), "Int");
    }

    #[test]
    fn context_is_not_leaked_between_siblings() {
        // (λx. x) checked as Int -> Int must not make x visible afterwards
        let term = Term::add(
            Term::app(Term::ascribe(Term::abs("x", Term::var("x")), int_to_int()), Term::Int(1)),
            Term::var("x"),
        );
        assert_eq!(infer_term(&term), "Type check failed with type Int in x");
    }
}
