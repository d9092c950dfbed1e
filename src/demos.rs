//! Example programs, built by hand since there is no surface syntax

use crate::syntax::{Term, Type};

pub const NAMES: [&str; 8] = [
    "add-after-is-zero",
    "ascribed-is-zero",
    "ascribed-conditional",
    "increment",
    "free-variable",
    "list-sum",
    "wildcard",
    "let-twice",
];

pub fn lookup(name: &str) -> Option<Term> {
    let term = match name {
        // if isZero? 0 then (λx. x + 2) 4 else false
        "add-after-is-zero" => Term::if_(
            Term::is_zero(Term::Int(0)),
            Term::app(
                Term::abs("x", Term::add(Term::var("x"), Term::Int(2))),
                Term::Int(4),
            ),
            Term::Bool(false),
        ),
        "ascribed-is-zero" => Term::app(
            Term::ascribe(
                Term::abs("x", Term::is_zero(Term::var("x"))),
                Type::arr(Type::Int, Type::Bool),
            ),
            Term::Int(1),
        ),
        "ascribed-conditional" => Term::app(
            Term::ascribe(
                Term::abs(
                    "x",
                    Term::if_(
                        Term::is_zero(Term::var("x")),
                        Term::Int(23),
                        Term::Int(100),
                    ),
                ),
                Type::arr(Type::Int, Type::Int),
            ),
            Term::Int(2),
        ),
        "increment" => Term::abs("x", Term::add(Term::var("x"), Term::Int(1))),
        "free-variable" => Term::app(Term::abs("x", Term::var("y")), Term::Int(1)),
        // head [1, 2] + head (tail [1, 2])
        "list-sum" => {
            let list = Term::list(vec![Term::Int(1), Term::Int(2)]);
            Term::add(Term::head(list.clone()), Term::head(Term::tail(list)))
        }
        "wildcard" => Term::app(Term::wildcard(Term::string("ignored")), Term::Unit),
        "let-twice" => Term::let_in(
            "twice",
            Term::abs(
                "f",
                Term::abs(
                    "a",
                    Term::app(Term::var("f"), Term::app(Term::var("f"), Term::var("a"))),
                ),
            ),
            Term::app(
                Term::app(
                    Term::var("twice"),
                    Term::abs("n", Term::add(Term::var("n"), Term::Int(10))),
                ),
                Term::Int(1),
            ),
        ),
        _ => return None,
    };
    Some(term)
}
