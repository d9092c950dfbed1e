use std::fmt;

use crate::syntax::{Substitutable, Type};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Bool(bool),
    Int(i64),
    Str(String),
    Unit,
    Var(String),
    Abs(String, Box<Term>),
    /// abstraction that ignores its argument
    Wildcard(Box<Term>),
    App(Box<Term>, Box<Term>),
    Add(Box<Term>, Box<Term>),
    Ascribe(Box<Term>, Type),
    If(Box<Term>, Box<Term>, Box<Term>),
    IsZero(Box<Term>),
    Nil,
    Cons(Box<Term>, Box<Term>),
    IsEmpty(Box<Term>),
    Head(Box<Term>),
    Tail(Box<Term>),
    Let(String, Box<Term>, Box<Term>),
}

impl Term {
    pub fn var<S: Into<String>>(name: S) -> Term {
        Term::Var(name.into())
    }

    pub fn string<S: Into<String>>(value: S) -> Term {
        Term::Str(value.into())
    }

    pub fn abs<S: Into<String>>(param: S, body: Term) -> Term {
        Term::Abs(param.into(), Box::new(body))
    }

    pub fn wildcard(body: Term) -> Term {
        Term::Wildcard(Box::new(body))
    }

    pub fn app(func: Term, arg: Term) -> Term {
        Term::App(Box::new(func), Box::new(arg))
    }

    pub fn add(lhs: Term, rhs: Term) -> Term {
        Term::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn ascribe(term: Term, ty: Type) -> Term {
        Term::Ascribe(Box::new(term), ty)
    }

    pub fn if_(cond: Term, then: Term, else_: Term) -> Term {
        Term::If(Box::new(cond), Box::new(then), Box::new(else_))
    }

    pub fn is_zero(term: Term) -> Term {
        Term::IsZero(Box::new(term))
    }

    pub fn cons(head: Term, tail: Term) -> Term {
        Term::Cons(Box::new(head), Box::new(tail))
    }

    /// Build a nil-terminated list out of `items`
    pub fn list<I: IntoIterator<Item = Term>>(items: I) -> Term
    where
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Term::Nil, |tail, head| Term::cons(head, tail))
    }

    pub fn is_empty(list: Term) -> Term {
        Term::IsEmpty(Box::new(list))
    }

    pub fn head(list: Term) -> Term {
        Term::Head(Box::new(list))
    }

    pub fn tail(list: Term) -> Term {
        Term::Tail(Box::new(list))
    }

    pub fn let_in<S: Into<String>>(name: S, val: Term, body: Term) -> Term {
        Term::Let(name.into(), Box::new(val), Box::new(body))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Bool(b) => write!(f, "{}", b),
            Term::Int(n) => write!(f, "{}", n),
            Term::Str(s) => write!(f, "{:?}", s),
            Term::Unit => write!(f, "unit"),
            Term::Var(s) => write!(f, "{}", s),
            Term::Abs(param, body) => write!(f, "(λ{}.{})", param, body),
            Term::Wildcard(body) => write!(f, "(λ_.{})", body),
            Term::App(func, arg) => write!(f, "({} {})", func, arg),
            Term::Add(l, r) => write!(f, "(+ {} {})", l, r),
            Term::Ascribe(t, ty) => write!(f, "({} : {})", t, ty),
            Term::If(cond, t1, t2) => write!(f, "(if {} {} {})", cond, t1, t2),
            Term::IsZero(t) => write!(f, "(isZero? {})", t),
            Term::Nil => write!(f, "nil"),
            Term::Cons(head, tail) => write!(f, "(cons {} {})", head, tail),
            Term::IsEmpty(t) => write!(f, "(isEmpty? {})", t),
            Term::Head(t) => write!(f, "(head {})", t),
            Term::Tail(t) => write!(f, "(tail {})", t),
            Term::Let(x, val, body) => write!(f, "(let {} = {} in {})", x, val, body),
        }
    }
}

/// Not capture avoiding: a free variable of `replacement` that shares its name
/// with a binder inside self ends up bound by that binder.
impl Substitutable<Term> for Term {
    fn substitute(self, name: &str, replacement: &Term) -> Term {
        use self::Term::*;
        let subst = |t: Box<Term>| Box::new((*t).substitute(name, replacement));
        match self {
            t @ Bool(_) | t @ Int(_) | t @ Str(_) | t @ Unit | t @ Nil => t,
            Var(s) => {
                if s == name {
                    replacement.clone()
                } else {
                    Var(s)
                }
            }
            Abs(param, body) => {
                if param != name {
                    Abs(param, subst(body))
                } else {
                    Abs(param, body)
                }
            }
            Wildcard(body) => Wildcard(subst(body)),
            App(func, arg) => App(subst(func), subst(arg)),
            Add(l, r) => Add(subst(l), subst(r)),
            Ascribe(t, ty) => Ascribe(subst(t), ty),
            If(cond, if_, else_) => If(subst(cond), subst(if_), subst(else_)),
            IsZero(t) => IsZero(subst(t)),
            Cons(head, tail) => Cons(subst(head), subst(tail)),
            IsEmpty(t) => IsEmpty(subst(t)),
            Head(t) => Head(subst(t)),
            Tail(t) => Tail(subst(t)),
            Let(x, val, body) => {
                if x != name {
                    Let(x, subst(val), subst(body))
                } else {
                    Let(x, subst(val), body)
                }
            }
        }
    }
}
