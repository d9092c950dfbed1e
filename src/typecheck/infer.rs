//! Type inference with unification (Hindley-Milner without let polymorphism)
//!
//! `infer` walks the term bottom up and returns the type of each subterm
//! together with the substitution learned while inferring it. Whatever has
//! been learned so far is applied to the context before the next sibling is
//! visited.

use std::collections::HashSet;

use log::{debug, trace};

use super::subst::TypeSubstitution;
use super::unify::unify;
use crate::assoclist::Context;
use crate::errors::TypeError;
use crate::syntax::{Term, Type};

const ALPHABET: [&str; 23] = [
    "α", "β", "γ", "δ", "ε", "ζ", "η", "θ", "ι", "κ", "μ", "ν", "ξ", "ο", "π",
    "ρ", "σ", "τ", "υ", "φ", "χ", "ψ", "ω",
];

pub fn typecheck(term: &Term, context: &Context) -> Result<Type, TypeError> {
    let mut inference = Inference::new(context);
    inference.vars.reserve_ascribed(term);
    let (ty, sigma) = inference.infer(term, context)?;
    Ok(sigma.apply(&ty))
}

/// Hands out type variable names that have not been used yet in one
/// inference run. Once the alphabet is exhausted it starts over with a
/// numeric suffix: α1, β1, ..., ω1, α2, ...
#[derive(Debug, Default)]
pub struct FreshVars {
    issued: HashSet<String>,
    next: usize,
}

impl FreshVars {
    /// Names already present in `context` are never handed out. Variables
    /// written in ascriptions are added with `reserve_ascribed`.
    pub fn avoiding(context: &Context) -> FreshVars {
        FreshVars {
            issued: context
                .iter()
                .flat_map(|(_, ty)| ty.free_vars())
                .collect(),
            next: 0,
        }
    }

    /// Also avoid every type variable written in an ascription inside `term`
    pub fn reserve_ascribed(&mut self, term: &Term) {
        match term {
            Term::Bool(_) | Term::Int(_) | Term::Str(_) | Term::Unit | Term::Nil => {}
            Term::Var(_) => {}
            Term::Ascribe(t, ty) => {
                self.issued.extend(ty.free_vars());
                self.reserve_ascribed(t);
            }
            Term::Abs(_, t)
            | Term::Wildcard(t)
            | Term::IsZero(t)
            | Term::IsEmpty(t)
            | Term::Head(t)
            | Term::Tail(t) => self.reserve_ascribed(t),
            Term::App(l, r) | Term::Add(l, r) | Term::Cons(l, r) | Term::Let(_, l, r) => {
                self.reserve_ascribed(l);
                self.reserve_ascribed(r);
            }
            Term::If(cond, t1, t2) => {
                self.reserve_ascribed(cond);
                self.reserve_ascribed(t1);
                self.reserve_ascribed(t2);
            }
        }
    }

    pub fn fresh(&mut self) -> Type {
        loop {
            let round = self.next / ALPHABET.len();
            let letter = ALPHABET[self.next % ALPHABET.len()];
            self.next += 1;
            let name = if round == 0 {
                letter.to_string()
            } else {
                format!("{}{}", letter, round)
            };
            if self.issued.insert(name.clone()) {
                debug!("fresh type variable {}", name);
                return Type::Var(name);
            }
        }
    }
}

struct Inference {
    vars: FreshVars,
}

impl Inference {
    fn new(context: &Context) -> Inference {
        Inference {
            vars: FreshVars::avoiding(context),
        }
    }

    fn infer(
        &mut self,
        term: &Term,
        context: &Context,
    ) -> Result<(Type, TypeSubstitution), TypeError> {
        let (ty, sigma) = self.infer_inner(term, context)?;
        trace!("infer: {} : {} with {}", term, ty, sigma);
        Ok((ty, sigma))
    }

    fn infer_inner(
        &mut self,
        term: &Term,
        context: &Context,
    ) -> Result<(Type, TypeSubstitution), TypeError> {
        match term {
            Term::Bool(_) => Ok((Type::Bool, TypeSubstitution::empty())),
            Term::Int(_) => Ok((Type::Int, TypeSubstitution::empty())),
            Term::Str(_) => Ok((Type::Str, TypeSubstitution::empty())),
            Term::Unit => Ok((Type::Unit, TypeSubstitution::empty())),
            Term::Nil => Ok((Type::list(self.vars.fresh()), TypeSubstitution::empty())),
            Term::Var(s) => context
                .lookup(s.as_str())
                .map(|ty| (ty.clone(), TypeSubstitution::empty()))
                .ok_or_else(|| TypeError::VariableNotInContext(s.clone())),
            Term::IsZero(t) => {
                let (ty, sigma) = self.infer(t, context)?;
                let sigma = sigma.compose(&unify(&ty, &Type::Int)?);
                Ok((Type::Bool, sigma))
            }
            Term::Add(left, right) => {
                let (left_ty, sigma) = self.infer(left, context)?;
                let (right_ty, tau) = self.infer(right, &sigma.apply_context(context))?;
                let sigma = sigma.compose(&tau);
                let sigma = sigma.compose(&unify(&sigma.apply(&left_ty), &Type::Int)?);
                let sigma = sigma.compose(&unify(&sigma.apply(&right_ty), &Type::Int)?);
                Ok((Type::Int, sigma))
            }
            Term::Ascribe(t, ascribed) => {
                let (ty, sigma) = self.infer(t, context)?;
                let sigma = sigma.compose(&unify(&sigma.apply(ascribed), &ty)?);
                Ok((sigma.apply(ascribed), sigma))
            }
            Term::If(cond, if_, else_) => {
                let (cond_ty, sigma) = self.infer(cond, context)?;
                let sigma = sigma.compose(&unify(&cond_ty, &Type::Bool)?);
                let (if_ty, tau) = self.infer(if_, &sigma.apply_context(context))?;
                let sigma = sigma.compose(&tau);
                let (else_ty, tau) = self.infer(else_, &sigma.apply_context(context))?;
                let sigma = sigma.compose(&tau);
                let sigma = sigma.compose(&unify(&sigma.apply(&if_ty), &else_ty)?);
                Ok((sigma.apply(&if_ty), sigma))
            }
            Term::Abs(param, body) => {
                let param_ty = self.vars.fresh();
                let inner = context.adding(param.clone(), param_ty.clone());
                let (body_ty, sigma) = self.infer(body, &inner)?;
                Ok((Type::arr(sigma.apply(&param_ty), body_ty), sigma))
            }
            Term::Wildcard(body) => {
                let param_ty = self.vars.fresh();
                let (body_ty, sigma) = self.infer(body, context)?;
                Ok((Type::arr(param_ty, body_ty), sigma))
            }
            Term::App(func, arg) => {
                let (func_ty, sigma) = self.infer(func, context)?;
                let (arg_ty, tau) = self.infer(arg, &sigma.apply_context(context))?;
                let sigma = sigma.compose(&tau);
                let result_ty = self.vars.fresh();
                let sigma = sigma.compose(&unify(
                    &sigma.apply(&func_ty),
                    &Type::arr(arg_ty, result_ty.clone()),
                )?);
                Ok((sigma.apply(&result_ty), sigma))
            }
            Term::Cons(head, tail) => {
                let (head_ty, sigma) = self.infer(head, context)?;
                let (tail_ty, tau) = self.infer(tail, &sigma.apply_context(context))?;
                let sigma = sigma.compose(&tau);
                let sigma =
                    sigma.compose(&unify(&Type::list(sigma.apply(&head_ty)), &tail_ty)?);
                Ok((sigma.apply(&tail_ty), sigma))
            }
            Term::IsEmpty(list) => {
                let (_, sigma) = self.infer_list(list, context)?;
                Ok((Type::Bool, sigma))
            }
            Term::Head(list) => self.infer_list(list, context),
            Term::Tail(list) => {
                let (elem_ty, sigma) = self.infer_list(list, context)?;
                Ok((Type::list(elem_ty), sigma))
            }
            // the bound type is not generalized, so every use of x shares it
            Term::Let(x, val, body) => {
                let (val_ty, sigma) = self.infer(val, context)?;
                let inner = sigma.apply_context(context).adding(x.clone(), val_ty);
                let (body_ty, tau) = self.infer(body, &inner)?;
                Ok((body_ty, sigma.compose(&tau)))
            }
        }
    }

    /// Infer the type of a list operand and return its element type
    fn infer_list(
        &mut self,
        list: &Term,
        context: &Context,
    ) -> Result<(Type, TypeSubstitution), TypeError> {
        let (list_ty, sigma) = self.infer(list, context)?;
        let elem_ty = self.vars.fresh();
        let sigma = sigma.compose(&unify(&list_ty, &Type::list(elem_ty.clone()))?);
        Ok((sigma.apply(&elem_ty), sigma))
    }
}
