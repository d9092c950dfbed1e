//! Ordered type substitutions and the algebra used to chain them.

use std::fmt;
use std::iter::FromIterator;

use indexmap::IndexMap;

use crate::assoclist::Context;
use crate::syntax::{Substitutable, Type};

/// An ordered mapping from type variable names to types. Equality ignores
/// the order of entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeSubstitution {
    entries: IndexMap<String, Type>,
}

impl TypeSubstitution {
    pub fn empty() -> TypeSubstitution {
        TypeSubstitution::default()
    }

    pub fn singleton<S: Into<String>>(name: S, ty: Type) -> TypeSubstitution {
        let mut subst = TypeSubstitution::empty();
        subst.insert(name, ty);
        subst
    }

    /// Bind `name`, overwriting any existing binding for it
    pub fn insert<S: Into<String>>(&mut self, name: S, ty: Type) {
        self.entries.insert(name.into(), ty);
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Type)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Right-biased merge: on a shared name the binding from `other` wins
    pub fn merge(&mut self, other: TypeSubstitution) {
        for (name, ty) in other.entries {
            self.entries.insert(name, ty);
        }
    }

    pub fn merging(mut self, other: TypeSubstitution) -> TypeSubstitution {
        self.merge(other);
        self
    }

    /// Chain `later`, learned after self: every binding in self is rewritten
    /// through `later` before the two are merged, so the result never maps a
    /// variable to something `later` has since resolved.
    pub fn compose(&self, later: &TypeSubstitution) -> TypeSubstitution {
        let rewritten = TypeSubstitution {
            entries: self
                .entries
                .iter()
                .map(|(name, ty)| (name.clone(), later.apply(ty)))
                .collect(),
        };
        rewritten.merging(later.clone())
    }

    /// Rewrite `ty` one binding at a time, most recently added binding first
    pub fn apply(&self, ty: &Type) -> Type {
        self.entries
            .iter()
            .rev()
            .fold(ty.clone(), |acc, (name, replacement)| {
                acc.substitute(name, replacement)
            })
    }

    pub fn apply_context(&self, ctx: &Context) -> Context {
        ctx.map_val(|ty| self.apply(ty))
    }
}

impl FromIterator<(String, Type)> for TypeSubstitution {
    fn from_iter<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        TypeSubstitution {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TypeSubstitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.entries
                .iter()
                .map(|(name, ty)| format!("{}: {}", name, ty))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn subst(pairs: Vec<(&str, Type)>) -> TypeSubstitution {
        pairs
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty))
            .collect()
    }

    #[test]
    fn apply_single() {
        let sigma = subst(vec![("β", Type::Int)]);
        assert_eq!(
            sigma.apply(&Type::arr(Type::var("β"), Type::Bool)),
            Type::arr(Type::Int, Type::Bool)
        );
    }

    #[test]
    fn apply_chains_through_earlier_bindings() {
        let sigma = subst(vec![
            ("α", Type::arr(Type::Bool, Type::Bool)),
            ("β", Type::var("α")),
        ]);
        assert_eq!(sigma.apply(&Type::var("β")), Type::arr(Type::Bool, Type::Bool));

        let sigma = subst(vec![
            ("β", Type::var("γ")),
            ("α", Type::arr(Type::var("β"), Type::var("β"))),
        ]);
        let gamma_fn = Type::arr(Type::var("γ"), Type::var("γ"));
        assert_eq!(
            sigma.apply(&Type::arr(Type::var("α"), Type::var("α"))),
            Type::arr(gamma_fn.clone(), gamma_fn)
        );
    }

    #[test]
    fn merge_is_right_biased() {
        let left = subst(vec![("a", Type::Int), ("b", Type::Bool)]);
        let right = subst(vec![("a", Type::Str)]);
        let merged = left.merging(right);
        assert_eq!(merged.get("a"), Some(&Type::Str));
        assert_eq!(merged.get("b"), Some(&Type::Bool));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn compose_rewrites_earlier_bindings() {
        let first = TypeSubstitution::singleton("a", Type::var("b"));
        let second = TypeSubstitution::singleton("b", Type::Int);
        let composed = first.compose(&second);
        assert_eq!(composed, subst(vec![("a", Type::Int), ("b", Type::Int)]));
        assert_eq!(composed.apply(&Type::var("a")), Type::Int);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(
            subst(vec![("a", Type::Bool), ("b", Type::Int)]),
            subst(vec![("b", Type::Int), ("a", Type::Bool)])
        );
    }

    #[test]
    fn apply_to_context() {
        let ctx = Context::empty()
            .adding("x".into(), Type::var("a"))
            .adding("y".into(), Type::list(Type::var("b")));
        let sigma = subst(vec![("a", Type::Int), ("b", Type::Bool)]);
        assert_eq!(sigma.apply_context(&ctx).to_string(), "{x: Int, y: List<Bool>}");
    }

    #[test]
    fn display() {
        let sigma = subst(vec![("a", Type::Bool), ("b", Type::Int)]);
        assert_eq!(sigma.to_string(), "{a: Bool, b: Int}");
    }
}
