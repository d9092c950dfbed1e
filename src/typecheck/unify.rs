use log::debug;

use super::subst::TypeSubstitution;
use crate::errors::TypeError;
use crate::syntax::Type;

/// Find the most general substitution making `left` and `right` equal
pub fn unify(left: &Type, right: &Type) -> Result<TypeSubstitution, TypeError> {
    match (left, right) {
        (l, r) if l == r => Ok(TypeSubstitution::empty()),
        (Type::Var(s), ty) if !ty.occurs(s) => Ok(bind(s, ty)),
        (ty, Type::Var(s)) if !ty.occurs(s) => Ok(bind(s, ty)),
        (Type::Arr(from1, to1), Type::Arr(from2, to2)) => {
            let sigma = unify(from1, from2)?;
            let tau = unify(&sigma.apply(to1), &sigma.apply(to2))?;
            Ok(sigma.compose(&tau))
        }
        (Type::List(elem1), Type::List(elem2)) => unify(elem1, elem2),
        (l, r) => Err(TypeError::UnificationFailed(l.clone(), r.clone())),
    }
}

fn bind(name: &str, ty: &Type) -> TypeSubstitution {
    debug!("unify: binding {} to {}", name, ty);
    TypeSubstitution::singleton(name, ty.clone())
}
