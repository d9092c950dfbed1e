use std::collections::BTreeSet;
use std::fmt;

use crate::syntax::Substitutable;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int,
    Arr(Box<Type>, Box<Type>),
    Unit,
    Str,
    List(Box<Type>),
    /// a type variable, only ever produced by unification inference or
    /// supplied by the caller through a context
    Var(String),
}

impl Type {
    pub fn arr(from: Type, to: Type) -> Type {
        Type::Arr(Box::new(from), Box::new(to))
    }

    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    pub fn var<S: Into<String>>(name: S) -> Type {
        Type::Var(name.into())
    }

    /// Whether the type variable `name` appears anywhere inside self
    pub fn occurs(&self, name: &str) -> bool {
        match self {
            Type::Bool | Type::Int | Type::Unit | Type::Str => false,
            Type::Arr(from, to) => from.occurs(name) || to.occurs(name),
            Type::List(elem) => elem.occurs(name),
            Type::Var(s) => s == name,
        }
    }

    pub fn free_vars(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<String>) {
        match self {
            Type::Bool | Type::Int | Type::Unit | Type::Str => (),
            Type::Arr(from, to) => {
                from.collect_vars(vars);
                to.collect_vars(vars);
            }
            Type::List(elem) => elem.collect_vars(vars),
            Type::Var(s) => {
                vars.insert(s.clone());
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "Bool"),
            Type::Int => write!(f, "Int"),
            Type::Arr(from, to) => write!(f, "({} -> {})", from, to),
            Type::Unit => write!(f, "Unit"),
            Type::Str => write!(f, "String"),
            Type::List(elem) => write!(f, "List<{}>", elem),
            Type::Var(s) => write!(f, "{}", s),
        }
    }
}

impl Substitutable<Type> for Type {
    fn substitute(self, name: &str, replacement: &Type) -> Type {
        use self::Type::*;
        match self {
            t @ Bool | t @ Int | t @ Unit | t @ Str => t,
            Arr(from, to) => Arr(
                Box::new(from.substitute(name, replacement)),
                Box::new(to.substitute(name, replacement)),
            ),
            List(elem) => List(Box::new(elem.substitute(name, replacement))),
            Var(s) => {
                if s == name {
                    replacement.clone()
                } else {
                    Var(s)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ty_subst() {
        let replacement = Type::Int;
        assert_eq!(Type::var("X").substitute("X", &replacement), Type::Int);
        assert_eq!(
            Type::arr(Type::var("X"), Type::list(Type::var("Y")))
                .substitute("X", &replacement),
            Type::arr(Type::Int, Type::list(Type::var("Y")))
        );
        assert_eq!(Type::var("Y").substitute("X", &replacement), Type::var("Y"));
    }

    #[test]
    fn occurs_check() {
        let ty = Type::arr(Type::Int, Type::list(Type::var("a")));
        assert!(ty.occurs("a"));
        assert!(!ty.occurs("b"));
        assert!(!Type::Bool.occurs("a"));
    }

    #[test]
    fn free_vars() {
        let ty = Type::arr(Type::var("b"), Type::arr(Type::var("a"), Type::var("b")));
        let vars: Vec<String> = ty.free_vars().into_iter().collect();
        assert_eq!(vars, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn display() {
        assert_eq!(
            Type::arr(Type::Int, Type::arr(Type::Bool, Type::Str)).to_string(),
            "(Int -> (Bool -> String))"
        );
        assert_eq!(Type::list(Type::list(Type::Unit)).to_string(), "List<List<Unit>>");
        assert_eq!(Type::var("α").to_string(), "α");
    }
}
