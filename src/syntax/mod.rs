pub mod term;
pub mod ty;
pub mod value;

pub use self::term::Term;
pub use self::ty::Type;
pub use self::value::Value;

pub trait Substitutable<T> {
    /// Replace the free occurrences of `name` in Self with `replacement`,
    /// respecting local scopes
    fn substitute(self, name: &str, replacement: &T) -> Self;
}
