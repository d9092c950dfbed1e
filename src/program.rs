use log::debug;

use crate::assoclist::Context;
use crate::errors::Error;
use crate::eval::evaluate;
use crate::syntax::{Term, Type, Value};
use crate::typecheck::TypeChecker;

/// Typechecks a term with the selected discipline, then runs it
pub struct Program {
    context: Context,
    typecheck: TypeChecker,
}

impl Program {
    pub const fn new() -> Program {
        Program {
            context: Context::empty(),
            typecheck: crate::typecheck::infer::typecheck,
        }
    }

    pub fn with_typechecker(typecheck: TypeChecker) -> Program {
        Program {
            typecheck,
            ..Program::new()
        }
    }

    /// Typing context the term is checked in. Evaluation still needs the
    /// term to be closed, so this is only useful for typechecking open terms.
    pub fn with_context(mut self, context: Context) -> Program {
        self.context = context;
        self
    }

    pub fn set_typechecker(&mut self, typecheck: TypeChecker) {
        self.typecheck = typecheck;
    }

    pub fn typecheck(&self, term: &Term) -> Result<Type, Error> {
        Ok((self.typecheck)(term, &self.context)?)
    }

    pub fn run(&self, term: &Term) -> Result<(Value, Type), Error> {
        let ty = self.typecheck(term)?;
        debug!("{} : {}", term, ty);
        let val = evaluate(term)?;
        Ok((val, ty))
    }

    /// Render the result of running `term` as `value: type`, or the error
    pub fn describe(&self, term: &Term) -> String {
        self.run(term)
            .map(|(val, ty)| format!("{}: {}", val, ty))
            .unwrap_or_else(|err| err.to_string())
    }
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}
