use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::demos;
use crate::program::Program;
use crate::typecheck::{bidirectional, infer, TypeChecker};

thread_local! {
    static PROGRAM: RefCell<Program> = RefCell::new(Program::new());
}

/// 0 selects bidirectional checking, 1 unification inference. Returns whether
/// the selector was recognized; an unknown one leaves the current choice.
#[wasm_bindgen]
pub fn set_typechecker(serialized: u8) -> bool {
    let typecheck: TypeChecker = match serialized {
        0b0000_0000 => bidirectional::infer,
        0b0000_0001 => infer::typecheck,
        _ => return false,
    };
    PROGRAM.with(|prog| prog.borrow_mut().set_typechecker(typecheck));
    true
}

#[wasm_bindgen]
pub fn run_demo(name: &str) -> String {
    match demos::lookup(name) {
        Some(term) => PROGRAM.with(|prog| prog.borrow().describe(&term)),
        None => format!("no demo named {}", name),
    }
}

#[wasm_bindgen]
pub fn list_demos() -> String {
    demos::NAMES.join("\n")
}
