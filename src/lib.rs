//! Abstract syntax tree and visitor dispatch for a MiniJava compiler front-end.
//!
//! The parser builds a [`Located<Program>`](ast::Located) once; passes then
//! traverse it through [`visitor::Visitor`] or rewrite it through
//! [`fold::Fold`].

pub mod ast;
pub mod config;
pub mod counter;
pub mod declarations;
pub mod dump;
pub mod error;
pub mod fold;
pub mod printer;
pub mod visitor;

pub use ast::*;
pub use config::*;
pub use counter::DeclarationCounter;
pub use declarations::{DeclarationError, DuplicateChecker};
pub use dump::{dump_tree, TreeDumper};
pub use fold::Fold;
pub use printer::{pretty_print, PrettyPrinter};
pub use visitor::{Node, Visitor};
