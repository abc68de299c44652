//! TypeScript syntax tree for the tsgen syntax toolkit.
//!
//! This crate provides the node model shared by the parser and the emitter:
//! - `Expr`, `Stmt`, `TsType`, `Decl` - sum types over `Arc`-held nodes
//! - `Trivia` / `JsDoc` - comments and structured documentation comments
//! - `ParameterList` - parameters partitioned as required, optional, rest
//! - `factory` - one constructor per node kind, validating grammar invariants
//! - `Visit` - default-walking visitor over every node kind
//!
//! Nodes are immutable once built. The `with_*` helpers return a new node that
//! shares all untouched children with the original.

pub mod node;
pub use node::{AstNode, LiteralValue, NodeKind, PropertyName};

pub mod error;
pub use error::BuildError;

// Comments and documentation
pub mod jsdoc;
pub use jsdoc::{JsDoc, JsDocBlock, JsDocBuilder, JsDocParam, JsDocThrows, JsDocTypeParam};

pub mod trivia;
pub use trivia::{HasTrivia, NodeTrivia, Trivia};

pub mod modifiers;
pub use modifiers::Modifiers;

// Node categories
pub mod params;
pub use params::{Parameter, ParameterKind, ParameterList, TypeParameter};

pub mod types;
pub use types::{EntityName, TsType, TypeKeyword, TypeMember};

pub mod expr;
pub use expr::{ArrowBody, BinaryOp, Expr, ObjectProperty, PostfixOp, UnaryOp};

pub mod stmt;
pub use stmt::{Block, ForInit, Stmt, SwitchClause, VariableKind};

pub mod decl;
pub use decl::{AccessorKind, ClassMember, Decl, ModuleKeyword, ModuleName};

// Construction, traversal and debug rendering
pub mod factory;

pub mod visit;
pub use visit::Visit;

pub mod display;
pub use display::display_statements;

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod node_tests;

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod factory_tests;

#[cfg(test)]
#[path = "../tests/jsdoc_tests.rs"]
mod jsdoc_tests;

#[cfg(test)]
#[path = "../tests/visit_tests.rs"]
mod visit_tests;

#[cfg(test)]
#[path = "../tests/display_tests.rs"]
mod display_tests;
