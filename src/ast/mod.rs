//! Script parsing and tree search.
//!
//! The explorer ships machine-generated scripts; this module parses them with
//! oxc, lowers the result into a small tagged-union tree, and exposes a
//! generic predicate search over that tree. Only the statement shapes the
//! extractors match on survive the lowering — everything else becomes an
//! opaque leaf or a plain container for its nested statements.

pub mod lower;
pub mod tree;

pub use lower::parse;
pub use tree::{search, Arg, CallExpr, Literal, Node, NodeKind};
