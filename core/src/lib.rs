//! Maker Core Types
//!
//! This crate provides the foundational types shared by the parser, the
//! printer and the manipulator:
//! - Literal values (property defaults, annotation options)
//! - Semantic property types (`TypeRef`, `ValueType`)
//! - Accessor naming conventions

mod naming;
mod types;
mod value;

pub use naming::*;
pub use types::*;
pub use value::*;
