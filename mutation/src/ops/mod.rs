//! Edit operation implementations.
//!
//! Each operation builds a fresh `MemberRegistry`, decides whether the edit
//! applies, and then changes the class model in place.

mod accessor;
mod annotation;
mod constructor;
mod import;
mod property;

pub use accessor::{add_getter, add_setter};
pub use annotation::add_doc_comment_line;
pub use constructor::add_constructor_parameter;
pub use import::add_use_import;
pub use property::add_property;
