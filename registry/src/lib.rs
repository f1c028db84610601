//! Maker Registry
//!
//! Read-only index of the members a class already declares. The mutation
//! engine builds a fresh registry before every edit and asks it whether a
//! property, method or constructor parameter exists, and where new members go.

mod builder;
mod registry;

pub use builder::RegistryBuilder;
pub use registry::MemberRegistry;
