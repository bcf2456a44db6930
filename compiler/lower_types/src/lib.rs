//! Canonical types for the lowering phase.
//!
//! Every type is hash-consed into a [`TypeInterner`] and referred to by a
//! 32-bit [`TypeId`]. Structurally equal types share one id, so type
//! equality is an integer comparison and ids can be copied freely between
//! passes and threads.
//!
//! The node kinds ([`TypeData`]) are deliberately few: concrete leaves,
//! the three structural kinds a lowering pass decomposes (tuples,
//! functions, `inout` bindings), nominal types, and the placeholder kinds
//! that stand for types fixed only by substitution.

mod data;
mod format;
mod stack;
mod type_id;
mod type_interner;

pub use data::TypeData;
pub use stack::ensure_sufficient_stack;
pub use type_id::TypeId;
pub use type_interner::{SharedTypeInterner, TypeInternError, TypeInterner};

