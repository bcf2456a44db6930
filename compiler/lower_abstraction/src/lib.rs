//! Abstraction patterns for type lowering.
//!
//! When a generic declaration is lowered for a concrete substitution, each
//! position of the substituted type must be lowered the way the *original*
//! declaration wrote it: a position written as a generic parameter must stay
//! abstract even if it is instantiated with `int`, while a position written
//! as a tuple or function can be lowered structurally.
//!
//! This crate provides:
//!
//! - **[`AbstractionPattern`]** — an immutable handle on the original type of
//!   a position, with the opacity query and the shape-specific
//!   decompositions (tuple element, function input/result, `inout` object).
//!   Decomposing an opaque pattern yields the same opaque pattern.
//!
//! - **[`Shape`]** — the projection of a type node onto the cases a pattern
//!   distinguishes, including which [`Placeholder`] kind made it opaque.
//!
//! - **[`walk`]** — a lock-step walk of a substituted type and its pattern
//!   that reports every leaf as [`Position::Opaque`] or
//!   [`Position::Concrete`].
//!
//! # Example
//!
//! ```
//! use lower_abstraction::AbstractionPattern;
//! use lower_types::{TypeId, TypeInterner};
//!
//! let types = TypeInterner::new();
//! let t = types.archetype("T");
//! let orig = types.function(t, types.tuple([TypeId::INT, TypeId::INT]));
//!
//! let pattern = AbstractionPattern::new(orig);
//! assert!(!pattern.is_opaque(&types));
//! assert!(pattern.function_input_type(&types).is_opaque(&types));
//! ```
//!
//! # Crate Dependencies
//!
//! `lower_abstraction` depends on `lower_types` for `TypeId`, `TypeData`
//! and the interner. Patterns never create types; they only inspect them.

mod pattern;
mod shape;
mod walk;

pub use pattern::{AbstractionPattern, PatternDisplay};
pub use shape::{Placeholder, Shape};
pub use walk::{classify_leaves, walk, LeafCollector, Position, PositionVisitor, WalkControl};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with
/// `RUST_LOG=lower_abstraction=trace` (decomposition steps) or
/// `RUST_LOG=lower_types=trace` (interner inserts).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

// Compile-time size assertion: a pattern is exactly one type handle
const _: () = assert!(std::mem::size_of::<AbstractionPattern>() == 4);
