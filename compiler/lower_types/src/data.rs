//! Type representation stored in the interner.
//!
//! `TypeData` is the node stored once per distinct type. Children are
//! `TypeId` handles, so structural equality of `TypeData` coincides with
//! handle equality of the children.

use crate::TypeId;

/// A canonical type node.
///
/// # Placeholders
///
/// Three variants stand in for types that are not known until
/// substitution: [`Archetype`](TypeData::Archetype),
/// [`GenericParam`](TypeData::GenericParam) and
/// [`DependentMember`](TypeData::DependentMember).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    // Concrete leaves
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Str,

    // Structural types
    /// Tuple `(T, U, V)`. The empty tuple is the unit type.
    Tuple(Box<[TypeId]>),

    /// Function `input -> result`. Multiple parameters are a tuple input.
    Function {
        /// Domain.
        input: TypeId,
        /// Codomain.
        result: TypeId,
    },

    /// Mutable binding `inout T`.
    InOut(TypeId),

    // Named types
    /// A nominal type (struct, enum, class), possibly with generic arguments.
    Nominal {
        /// Declared name.
        name: Box<str>,
        /// Generic arguments, empty if none.
        args: Box<[TypeId]>,
    },

    /// The metatype `T.Type`.
    Metatype(TypeId),

    // Placeholders
    /// A contextual archetype for a generic parameter.
    Archetype {
        /// Name of the generic parameter it was opened from.
        name: Box<str>,
        /// Whether the archetype is constrained to a class (single reference).
        requires_class: bool,
    },

    /// An interface-level generic parameter `τ_depth_index`.
    GenericParam {
        /// Nesting depth of the generic signature.
        depth: u32,
        /// Position within that signature.
        index: u32,
    },

    /// An associated type reached through a placeholder, e.g. `T.Element`.
    DependentMember {
        /// Placeholder the member is projected from.
        base: TypeId,
        /// Associated type name.
        assoc: Box<str>,
    },
}

impl TypeData {
    /// The empty tuple, interned as [`TypeId::UNIT`].
    pub fn unit() -> Self {
        TypeData::Tuple(Box::default())
    }
}
