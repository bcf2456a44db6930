//! Top-level shape of an original type.
//!
//! [`Shape`] projects a [`TypeData`] node onto the handful of cases an
//! abstraction pattern cares about. It is the only place that decides
//! whether a node kind is opaque, and it matches every `TypeData` variant
//! by name so a new variant cannot slip through unclassified.

use lower_types::{TypeData, TypeId};

/// Which kind of placeholder made a position opaque.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// An archetype constrained to a class (a single reference).
    ClassBound,
    /// An archetype or generic parameter with no representation guarantee.
    Unconstrained,
    /// An associated type projected from a placeholder.
    ///
    /// The class constraint of a dependent member is not resolved against
    /// its originating generic context; it is treated like any other
    /// placeholder.
    Dependent,
}

/// The top-level shape of an original type, borrowed from its `TypeData`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A placeholder. Opaque positions have no fixed structure.
    Opaque(Placeholder),
    /// A tuple with the given element types.
    Tuple(&'a [TypeId]),
    /// A function from `input` to `result`.
    Function { input: TypeId, result: TypeId },
    /// An `inout` binding of `object`.
    LValue(TypeId),
    /// Any other concrete node; not decomposable by an abstraction pattern.
    Concrete,
}

impl<'a> Shape<'a> {
    /// Project a type node onto its shape.
    pub fn of(data: &'a TypeData) -> Self {
        match data {
            TypeData::Archetype {
                requires_class: true,
                ..
            } => Shape::Opaque(Placeholder::ClassBound),
            TypeData::Archetype {
                requires_class: false,
                ..
            }
            | TypeData::GenericParam { .. } => Shape::Opaque(Placeholder::Unconstrained),
            TypeData::DependentMember { .. } => Shape::Opaque(Placeholder::Dependent),

            TypeData::Tuple(elems) => Shape::Tuple(elems),
            TypeData::Function { input, result } => Shape::Function {
                input: *input,
                result: *result,
            },
            TypeData::InOut(object) => Shape::LValue(*object),

            TypeData::Int
            | TypeData::Float
            | TypeData::Bool
            | TypeData::Str
            | TypeData::Nominal { .. }
            | TypeData::Metatype(_) => Shape::Concrete,
        }
    }

    /// Returns `true` for placeholder shapes.
    #[inline]
    pub fn is_opaque(self) -> bool {
        matches!(self, Shape::Opaque(_))
    }

    /// Short name used in contract-violation messages.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Opaque(Placeholder::ClassBound) => "class-bound placeholder",
            Shape::Opaque(Placeholder::Unconstrained) => "unconstrained placeholder",
            Shape::Opaque(Placeholder::Dependent) => "dependent member",
            Shape::Tuple(_) => "tuple",
            Shape::Function { .. } => "function",
            Shape::LValue(_) => "inout binding",
            Shape::Concrete => "concrete type",
        }
    }
}
