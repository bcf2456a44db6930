//! The abstraction pattern of a type position.
//!
//! An [`AbstractionPattern`] wraps the original, unsubstituted type of a
//! position. Placeholders in the original type sit exactly at the points
//! where a lowered value must be kept abstract. The lowering pass walks a
//! substituted type and its pattern together, descending into both with the
//! decomposition operations below.
//!
//! # Opaque propagation
//!
//! Every decomposition obeys the same law:
//!
//! - original of the matching kind → pattern of the named child
//! - opaque original → the same pattern, unchanged
//! - anything else → contract violation (panic)
//!
//! The law is implemented once, in a private `decompose` routine, and
//! each operation only names the child it projects.

use std::fmt;

use lower_types::{TypeId, TypeInterner};

use crate::shape::Shape;

/// The original shape of a type position.
///
/// A `Copy` handle over one canonical [`TypeId`]. Two patterns are equal iff
/// their original types are equal.
///
/// The null pattern ([`AbstractionPattern::NULL`], also the `Default`) marks
/// a slot with no abstraction information. Only [`is_null`],
/// [`orig_type`], [`display`] and [`dump`] accept it; every other query on a
/// null pattern panics.
///
/// [`is_null`]: AbstractionPattern::is_null
/// [`orig_type`]: AbstractionPattern::orig_type
/// [`display`]: AbstractionPattern::display
/// [`dump`]: AbstractionPattern::dump
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AbstractionPattern {
    orig: TypeId,
}

/// A shape-specific descent, named for trace output and panic messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Decomposition {
    TupleElement(usize),
    LValueObject,
    FunctionResult,
    FunctionInput,
}

impl Decomposition {
    /// The kind of original type this descent is defined on.
    fn expected(self) -> &'static str {
        match self {
            Decomposition::TupleElement(_) => "a tuple",
            Decomposition::LValueObject => "an inout binding",
            Decomposition::FunctionResult | Decomposition::FunctionInput => "a function",
        }
    }

    /// Project the child out of a shape of the matching kind.
    ///
    /// `None` means the shape is not of the matching kind.
    fn project(self, shape: Shape<'_>) -> Option<Step> {
        match (self, shape) {
            (Decomposition::TupleElement(index), Shape::Tuple(elems)) => {
                Some(elems.get(index).map_or(
                    Step::OutOfRange { arity: elems.len() },
                    |&elem| Step::Descend(elem),
                ))
            }
            (Decomposition::LValueObject, Shape::LValue(object)) => Some(Step::Descend(object)),
            (Decomposition::FunctionResult, Shape::Function { result, .. }) => {
                Some(Step::Descend(result))
            }
            (Decomposition::FunctionInput, Shape::Function { input, .. }) => {
                Some(Step::Descend(input))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decomposition::TupleElement(index) => write!(f, "tuple_element_type({index})"),
            Decomposition::LValueObject => f.write_str("lvalue_object_type"),
            Decomposition::FunctionResult => f.write_str("function_result_type"),
            Decomposition::FunctionInput => f.write_str("function_input_type"),
        }
    }
}

/// Outcome of a decomposition, computed under the interner's shard lock.
enum Step {
    Descend(TypeId),
    StayOpaque,
    OutOfRange { arity: usize },
    Mismatch { found: &'static str },
}

impl AbstractionPattern {
    /// The null pattern: no abstraction information available.
    pub const NULL: Self = Self {
        orig: TypeId::NONE,
    };

    /// Wrap a canonical original type.
    ///
    /// # Panics
    /// Panics if `orig` is [`TypeId::NONE`]; use [`AbstractionPattern::NULL`].
    pub fn new(orig: TypeId) -> Self {
        assert!(
            !orig.is_none(),
            "AbstractionPattern::new called with TypeId::NONE; use AbstractionPattern::NULL"
        );
        Self { orig }
    }

    /// Returns `true` for the null pattern.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.orig.is_none()
    }

    /// The wrapped original type ([`TypeId::NONE`] for the null pattern).
    #[inline]
    pub const fn orig_type(self) -> TypeId {
        self.orig
    }

    /// Returns `true` if the original type is a placeholder.
    ///
    /// Looks only at the top-level node.
    pub fn is_opaque(self, types: &TypeInterner) -> bool {
        self.with_shape(types, "is_opaque", |shape| shape.is_opaque())
    }

    /// Whether this pattern can be paired with the substituted tuple
    /// `subst_tuple`.
    ///
    /// True if the original is a tuple of the same arity, or if the pattern
    /// is opaque (an opaque position commits to no arity).
    ///
    /// # Panics
    /// Panics if `subst_tuple` is not a tuple, or if the pattern is null.
    pub fn matches_tuple(self, types: &TypeInterner, subst_tuple: TypeId) -> bool {
        let Some(arity) = types.tuple_arity(subst_tuple) else {
            panic!(
                "matches_tuple expects a substituted tuple, found `{}`",
                types.format_type(subst_tuple)
            );
        };
        self.with_shape(types, "matches_tuple", |shape| match shape {
            Shape::Tuple(elems) => elems.len() == arity,
            other => other.is_opaque(),
        })
    }

    /// The pattern of tuple element `index`.
    ///
    /// # Panics
    /// Panics unless the original is a tuple with more than `index` elements
    /// or the pattern is opaque.
    pub fn tuple_element_type(self, types: &TypeInterner, index: usize) -> Self {
        self.decompose(types, Decomposition::TupleElement(index))
    }

    /// The pattern of the object referenced by an `inout` binding.
    ///
    /// # Panics
    /// Panics unless the original is an `inout` binding or the pattern is
    /// opaque.
    pub fn lvalue_object_type(self, types: &TypeInterner) -> Self {
        self.decompose(types, Decomposition::LValueObject)
    }

    /// The pattern of a function's result.
    ///
    /// # Panics
    /// Panics unless the original is a function or the pattern is opaque.
    pub fn function_result_type(self, types: &TypeInterner) -> Self {
        self.decompose(types, Decomposition::FunctionResult)
    }

    /// The pattern of a function's input.
    ///
    /// # Panics
    /// Panics unless the original is a function or the pattern is opaque.
    pub fn function_input_type(self, types: &TypeInterner) -> Self {
        self.decompose(types, Decomposition::FunctionInput)
    }

    /// Render the original type; the null pattern renders as `<null>`.
    pub fn display(self, types: &TypeInterner) -> PatternDisplay<'_> {
        PatternDisplay {
            pattern: self,
            types,
        }
    }

    /// Emit the rendered original type as a `debug` trace event.
    pub fn dump(self, types: &TypeInterner) {
        tracing::debug!(pattern = %self.display(types), "abstraction pattern");
    }

    /// Apply the opaque-propagation law for one decomposition.
    fn decompose(self, types: &TypeInterner, op: Decomposition) -> Self {
        let step = self.with_shape(types, "decomposition", |shape| {
            op.project(shape).unwrap_or_else(|| {
                if shape.is_opaque() {
                    Step::StayOpaque
                } else {
                    Step::Mismatch { found: shape.name() }
                }
            })
        });

        match step {
            Step::Descend(child) => {
                tracing::trace!(%op, orig = ?self.orig, ?child, "descend abstraction pattern");
                Self::new(child)
            }
            Step::StayOpaque => {
                tracing::trace!(%op, orig = ?self.orig, "opaque abstraction pattern propagates");
                self
            }
            Step::OutOfRange { arity } => panic!(
                "{op} out of range for {arity}-element tuple `{}`",
                types.format_type(self.orig)
            ),
            Step::Mismatch { found } => panic!(
                "{op} requires {} or opaque abstraction pattern, found {found} `{}`",
                op.expected(),
                types.format_type(self.orig)
            ),
        }
    }

    /// Run `f` on the shape of the original type.
    ///
    /// The interner's shard lock is held while `f` runs.
    fn with_shape<R>(
        self,
        types: &TypeInterner,
        query: &'static str,
        f: impl FnOnce(Shape<'_>) -> R,
    ) -> R {
        assert!(!self.is_null(), "{query} called on a null abstraction pattern");
        types.with_data(self.orig, |data| f(Shape::of(data)))
    }
}

impl Default for AbstractionPattern {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for AbstractionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("AbstractionPattern::NULL")
        } else {
            write!(f, "AbstractionPattern({:?})", self.orig)
        }
    }
}

/// Display adapter returned by [`AbstractionPattern::display`].
pub struct PatternDisplay<'a> {
    pattern: AbstractionPattern,
    types: &'a TypeInterner,
}

impl fmt::Display for PatternDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pattern.is_null() {
            f.write_str("<null>")
        } else {
            f.write_str(&self.types.format_type(self.pattern.orig))
        }
    }
}
