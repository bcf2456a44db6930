//! Lock-step walk of a substituted type and its abstraction pattern.
//!
//! This is the driver a lowering pass runs: hold one pattern paired with one
//! substituted node, descend with the decomposition matching the
//! substituted node's kind, and stop at leaves. No merged tree is built;
//! each leaf is reported to a [`PositionVisitor`] together with the pattern
//! that governs it.

use lower_types::{ensure_sufficient_stack, TypeData, TypeId, TypeInterner};

use crate::shape::Shape;
use crate::AbstractionPattern;

/// How a leaf position must be lowered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The original position was a placeholder; keep the value abstract.
    Opaque,
    /// The original position had a known shape.
    Concrete,
}

/// Visitor decision for an aggregate under an opaque pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum WalkControl {
    /// Keep descending; the aggregate's parts are reported individually.
    #[default]
    Descend,
    /// Do not descend; the visitor handled the aggregate as a whole.
    Skip,
}

/// Receives the positions found by [`walk`].
pub trait PositionVisitor {
    /// Called for a tuple, function, or `inout` substituted node whose
    /// pattern is opaque, before descending into it.
    fn visit_opaque_aggregate(
        &mut self,
        _pattern: AbstractionPattern,
        _subst: TypeId,
    ) -> WalkControl {
        WalkControl::Descend
    }

    /// Called for every substituted leaf.
    fn visit_leaf(&mut self, pattern: AbstractionPattern, subst: TypeId, position: Position);
}

/// Walk `subst` in lock-step with `pattern`, reporting leaves to `visitor`.
///
/// Tuple elements are visited left to right; a function's input is visited
/// before its result. The empty tuple has no leaves.
///
/// # Panics
/// Panics if `pattern` cannot be paired with `subst`: a tuple of a different
/// arity, a concrete original of a different kind, or a tuple, function or
/// `inout` original paired with a substituted leaf.
pub fn walk<V: PositionVisitor + ?Sized>(
    types: &TypeInterner,
    pattern: AbstractionPattern,
    subst: TypeId,
    visitor: &mut V,
) {
    ensure_sufficient_stack(|| {
        let data = types.lookup(subst);
        let is_aggregate = matches!(
            data,
            TypeData::Tuple(_) | TypeData::Function { .. } | TypeData::InOut(_)
        );

        if is_aggregate
            && pattern.is_opaque(types)
            && visitor.visit_opaque_aggregate(pattern, subst) == WalkControl::Skip
        {
            tracing::trace!(pattern = %pattern.display(types), "skipped opaque aggregate");
            return;
        }

        match data {
            TypeData::Tuple(elems) => {
                assert!(
                    pattern.matches_tuple(types, subst),
                    "abstraction pattern `{}` does not match substituted tuple `{}`",
                    pattern.display(types),
                    types.format_type(subst)
                );
                for (index, &elem) in elems.iter().enumerate() {
                    walk(types, pattern.tuple_element_type(types, index), elem, visitor);
                }
            }
            TypeData::Function { input, result } => {
                walk(types, pattern.function_input_type(types), input, visitor);
                walk(types, pattern.function_result_type(types), result, visitor);
            }
            TypeData::InOut(object) => {
                walk(types, pattern.lvalue_object_type(types), object, visitor);
            }
            TypeData::Int
            | TypeData::Float
            | TypeData::Bool
            | TypeData::Str
            | TypeData::Nominal { .. }
            | TypeData::Metatype(_)
            | TypeData::Archetype { .. }
            | TypeData::GenericParam { .. }
            | TypeData::DependentMember { .. } => {
                let position = if pattern.is_opaque(types) {
                    Position::Opaque
                } else {
                    let aggregate = types.with_data(pattern.orig_type(), |orig| {
                        match Shape::of(orig) {
                            Shape::Concrete => None,
                            other => Some(other.name()),
                        }
                    });
                    if let Some(found) = aggregate {
                        panic!(
                            "{found} abstraction pattern `{}` does not match substituted leaf `{}`",
                            pattern.display(types),
                            types.format_type(subst)
                        );
                    }
                    Position::Concrete
                };
                visitor.visit_leaf(pattern, subst, position);
            }
        }
    });
}

/// Collects every leaf of a walk in visiting order.
#[derive(Debug, Default)]
pub struct LeafCollector {
    pub leaves: Vec<(TypeId, Position)>,
}

impl PositionVisitor for LeafCollector {
    fn visit_leaf(&mut self, _pattern: AbstractionPattern, subst: TypeId, position: Position) {
        self.leaves.push((subst, position));
    }
}

/// Classify every leaf of `subst` against `pattern`.
pub fn classify_leaves(
    types: &TypeInterner,
    pattern: AbstractionPattern,
    subst: TypeId,
) -> Vec<(TypeId, Position)> {
    let mut collector = LeafCollector::default();
    walk(types, pattern, subst, &mut collector);
    collector.leaves
}
