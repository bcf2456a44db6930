//! Sharded type interner.
//!
//! Provides O(1) type interning, lookup, and equality comparison via `TypeId`.
//! Interning is hash-consing: structurally equal `TypeData` always maps to
//! the same handle, which is what makes a `TypeId` canonical.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::data::TypeData;
use crate::TypeId;

/// Error when interning a type fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeInternError {
    /// Shard exceeded capacity (over 268 million types per shard).
    #[error("type interner shard {shard_idx} exceeded capacity")]
    ShardOverflow { shard_idx: usize },
}

/// Per-shard storage for interned types.
struct TypeShard {
    /// Map from type data to local index for deduplication.
    map: FxHashMap<TypeData, u32>,
    /// Storage for type data, indexed by local index.
    types: Vec<TypeData>,
}

impl TypeShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            types: Vec::with_capacity(256),
        }
    }

    /// Create shard 0 with pre-interned primitives.
    fn with_primitives() -> Self {
        let mut shard = Self::new();

        // Order matches the TypeId constants
        let primitives = [
            TypeData::Int,    // 0 = TypeId::INT
            TypeData::Float,  // 1 = TypeId::FLOAT
            TypeData::Bool,   // 2 = TypeId::BOOL
            TypeData::Str,    // 3 = TypeId::STR
            TypeData::unit(), // 4 = TypeId::UNIT
        ];

        for (idx, data) in primitives.into_iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "primitives count is fixed and small"
            )]
            let idx_u32 = idx as u32;
            shard.map.insert(data.clone(), idx_u32);
            shard.types.push(data);
        }

        shard
    }
}

/// Sharded type interner for concurrent access.
///
/// # Thread Safety
/// Uses a `RwLock` per shard. Can be shared across threads via
/// [`SharedTypeInterner`].
///
/// # Pre-interned Types
/// `int`, `float`, `bool`, `str` and `()` have fixed `TypeId` constants.
pub struct TypeInterner {
    shards: [RwLock<TypeShard>; TypeId::NUM_SHARDS],
    /// Maximum number of types per shard.
    shard_capacity: u32,
}

impl TypeInterner {
    /// Create a new interner with pre-interned primitives.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(TypeShard::with_primitives())
            } else {
                RwLock::new(TypeShard::new())
            }
        });

        Self {
            shards,
            shard_capacity: TypeId::MAX_LOCAL,
        }
    }

    /// Create an interner whose shards overflow after `shard_capacity` types.
    #[cfg(test)]
    fn with_shard_capacity(shard_capacity: u32) -> Self {
        Self {
            shard_capacity,
            ..Self::new()
        }
    }

    /// Compute shard index for a type based on its hash.
    #[inline]
    fn shard_for(data: &TypeData) -> usize {
        let mut hasher = rustc_hash::FxHasher::default();
        data.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash_usize = hasher.finish() as usize;
        hash_usize % TypeId::NUM_SHARDS
    }

    /// Try to intern a type, returning its `TypeId` or an error on overflow.
    ///
    /// If the type is already interned, returns the existing `TypeId`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    pub fn try_intern(&self, data: TypeData) -> Result<TypeId, TypeInternError> {
        // Fast path for primitives: they live in shard 0 regardless of hash
        match &data {
            TypeData::Int => return Ok(TypeId::INT),
            TypeData::Float => return Ok(TypeId::FLOAT),
            TypeData::Bool => return Ok(TypeId::BOOL),
            TypeData::Str => return Ok(TypeId::STR),
            TypeData::Tuple(elems) if elems.is_empty() => return Ok(TypeId::UNIT),
            _ => {}
        }

        let shard_idx = Self::shard_for(&data);
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(&data) {
                return Ok(TypeId::from_shard_local(shard_idx as u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(&data) {
            return Ok(TypeId::from_shard_local(shard_idx as u32, local));
        }

        let local = u32::try_from(guard.types.len())
            .ok()
            .filter(|&local| local < self.shard_capacity)
            .ok_or(TypeInternError::ShardOverflow { shard_idx })?;

        tracing::trace!(shard = shard_idx, local, ?data, "interned type");

        guard.types.push(data.clone());
        guard.map.insert(data, local);

        Ok(TypeId::from_shard_local(shard_idx as u32, local))
    }

    /// Intern a type, returning its `TypeId`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible
    /// interning.
    pub fn intern(&self, data: TypeData) -> TypeId {
        self.try_intern(data).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the type data for a `TypeId`.
    ///
    /// # Panics
    /// Panics if the `TypeId` was not created by this interner.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        self.with_data(id, TypeData::clone)
    }

    /// Run `f` against the stored data for `id` without cloning it.
    ///
    /// The shard's read lock is held while `f` runs; `f` must not call back
    /// into the interner.
    ///
    /// # Panics
    /// Panics if the `TypeId` was not created by this interner.
    pub fn with_data<R>(&self, id: TypeId, f: impl FnOnce(&TypeData) -> R) -> R {
        let guard = self.shards[id.shard()].read();
        f(&guard.types[id.local()])
    }

    // Convenience constructors. All go through `intern()`, so the same
    // arguments always produce the same `TypeId`.

    /// Create a tuple type.
    pub fn tuple(&self, elems: impl Into<Box<[TypeId]>>) -> TypeId {
        self.intern(TypeData::Tuple(elems.into()))
    }

    /// Create a function type `input -> result`.
    pub fn function(&self, input: TypeId, result: TypeId) -> TypeId {
        self.intern(TypeData::Function { input, result })
    }

    /// Create a mutable binding type `inout object`.
    pub fn inout(&self, object: TypeId) -> TypeId {
        self.intern(TypeData::InOut(object))
    }

    /// Create a nominal type.
    pub fn nominal(&self, name: &str, args: impl Into<Box<[TypeId]>>) -> TypeId {
        self.intern(TypeData::Nominal {
            name: name.into(),
            args: args.into(),
        })
    }

    /// Create a metatype `instance.Type`.
    pub fn metatype(&self, instance: TypeId) -> TypeId {
        self.intern(TypeData::Metatype(instance))
    }

    /// Create an archetype with no representation constraint.
    pub fn archetype(&self, name: &str) -> TypeId {
        self.intern(TypeData::Archetype {
            name: name.into(),
            requires_class: false,
        })
    }

    /// Create an archetype constrained to a class.
    pub fn class_archetype(&self, name: &str) -> TypeId {
        self.intern(TypeData::Archetype {
            name: name.into(),
            requires_class: true,
        })
    }

    /// Create a generic parameter `τ_depth_index`.
    pub fn generic_param(&self, depth: u32, index: u32) -> TypeId {
        self.intern(TypeData::GenericParam { depth, index })
    }

    /// Create a dependent member type `base.assoc`.
    pub fn dependent_member(&self, base: TypeId, assoc: &str) -> TypeId {
        self.intern(TypeData::DependentMember {
            base,
            assoc: assoc.into(),
        })
    }

    /// Element types of a tuple, or `None` if `id` is not a tuple.
    pub fn tuple_elems(&self, id: TypeId) -> Option<Box<[TypeId]>> {
        self.with_data(id, |data| match data {
            TypeData::Tuple(elems) => Some(elems.clone()),
            _ => None,
        })
    }

    /// Arity of a tuple, or `None` if `id` is not a tuple.
    pub fn tuple_arity(&self, id: TypeId) -> Option<usize> {
        self.with_data(id, |data| match data {
            TypeData::Tuple(elems) => Some(elems.len()),
            _ => None,
        })
    }

    /// Get the number of interned types.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().types.len()).sum()
    }

    /// Check if the interner has only pre-interned primitives.
    pub fn is_empty(&self) -> bool {
        self.len() <= TypeId::PRIMITIVE_COUNT as usize
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared type interner for thread-safe interning across lowering passes.
///
/// Clonable handle; all clones see the same storage.
#[derive(Clone)]
pub struct SharedTypeInterner(Arc<TypeInterner>);

impl std::fmt::Debug for SharedTypeInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTypeInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl SharedTypeInterner {
    /// Create a new shared type interner.
    pub fn new() -> Self {
        SharedTypeInterner(Arc::new(TypeInterner::new()))
    }
}

impl Default for SharedTypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedTypeInterner {
    type Target = TypeInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
