//! Interned type identifier.
//!
//! A `TypeId` is the canonical handle for a type: the interner stores each
//! distinct `TypeData` exactly once, so two handles are equal iff the types
//! they name are structurally equal.

use std::fmt;

/// Interned type identifier.
///
/// # Layout
/// 32-bit index split into shard (4 bits) + local index (28 bits):
/// - Bits 31-28: Shard index (0-15)
/// - Bits 27-0: Local index within shard
///
/// The all-ones value is reserved for [`TypeId::NONE`], so the last local
/// slot of shard 15 is never handed out.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned types (all in shard 0)
    pub const INT: TypeId = TypeId(0);
    pub const FLOAT: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const STR: TypeId = TypeId(3);
    /// The unit type `()`, interned as the empty tuple.
    pub const UNIT: TypeId = TypeId(4);

    /// Number of pre-interned types in shard 0.
    pub const PRIMITIVE_COUNT: u32 = 5;

    /// Sentinel for "no type". Never produced by the interner.
    pub const NONE: TypeId = TypeId(u32::MAX);

    /// Maximum local index per shard (2^28 - 1).
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of shards for type interning.
    pub const NUM_SHARDS: usize = 16;

    /// Create a `TypeId` from shard and local index.
    #[inline]
    pub const fn from_shard_local(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        TypeId((shard << 28) | local)
    }

    /// Extract the shard index (bits 31-28).
    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Extract the local index within the shard (bits 27-0).
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Check if this is one of the pre-interned types.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INT => write!(f, "TypeId::INT"),
            Self::FLOAT => write!(f, "TypeId::FLOAT"),
            Self::BOOL => write!(f, "TypeId::BOOL"),
            Self::STR => write!(f, "TypeId::STR"),
            Self::UNIT => write!(f, "TypeId::UNIT"),
            Self::NONE => write!(f, "TypeId::NONE"),
            _ => write!(f, "TypeId({}:{})", self.shard(), self.local()),
        }
    }
}

// Compile-time size assertion: TypeId must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<TypeId>() == 4);

#[cfg(test)]
mod tests;
