//! Value types that travel alongside identifiers in RPC payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::{ObjectId, SuiAddress};
use crate::digest::ObjectDigest;

/// An object version.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    pub const MIN: Self = Self(0);

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The next version, or `None` on overflow.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Debug for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SequenceNumber({})", self.0)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SequenceNumber {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Reference to a specific version of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: SequenceNumber,
    pub digest: ObjectDigest,
}

impl ObjectRef {
    pub fn new(object_id: ObjectId, version: SequenceNumber, digest: ObjectDigest) -> Self {
        Self {
            object_id,
            version,
            digest,
        }
    }
}

/// Who owns an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectOwner {
    /// Owned by an account address.
    AddressOwner(SuiAddress),
    /// Owned by another object.
    ObjectOwner(SuiAddress),
    /// Shared; anyone may use it in a transaction.
    Shared { initial_shared_version: SequenceNumber },
    /// Frozen; readable by anyone, mutable by no one.
    Immutable,
}

impl ObjectOwner {
    /// The owning address, if the owner is an address or object.
    pub fn owner_address(&self) -> Option<SuiAddress> {
        match self {
            ObjectOwner::AddressOwner(a) | ObjectOwner::ObjectOwner(a) => Some(*a),
            ObjectOwner::Shared { .. } | ObjectOwner::Immutable => None,
        }
    }
}
