//! Registered body identity and membership

use serde::{Deserialize, Serialize};

use super::collider::Collider;

/// Caller-chosen identity of a registered body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u64);

/// Game entity that owns one or more bodies
///
/// Bodies sharing an owner never collide with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

/// A collider together with its layer, mask and owner
#[derive(Debug, Clone)]
pub struct CollisionBody {
    /// Shape, transform and physics state
    pub collider: Collider,
    /// Single layer bit this body lives on
    pub layer: u32,
    /// Layers this body wants to hear about
    pub mask: u32,
    /// Owning entity
    pub owner: OwnerId,
}

impl CollisionBody {
    /// Create a new body
    pub fn new(collider: Collider, layer: u32, mask: u32, owner: OwnerId) -> Self {
        Self {
            collider,
            layer,
            mask,
            owner,
        }
    }
}
