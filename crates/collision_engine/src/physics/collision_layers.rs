//! Collision layer system for filtering collision detection
//!
//! Every body sits on exactly one layer bit and carries a mask of the layers
//! it wants to hear about. Filtering is directed: a receiver only detects
//! another body when its own mask admits that body's layer.

/// Collision layer definitions as single-bit `u32` values
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    // Standard game entity layers (bits 0-7)
    /// Player ship layer
    pub const PLAYER: u32 = 1 << 0;

    /// Enemy layer
    pub const ENEMY: u32 = 1 << 1;

    /// Projectiles (bullets, missiles, etc.)
    pub const PROJECTILE: u32 = 1 << 2;

    /// Static environment geometry
    pub const ENVIRONMENT: u32 = 1 << 3;

    /// Trigger volumes (no physical response)
    pub const TRIGGER: u32 = 1 << 4;

    /// Debris and asteroid fragments
    pub const DEBRIS: u32 = 1 << 5;

    /// Vehicles
    pub const VEHICLE: u32 = 1 << 6;

    /// Pickups and collectibles
    pub const PICKUP: u32 = 1 << 7;

    // User-defined custom layers (bits 8-31)
    pub const CUSTOM_8: u32 = 1 << 8;
    pub const CUSTOM_9: u32 = 1 << 9;
    pub const CUSTOM_10: u32 = 1 << 10;
    pub const CUSTOM_11: u32 = 1 << 11;
    pub const CUSTOM_12: u32 = 1 << 12;
    pub const CUSTOM_13: u32 = 1 << 13;
    pub const CUSTOM_14: u32 = 1 << 14;
    pub const CUSTOM_15: u32 = 1 << 15;
    pub const CUSTOM_16: u32 = 1 << 16;
    pub const CUSTOM_17: u32 = 1 << 17;
    pub const CUSTOM_18: u32 = 1 << 18;
    pub const CUSTOM_19: u32 = 1 << 19;
    pub const CUSTOM_20: u32 = 1 << 20;
    pub const CUSTOM_21: u32 = 1 << 21;
    pub const CUSTOM_22: u32 = 1 << 22;
    pub const CUSTOM_23: u32 = 1 << 23;
    pub const CUSTOM_24: u32 = 1 << 24;
    pub const CUSTOM_25: u32 = 1 << 25;
    pub const CUSTOM_26: u32 = 1 << 26;
    pub const CUSTOM_27: u32 = 1 << 27;
    pub const CUSTOM_28: u32 = 1 << 28;
    pub const CUSTOM_29: u32 = 1 << 29;
    pub const CUSTOM_30: u32 = 1 << 30;
    pub const CUSTOM_31: u32 = 1 << 31;

    /// Whether a receiver with `mask` detects a body on `layer`
    ///
    /// A zero mask never matches.
    pub fn can_detect(mask: u32, layer: u32) -> bool {
        mask & layer != 0
    }

    /// Check if two bodies detect each other both ways
    ///
    /// # Example
    /// ```
    /// use collision_engine::physics::CollisionLayers;
    ///
    /// // Player collides with enemies and environment
    /// let player_layer = CollisionLayers::PLAYER;
    /// let player_mask = CollisionLayers::ENEMY | CollisionLayers::ENVIRONMENT;
    ///
    /// // Enemy collides with player and projectiles
    /// let enemy_layer = CollisionLayers::ENEMY;
    /// let enemy_mask = CollisionLayers::PLAYER | CollisionLayers::PROJECTILE;
    ///
    /// assert!(CollisionLayers::should_collide(player_layer, player_mask, enemy_layer, enemy_mask));
    /// ```
    pub fn should_collide(layer_a: u32, mask_a: u32, layer_b: u32, mask_b: u32) -> bool {
        Self::can_detect(mask_b, layer_a) && Self::can_detect(mask_a, layer_b)
    }

    /// Whether `layer` has exactly one bit set
    pub fn is_single_layer(layer: u32) -> bool {
        layer.count_ones() == 1
    }

    /// Lowest set bit of `layer`, zero for zero
    pub fn lowest_layer(layer: u32) -> u32 {
        layer & layer.wrapping_neg()
    }

    /// Helper to create a mask from multiple layers
    ///
    /// # Example
    /// ```
    /// use collision_engine::physics::CollisionLayers;
    ///
    /// let mask = CollisionLayers::mask(&[
    ///     CollisionLayers::PLAYER,
    ///     CollisionLayers::ENEMY,
    ///     CollisionLayers::ENVIRONMENT,
    /// ]);
    /// assert_eq!(mask, 0b1011);
    /// ```
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}
