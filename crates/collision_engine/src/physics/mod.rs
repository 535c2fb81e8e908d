//! Physics module for collision handling and motion
//!
//! Bodies register with a [`CollisionHandler`], which buckets them in a
//! spatial grid, integrates their [`PhysicsState`] and reports overlap events
//! each frame. Pure collision-response formulas live in [`formulas`].

pub mod body;
pub mod collider;
pub mod collision_handler;
pub mod collision_info;
pub mod collision_layers;
pub mod formulas;
pub mod physics_state;


pub use body::{BodyId, CollisionBody, OwnerId};
pub use collider::{Collider, ColliderFlags};
pub use collision_handler::{ColliderKey, CollisionHandler};
pub use collision_info::{dispatch, CollisionEvent, CollisionInformation, CollisionListener, PairId, QueryInfo};
pub use collision_layers::CollisionLayers;
pub use physics_state::PhysicsState;
