//! Result types shared by every geometric query

mod closest_point;
mod collision_point;
mod collision_points;

pub use closest_point::ClosestPointResult;
pub use collision_point::CollisionPoint;
pub use collision_points::CollisionPoints;
