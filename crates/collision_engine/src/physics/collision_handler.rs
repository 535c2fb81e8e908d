//! Frame-synchronous collision handler
//!
//! Bodies live in a slot map arena and the broad-phase grid stores only their
//! keys. Each frame the caller runs [`CollisionHandler::update`] followed by
//! [`CollisionHandler::resolve`]:
//!
//! 1. `update` records previous positions, integrates physics bodies and
//!    rebuckets the dynamic grid cells.
//! 2. `resolve` walks every occupied cell, narrow-phase tests each unordered
//!    body pair once, and reports overlap events per receiving side followed by
//!    overlap-ended events for pairs that stopped touching.
//!
//! Pair state is directed: a body only tracks the bodies it receives events
//! about, so one-way masks work without the other side knowing.

use std::collections::{HashMap, HashSet};

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::config::CollisionConfig;
use crate::foundation::math::distance_squared;
use crate::queries;
use crate::shapes::{Rect, Shape};
use crate::spatial::SpatialGrid;

use super::body::{BodyId, CollisionBody};
use super::collision_info::{dispatch, CollisionEvent, CollisionInformation, CollisionListener, PairId, QueryInfo};
use super::collision_layers::CollisionLayers;

new_key_type! {
    /// Arena handle of a registered body
    pub struct ColliderKey;
}

/// Registered bodies, their grid buckets and pair state
#[derive(Debug)]
pub struct CollisionHandler {
    grid: SpatialGrid<ColliderKey>,
    bodies: SlotMap<ColliderKey, CollisionBody>,
    ids: SecondaryMap<ColliderKey, BodyId>,
    keys: HashMap<BodyId, ColliderKey>,
    /// Directed pairs that overlapped on the previous resolve
    previous_pairs: HashSet<PairId>,
    /// Directed pairs that overlap on the latest resolve
    current_pairs: HashSet<PairId>,
}

impl CollisionHandler {
    /// Create a handler whose grid covers `bounds` with `rows x cols` cells
    pub fn new(bounds: Rect, rows: usize, cols: usize) -> Self {
        log::debug!("CollisionHandler: {}x{} grid over {:?}", rows, cols, bounds);
        Self {
            grid: SpatialGrid::new(bounds, rows, cols),
            bodies: SlotMap::with_key(),
            ids: SecondaryMap::new(),
            keys: HashMap::new(),
            previous_pairs: HashSet::new(),
            current_pairs: HashSet::new(),
        }
    }

    /// Create a handler from a grid layout
    pub fn from_config(config: &CollisionConfig) -> Self {
        Self::new(config.bounds, config.rows, config.cols)
    }

    /// Register a body under `id`
    ///
    /// Returns `false` and changes nothing when `id` is already registered.
    /// A layer with more than one bit set is reduced to its lowest bit.
    pub fn add(&mut self, id: BodyId, mut body: CollisionBody) -> bool {
        if self.keys.contains_key(&id) {
            log::debug!("CollisionHandler: {:?} already registered, ignoring", id);
            return false;
        }
        if body.layer != 0 && !CollisionLayers::is_single_layer(body.layer) {
            let layer = CollisionLayers::lowest_layer(body.layer);
            log::warn!(
                "CollisionHandler: {:?} has multi-bit layer {:#x}, using {:#x}",
                id,
                body.layer,
                layer
            );
            body.layer = layer;
        }

        let bbox = body.collider.bounding_box();
        let layer = body.layer;
        let is_static = body.collider.is_static();
        let key = self.bodies.insert(body);
        self.ids.insert(key, id);
        self.keys.insert(id, key);
        self.grid.insert(key, bbox, layer, is_static);
        log::debug!("CollisionHandler: added {:?} (static: {})", id, is_static);
        true
    }

    /// Register several bodies, returning how many were new
    pub fn add_many<I>(&mut self, bodies: I) -> usize
    where
        I: IntoIterator<Item = (BodyId, CollisionBody)>,
    {
        bodies.into_iter().map(|(id, body)| self.add(id, body)).filter(|added| *added).count()
    }

    /// Unregister a body and forget every pair it was part of
    ///
    /// No overlap-ended event is reported for the purged pairs. Removing an
    /// unknown id is a no-op.
    pub fn remove(&mut self, id: BodyId) -> Option<CollisionBody> {
        let key = self.keys.remove(&id)?;
        self.grid.remove(key);
        self.ids.remove(key);
        self.previous_pairs.retain(|pair| pair.receiver != id && pair.other != id);
        self.current_pairs.retain(|pair| pair.receiver != id && pair.other != id);
        log::debug!("CollisionHandler: removed {:?}", id);
        self.bodies.remove(key)
    }

    /// Unregister several bodies, returning how many were registered
    pub fn remove_many<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = BodyId>,
    {
        ids.into_iter().filter_map(|id| self.remove(id)).count()
    }

    /// Registered body
    pub fn get(&self, id: BodyId) -> Option<&CollisionBody> {
        self.keys.get(&id).and_then(|&key| self.bodies.get(key))
    }

    /// Registered body, mutably
    ///
    /// Shape and position changes reach the grid on the next
    /// [`update`](Self::update). Layer and static changes need a re-add.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CollisionBody> {
        let key = *self.keys.get(&id)?;
        self.bodies.get_mut(key)
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: BodyId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no body is registered
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Registered bodies in arena order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CollisionBody)> + '_ {
        self.bodies
            .iter()
            .filter_map(|(key, body)| self.ids.get(key).map(|&id| (id, body)))
    }

    /// Broad-phase grid
    pub fn grid(&self) -> &SpatialGrid<ColliderKey> {
        &self.grid
    }

    /// Whether either body received an overlap about the other on the latest resolve
    pub fn is_overlapping(&self, a: BodyId, b: BodyId) -> bool {
        let pair = PairId::new(a, b);
        self.current_pairs.contains(&pair) || self.current_pairs.contains(&pair.reversed())
    }

    /// Drop every body and all pair state without reporting events
    pub fn clear(&mut self) {
        log::debug!("CollisionHandler: cleared {} bodies", self.bodies.len());
        self.grid.clear();
        self.bodies.clear();
        self.ids.clear();
        self.keys.clear();
        self.previous_pairs.clear();
        self.current_pairs.clear();
    }

    /// Cover a new area; every body is bucketed again
    pub fn update_area(&mut self, bounds: Rect) {
        self.grid.update_area(bounds);
    }

    /// Advance bodies by `dt` seconds and rebucket the grid
    pub fn update(&mut self, dt: f32) {
        for (key, body) in &mut self.bodies {
            let collider = &mut body.collider;
            if !collider.is_enabled() {
                continue;
            }
            collider.begin_frame();
            collider.step(dt);
            let bbox = collider.bounding_box();
            if !collider.is_static() || self.grid.bbox(key) != Some(bbox) {
                self.grid.update(key, bbox);
            }
        }
        self.grid.rebucket();
    }

    /// Narrow-phase every candidate pair and report this frame's events
    ///
    /// Overlap events come first in grid cell order, two per pair when both
    /// sides receive. Overlap-ended events follow, sorted by pair.
    pub fn resolve(&mut self) -> Vec<CollisionEvent> {
        std::mem::swap(&mut self.current_pairs, &mut self.previous_pairs);
        self.current_pairs.clear();

        let cells: Vec<Vec<ColliderKey>> = self.grid.occupied_cells().collect();
        let mut tested = HashSet::new();
        let mut events = Vec::new();
        for cell in &cells {
            for (i, &a) in cell.iter().enumerate() {
                for &b in &cell[i + 1..] {
                    if tested.insert((a.min(b), a.max(b))) {
                        self.resolve_pair(a, b, &mut events);
                    }
                }
            }
        }
        let overlaps = events.len();

        let mut ended: Vec<PairId> = self.previous_pairs.difference(&self.current_pairs).copied().collect();
        ended.sort_unstable();
        events.extend(ended.into_iter().map(|pair| CollisionEvent::OverlapEnded { pair }));

        log::trace!(
            "CollisionHandler: {} pairs tested, {} overlaps, {} ended",
            tested.len(),
            overlaps,
            events.len() - overlaps
        );
        events
    }

    /// [`resolve`](Self::resolve) and feed the events to `listener`
    pub fn resolve_into<L: CollisionListener + ?Sized>(&mut self, listener: &mut L) -> usize {
        let events = self.resolve();
        dispatch(&events, listener);
        events.len()
    }

    /// Bodies on a `mask` layer that overlap `shape`
    ///
    /// With `sorted` the bodies are ordered by distance from the center of
    /// `shape` to each body's shape center.
    pub fn cast_space(&self, shape: &Shape, mask: u32, sorted: bool) -> Vec<BodyId> {
        self.matching(shape, mask, sorted)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// [`cast_space`](Self::cast_space) with intersection points and containment
    pub fn query_space(&self, shape: &Shape, mask: u32, sorted: bool) -> Vec<QueryInfo> {
        self.matching(shape, mask, sorted)
            .into_iter()
            .filter_map(|(id, key)| {
                let other = self.bodies.get(key)?.collider.collision_shape();
                Some(QueryInfo {
                    body: id,
                    points: queries::intersect(shape, &other),
                    contained: queries::contains(shape, &other),
                })
            })
            .collect()
    }

    fn matching(&self, shape: &Shape, mask: u32, sorted: bool) -> Vec<(BodyId, ColliderKey)> {
        let mut found: Vec<(BodyId, ColliderKey)> = self
            .grid
            .query(&shape.bounding_box(), mask)
            .into_iter()
            .filter_map(|key| {
                let body = self.bodies.get(key)?;
                if !body.collider.is_enabled() || !queries::overlap(shape, &body.collider.collision_shape()) {
                    return None;
                }
                Some((*self.ids.get(key)?, key))
            })
            .collect();

        if sorted {
            let center = shape.center();
            let distance_to = |key: ColliderKey| {
                self.bodies
                    .get(key)
                    .map_or(f32::INFINITY, |body| distance_squared(center, body.collider.shape().center()))
            };
            found.sort_by(|a, b| distance_to(a.1).total_cmp(&distance_to(b.1)));
        }
        found
    }

    fn resolve_pair(&mut self, a: ColliderKey, b: ColliderKey, events: &mut Vec<CollisionEvent>) {
        let (Some(body_a), Some(body_b)) = (self.bodies.get(a), self.bodies.get(b)) else {
            return;
        };
        let (Some(&id_a), Some(&id_b)) = (self.ids.get(a), self.ids.get(b)) else {
            return;
        };
        if !body_a.collider.is_enabled() || !body_b.collider.is_enabled() || body_a.owner == body_b.owner {
            return;
        }
        let a_receives = receives(body_a, body_b);
        let b_receives = receives(body_b, body_a);
        if !a_receives && !b_receives {
            return;
        }

        let shape_a = body_a.collider.collision_shape();
        let shape_b = body_b.collider.collision_shape();
        if !queries::overlap(&shape_a, &shape_b) {
            return;
        }
        let contained = queries::contains(&shape_a, &shape_b);

        let sides = [
            (a_receives, id_a, body_a, &shape_a, id_b, body_b, &shape_b),
            (b_receives, id_b, body_b, &shape_b, id_a, body_a, &shape_a),
        ];
        for (receiving, receiver_id, receiver, receiver_shape, other_id, other, other_shape) in sides {
            if !receiving {
                continue;
            }
            let pair = PairId::new(receiver_id, other_id);
            let points = if receiver.collider.computes_intersections() {
                queries::intersect(receiver_shape, other_shape)
            } else {
                None
            };
            let info = CollisionInformation {
                other: other_id,
                other_owner: other.owner,
                other_layer: other.layer,
                first_contact: !self.previous_pairs.contains(&pair),
                contained,
                points,
                self_velocity: receiver.collider.velocity(),
                other_velocity: other.collider.velocity(),
            };
            self.current_pairs.insert(pair);
            events.push(CollisionEvent::Overlap { pair, info });
        }
    }
}

/// Whether `receiver` wants overlap events about `other`
fn receives(receiver: &CollisionBody, other: &CollisionBody) -> bool {
    receiver.collider.computes_collision() && CollisionLayers::can_detect(receiver.mask, other.layer)
}
