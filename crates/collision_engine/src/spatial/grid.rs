//! Uniform grid broad phase
//!
//! The covering rect is split into `rows x cols` equal cells. Every entry is
//! bucketed into each cell its bounding box touches. Static entries live in
//! their own cell lists and survive [`SpatialGrid::rebucket`]; dynamic entries
//! are cleared and reinserted once per frame.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::foundation::math::Vec2;
use crate::shapes::Rect;

/// Recorded state of one grid entry
#[derive(Debug, Clone, Copy)]
struct Entry<K> {
    key: K,
    bbox: Rect,
    layer: u32,
    is_static: bool,
    /// Cells the key currently sits in, which lag `bbox` until a rebucket
    bucketed: Option<CellRange>,
}

/// Inclusive cell index range covered by a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRange {
    row_min: usize,
    row_max: usize,
    col_min: usize,
    col_max: usize,
}

/// Uniform spatial grid keyed by `K`
///
/// Cells hold keys, never entries, so callers keep ownership of whatever the
/// keys refer to.
#[derive(Debug, Clone)]
pub struct SpatialGrid<K> {
    bounds: Rect,
    rows: usize,
    cols: usize,
    cell_size: Vec2,
    static_cells: Vec<Vec<K>>,
    dynamic_cells: Vec<Vec<K>>,
    entries: Vec<Entry<K>>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> SpatialGrid<K> {
    /// Create a grid over `bounds`; `rows` and `cols` are clamped to at least one
    pub fn new(bounds: Rect, rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            bounds,
            rows,
            cols,
            cell_size: cell_size(&bounds, rows, cols),
            static_cells: vec![Vec::new(); rows * cols],
            dynamic_cells: vec![Vec::new(); rows * cols],
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Area covered by the grid
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width and height of one cell
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is recorded
    pub fn contains(&self, key: K) -> bool {
        self.index.contains_key(&key)
    }

    /// Recorded bounding box of `key`
    pub fn bbox(&self, key: K) -> Option<Rect> {
        self.index.get(&key).map(|&i| self.entries[i].bbox)
    }

    /// Record an entry and bucket it immediately
    ///
    /// Inserting a key that is already present replaces its entry.
    pub fn insert(&mut self, key: K, bbox: Rect, layer: u32, is_static: bool) {
        if self.contains(key) {
            self.remove(key);
        }
        let mut entry = Entry {
            key,
            bbox,
            layer,
            is_static,
            bucketed: None,
        };
        entry.bucketed = self.bucket(&entry);
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
    }

    /// Forget an entry, no-op when absent
    pub fn remove(&mut self, key: K) -> bool {
        let Some(position) = self.index.remove(&key) else {
            return false;
        };
        let entry = self.entries.swap_remove(position);
        if let Some(moved) = self.entries.get(position) {
            self.index.insert(moved.key, position);
        }

        if let Some(range) = entry.bucketed {
            let cols = self.cols;
            let cells = if entry.is_static {
                &mut self.static_cells
            } else {
                &mut self.dynamic_cells
            };
            for cell in range.indices(cols) {
                cells[cell].retain(|k| *k != key);
            }
        }
        true
    }

    /// Change the recorded box of an entry
    ///
    /// Dynamic entries move on the next [`rebucket`](Self::rebucket); static
    /// entries are rebucketed at once since rebucketing skips them.
    pub fn update(&mut self, key: K, bbox: Rect) {
        let Some(&position) = self.index.get(&key) else {
            return;
        };
        let entry = self.entries[position];
        if entry.is_static {
            self.insert(key, bbox, entry.layer, true);
        } else {
            self.entries[position].bbox = bbox;
        }
    }

    /// Clear every dynamic cell and reinsert the dynamic entries
    pub fn rebucket(&mut self) {
        for cell in &mut self.dynamic_cells {
            cell.clear();
        }
        let mut dynamic = 0usize;
        for i in 0..self.entries.len() {
            let entry = self.entries[i];
            if !entry.is_static {
                self.entries[i].bucketed = self.bucket(&entry);
                dynamic += 1;
            }
        }
        log::trace!("SpatialGrid: rebucketed {} dynamic of {} entries", dynamic, self.entries.len());
    }

    /// Cover a new area with the same row and column count
    ///
    /// Every entry, static or dynamic, is bucketed again.
    pub fn update_area(&mut self, bounds: Rect) {
        log::debug!(
            "SpatialGrid: area changed from {:?} to {:?} ({}x{} cells)",
            self.bounds,
            bounds,
            self.rows,
            self.cols
        );
        self.bounds = bounds;
        self.cell_size = cell_size(&bounds, self.rows, self.cols);
        for cell in self.static_cells.iter_mut().chain(self.dynamic_cells.iter_mut()) {
            cell.clear();
        }
        for i in 0..self.entries.len() {
            let entry = self.entries[i];
            self.entries[i].bucketed = self.bucket(&entry);
        }
    }

    /// Keys in every cell touched by `rect` whose layer matches `mask`
    ///
    /// Keys are deduplicated and returned in the order first seen, walking
    /// cells row by row. A zero mask matches nothing.
    pub fn query(&self, rect: &Rect, mask: u32) -> Vec<K> {
        let mut found = Vec::new();
        if mask == 0 {
            return found;
        }
        let Some(range) = self.cell_range(rect) else {
            return found;
        };
        let mut seen = HashSet::new();
        for cell in range.indices(self.cols) {
            for &key in self.static_cells[cell].iter().chain(&self.dynamic_cells[cell]) {
                if seen.insert(key) && self.layer_of(key) & mask != 0 {
                    found.push(key);
                }
            }
        }
        found
    }

    /// [`query`](Self::query) sorted by distance from `reference` to each box center
    pub fn query_sorted(&self, rect: &Rect, mask: u32, reference: Vec2) -> Vec<K> {
        let mut found = self.query(rect, mask);
        found.sort_by(|a, b| {
            let da = self.center_distance_squared(*a, reference);
            let db = self.center_distance_squared(*b, reference);
            da.total_cmp(&db)
        });
        found
    }

    /// Keys of every non-empty cell, static entries first, in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = Vec<K>> + '_ {
        self.static_cells
            .iter()
            .zip(&self.dynamic_cells)
            .filter(|(s, d)| !s.is_empty() || !d.is_empty())
            .map(|(s, d)| s.iter().chain(d).copied().collect())
    }

    /// `(row, col)` of the cell holding `point`, `None` outside the grid
    pub fn cell_of(&self, point: Vec2) -> Option<(usize, usize)> {
        if !self.bounds.contains_point(point) {
            return None;
        }
        Some((
            axis_index(point.y, self.bounds.y, self.cell_size.y, self.rows),
            axis_index(point.x, self.bounds.x, self.cell_size.x, self.cols),
        ))
    }

    /// Area covered by cell `(row, col)`
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Rect::new(
            self.bounds.x + col as f32 * self.cell_size.x,
            self.bounds.y + row as f32 * self.cell_size.y,
            self.cell_size.x,
            self.cell_size.y,
        ))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        for cell in self.static_cells.iter_mut().chain(self.dynamic_cells.iter_mut()) {
            cell.clear();
        }
        self.entries.clear();
        self.index.clear();
    }

    fn layer_of(&self, key: K) -> u32 {
        self.index.get(&key).map_or(0, |&i| self.entries[i].layer)
    }

    fn center_distance_squared(&self, key: K, reference: Vec2) -> f32 {
        self.bbox(key)
            .map_or(f32::INFINITY, |bbox| (bbox.center() - reference).norm_squared())
    }

    /// Push the key into every cell its box touches and return those cells
    fn bucket(&mut self, entry: &Entry<K>) -> Option<CellRange> {
        let range = self.cell_range(&entry.bbox)?;
        let cols = self.cols;
        let cells = if entry.is_static {
            &mut self.static_cells
        } else {
            &mut self.dynamic_cells
        };
        for cell in range.indices(cols) {
            cells[cell].push(entry.key);
        }
        Some(range)
    }

    /// Cells touched by `rect`, clamped to the border; `None` when fully outside
    fn cell_range(&self, rect: &Rect) -> Option<CellRange> {
        if !rect.overlaps_rect(&self.bounds) {
            return None;
        }
        let min = rect.min();
        let max = rect.max();
        Some(CellRange {
            row_min: axis_index(min.y, self.bounds.y, self.cell_size.y, self.rows),
            row_max: axis_index(max.y, self.bounds.y, self.cell_size.y, self.rows),
            col_min: axis_index(min.x, self.bounds.x, self.cell_size.x, self.cols),
            col_max: axis_index(max.x, self.bounds.x, self.cell_size.x, self.cols),
        })
    }
}

impl CellRange {
    fn indices(self, cols: usize) -> impl Iterator<Item = usize> {
        (self.row_min..=self.row_max)
            .flat_map(move |row| (self.col_min..=self.col_max).map(move |col| row * cols + col))
    }
}

#[allow(clippy::cast_precision_loss)]
fn cell_size(bounds: &Rect, rows: usize, cols: usize) -> Vec2 {
    Vec2::new(bounds.width / cols as f32, bounds.height / rows as f32)
}

/// Cell index along one axis, clamped to `0..count`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_index(value: f32, origin: f32, size: f32, count: usize) -> usize {
    if size <= 0.0 {
        return 0;
    }
    let index = ((value - origin) / size).floor();
    if index.is_nan() || index <= 0.0 {
        0
    } else {
        (index as usize).min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ALL: u32 = u32::MAX;

    fn grid() -> SpatialGrid<u32> {
        SpatialGrid::new(Rect::new(0.0, 0.0, 100.0, 100.0), 10, 10)
    }

    #[test]
    fn test_rows_and_cols_clamp_to_one() {
        let grid: SpatialGrid<u32> = SpatialGrid::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0, 0);
        assert_eq!((grid.rows(), grid.cols()), (1, 1));
        assert_eq!(grid.cell_rect(0, 0), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_insert_and_query() {
        let mut grid = grid();
        grid.insert(1, Rect::new(5.0, 5.0, 2.0, 2.0), 1, false);
        grid.insert(2, Rect::new(80.0, 80.0, 2.0, 2.0), 1, false);
        assert_eq!(grid.query(&Rect::new(0.0, 0.0, 10.0, 10.0), ALL), vec![1]);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_multi_cell_entries_are_deduplicated() {
        let mut grid = grid();
        grid.insert(7, Rect::new(5.0, 5.0, 50.0, 50.0), 1, false);
        assert_eq!(grid.occupied_cells().count(), 36);
        assert_eq!(grid.query(&Rect::new(0.0, 0.0, 100.0, 100.0), ALL), vec![7]);
    }

    #[test]
    fn test_mask_filter() {
        let mut grid = grid();
        grid.insert(1, Rect::new(5.0, 5.0, 1.0, 1.0), 0b01, false);
        grid.insert(2, Rect::new(5.0, 5.0, 1.0, 1.0), 0b10, false);
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(grid.query(&area, 0b10), vec![2]);
        assert!(grid.query(&area, 0).is_empty());
    }

    #[test]
    fn test_rebucket_moves_dynamic_entries_only() {
        let mut grid = grid();
        grid.insert(1, Rect::new(5.0, 5.0, 1.0, 1.0), 1, false);
        grid.insert(2, Rect::new(5.0, 5.0, 1.0, 1.0), 1, true);
        grid.update(1, Rect::new(95.0, 95.0, 1.0, 1.0));
        let corner = Rect::new(0.0, 0.0, 9.0, 9.0);
        // recorded but not yet moved
        assert_eq!(grid.query(&corner, ALL), vec![2, 1]);
        grid.rebucket();
        assert_eq!(grid.query(&corner, ALL), vec![2]);
        assert_eq!(grid.query(&Rect::new(90.0, 90.0, 9.0, 9.0), ALL), vec![1]);
    }

    #[test]
    fn test_static_update_applies_at_once() {
        let mut grid = grid();
        grid.insert(3, Rect::new(5.0, 5.0, 1.0, 1.0), 1, true);
        grid.update(3, Rect::new(55.0, 55.0, 1.0, 1.0));
        assert!(grid.query(&Rect::new(0.0, 0.0, 9.0, 9.0), ALL).is_empty());
        assert_eq!(grid.query(&Rect::new(50.0, 50.0, 9.0, 9.0), ALL), vec![3]);
    }

    #[test]
    fn test_remove() {
        let mut grid = grid();
        grid.insert(1, Rect::new(5.0, 5.0, 30.0, 1.0), 1, false);
        grid.insert(2, Rect::new(5.0, 5.0, 1.0, 1.0), 1, true);
        assert!(grid.remove(1));
        assert!(!grid.remove(1));
        assert_eq!(grid.query(&Rect::new(0.0, 0.0, 100.0, 100.0), ALL), vec![2]);
        grid.rebucket();
        assert_eq!(grid.len(), 1);
        assert!(grid.contains(2));
    }

    #[test]
    fn test_remove_after_pending_update_clears_old_cells() {
        let mut grid = grid();
        grid.insert(1, Rect::new(5.0, 5.0, 1.0, 1.0), 1, false);
        grid.update(1, Rect::new(95.0, 95.0, 1.0, 1.0));
        assert!(grid.remove(1));
        assert_eq!(grid.len(), 0);
        assert_eq!(grid.occupied_cells().count(), 0);
        assert!(grid.query(&Rect::new(0.0, 0.0, 100.0, 100.0), ALL).is_empty());
    }

    #[test]
    fn test_boxes_outside_the_grid() {
        let mut grid = grid();
        grid.insert(1, Rect::new(-50.0, 40.0, 55.0, 1.0), 1, false);
        grid.insert(2, Rect::new(200.0, 200.0, 1.0, 1.0), 1, false);
        // clamped into the first column
        assert_eq!(grid.query(&Rect::new(0.0, 40.0, 1.0, 1.0), ALL), vec![1]);
        // recorded but bucketed nowhere
        assert_eq!(grid.len(), 2);
        assert!(grid.query(&Rect::new(0.0, 0.0, 100.0, 100.0), ALL).iter().all(|&k| k != 2));
        assert_eq!(grid.cell_of(Vec2::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_update_area_rebuckets_everything() {
        let mut grid = grid();
        grid.insert(1, Rect::new(150.0, 150.0, 1.0, 1.0), 1, true);
        grid.insert(2, Rect::new(5.0, 5.0, 1.0, 1.0), 1, false);
        grid.update_area(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(grid.cell_size(), Vec2::new(20.0, 20.0));
        assert_eq!(grid.query(&Rect::new(140.0, 140.0, 20.0, 20.0), ALL), vec![1]);
        assert_eq!(grid.cell_of(Vec2::new(150.0, 150.0)), Some((7, 7)));
    }

    #[test]
    fn test_query_sorted_by_center_distance() {
        let mut grid = grid();
        grid.insert(1, Rect::new(50.0, 0.0, 2.0, 2.0), 1, false);
        grid.insert(2, Rect::new(10.0, 0.0, 2.0, 2.0), 1, false);
        grid.insert(3, Rect::new(30.0, 0.0, 2.0, 2.0), 1, false);
        let sorted = grid.query_sorted(&Rect::new(0.0, 0.0, 100.0, 5.0), ALL, Vec2::zeros());
        assert_eq!(sorted, vec![2, 3, 1]);
    }

    #[test]
    fn test_cell_geometry() {
        let grid = grid();
        assert_eq!(grid.cell_of(Vec2::new(15.0, 35.0)), Some((3, 1)));
        // the far edge belongs to the last cell
        assert_eq!(grid.cell_of(Vec2::new(100.0, 100.0)), Some((9, 9)));
        assert_eq!(grid.cell_rect(3, 1), Some(Rect::new(10.0, 30.0, 10.0, 10.0)));
        assert_eq!(grid.cell_rect(10, 0), None);
    }

    #[test]
    fn test_query_is_superset_of_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut grid = SpatialGrid::new(Rect::new(0.0, 0.0, 1000.0, 1000.0), 12, 9);
        let mut boxes = Vec::new();
        for key in 0..200u32 {
            let bbox = Rect::new(
                rng.gen_range(0.0..950.0),
                rng.gen_range(0.0..950.0),
                rng.gen_range(1.0..50.0),
                rng.gen_range(1.0..50.0),
            );
            grid.insert(key, bbox, 1, key % 5 == 0);
            boxes.push(bbox);
        }
        grid.rebucket();

        for _ in 0..50 {
            let query = Rect::new(
                rng.gen_range(0.0..900.0),
                rng.gen_range(0.0..900.0),
                rng.gen_range(1.0..100.0),
                rng.gen_range(1.0..100.0),
            );
            let candidates: HashSet<u32> = grid.query(&query, ALL).into_iter().collect();
            for (key, bbox) in boxes.iter().enumerate() {
                if bbox.overlaps_rect(&query) {
                    assert!(candidates.contains(&(key as u32)), "missing {key} for {query:?}");
                }
            }
        }
    }
}
