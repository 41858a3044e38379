//! Memoization for the windowing core.
//!
//! [`LruCache`] is a small insertion-order cache; [`WindowCache`] wraps the
//! window size, axis offset and materialization functions with one cache
//! each, keyed by the exact argument values. A scroll that stays inside the
//! same cell hits every cache and reuses the shared coordinate structure.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

use crate::layout::{self, Axis, CellIndices};
use crate::types::{AxisOffset, CellSize, ContainerSize, GridExtent, Overscan, RenderedWindow};

const COUNT_CAPACITY: usize = 8;
const OFFSET_CAPACITY: usize = 16;
const INDICES_CAPACITY: usize = 4;

/// A bounded cache that evicts the oldest inserted entry first.
///
/// Lookups do not promote entries. A capacity of 0 disables caching.
pub struct LruCache<K: Hash + Eq + Clone, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert unless already present. Returns `true` if newly inserted.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key.clone(), value);
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Hit/miss counters across every cache of a [`WindowCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Bit pattern of a float for by-value keys. Adding `0.0` folds `-0.0` into `0.0`.
fn key_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CountKey {
    viewport: u64,
    cell: u64,
    overscan: u32,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct OffsetKey {
    axis: Axis,
    scroll: u64,
    max_padding: u64,
    cell: u64,
    overscan: u32,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct IndicesKey {
    first_row: u32,
    first_column: u32,
    rows: u32,
    columns: u32,
}

/// Value-keyed memo for the windowing core, owned by one grid instance.
///
/// Purely an optimization: every method returns what the uncached function
/// would, and a cold or cleared cache just recomputes.
pub struct WindowCache {
    counts: LruCache<CountKey, u32>,
    offsets: LruCache<OffsetKey, AxisOffset>,
    indices: LruCache<IndicesKey, Arc<CellIndices>>,
    stats: CacheStats,
}

impl Default for WindowCache {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowCache {
    pub fn new() -> Self {
        Self {
            counts: LruCache::new(COUNT_CAPACITY),
            offsets: LruCache::new(OFFSET_CAPACITY),
            indices: LruCache::new(INDICES_CAPACITY),
            stats: CacheStats::default(),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.offsets.clear();
        self.indices.clear();
    }

    /// Memoized [`layout::rendered_count`].
    pub fn rendered_count(&mut self, viewport_extent: f64, cell_size: f64, overscan: Overscan) -> u32 {
        let key = CountKey {
            viewport: key_bits(viewport_extent),
            cell: key_bits(cell_size),
            overscan: overscan.0,
        };
        if let Some(&count) = self.counts.get(&key) {
            self.stats.hits += 1;
            return count;
        }
        self.stats.misses += 1;
        let count = layout::rendered_count(viewport_extent, cell_size, overscan);
        self.counts.insert(key, count);
        count
    }

    /// Memoized [`layout::compute_rendered_window`].
    pub fn rendered_window(
        &mut self,
        container: ContainerSize,
        cell: CellSize,
        overscan: Overscan,
        extent: GridExtent,
    ) -> RenderedWindow {
        let rows = self.rendered_count(container.height, cell.height, overscan);
        let columns = self.rendered_count(container.width, cell.width, overscan);
        RenderedWindow::new(rows.min(extent.row_count), columns.min(extent.column_count))
    }

    /// Memoized [`layout::compute_axis_offset`].
    pub fn axis_offset(
        &mut self,
        axis: Axis,
        scroll_offset: f64,
        max_padding: f64,
        cell_size: f64,
        overscan: Overscan,
    ) -> AxisOffset {
        let key = OffsetKey {
            axis,
            scroll: key_bits(scroll_offset),
            max_padding: key_bits(max_padding),
            cell: key_bits(cell_size),
            overscan: overscan.0,
        };
        if let Some(&offset) = self.offsets.get(&key) {
            self.stats.hits += 1;
            return offset;
        }
        self.stats.misses += 1;
        let offset =
            layout::compute_axis_offset(axis, scroll_offset, max_padding, cell_size, overscan);
        self.offsets.insert(key, offset);
        offset
    }

    /// Memoized [`layout::materialize_coordinates`]. Hits share the same allocation.
    pub fn materialize(
        &mut self,
        first_row: u32,
        first_column: u32,
        rendered_row_count: u32,
        rendered_column_count: u32,
    ) -> Arc<CellIndices> {
        let key = IndicesKey {
            first_row,
            first_column,
            rows: rendered_row_count,
            columns: rendered_column_count,
        };
        if let Some(indices) = self.indices.get(&key) {
            self.stats.hits += 1;
            log::trace!("reusing window at row {first_row}, column {first_column}");
            return Arc::clone(indices);
        }
        self.stats.misses += 1;
        log::debug!(
            "materializing {rendered_row_count}x{rendered_column_count} window at row {first_row}, column {first_column}"
        );
        let indices = Arc::new(layout::materialize_coordinates(
            first_row,
            first_column,
            rendered_row_count,
            rendered_column_count,
        ));
        self.indices.insert(key, Arc::clone(&indices));
        indices
    }
}
