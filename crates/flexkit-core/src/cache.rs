// crates/flexkit-core/src/cache.rs
//
// Bounded style resolver cache shared by one set of factory-produced
// components. Resolved descriptors are handed out as `Rc` so repeated
// renders with identical inputs observe the same allocation.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use crate::{FlexAlign, FlexDirection, FlexJustify};

/// Default maximum number of distinct style keys kept per cache.
///
/// The input space is enumerations times a small integer spacing range, so
/// the bound only matters for pathological numeric `space` values.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Derive the cache key from the six style-affecting inputs.
///
/// Fields are joined with `|`, which none of the enumeration names contain.
/// A caller-supplied spacing literal containing `|` violates the contract.
pub fn style_key(
    direction: FlexDirection,
    full_width: bool,
    full_height: bool,
    align: FlexAlign,
    justify: FlexJustify,
    space: impl fmt::Display,
) -> String {
    format!("{direction}|{full_width}|{full_height}|{align}|{justify}|{space}")
}

/// Key -> descriptor cache with strict FIFO eviction by insertion order.
///
/// Not LRU: a hit does not refresh an entry's position. Insertion past the
/// capacity evicts the single oldest-inserted entry first, keeping lookups
/// O(1) amortized.
pub struct StyleCache<S> {
    entries: HashMap<String, Rc<S>>,
    order: VecDeque<String>,
    capacity: usize,
}

impl<S> StyleCache<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Return the descriptor for `key`, building it on first occurrence.
    ///
    /// Read, eviction, and insert happen within this single call; the cache
    /// is single-threaded state and is never locked.
    pub fn resolve(&mut self, key: String, build: impl FnOnce() -> S) -> Rc<S> {
        if let Some(style) = self.entries.get(&key) {
            return Rc::clone(style);
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                tracing::trace!("Style cache evicted oldest entry: {}", oldest);
            }
        }

        tracing::trace!("Style cache miss: {}", key);
        let style = Rc::new(build());
        self.entries.insert(key.clone(), Rc::clone(&style));
        self.order.push_back(key);
        style
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
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
}

impl<S> fmt::Debug for StyleCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
