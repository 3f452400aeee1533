//! Deduplicated location tables.
//!
//! Sources, receivers and CDP bins are identified by their coordinate pair
//! alone. Everything else on a row (FFID, elevation, CDP number) is payload
//! taken from the first trace that reached that coordinate.

use super::RawTraceRecord;
use std::collections::btree_map::{self, BTreeMap, Entry};

/// Coordinate identity, ordered by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A row type that can be stored in a [`LocationTable`].
pub trait LocationEntry: Copy {
    /// Build the row from a trace record.
    fn from_record(record: &RawTraceRecord) -> Self;

    /// Identity of the row.
    fn coord(&self) -> Coord;
}

/// Unique seismic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEntry {
    /// First-seen field record number.
    pub ffid: i32,
    /// First-seen source point number.
    pub source: i32,
    /// Source X.
    pub x: i32,
    /// Source Y.
    pub y: i32,
    /// First-seen source elevation.
    pub elevation: i32,
}

impl LocationEntry for SourceEntry {
    fn from_record(record: &RawTraceRecord) -> Self {
        Self {
            ffid: record.ffid,
            source: record.source,
            x: record.sou_x,
            y: record.sou_y,
            elevation: record.sou_elev,
        }
    }

    fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// Unique receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiverEntry {
    /// Receiver X.
    pub x: i32,
    /// Receiver Y.
    pub y: i32,
    /// First-seen receiver elevation.
    pub elevation: i32,
}

impl LocationEntry for ReceiverEntry {
    fn from_record(record: &RawTraceRecord) -> Self {
        Self {
            x: record.rec_x,
            y: record.rec_y,
            elevation: record.rec_elev,
        }
    }

    fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// Unique CDP bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdpEntry {
    /// First-seen CDP number.
    pub cdp: i32,
    /// CDP X.
    pub x: i32,
    /// CDP Y.
    pub y: i32,
}

impl LocationEntry for CdpEntry {
    fn from_record(record: &RawTraceRecord) -> Self {
        Self {
            cdp: record.cdp,
            x: record.cdp_x,
            y: record.cdp_y,
        }
    }

    fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// Ordered, deduplicated set of location rows.
#[derive(Debug, Clone)]
pub struct LocationTable<E> {
    entries: BTreeMap<Coord, E>,
}

impl<E: LocationEntry> LocationTable<E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a row. Returns `false` and keeps the existing row if its
    /// coordinate is already present.
    pub fn insert(&mut self, entry: E) -> bool {
        match self.entries.entry(entry.coord()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            },
            Entry::Occupied(_) => false,
        }
    }

    /// Insert the row derived from a trace record.
    pub fn insert_record(&mut self, record: &RawTraceRecord) -> bool {
        self.insert(E::from_record(record))
    }

    /// Row at a coordinate.
    pub fn get(&self, coord: Coord) -> Option<&E> {
        self.entries.get(&coord)
    }

    /// Number of unique rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in ascending coordinate order.
    pub fn iter(&self) -> btree_map::Values<'_, Coord, E> {
        self.entries.values()
    }

    /// Coordinates in ascending order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.keys().copied()
    }
}

impl<E: LocationEntry> Default for LocationTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: LocationEntry> IntoIterator for &'a LocationTable<E> {
    type Item = &'a E;
    type IntoIter = btree_map::Values<'a, Coord, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
