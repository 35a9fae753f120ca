//! City graph representation and builder.
//!
//! # Data layout
//!
//! Cities live in a dense `Vec<City>` indexed by [`CityId`]; the name → id
//! lookup is built once and never touched by the search's hot loop.
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `CityId c`, its neighbours occupy the slices:
//!
//! ```text
//! neighbor_to  [ neighbor_start[c] .. neighbor_start[c+1] ]
//! neighbor_time[ neighbor_start[c] .. neighbor_start[c+1] ]
//! ```
//!
//! so picking a random neighbour is one range computation and one index.
//!
//! # Neighbour merge rule
//!
//! Edges are undirected: every edge record gives both endpoints a neighbour
//! entry.  A pair of cities is adjacent at most once.  When several records
//! join the same pair, the neighbour keeps the slot of the first record and
//! the travel time of the last one.  A self-loop record adds one entry.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;

use op_core::{CityId, Point};

use crate::{CityRecord, EdgeRecord, GraphError, GraphResult, InvalidGraph};

// ── City ──────────────────────────────────────────────────────────────────────

/// A city: its unique name, plot position, and the reward for visiting it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    pub name:  String,
    pub pos:   Point,
    pub value: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected city graph in CSR format.
///
/// Do not construct directly; use [`GraphBuilder`] or [`build_graph`], which
/// guarantee that every city has at least one neighbour and every travel time
/// is strictly positive.
#[derive(Debug)]
pub struct Graph {
    /// City records.  Indexed by `CityId`; order = city record order.
    pub cities: Vec<City>,

    /// CSR row pointer.  Neighbours of city `c` are at positions
    /// `neighbor_start[c] .. neighbor_start[c+1]`.  Length = `city_count + 1`.
    pub neighbor_start: Vec<u32>,

    /// Neighbour city of each adjacency entry.
    pub neighbor_to: Vec<CityId>,

    /// Travel time of each adjacency entry.  Always `> 0`.
    pub neighbor_time: Vec<f64>,

    edge_count: usize,
    index:      FxHashMap<String, CityId>,
}

impl Graph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of distinct undirected city pairs joined by an edge.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// All city ids in graph iteration order (the order of the city records).
    pub fn ids(&self) -> impl ExactSizeIterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(|i| CityId(i as u32))
    }

    // ── City lookup ───────────────────────────────────────────────────────

    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    #[inline]
    pub fn name(&self, id: CityId) -> &str {
        &self.cities[id.index()].name
    }

    #[inline]
    pub fn value(&self, id: CityId) -> f64 {
        self.cities[id.index()].value
    }

    /// Resolve a city name to its id.
    pub fn id_of(&self, name: &str) -> Option<CityId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, id: CityId) -> bool {
        id.index() < self.cities.len()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Neighbours of `city` as parallel `(targets, times)` slices.
    ///
    /// Contiguous memory, no allocation.
    #[inline]
    pub fn neighbors(&self, city: CityId) -> (&[CityId], &[f64]) {
        let start = self.neighbor_start[city.index()] as usize;
        let end   = self.neighbor_start[city.index() + 1] as usize;
        (&self.neighbor_to[start..end], &self.neighbor_time[start..end])
    }

    /// Number of neighbours of `city`.
    #[inline]
    pub fn degree(&self, city: CityId) -> usize {
        let start = self.neighbor_start[city.index()] as usize;
        let end   = self.neighbor_start[city.index() + 1] as usize;
        end - start
    }

    /// Travel time between two adjacent cities, or `None` if not adjacent.
    pub fn travel_time(&self, from: CityId, to: CityId) -> Option<f64> {
        let (targets, times) = self.neighbors(from);
        targets.iter().position(|&t| t == to).map(|i| times[i])
    }

    /// Cheapest edge in the graph.  Together with the time budget this bounds
    /// the length of any walk: at most `budget / min_edge_time + 1` steps.
    pub fn min_edge_time(&self) -> Option<f64> {
        self.neighbor_time.iter().copied().reduce(f64::min)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Cities must be added before the edges that mention them.  Validation
/// happens as early as possible: `add_city` rejects duplicates and bad reward
/// values, `add_edge` rejects unknown names and non-positive times, and
/// `build` rejects isolated cities.
///
/// # Example
///
/// ```
/// use op_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_city("A", 0.0, 0.0, 1.0).unwrap();
/// b.add_city("B", 1.0, 0.0, 2.0).unwrap();
/// b.add_edge("A", "B", 5.0).unwrap();
/// let graph = b.build().unwrap();
/// assert_eq!(graph.city_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    cities:     Vec<City>,
    index:      FxHashMap<String, CityId>,
    adjacency:  Vec<Vec<(CityId, f64)>>,
    /// `(city, neighbour)` → slot in `adjacency[city]`.
    slots:      FxHashMap<(CityId, CityId), usize>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of cities and edge records.
    pub fn with_capacity(cities: usize, edges: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(cities);
        let mut slots = FxHashMap::default();
        slots.reserve(edges * 2);
        Self {
            cities: Vec::with_capacity(cities),
            index,
            adjacency: Vec::with_capacity(cities),
            slots,
            edge_count: 0,
        }
    }

    /// Add a city and return its `CityId` (sequential from 0).
    pub fn add_city(&mut self, name: &str, x: f64, y: f64, value: f64) -> GraphResult<CityId> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(InvalidGraph::InvalidValue { city: name.to_owned(), value }.into());
        }
        let id = CityId(self.cities.len() as u32);
        match self.index.entry(name.to_owned()) {
            Entry::Occupied(_) => return Err(InvalidGraph::DuplicateCity(name.to_owned()).into()),
            Entry::Vacant(e) => {
                e.insert(id);
            }
        }
        self.cities.push(City { name: name.to_owned(), pos: Point::new(x, y), value });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add an undirected edge between two named cities.
    pub fn add_edge(&mut self, city_from: &str, city_to: &str, time: f64) -> GraphResult<()> {
        let unknown = |missing: &str| GraphError::UnknownCity {
            city_from: city_from.to_owned(),
            city_to:   city_to.to_owned(),
            missing:   missing.to_owned(),
        };
        let a = self.id_of(city_from).ok_or_else(|| unknown(city_from))?;
        let b = self.id_of(city_to).ok_or_else(|| unknown(city_to))?;
        self.add_road(a, b, time)
    }

    /// Add an undirected edge between two cities already added to this
    /// builder.
    ///
    /// # Panics
    /// Panics if `a` or `b` was not returned by this builder's `add_city`.
    pub fn add_road(&mut self, a: CityId, b: CityId, time: f64) -> GraphResult<()> {
        // `!(time > 0.0)` also rejects NaN.
        if !(time > 0.0) {
            return Err(InvalidGraph::NonPositiveTime {
                city_from: self.cities[a.index()].name.clone(),
                city_to:   self.cities[b.index()].name.clone(),
                time,
            }
            .into());
        }
        if self.link(a, b, time) {
            self.edge_count += 1;
        }
        if a != b {
            self.link(b, a, time);
        }
        Ok(())
    }

    /// Resolve a name added earlier.
    pub fn id_of(&self, name: &str) -> Option<CityId> {
        self.index.get(name).copied()
    }

    pub fn city_count(&self) -> usize { self.cities.len() }
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Fails with [`InvalidGraph::IsolatedCity`] for the first city (in
    /// record order) that no edge touches.
    pub fn build(self) -> GraphResult<Graph> {
        if let Some(i) = self.adjacency.iter().position(Vec::is_empty) {
            return Err(InvalidGraph::IsolatedCity(self.cities[i].name.clone()).into());
        }

        let city_count = self.cities.len();
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();

        let mut neighbor_start = Vec::with_capacity(city_count + 1);
        let mut neighbor_to    = Vec::with_capacity(entries);
        let mut neighbor_time  = Vec::with_capacity(entries);
        neighbor_start.push(0u32);
        for list in &self.adjacency {
            for &(to, time) in list {
                neighbor_to.push(to);
                neighbor_time.push(time);
            }
            neighbor_start.push(neighbor_to.len() as u32);
        }
        debug_assert_eq!(neighbor_start[city_count] as usize, entries);

        debug!(cities = city_count, edges = self.edge_count, "city graph built");

        Ok(Graph {
            cities: self.cities,
            neighbor_start,
            neighbor_to,
            neighbor_time,
            edge_count: self.edge_count,
            index: self.index,
        })
    }

    /// Record `to` as a neighbour of `from`.  Returns `true` if the pair is
    /// new, `false` if an existing entry had its time overwritten.
    fn link(&mut self, from: CityId, to: CityId, time: f64) -> bool {
        let list = &mut self.adjacency[from.index()];
        match self.slots.entry((from, to)) {
            Entry::Occupied(e) => {
                list[*e.get()].1 = time;
                false
            }
            Entry::Vacant(e) => {
                e.insert(list.len());
                list.push((to, time));
                true
            }
        }
    }
}

// ── Tabular construction ──────────────────────────────────────────────────────

/// Build a [`Graph`] from city and edge records.
///
/// Pure: no I/O and no side effects besides a debug log line.  Errors:
///
/// - [`GraphError::UnknownCity`] if an edge names a city absent from
///   `cities`.
/// - [`GraphError::Invalid`] for a non-positive edge time, a city without
///   neighbours, a duplicate city name, or a negative reward.
pub fn build_graph(cities: &[CityRecord], edges: &[EdgeRecord]) -> GraphResult<Graph> {
    let mut b = GraphBuilder::with_capacity(cities.len(), edges.len());
    for c in cities {
        b.add_city(&c.name, c.x, c.y, c.value)?;
    }
    for e in edges {
        b.add_edge(&e.city_from, &e.city_to, e.time)?;
    }
    b.build()
}
