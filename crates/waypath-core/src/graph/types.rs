use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};

/// Bounds required of a node label.
///
/// Any hashable, totally ordered, cloneable label works; the CLI uses `String`.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeId for T {}

/// The cost of traversing a single edge, or an accumulated path cost.
///
/// Always finite. Negative values can be constructed, but shortest-path
/// results are only correct when every weight is `>= 0`
/// (see [`crate::graph::Graph::validate_weights`]).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            bail_invalid!("edge weight", value);
        }
        Ok(Weight(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Total order over weights, usable for heap ordering
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl TryFrom<f64> for Weight {
    type Error = WaypathError;

    fn try_from(value: f64) -> Result<Self> {
        Weight::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> f64 {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An outgoing edge.
///
/// `weight: None` marks an edge that exists for reachability (BFS) but has
/// no traversal cost; shortest-path computation skips it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N> {
    pub to: N,
    pub weight: Option<Weight>,
}

impl<N> Edge<N> {
    pub fn new(to: N, weight: Option<Weight>) -> Self {
        Self { to, weight }
    }

    pub fn unweighted(to: N) -> Self {
        Self { to, weight: None }
    }
}
