//! Strongly typed city index.
//!
//! `CityId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! the graph's arrays via `id.0 as usize`, but callers should prefer
//! [`CityId::index`] for clarity.

use std::fmt;

/// Dense index of a city in a `Graph`.  Assigned in city record order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// Sentinel meaning "no valid city".
    pub const INVALID: CityId = CityId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for CityId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl From<CityId> for usize {
    #[inline(always)]
    fn from(id: CityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CityId, Self::Error> {
        u32::try_from(n).map(CityId)
    }
}
