use std::fmt;

use gridpath_core::Point;

/// A reconstructed route, from start to end inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    cells: Vec<Point>,
}

impl Route {
    pub(crate) fn new(cells: Vec<Point>) -> Self {
        Self { cells }
    }

    /// Cells along the route, `start` first and `end` last.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of grid steps (edges), i.e. the path cost on a unit grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// True when start and end coincide.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether consecutive cells are orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1)
    }
}

/// How a search call ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The end was reached; the route has been painted on the grid.
    Found(Route),
    /// The frontier ran dry (or every depth limit was tried) without
    /// reaching the end.
    NotFound,
    /// The host cancelled the run through its [`Context`](gridpath_core::Context).
    Cancelled,
    /// Start or end was absent or outside the grid. Nothing was touched.
    MissingEndpoint,
}

impl Outcome {
    /// `true` iff a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    #[inline]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Outcome::Found(r) => Some(r),
            _ => None,
        }
    }

    /// Step count of the found route.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.route().map(Route::len)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(r) => write!(f, "found path of length {}", r.len()),
            Outcome::NotFound => f.write_str("no path"),
            Outcome::Cancelled => f.write_str("cancelled"),
            Outcome::MissingEndpoint => f.write_str("start or end not set"),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route::new(vec![Point::new(3, 7), Point::new(3, 8)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
