use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points, rounded down.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy).floor() as i32
}

/// Distance estimate used by A*.
///
/// Both never overestimate the number of orthogonal unit steps, so A* stays
/// optimal with either; Manhattan is exact on an open grid and explores less.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclidean => euclidean(from, to),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" | "euclidian" => Ok(Heuristic::Euclidean),
            other => Err(format!("unknown heuristic {other:?}")),
        }
    }
}
