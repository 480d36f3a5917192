use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type Offset = (i32, i32, i32);

/// Axis-aligned unit steps (shared face).
pub const FACE_OFFSETS: [Offset; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Face steps plus the 12 two-axis diagonals (shared edge).
pub const EDGE_OFFSETS: [Offset; 18] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
];

/// Edge steps plus the 8 three-axis diagonals (shared corner).
pub const CORNER_OFFSETS: [Offset; 26] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1),
];

/// Which neighbors count as touching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Adjacency {
    #[default]
    Face,
    Edge,
    Corner,
}

impl Adjacency {
    pub const ALL: [Adjacency; 3] = [Adjacency::Face, Adjacency::Edge, Adjacency::Corner];

    #[inline]
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Adjacency::Face => &FACE_OFFSETS,
            Adjacency::Edge => &EDGE_OFFSETS,
            Adjacency::Corner => &CORNER_OFFSETS,
        }
    }

    #[inline]
    pub fn neighbor_count(self) -> usize {
        self.offsets().len()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Adjacency::Face => "face",
            Adjacency::Edge => "edge",
            Adjacency::Corner => "corner",
        }
    }

    /// Phrase used in validation messages ("connected by faces").
    pub fn description(self) -> &'static str {
        match self {
            Adjacency::Face => "by faces",
            Adjacency::Edge => "by faces and edges",
            Adjacency::Corner => "by faces, edges and corners",
        }
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown adjacency rule '{0}' (expected face, edge or corner)")]
pub struct ParseAdjacencyError(pub String);

impl FromStr for Adjacency {
    type Err = ParseAdjacencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "face" => Ok(Adjacency::Face),
            "edge" => Ok(Adjacency::Edge),
            "corner" => Ok(Adjacency::Corner),
            _ => Err(ParseAdjacencyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nonzero_axes(o: Offset) -> usize {
        [o.0, o.1, o.2].iter().filter(|v| **v != 0).count()
    }

    #[test]
    fn neighbor_counts() {
        assert_eq!(Adjacency::Face.neighbor_count(), 6);
        assert_eq!(Adjacency::Edge.neighbor_count(), 18);
        assert_eq!(Adjacency::Corner.neighbor_count(), 26);
    }

    #[test]
    fn offsets_are_unit_steps_with_expected_axes() {
        for o in FACE_OFFSETS {
            assert_eq!(nonzero_axes(o), 1);
        }
        assert_eq!(EDGE_OFFSETS.iter().filter(|o| nonzero_axes(**o) == 2).count(), 12);
        assert_eq!(CORNER_OFFSETS.iter().filter(|o| nonzero_axes(**o) == 3).count(), 8);
        for o in CORNER_OFFSETS {
            assert!([o.0, o.1, o.2].iter().all(|v| (-1..=1).contains(v)));
        }
    }

    #[test]
    fn each_rule_is_strict_superset_of_previous() {
        for pair in Adjacency::ALL.windows(2) {
            let (weak, strong) = (pair[0].offsets(), pair[1].offsets());
            assert!(weak.iter().all(|o| strong.contains(o)));
            assert!(strong.len() > weak.len());
        }
    }

    #[test]
    fn offsets_are_unique() {
        for rule in Adjacency::ALL {
            let offs = rule.offsets();
            for (i, a) in offs.iter().enumerate() {
                assert!(!offs[i + 1..].contains(a), "{rule}: duplicate {a:?}");
            }
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(" Corner ".parse::<Adjacency>(), Ok(Adjacency::Corner));
        assert!("vertex".parse::<Adjacency>().is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(rule in any::<Adjacency>()) {
            prop_assert_eq!(rule.to_string().parse::<Adjacency>(), Ok(rule));
        }
    }
}
