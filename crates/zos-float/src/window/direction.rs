//! Resize handle directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDirectionError;

/// Edge or corner a resize handle sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// East (right) edge
    E,
    /// West (left) edge
    W,
    /// North (top) edge
    N,
    /// South (bottom) edge
    S,
    /// Southeast corner
    Se,
    /// Southwest corner
    Sw,
    /// Northeast corner
    Ne,
    /// Northwest corner
    Nw,
}

/// Horizontal edge moved by a resize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalEdge {
    East,
    West,
}

/// Vertical edge moved by a resize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalEdge {
    North,
    South,
}

impl Direction {
    /// All handles, in the order hosts create them
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::S,
        Direction::Se,
        Direction::W,
        Direction::N,
        Direction::Ne,
        Direction::Sw,
        Direction::Nw,
    ];

    /// Horizontal edge this handle moves, if any
    #[inline]
    pub fn horizontal(self) -> Option<HorizontalEdge> {
        match self {
            Direction::E | Direction::Se | Direction::Ne => Some(HorizontalEdge::East),
            Direction::W | Direction::Sw | Direction::Nw => Some(HorizontalEdge::West),
            Direction::N | Direction::S => None,
        }
    }

    /// Vertical edge this handle moves, if any
    #[inline]
    pub fn vertical(self) -> Option<VerticalEdge> {
        match self {
            Direction::S | Direction::Se | Direction::Sw => Some(VerticalEdge::South),
            Direction::N | Direction::Ne | Direction::Nw => Some(VerticalEdge::North),
            Direction::E | Direction::W => None,
        }
    }

    /// Check if this is a corner (dual-axis) handle
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(self, Direction::Se | Direction::Sw | Direction::Ne | Direction::Nw)
    }

    /// Symbol used for the handle's `data-direction` attribute
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::E => "e",
            Direction::W => "w",
            Direction::N => "n",
            Direction::S => "s",
            Direction::Se => "se",
            Direction::Sw => "sw",
            Direction::Ne => "ne",
            Direction::Nw => "nw",
        }
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            Direction::E => "e-resize",
            Direction::W => "w-resize",
            Direction::N => "n-resize",
            Direction::S => "s-resize",
            Direction::Se => "se-resize",
            Direction::Sw => "sw-resize",
            Direction::Ne => "ne-resize",
            Direction::Nw => "nw-resize",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(Direction::E),
            "w" => Ok(Direction::W),
            "n" => Ok(Direction::N),
            "s" => Ok(Direction::S),
            "se" => Ok(Direction::Se),
            "sw" => Ok(Direction::Sw),
            "ne" => Ok(Direction::Ne),
            "nw" => Ok(Direction::Nw),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_symbols() {
        for dir in Direction::ALL {
            let parsed: Direction = dir.symbol().parse().unwrap();
            assert_eq!(parsed, dir);
        }
    }

    #[test]
    fn test_parse_invalid_symbol() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError("north".to_string()));
        assert!("".parse::<Direction>().is_err());
        assert!("SE".parse::<Direction>().is_err());
    }

    #[test]
    fn test_single_axis_handles() {
        assert_eq!(Direction::E.horizontal(), Some(HorizontalEdge::East));
        assert_eq!(Direction::E.vertical(), None);
        assert_eq!(Direction::N.horizontal(), None);
        assert_eq!(Direction::N.vertical(), Some(VerticalEdge::North));
        assert!(!Direction::W.is_corner());
    }

    #[test]
    fn test_corner_handles_move_both_axes() {
        for dir in Direction::ALL.into_iter().filter(|d| d.is_corner()) {
            assert!(dir.horizontal().is_some(), "{dir} should move a horizontal edge");
            assert!(dir.vertical().is_some(), "{dir} should move a vertical edge");
        }
        assert_eq!(Direction::Sw.horizontal(), Some(HorizontalEdge::West));
        assert_eq!(Direction::Sw.vertical(), Some(VerticalEdge::South));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&Direction::Nw).unwrap();
        assert_eq!(json, "\"nw\"");
        let back: Direction = serde_json::from_str("\"se\"").unwrap();
        assert_eq!(back, Direction::Se);
    }

    #[test]
    fn test_cursor_names() {
        assert_eq!(Direction::Se.cursor(), "se-resize");
        assert_eq!(Direction::W.cursor(), "w-resize");
    }
}
