use std::fmt::{Display, Formatter};

/// Side of the anchor box on which a new box is attempted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    Left,
    Below,
    Right,
}

impl Direction {
    /// Priority in which the spiral heuristic tries the directions
    pub const SPIRAL: [Direction; 4] = [
        Direction::Above,
        Direction::Left,
        Direction::Below,
        Direction::Right,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Above => "above",
            Direction::Left => "left",
            Direction::Below => "below",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}
