//! Facing directions and their pixel-space vectors.

use glam::IVec2;
use strum_macros::{AsRefStr, EnumCount, EnumIter};

/// The four cardinal directions.
///
/// Screen coordinates grow downward, so [`Direction::Up`] maps to `-Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Whether this direction moves along the x axis. Constant time.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the velocity vector for this direction at the given speed,
    /// in pixels per tick.
    pub fn velocity(self, speed: i32) -> IVec2 {
        IVec2::from(self) * speed
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vectors() {
        assert_eq!(IVec2::from(Direction::Up), IVec2::new(0, -1));
        assert_eq!(IVec2::from(Direction::Down), IVec2::new(0, 1));
        assert_eq!(IVec2::from(Direction::Left), IVec2::new(-1, 0));
        assert_eq!(IVec2::from(Direction::Right), IVec2::new(1, 0));
    }

    #[test]
    fn test_velocity_scales_unit_vector() {
        assert_eq!(Direction::Right.velocity(8), IVec2::new(8, 0));
        assert_eq!(Direction::Up.velocity(16), IVec2::new(0, -16));
    }

    #[test]
    fn test_horizontal() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }

    #[test]
    fn test_enum_metadata_matches_directions() {
        use strum::{EnumCount as _, IntoEnumIterator};

        assert_eq!(Direction::COUNT, Direction::DIRECTIONS.len());
        assert!(Direction::iter().eq(Direction::DIRECTIONS));
    }

    #[test]
    fn test_log_names() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Right.as_ref(), "right");
    }
}
