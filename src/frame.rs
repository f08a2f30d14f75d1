//! Per-frame draw commands emitted at the rendering boundary.
//!
//! The core decides what is visible; embedders map [`SpriteId`]s to real
//! resources, format the status line, and draw pixels.

use strum_macros::AsRefStr;

use crate::collision::Rect;

/// Opaque visual identities handed to the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SpriteId {
    ActorUp,
    ActorDown,
    ActorLeft,
    ActorRight,
    EnemyBlue,
    EnemyOrange,
    EnemyPink,
    EnemyRed,
    Wall,
    BonusItem,
}

/// One textured draw command: a visual identity plus its destination box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteCommand {
    pub sprite: SpriteId,
    pub dest: Rect,
}

/// The HUD text line, as structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Playing { score: u32, lives: u32 },
    GameOver { score: u32 },
}

/// Everything visible in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Walls, then enemies, then the actor, then the bonus item if present.
    pub sprites: Vec<SpriteCommand>,
    /// Remaining pellets, drawn as filled rectangles.
    pub pellets: Vec<Rect>,
    pub status: StatusLine,
    /// Set while a bonus item sits uncollected on the board.
    pub bonus_indicator: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_log_names() {
        assert_eq!(SpriteId::ActorUp.as_ref(), "actor_up");
        assert_eq!(SpriteId::EnemyBlue.as_ref(), "enemy_blue");
        assert_eq!(SpriteId::BonusItem.as_ref(), "bonus_item");
    }

    #[test]
    fn test_status_line_variants_carry_score() {
        let playing = StatusLine::Playing { score: 120, lives: 3 };
        let over = StatusLine::GameOver { score: 120 };
        assert_ne!(playing, over);
    }
}
