//! Construction parameters for a game.

use crate::board::check_dimension;
use crate::{GameError, DEFAULT_DIMENSION};

/// Everything needed to start a game: the board size and who plays which color.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub dimension: usize,
    pub dark_player: String,
    pub light_player: String,
}

impl Default for GameConfig {
    /// A standard 8x8 game between players named after their colors.
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            dark_player: "Dark".to_string(),
            light_player: "Light".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_players(
        mut self,
        dark_player: impl Into<String>,
        light_player: impl Into<String>,
    ) -> Self {
        self.dark_player = dark_player.into();
        self.light_player = light_player.into();
        self
    }

    /// Check that a game can be built from this configuration.
    pub fn validate(&self) -> Result<(), GameError> {
        check_dimension(self.dimension)?;
        Ok(())
    }
}
