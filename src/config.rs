use std::path::Path;

use crate::error::ConfigError;

/// Largest board the interface accepts.
pub const MAX_SIDE_LENGTH: usize = 11;

/// Board geometry, fixed for the lifetime of a game.
///
/// Invariant: `side_length >= connect_length >= 2` and
/// `side_length <= MAX_SIDE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    side_length: usize,
    connect_length: usize,
}

impl BoardConfig {
    /// Build a validated board configuration.
    pub fn new(side_length: usize, connect_length: usize) -> Result<Self, ConfigError> {
        let config = BoardConfig {
            side_length,
            connect_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Number of cells along each side of the (square) board.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Pieces in a row needed to win.
    pub fn connect_length(&self) -> usize {
        self.connect_length
    }

    /// Column that earns the center bonus.
    pub fn center_column(&self) -> usize {
        self.side_length / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_length < 2 {
            return Err(ConfigError::Validation(
                "board.connect_length must be >= 2".into(),
            ));
        }
        if self.side_length < self.connect_length {
            return Err(ConfigError::Validation(
                "board.side_length must be >= board.connect_length".into(),
            ));
        }
        if self.side_length > MAX_SIDE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.side_length must be <= {MAX_SIDE_LENGTH}"
            )));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            side_length: 7,
            connect_length: 4,
        }
    }
}

/// Who controls player 2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Computer picks a random valid column.
    Easy,
    /// Computer picks the best column by heuristic score.
    #[default]
    Hard,
    /// Two humans share the keyboard and mouse.
    Multiplayer,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Easy, GameMode::Hard, GameMode::Multiplayer];

    /// Label shown on the setup screen.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Easy => "Easy Level",
            GameMode::Hard => "Hard Level",
            GameMode::Multiplayer => "Multiplayer",
        }
    }

    pub fn has_computer(self) -> bool {
        self != GameMode::Multiplayer
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Seed for the computer players' random choices. Unset means seeded
    /// from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
