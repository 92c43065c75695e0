//! Shared types module - piece kinds, cells, phases, commands and rule constants
//!
//! Everything in here is plain data. The rules engine, the terminal view and the
//! input mapping all speak these types, so none of them depends on another.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top row; rows
//! grow downward. Falling pieces may sit partially above row 0 (negative rows).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_INTERVAL_MS` | 700 | Gravity interval at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL_MS` | 80 | Gravity floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level-up |
//! | `OVERFLOW_LINE_SCORE` | 200 | Per-line gain beyond the table |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! let kind: PieceKind = "t".parse().unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color().to_string(), "#a000f0");
//!
//! let command: Command = "hardDrop".parse().unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Default board width in cells
pub const BOARD_COLS: u8 = 10;

/// Default board height in cells
pub const BOARD_ROWS: u8 = 20;

/// Smallest accepted board dimension (an upright I piece must fit)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension
pub const MAX_BOARD_DIM: u8 = 64;

/// Horizontal offsets tried, in order, when a rotation collides
pub const KICK_OFFSETS: [i16; 5] = [0, -1, 1, -2, 2];

/// Base gain for clearing 0..=4 lines at once (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Per-line base gain when more rows clear than `LINE_SCORES` covers
pub const OVERFLOW_LINE_SCORE: u32 = 200;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Fall interval at level 1
pub const INITIAL_FALL_INTERVAL_MS: u32 = 700;

/// Fall interval reduction per level above 1
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// Fall interval never drops below this
pub const MIN_FALL_INTERVAL_MS: u32 = 80;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed color of this kind
    pub const fn color(self) -> ColorToken {
        match self {
            PieceKind::I => ColorToken::new(0x00, 0xf0, 0xf0),
            PieceKind::J => ColorToken::new(0x00, 0x00, 0xf0),
            PieceKind::L => ColorToken::new(0xf0, 0xa0, 0x00),
            PieceKind::O => ColorToken::new(0xf0, 0xf0, 0x00),
            PieceKind::S => ColorToken::new(0x00, 0xf0, 0x00),
            PieceKind::T => ColorToken::new(0xa0, 0x00, 0xf0),
            PieceKind::Z => ColorToken::new(0xf0, 0x00, 0x00),
        }
    }

    /// Lowercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

impl FromStr for PieceKind {
    type Err = ParseNameError;

    /// Case-insensitive single letter.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!("I".parse::<PieceKind>(), Ok(PieceKind::I));
    /// assert!("x".parse::<PieceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseNameError::new("piece kind"))
    }
}

/// 24-bit color attached to a piece kind and to every block it leaves behind.
///
/// Displays and serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorToken {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A locked block: which piece left it and in what color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    pub kind: PieceKind,
    pub color: ColorToken,
}

impl From<PieceKind> for Block {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            color: kind.color(),
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(Block)`: locked
pub type Cell = Option<Block>;

/// Lifecycle of one game session
///
/// `Idle → Running ⇄ Paused`, and `Running → GameOver` on top-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GamePhase {
    /// Before the first start, or after a reset
    #[default]
    Idle,
    Running,
    Paused,
    /// Terminal until a new start or reset
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Commands an input collaborator can send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Begin a new game (from idle or after game over)
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, settling it if it cannot descend
    SoftDrop,
    /// Drop piece as far as it goes and settle it
    HardDrop,
    /// Rotate piece 90° clockwise with wall kicks
    Rotate,
    /// Hold or swap the active piece
    Hold,
    /// Pause when running, resume when paused
    TogglePause,
    /// Clear everything and return to idle
    Reset,
}

impl Command {
    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Rotate => "rotate",
            Command::Hold => "hold",
            Command::TogglePause => "togglePause",
            Command::Reset => "reset",
        }
    }
}

impl FromStr for Command {
    type Err = ParseNameError;

    /// Case-insensitive camelCase name.
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!("moveLeft".parse::<Command>(), Ok(Command::MoveLeft));
    /// assert_eq!("harddrop".parse::<Command>(), Ok(Command::HardDrop));
    /// assert!("jump".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Command; 9] = [
            Command::Start,
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::HardDrop,
            Command::Rotate,
            Command::Hold,
            Command::TogglePause,
            Command::Reset,
        ];
        ALL.into_iter()
            .find(|command| command.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseNameError::new("command"))
    }
}

/// Returned when a name does not match any variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNameError {
    kind: &'static str,
}

impl ParseNameError {
    /// `kind` names what was being parsed, e.g. `"piece kind"`
    pub const fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} name", self.kind)
    }
}

impl std::error::Error for ParseNameError {}
