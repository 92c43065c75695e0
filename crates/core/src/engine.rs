//! Engine module - the game state machine
//!
//! The engine owns the board, the active piece, the next and held pieces and
//! the score/level/lines counters. It has no clock: the caller drives gravity
//! by calling [`Engine::tick`] every [`Engine::fall_interval_ms`] and re-reads
//! the interval after each tick, since line clears can change it.
//!
//! Every command is total. Calling one in a phase where it makes no sense
//! (moving while paused, holding twice, ticking after game over) does nothing
//! and returns `false`.

use log::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{fall_interval_ms, level_for_lines, score_for_clear};
use crate::shape::Shape;
use crate::snapshot::{GameSnapshot, PieceSnapshot, PreviewSnapshot};
use crate::types::{Command, GamePhase, PieceKind, INITIAL_FALL_INTERVAL_MS};

/// A piece set aside by hold, in the orientation it had when held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldPiece {
    pub kind: PieceKind,
    pub shape: Shape,
}

/// Outcome of the most recent lock, for presentation effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Rows removed by this lock
    pub cleared: u32,
    /// Score added by this lock
    pub gain: u32,
    pub level_up: bool,
    /// The next piece could not spawn and the game ended
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    generator: PieceGenerator,
    active: Option<Piece>,
    next: Option<PieceKind>,
    held: Option<HeldPiece>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    can_hold: bool,
    /// Monotonic id of the active piece (increments on spawn and hold swaps)
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an idle engine for `config`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create an idle engine on the default 10x20 board
    pub fn with_seed(seed: u32) -> Self {
        Self::from_valid_config(GameConfig::with_seed(seed))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let mut generator = PieceGenerator::new(config.randomizer, config.seed);
        let next = Some(generator.next_kind());

        Self {
            config,
            board: Board::with_size(config.cols, config.rows),
            generator,
            active: None,
            next,
            held: None,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            can_hold: true,
            piece_id: 0,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval; the caller's scheduler should follow it
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn held(&self) -> Option<HeldPiece> {
        self.held
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (puzzles, tests).
    ///
    /// The caller must not lock cells under the active piece.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the upcoming piece (puzzles, tutorials, tests)
    pub fn set_next_piece(&mut self, kind: PieceKind) {
        self.next = Some(kind);
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would land on if hard-dropped
    pub fn ghost_y(&self) -> Option<i16> {
        let active = self.active?;
        let mut y = active.y;
        while !self.board.collides(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Start a new game. Valid from `Idle` and `GameOver`.
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
            return false;
        }

        self.clear_session();
        self.next = Some(self.generator.next_kind());
        self.phase = GamePhase::Running;
        info!(
            "game started on {}x{} board ({} randomizer)",
            self.board.width(),
            self.board.height(),
            self.generator.randomizer()
        );

        self.spawn();
        true
    }

    /// Promote the next piece to active and draw a fresh next piece.
    ///
    /// If the new piece collides at its spawn position the game is over and
    /// no piece becomes active. No-op outside `Running`.
    pub fn spawn(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.generator.next_kind(),
        };
        self.next = Some(self.generator.next_kind());

        self.place_active(Piece::spawn(kind, self.board.width()))
    }

    fn place_active(&mut self, piece: Piece) -> bool {
        if piece.collides(&self.board) {
            self.active = None;
            self.end_game("spawn position blocked");
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            "spawned {} at ({}, {}), piece #{}",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            self.piece_id
        );
        true
    }

    /// Try to move the active piece; the move commits only if it fits
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate clockwise with wall kicks; silently rejected if nothing fits
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.rotated(&self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Gravity step: move down one row, or settle the piece if it cannot.
    /// Only valid while `Running`.
    pub fn tick(&mut self) -> bool {
        self.step_down()
    }

    /// Player-requested single step down; same settling rules as gravity
    pub fn soft_drop(&mut self) -> bool {
        self.step_down()
    }

    /// Drop the active piece as far as it goes, then settle it
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return false;
        }

        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        debug!("hard drop fell {rows} rows");

        self.settle();
        true
    }

    fn step_down(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.settle();
        }
        true
    }

    /// The active piece cannot descend: top out if it never fully entered
    /// the board, otherwise lock it.
    fn settle(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        if active.y < 0 {
            self.end_game("piece stuck above the board");
            return;
        }
        self.lock_active(active);
    }

    fn lock_active(&mut self, piece: Piece) {
        let written = self.board.lock(&piece.shape, piece.x, piece.y, piece.block());
        self.active = None;

        let cleared = self.board.clear_full_rows() as u32;
        let gain = score_for_clear(cleared, self.level);
        self.score = self.score.saturating_add(gain);
        self.lines = self.lines.saturating_add(cleared);

        let level = level_for_lines(self.lines);
        let level_up = level > self.level;
        self.level = level;
        self.fall_interval_ms = fall_interval_ms(level);
        self.can_hold = true;

        debug!(
            "locked {} ({written} cells) at ({}, {}): cleared {cleared}, +{gain}",
            piece.kind.as_str(),
            piece.x,
            piece.y
        );
        if level_up {
            info!(
                "level {} reached, fall interval {}ms",
                self.level, self.fall_interval_ms
            );
        }

        let spawned = self.spawn();
        self.last_event = Some(LockEvent {
            cleared,
            gain,
            level_up,
            topped_out: !spawned,
        });
    }

    /// Set the active piece aside, once per lock.
    ///
    /// With an empty hold slot the next piece spawns; otherwise the held piece
    /// comes back at the spawn position in the orientation it was held in.
    pub fn hold(&mut self) -> bool {
        if self.phase != GamePhase::Running || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.can_hold = false;
        let stash = HeldPiece {
            kind: active.kind,
            shape: active.shape,
        };

        match self.held.replace(stash) {
            None => {
                self.active = None;
                self.spawn();
            }
            Some(previous) => {
                let piece =
                    Piece::spawn_with_shape(previous.kind, previous.shape, self.board.width());
                self.place_active(piece);
            }
        }
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.set_phase(GamePhase::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.set_phase(GamePhase::Running);
        true
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!("phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::GameOver => false,
        }
    }

    /// Clear the board and counters and return to `Idle` without starting
    pub fn reset(&mut self) -> bool {
        self.clear_session();
        self.next = Some(self.generator.next_kind());
        self.phase = GamePhase::Idle;
        info!("game reset");
        true
    }

    /// Apply a command from an input collaborator
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::Rotate => self.rotate(),
            Command::Hold => self.hold(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
        }
    }

    fn clear_session(&mut self) {
        self.board.reset();
        self.active = None;
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = INITIAL_FALL_INTERVAL_MS;
        self.piece_id = 0;
        self.last_event = None;
    }

    fn end_game(&mut self, reason: &str) {
        self.phase = GamePhase::GameOver;
        info!(
            "game over ({reason}): score {}, level {}, lines {}",
            self.score, self.level, self.lines
        );
    }

    /// Fill `out` with the current state, reusing its board allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.board.width();
        out.rows = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(PieceSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next.map(PreviewSnapshot::of_kind);
        out.held = self
            .held
            .map(|held| PreviewSnapshot::new(held.kind, held.shape));
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.can_hold = self.can_hold;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
