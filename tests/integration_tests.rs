//! Integration tests for the engine state machine

use blockfall::core::{Engine, GameConfig, Randomizer};
use blockfall::types::{Block, Command, GamePhase, PieceKind};

fn running(seed: u32) -> Engine {
    let mut engine = Engine::with_seed(seed);
    assert!(engine.start());
    engine
}

/// Make `kind` the active piece at its spawn position
fn spawn_kind(engine: &mut Engine, kind: PieceKind) {
    engine.set_next_piece(kind);
    assert!(engine.spawn());
}

fn slide(engine: &mut Engine, dx: i16) {
    while engine.try_move(dx, 0) {}
}

#[test]
fn test_game_lifecycle() {
    let mut engine = Engine::with_seed(12345);
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert!(engine.active().is_none());
    assert!(!engine.tick());

    assert!(engine.start());
    assert_eq!(engine.phase(), GamePhase::Running);
    assert!(engine.active().is_some());

    assert!(engine.pause());
    assert!(!engine.pause());
    assert!(engine.resume());
    assert!(!engine.resume());

    assert!(engine.reset());
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert!(engine.next_piece().is_some());
}

#[test]
fn test_tick_until_lock_adds_piece_cells_and_restores_hold() {
    let mut engine = running(12345);
    assert!(engine.hold());
    assert!(!engine.can_hold());

    let cells = engine.active().map(|p| p.shape.cell_count()).unwrap();
    let before = engine.board().occupied_count();

    let mut ticks = 0;
    let event = loop {
        assert!(engine.tick());
        ticks += 1;
        assert!(ticks < 100, "piece never locked");
        if let Some(event) = engine.take_last_event() {
            break event;
        }
    };

    assert_eq!(event.cleared, 0);
    assert!(!event.topped_out);
    assert_eq!(engine.board().occupied_count(), before + cells);
    assert!(engine.can_hold());
    assert_eq!(engine.phase(), GamePhase::Running);
}

#[test]
fn test_row_completed_by_several_pieces() {
    let mut engine = running(7);

    // I flat against the left wall: columns 0..=3.
    spawn_kind(&mut engine, PieceKind::I);
    slide(&mut engine, -1);
    engine.set_next_piece(PieceKind::I);
    assert!(engine.hard_drop());

    // Second I one to the right of center: columns 4..=7.
    assert!(engine.try_move(1, 0));
    engine.set_next_piece(PieceKind::O);
    assert!(engine.hard_drop());
    assert_eq!(engine.board().occupied_count(), 8);

    // O against the right wall finishes the bottom row.
    slide(&mut engine, 1);
    assert!(engine.hard_drop());

    let event = engine.take_last_event().unwrap();
    assert_eq!(event.cleared, 1);
    assert_eq!(event.gain, 100);
    assert_eq!(engine.score(), 100);
    assert_eq!(engine.lines(), 1);

    // The top half of the O fell into the bottom row.
    let board = engine.board();
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(8, 19), Some(Some(Block::from(PieceKind::O))));
    assert_eq!(board.get(9, 19), Some(Some(Block::from(PieceKind::O))));
}

#[test]
fn test_spawn_into_filled_cells_is_game_over() {
    let mut engine = running(3);
    for x in 3..7 {
        engine.board_mut().set(x, 0, Some(Block::from(PieceKind::L)));
    }

    engine.set_next_piece(PieceKind::O);
    assert!(!engine.spawn());
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert!(engine.active().is_none());

    // Everything but start/reset is ignored now.
    assert!(!engine.apply(Command::HardDrop));
    assert!(!engine.apply(Command::TogglePause));
    assert!(engine.apply(Command::Start));
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn test_rotation_kicks_right_off_left_wall() {
    let mut engine = running(11);
    spawn_kind(&mut engine, PieceKind::T);

    // T pointing right occupies matrix columns 1 and 2.
    assert!(engine.rotate());
    slide(&mut engine, -1);
    assert_eq!(engine.active().unwrap().x, -1);

    // Pointing down needs columns 0..=2; offset 0 and -1 hit the wall, +1 fits.
    let expected = engine.active().unwrap().shape.rotate_cw();
    assert!(engine.rotate());
    let active = engine.active().unwrap();
    assert_eq!(active.x, 0);
    assert_eq!(active.shape, expected);
}

#[test]
fn test_rotation_rejected_when_no_kick_fits() {
    let mut engine = running(11);
    spawn_kind(&mut engine, PieceKind::I);

    // Vertical I in matrix column 3, pushed against the left wall.
    assert!(engine.rotate());
    slide(&mut engine, -1);
    let before = engine.active().unwrap();
    assert_eq!(before.x, -3);

    // Horizontal needs four columns starting at x; the best kick (+2) only
    // reaches x = -1.
    assert!(!engine.rotate());
    assert_eq!(engine.active().unwrap(), before);
}

#[test]
fn test_second_hold_without_lock_is_noop() {
    let mut engine = running(99);
    let first = engine.active().unwrap().kind;

    assert!(engine.apply(Command::Hold));
    let after_first = engine.active();
    assert_eq!(engine.held().map(|h| h.kind), Some(first));

    assert!(!engine.apply(Command::Hold));
    assert_eq!(engine.active(), after_first);
    assert_eq!(engine.held().map(|h| h.kind), Some(first));
}

#[test]
fn test_piece_id_tracks_new_active_pieces() {
    let mut engine = running(5);
    assert_eq!(engine.piece_id(), 1);

    engine.hard_drop();
    assert_eq!(engine.piece_id(), 2);

    engine.hold();
    assert_eq!(engine.piece_id(), 3);

    engine.try_move(1, 0);
    engine.rotate();
    assert_eq!(engine.piece_id(), 3);
}

#[test]
fn test_soft_drop_settles_like_tick() {
    let mut engine = running(21);
    spawn_kind(&mut engine, PieceKind::O);

    let mut steps = 0;
    while engine.take_last_event().is_none() {
        assert!(engine.soft_drop());
        steps += 1;
        assert!(steps < 100);
    }
    // From y = -1 down to 18, then one more step to settle.
    assert_eq!(steps, 20);
    assert!(engine.board().is_occupied(4, 19));
}

#[test]
fn test_top_out_by_stacking() {
    let mut engine = running(2024);
    let mut drops = 0;
    while engine.phase() == GamePhase::Running {
        engine.hard_drop();
        drops += 1;
        assert!(drops < 200, "stacking in the center must top out");
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert!(!engine.hard_drop());
    assert!(!engine.rotate());
}

#[test]
fn test_level_speed_follow_lines() {
    let mut engine = running(1);
    let mut last_score = 0;

    // Clear ten single rows with O pieces dropped into a two-wide gap.
    for _ in 0..5 {
        for y in [18, 19] {
            for x in 2..10 {
                engine.board_mut().set(x, y, Some(Block::from(PieceKind::Z)));
            }
        }
        spawn_kind(&mut engine, PieceKind::O);
        slide(&mut engine, -1);
        engine.hard_drop();

        assert!(engine.score() > last_score);
        last_score = engine.score();
    }

    assert_eq!(engine.lines(), 10);
    assert_eq!(engine.level(), 2);
    assert_eq!(engine.fall_interval_ms(), 650);
    // Every clear was a double at level 1.
    assert_eq!(engine.score(), 5 * 300);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let config = GameConfig {
            randomizer: Randomizer::Bag,
            ..GameConfig::with_seed(seed)
        };
        let mut engine = Engine::new(config).unwrap();
        engine.start();
        let mut kinds = Vec::new();
        for i in 0..30 {
            kinds.push(engine.active().map(|p| p.kind));
            engine.try_move(if i % 2 == 0 { -2 } else { 3 }, 0);
            engine.hard_drop();
        }
        (kinds, engine.score(), engine.board().clone())
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_custom_board_size() {
    let config = GameConfig {
        cols: 6,
        rows: 8,
        ..GameConfig::default()
    };
    let mut engine = Engine::new(config).unwrap();
    engine.start();
    spawn_kind(&mut engine, PieceKind::T);

    let active = engine.active().unwrap();
    assert_eq!((active.x, active.y), (1, -2));
    assert_eq!(engine.ghost_y(), Some(6));
}
