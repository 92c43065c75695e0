use blockfall::core::{Engine, GameConfig};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use blockfall::types::{Block, GamePhase, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::with_seed(1).snapshot();
    let view = GameView::default();

    // 10x20 board at 2x1 cells plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_in_piece_color() {
    let mut engine = Engine::with_seed(1);
    engine
        .board_mut()
        .set(0, 19, Some(Block::from(PieceKind::L)));
    let snap = engine.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border each cell is two chars wide.
    for x in [1, 2] {
        let glyph = fb.get(x, 20).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::new(0xf0, 0xa0, 0x00));
    }
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut engine = Engine::with_seed(1);
    engine.start();
    engine.set_next_piece(PieceKind::O);
    engine.spawn();
    // Bring the O fully onto the board.
    engine.tick();
    engine.tick();
    let snap = engine.snapshot();
    let active = snap.active.unwrap();
    assert_eq!((active.x, active.y), (4, 1));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Active O covers board cells (4..=5, 1..=2) => columns 9..=12, rows 2..=3.
    assert_eq!(fb.get(9, 2).unwrap().ch, '█');
    assert_eq!(fb.get(12, 3).unwrap().ch, '█');
    // Ghost rests on the floor: board rows 18..=19.
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(12, 20).unwrap().ch, '░');
}

#[test]
fn term_view_hides_cells_above_the_board() {
    let mut engine = Engine::with_seed(1);
    engine.start();
    engine.set_next_piece(PieceKind::I);
    engine.spawn();
    let snap = engine.snapshot();
    assert!(snap.active.unwrap().y < 0);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert_eq!(fb.row_text(0), format!("┌{}┐", "─".repeat(20)));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut engine = Engine::with_seed(1);
    engine.start();
    engine.hold();
    let mut snap = engine.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    for label in ["SCORE", "1234", "LEVEL", "LINES", "NEXT", "HOLD"] {
        assert!(all.contains(label), "missing {label}");
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let mut engine = Engine::with_seed(1);
    engine.start();
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let mut engine = Engine::with_seed(1);
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    assert!(screen_text(&view.render(&engine.snapshot(), vp)).contains("PRESS ENTER"));

    engine.start();
    let running = screen_text(&view.render(&engine.snapshot(), vp));
    assert!(!running.contains("PAUSED"));
    assert!(!running.contains("GAME OVER"));

    engine.pause();
    assert!(screen_text(&view.render(&engine.snapshot(), vp)).contains("PAUSED"));

    let mut snap = engine.snapshot();
    snap.phase = GamePhase::GameOver;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));
}

#[test]
fn term_view_follows_custom_board_size() {
    let config = GameConfig {
        cols: 6,
        rows: 8,
        ..GameConfig::default()
    };
    let snap = Engine::new(config).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(14, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Engine::with_seed(1).snapshot();

    // start_y = (30 - 22) / 2 = 4
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = Engine::with_seed(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn render_into_reuses_framebuffer_across_sizes() {
    let mut engine = Engine::with_seed(1);
    engine.start();
    let snap = engine.snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 22)));
}
