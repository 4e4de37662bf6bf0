//! Reveal tests - the picture is uncovered one row per cleared line

use reveal_tetris::core::{
    ConfigError, ImageSize, RevealMask, ScriptedRng, Session, SessionConfig,
};
use reveal_tetris::types::GameAction;

/// Every piece is a horizontal I, so on a 4-wide board each hard drop clears
/// exactly one line.
fn i_session(config: SessionConfig) -> Session<ScriptedRng> {
    Session::with_rng(config, ScriptedRng::new(vec![0])).unwrap()
}

fn uncovered_rows(session: &Session<ScriptedRng>) -> Vec<usize> {
    session
        .reveal_mask()
        .to_grid()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().all(|&covered| !covered))
        .map(|(y, _)| y)
        .collect()
}

#[test]
fn test_attach_then_clear_reveals_bottom_up() {
    let mut session = i_session(SessionConfig::default().with_size(4, 6));
    session.attach_image(4, 6).unwrap();
    assert!(session.reveal_mask().to_grid().iter().flatten().all(|&c| c));

    session.handle_action(GameAction::HardDrop);
    assert_eq!(uncovered_rows(&session), vec![5]);

    session.handle_action(GameAction::HardDrop);
    assert_eq!(uncovered_rows(&session), vec![4, 5]);
}

#[test]
fn test_reveal_saturates_after_height_clears() {
    let mut session = i_session(SessionConfig::default().with_size(4, 6));
    session.attach_image(4, 6).unwrap();

    for _ in 0..6 {
        session.handle_action(GameAction::HardDrop);
    }
    assert_eq!(session.lines_cleared(), 6);
    assert!(session.reveal_mask().is_fully_revealed());

    let before = session.reveal_mask().clone();
    session.handle_action(GameAction::HardDrop);
    assert_eq!(session.lines_cleared(), 7);
    assert_eq!(session.reveal_mask(), &before);
}

#[test]
fn test_attach_recovers_after_progress() {
    let mut session = i_session(SessionConfig::default().with_size(4, 6));
    session.attach_image(4, 6).unwrap();
    session.handle_action(GameAction::HardDrop);
    session.handle_action(GameAction::HardDrop);

    session.attach_image(4, 6).unwrap();
    assert_eq!(session.reveal_mask().revealed_count(), 0);

    // The count keeps going: the next clear uncovers the third row.
    session.handle_action(GameAction::HardDrop);
    assert_eq!(uncovered_rows(&session), vec![3]);
}

#[test]
fn test_attach_rejects_mismatched_sizes() {
    let mut session = i_session(SessionConfig::default());

    assert_eq!(
        session.attach_image(0, 0),
        Err(ConfigError::EmptyImage {
            width: 0,
            height: 0
        })
    );
    assert_eq!(
        session.attach_image(20, 10),
        Err(ConfigError::ImageSizeMismatch {
            width: 20,
            height: 10,
            board_width: 10,
            board_height: 20,
        })
    );
    assert_eq!(session.image_size(), None);

    session.attach_image(10, 20).unwrap();
    assert_eq!(
        session.image_size(),
        Some(ImageSize {
            width_cells: 10,
            height_cells: 20
        })
    );
}

#[test]
fn test_attach_during_game_over_keeps_state() {
    let mut session =
        Session::with_rng(SessionConfig::default(), ScriptedRng::new(vec![3])).unwrap();
    while !session.is_game_over() {
        session.handle_action(GameAction::HardDrop);
    }
    assert!(session.attach_image(10, 20).is_ok());
    assert!(session.is_game_over());
}

#[test]
fn test_reset_keeps_mask_by_default() {
    let mut session = i_session(SessionConfig::default().with_size(4, 6));
    session.attach_image(4, 6).unwrap();
    session.handle_action(GameAction::HardDrop);

    session.handle_action(GameAction::Reset);
    assert_eq!(uncovered_rows(&session), vec![5]);

    // The line count restarted, so the next clear hits row 5 again.
    session.handle_action(GameAction::HardDrop);
    assert_eq!(uncovered_rows(&session), vec![5]);
}

#[test]
fn test_reset_can_recover_mask() {
    let config = SessionConfig::default()
        .with_size(4, 6)
        .with_reset_clears_reveal(true);
    let mut session = i_session(config);
    session.attach_image(4, 6).unwrap();
    session.handle_action(GameAction::HardDrop);

    session.handle_action(GameAction::Reset);
    assert!(uncovered_rows(&session).is_empty());
}

#[test]
fn test_mask_tracked_without_picture() {
    let mut session = i_session(SessionConfig::default().with_size(4, 6));
    session.handle_action(GameAction::HardDrop);
    assert!(!session.is_image_attached());
    assert_eq!(uncovered_rows(&session), vec![5]);
}

#[test]
fn test_reveal_mask_standalone() {
    let mut mask = RevealMask::new(3, 3);
    mask.on_line_cleared(2);
    assert!(!mask.is_covered(1, 0));
    assert!(mask.is_covered(1, 2));
    mask.on_line_cleared(3);
    assert_eq!(mask.revealed_count(), 3);
}
