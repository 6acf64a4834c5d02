//! Tests for the interactive board checker

#[cfg(test)]
mod tests {
    use crate::app::{App, AppAction};
    use crate::theme::ThemeKind;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use validator_core::{valid_grid, Position, Violation};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code));
    }

    #[test]
    fn test_cursor_starts_at_center() {
        let app = App::new();
        assert_eq!(app.cursor, Position::new(4, 4));
        assert_eq!(app.session.grid().empty_count(), 81);
    }

    #[test]
    fn test_arrow_navigation() {
        let mut app = App::new();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Position::new(3, 4));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Position::new(4, 4));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Position::new(4, 3));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, Position::new(4, 4));
    }

    #[test]
    fn test_vim_navigation() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor.row, 3);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor.row, 4);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.cursor.col, 3);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.cursor.col, 4);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut app = App::new();

        for _ in 0..20 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor.col, 0);

        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor.row, 8);
    }

    #[test]
    fn test_box_jump_lands_on_box_center() {
        let mut app = App::new();

        // From the center box to the right one
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.cursor, Position::new(4, 7));

        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.cursor, Position::new(1, 7));

        // Already at the top, stays in place
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.cursor, Position::new(1, 7));
    }

    #[test]
    fn test_digit_key_commits_value() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session.grid().get(Position::new(4, 4)), 5);
        assert_eq!(app.session.reference().get(Position::new(4, 4)), 5);
    }

    #[test]
    fn test_zero_key_is_rejected() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('0'));

        // The committed value survives and the rejection is announced
        assert_eq!(app.session.grid().get(Position::new(4, 4)), 7);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_delete_cannot_empty_a_cell() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.session.grid().get(Position::new(4, 4)), 3);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.grid().get(Position::new(4, 4)), 3);
    }

    #[test]
    fn test_validate_empty_board_flags_first_cell() {
        let mut app = App::new();

        press(&mut app, KeyCode::Enter);

        let result = app.session.result();
        assert!(result.is_error);
        assert_eq!(
            result.message,
            "Invalid input: Numbers should be between 1 and 9"
        );
        assert!(app.is_flagged(Position::new(0, 0)));
        assert!(!app.is_flagged(Position::new(0, 1)));
    }

    #[test]
    fn test_validate_solved_sample_passes() {
        let mut app = App::with_board(valid_grid(), ThemeKind::Dark);

        press(&mut app, KeyCode::Char('v'));

        let result = app.session.result();
        assert!(!result.is_error);
        assert_eq!(result.message, "Valid Sudoku puzzle");
        assert_eq!(app.flagged, None);
    }

    #[test]
    fn test_bad_sample_flags_whole_column() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.session.result().message,
            "Column 7 contains duplicate numbers"
        );
        assert_eq!(app.flagged, Some(Violation::DuplicateInColumn { col: 6 }));
        assert!(app.is_flagged(Position::new(0, 6)));
        assert!(app.is_flagged(Position::new(8, 6)));
        assert!(!app.is_flagged(Position::new(0, 5)));
    }

    #[test]
    fn test_edit_clears_result_and_flags() {
        let mut app = App::new();

        press(&mut app, KeyCode::Enter);
        assert!(app.session.result().is_error);
        assert!(app.flagged.is_some());

        press(&mut app, KeyCode::Char('3'));
        assert!(app.session.result().is_cleared());
        assert_eq!(app.flagged, None);
    }

    #[test]
    fn test_board_keys_reset_the_session() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.session.grid(), &valid_grid());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.grid().empty_count(), 81);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(matches!(
            app.handle_key(key(KeyCode::Char('q'))),
            AppAction::Quit
        ));
        assert!(matches!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit));
        assert!(matches!(
            app.handle_key(key(KeyCode::Char('z'))),
            AppAction::Continue
        ));
    }

    #[test]
    fn test_theme_key_cycles_through_all_themes() {
        let mut app = App::new();
        assert_eq!(app.theme_kind, ThemeKind::Dark);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_kind, ThemeKind::Light);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_kind, ThemeKind::HighContrast);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_kind, ThemeKind::Dark);
    }

    #[test]
    fn test_message_expires_after_ticks() {
        let mut app = App::new();

        press(&mut app, KeyCode::Char('0'));
        assert!(app.message.is_some());

        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
