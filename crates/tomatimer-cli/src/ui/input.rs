use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tomatimer_core::Mode;

use super::app::Action;

/// Key bindings shown in the help footer.
pub const HELP: &str =
    "1/f focus  2/s short break  3/l long break  space start/pause  n skip  q quit";

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('f') => Some(Action::Select(Mode::Focus)),
        KeyCode::Char('2') | KeyCode::Char('s') => Some(Action::Select(Mode::ShortBreak)),
        KeyCode::Char('3') | KeyCode::Char('l') => Some(Action::Select(Mode::LongBreak)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::StartPause),
        KeyCode::Char('n') | KeyCode::Tab => Some(Action::Skip),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_bindings() {
        assert_eq!(action_for(press(KeyCode::Char('2'))), Some(Action::Select(Mode::ShortBreak)));
        assert_eq!(action_for(press(KeyCode::Char('l'))), Some(Action::Select(Mode::LongBreak)));
        assert_eq!(action_for(press(KeyCode::Char(' '))), Some(Action::StartPause));
        assert_eq!(action_for(press(KeyCode::Tab)), Some(Action::Skip));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl('c')), Some(Action::Quit));
        assert_eq!(action_for(ctrl('f')), None);
    }

    #[test]
    fn ignores_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for(release), None);
    }
}
