//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Category;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Fetching
    Refresh,
    SelectCategory(Category),
    NextCategory,
    PrevCategory,

    // Card navigation
    NextArticle,
    PrevArticle,
    OpenArticle,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    categories_enabled: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevArticle),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextArticle),
        KeyCode::Enter | KeyCode::Char('o') => Some(UiEvent::OpenArticle),
        code if categories_enabled => category_key(code),
        _ => None,
    }
}

/// Keys that only exist when the category selector is shown
fn category_key(code: KeyCode) -> Option<UiEvent> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextCategory),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Category::from_index(index).map(UiEvent::SelectCategory)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_refresh_and_quit() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), true, false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), false, false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), true, false), Some(UiEvent::Quit));
        assert_eq!(
            key_to_ui_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true, true),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_number_keys_select_category() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('1')), true, false),
            Some(UiEvent::SelectCategory(Category::General))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('6')), true, false),
            Some(UiEvent::SelectCategory(Category::Sports))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Char('8')), true, false), None);
    }

    #[test]
    fn test_category_keys_ignored_without_selector() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('2')), false, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Right), false, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Right), true, false), Some(UiEvent::NextCategory));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), true, true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_ui_event(release, true, false), None);
    }
}
