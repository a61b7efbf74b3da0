//! Key event handling for the input box.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use super::AppEvent;
use crate::ui::input::TuiInput;
use crate::utils::clipboard;

fn send(event_sink: &UnboundedSender<AppEvent>, event: AppEvent) -> Result<()> {
    event_sink
        .send(event)
        .context("App event channel is closed")
}

/// Handle a key press while the input box has focus.
///
/// Editing keys change the buffer directly. Keys that affect the rest of the
/// app (check, paste from clipboard, clear, quit) are forwarded as [`AppEvent`]s.
pub fn handle_key_event(
    input: &mut TuiInput,
    event_sink: &UnboundedSender<AppEvent>,
    key_evt: KeyEvent,
) -> Result<()> {
    // AltGr arrives as Ctrl+Alt on some terminals and still types a char.
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL)
        && !key_evt.modifiers.contains(KeyModifiers::ALT);

    match key_evt.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => {
            send(event_sink, AppEvent::Quit)?;
        }
        KeyCode::Esc => {
            send(event_sink, AppEvent::Quit)?;
        }

        // Ctrl+O: Insert a newline character (more reliable than Enter+modifier combos)
        KeyCode::Char('o') | KeyCode::Char('O') if ctrl => {
            input.insert_char('\n');
        }

        KeyCode::Char('v') | KeyCode::Char('V') if ctrl => {
            if let Some(text) = clipboard::read_text() {
                send(event_sink, AppEvent::ClipboardText(text))?;
            }
        }

        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => {
            send(event_sink, AppEvent::Clear)?;
        }

        // Plain Enter: run the check
        KeyCode::Enter => {
            send(event_sink, AppEvent::CheckRequested)?;
        }

        // Other control chords are ignored rather than typed
        KeyCode::Char(_) if ctrl => {}

        // Text input
        KeyCode::Char(c) => {
            input.insert_char(c);
        }

        // Editing
        KeyCode::Backspace => {
            input.delete_char();
        }
        KeyCode::Delete => {
            input.delete_char_forward();
        }

        // Cursor movement
        KeyCode::Left => {
            input.move_cursor(-1);
        }
        KeyCode::Right => {
            input.move_cursor(1);
        }
        KeyCode::Home => {
            input.move_cursor_to_start();
        }
        KeyCode::End => {
            input.move_cursor_to_end();
        }

        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::init_app_eventsource;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_the_buffer() {
        let (tx, mut rx) = init_app_eventsource();
        let mut input = TuiInput::new();

        for c in "otp!".chars() {
            handle_key_event(&mut input, &tx, key(KeyCode::Char(c))).unwrap_or_default();
        }
        handle_key_event(&mut input, &tx, key(KeyCode::Backspace)).unwrap_or_default();
        handle_key_event(&mut input, &tx, ctrl('o')).unwrap_or_default();

        assert_eq!(input.text(), "otp\n");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enter_requests_check() {
        let (tx, mut rx) = init_app_eventsource();
        let mut input = TuiInput::new();

        handle_key_event(&mut input, &tx, key(KeyCode::Enter)).unwrap_or_default();
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::CheckRequested));
        assert!(input.is_empty());
    }

    #[test]
    fn test_control_keys_map_to_app_events() {
        let (tx, mut rx) = init_app_eventsource();
        let mut input = TuiInput::new();

        let cases = vec![
            (ctrl('l'), AppEvent::Clear),
            (ctrl('c'), AppEvent::Quit),
            (key(KeyCode::Esc), AppEvent::Quit),
        ];
        for (evt, expected) in cases {
            handle_key_event(&mut input, &tx, evt).unwrap_or_default();
            assert_eq!(rx.try_recv().ok(), Some(expected), "Failed for key: {:?}", evt);
        }
        assert!(input.is_empty());
    }

    #[test]
    fn test_unknown_control_chords_are_not_typed() {
        let (tx, _rx) = init_app_eventsource();
        let mut input = TuiInput::new();

        handle_key_event(&mut input, &tx, ctrl('x')).unwrap_or_default();
        assert!(input.is_empty());
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let (tx, rx) = init_app_eventsource();
        drop(rx);
        let mut input = TuiInput::new();

        assert!(handle_key_event(&mut input, &tx, key(KeyCode::Enter)).is_err());
    }
}
