//! Event handling system for the application.
//!
//! Two channels feed the main loop:
//!
//! - **User Events**: direct input from the terminal (keyboard, paste, resize),
//!   read on a dedicated thread so the loop never blocks on the terminal
//! - **App Events**: actions requested by the key handlers (run a check,
//!   insert clipboard text, clear, quit)
//!
//! # Submodules
//!
//! - `input`: Key event handling for the input box

pub mod input;

use std::thread;

use tokio::sync::mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender};
use std::io::Result;

/// Type alias for user input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Initializes the user event stream.
///
/// Spawns a thread that reads events with `crossterm::event::read()` and
/// forwards them through a bounded channel. The thread ends once the
/// receiver is dropped and a send fails.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Application-wide events requested by the key handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppEvent {
    /// Evaluate the current input and show the result.
    CheckRequested,

    /// Text read from the system clipboard, to be inserted at the cursor.
    ClipboardText(String),

    /// Clear both the input and the last result.
    Clear,

    /// Leave the application.
    Quit,
}

/// Initializes the application event system.
///
/// Unbounded is appropriate here because AppEvent is low-frequency and lightweight.
pub fn init_app_eventsource() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}
