//! Application state management.
//!
//! `App` owns the input box, the last result and the event sources. The
//! scan itself is stateless: `App` calls [`evaluate`] whenever the user asks
//! for a check and keeps only the returned value for display.

use crate::event::{AppEvent, UserEvent, init_app_eventsource, init_user_event};
use crate::event::input as input_event;
use crate::scan::evaluate;
use crate::ui::input::TuiInput;
use crate::ui::layout::AppLayout;
use crate::ui::result::TuiResult;

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{Receiver, UnboundedReceiver, UnboundedSender};

use crossterm::event::KeyEventKind;

pub struct App {
    // frontend widgets
    // they are public to ui module
    pub(in super) tui_input: TuiInput,
    pub(in super) tui_result: TuiResult,

    exit: bool,  // Should the app exit?

    // Current layout - computed from terminal size
    layout: AppLayout,

    // events sources
    event_sink: UnboundedSender<AppEvent>,
    user_events: Receiver<std::io::Result<UserEvent>>,  // User input
    app_events: UnboundedReceiver<AppEvent>,  // App Events
}

impl App {
    /// Create the app. Pre-filled text is checked right away.
    pub fn new(initial_text: Option<&str>) -> Self {
        let (event_sink, app_events) = init_app_eventsource();

        let mut app = Self {
            tui_input: TuiInput::new(),
            tui_result: TuiResult::new(),
            exit: false,
            layout: AppLayout::default(),
            event_sink,
            user_events: init_user_event(),
            app_events,
        };

        if let Some(text) = initial_text {
            app.tui_input.insert_str(text);
            app.check();
        }
        app
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let usr_evt = res.with_context(|| anyhow::anyhow!("User event stream is ended."))?;
                    self.handle_user_event(usr_evt?)?;
                }
                res = self.app_events.recv() => {
                    let app_evt = res.with_context(|| anyhow::anyhow!("App event stream is ended"))?;
                    self.handle_app_event(app_evt);
                }
            }
            self.draw(terminal)?;
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();

            if self.layout.full_area != area {
                self.layout = AppLayout::build(area);
            }

            use ratatui::widgets::Widget;
            (&*self).render(area, frame.buffer_mut());
        })?;

        self.update_cursor_position(terminal)?;

        Ok(())
    }

    fn update_cursor_position(&self, terminal: &mut DefaultTerminal) -> Result<()> {
        match self.tui_input.cursor_position(self.layout.input) {
            Some(position) => {
                terminal.show_cursor()?;
                terminal.set_cursor_position(position)?;
            }
            None => terminal.hide_cursor()?,
        }
        Ok(())
    }

    /// Evaluate the current input and show the result.
    fn check(&mut self) {
        let evaluation = evaluate(self.tui_input.text());
        tracing::info!(
            tier = %evaluation.tier,
            matched = evaluation.matched().count(),
            "Checked {} chars of input",
            self.tui_input.text().chars().count()
        );
        self.tui_result.set(evaluation);
    }
}

impl App {
    fn handle_user_event(&mut self, event: UserEvent) -> Result<()> {
        match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => {
                input_event::handle_key_event(&mut self.tui_input, &self.event_sink, key_evt)?;
            }
            UserEvent::Paste(text) => {
                self.tui_input.insert_str(&text);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CheckRequested => self.check(),
            AppEvent::ClipboardText(text) => self.tui_input.insert_str(&text),
            AppEvent::Clear => {
                self.tui_input.clear();
                self.tui_result.clear();
            }
            AppEvent::Quit => {
                tracing::info!("Quit requested");
                self.exit = true;
            }
        }
    }
}
