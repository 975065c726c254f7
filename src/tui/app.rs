//! TUI application state and event handling.
//!
//! The `App` wires the [`SearchSession`] to the terminal: keystrokes become query edits or
//! navigation keys, the session decides what the panel shows, and an accepted result ends
//! the event loop with its target path.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, copy_to_clipboard};
use crate::navigation::PathCollector;
use crate::notify::Notifier;
use crate::search::{KeyOutcome, NavKey, SearchSession};

pub struct App<N: Notifier> {
    session: SearchSession,
    navigator: PathCollector,
    notifier: N,
    clipboard: Box<dyn ClipboardProvider>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<N: Notifier> App<N> {
    pub fn new(
        mut session: SearchSession,
        notifier: N,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        // The input starts focused
        session.focus();

        Self {
            session,
            navigator: PathCollector::new(),
            notifier,
            clipboard,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Run the event loop until the user quits or accepts a result.
    /// Returns the accepted target path, if any.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Option<String>> {
        while !self.should_quit {
            if self.notifier.clear_expired() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        query: self.session.query(),
                        panel: self.session.state(),
                        results: self.session.results(),
                        history: self.session.history().entries(),
                        selected_idx: self.session.selected_idx(),
                        catalog: self.session.catalog(),
                        status_message: self.notifier.current(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(self.navigator.take())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.session.is_open() {
                    self.navigate(NavKey::Escape);
                } else {
                    self.should_quit = true;
                }
            }
            Action::MoveUp => self.navigate(NavKey::Up),
            Action::MoveDown => self.navigate(NavKey::Down),
            Action::Enter => self.navigate(NavKey::Enter),
            Action::Input(c) => {
                if !self.session.push_char(c) {
                    self.notifier.error("✗ Search query is too long");
                }
                self.needs_redraw = true;
            }
            Action::DeleteChar => {
                self.session.pop_char();
                self.needs_redraw = true;
            }
            Action::ClearQuery => {
                self.session.set_query("");
                self.needs_redraw = true;
            }
            Action::ToggleFocus => {
                if self.session.is_open() {
                    self.session.blur();
                } else {
                    self.session.focus();
                }
                self.needs_redraw = true;
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    fn navigate(&mut self, key: NavKey) {
        match self.session.handle_key(key, &mut self.navigator) {
            KeyOutcome::Ignored => {}
            KeyOutcome::Moved | KeyOutcome::Closed => self.needs_redraw = true,
            KeyOutcome::Recalled(query) => {
                tracing::debug!(%query, "recalled history entry");
                self.needs_redraw = true;
            }
            KeyOutcome::Accepted(_) => self.should_quit = true,
        }
    }

    fn copy_selected(&mut self) {
        let Some(result) = self.session.selected_result() else {
            self.notifier.error("✗ No result selected");
            self.needs_redraw = true;
            return;
        };

        match copy_to_clipboard(&result.target_path, self.clipboard.as_mut()) {
            Ok(()) => self.notifier.success("✓ Copied path to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.notifier.error(&format!("✗ Clipboard error: {}", e));
            }
        }
        self.needs_redraw = true;
    }
}
