//! Interactive search interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::clipboard::ClipboardProvider;
use crate::notify::StatusNotifier;
use crate::search::SearchSession;

/// Run the interactive search until the user quits or accepts a result.
/// Returns the target path of the accepted result.
pub fn run_interactive(
    session: SearchSession,
    clipboard: Box<dyn ClipboardProvider>,
) -> Result<Option<String>> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session, StatusNotifier::new(), clipboard);

    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
