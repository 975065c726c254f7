//! Navigation hand-off for accepted search results

/// Receives the target path of an accepted result
///
/// The search subsystem only signals where to go; rendering the destination belongs to
/// the implementor.
pub trait Navigator {
    fn navigate(&mut self, target_path: &str);
}

/// Remembers the most recent target path
///
/// The interactive UI uses this to hand the accepted path back to the binary, which
/// prints it for the calling shell.
#[derive(Debug, Default)]
pub struct PathCollector {
    last: Option<String>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn take(&mut self) -> Option<String> {
        self.last.take()
    }
}

impl Navigator for PathCollector {
    fn navigate(&mut self, target_path: &str) {
        tracing::debug!(target_path, "navigate");
        self.last = Some(target_path.to_string());
    }
}
