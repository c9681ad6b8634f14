// ABOUTME: Exit-time cleanup for --auto-close
// Closes the kitty window that launched us when the guard goes out of scope

use tracing::debug;

use crate::gateway::ProcessGateway;

/// Closes the launcher window exactly once when dropped, on every exit path.
pub struct LauncherWindowGuard<'a> {
    gateway: &'a dyn ProcessGateway,
    window_id: String,
}

impl<'a> LauncherWindowGuard<'a> {
    pub fn new(gateway: &'a dyn ProcessGateway, window_id: impl Into<String>) -> Self {
        Self {
            gateway,
            window_id: window_id.into(),
        }
    }
}

impl Drop for LauncherWindowGuard<'_> {
    fn drop(&mut self) {
        debug!("Closing launcher window {}", self.window_id);
        self.gateway.close_launcher_window(&self.window_id);
    }
}
