//! Spotlight-style launcher overlay state: query filtering and keyboard selection.

use desktop_app_contract::ApplicationId;

use crate::apps::AppDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LauncherState {
    pub open: bool,
    pub query: String,
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

impl LauncherKey {
    /// Maps a `KeyboardEvent.key` value to a launcher key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherOutcome {
    None,
    Dismiss,
    Launch(ApplicationId),
}

/// Whether a key chord toggles the launcher (meta/ctrl + Space).
pub fn is_launcher_shortcut(meta: bool, ctrl: bool, code: &str) -> bool {
    (meta || ctrl) && code == "Space"
}

/// Case-insensitive substring match on display names, preserving registry order.
pub fn filter_apps<'a>(apps: &'a [AppDescriptor], query: &str) -> Vec<&'a AppDescriptor> {
    let needle = query.to_lowercase();
    apps.iter()
        .filter(|app| app.name.to_lowercase().contains(&needle))
        .collect()
}

impl LauncherState {
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.selected = 0;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected = 0;
    }

    pub fn matches<'a>(&self, apps: &'a [AppDescriptor]) -> Vec<&'a AppDescriptor> {
        filter_apps(apps, &self.query)
    }

    pub fn handle_key(&mut self, key: LauncherKey, apps: &[AppDescriptor]) -> LauncherOutcome {
        let matches = self.matches(apps);
        match key {
            LauncherKey::Escape => LauncherOutcome::Dismiss,
            LauncherKey::ArrowDown => {
                self.selected = (self.selected + 1).min(matches.len().saturating_sub(1));
                LauncherOutcome::None
            }
            LauncherKey::ArrowUp => {
                self.selected = self.selected.saturating_sub(1);
                LauncherOutcome::None
            }
            LauncherKey::Enter => matches
                .get(self.selected)
                .map(|app| LauncherOutcome::Launch(app.id.clone()))
                .unwrap_or(LauncherOutcome::None),
        }
    }
}
