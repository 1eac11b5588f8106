use std::str::FromStr;

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    launcher::LauncherState, preferences::DesktopPreferences, window_manager::WindowStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub w: i32,
    pub h: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self { w: 1280, h: 800 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    /// Restored geometry. While `maximized` is set the visible rect is derived instead.
    pub rect: WindowRect,
    pub z_index: u64,
    pub minimized: bool,
    pub maximized: bool,
}

/// App metadata supplied to [`WindowStore::open`] by the dock or launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub default_width: Option<i32>,
    pub default_height: Option<i32>,
}

impl OpenWindowRequest {
    pub fn new(app_id: ApplicationId, title: impl Into<String>) -> Self {
        Self {
            app_id,
            title: title.into(),
            default_width: None,
            default_height: None,
        }
    }

    pub fn with_default_size(mut self, width: i32, height: i32) -> Self {
        self.default_width = Some(width);
        self.default_height = Some(height);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Compass token used by handle markup (`n`, `se`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize direction `{0}`")]
pub struct ResizeEdgeParseError(pub String);

impl FromStr for ResizeEdge {
    type Err = ResizeEdgeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|edge| edge.token() == raw)
            .ok_or_else(|| ResizeEdgeParseError(raw.to_string()))
    }
}

/// Whole-shell state: the window store, launcher overlay state, and live preferences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub store: WindowStore,
    pub launcher: LauncherState,
    pub preferences: DesktopPreferences,
}
