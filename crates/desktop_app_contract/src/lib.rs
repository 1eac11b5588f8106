//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps are leaf widgets: the runtime resolves an [`ApplicationId`] to an [`AppModule`] once at
//! startup and mounts it into a managed window with an [`AppMountContext`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Maximum accepted length of an application identifier.
pub const MAX_APPLICATION_ID_LEN: usize = 32;

/// Stable identifier for an app package/module (for example `terminal`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejection reasons for [`ApplicationId::new`].
pub enum ApplicationIdError {
    /// The identifier was empty.
    #[error("application id must not be empty")]
    Empty,
    /// The identifier exceeded [`MAX_APPLICATION_ID_LEN`].
    #[error("application id `{0}` is longer than {MAX_APPLICATION_ID_LEN} characters")]
    TooLong(String),
    /// The identifier contained characters outside `[a-z0-9-]` or did not start with a letter.
    #[error("invalid application id `{0}`; expected lowercase letters, digits and dashes")]
    InvalidCharacters(String),
}

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase slug (`[a-z][a-z0-9-]*`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = raw.into();
        validate_application_id(&raw)?;
        Ok(Self(raw))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = ApplicationIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

fn validate_application_id(raw: &str) -> Result<(), ApplicationIdError> {
    if raw.is_empty() {
        return Err(ApplicationIdError::Empty);
    }
    if raw.len() > MAX_APPLICATION_ID_LEN {
        return Err(ApplicationIdError::TooLong(raw.to_string()));
    }

    let bytes = raw.as_bytes();
    let well_formed = bytes[0].is_ascii_lowercase()
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && !raw.ends_with('-');
    if !well_formed {
        return Err(ApplicationIdError::InvalidCharacters(raw.to_string()));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Context handed to an app's mount function when its window body is rendered.
pub struct AppMountContext {
    /// Stable app id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window title at mount time.
    pub title: String,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
