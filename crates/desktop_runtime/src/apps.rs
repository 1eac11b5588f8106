//! Application registry: the build-time catalog joined with the built-in app mount table.
//!
//! The catalog is parsed once on first use and memoized for the process lifetime.

mod placeholders;

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, ApplicationId};
use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

use crate::{config::ShellConfig, model::OpenWindowRequest};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: ApplicationId,
    name: String,
    icon: String,
    default_width: Option<i32>,
    default_height: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppCatalog {
    schema_version: u32,
    #[serde(default)]
    shell: ShellConfig,
    apps: Vec<CatalogEntry>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("app catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported app catalog schema version {0}")]
    SchemaVersion(u32),
    #[error("duplicate app id `{0}` in catalog")]
    DuplicateApp(ApplicationId),
    #[error("app `{app_id}` declares a default size of {width}x{height}, below the window floor")]
    DefaultSizeBelowFloor {
        app_id: ApplicationId,
        width: i32,
        height: i32,
    },
}

/// Launchable app entry: display metadata plus the handler that renders its window body.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub id: ApplicationId,
    pub name: String,
    pub icon: String,
    pub default_width: Option<i32>,
    pub default_height: Option<i32>,
    pub module: Option<AppModule>,
}

impl AppDescriptor {
    /// Descriptor with no mounted handler, used by hosts that only need metadata.
    pub fn detached(id: &str, name: &str) -> Self {
        Self {
            id: ApplicationId::trusted(id),
            name: name.to_string(),
            icon: String::new(),
            default_width: None,
            default_height: None,
            module: None,
        }
    }

    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest {
            app_id: self.id.clone(),
            title: self.name.clone(),
            default_width: self.default_width,
            default_height: self.default_height,
        }
    }
}

/// Parses and validates catalog JSON produced by the build script.
pub fn parse_catalog(raw: &str) -> Result<AppCatalog, CatalogError> {
    let catalog: AppCatalog = serde_json::from_str(raw)?;
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::SchemaVersion(catalog.schema_version));
    }

    let mut seen: Vec<&ApplicationId> = Vec::with_capacity(catalog.apps.len());
    for entry in &catalog.apps {
        if seen.contains(&&entry.id) {
            return Err(CatalogError::DuplicateApp(entry.id.clone()));
        }
        seen.push(&entry.id);

        let width = entry
            .default_width
            .unwrap_or(catalog.shell.default_window_width);
        let height = entry
            .default_height
            .unwrap_or(catalog.shell.default_window_height);
        if width < catalog.shell.min_window_width || height < catalog.shell.min_window_height {
            return Err(CatalogError::DefaultSizeBelowFloor {
                app_id: entry.id.clone(),
                width,
                height,
            });
        }
    }

    Ok(catalog)
}

struct Registry {
    shell: ShellConfig,
    apps: Vec<AppDescriptor>,
}

impl Registry {
    fn from_catalog(catalog: AppCatalog) -> Self {
        let apps = catalog
            .apps
            .into_iter()
            .filter_map(|entry| {
                let Some(module) = placeholders::app_module(&entry.id) else {
                    logging::warn!("app catalog entry `{}` has no handler; skipping", entry.id);
                    return None;
                };
                Some(AppDescriptor {
                    id: entry.id,
                    name: entry.name,
                    icon: entry.icon,
                    default_width: entry.default_width,
                    default_height: entry.default_height,
                    module: Some(module),
                })
            })
            .collect();
        Self {
            shell: catalog.shell,
            apps,
        }
    }
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| match parse_catalog(APP_CATALOG_JSON) {
        Ok(catalog) => Registry::from_catalog(catalog),
        Err(err) => {
            logging::error!("desktop app catalog rejected: {err}");
            Registry {
                shell: ShellConfig::default(),
                apps: Vec::new(),
            }
        }
    })
}

/// Shell metrics declared in `desktop.toml`.
pub fn shell_config() -> ShellConfig {
    registry().shell
}

/// Every launchable app in dock order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &registry().apps
}

pub fn app_descriptor(app_id: &ApplicationId) -> Option<&'static AppDescriptor> {
    find_descriptor(app_registry(), app_id)
}

pub fn find_descriptor<'a>(
    apps: &'a [AppDescriptor],
    app_id: &ApplicationId,
) -> Option<&'a AppDescriptor> {
    apps.iter().find(|app| app.id == *app_id)
}
