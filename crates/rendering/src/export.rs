//! Writes the current scenes to disk as an HTML page of two SVGs.
//!
//! The page goes to `{path}.tmp` first and is renamed over `path` once it is
//! synced, so an interrupted export never leaves a truncated page behind.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bevy::prelude::*;

use simulation::basin::WaterState;
use simulation::config::BasinConfig;

use crate::palette::Palette;
use crate::scene::SceneLayout;
use crate::svg::render_page;

/// Request to export the current page. Sent by the UI button or shortcut.
#[derive(Event, Debug, Clone, Default)]
pub struct ExportPage;

/// Errors that can occur while exporting.
#[derive(Debug)]
pub enum ExportError {
    /// Writing the file failed.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
        }
    }
}

/// Render the page for `state` and write it to `path`.
pub fn export_page(
    path: impl AsRef<Path>,
    state: &WaterState,
    layout: &SceneLayout,
    palette: &Palette,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let page = render_page(&state.input, &state.result, layout, palette);
    atomic_write(path, page.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(page.len())
}

/// `{path}.tmp`, next to the final file.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write to the temp file, sync it, then rename it over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp, path)
}

pub fn handle_export_page(
    mut events: EventReader<ExportPage>,
    state: Res<WaterState>,
    config: Res<BasinConfig>,
    palette: Res<Palette>,
) {
    // Several requests in one frame produce one file
    if events.read().count() == 0 {
        return;
    }
    let layout = SceneLayout::from(&*config);
    match export_page(&config.export_path, &state, &layout, &palette) {
        Ok(bytes) => info!("Exported page to '{}' ({} bytes)", config.export_path, bytes),
        Err(e) => error!("{}", e),
    }
}
