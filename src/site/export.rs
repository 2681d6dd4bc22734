//! Static export
//!
//! Writes the same pages the server renders as plain files: `index.html`,
//! `{id}/index.html` for every registered id and `404.html`, then copies the
//! asset directory alongside them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::SiteState;
use crate::render::{render_hub_page, render_not_found_page, render_report_page};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy asset {path}: {source}")]
    CopyAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an export produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
}

/// Render every page into `out_dir`
pub fn export_site(state: &SiteState, out_dir: &Path) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary::default();
    create_dir(out_dir)?;

    let summaries = state.registry.summaries();
    write_page(
        &out_dir.join("index.html"),
        &render_hub_page(&summaries, &state.config.site, state.hub_token()),
    )?;
    summary.pages += 1;

    for report in state.registry.reports() {
        let dir = out_dir.join(report.id());
        create_dir(&dir)?;
        write_page(
            &dir.join("index.html"),
            &render_report_page(report, state.config.gate.enabled),
        )?;
        summary.pages += 1;
    }

    write_page(&out_dir.join("404.html"), &render_not_found_page())?;
    summary.pages += 1;

    let asset_dir = &state.config.site.asset_dir;
    if asset_dir.is_dir() {
        summary.assets = copy_dir(asset_dir, out_dir)?;
    } else {
        debug!(path = %asset_dir.display(), "No asset directory, skipping asset copy");
    }

    info!(
        out = %out_dir.display(),
        pages = summary.pages,
        assets = summary.assets,
        "Static export complete"
    );
    Ok(summary)
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), ExportError> {
    fs::write(path, html).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = html.len(), "Wrote page");
    Ok(())
}

fn copy_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError {
    let path = path.to_path_buf();
    move |source| ExportError::CopyAsset { path, source }
}

/// Recursively copy the contents of `from` into `to`, returning the file count
fn copy_dir(from: &Path, to: &Path) -> Result<usize, ExportError> {
    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(copy_error(from))? {
        let entry = entry.map_err(copy_error(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            create_dir(&target)?;
            copied += copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target).map_err(copy_error(&source))?;
            copied += 1;
        }
    }
    Ok(copied)
}
