//! Folder Notes command line entry point
//!
//! Lists the notes that share a folder with one note on disk.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use folder_notes_core::vfs::PhysicalVault;
use folder_notes_core::PanelSettings;
use folder_notes_panel::{render_text, Host, LocalHost, Panel};

#[derive(Parser, Debug)]
#[command(
    name = "folder-notes",
    about = "List the notes in the same folder as a note, with their outlines"
)]
struct Cli {
    /// Root directory of the notes vault.
    #[arg(long, env = "FOLDER_NOTES_VAULT", default_value = ".")]
    vault: PathBuf,

    /// Note to list around, relative to the vault root.
    #[arg(long)]
    active: Option<String>,

    /// Settings file (YAML, or JSON when the extension is .json).
    #[arg(long, env = "FOLDER_NOTES_SETTINGS")]
    settings: Option<PathBuf>,

    /// Show the outline of every listed note.
    #[arg(long, default_value_t = false)]
    all_outlines: bool,
}

fn load_settings(path: &PathBuf) -> Result<PanelSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = if path.extension().is_some_and(|ext| ext == "json") {
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        PanelSettings::from_json(value)?
    } else {
        PanelSettings::from_yaml(&content)?
    };
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let host = Arc::new(LocalHost::new(PhysicalVault::new(&cli.vault)));
    host.set_active(cli.active.clone()).await;

    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => PanelSettings::default(),
    };
    if cli.all_outlines {
        settings.show_all_outlines = true;
    }
    host.save_settings(settings.to_json()?).await?;

    let panel = Panel::new(host.clone());
    panel.load_settings().await;
    panel.refresh().await.wait().await;

    let view = panel
        .view()
        .await
        .context("panel produced no view")?;
    print!("{}", render_text(&view));
    Ok(())
}
