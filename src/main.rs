//! TuneSphere - a music discovery and social listening app.
//!
//! Browse recommended tracks, follow what the community is playing, curate
//! playlists and play through them with a simulated transport. It can be run
//! as a GUI application or used via CLI commands to inspect and export the
//! catalog.

// Hide console window on Windows when running as GUI
// CLI commands will attach to the parent console or allocate one
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod artwork;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod meta;
pub mod model;
pub mod player;
#[cfg(test)]
pub mod test_utils;
pub mod ui;

use clap::Parser;
use iced::window;
use iced::{Size, application};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::TuneSphere;

use crate::ui::theme::layout;

/// Window icon edge length in pixels
const ICON_SIZE: u32 = 32;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // If running CLI commands on Windows, attach to console for output
    #[cfg(target_os = "windows")]
    if args.command.is_some() {
        attach_console();
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunesphere=info".parse()?))
        .init();

    let config = config::load();
    tracing::info!(
        minikit_key = config.credentials.minikit_api_key.is_some(),
        onchainkit_key = config.credentials.onchainkit_api_key.is_some(),
        "API credentials present"
    );

    // Try to run a CLI command
    if cli::run_command(&args, &config)? {
        // A command was executed, exit normally
        return Ok(());
    }

    let source = args.catalog_source(&config);

    // No command specified, launch the GUI
    application(TuneSphere::title, TuneSphere::update, TuneSphere::view)
        .subscription(TuneSphere::subscription)
        .theme(TuneSphere::theme)
        .window(window::Settings {
            size: Size::new(layout::FRAME_WIDTH, layout::FRAME_HEIGHT),
            min_size: Some(Size::new(360.0, 560.0)),
            icon: load_icon(),
            ..Default::default()
        })
        .run_with(move || TuneSphere::new(config, source))
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}

/// Brand-gradient window icon
fn load_icon() -> Option<window::Icon> {
    let rgba = ui::icons::window_icon_rgba(ICON_SIZE);
    window::icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Attach to parent console on Windows for CLI output.
/// This is needed because windows_subsystem = "windows" detaches from console.
#[cfg(target_os = "windows")]
fn attach_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};
    unsafe {
        // Try to attach to parent console (e.g., PowerShell, cmd)
        // If that fails, we just won't have console output (acceptable for GUI launch)
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}
