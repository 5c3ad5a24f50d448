//! Catalog listing and export commands.

use chrono::Utc;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::catalog::{Catalog, CatalogFile, CatalogSource};
use crate::error::ResultExt;
use crate::format::{format_date, format_optional_duration, format_time_ago};
use crate::model::FeedContent;

fn load(rt: &Runtime, source: CatalogSource) -> anyhow::Result<Catalog> {
    let label = source.label();
    let catalog = rt
        .block_on(Catalog::load(source))
        .with_context(format!("Failed to load {}", label))?;
    tracing::debug!(source = %label, tracks = catalog.tracks().len(), "Catalog loaded");
    Ok(catalog)
}

/// List all tracks
pub fn cmd_tracks(rt: &Runtime, source: CatalogSource) -> anyhow::Result<()> {
    let catalog = load(rt, source)?;
    for line in track_lines(&catalog) {
        println!("{}", line);
    }
    Ok(())
}

/// List playlists
pub fn cmd_playlists(rt: &Runtime, source: CatalogSource) -> anyhow::Result<()> {
    let catalog = load(rt, source)?;
    for line in playlist_lines(&catalog) {
        println!("{}", line);
    }
    Ok(())
}

/// Show the feed
pub fn cmd_feed(rt: &Runtime, source: CatalogSource) -> anyhow::Result<()> {
    let catalog = load(rt, source)?;
    let lines = feed_lines(&catalog, Utc::now());
    if lines.is_empty() {
        println!("No activity yet. Follow some users to see their music activity!");
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Export the catalog to a file
pub fn cmd_export(rt: &Runtime, source: CatalogSource, path: &Path) -> anyhow::Result<()> {
    let catalog = load(rt, source)?;
    let written = CatalogFile::from(&catalog).write(path)?;
    println!(
        "Exported {} tracks, {} playlists, {} feed entries to {}",
        catalog.tracks().len(),
        catalog.playlists().len(),
        catalog.feed().len(),
        written.display()
    );
    Ok(())
}

fn track_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .tracks()
        .iter()
        .map(|t| {
            format!(
                "{:>4}  {} - {} ({}) [{}]",
                t.id,
                t.title,
                t.artist,
                t.album,
                format_optional_duration(t.known_duration())
            )
        })
        .collect()
}

fn playlist_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .playlists()
        .iter()
        .map(|p| {
            let creator = catalog
                .user(&p.creator_id)
                .map(|u| u.display_name.as_str())
                .unwrap_or(p.creator_id.as_str());
            format!(
                "{}  {} by {}: {} tracks, created {}",
                p.id,
                p.name,
                creator,
                catalog.resolve_playlist_tracks(p).len(),
                format_date(p.created_at)
            )
        })
        .collect()
}

fn feed_lines(catalog: &Catalog, now: chrono::DateTime<Utc>) -> Vec<String> {
    catalog
        .feed()
        .iter()
        .map(|item| {
            let subject = match &item.content {
                FeedContent::TrackShare(t) | FeedContent::NowPlaying(t) => {
                    format!("{} by {}", t.title, t.artist)
                }
                FeedContent::PlaylistShare(p) => p.name.clone(),
            };
            format!(
                "{} {} {} ({}) - {} likes, {} comments",
                item.author.display_name,
                item.content.action_phrase(),
                subject,
                format_time_ago(item.timestamp, now),
                item.likes,
                item.comments
            )
        })
        .collect()
}
