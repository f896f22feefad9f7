// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for picker operations
//!
//! This module provides command-line functionality for:
//! - Listing media in a library directory
//! - Exporting a selection to the temporary store

use picker::library::LibraryEntry;
use picker::{
    EncodingFormat, ExportPipeline, FsMediaLibrary, MediaKind, PickerConfig, PickerSession,
    QualityPreset, storage,
};
use std::path::PathBuf;
use std::sync::Arc;

/// List media items in a library directory, newest first
pub async fn list_media(dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let library = FsMediaLibrary::new(dir);
    let entries = library.entries().await?;

    if entries.is_empty() {
        println!("No media found.");
        return Ok(());
    }

    println!("Available media:");
    println!();
    for (index, entry) in entries.iter().enumerate() {
        let kind = match entry.item.kind() {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        };
        let modified = entry
            .modified
            .map(|ts| ts.format(" %Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  [{}] {} ({}{})", index, entry.item.handle(), kind, modified);
    }

    Ok(())
}

/// Select items from a library directory and export them
pub async fn export_selection(
    dir: PathBuf,
    names: Vec<String>,
    all: bool,
    format: Option<String>,
    quality: Option<String>,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = PickerConfig::load();
    let format = match format {
        Some(raw) => parse_format(&raw)?,
        None => config.export_format,
    };
    let quality = match quality {
        Some(raw) => parse_quality(&raw)?,
        None => config.quality,
    };
    let export_dir = out
        .or(config.export_dir)
        .unwrap_or_else(storage::default_export_dir);

    let library = Arc::new(FsMediaLibrary::new(dir));
    let entries = library.entries().await?;

    let session_library: Arc<dyn picker::MediaLibrary> = library;
    let mut session = PickerSession::new(
        session_library,
        ExportPipeline::new(format, quality, export_dir),
    );

    for entry in select_entries(&entries, &names, all)? {
        session.store_mut().add(entry.item.clone(), false);
    }

    if session.store().is_empty() {
        return Err("nothing selected; pass item names or --all".into());
    }

    println!(
        "Exporting {} item(s) as {}...",
        session.store().len(),
        format.extension()
    );

    let mut failures = 0usize;
    for outcome in session.hand_off().await {
        match outcome.result {
            Ok(path) => println!("  {} -> {}", outcome.item.handle(), path.display()),
            Err(err) => {
                failures += 1;
                eprintln!("  {} failed: {}", outcome.item.handle(), err);
            }
        }
    }

    if failures > 0 {
        Err(format!("{} item(s) failed to export", failures).into())
    } else {
        Ok(())
    }
}

/// Pick the entries matching `names`, or every photo with `--all`
fn select_entries<'a>(
    entries: &'a [LibraryEntry],
    names: &[String],
    all: bool,
) -> Result<Vec<&'a LibraryEntry>, Box<dyn std::error::Error>> {
    if all {
        return Ok(entries
            .iter()
            .filter(|entry| entry.item.kind() == MediaKind::Photo)
            .collect());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match entries
            .iter()
            .find(|entry| entry.item.handle().as_str() == name)
        {
            Some(entry) => selected.push(entry),
            None => return Err(format!("no such item: {}", name).into()),
        }
    }
    Ok(selected)
}

fn parse_format(raw: &str) -> Result<EncodingFormat, Box<dyn std::error::Error>> {
    match raw.to_ascii_lowercase().as_str() {
        "jpeg" | "jpg" => Ok(EncodingFormat::Jpeg),
        "png" => Ok(EncodingFormat::Png),
        _ => Err(format!("unknown format: {} (expected jpeg or png)", raw).into()),
    }
}

fn parse_quality(raw: &str) -> Result<QualityPreset, Box<dyn std::error::Error>> {
    QualityPreset::ALL
        .iter()
        .find(|preset| preset.display_name().eq_ignore_ascii_case(raw))
        .copied()
        .ok_or_else(|| format!("unknown quality: {} (expected one of low, balanced, high, maximum)", raw).into())
}
