use anyhow::{Context, Result};
use sculpt_codec::{ShapeMetadata, ShapePayload, decode, encode, validate_format};
use sculpt_edit::{EditorConfig, ShapeEditor};
use sculpt_shape::{Adjacency, find_components_with, validate};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::cli::Command;

/// Runs one subcommand, writing its report to `out`.
///
/// `Ok(false)` means the command ran but the shape failed its check.
pub fn run(command: &Command, config: &EditorConfig, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Check { file } => check(file, out),
        Command::Validate { file, rule } => {
            validate_file(file, rule.unwrap_or(config.adjacency), out)
        }
        Command::Info { file } => info(file, config.adjacency, out),
        Command::Resize { file, size, output } => {
            resize(file, *size, config, output.as_deref(), out)
        }
        Command::New {
            size,
            fill,
            difficulty,
            max_moves,
            output,
        } => {
            let defaults = config.default_metadata();
            let metadata = ShapeMetadata::new(
                difficulty.unwrap_or(defaults.difficulty),
                max_moves.unwrap_or(defaults.max_moves),
            );
            new_shape(
                size.unwrap_or(config.default_grid_size),
                *fill,
                metadata,
                config,
                output.as_deref(),
                out,
            )
        }
    }
}

fn load(file: &Path) -> Result<ShapePayload> {
    sculpt_io::load_payload(file).with_context(|| format!("reading {}", file.display()))
}

fn emit(payload: &ShapePayload, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match output {
        Some(path) => {
            sculpt_io::save_payload(path, payload)
                .with_context(|| format!("writing {}", path.display()))?;
            writeln!(out, "wrote {}", path.display())?;
        }
        None => out.write_all(sculpt_io::to_json_string(payload)?.as_bytes())?,
    }
    Ok(())
}

fn check(file: &Path, out: &mut impl Write) -> Result<bool> {
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", file.display()))?;
    let report = validate_format(&value);
    if report.is_valid() {
        writeln!(out, "{}: format ok", file.display())?;
    } else {
        for e in &report.errors {
            writeln!(out, "{}: {}", file.display(), e)?;
        }
    }
    Ok(report.is_valid())
}

fn validate_file(file: &Path, rule: Adjacency, out: &mut impl Write) -> Result<bool> {
    let shape = decode(&load(file)?)?;
    let result = validate(&shape.grid, rule);
    if result.is_valid() {
        writeln!(
            out,
            "{}: valid, {} voxel(s) connected {}",
            file.display(),
            result.voxel_count,
            rule.description()
        )?;
    } else {
        for e in &result.errors {
            writeln!(out, "{}: {}", file.display(), e)?;
        }
    }
    Ok(result.is_valid())
}

fn info(file: &Path, rule: Adjacency, out: &mut impl Write) -> Result<bool> {
    let shape = decode(&load(file)?)?;
    let grid = &shape.grid;
    let parts = find_components_with(grid, rule).len();
    writeln!(out, "grid size:  {0}x{0}x{0}", grid.size())?;
    writeln!(out, "voxels:     {} of {}", grid.occupied_count(), grid.cell_count())?;
    writeln!(out, "parts:      {} ({})", parts, rule)?;
    writeln!(out, "difficulty: {}", shape.metadata.difficulty)?;
    writeln!(out, "max moves:  {}", shape.metadata.max_moves)?;
    Ok(true)
}

fn resize(
    file: &Path,
    size: usize,
    config: &EditorConfig,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<bool> {
    let payload = load(file)?;
    let mut editor = ShapeEditor::new(config.clone())?;
    editor.reset_empty(size)?;
    let report = editor.import(&payload)?;
    if report.lost_voxels > 0 {
        log::warn!(
            target: "cli",
            "cropping {} -> {} dropped {} voxel(s)",
            report.original_size,
            size,
            report.lost_voxels
        );
    }
    // cropping may leave an invalid shape; resize writes it regardless
    let resized = encode(editor.grid(), &editor.metadata());
    emit(&resized, output, out)?;
    Ok(true)
}

fn new_shape(
    size: usize,
    fill: bool,
    metadata: ShapeMetadata,
    config: &EditorConfig,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<bool> {
    let mut editor = ShapeEditor::new(config.clone())?;
    if fill {
        editor.fill(size)?;
    } else {
        editor.reset_empty(size)?;
        editor.clear_to_center()?;
    }
    editor.set_metadata(metadata);
    let stats = editor.stats();
    log::info!(
        target: "cli",
        "new shape size={} voxels={}",
        stats.grid_size,
        stats.voxel_count
    );
    emit(&editor.export()?, output, out)?;
    Ok(true)
}
