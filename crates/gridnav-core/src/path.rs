//! Path helpers and the newline-delimited `x,y` text format

use std::path::Path;

use crate::error::Result;
use crate::grid::Grid;
use crate::types::Coordinate;

/// Number of moves in a path (`len - 1`, zero for an empty path)
pub fn path_length(path: &[Coordinate]) -> usize {
    path.len().saturating_sub(1)
}

/// True if every consecutive pair is a single passable in-bounds move
pub fn is_contiguous(grid: &Grid, path: &[Coordinate]) -> bool {
    path.iter()
        .all(|c| grid.in_bounds(c) && grid.passable(c))
        && path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
}

/// True if the path is non-empty and ends on `goal`
pub fn reaches(path: &[Coordinate], goal: Coordinate) -> bool {
    path.last() == Some(&goal)
}

/// One `x,y` line per cell
pub fn format_path(path: &[Coordinate]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inverse of [`format_path`]; blank lines are ignored
pub fn parse_path(text: &str) -> Result<Vec<Coordinate>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

pub fn write_path_file(file: impl AsRef<Path>, path: &[Coordinate]) -> Result<()> {
    let file = file.as_ref();
    if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(file, format_path(path))?;
    Ok(())
}

pub fn read_path_file(file: impl AsRef<Path>) -> Result<Vec<Coordinate>> {
    let text = std::fs::read_to_string(file)?;
    parse_path(&text)
}
