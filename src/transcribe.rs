//! Text file utility: numbered upper-case transcription and file stats.
//!
//! Every failure is a [`FileError`] naming the path, so a caller walking
//! several files can report one and move on to the next.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::FileError;

/// Characters of transformed text kept in [`TranscribeSummary::preview`].
pub const PREVIEW_CHARS: usize = 200;
/// Lines kept in [`FileReport::head`].
pub const HEAD_LINES: usize = 5;

/// Number every non-blank line by its original position and upper-case it.
///
/// Blank lines are dropped but still counted, so numbering follows the
/// source file.  `\r\n` endings are treated like `\n`.
pub fn transform(content: &str) -> String {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| format!("{}: {}", i + 1, line.to_uppercase()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeSummary {
    pub output: PathBuf,
    /// Lines written.
    pub lines: usize,
    /// First [`PREVIEW_CHARS`] characters, with `"..."` appended if cut.
    pub preview: String,
}

fn read_text(path: &Path) -> Result<String, FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory(path.display().to_string()));
    }
    let bytes = fs::read(path).map_err(|e| FileError::from_io(path, &e))?;
    let text =
        String::from_utf8(bytes).map_err(|_| FileError::NotUtf8(path.display().to_string()))?;
    // Counts and output always see `\n` endings.
    if text.contains("\r\n") {
        Ok(text.replace("\r\n", "\n"))
    } else {
        Ok(text)
    }
}

fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory(path.display().to_string()));
    }
    fs::write(path, text).map_err(|e| FileError::from_io(path, &e))
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Read `input`, [`transform`] it, and write the result to `output`.
pub fn transcribe_file(input: &Path, output: &Path) -> Result<TranscribeSummary, FileError> {
    let original = read_text(input)?;
    debug!("transcribe: read {} bytes from {}", original.len(), input.display());

    let modified = transform(&original);
    write_text(output, &modified)?;
    info!("transcribe: {} -> {}", input.display(), output.display());

    Ok(TranscribeSummary {
        output: output.to_path_buf(),
        lines: modified.lines().count(),
        preview: preview(&modified),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
//  Inspection
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub chars: usize,
    pub lines: usize,
    pub words: usize,
    /// Up to [`HEAD_LINES`] leading lines.
    pub head: Vec<String>,
    /// More lines follow `head`.
    pub truncated: bool,
    pub content: String,
}

pub fn inspect_file(path: &Path) -> Result<FileReport, FileError> {
    let content = match read_text(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("inspect: {e}");
            return Err(e);
        }
    };
    let lines = content.lines().count();
    Ok(FileReport {
        path: path.to_path_buf(),
        chars: content.chars().count(),
        lines,
        words: content.split_whitespace().count(),
        head: content.lines().take(HEAD_LINES).map(str::to_string).collect(),
        truncated: lines > HEAD_LINES,
        content,
    })
}

/// Non-overlapping occurrences of `needle`.  An empty needle matches nothing.
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    content.matches(needle).count()
}

/// Stats document as written by [`save_stats`].
pub fn render_stats(report: &FileReport) -> String {
    format!(
        "File Statistics for: {}\nTotal characters: {}\nTotal lines: {}\nTotal words: {}\n",
        report.path.display(),
        report.chars,
        report.lines,
        report.words
    )
}

/// `{path}_stats.txt` next to the inspected file.
pub fn stats_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push("_stats.txt");
    PathBuf::from(name)
}

pub fn save_stats(report: &FileReport) -> Result<PathBuf, FileError> {
    let target = stats_path(&report.path);
    write_text(&target, &render_stats(report))?;
    info!("inspect: stats saved to {}", target.display());
    Ok(target)
}
