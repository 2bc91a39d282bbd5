//! Snapshot persistence between runs.

use std::{fs, path::Path};

use crate::{
    core::battery::{snapshot::Snapshot, trace::TracePoint},
    prelude::*,
};

/// Load a previously saved snapshot, or `None` when none has been saved yet.
pub fn load(path: &Path) -> Result<Option<Snapshot>> {
    if !path.try_exists()? {
        info!(path = %path.display(), "no saved state yet");
        return Ok(None);
    }
    info!(path = %path.display(), "loading the state…");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read the state from `{}`", path.display()))?;
    let snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse the state in `{}`", path.display()))?;
    Ok(Some(snapshot))
}

pub fn save(path: &Path, snapshot: &Snapshot) -> Result {
    info!(path = %path.display(), "saving the state…");
    let contents = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, contents)
        .with_context(|| format!("failed to save the state to `{}`", path.display()))
}

/// Dump the capacity curve as newline-delimited JSON.
pub fn save_trace(path: &Path, trace: &[TracePoint]) -> Result {
    info!(path = %path.display(), n_points = trace.len(), "saving the capacity curve…");
    let mut contents = String::new();
    for point in trace {
        contents.push_str(&serde_json::to_string(point)?);
        contents.push('\n');
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to save the capacity curve to `{}`", path.display()))
}
