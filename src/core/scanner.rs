//! Asset directory scanning for `.glb` model files.

use bevy::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

const MODEL_EXTENSION: &str = "glb";

/// Lists the `.glb` files directly inside `dir`, in filesystem enumeration order.
///
/// A directory that cannot be read is logged and treated as empty.
pub fn scan_models(dir: &Path) -> Vec<String> {
    match read_model_entries(dir) {
        Ok(files) => {
            info!("Found {} model file(s) in {}", files.len(), dir.display());
            files
        }
        Err(err) => {
            error!("Failed to scan model directory {}: {}", dir.display(), err);
            Vec::new()
        }
    }
}

fn read_model_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        // Follows symlinks, so a linked model still counts as a regular file
        let is_file = fs::metadata(entry.path()).map(|meta| meta.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        let is_model = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_EXTENSION));

        if is_model {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(files)
}
