use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DistError, Result};
use crate::utils;

/// Copy build outputs into the staging directory under hash-qualified names
///
/// Each file lands as `<basename>.<sha256-hex>`, so downstream consumers can
/// verify integrity by recomputing the hash from the filename.
pub fn stage_artifacts(files: &[PathBuf], staging_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut staged = Vec::with_capacity(files.len());

    for path in files {
        let base = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DistError::InvalidFileName {
                path: path.display().to_string(),
            })?;

        let digest = utils::calculate_sha256(path)?;
        let dest = staging_dir.join(format!("{base}.{digest}"));
        fs::copy(path, &dest)?;

        tracing::debug!("Staged {} as {}", path.display(), dest.display());
        staged.push(dest);
    }

    Ok(staged)
}

/// Compress the staging directory into a zip archive
///
/// The archive contains the staging directory as its sole top-level entry, so
/// extraction reproduces the directory exactly.
pub fn create_archive(staging_dir: &Path, output_root: &Path) -> Result<PathBuf> {
    let dir_name = staging_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DistError::InvalidFileName {
            path: staging_dir.display().to_string(),
        })?;

    let archive_path = output_root.join(format!("{dir_name}.zip"));
    let file = File::create(&archive_path)?;
    let mut zip = zip::ZipWriter::new(file);

    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o755);

    zip.add_directory(dir_name, options)?;

    // Staged artifacts are flat, one level below the staging directory
    for entry in fs::read_dir(staging_dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DistError::InvalidFileName {
                path: path.display().to_string(),
            })?;

        zip.start_file(format!("{dir_name}/{file_name}"), options)?;

        let file_content = fs::read(&path)?;
        zip.write_all(&file_content)?;
    }

    zip.finish()?;

    tracing::info!("Created archive: {}", archive_path.display());
    Ok(archive_path)
}
