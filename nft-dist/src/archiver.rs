use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Args;
use crate::config::Config;
use crate::error::{DistError, Result as NftResult};
use crate::packager;

pub struct Archiver {
    args: Args,
}

impl Archiver {
    pub fn new(mut args: Args) -> Result<Self> {
        // Load configuration
        let config = Config::load(&args.config).context("Failed to load configuration")?;

        // Merge configuration with args
        config.merge_with_args(&mut args);

        Ok(Self { args })
    }

    pub fn run(&self) -> Result<PathBuf> {
        let archive_name = self.args.archive_name();
        tracing::info!("Packaging build outputs as: {}", archive_name);

        let output_root = self.args.output_root();
        let staging_dir = output_root.join(&archive_name);
        create_staging_dir(&staging_dir)?;

        let build_root = self.args.build_root();
        let outputs = collect_build_outputs(&build_root)?;
        if outputs.is_empty() {
            return Err(DistError::NoArtifacts {
                root: build_root.display().to_string(),
            }
            .into());
        }

        let staged = packager::stage_artifacts(&outputs, &staging_dir)?;
        tracing::info!(
            "Staged {} artifacts in {}",
            staged.len(),
            staging_dir.display()
        );

        let archive_path = packager::create_archive(&staging_dir, &output_root)?;

        tracing::info!("Packaging completed successfully!");
        Ok(archive_path)
    }
}

/// Create the staging directory, refusing to reuse one left by a previous run
fn create_staging_dir(path: &Path) -> NftResult<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(DistError::StagingDirExists {
            path: path.display().to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Find build outputs exactly one configuration directory below the build root
///
/// Layout is `<build-root>/<config>/<file>`. Entries at any other depth are
/// ignored. Enumeration order follows the filesystem and is not sorted; every
/// file is staged independently, so the result does not depend on it.
fn collect_build_outputs(build_root: &Path) -> NftResult<Vec<PathBuf>> {
    let mut outputs = Vec::new();

    if !build_root.is_dir() {
        return Ok(outputs);
    }

    for entry in fs::read_dir(build_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        for file in fs::read_dir(entry.path())? {
            let file = file?;
            if file.file_type()?.is_file() {
                outputs.push(file.path());
            }
        }
    }

    Ok(outputs)
}
