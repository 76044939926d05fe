use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "nft-dist",
    version,
    about = "Package native-file-tests build outputs into a versioned, checksummed zip archive",
    long_about = None
)]
pub struct Args {
    /// Platform name embedded in the archive name (e.g. linux, darwin)
    #[clap(value_name = "PLATFORM")]
    pub platform: String,

    /// Version embedded in the archive name (e.g. 1.2.3)
    #[clap(id = "version_arg", value_name = "VERSION")]
    pub version: String,

    /// Directory containing the build outputs to package
    /// Layout: <build-root>/<config>/<file>
    #[clap(short, long)]
    pub build_root: Option<PathBuf>,

    /// Directory where the staging directory and the zip archive are written
    #[clap(short, long)]
    pub output_root: Option<PathBuf>,

    /// Configuration file path
    #[clap(long, default_value = ".config/nft-dist.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    /// Base name shared by the staging directory and the archive
    pub fn archive_name(&self) -> String {
        format!("native-file-tests-{}-{}", self.platform, self.version)
    }

    /// Get the build root, using the default if not specified
    pub fn build_root(&self) -> PathBuf {
        self.build_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("build"))
    }

    /// Get the output root, using the default if not specified
    pub fn output_root(&self) -> PathBuf {
        self.output_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
