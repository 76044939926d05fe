use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Staging directory already exists: {path}. Remove the leftover directory from a previous run or change the version")]
    StagingDirExists { path: String },

    #[error("No build outputs found under {root}. Expected files at <build-root>/<config>/<file>; did the build step run?")]
    NoArtifacts { root: String },

    #[error("File name is not valid UTF-8: {path}")]
    InvalidFileName { path: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DistError>;
