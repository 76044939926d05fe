use clap::Parser;
use nft_dist::cli::Args;
use std::path::PathBuf;

#[test]
fn test_parse_platform_and_version() {
    let args = Args::try_parse_from(["nft-dist", "linux", "1.2.3"]).unwrap();

    assert_eq!(args.platform, "linux");
    assert_eq!(args.version, "1.2.3");
    assert!(!args.verbose);
}

#[test]
fn test_missing_version_is_an_error() {
    assert!(Args::try_parse_from(["nft-dist", "linux"]).is_err());
}

#[test]
fn test_missing_arguments_is_an_error() {
    assert!(Args::try_parse_from(["nft-dist"]).is_err());
}

#[test]
fn test_extra_argument_is_an_error() {
    assert!(Args::try_parse_from(["nft-dist", "linux", "1.2.3", "extra"]).is_err());
}

#[test]
fn test_archive_name() {
    let args = Args::try_parse_from(["nft-dist", "linux", "1.2.3"]).unwrap();

    assert_eq!(args.archive_name(), "native-file-tests-linux-1.2.3");
}

#[test]
fn test_roots_default() {
    let args = Args::try_parse_from(["nft-dist", "linux", "1.2.3"]).unwrap();

    assert_eq!(args.build_root(), PathBuf::from("build"));
    assert_eq!(args.output_root(), PathBuf::from("."));
    assert_eq!(args.config, PathBuf::from(".config/nft-dist.toml"));
}

#[test]
fn test_roots_override() {
    let args = Args::try_parse_from([
        "nft-dist",
        "darwin",
        "0.4.0",
        "--build-root",
        "out/native",
        "--output-root",
        "dist",
    ])
    .unwrap();

    assert_eq!(args.build_root(), PathBuf::from("out/native"));
    assert_eq!(args.output_root(), PathBuf::from("dist"));
}
