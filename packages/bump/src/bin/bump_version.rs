// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone binary to sync `package.json` and `requirements.txt` with the published werk24 version.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bump::config::{
    DEFAULT_DEPENDENCY, DEFAULT_NPM_PROGRAM, DEFAULT_REQUIREMENTS_PATH, DEFAULT_VERSION_URL,
};
use bump::{HttpSource, NpmVersion, Requirements};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bump_version", version)]
struct Cli {
    /// Location of the `_version.py` holding the published version
    #[arg(long, env = "BUMP_VERSION_URL", default_value = DEFAULT_VERSION_URL)]
    url: String,

    /// Requirements file to overwrite with the new pin
    #[arg(long, default_value = DEFAULT_REQUIREMENTS_PATH)]
    requirements: PathBuf,

    /// Python dependency to pin
    #[arg(long, default_value = DEFAULT_DEPENDENCY)]
    dependency: String,

    /// Program invoked as `<npm> version <version> --allow-same-version`
    #[arg(long, default_value = DEFAULT_NPM_PROGRAM)]
    npm: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = HttpSource::new(cli.url);
    let npm = NpmVersion::new(cli.npm);
    let requirements = Requirements::new(cli.requirements, cli.dependency);

    bump::bump(&source, &[&npm, &requirements])
        .with_context(|| format!("failed to bump version from {}", source.url()))?;

    Ok(())
}
