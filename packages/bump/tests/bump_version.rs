// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `bump_version` binary.

use std::fs::{File, read_to_string};
use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result};
use bump::{Requirements, Version, VersionWriter};
use indoc::indoc;
use mockito::Server;
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use with_dir::WithDir;

const VERSION_PATH: &str = "/werk24/werk24-python/master/werk24/_version.py";

#[test]
fn requirements_default_path_test() -> Result<()> {
    let dir = tempdir()?;
    let dir_path = dir.path();
    let requirements_path = dir_path.join("requirements.txt");

    File::create(&requirements_path)?.write_all(b"werk24==0.0.1\n")?;

    let version = Version::parse(r#"__version__ = "2.0.0""#)?;
    WithDir::new(dir_path)
        .map(|_| Requirements::default().write(&version))
        .context(format!(
            "failed to switch workdir to {}",
            dir_path.display()
        ))??;

    assert_eq!("werk24==2.0.0", read_to_string(&requirements_path)?);

    Ok(())
}

#[test]
#[cfg(unix)]
fn bump_version_binary_test() -> Result<()> {
    use std::fs::{Permissions, set_permissions, write};
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let dir_path = dir.path();

    let npm_path = dir_path.join("npm");
    write(
        &npm_path,
        indoc! {r#"
            #!/bin/sh
            printf '%s\n' "$@" > npm_args.txt
        "#},
    )?;
    set_permissions(&npm_path, Permissions::from_mode(0o755))?;

    let mut server = Server::new();
    let mock = server
        .mock("GET", VERSION_PATH)
        .with_status(200)
        .with_body(indoc! {r#"
            __version__ = "3.1.0rc2"
        "#})
        .create();

    let status = Command::new(env!("CARGO_BIN_EXE_bump_version"))
        .current_dir(dir_path)
        .arg("--url")
        .arg(format!("{}{VERSION_PATH}", server.url()))
        .arg("--npm")
        .arg(&npm_path)
        .status()?;
    assert!(status.success());
    mock.assert();

    assert_eq!(
        "werk24==3.1.0rc2",
        read_to_string(dir_path.join("requirements.txt"))?
    );
    assert_eq!(
        indoc! {"
            version
            3.1.0rc2
            --allow-same-version
        "},
        read_to_string(dir_path.join("npm_args.txt"))?
    );

    Ok(())
}

#[test]
fn bump_version_binary_parse_failure_test() -> Result<()> {
    let dir = tempdir()?;
    let dir_path = dir.path();
    let requirements_path = dir_path.join("requirements.txt");
    File::create(&requirements_path)?.write_all(b"werk24==1.0.0")?;

    let mut server = Server::new();
    let mock = server
        .mock("GET", VERSION_PATH)
        .with_status(200)
        .with_body(indoc! {r#"
            # Version of the werk24 client
            __version__ = "3.1.0"
        "#})
        .create();

    let output = Command::new(env!("CARGO_BIN_EXE_bump_version"))
        .current_dir(dir_path)
        .arg("--url")
        .arg(format!("{}{VERSION_PATH}", server.url()))
        .arg("--npm")
        .arg("bump-no-such-program")
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unable to parse __version__ string"));
    mock.assert();

    assert_eq!("werk24==1.0.0", read_to_string(&requirements_path)?);

    Ok(())
}

#[test]
fn bump_version_binary_fetch_failure_test() -> Result<()> {
    let dir = tempdir()?;

    let mut server = Server::new();
    let mock = server.mock("GET", VERSION_PATH).with_status(500).create();

    let status = Command::new(env!("CARGO_BIN_EXE_bump_version"))
        .current_dir(dir.path())
        .arg("--url")
        .arg(format!("{}{VERSION_PATH}", server.url()))
        .status()?;
    assert!(!status.success());
    mock.assert();

    assert!(!dir.path().join("requirements.txt").exists());

    Ok(())
}
