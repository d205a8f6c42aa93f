use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use sparql_kernel_setup::{
    install, remove, InstallOptions, Location, RemoveOptions, LOGDIR_ENV,
};

fn usage() -> &'static str {
    "Usage:\n  sparql-kernel-setup install [--user] [--prefix <dir>] [--replace] [--logdir <dir>]\n  sparql-kernel-setup remove [--user] [--prefix <dir>]"
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.split_first() {
        Some((cmd, rest)) if cmd == "install" => install(&parse_install_args(rest)?).map(|_| ()),
        Some((cmd, rest)) if cmd == "remove" => remove(&parse_remove_args(rest)?),
        _ => bail!(usage()),
    }
}

fn parse_install_args(args: &[String]) -> Result<InstallOptions> {
    let (location, flags) = parse_location(args)?;

    let mut replace = false;
    let mut logdir = env::var(LOGDIR_ENV).ok().filter(|dir| !dir.is_empty());

    let mut iter = flags.into_iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--replace" => replace = true,
            "--logdir" => {
                let Some(dir) = iter.next() else {
                    bail!("--logdir requires a directory argument");
                };
                logdir = Some(dir);
            }
            other => bail!("unsupported install option '{}'\n{}", other, usage()),
        }
    }

    Ok(InstallOptions {
        location,
        replace,
        logdir,
    })
}

fn parse_remove_args(args: &[String]) -> Result<RemoveOptions> {
    let (location, flags) = parse_location(args)?;
    if let Some(other) = flags.first() {
        bail!("unsupported remove option '{}'\n{}", other, usage());
    }
    Ok(RemoveOptions { location })
}

/// Split the scope flags off the argument list.
///
/// `--user` and `--prefix` are mutually exclusive; neither means a
/// system-wide install.
fn parse_location(args: &[String]) -> Result<(Location, Vec<String>)> {
    let mut user = false;
    let mut prefix: Option<PathBuf> = None;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--user" => user = true,
            "--prefix" => {
                let Some(dir) = iter.next() else {
                    bail!("--prefix requires a directory argument");
                };
                prefix = Some(PathBuf::from(dir));
            }
            _ => rest.push(flag.clone()),
        }
    }

    let location = match (user, prefix) {
        (true, Some(_)) => {
            bail!("can't specify both --user and --prefix; please choose one or the other")
        }
        (true, None) => Location::User,
        (false, Some(dir)) => Location::Prefix(dir),
        (false, None) => Location::System,
    };

    Ok((location, rest))
}
