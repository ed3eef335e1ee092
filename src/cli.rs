//! Clap argument definitions for the `presetmerge` binary.
//!
//! The surface is two positional paths and nothing else: no flags, no
//! subcommands, no output modes. Missing arguments are rejected by clap with
//! a usage diagnostic and a non-zero exit.

use std::path::PathBuf;

use clap::Parser;

/// Merge INI-style preset sections into a config file, preserving its layout.
///
/// Keys found in the preset replace the matching lines in the config, exactly
/// as formatted in the preset. Preset sections the config lacks are appended.
/// The config file is rewritten in place; the preset is only read.
#[derive(Debug, Parser)]
#[command(name = "presetmerge", version)]
pub struct Cli {
    /// Config file to rewrite in place.
    pub config_file: PathBuf,

    /// Preset file supplying the override values.
    pub preset_file: PathBuf,
}
