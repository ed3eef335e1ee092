//! Merge INI-style preset sections into a config file while preserving its
//! layout.
//!
//! `presetmerge` takes two files: a **config** (rewritten in place) and a
//! **preset** (read only). For every `key = value` line in the preset, the
//! matching line in the config — same key, same section — is replaced with
//! the preset's line, formatting and all. Preset sections the config does not
//! have are appended at the end. Everything else in the config — comments,
//! blank lines, free text, key order, spacing — comes out byte-identical.
//!
//! ```sh
//! presetmerge starship.toml nerd-font-symbols.toml
//! ```
//!
//! # Why line-level merging
//!
//! A structural parse-and-reserialize pass would normalize the whole file:
//! reorder keys, rewrite spacing, drop or move comments. This tool exists for
//! config files people edit by hand, where that churn is unacceptable. So the
//! config is treated as a line sequence, and the merge touches only the lines
//! the preset names.
//!
//! # Merge rules
//!
//! - A key matches only within its section: `symbol` under `[git_branch]` in
//!   the preset never touches `symbol` under `[aws]` in the config.
//! - The preset's line wins verbatim, including its spacing around `=`.
//! - Each preset entry substitutes **at most once**, then counts as claimed.
//! - A preset section absent from the config is appended: a blank line, the
//!   header, then its lines, in preset order.
//! - A preset section the config *does* have keeps only the keys that
//!   matched; its leftover keys are dropped, not appended. See DESIGN.md for
//!   the status of this rule.
//!
//! Merging is idempotent: running the same preset into an already-merged
//! config changes nothing.
//!
//! # Pipeline
//!
//! ```text
//! preset file  ──parse──▶  Preset (sections → claimed/unclaimed entries)
//! config file  ──read───▶  line sequence
//!                              │  merge: substitute + append
//!                              ▼
//! config file  ◀──write──  merged text
//! ```
//!
//! Both reads complete before the write begins, so a read failure never
//! leaves the config half-rewritten. The write itself is not atomic.
//!
//! # Errors
//!
//! The only failures are I/O: an unreadable input or an unwritable config,
//! reported as [`MergeError`] with the offending path. Malformed lines are
//! never errors — a line that isn't a header or a `key = value` pair simply
//! passes through.

pub mod error;

mod cli;
mod line;
mod merge;
mod ops;
mod preset;

pub use cli::Cli;
pub use error::MergeError;
pub use line::{LineKind, classify};
pub use merge::merge;
pub use ops::{MergeReport, merge_files};
pub use preset::{Preset, PresetEntry, PresetSection};
