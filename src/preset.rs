//! Preset parsing: build the ordered section → key → line mapping.
//!
//! A preset is the source of truth for overrides. Parsing keeps each
//! key-value line **verbatim** — whatever spacing the preset author used
//! around `=` is what lands in the merged config. Only the trimmed key is
//! extracted, for matching.
//!
//! Entries carry a `claimed` flag instead of being removed when the merge
//! engine consumes them. This keeps the consume-at-most-once rule and the
//! append step's "unclaimed entries only" rule explicit, rather than being a
//! side effect of mutating a map mid-iteration.

use crate::line::{self, LineKind};

/// One `key = value` line from the preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    /// The trimmed key text before the first `=`.
    pub key: String,
    /// The full source line, terminator stripped, formatting intact.
    pub line: String,
    /// Set once the merge engine substitutes this entry into the target.
    pub claimed: bool,
}

/// One bracketed section of the preset, entries in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetSection {
    /// The trimmed header line, brackets included, e.g. `[git_branch]`.
    pub header: String,
    pub entries: Vec<PresetEntry>,
}

impl PresetSection {
    /// Whether any entry is still unclaimed.
    pub fn has_unclaimed(&self) -> bool {
        self.entries.iter().any(|e| !e.claimed)
    }
}

/// The parsed preset: sections in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preset {
    pub sections: Vec<PresetSection>,
}

impl Preset {
    /// Parse preset text into the ordered section mapping.
    ///
    /// Rules, in line order:
    /// - A header line starts (or resumes) that section.
    /// - A key-value line inside a section records `key → full line`. A
    ///   duplicate key within the same section overwrites the stored line in
    ///   place, so the last occurrence wins but the key keeps its original
    ///   position.
    /// - Lines before any header, comments, and lines without `=` are
    ///   ignored. Nothing is ever an error.
    pub fn parse(content: &str) -> Preset {
        let mut preset = Preset::default();
        let mut current: Option<usize> = None;

        for raw in content.lines() {
            match line::classify(raw) {
                LineKind::Header(header) => {
                    current = Some(preset.section_index_or_insert(header));
                }
                LineKind::KeyValue { key } => {
                    let Some(idx) = current else { continue };
                    let section = &mut preset.sections[idx];
                    let line = raw.to_string();
                    match section.entries.iter_mut().find(|e| e.key == key) {
                        Some(entry) => entry.line = line,
                        None => section.entries.push(PresetEntry {
                            key: key.to_string(),
                            line,
                            claimed: false,
                        }),
                    }
                }
                LineKind::Other => {}
            }
        }

        preset
    }

    /// Claim the entry for `key` under `header`, if present and unclaimed.
    ///
    /// Returns the entry's full line. A second claim for the same key returns
    /// `None`, which is what limits substitution to once per key.
    pub fn claim(&mut self, header: &str, key: &str) -> Option<&str> {
        let section = self.sections.iter_mut().find(|s| s.header == header)?;
        let entry = section
            .entries
            .iter_mut()
            .find(|e| e.key == key && !e.claimed)?;
        entry.claimed = true;
        Some(&entry.line)
    }

    fn section_index_or_insert(&mut self, header: &str) -> usize {
        match self.sections.iter().position(|s| s.header == header) {
            Some(idx) => idx,
            None => {
                self.sections.push(PresetSection {
                    header: header.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        }
    }
}
