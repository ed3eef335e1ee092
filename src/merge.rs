//! The merge engine: substitute preset lines into target text.
//!
//! Pure text-in, text-out — no I/O happens here, so the full pipeline is
//! testable with string literals (the `ops` module owns reading and writing).
//!
//! One forward pass over the target's lines, terminators preserved:
//!
//! - A header line updates the current-section tracker, marks the section as
//!   seen, and passes through unchanged.
//! - A key-value line whose key has an unclaimed preset entry under the
//!   current section is replaced by the preset's line; the entry is claimed
//!   so it substitutes at most once.
//! - Everything else passes through byte-identical.
//!
//! After the pass, preset sections the target never mentioned are appended in
//! preset order: a blank separator line, the header, then each unclaimed
//! entry. A section the target *does* have keeps only the keys that matched —
//! its leftover entries are dropped, not appended. That asymmetry is the
//! tool's contract (see DESIGN.md), not an oversight.

use std::collections::HashSet;

use crate::line::{self, LineKind};
use crate::preset::Preset;

/// Merge `preset` into `target`, returning the merged text.
///
/// Consumes the preset: claims record which entries were substituted, and the
/// append step emits only what is left in never-seen sections.
pub fn merge(target: &str, mut preset: Preset) -> String {
    let mut out = String::with_capacity(target.len());
    let mut current: Option<&str> = None;
    let mut seen: HashSet<&str> = HashSet::new();

    for raw in target.split_inclusive('\n') {
        match line::classify(raw) {
            LineKind::Header(header) => {
                current = Some(header);
                seen.insert(header);
                out.push_str(raw);
            }
            LineKind::KeyValue { key } => {
                match current.and_then(|header| preset.claim(header, key)) {
                    Some(preset_line) => {
                        out.push_str(preset_line);
                        out.push('\n');
                    }
                    None => out.push_str(raw),
                }
            }
            LineKind::Other => out.push_str(raw),
        }
    }

    for section in &preset.sections {
        if seen.contains(section.header.as_str()) || !section.has_unclaimed() {
            continue;
        }
        out.push('\n');
        out.push_str(&section.header);
        out.push('\n');
        for entry in section.entries.iter().filter(|e| !e.claimed) {
            out.push_str(&entry.line);
            out.push('\n');
        }
    }

    out
}
