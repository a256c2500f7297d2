//! Front-end dropdown markup from the curated list in `config/dropdown.json`.
//!
//! The list is independent of test results; the output is meant to be pasted
//! into the front-end source by hand.

use std::io::{self, Write};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::util::heavy_rule;

/// CSS class applied to every generated option.
pub const OPTION_CLASS: &str = "bg-greenish-dark";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DropdownEntry {
    pub id: String,
    pub emoji: String,
    pub label: String,
    pub limit: String,
}

fn load_entries() -> Vec<DropdownEntry> {
    let json = include_str!("../../config/dropdown.json");
    serde_json::from_str(json).expect("dropdown.json is validated by build.rs")
}

static ENTRIES: OnceLock<Vec<DropdownEntry>> = OnceLock::new();

pub fn dropdown_entries() -> &'static [DropdownEntry] {
    ENTRIES.get_or_init(load_entries)
}

/// `<select>` block with one `<option>` per entry, in list order.
pub fn render_markup(entries: &[DropdownEntry]) -> String {
    let mut markup = String::from("<select>\n");
    for e in entries {
        markup.push_str(&format!(
            "  <option value=\"{}\" className=\"{}\">\n",
            e.id, OPTION_CLASS
        ));
        markup.push_str(&format!("    {} {} (Free - {})\n", e.emoji, e.label, e.limit));
        markup.push_str("  </option>\n");
    }
    markup.push_str("</select>\n");
    markup
}

pub fn write_dropdown(out: &mut impl Write, entries: &[DropdownEntry]) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "📝 DROPDOWN MARKUP (copy this to InsightsPage.tsx)")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;
    writeln!(out, "{}", render_markup(entries))
}
