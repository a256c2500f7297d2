//! Fixed recommendation sheet from `config/recommendations.json`.

use std::io::{self, Write};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::util::heavy_rule;

#[derive(Clone, Debug, Deserialize)]
pub struct Recommendation {
    pub emoji: String,
    pub title: String,
    pub model: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RecommendationSheet {
    pub picks: Vec<Recommendation>,
    pub setup: Vec<String>,
}

fn load_sheet() -> RecommendationSheet {
    let json = include_str!("../../config/recommendations.json");
    serde_json::from_str(json).expect("recommendations.json is validated by build.rs")
}

static SHEET: OnceLock<RecommendationSheet> = OnceLock::new();

pub fn recommendation_sheet() -> &'static RecommendationSheet {
    SHEET.get_or_init(load_sheet)
}

pub fn write_recommendations(out: &mut impl Write, sheet: &RecommendationSheet) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "🎯 RECOMMENDED GROQ MODELS")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;
    for pick in &sheet.picks {
        writeln!(out, "{} {}:", pick.emoji, pick.title)?;
        writeln!(out, "   → {}", pick.model)?;
        for line in &pick.highlights {
            writeln!(out, "   ✓ {}", line)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;
    writeln!(out, "💡 RECOMMENDED SETUP:")?;
    for (i, step) in sheet.setup.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, step)?;
    }
    writeln!(out, "{}", heavy_rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sheet_has_default_pick_first() {
        let sheet = recommendation_sheet();
        assert_eq!(sheet.picks[0].model, "llama-3.1-8b-instant");
        assert_eq!(sheet.setup.len(), 4);
    }

    #[test]
    fn renders_picks_and_numbered_setup() {
        let sheet = RecommendationSheet {
            picks: vec![Recommendation {
                emoji: "🥇".to_string(),
                title: "DEFAULT".to_string(),
                model: "llama-3.1-8b-instant".to_string(),
                highlights: vec!["Fast".to_string()],
            }],
            setup: vec!["Default: llama-3.1-8b-instant".to_string()],
        };
        let mut buf = Vec::new();
        write_recommendations(&mut buf, &sheet).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("🥇 DEFAULT:\n   → llama-3.1-8b-instant\n   ✓ Fast\n"));
        assert!(text.contains("   1. Default: llama-3.1-8b-instant\n"));
    }
}
