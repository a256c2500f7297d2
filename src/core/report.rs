//! Console rendering of tester results.

use std::io::{self, Write};

use crate::core::models::ModelDescriptor;
use crate::core::probe::{RunSummary, TestOutcome};
use crate::core::util::{heavy_rule, light_rule, truncate_chars};

/// Characters of the response or error message shown per model.
pub const PREVIEW_CHARS: usize = 100;

const NEXT_STEPS: [&str; 3] = [
    "Copy the dropdown markup above into InsightsPage.tsx",
    "Update the AI model selector with the working options",
    "Test in the browser",
];

pub fn write_run_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n🚀 Testing all Groq models\n")?;
    writeln!(out, "{}", heavy_rule())
}

/// One model's block: preview and metadata on success, truncated error on failure.
pub fn write_outcome(
    out: &mut impl Write,
    descriptor: &ModelDescriptor,
    outcome: &TestOutcome,
) -> io::Result<()> {
    match outcome {
        TestOutcome::Success {
            response_text,
            token_count,
            echoed_model_id,
        } => {
            writeln!(out, "✅ {}", descriptor.name)?;
            writeln!(out, "   ID: {}", descriptor.id)?;
            if !echoed_model_id.is_empty() && echoed_model_id != &descriptor.id {
                writeln!(out, "   Served by: {}", echoed_model_id)?;
            }
            writeln!(
                out,
                "   Response: {}...",
                truncate_chars(response_text, PREVIEW_CHARS)
            )?;
            writeln!(out, "   Tokens: {}", token_count)?;
            writeln!(out, "   Free Limit: {}", descriptor.free_tier_limit)?;
            writeln!(out, "   Context: {}", descriptor.context_window)?;
        }
        TestOutcome::Failure { error_message } => {
            writeln!(out, "❌ {}", descriptor.name)?;
            writeln!(out, "   ID: {}", descriptor.id)?;
            writeln!(
                out,
                "   Error: {}",
                truncate_chars(error_message, PREVIEW_CHARS)
            )?;
        }
    }
    writeln!(out, "{}", light_rule())
}

/// Counts, then the working list with limits, then the failed list.
pub fn write_summary(out: &mut impl Write, summary: &RunSummary) -> io::Result<()> {
    let total = summary.total();
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "📊 TEST SUMMARY")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "\n✅ Working Models: {}/{}", summary.working_count(), total)?;
    writeln!(out, "❌ Failed Models: {}/{}", summary.failed_count(), total)?;

    let working = summary.working();
    if !working.is_empty() {
        writeln!(out, "\n✅ USABLE MODELS:")?;
        for d in working {
            writeln!(out, "   • {} ({})", d.name, d.id)?;
            writeln!(
                out,
                "     Free: {} | Context: {}",
                d.free_tier_limit, d.context_window
            )?;
            if !d.description.is_empty() {
                writeln!(out, "     {}", d.description)?;
            }
        }
    }

    let failed = summary.failed();
    if !failed.is_empty() {
        writeln!(out, "\n❌ FAILED MODELS:")?;
        for d in failed {
            writeln!(out, "   • {} ({})", d.name, d.id)?;
        }
    }
    Ok(())
}

pub fn write_next_steps(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "🔧 NEXT STEPS:")?;
    writeln!(out, "{}", heavy_rule())?;
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, step)?;
    }
    writeln!(out, "{}\n", heavy_rule())
}
