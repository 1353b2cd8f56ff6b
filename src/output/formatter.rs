use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::ingest::BuildReport;
use crate::scoring::{Contribution, Difficulty, DistanceProfile, WordRecord};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn color_difficulty(difficulty: Difficulty, use_colors: bool) -> String {
    let label = difficulty.label();
    if !use_colors {
        return label.to_string();
    }
    match difficulty {
        Difficulty::Easy => label.green().to_string(),
        Difficulty::Medium => label.yellow().to_string(),
        Difficulty::Hard => label.red().to_string(),
    }
}

/// Multi-line view of one scored word, with the weighted breakdown.
pub fn format_profile(
    record: &WordRecord,
    profile: &DistanceProfile,
    contributions: &[Contribution],
    use_colors: bool,
) -> String {
    let headword = if use_colors {
        record.surface_form.bold().to_string()
    } else {
        record.surface_form.clone()
    };

    let mut lines = vec![
        format!("{} -> {}", headword, record.translations.join(", ")),
        format!("  Level: {}", record.level),
    ];
    for c in contributions {
        lines.push(format!(
            "  {:<14} {:.2}  x{:.1} = {:.3}",
            format!("{}:", c.label),
            c.distance,
            c.weight,
            c.weighted
        ));
    }
    lines.push(format!(
        "  Total:         {:.2}  ({})",
        profile.total_distance,
        color_difficulty(profile.difficulty, use_colors)
    ));
    lines.join("\n")
}

/// Summary printed after a dataset build.
pub fn format_build_summary(report: &BuildReport, use_colors: bool) -> String {
    let mut lines = vec![format!("Entries: {}", report.entries.len())];
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        lines.push(format!(
            "  {:<8} {}",
            color_difficulty(difficulty, use_colors),
            report.count(difficulty)
        ));
    }
    if report.duplicates > 0 {
        lines.push(format!("Duplicates skipped: {}", report.duplicates));
    }
    if !report.rejected.is_empty() {
        lines.push(format!("Rejected: {}", report.rejected.len()));
        for rejection in &report.rejected {
            lines.push(format!("  {} ({}): {}", rejection.word, rejection.source, rejection.error));
        }
    }
    lines.join("\n")
}
