//! Terminal output formatting

use crate::core::{Board, GoalProgress, Metric, Stage, Target};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "> ");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "@ ");
pub static PARTY: Emoji<'_, '_> = Emoji("🎉", "*");

const NOTES_PREVIEW_CHARS: usize = 72;
const GOAL_BAR_WIDTH: usize = 20;

/// Render the whole board, one column per stage
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();

    for stage in Stage::ALL {
        let targets = board.at_stage(stage);
        out.push_str(&format_stage_header(stage, targets.len()));
        out.push('\n');

        if targets.is_empty() {
            out.push_str(&format!("    {}\n", style("(empty stage)").dim()));
        } else {
            for target in targets {
                out.push_str(&format_target_card(target));
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} targets on the board",
        style(board.len()).cyan()
    ));
    out
}

/// Column header: title, count badge, description
pub fn format_stage_header(stage: Stage, count: usize) -> String {
    let title = if stage.is_booked() {
        format!("{} {}", stage.title(), PARTY)
    } else {
        stage.title().to_string()
    };
    format!(
        "{} [{}]  {}",
        style(title).bold(),
        style(count).cyan(),
        style(stage.desc()).dim()
    )
}

/// One card on the board
pub fn format_target_card(target: &Target) -> String {
    let mut card = format!(
        "    {} {} {} — {} [{}]",
        TARGET,
        style(format!("#{}", target.id)).dim(),
        style(&target.name).bold(),
        target.niche,
        style(target.platform).cyan()
    );
    if let Some(notes) = &target.notes {
        card.push_str(&format!(
            "\n       {}",
            style(format!("\"{}\"", truncate(notes, NOTES_PREVIEW_CHARS))).italic().dim()
        ));
    }
    card
}

/// One line in a flat target listing
pub fn format_target_line(target: &Target) -> String {
    format!(
        "  {} {} — {} [{}] at {}",
        style(format!("#{}", target.id)).dim(),
        style(&target.name).bold(),
        target.niche,
        style(target.platform).cyan(),
        style(target.stage).yellow()
    )
}

/// Report the landing stage after an advance/regress
pub fn format_stage_move(name: &str, stage: Stage) -> String {
    if stage.is_booked() {
        format!(
            "{} {} → {} {}",
            CHECK,
            style(name).bold(),
            style(stage).green(),
            PARTY
        )
    } else {
        format!("{} {} → {}", CHECK, style(name).bold(), style(stage).cyan())
    }
}

/// Render all three weekly goal bars
pub fn format_goal_progress(progress: &GoalProgress) -> String {
    [
        format_goal_bar("scouted", progress.scouted),
        format_goal_bar("invited", progress.invites),
        format_goal_bar("booked", progress.booked),
    ]
    .join("\n")
}

/// A single static goal bar, e.g. `[#####---------------] 5/30 scouted`
pub fn format_goal_bar(label: &str, metric: Metric) -> String {
    let filled = (metric.ratio() * GOAL_BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        style("#".repeat(filled)).green(),
        style("-".repeat(GOAL_BAR_WIDTH - filled)).dim()
    );
    let status = if metric.is_met() {
        format!(" {}", CHECK)
    } else {
        String::new()
    };
    format!(
        "  [{}] {}/{} {}{}",
        bar,
        style(metric.current).bold(),
        metric.quota,
        label,
        status
    )
}

/// Truncate free text for card previews
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Platform;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let truncated = truncate("a very long note about a target", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 11);
    }

    #[test]
    fn test_goal_bar_fill() {
        let bar = format_goal_bar("scouted", Metric { current: 15, quota: 30 });
        let stripped = console::strip_ansi_codes(&bar).to_string();
        assert!(stripped.contains("15/30 scouted"));
        assert_eq!(stripped.matches('#').count(), 10);
        assert_eq!(stripped.matches('-').count(), 10);
    }

    #[test]
    fn test_goal_bar_met() {
        let bar = format_goal_bar("booked", Metric { current: 3, quota: 3 });
        let stripped = console::strip_ansi_codes(&bar).to_string();
        assert_eq!(stripped.matches('#').count(), 20);
    }

    #[test]
    fn test_board_render_mentions_every_stage() {
        let board = Board::seeded();
        let rendered = console::strip_ansi_codes(&format_board(&board)).to_string();
        for stage in Stage::ALL {
            assert!(rendered.contains(stage.title()), "missing {}", stage.title());
        }
        assert!(rendered.contains("Dr. Aris Thorne"));
    }

    #[test]
    fn test_target_line_shows_stage() {
        let mut board = Board::new();
        board
            .add("Jane Doe", "Historian", Platform::Twitter, None)
            .unwrap();
        let line =
            console::strip_ansi_codes(&format_target_line(&board.targets()[0])).to_string();
        assert!(line.contains("Jane Doe"));
        assert!(line.contains("Scouted (Backlog)"));
    }
}
