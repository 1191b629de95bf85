//! Display functions for statistics

use super::formatters::distribution_bar;
use crate::stats::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Write the statistics panel: totals, streaks and the guess distribution
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_statistics<W: Write + ?Sized>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(46).cyan())?;
    writeln!(out, " {} ", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(46).cyan())?;

    writeln!(out, "\n  Played   Win %   Current  Max")?;
    writeln!(out, "                   Streak   Streak")?;
    writeln!(
        out,
        "{}",
        format!(
            "  {:<8} {:<7} {:<8} {}",
            stats.games_played,
            format!("{}%", stats.win_percent),
            stats.current_streak,
            stats.max_streak
        )
        .magenta()
    )?;

    writeln!(out, "\n📈 {}", "Guess Distribution:".bright_cyan().bold())?;
    let largest = stats.max_distribution();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = distribution_bar(count, largest, 30);
        writeln!(out, "   {}: {} {count:4}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the statistics panel to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_statistics(stats: &Statistics) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_statistics(&mut out, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;
    use crate::stats::StatisticsTracker;

    #[test]
    fn statistics_panel_lists_every_bucket() {
        colored::control::set_override(false);

        let mut tracker = StatisticsTracker::default();
        tracker.record(SessionState::Won, 3).unwrap();
        tracker.record(SessionState::Won, 3).unwrap();
        tracker.record(SessionState::Lost, 6).unwrap();

        let mut out = Vec::new();
        write_statistics(&mut out, &tracker.stats()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("STATISTICS"));
        assert!(text.contains("66%"));
        for n in 1..=6 {
            assert!(text.contains(&format!("   {n}: ")));
        }
        assert!(text.contains(&format!("   3: {}    2", "█".repeat(30))));
    }
}
