//! Interactive ranking loop over any line-based input and output

use crate::console::command::{Command, HELP_TEXT};
use crate::error::Result;
use crate::ranking::{render_table, standings, write_csv};
use crate::session::{ActionOutcome, ActionReport, IgnoredReason, RankingSession};
use crate::utils::{display_rating, rating_difference};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Drives a [`RankingSession`] from typed commands
pub struct Console<R, W> {
    session: RankingSession,
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: RankingSession, input: R, output: W, export_path: PathBuf) -> Self {
        Self {
            session,
            input,
            output,
            export_path,
        }
    }

    pub fn session(&self) -> &RankingSession {
        &self.session
    }

    /// Give back the session and output once the loop is done
    pub fn into_parts(self) -> (RankingSession, W) {
        (self.session, self.output)
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "🏈 Ultimate QB Ranker (type 'h' for help)")?;
        self.show_prompt()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed, leaving session {}", self.session.id());
                break;
            }
            if line.trim().is_empty() {
                self.show_prompt()?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }

            self.show_prompt()?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Choose(side) => {
                let report = self.session.choose(side)?;
                self.show_report(&report)
            }
            Command::Skip => {
                let report = self.session.skip();
                self.show_report(&report)
            }
            Command::Undo => {
                let report = self.session.undo();
                self.show_report(&report)
            }
            Command::Reset => {
                let report = self.session.reset();
                self.show_report(&report)
            }
            Command::Table => self.show_table(),
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                self.export(&path)
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP_TEXT)?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn show_report(&mut self, report: &ActionReport) -> Result<()> {
        match &report.outcome {
            ActionOutcome::Decided(change) => writeln!(
                self.output,
                "✔ {} over {} ({:+.1})",
                change.winner_name(),
                change.loser_name(),
                change.points_exchanged()
            )?,
            ActionOutcome::Skipped(pair) => writeln!(self.output, "⏭ Skipped {}", pair)?,
            ActionOutcome::Undone { pair } => writeln!(self.output, "↩ Undid {}", pair)?,
            ActionOutcome::Reset { .. } => writeln!(
                self.output,
                "🔄 All rankings have been reset to {}!",
                display_rating(self.session.initial_rating())
            )?,
            ActionOutcome::Ignored(IgnoredReason::SessionComplete) => writeln!(
                self.output,
                "All matchups are done. Use 'undo' or 'reset'."
            )?,
            ActionOutcome::Ignored(IgnoredReason::NothingToUndo) => {
                writeln!(self.output, "Nothing to undo.")?
            }
        }

        if let Some(message) = report.persist_warning() {
            writeln!(
                self.output,
                "⚠ Ratings could not be saved ({}). Your progress is kept in memory.",
                message
            )?;
        }

        Ok(())
    }

    fn show_prompt(&mut self) -> Result<()> {
        let progress = self.session.progress();
        let filled = (progress.fraction() * PROGRESS_BAR_WIDTH as f64).round() as usize;
        writeln!(
            self.output,
            "\n[{}{}] Matchups completed: {}",
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled.min(PROGRESS_BAR_WIDTH)),
            progress
        )?;

        let Some(pair) = self.session.current_pair().cloned() else {
            writeln!(self.output, "All matchups complete!")?;
            return self.show_table();
        };

        let left = self.session.rating(&pair.left).unwrap_or_default();
        let right = self.session.rating(&pair.right).unwrap_or_default();
        writeln!(self.output, "Who do you prefer?")?;
        writeln!(self.output, "  [1] {} ({})", pair.left, display_rating(left))?;
        writeln!(self.output, "  [2] {} ({})", pair.right, display_rating(right))?;
        if let Some(expected) = self.session.current_expected_score() {
            writeln!(
                self.output,
                "  gap {} points, left expected {:.0}%",
                display_rating(rating_difference(left, right)),
                expected * 100.0
            )?;
        }
        if let Some(last) = self.session.last_decided_pair() {
            writeln!(self.output, "  (u) undo {}", last)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_table(&mut self) -> Result<()> {
        let entries = standings(self.session.ratings());
        write!(self.output, "{}", render_table(&entries))?;
        Ok(())
    }

    fn export(&mut self, path: &Path) -> Result<()> {
        let entries = standings(self.session.ratings());
        match write_csv(&entries, path) {
            Ok(()) => writeln!(self.output, "⬇ Rankings written to {}", path.display())?,
            Err(e) => {
                warn!("Export failed: {}", e);
                writeln!(self.output, "⚠ {}", e)?;
            }
        }
        Ok(())
    }
}
