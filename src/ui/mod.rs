//! Progress reporting for mod generation
//!
//! The writer reports through [`Ui`]: the phase it is in, a gauge for the
//! category files, every file it writes and warnings for assets it could not
//! copy. Three front ends implement it: [`ConsoleUi`] (plain lines plus an
//! `indicatif` bar), [`UiApp`] (full-screen `ratatui` dashboard) and
//! [`SilentUi`] for tests.

mod components;
mod console;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::fmt;
use std::io::{self, Stdout};
use std::time::Duration;

use components::{FilesPanel, LogPanel, ProgressPanel, StatusPanel};

pub use console::ConsoleUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Generating,
    CopyingAssets,
    Complete,
}

impl Phase {
    fn symbol(self) -> &'static str {
        match self {
            Phase::Loading => "◐",
            Phase::Generating => "⚙",
            Phase::CopyingAssets => "⤷",
            Phase::Complete => "✓",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Loading => "Loading project",
            Phase::Generating => "Generating defs",
            Phase::CopyingAssets => "Copying assets",
            Phase::Complete => "Complete",
        })
    }
}

/// Position of the gauge: `done` of `total` steps, named after the current step
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub done: u64,
    pub total: u64,
    pub step: String,
}

impl Progress {
    pub fn new(done: u64, total: u64, step: impl Into<String>) -> Self {
        Self {
            done,
            total,
            step: step.into(),
        }
    }

    pub fn ratio(&self) -> f64 {
        match self.total {
            0 => 0.0,
            total => (self.done as f64 / total as f64).min(1.0),
        }
    }
}

/// Sink for everything a generation run reports
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_info(&mut self, info: impl Into<String>);
    fn set_progress(&mut self, done: u64, total: u64, step: impl Into<String>);
    fn clear_progress(&mut self);
    fn log(&mut self, message: impl Into<String>);

    /// A file of the mod folder was written; `defs` counts its top-level entries
    fn wrote(&mut self, file: &str, defs: Option<usize>) {
        match defs {
            Some(n) => self.log(format!("Wrote {} ({} entries)", file, n)),
            None => self.log(format!("Wrote {}", file)),
        }
    }

    /// Non-fatal problem the user should see after the run
    fn warn(&mut self, message: impl Into<String>) {
        self.log(format!("warning: {}", message.into()));
    }
}

/// Full-screen dashboard, opted into with `--tui`
pub struct UiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    status: StatusPanel,
    progress: ProgressPanel,
    files: FilesPanel,
    log: LogPanel,
}

impl UiApp {
    /// Enter the alternate screen and show the dashboard for `mod_name`
    pub fn new(mod_name: &str) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut app = Self {
            terminal,
            status: StatusPanel::new(mod_name),
            progress: ProgressPanel::default(),
            files: FilesPanel::default(),
            log: LogPanel::default(),
        };
        app.draw()?;
        Ok(app)
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            status,
            progress,
            files,
            log,
        } = self;

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Length(3),
                    Constraint::Min(6),
                ])
                .split(frame.area());
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(rows[2]);

            status.render(frame, rows[0]);
            progress.render(frame, rows[1]);
            files.render(frame, columns[0]);
            log.render(frame, columns[1]);
        })?;

        Ok(())
    }

    /// Show the run summary and keep the dashboard up until a key is pressed
    pub fn finish(mut self, summary: &str) -> Result<()> {
        self.set_phase(Phase::Complete);
        self.progress.clear();
        self.status.set_info(summary);
        self.log.add("Press any key to exit...");
        self.draw()?;

        loop {
            if event::poll(Duration::from_millis(100))? {
                if let CrosstermEvent::Key(_) = event::read()? {
                    break;
                }
            }
        }

        self.restore()
    }

    /// Leave the alternate screen right away, e.g. when generation failed
    pub fn restore(mut self) -> Result<()> {
        leave_screen(&mut self.terminal)?;
        Ok(())
    }
}

fn leave_screen(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

impl Ui for UiApp {
    fn set_phase(&mut self, phase: Phase) {
        self.status.set_phase(phase);
        self.draw().ok();
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.status.set_info(info);
        self.draw().ok();
    }

    fn set_progress(&mut self, done: u64, total: u64, step: impl Into<String>) {
        self.progress.set(Progress::new(done, total, step));
        self.draw().ok();
    }

    fn clear_progress(&mut self) {
        self.progress.clear();
        self.draw().ok();
    }

    fn log(&mut self, message: impl Into<String>) {
        self.log.add(message);
        self.draw().ok();
    }

    fn wrote(&mut self, file: &str, defs: Option<usize>) {
        self.files.add(file, defs);
        self.draw().ok();
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.status.add_warning();
        self.log.add_warning(message);
        self.draw().ok();
    }
}

impl Drop for UiApp {
    fn drop(&mut self) {
        leave_screen(&mut self.terminal).ok();
    }
}

/// Records what it is told so tests can inspect a run
#[derive(Debug, Default)]
pub struct SilentUi {
    pub phases: Vec<Phase>,
    pub files: Vec<String>,
    pub warnings: Vec<String>,
}

impl SilentUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }
    fn set_info(&mut self, _info: impl Into<String>) {}
    fn set_progress(&mut self, _done: u64, _total: u64, _step: impl Into<String>) {}
    fn clear_progress(&mut self) {}
    fn log(&mut self, _message: impl Into<String>) {}
    fn wrote(&mut self, file: &str, _defs: Option<usize>) {
        self.files.push(file.to_string());
    }
    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(Progress::new(1, 4, "Items.xml").ratio(), 0.25);
        assert_eq!(Progress::new(3, 0, "empty").ratio(), 0.0);
        assert_eq!(Progress::new(5, 4, "overshoot").ratio(), 1.0);
    }

    #[test]
    fn test_silent_ui_records_run() {
        let mut ui = SilentUi::new();
        ui.set_phase(Phase::Generating);
        ui.wrote("Defs/Items.xml", Some(3));
        ui.set_phase(Phase::CopyingAssets);
        ui.warn("texture missing");
        assert_eq!(ui.phases, [Phase::Generating, Phase::CopyingAssets]);
        assert_eq!(ui.files, ["Defs/Items.xml"]);
        assert_eq!(ui.warnings, ["texture missing"]);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::CopyingAssets.to_string(), "Copying assets");
        assert_eq!(Phase::Complete.symbol(), "✓");
    }
}
