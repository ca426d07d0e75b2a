use indicatif::{ProgressBar, ProgressStyle};

use super::{Phase, Ui};

/// Line-oriented output with an `indicatif` bar per phase
#[derive(Default)]
pub struct ConsoleUi {
    bar: Option<ProgressBar>,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar(&mut self, total: u64) -> &ProgressBar {
        let bar = self.bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{msg:30} [{bar:40.cyan/blue}] {pos}/{len}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            pb
        });
        bar.set_length(total);
        bar
    }

    fn println(&self, line: String) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        self.clear_progress();
        println!("\n{}...", phase);
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.println(format!("  {}", info.into()));
    }

    fn set_progress(&mut self, done: u64, total: u64, step: impl Into<String>) {
        let bar = self.bar(total);
        bar.set_position(done);
        bar.set_message(step.into());
    }

    fn clear_progress(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        self.println(format!("  {}", message.into()));
    }
}
