//! Panels of the full-screen dashboard

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;
use std::collections::VecDeque;

use super::{Phase, Progress};

const LOG_CAPACITY: usize = 200;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Blue))
}

/// Mod name, phase and warning count
pub struct StatusPanel {
    title: String,
    phase: Phase,
    info: String,
    warnings: usize,
}

impl StatusPanel {
    pub fn new(mod_name: &str) -> Self {
        Self {
            title: format!(" {} ", mod_name),
            phase: Phase::Loading,
            info: String::new(),
            warnings: 0,
        }
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn add_warning(&mut self) {
        self.warnings += 1;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = if self.phase == Phase::Complete {
            Color::Green
        } else {
            Color::Cyan
        };
        let phase_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut header = vec![Span::styled(
            format!(" {} {}", self.phase.symbol(), self.phase),
            phase_style,
        )];
        if self.warnings > 0 {
            header.push(Span::styled(
                format!("   {} warning(s)", self.warnings),
                Style::default().fg(Color::Yellow),
            ));
        }

        let lines = vec![
            Line::from(header),
            Line::from(""),
            Line::styled(format!("   {}", self.info), Style::default().fg(Color::Gray)),
        ];

        frame.render_widget(Paragraph::new(lines).block(panel(&self.title)), area);
    }
}

/// Gauge over the category files
#[derive(Default)]
pub struct ProgressPanel {
    progress: Option<Progress>,
}

impl ProgressPanel {
    pub fn set(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }

    pub fn clear(&mut self) {
        self.progress = None;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::Blue));

        let Some(progress) = &self.progress else {
            frame.render_widget(block, area);
            return;
        };

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(progress.ratio())
            .label(format!("{} ({}/{})", progress.step, progress.done, progress.total));

        frame.render_widget(gauge, area);
    }
}

/// Files written into the mod folder so far
#[derive(Default)]
pub struct FilesPanel {
    files: Vec<(String, Option<usize>)>,
}

impl FilesPanel {
    pub fn add(&mut self, file: &str, defs: Option<usize>) {
        self.files.push((file.to_string(), defs));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .files
            .iter()
            .map(|(file, defs)| {
                let mut spans = vec![
                    Span::styled(" ✓ ", Style::default().fg(Color::Green)),
                    Span::raw(file.as_str()),
                ];
                if let Some(n) = defs {
                    spans.push(Span::styled(
                        format!("  {}", n),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        frame.render_widget(List::new(items).block(panel(" Files ")), area);
    }
}

/// Recent activity; warnings stay highlighted
#[derive(Default)]
pub struct LogPanel {
    entries: VecDeque<(String, bool)>,
}

impl LogPanel {
    pub fn add(&mut self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(message.into(), true);
    }

    fn push(&mut self, message: String, warning: bool) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((message, warning));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Borders take two rows
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.entries.len().saturating_sub(visible);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .skip(skip)
            .map(|(message, warning)| {
                if *warning {
                    ListItem::new(format!("! {}", message))
                        .style(Style::default().fg(Color::Yellow))
                } else {
                    ListItem::new(format!("  {}", message)).style(Style::default().fg(Color::Gray))
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(panel(" Activity ")), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_oldest() {
        let mut log = LogPanel::default();
        for i in 0..LOG_CAPACITY + 5 {
            log.add(format!("line {}", i));
        }
        assert_eq!(log.entries.len(), LOG_CAPACITY);
        assert_eq!(log.entries.front().unwrap().0, "line 5");
    }

    #[test]
    fn test_files_keep_write_order() {
        let mut files = FilesPanel::default();
        files.add("About/About.xml", None);
        files.add("Defs/Items.xml", Some(2));
        assert_eq!(files.files[1], ("Defs/Items.xml".to_string(), Some(2)));
    }
}
