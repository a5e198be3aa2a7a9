use anyhow::Result;
use blockflow_engine::{
    DrawnLine, Language, PaletteColor, RenderConfig, build_canvas, render::draw,
};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;

const MIN_INDENT: usize = 1;
const MAX_INDENT: usize = 16;

/// Scrollable view of one rendered file.
///
/// Zooming changes the indent unit and lays the canvas out again; the
/// terminal's font size is out of reach.
pub struct Viewer {
    title: String,
    source: String,
    language: Language,
    config: RenderConfig,
    lines: Vec<DrawnLine>,
    scroll: u16,
}

impl Viewer {
    pub fn new(title: String, source: String, language: Language, config: RenderConfig) -> Self {
        let mut viewer = Self {
            title,
            source,
            language,
            config,
            lines: Vec::new(),
            scroll: 0,
        };
        viewer.relayout();
        viewer
    }

    fn relayout(&mut self) {
        let canvas = build_canvas(&self.source, self.language, &self.config);
        self.lines = draw(&canvas, &self.config);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn indent_unit(&self) -> usize {
        self.config.indent_unit
    }

    pub fn zoom_in(&mut self) {
        self.config.indent_unit = (self.config.indent_unit + 1).min(MAX_INDENT);
        self.relayout();
    }

    pub fn zoom_out(&mut self) {
        self.config.indent_unit = self.config.indent_unit.saturating_sub(1).max(MIN_INDENT);
        self.relayout();
    }

    pub fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    /// Drawn lines as styled terminal lines.
    pub fn styled_lines(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .map(|line| match line {
                DrawnLine::Title(title) => Line::from(Span::styled(
                    format!("{title}:"),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                DrawnLine::Blank => Line::default(),
                DrawnLine::Boxed {
                    offset,
                    color,
                    text,
                    suffix,
                } => {
                    let mut spans = vec![
                        Span::raw(" ".repeat(*offset)),
                        Span::styled(text.clone(), style_for(*color)),
                    ];
                    if let Some(suffix) = suffix {
                        spans.push(Span::styled(
                            suffix.clone(),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    Line::from(spans)
                }
            })
            .collect()
    }
}

/// Terminal style for a palette entry.
pub fn style_for(color: PaletteColor) -> Style {
    let style = Style::default();
    match color {
        PaletteColor::BrightBlue => style.fg(Color::LightBlue),
        PaletteColor::BrightGreen => style.fg(Color::LightGreen),
        PaletteColor::BrightYellow => style.fg(Color::LightYellow),
        PaletteColor::BrightRed => style.fg(Color::LightRed),
        PaletteColor::BrightMagenta => style.fg(Color::LightMagenta),
        PaletteColor::BrightCyan => style.fg(Color::LightCyan),
        PaletteColor::Yellow => style.fg(Color::Yellow),
        PaletteColor::Cyan => style.fg(Color::Cyan),
        PaletteColor::LightGray => style.fg(Color::Gray),
        PaletteColor::DarkGray => style.fg(Color::DarkGray),
        PaletteColor::RedBackground => style.bg(Color::Red).fg(Color::White),
        PaletteColor::GreenBackground => style.bg(Color::Green).fg(Color::White),
        PaletteColor::YellowBackground => style.bg(Color::Yellow).fg(Color::Black),
        PaletteColor::BlueBackground => style.bg(Color::Blue).fg(Color::White),
    }
}

pub fn run(mut viewer: Viewer) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut viewer);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    viewer: &mut Viewer,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_down(20),
                KeyCode::PageUp => viewer.scroll_up(20),
                KeyCode::Char('+') | KeyCode::Char('=') => viewer.zoom_in(),
                KeyCode::Char('-') => viewer.zoom_out(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(viewer.styled_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", viewer.title, viewer.language)),
        )
        .scroll((viewer.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw(format!("+/-: Zoom (indent {})", viewer.indent_unit())),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn viewer(src: &str) -> Viewer {
        Viewer::new(
            "t.py".into(),
            src.into(),
            Language::IndentationDelimited,
            RenderConfig::default(),
        )
    }

    fn offsets(viewer: &Viewer) -> Vec<usize> {
        viewer
            .lines
            .iter()
            .filter_map(|l| match l {
                DrawnLine::Boxed { offset, .. } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn zoom_relays_out_offsets() {
        let mut v = viewer("if a:\n    b()\n");
        assert_eq!(offsets(&v), vec![0, 0, 0, 4, 4, 4]);
        v.zoom_in();
        assert_eq!(v.indent_unit(), 5);
        assert_eq!(offsets(&v), vec![0, 0, 0, 5, 5, 5]);
    }

    #[test]
    fn zoom_out_stops_at_minimum() {
        let mut v = viewer("x = 1\n");
        for _ in 0..10 {
            v.zoom_out();
        }
        assert_eq!(v.indent_unit(), MIN_INDENT);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut v = viewer("x = 1\n");
        v.scroll_down(100);
        assert_eq!(v.scroll, 2);
        v.scroll_up(100);
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn styled_lines_keep_offsets() {
        let v = viewer("if a:\n    b()\n");
        let lines = v.styled_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3].spans[0].content, "    ");
        assert_eq!(lines[3].spans[1].style, style_for(PaletteColor::BrightGreen));
    }

    #[test]
    fn background_colors_set_background() {
        assert_eq!(style_for(PaletteColor::BlueBackground).bg, Some(Color::Blue));
        assert_eq!(style_for(PaletteColor::Cyan).bg, None);
    }
}
