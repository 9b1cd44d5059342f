//! Basic Single-Select Example
//!
//! Demonstrates a searchable single-select:
//! - Enter/Space/Down to open, type to filter
//! - Up/Down to navigate, Enter to commit, Escape to close
//! - Mouse clicks on the trigger and dropdown
//! - 'q' (while closed) to quit

use std::fs::File;
use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::LevelFilter;
use pickbox::select::{DismissRouter, SearchSelect, render};
use pickbox::theme::Theme;
use pickbox::{Key, KeyCombo, ScrollDirection, SelectEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use simplelog::{Config, WriteLogger};

fn main() -> io::Result<()> {
    if let Ok(file) = File::create("basic.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let theme = Theme::default();
    let fruit = SearchSelect::with_placeholder("Choose a fruit");
    fruit.set_options(&[
        ("apple", "Apple"),
        ("banana", "Banana"),
        ("cherry", "Cherry"),
        ("date", "Date"),
        ("elderberry", "Elderberry"),
    ]);

    let mut router = DismissRouter::new();
    router.register(&fruit);

    let mut last_change = String::from("(none)");

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let trigger = Rect {
                x: 2,
                y: 2,
                width: area.width.saturating_sub(4).min(40),
                height: 1,
            };

            let header = Paragraph::new(Line::from(vec![
                Span::styled("Fruit: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("type to search, q to quit"),
            ]));
            frame.render_widget(header, Rect { x: 2, y: 0, width: area.width.saturating_sub(2), height: 1 });

            let status = Paragraph::new(Line::from(vec![
                Span::raw("Last change: "),
                Span::styled(last_change.clone(), Style::default().fg(theme.focus_bg)),
            ]));
            frame.render_widget(status, Rect {
                x: 2,
                y: area.height.saturating_sub(1),
                width: area.width.saturating_sub(2),
                height: 1,
            });

            render(frame, trigger, &fruit, true, &theme);
        })?;
        fruit.clear_dirty();

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let combo = KeyCombo::from(&key);
                if combo.key == Key::Char('q') && !fruit.is_open() {
                    return Ok(());
                }
                fruit.on_key(&combo);
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    router.route_click(mouse.column, mouse.row);
                }
                MouseEventKind::Moved => {
                    fruit.on_hover(mouse.column, mouse.row);
                }
                MouseEventKind::ScrollUp => {
                    fruit.on_scroll(ScrollDirection::Up);
                }
                MouseEventKind::ScrollDown => {
                    fruit.on_scroll(ScrollDirection::Down);
                }
                _ => {}
            },
            _ => {}
        }

        for event in fruit.take_events() {
            if let SelectEventKind::Change { value } = event.kind {
                last_change = value;
            }
        }
    }
}
