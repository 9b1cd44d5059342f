//! Multi-Select Tags Example
//!
//! Demonstrates multi-select with removable tags:
//! - Picks toggle on Enter or click; the dropdown stays open
//! - Selected values render as tags; clicking a tag's × removes it
//! - Two widgets share one DismissRouter, so opening one closes the other
//! - 'q' (while both are closed) to quit

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
use pickbox::{Key, KeyCombo, SelectEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use simplelog::{Config, WriteLogger};

fn main() -> io::Result<()> {
    if let Ok(file) = File::create("tags.log") {
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

    let subjects = SearchSelect::multiple();
    subjects.set_placeholder("Assign subjects");
    subjects.set_options(&[
        ("math", "Mathematics"),
        ("phys", "Physics"),
        ("chem", "Chemistry"),
        ("bio", "Biology"),
        ("hist", "History"),
        ("lit", "Literature"),
    ]);

    let teacher = SearchSelect::with_placeholder("Assign a teacher");
    teacher.set_options(&[
        ("t1", "Alice Martin"),
        ("t2", "Bob Chen"),
        ("t3", "Carla Ruiz"),
    ]);
    teacher.set_value("t2");

    let mut router = DismissRouter::new();
    router.register(&subjects);
    router.register(&teacher);

    // Keyboard goes to whichever widget is open, else the subjects widget
    let focused = |subjects: &SearchSelect, teacher: &SearchSelect| -> SearchSelect {
        if teacher.is_open() {
            teacher.clone()
        } else {
            subjects.clone()
        }
    };

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let width = area.width.saturating_sub(4).min(50);

            for (text, y) in [("Subjects (multi):", 1), ("Teacher (single):", 13)] {
                let label = Paragraph::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(theme.muted),
                )));
                frame.render_widget(label, Rect { x: 2, y, width, height: 1 });
            }

            let subjects_area = Rect { x: 2, y: 2, width, height: 1 };
            let teacher_area = Rect { x: 2, y: 14, width, height: 1 };

            // Draw the closed widget first so an open dropdown overlays it
            if subjects.is_open() {
                render(frame, teacher_area, &teacher, false, &theme);
                render(frame, subjects_area, &subjects, true, &theme);
            } else {
                render(frame, subjects_area, &subjects, !teacher.is_open(), &theme);
                render(frame, teacher_area, &teacher, teacher.is_open(), &theme);
            }

            let status = format!(
                "subjects={} teacher={}",
                subjects.value(),
                teacher.value()
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::raw(status))),
                Rect {
                    x: 2,
                    y: area.height.saturating_sub(1),
                    width: area.width.saturating_sub(2),
                    height: 1,
                },
            );
        })?;
        subjects.clear_dirty();
        teacher.clear_dirty();

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let combo = KeyCombo::from(&key);
                if combo.key == Key::Char('q') && !subjects.is_open() && !teacher.is_open() {
                    return Ok(());
                }
                focused(&subjects, &teacher).on_key(&combo);
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    router.route_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        for select in [&subjects, &teacher] {
            for event in select.take_events() {
                if let SelectEventKind::Change { value } = event.kind {
                    log::info!("{}: changed to {value}", event.widget_id);
                }
            }
        }
    }
}
