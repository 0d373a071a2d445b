//! TUI rendering with ratatui
//!
//! Draws the clue sheet, digit pad and answer row for the trainer.

use super::app::{App, InputMode, MessageStyle};
use crate::commands::INSTRUCTIONS;
use crate::core::{Digit, DigitStatus, Verdict};
use crate::output::formatters::{mode_label, status_symbol, verdict_symbol};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Clues
            Constraint::Percentage(40), // Pad and messages
        ])
        .split(chunks[1]);

    render_clues(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 PASSCODE TRAINER - Crack the three-digit code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn digit_span(digit: Digit, status: Option<DigitStatus>) -> Span<'static> {
    let style = match status {
        None => Style::default().fg(Color::White),
        Some(DigitStatus::Excluded) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        Some(DigitStatus::PossiblyCorrect) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {digit}{} ", status_symbol(status)), style)
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for clue in app.engine.clues() {
        let mut spans: Vec<Span> = clue
            .numbers()
            .iter()
            .map(|&d| digit_span(d, app.engine.status(d)))
            .collect();
        spans.push(Span::raw("  "));
        spans.push(Span::raw(clue.hint().to_string()));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "How to play:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for text in INSTRUCTIONS {
        lines.push(Line::from(format!("  • {text}")));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Known Clues ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Digit pad
            Constraint::Length(5),      // Answer row
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_digit_pad(f, app, chunks[0]);
    render_answer(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_digit_pad(f: &mut Frame, app: &App, area: Rect) {
    let pad: Vec<Span> = app
        .engine
        .annotations()
        .iter()
        .map(|(d, status)| digit_span(d, status))
        .collect();

    let border = if app.input_mode == InputMode::Annotate {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let content = vec![
        Line::from(pad),
        Line::from(format!("Mode: {}", mode_label(app.engine.annotation_mode()))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Digits ")
            .borders(Borders::ALL)
            .style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (position, (slot, verdict)) in app
        .engine
        .guess()
        .slots()
        .iter()
        .zip(app.engine.verdicts())
        .enumerate()
    {
        let mut style = match verdict {
            Verdict::Unset => Style::default().fg(Color::White),
            Verdict::Correct => Style::default().fg(Color::Green),
            Verdict::Wrong => Style::default().fg(Color::Red),
        };
        if app.input_mode == InputMode::Guess && position == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!("[ {slot} ]{} ", verdict_symbol(verdict)),
            style,
        ));
    }

    let border = if app.input_mode == InputMode::Guess {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your Answer ")
                .borders(Borders::ALL)
                .style(Style::default().fg(border)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.engine.is_solved() {
        (
            " 🎉 CONGRATULATIONS! 🎉 ",
            "You cracked the passcode!",
            Color::Green,
        )
    } else {
        match app.input_mode {
            InputMode::Annotate => (
                " Marking Digits | x: exclude  o: mark correct  TAB: answer ",
                "Press 1-9 to toggle a mark",
                Color::Yellow,
            ),
            InputMode::Guess => (
                " Entering Answer | ←/→: move  Backspace: clear  TAB/ESC: marks ",
                "Type a digit into the highlighted slot",
                Color::Cyan,
            ),
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.engine.annotation_mode()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let marks = app.engine.annotations();
    let marks_text = format!(
        "Excluded: {} | Possible: {}",
        marks.count(DigitStatus::Excluded),
        marks.count(DigitStatus::PossiblyCorrect)
    );
    f.render_widget(
        Paragraph::new(marks_text).alignment(Alignment::Center),
        chunks[1],
    );

    let correct_text = format!("Correct: {}/3", app.engine.correct_count());
    f.render_widget(
        Paragraph::new(correct_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::Annotate => "q: Quit | TAB: Answer",
        InputMode::Guess => "Ctrl-C: Quit | TAB: Marks",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
