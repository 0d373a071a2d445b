//! TUI application state and logic

use crate::core::{AnnotationMode, CODE_LENGTH, Digit, DigitStatus, Verdict};
use crate::engine::{GuessUpdate, PuzzleEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

/// Application state
///
/// The engine is the only holder of puzzle state; everything else here is
/// screen state.
pub struct App {
    pub engine: PuzzleEngine,
    pub input_mode: InputMode,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Digit keys toggle marks on the digit pad
    Annotate,
    /// Typed characters fill the guess slot under the cursor
    Guess,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: PuzzleEngine) -> Self {
        Self {
            engine,
            input_mode: InputMode::Annotate,
            cursor: 0,
            messages: vec![
                Message {
                    text: "Welcome! Work out the passcode from the clues.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press 1-9 to mark digits, TAB to enter your answer".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn set_mode(&mut self, mode: AnnotationMode) {
        if self.engine.annotation_mode() != mode {
            self.engine.set_annotation_mode(mode);
            self.add_message(&format!("Mode: {mode}"), MessageStyle::Info);
        }
    }

    pub fn toggle_digit(&mut self, digit: Digit) {
        let text = match self.engine.toggle_annotation(digit) {
            None => format!("{digit} unmarked"),
            Some(DigitStatus::Excluded) => format!("{digit} ruled out"),
            Some(DigitStatus::PossiblyCorrect) => format!("{digit} may be in the passcode"),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    /// Write `raw` into the slot under the cursor
    pub fn enter_guess(&mut self, raw: &str) {
        let was_solved = self.engine.is_solved();

        match self.engine.set_guess_digit(self.cursor, raw) {
            GuessUpdate::Evaluated(Verdict::Wrong) => {
                self.add_message(
                    &format!("Slot {} is wrong", self.cursor + 1),
                    MessageStyle::Error,
                );
                self.move_cursor_right();
            }
            GuessUpdate::Evaluated(_) => self.move_cursor_right(),
            GuessUpdate::Cleared | GuessUpdate::Rejected => {}
        }

        if self.engine.is_solved() && !was_solved {
            self.add_message(
                "🎉 Congratulations! You cracked the passcode! 🎉",
                MessageStyle::Success,
            );
        }
    }

    pub fn clear_slot(&mut self) {
        self.enter_guess("");
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Annotate => match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('x') => self.set_mode(AnnotationMode::Exclude),
                KeyCode::Char('o') => self.set_mode(AnnotationMode::MarkCorrect),
                KeyCode::Char(c) => {
                    if let Some(digit) = c
                        .to_digit(10)
                        .and_then(|v| Digit::new(v as u8).ok())
                    {
                        self.toggle_digit(digit);
                    }
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Guess;
                }
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Tab | KeyCode::Esc => {
                    self.input_mode = InputMode::Annotate;
                }
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                KeyCode::Backspace => {
                    if self.engine.slot(self.cursor).is_empty() {
                        self.move_cursor_left();
                    }
                    self.clear_slot();
                }
                KeyCode::Delete => self.clear_slot(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.enter_guess(&c.to_string());
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored on every exit path before any error is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let res = run_app(&mut terminal, app);
            finish(res, restore_terminal(&mut terminal))
        }
        Err(err) => finish(Err(err.into()), restore_without_terminal()),
    }
}

/// Undo raw mode, the alternate screen and mouse capture, attempting every step
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

fn restore_without_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    raw?;
    screen?;
    Ok(())
}

/// Combine the event loop result with the cleanup result
///
/// A loop failure wins; a cleanup failure is attached to it as context.
fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Ok(()), restore) => restore,
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore_err)) => {
            Err(err.context(format!("terminal restore also failed: {restore_err}")))
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
