use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

pub mod chat_window;
pub mod client;
pub mod session;
pub mod skin;

pub use client::AnalyzeClient;
pub use session::ChatSession;
pub use skin::Skin;

/// Application state for the chat TUI.
#[derive(Debug)]
pub struct ChatApp {
    pub skin: Skin,
    pub session: ChatSession,
    pub input: String,
    pub should_quit: bool,
}

impl ChatApp {
    pub fn new(skin: Skin) -> Self {
        Self {
            skin,
            session: ChatSession::new(skin.agent_name()),
            input: String::new(),
            should_quit: false,
        }
    }

    /// Apply a key press. Returns a message when one should be sent.
    fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.session.try_again(),
            KeyCode::Enter => {
                let sent = self.session.submit(&self.input);
                if sent.is_some() {
                    self.input.clear();
                }
                return sent;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        None
    }
}

/// Silences the `log` facade while the alternate screen is up, restoring the
/// previous level on drop.
#[derive(Debug)]
struct QuietLogs {
    previous: log::LevelFilter,
}

impl QuietLogs {
    fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        Self { previous }
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Run the chat TUI against the server at `base_url`.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub async fn run_chat(skin: Skin, base_url: &str) -> Result<()> {
    let client = AnalyzeClient::new(base_url);
    log::info!("Chatting via {}", client.endpoint());

    // Setup terminal; log lines would draw over the raw-mode screen
    let quiet = QuietLogs::new();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, ChatApp::new(skin), &client).await;

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    drop(quiet);

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: ChatApp,
    client: &AnalyzeClient,
) -> Result<()> {
    loop {
        terminal.draw(|frame| chat_window::render(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(message) = app.handle_key(key) {
                        // Show the typing indicator while the request is out
                        terminal.draw(|frame| chat_window::render(frame, &app))?;
                        let outcome = client.analyze(&message).await;
                        app.session.resolve(outcome);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut ChatApp, text: &str) {
        for c in text.chars() {
            assert!(app.handle_key(press(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_enter_sends_typed_message() {
        let mut app = ChatApp::new(Skin::Aqua);
        type_text(&mut app, "I feel lost");
        let sent = app.handle_key(press(KeyCode::Enter));
        assert_eq!(sent.as_deref(), Some("I feel lost"));
        assert!(app.input.is_empty());
        assert!(app.session.is_processing());
    }

    #[test]
    fn test_enter_keeps_input_while_processing() {
        let mut app = ChatApp::new(Skin::Aim);
        type_text(&mut app, "one");
        app.handle_key(press(KeyCode::Enter));
        type_text(&mut app, "two");
        assert!(app.handle_key(press(KeyCode::Enter)).is_none());
        assert_eq!(app.input, "two");
    }

    #[test]
    fn test_quiet_logs_restores_level() {
        log::set_max_level(log::LevelFilter::Info);
        {
            let _quiet = QuietLogs::new();
            assert_eq!(log::max_level(), log::LevelFilter::Off);
        }
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_backspace_and_quit() {
        let mut app = ChatApp::new(Skin::Aqua);
        type_text(&mut app, "ab");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.input, "a");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
