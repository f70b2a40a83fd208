// src/desktop/terminal.rs
//! Terminal host for the desktop shell: the "window" is stdout and the two
//! text boxes are edited in `$EDITOR` through dialoguer.

use std::sync::mpsc::{Receiver, Sender};

use dialoguer::{Confirm, Editor, theme::ColorfulTheme};

use super::{DesktopView, SAMPLE_CODE, SAMPLE_TRACEBACK, StatusTone, UiEvent};
use crate::errors::Result;

/// Prints widget updates and tells the input thread when it may prompt again.
pub struct TerminalView {
    ready: Sender<()>,
}

impl TerminalView {
    pub fn new(ready: Sender<()>) -> Self {
        Self { ready }
    }

    fn release_input(&self) {
        let _ = self.ready.send(());
    }
}

impl DesktopView for TerminalView {
    fn set_action(&mut self, enabled: bool, label: &str) {
        if enabled {
            println!("[ {} ]", label);
        } else {
            println!("[ {} ] (disabled)", label);
        }
    }

    /// The status line is the last widget touched after every transition,
    /// so any settled status hands the terminal back to the input thread.
    fn set_status(&mut self, text: &str, tone: StatusTone) {
        let marker = match tone {
            StatusTone::Neutral => "ℹ️ ",
            StatusTone::Busy => "⏳",
            StatusTone::Success => "✅",
            StatusTone::Error => "❌",
        };
        println!("{} {}", marker, text);
        if tone != StatusTone::Busy {
            self.release_input();
        }
    }

    fn set_output(&mut self, text: &str) {
        let separator = "=".repeat(60);
        println!("\n3. Debugging Report (Root Cause & Fix):");
        println!("{}\n{}\n{}\n", separator, text, separator);
    }

    fn show_input_error(&mut self, title: &str, message: &str) {
        eprintln!("⚠️  {}: {}", title, message);
        self.release_input();
    }
}

/// Sends `Close` to the UI thread when dropped, including during a panic.
pub struct CloseOnDrop(pub Sender<UiEvent>);

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        let _ = self.0.send(UiEvent::Close);
    }
}

/// Collects code and traceback until the user declines to continue.
///
/// Runs on its own thread; the shell's UI thread keeps draining `events`.
/// `ready` fires once when the shell starts and again after each submit has
/// been handled. The UI loop is told to close whenever this returns or unwinds.
pub fn input_loop(events: Sender<UiEvent>, ready: Receiver<()>) -> Result<()> {
    let _close = CloseOnDrop(events.clone());
    let theme = ColorfulTheme::default();
    let mut code = SAMPLE_CODE.to_string();
    let mut traceback = SAMPLE_TRACEBACK.to_string();

    while ready.recv().is_ok() {
        if !Confirm::with_theme(&theme)
            .with_prompt("Edit the source code and traceback, then analyze?")
            .default(true)
            .interact()?
        {
            break;
        }

        println!("1. Source Code: opening editor...");
        edit_in_place(&mut code)?;

        println!("2. Error Traceback: opening editor...");
        edit_in_place(&mut traceback)?;

        let submitted = UiEvent::Submit {
            code: code.clone(),
            traceback: traceback.clone(),
        };
        if events.send(submitted).is_err() {
            break;
        }
    }

    Ok(())
}

/// Opens `$EDITOR` on `text`. Quitting without saving keeps the text as it was.
fn edit_in_place(text: &mut String) -> Result<()> {
    let edited = Editor::new().extension(".txt").require_save(false).edit(text.as_str())?;
    apply_edit(text, edited);
    Ok(())
}

fn apply_edit(text: &mut String, edited: Option<String>) {
    if let Some(edited) = edited {
        *text = edited;
    }
}
