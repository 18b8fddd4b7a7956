//! Application state and core logic

use crate::state::{reset_form, AppState, FieldKey, FormButton, SubmissionReceipt};
use crate::submission::SubmissionClientTrait;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Window for the second Ctrl+C of a double-tap quit
const QUIT_WINDOW: Duration = Duration::from_millis(800);

/// Result of a submission task, tagged with the form generation it belongs to
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub result: Result<SubmissionReceipt>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint receiving validated registrations
    client: Arc<dyn SubmissionClientTrait>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// In-flight submission task
    pending: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(state: AppState, client: Arc<dyn SubmissionClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            outcome_tx,
            outcome_rx,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the next frame needs to come sooner than the idle poll
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.state.validator.elements().strength_meter.is_animating()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Error dialog swallows everything until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.showing_success() {
            return self.handle_success_key(key);
        }
        self.handle_form_key(key)
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.state.last_ctrl_c {
            Some(last) if now.duration_since(last) < QUIT_WINDOW => self.quit = true,
            _ => {
                self.state.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Handle keys while the form is shown
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.is_buttons_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset()?,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.state.selected_button = self.state.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match self.state.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.reset()?,
            },
            // Enter inside a field submits, like implicit form submission
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.quit = true,
            code => {
                if let Some(field) = self.state.active_field_key() {
                    self.edit_active_field(field, code);
                }
            }
        }
        Ok(())
    }

    fn edit_active_field(&mut self, key: FieldKey, code: KeyCode) {
        let validator = &mut self.state.validator;
        match code {
            KeyCode::Char(c) => validator.edit_field(key, |f| f.push_char(c)),
            KeyCode::Backspace => validator.edit_field(key, |f| f.pop_char()),
            KeyCode::Right => validator.edit_field(key, |f| f.step_forward()),
            KeyCode::Left => validator.edit_field(key, |f| f.step_back()),
            _ => false,
        };
    }

    /// Handle keys on the success panel
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') => self.copy_confirmation_id(),
            KeyCode::Char('r') | KeyCode::Enter => self.reset()?,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Click on the submit control. Dropped while the gate is closed.
    pub fn submit(&mut self) {
        if !self.state.validator.elements().submit_button.enabled {
            tracing::debug!("Submit ignored: required fields missing");
            return;
        }
        let Some(payload) = self.state.validator.submit() else {
            self.status_message = Some("Please fix the highlighted fields".to_string());
            return;
        };

        let generation = self.state.submission_generation;
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            let result = client.submit(payload).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(SubmissionOutcome { generation, result });
        }));
        self.status_message = None;
    }

    /// Reset the form, abandoning any in-flight submission
    pub fn reset(&mut self) -> Result<()> {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::info!("Abandoned in-flight submission");
        }
        self.state.submission_generation += 1;
        reset_form(&mut self.state.validator)?;
        self.state.active_form_field = 0;
        self.state.selected_button = FormButton::default();
        self.status_message = None;
        Ok(())
    }

    /// Apply every submission outcome that has arrived
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait for the next submission outcome and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        if outcome.generation != self.state.submission_generation {
            tracing::warn!(
                "Discarding stale submission outcome (generation {} != {})",
                outcome.generation,
                self.state.submission_generation
            );
            return;
        }
        self.pending = None;

        match outcome.result {
            Ok(receipt) => {
                self.state.validator.complete_submission(receipt);
            }
            Err(err) => {
                self.state.validator.fail_submission();
                self.state.push_error(format!("Registration failed: {err}"));
            }
        }
    }

    fn copy_confirmation_id(&mut self) {
        let Some(receipt) = &self.state.validator.elements().receipt else {
            return;
        };
        let id = receipt.confirmation_id.to_string();
        match copy_to_clipboard(&id) {
            Ok(()) => self.status_message = Some("Confirmation id copied".to_string()),
            Err(err) => self.state.push_error(format!("Failed to copy: {err}")),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
