//! The form application: wiring between input events, the validation
//! core, the widgets and the persistence mirror.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use signup_lib::{Feedback, FieldId, RegistrationForm, StrengthChecklist, ValidationResult};
use thiserror::Error;

use crate::store::{FormStore, StoreError};
use crate::ui::{EditOutcome, Key, Line, LineEditor, Modifiers, Screen, Span};
use crate::widgets::{Checkbox, FieldGroup, FieldStatus, Snackbar, strength_checklist};

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("no usable data directory")]
    NoDataDir,
}

/// What currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    Submit,
}

/// Tab traversal order: the six fields, then the submit control.
const FOCUS_RING: [FocusTarget; 7] = [
    FocusTarget::Field(FieldId::FullName),
    FocusTarget::Field(FieldId::Email),
    FocusTarget::Field(FieldId::Password),
    FocusTarget::Field(FieldId::ConfirmPassword),
    FocusTarget::Field(FieldId::Phone),
    FocusTarget::Field(FieldId::Terms),
    FocusTarget::Submit,
];

const SUCCESS_MESSAGE: &str = "Registration successful!";

/// The signup form application.
pub struct App {
    form: RegistrationForm,
    checklist: StrengthChecklist,
    editors: HashMap<FieldId, LineEditor>,
    status: HashMap<FieldId, FieldStatus>,
    revealed: HashMap<FieldId, bool>,
    focus: usize,
    store: FormStore,
    snackbar: Snackbar,
    quit: bool,
}

impl App {
    pub fn new(store: FormStore) -> Self {
        let editors = FieldId::ALL
            .into_iter()
            .filter(|f| f.is_text())
            .map(|f| (f, LineEditor::new()))
            .collect();

        Self {
            form: RegistrationForm::new(),
            checklist: StrengthChecklist::new(),
            editors,
            status: HashMap::new(),
            revealed: HashMap::new(),
            focus: 0,
            store,
            snackbar: Snackbar::new(),
            quit: false,
        }
    }

    /// Rehydrate non-secret fields from the store. Secret fields are
    /// never read back regardless of what a stale store might contain.
    pub async fn load(&mut self) {
        for field in FieldId::ALL {
            if field.is_secret() {
                continue;
            }
            if field == FieldId::Terms {
                match self.store.get::<bool>(field.storage_key()).await {
                    Ok(Some(checked)) => self.form.set_terms(checked),
                    Ok(None) => {}
                    Err(e) => log::warn!("failed to rehydrate {field}: {e}"),
                }
            } else {
                match self.store.get::<String>(field.storage_key()).await {
                    Ok(Some(value)) => {
                        if let Some(editor) = self.editors.get_mut(&field) {
                            editor.set_text(&value);
                        }
                        self.form.set_value(field, value);
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("failed to rehydrate {field}: {e}"),
                }
            }
        }
        log::debug!("rehydrated persisted fields");
    }

    /// Main event loop: draw, poll, dispatch. The 100ms tick also hides
    /// the snackbar once its deadline passes.
    pub async fn run(mut self, screen: &mut Screen) -> Result<(), AppError> {
        while !self.quit {
            screen.draw(&self.view())?;
            for event in screen.poll(Duration::from_millis(100))? {
                if let CrosstermEvent::Key(key_event) = event {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_key(key_event.code.into(), key_event.modifiers.into())
                            .await;
                    }
                }
            }
        }
        Ok(())
    }

    /// Dispatch a single key press.
    pub async fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape => {
                self.quit = true;
                return;
            }
            Key::Char('q') if modifiers.ctrl => {
                self.quit = true;
                return;
            }
            Key::Char('s') if modifiers.ctrl => {
                self.submit().await;
                return;
            }
            Key::Char('r') if modifiers.ctrl => {
                if let FocusTarget::Field(field) = self.focused()
                    && field.is_secret()
                {
                    self.toggle_reveal(field);
                }
                return;
            }
            Key::Tab | Key::Down => {
                self.focus = (self.focus + 1) % FOCUS_RING.len();
                return;
            }
            Key::BackTab | Key::Up => {
                self.focus = (self.focus + FOCUS_RING.len() - 1) % FOCUS_RING.len();
                return;
            }
            _ => {}
        }

        match self.focused() {
            FocusTarget::Submit => {
                if key == Key::Enter || key == Key::Char(' ') {
                    self.submit().await;
                }
            }
            FocusTarget::Field(FieldId::Terms) => {
                if key == Key::Enter || key == Key::Char(' ') {
                    self.toggle_terms().await;
                }
            }
            FocusTarget::Field(field) => {
                if key == Key::Enter {
                    // Enter advances to the next field.
                    self.focus = (self.focus + 1) % FOCUS_RING.len();
                    return;
                }
                let outcome = match self.editors.get_mut(&field) {
                    Some(editor) => editor.handle_key(key, modifiers),
                    None => EditOutcome::Ignored,
                };
                if outcome == EditOutcome::Changed {
                    self.on_field_changed(field).await;
                }
            }
        }
    }

    /// A keystroke changed a text field: clear its visible error, re-run
    /// its live rule, drive the checklist, and mirror non-secret values.
    async fn on_field_changed(&mut self, field: FieldId) {
        let value = self
            .editors
            .get(&field)
            .map(|e| e.text().to_string())
            .unwrap_or_default();
        self.form.set_value(field, value.clone());

        // The generic clear-own-error handler fires before the field's
        // rule re-evaluates.
        self.status.remove(&field);
        self.apply_feedback(field);

        if field == FieldId::Password {
            self.checklist.observe(&value);
            // The confirmation tracks the current password value.
            if !self.form.value(FieldId::ConfirmPassword).is_empty() {
                self.status.remove(&FieldId::ConfirmPassword);
                self.apply_feedback(FieldId::ConfirmPassword);
            }
        }

        if !field.is_secret() {
            if let Err(e) = self.store.set(field.storage_key(), &value).await {
                log::warn!("failed to mirror {field}: {e}");
            }
        }
    }

    fn apply_feedback(&mut self, field: FieldId) {
        match self.form.live_feedback(field) {
            Feedback::Valid => {
                self.status.insert(field, FieldStatus::Valid);
            }
            Feedback::Invalid(msg) => {
                self.status.insert(field, FieldStatus::Invalid(msg.to_string()));
            }
            Feedback::None => {
                self.status.remove(&field);
            }
        }
    }

    async fn toggle_terms(&mut self) {
        let checked = !self.form.terms();
        self.form.set_terms(checked);
        self.status.remove(&FieldId::Terms);
        let key = FieldId::Terms.storage_key();
        if let Err(e) = self.store.set(key, &checked).await {
            log::warn!("failed to mirror terms: {e}");
        }
    }

    fn toggle_reveal(&mut self, field: FieldId) {
        let flag = self.revealed.entry(field).or_insert(false);
        *flag = !*flag;
    }

    /// Run the full submit-time rule set. On success: snackbar, wipe the
    /// persisted fields, reset the form. On failure: show every error
    /// and focus the first failing field.
    pub async fn submit(&mut self) {
        self.status.clear();

        match self.form.validate() {
            ValidationResult::Valid => {
                self.snackbar.show(SUCCESS_MESSAGE);
                for field in FieldId::ALL {
                    if field.is_secret() {
                        continue;
                    }
                    if let Err(e) = self.store.delete(field.storage_key()).await {
                        log::warn!("failed to clear persisted {field}: {e}");
                    }
                }
                self.form.reset();
                for editor in self.editors.values_mut() {
                    editor.clear();
                }
                self.checklist.observe("");
                log::debug!("registration accepted; persisted fields cleared");
            }
            ValidationResult::Invalid(errors) => {
                if let Some(first) = errors.first() {
                    self.focus_field(first.field);
                }
                for error in errors {
                    self.status
                        .insert(error.field, FieldStatus::Invalid(error.message));
                }
            }
        }
    }

    pub fn focused(&self) -> FocusTarget {
        FOCUS_RING[self.focus]
    }

    /// Move focus to the given field.
    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(idx) = FOCUS_RING
            .iter()
            .position(|t| *t == FocusTarget::Field(field))
        {
            self.focus = idx;
        }
    }

    pub fn field_value(&self, field: FieldId) -> &str {
        self.form.value(field)
    }

    pub fn terms_checked(&self) -> bool {
        self.form.terms()
    }

    pub fn is_revealed(&self, field: FieldId) -> bool {
        self.revealed.get(&field).copied().unwrap_or(false)
    }

    pub fn field_status(&self, field: FieldId) -> FieldStatus {
        self.status.get(&field).cloned().unwrap_or_default()
    }

    pub fn checklist(&self) -> &StrengthChecklist {
        &self.checklist
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Compose the full frame.
    pub fn view(&self) -> Vec<Line> {
        let mut lines: Vec<Line> = vec![
            vec![Span::raw("  Create account").bold()],
            Vec::new(),
        ];

        for target in FOCUS_RING {
            let focused = self.focused() == target;
            match target {
                FocusTarget::Field(FieldId::Terms) => {
                    let status = self.field_status(FieldId::Terms);
                    lines.extend(
                        Checkbox::new(FieldId::Terms.label(), self.form.terms(), &status)
                            .focused(focused)
                            .render(),
                    );
                }
                FocusTarget::Field(field) => {
                    let status = self.field_status(field);
                    let editor = &self.editors[&field];
                    lines.extend(
                        FieldGroup::new(field.label(), editor.text(), &status)
                            .masked(field.is_secret() && !self.is_revealed(field))
                            .focused(focused)
                            .cursor(editor.cursor())
                            .render(),
                    );
                    if field == FieldId::Password {
                        lines.extend(strength_checklist(self.checklist.requirements()));
                    }
                }
                FocusTarget::Submit => {
                    lines.push(Vec::new());
                    let button = if focused {
                        Span::raw("  › [ Sign up ]").bold()
                    } else {
                        Span::raw("    [ Sign up ]")
                    };
                    lines.push(vec![button]);
                }
            }
        }

        lines.push(Vec::new());
        lines.extend(self.snackbar.render());
        lines.push(Vec::new());
        lines.push(vec![Span::colored(
            "  Tab next · Space toggle · Ctrl+R reveal · Ctrl+S sign up · Ctrl+Q quit",
            crossterm::style::Color::DarkGrey,
        )]);

        lines
    }
}
