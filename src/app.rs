//! Application state and core logic

use crate::api::{ApiGateway, LoginPayload, MutationOutcome};
use crate::session::{SessionStore, AUTH_TOKEN_KEY};
use crate::state::{AppState, CreateAccountForm, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Message shown for transport-level failures; the real cause goes to the log
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
/// One-shot notification after a successful account creation
const ACCOUNT_CREATED_MESSAGE: &str = "Account Created! Log in now!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway to the remote GraphQL API
    pub api: Box<dyn ApiGateway>,
    /// Session token persistence
    pub session: Box<dyn SessionStore>,
    /// One-shot status message, cleared on the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance. A stored session token selects the
    /// authenticated start view.
    pub async fn new(api: Box<dyn ApiGateway>, session: Box<dyn SessionStore>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            api,
            session,
            status_message: None,
        };

        if app.session.get(AUTH_TOKEN_KEY).is_some() {
            app.state.current_view = View::Podcasts;
            app.load_podcasts().await;
        }

        app
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Navigate to a view, remembering where we came from
    fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.reset_selection();
    }

    /// Return to the previous view
    fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
            self.state.reset_selection();
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Status messages are one-shot: any further input clears them
        self.status_message = None;

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await?,
            View::CreateAccount => self.handle_create_account_key(key).await?,
            View::Podcasts => self.handle_podcasts_key(key).await?,
            View::Episodes => self.handle_episodes_key(key),
        }
        Ok(())
    }

    /// Handle keys in the Login view
    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.state.login_form.focus_next(),
            KeyCode::BackTab => self.state.login_form.focus_prev(),
            KeyCode::Enter => self.submit_login().await,
            // Ctrl+N: switch to account creation
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::CreateAccount);
            }
            // Ctrl+U: clear the active field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.login_form.clear_active();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.login_form.input_char(c);
            }
            KeyCode::Backspace => self.state.login_form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Create Account view
    async fn handle_create_account_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.state.create_account_form.focus_next(),
            KeyCode::BackTab => self.state.create_account_form.focus_prev(),
            KeyCode::Enter => self.submit_create_account().await,
            KeyCode::Left | KeyCode::Right => self.state.create_account_form.cycle_role(),
            KeyCode::Esc => self.go_back(),
            // Ctrl+U: clear the active field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.create_account_form.clear_active();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.create_account_form.input_char(c);
            }
            KeyCode::Backspace => self.state.create_account_form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Podcasts view
    async fn handle_podcasts_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.state.podcasts.len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => self.open_selected_podcast().await,
            KeyCode::Char('r') => self.load_podcasts().await,
            KeyCode::Char('x') => self.sign_out(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Episodes view
    fn handle_episodes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.state.episodes.len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Run the login mutation for the current form state.
    ///
    /// `begin_submit` validates, latches the submitting state, and captures
    /// the input snapshot; the latch is released on every outcome so a
    /// failed attempt can be retried.
    pub async fn submit_login(&mut self) {
        let Some(input) = self.state.login_form.begin_submit() else {
            return;
        };
        let outcome = self.api.login(input).await;
        self.state.login_form.finish_submit();

        if self.handle_login_outcome(outcome) {
            self.load_podcasts().await;
        }
    }

    /// Login outcome policy: persist the token and enter the catalog on
    /// success; otherwise surface the failure on the form. Returns whether
    /// the login succeeded.
    fn handle_login_outcome(&mut self, outcome: MutationOutcome<LoginPayload>) -> bool {
        match outcome {
            MutationOutcome::Success(LoginPayload { token }) => {
                if let Err(e) = self.session.set(AUTH_TOKEN_KEY, &token) {
                    self.push_error(format!("Failed to persist session: {e}"));
                }
                self.state.view_history.clear();
                self.state.current_view = View::Podcasts;
                self.state.reset_selection();
                true
            }
            MutationOutcome::ApplicationError(message) => {
                self.state.login_form.set_form_error(message);
                false
            }
            MutationOutcome::TransportError(e) => {
                tracing::warn!("login request failed: {e:#}");
                self.state.login_form.set_form_error(GENERIC_FAILURE);
                false
            }
        }
    }

    /// Run the create-account mutation for the current form state
    pub async fn submit_create_account(&mut self) {
        let Some(input) = self.state.create_account_form.begin_submit() else {
            return;
        };
        let outcome = self.api.create_account(input).await;
        self.state.create_account_form.finish_submit();
        self.handle_create_account_outcome(outcome);
    }

    /// Create-account outcome policy: notify and return to Login on
    /// success; otherwise surface the failure on the form. Creation does
    /// not authenticate, so no token is involved.
    fn handle_create_account_outcome(&mut self, outcome: MutationOutcome<()>) {
        match outcome {
            MutationOutcome::Success(()) => {
                self.status_message = Some(ACCOUNT_CREATED_MESSAGE.to_string());
                self.state.create_account_form = CreateAccountForm::new();
                self.state.view_history.clear();
                self.state.current_view = View::Login;
            }
            MutationOutcome::ApplicationError(message) => {
                self.state.create_account_form.set_form_error(message);
            }
            MutationOutcome::TransportError(e) => {
                tracing::warn!("create-account request failed: {e:#}");
                self.state
                    .create_account_form
                    .set_form_error(GENERIC_FAILURE);
            }
        }
    }

    /// Fetch the podcast catalog
    pub async fn load_podcasts(&mut self) {
        match self.api.all_podcasts().await {
            Ok(podcasts) => {
                self.state.podcasts = podcasts;
                self.state.reset_selection();
            }
            Err(e) => self.push_error(format!("Failed to load podcasts: {e}")),
        }
    }

    /// Open the selected podcast's episode list
    async fn open_selected_podcast(&mut self) {
        let Some(podcast) = self.state.podcasts.get(self.state.selected_index) else {
            return;
        };
        match self.api.podcast_with_episodes(podcast.id).await {
            Ok((podcast, episodes)) => {
                self.state.current_podcast = Some(podcast);
                self.state.episodes = episodes;
                self.navigate(View::Episodes);
            }
            Err(e) => self.push_error(format!("Failed to load episodes: {e}")),
        }
    }

    /// Drop the stored session and return to the login screen
    fn sign_out(&mut self) {
        if let Err(e) = self.session.remove(AUTH_TOKEN_KEY) {
            self.push_error(format!("Failed to clear session: {e}"));
            return;
        }
        self.state = AppState::default();
        self.status_message = None;
    }
}
