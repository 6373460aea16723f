//! Application state definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::forms::{CreateAccountForm, LoginForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    CreateAccount,
    Podcasts,
    Episodes,
}

/// Account role on the podcast service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    Host,
    #[default]
    Listener,
}

impl UserRole {
    pub fn next(&self) -> Self {
        match self {
            Self::Host => Self::Listener,
            Self::Listener => Self::Host,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Listener => "Listener",
        }
    }

    /// Wire name, identical to the GraphQL enum value
    pub fn as_str(&self) -> &'static str {
        self.label()
    }
}

/// Input snapshot for the login mutation. Field names are load-bearing:
/// they serialize into the wire shape the server expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Input snapshot for the create-account mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAccountInput {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Podcast catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub thumbnail_url: String,
    pub description: String,
    pub rating: f64,
}

/// Episode of a podcast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub title: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Forms
    pub login_form: LoginForm,
    pub create_account_form: CreateAccountForm,

    // Catalog data
    pub podcasts: Vec<Podcast>,
    pub current_podcast: Option<Podcast>,
    pub episodes: Vec<Episode>,

    // Selection
    pub selected_index: usize,

    // Modal error queue
    errors: Vec<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Dismiss the currently shown error
    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }
}
