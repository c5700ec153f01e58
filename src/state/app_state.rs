//! Application state definitions

use crate::state::{Form, LoginForm, RegisterForm, ResetForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Current screen in the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    Reset,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::Reset => "Reset Password",
        }
    }

    /// Default label of the submit button on this screen
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Secure Account",
            Self::Reset => "Send Reset Instructions",
        }
    }
}

/// Binary display theme, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve a stored preference; anything unrecognized or absent
    /// falls back to light
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Kind of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

/// How long a toast stays on screen before auto-dismissal
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Single-slot toast notification; a new one replaces the current one
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

/// Transient submit button label (e.g. "Account Created!")
#[derive(Debug, Clone)]
pub struct ButtonFlash {
    pub label: &'static str,
    pub expires_at: Instant,
}

/// Screen change scheduled for a later tick
#[derive(Debug, Clone)]
pub struct PendingRedirect {
    pub view: View,
    pub due_at: Instant,
}

/// Toast scheduled for a later tick
#[derive(Debug, Clone)]
pub struct QueuedNotice {
    pub message: String,
    pub kind: NotificationKind,
    pub due_at: Instant,
}

/// Snapshot of the registration form at submit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

/// Snapshot of the login form at submit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Snapshot of the reset form at submit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

/// Echo of a successful registration, with the server-assigned id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Account details carried by a login grant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Successful login: profile plus a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginGrant {
    pub user: AccountProfile,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

/// Acknowledgement of a password reset request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetReceipt {
    pub email: String,
    pub message: String,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Theme
    pub theme: Theme,

    // Forms (one per screen, state kept across navigation)
    pub register_form: RegisterForm,
    pub login_form: LoginForm,
    pub reset_form: ResetForm,

    // Transient UI state
    pub notification: Option<Notification>,
    pub button_flash: Option<ButtonFlash>,
    pub pending_redirect: Option<PendingRedirect>,
    pub queued_notice: Option<QueuedNotice>,
}

impl AppState {
    /// Show a toast, replacing any existing one
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notification = Some(Notification::new(message, kind));
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// The form belonging to the current view
    pub fn active_form_mut(&mut self) -> &mut dyn Form {
        match self.current_view {
            View::Login => &mut self.login_form,
            View::Register => &mut self.register_form,
            View::Reset => &mut self.reset_form,
        }
    }

    pub fn active_form(&self) -> &dyn Form {
        match self.current_view {
            View::Login => &self.login_form,
            View::Register => &self.register_form,
            View::Reset => &self.reset_form,
        }
    }

    /// Label currently shown on the submit button
    pub fn submit_label(&self) -> &'static str {
        self.button_flash
            .as_ref()
            .map(|f| f.label)
            .unwrap_or_else(|| self.current_view.submit_label())
    }

    /// Advance time-driven UI state: toast expiry, button flash expiry,
    /// deferred toasts, and scheduled redirects
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
        if self.button_flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            self.button_flash = None;
        }
        if self.queued_notice.as_ref().is_some_and(|q| now >= q.due_at) {
            if let Some(notice) = self.queued_notice.take() {
                self.notify(notice.message, notice.kind);
            }
        }
        if self.pending_redirect.as_ref().is_some_and(|r| now >= r.due_at) {
            if let Some(redirect) = self.pending_redirect.take() {
                self.current_view = redirect.view;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(View::default(), View::Login);
    }

    #[test]
    fn test_view_submit_labels() {
        assert_eq!(View::Register.submit_label(), "Create Secure Account");
        assert_eq!(View::Reset.submit_label(), "Send Reset Instructions");
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_from_preference() {
        assert_eq!(Theme::from_preference(None), Theme::Light);
        assert_eq!(Theme::from_preference(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("solarized")), Theme::Light);
    }

    #[test]
    fn test_notify_replaces_existing_toast() {
        let mut state = AppState::default();
        state.notify("first", NotificationKind::Info);
        state.notify("second", NotificationKind::Error);
        let toast = state.notification.as_ref().expect("toast present");
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, NotificationKind::Error);
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut state = AppState::default();
        state.notify("hello", NotificationKind::Info);
        let shown_at = state.notification.as_ref().map(|n| n.shown_at).expect("toast");

        state.tick(shown_at + Duration::from_secs(1));
        assert!(state.notification.is_some());

        state.tick(shown_at + NOTIFICATION_TTL);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_tick_fires_redirect_when_due() {
        let mut state = AppState::default();
        state.current_view = View::Register;
        let now = Instant::now();
        state.pending_redirect = Some(PendingRedirect {
            view: View::Login,
            due_at: now + Duration::from_secs(2),
        });

        state.tick(now);
        assert_eq!(state.current_view, View::Register);

        state.tick(now + Duration::from_secs(2));
        assert_eq!(state.current_view, View::Login);
        assert!(state.pending_redirect.is_none());
    }

    #[test]
    fn test_tick_fires_queued_notice_when_due() {
        let mut state = AppState::default();
        let now = Instant::now();
        state.queued_notice = Some(QueuedNotice {
            message: "Welcome to the secure portal! Dashboard access granted.".to_string(),
            kind: NotificationKind::Success,
            due_at: now + Duration::from_secs(2),
        });

        state.tick(now);
        assert!(state.notification.is_none());

        state.tick(now + Duration::from_secs(2));
        let toast = state.notification.as_ref().expect("deferred toast fired");
        assert!(toast.message.starts_with("Welcome"));
    }

    #[test]
    fn test_submit_label_prefers_flash() {
        let mut state = AppState::default();
        state.current_view = View::Reset;
        assert_eq!(state.submit_label(), "Send Reset Instructions");
        state.button_flash = Some(ButtonFlash {
            label: "Instructions Sent!",
            expires_at: Instant::now() + Duration::from_secs(3),
        });
        assert_eq!(state.submit_label(), "Instructions Sent!");
    }

    #[test]
    fn test_active_form_follows_view() {
        let mut state = AppState::default();
        assert_eq!(state.active_form().field_count(), 4);
        state.current_view = View::Register;
        assert_eq!(state.active_form().field_count(), 7);
        state.current_view = View::Reset;
        assert_eq!(state.active_form().field_count(), 2);
    }
}
