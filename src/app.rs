//! Application state and core logic

use crate::config::PortalConfig;
use crate::gateway::{AuthGateway, GatewayError, SimulatedGateway};
use crate::state::{
    AppState, ButtonFlash, Form, LoginForm, LoginGrant, NotificationKind, PendingRedirect,
    QueuedNotice, RegisteredUser, ResetReceipt, Theme, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// How long the post-registration confirmation shows before the
/// redirect to the login screen
const REDIRECT_DELAY: Duration = Duration::from_secs(2);
/// Delay before the post-login welcome toast
const WELCOME_DELAY: Duration = Duration::from_secs(2);
/// How long "Instructions Sent!" stays on the reset button
const RESET_FLASH_TTL: Duration = Duration::from_secs(3);

/// Which operation a pending submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitKind {
    Register,
    Login,
    Reset,
}

/// Terminal result of one successful submission attempt
enum SubmitPayload {
    Registered(RegisteredUser),
    LoggedIn(LoginGrant),
    ResetSent(ResetReceipt),
}

/// A submission running on a background task. While one exists the
/// submit affordance is disabled, so a second attempt cannot start.
struct InFlight {
    kind: SubmitKind,
    /// Remember-me flag snapshotted at submit time (login only)
    remember: bool,
    handle: JoinHandle<Result<SubmitPayload, GatewayError>>,
    started: Instant,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Persistent preferences
    pub config: PortalConfig,
    /// Auth backend; swapped for a mock in tests
    gateway: Arc<dyn AuthGateway>,
    /// Submission currently in flight, if any
    in_flight: Option<InFlight>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the simulated gateway
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SimulatedGateway::new()),
            PortalConfig::load().unwrap_or_default(),
        )
    }

    /// Create an App with explicit collaborators (used by tests)
    pub fn with_parts(gateway: Arc<dyn AuthGateway>, config: PortalConfig) -> Self {
        let mut state = AppState::default();
        state.theme = Theme::from_preference(config.theme.as_deref());
        if let Some(email) = config.remembered() {
            state.login_form = LoginForm::from_remembered(email);
        }

        Self {
            state,
            config,
            gateway,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Time spent in the current submission, for the spinner animation
    pub fn submit_elapsed(&self) -> Option<Duration> {
        self.in_flight.as_ref().map(|f| f.started.elapsed())
    }

    /// Advance time-driven UI state
    pub fn tick(&mut self) {
        self.state.tick(Instant::now());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc dismisses a visible toast before anything else
        if key.code == KeyCode::Esc && self.state.notification.is_some() {
            self.state.dismiss_notification();
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('p') => self.toggle_reveal(),
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('n') if self.state.current_view == View::Login => {
                    self.state.current_view = View::Register;
                }
                KeyCode::Char('f') if self.state.current_view == View::Login => {
                    self.state.current_view = View::Reset;
                }
                KeyCode::Char('g') if self.state.current_view == View::Login => {
                    tracing::info!("Google Workspace login initiated");
                    self.state.notify(
                        "Redirecting to Google Workspace authentication...",
                        NotificationKind::Info,
                    );
                }
                KeyCode::Char('b') if self.state.current_view == View::Login => {
                    tracing::info!("GitHub Enterprise login initiated");
                    self.state.notify(
                        "Redirecting to GitHub Enterprise authentication...",
                        NotificationKind::Info,
                    );
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                if self.state.current_view != View::Login {
                    self.state.current_view = View::Login;
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                let form = self.state.active_form_mut();
                let index = form.active_field();
                // Leaving a field counts as blur: validate it
                form.validate_field(index);
                form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                let form = self.state.active_form_mut();
                let index = form.active_field();
                form.validate_field(index);
                form.prev_field();
            }
            KeyCode::Backspace => {
                let form = self.state.active_form_mut();
                let index = form.active_field();
                if form.get_field(index).is_some() {
                    form.get_active_field_mut().pop_char();
                    form.validate_field(index);
                }
            }
            KeyCode::Char(' ') => {
                let form = self.state.active_form_mut();
                if form.is_checkbox_row() {
                    form.toggle_checkbox();
                } else {
                    let index = form.active_field();
                    if form.get_field(index).is_some() {
                        form.get_active_field_mut().push_char(' ');
                        form.validate_field(index);
                    }
                }
            }
            KeyCode::Char(c) => {
                let form = self.state.active_form_mut();
                let index = form.active_field();
                if form.get_field(index).is_some() {
                    form.get_active_field_mut().push_char(c);
                    form.validate_field(index);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Toggle the display theme and persist the choice
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.theme = Some(self.state.theme.label().to_string());
        if let Err(err) = self.config.save() {
            tracing::warn!("failed to persist preferences: {err}");
        }
        self.state.notify(
            format!("Switched to {} mode", self.state.theme.label()),
            NotificationKind::Info,
        );
    }

    /// Toggle visibility of the active masked field
    fn toggle_reveal(&mut self) {
        let form = self.state.active_form_mut();
        if form.get_field(form.active_field()).is_some() {
            form.get_active_field_mut().toggle_reveal();
        }
    }

    /// Submit the active form. No-op while a submission is in flight:
    /// the affordance is disabled for the duration.
    pub fn submit(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        match self.state.current_view {
            View::Register => self.submit_register(),
            View::Login => self.submit_login(),
            View::Reset => self.submit_reset(),
        }
    }

    fn submit_register(&mut self) {
        let fields_ok = self.state.register_form.validate_all();

        // Agreement precondition takes precedence over field errors
        if !self.state.register_form.agree_terms {
            self.state.notify(
                "Please agree to the Terms of Service and Privacy Policy",
                NotificationKind::Error,
            );
            return;
        }
        if !fields_ok {
            self.state.notify(
                "Please fix the validation errors above",
                NotificationKind::Error,
            );
            return;
        }
        let Some(request) = self.state.register_form.request() else {
            return;
        };

        tracing::info!(email = %request.email, "submitting registration");
        let gateway = Arc::clone(&self.gateway);
        let handle =
            tokio::spawn(async move { gateway.register(request).await.map(SubmitPayload::Registered) });
        self.in_flight = Some(InFlight {
            kind: SubmitKind::Register,
            remember: false,
            handle,
            started: Instant::now(),
        });
    }

    fn submit_login(&mut self) {
        if !self.state.login_form.validate_all() {
            self.state.notify(
                "Please fix the validation errors above",
                NotificationKind::Error,
            );
            return;
        }
        let Some(request) = self.state.login_form.request() else {
            return;
        };

        tracing::info!(email = %request.email, "submitting login");
        let remember = request.remember_me;
        let gateway = Arc::clone(&self.gateway);
        let handle =
            tokio::spawn(async move { gateway.login(request).await.map(SubmitPayload::LoggedIn) });
        self.in_flight = Some(InFlight {
            kind: SubmitKind::Login,
            remember,
            handle,
            started: Instant::now(),
        });
    }

    fn submit_reset(&mut self) {
        if !self.state.reset_form.validate_all() {
            self.state.notify(
                "Please fix the validation errors above",
                NotificationKind::Error,
            );
            return;
        }
        let Some(request) = self.state.reset_form.request() else {
            return;
        };

        tracing::info!(email = %request.email, "submitting password reset");
        let gateway = Arc::clone(&self.gateway);
        let handle = tokio::spawn(async move {
            gateway
                .reset_password(request)
                .await
                .map(SubmitPayload::ResetSent)
        });
        self.in_flight = Some(InFlight {
            kind: SubmitKind::Reset,
            remember: false,
            handle,
            started: Instant::now(),
        });
    }

    /// Collect a finished submission, if any. The busy state is cleared
    /// before the outcome is inspected, whatever it is.
    pub async fn poll_submission(&mut self) -> Result<()> {
        if !self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.handle.is_finished())
        {
            return Ok(());
        }
        let Some(in_flight) = self.in_flight.take() else {
            return Ok(());
        };

        match in_flight.handle.await {
            Ok(Ok(payload)) => self.handle_success(in_flight.remember, payload),
            Ok(Err(err)) => self.handle_failure(in_flight.kind, err),
            Err(err) => {
                tracing::error!("submission task failed: {err}");
                self.state.notify(
                    "Connection timeout. Please check your network.",
                    NotificationKind::Error,
                );
            }
        }
        Ok(())
    }

    fn handle_success(&mut self, remember: bool, payload: SubmitPayload) {
        match payload {
            SubmitPayload::Registered(user) => {
                tracing::info!(user_id = %user.id, "registration succeeded");
                self.state.notify(
                    "Account created successfully! Redirecting to login...",
                    NotificationKind::Success,
                );
                self.state.register_form.clear();
                let now = Instant::now();
                self.state.button_flash = Some(ButtonFlash {
                    label: "Account Created!",
                    expires_at: now + REDIRECT_DELAY,
                });
                self.state.pending_redirect = Some(PendingRedirect {
                    view: View::Login,
                    due_at: now + REDIRECT_DELAY,
                });
            }
            SubmitPayload::LoggedIn(grant) => {
                tracing::info!(user = %grant.user.email, "login succeeded");
                if remember {
                    self.config.remember(&grant.user.email);
                } else {
                    self.config.forget();
                }
                if let Err(err) = self.config.save() {
                    tracing::warn!("failed to persist preferences: {err}");
                }
                self.state.notify(
                    "Authentication successful! Redirecting to dashboard...",
                    NotificationKind::Success,
                );
                self.state.queued_notice = Some(QueuedNotice {
                    message: "Welcome to the secure portal! Dashboard access granted.".to_string(),
                    kind: NotificationKind::Success,
                    due_at: Instant::now() + WELCOME_DELAY,
                });
            }
            SubmitPayload::ResetSent(receipt) => {
                tracing::info!(email = %receipt.email, "reset instructions sent");
                self.state.notify(
                    format!("Password reset instructions sent to {}", receipt.email),
                    NotificationKind::Success,
                );
                self.state.reset_form.clear();
                self.state.button_flash = Some(ButtonFlash {
                    label: "Instructions Sent!",
                    expires_at: Instant::now() + RESET_FLASH_TTL,
                });
            }
        }
    }

    fn handle_failure(&mut self, kind: SubmitKind, err: GatewayError) {
        tracing::warn!(?kind, %err, "submission failed");
        let message = err.to_string();
        self.state.notify(message.clone(), NotificationKind::Error);
        match err {
            GatewayError::EmailTaken => self.state.register_form.reject_email(&message),
            GatewayError::InvalidCredentials => self.state.login_form.reject_credentials(&message),
            GatewayError::EmailNotFound => self.state.reset_form.reject_email(&message),
            GatewayError::Timeout => {}
        }
    }
}
