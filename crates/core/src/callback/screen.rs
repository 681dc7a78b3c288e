//! OAuth callback screens
//!
//! A callback screen reads the query parameters handed over by the backend
//! redirect exactly once, settles on success or error, and schedules a
//! single delayed navigation. The pending navigation is owned by the screen
//! and cancelled when the screen is dropped.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use polaris_common::time::ScopedTimer;
use polaris_domain::constants::{DASHBOARD_PATH, SIGN_IN_PATH};
use polaris_domain::{CallbackParams, PolarisError};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::Navigator;

/// Which OAuth flow a callback screen completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackKind {
    /// Google sign-in.
    Google,
    /// GitHub account connection; needs an existing session.
    Github,
    /// Gmail access grant.
    Gmail,
}

impl CallbackKind {
    pub const ALL: [Self; 3] = [Self::Google, Self::Github, Self::Gmail];

    /// Path segment under `/auth/callback/`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Gmail => "gmail",
        }
    }

    /// Display name of the provider.
    pub const fn provider(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
            Self::Gmail => "Gmail",
        }
    }

    /// Title shown while the screen evaluates its parameters.
    pub const fn loading_title(self) -> &'static str {
        match self {
            Self::Google => "Completing Google sign-in...",
            Self::Github => "Connecting your GitHub account...",
            Self::Gmail => "Connecting your Gmail account...",
        }
    }

    pub const fn success_delay(self) -> Duration {
        match self {
            Self::Google | Self::Github => Duration::from_secs(2),
            Self::Gmail => Duration::from_secs(3),
        }
    }

    pub const fn error_delay(self) -> Duration {
        match self {
            Self::Google => Duration::from_secs(3),
            Self::Github => Duration::from_secs(4),
            Self::Gmail => Duration::from_secs(5),
        }
    }

    /// Delay used when neither `success` nor `error` was passed.
    pub const fn unexpected_delay(self) -> Duration {
        self.error_delay()
    }

    pub const fn requires_session(self) -> bool {
        matches!(self, Self::Github)
    }

    /// Where a failed flow sends the user.
    const fn error_target(self) -> &'static str {
        match self {
            Self::Google => SIGN_IN_PATH,
            Self::Github | Self::Gmail => DASHBOARD_PATH,
        }
    }

    /// Identity shown on success (`email` or `username`).
    fn identity(self, params: &CallbackParams) -> Option<Cow<'_, str>> {
        let raw = match self {
            Self::Google | Self::Gmail => params.email.as_deref(),
            Self::Github => params.username.as_deref(),
        };
        raw.filter(|value| !value.is_empty()).map(decode_component)
    }

    fn success_message(self, params: &CallbackParams) -> String {
        let identity = self.identity(params);
        match (self, identity) {
            (Self::Google, Some(email)) => {
                format!("Signed in as {email}. Redirecting to your dashboard...")
            }
            (Self::Google, None) => "Signed in successfully. Redirecting to your dashboard...".into(),
            (kind, Some(who)) => format!(
                "{} account {who} connected. Redirecting to your dashboard...",
                kind.provider()
            ),
            (kind, None) => {
                format!("{} account connected. Redirecting to your dashboard...", kind.provider())
            }
        }
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CallbackKind {
    type Err = PolarisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == value)
            .ok_or_else(|| PolarisError::NotFound(format!("unknown OAuth callback: {value}")))
    }
}

/// Display state of a callback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackStatus {
    Loading,
    Success,
    Error,
}

/// Settled result of a callback screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackOutcome {
    pub status: CallbackStatus,
    pub message: String,
    pub redirect_to: String,
    pub delay: Duration,
}

impl CallbackOutcome {
    /// Evaluate the query parameters of a `kind` callback.
    pub fn evaluate(kind: CallbackKind, params: &CallbackParams, has_session: bool) -> Self {
        if kind.requires_session() && !has_session {
            return Self {
                status: CallbackStatus::Error,
                message: format!("Please sign in before connecting your {} account.", kind.provider()),
                redirect_to: SIGN_IN_PATH.to_string(),
                delay: kind.error_delay(),
            };
        }

        if params.is_success() {
            return Self {
                status: CallbackStatus::Success,
                message: kind.success_message(params),
                redirect_to: DASHBOARD_PATH.to_string(),
                delay: kind.success_delay(),
            };
        }

        if let Some(code) = params.error.as_deref() {
            let code = if code.is_empty() { "unknown_error" } else { code };
            let description = params
                .error_description
                .as_deref()
                .filter(|description| !description.is_empty())
                .map(decode_component);

            let message = match description {
                Some(description) => {
                    format!("{} authorization failed: {description} ({code})", kind.provider())
                }
                None => format!("{} authorization failed: {code}", kind.provider()),
            };

            return Self {
                status: CallbackStatus::Error,
                message,
                redirect_to: kind.error_target().to_string(),
                delay: kind.error_delay(),
            };
        }

        Self {
            status: CallbackStatus::Error,
            message: format!("Unexpected response from {}. Please try again.", kind.provider()),
            redirect_to: kind.error_target().to_string(),
            delay: kind.unexpected_delay(),
        }
    }
}

/// Percent-decode a parameter that may have been encoded twice, keeping the
/// raw value when it is not valid percent-encoding.
fn decode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// One OAuth callback screen.
///
/// `mount` must run inside a tokio runtime because it schedules the redirect
/// timer.
pub struct CallbackScreen {
    kind: CallbackKind,
    navigator: Arc<dyn Navigator>,
    outcome: Option<CallbackOutcome>,
    redirect: Option<ScopedTimer>,
}

impl CallbackScreen {
    pub fn new(kind: CallbackKind, navigator: Arc<dyn Navigator>) -> Self {
        Self { kind, navigator, outcome: None, redirect: None }
    }

    pub fn kind(&self) -> CallbackKind {
        self.kind
    }

    pub fn status(&self) -> CallbackStatus {
        self.outcome.as_ref().map_or(CallbackStatus::Loading, |outcome| outcome.status)
    }

    pub fn outcome(&self) -> Option<&CallbackOutcome> {
        self.outcome.as_ref()
    }

    /// Whether a redirect is scheduled and has not fired or been cancelled.
    pub fn redirect_pending(&self) -> bool {
        self.redirect.as_ref().is_some_and(|timer| {
            let handle = timer.handle();
            !handle.has_fired() && !handle.is_cancelled()
        })
    }

    /// Cancel the scheduled redirect, if any.
    pub fn cancel_redirect(&mut self) {
        if let Some(mut timer) = self.redirect.take() {
            timer.cancel();
        }
    }

    /// Evaluate `params` and schedule the redirect.
    ///
    /// Parameters are read once; later calls return the first outcome and
    /// schedule nothing.
    pub fn mount(&mut self, params: &CallbackParams, has_session: bool) -> CallbackOutcome {
        if let Some(outcome) = &self.outcome {
            warn!(kind = %self.kind, "callback screen already mounted, ignoring parameters");
            return outcome.clone();
        }

        let outcome = CallbackOutcome::evaluate(self.kind, params, has_session);
        info!(
            kind = %self.kind,
            status = ?outcome.status,
            redirect_to = %outcome.redirect_to,
            delay_ms = u64::try_from(outcome.delay.as_millis()).unwrap_or(u64::MAX),
            "oauth callback evaluated"
        );

        let navigator = Arc::clone(&self.navigator);
        let target = outcome.redirect_to.clone();
        self.redirect = Some(ScopedTimer::after(outcome.delay, move || navigator.navigate(&target)));
        self.outcome = Some(outcome.clone());
        outcome
    }
}
