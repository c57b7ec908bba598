//! Sign-up form controller.
//!
//! The page performs the actual `fetch`; this controller builds the request
//! body and walks the submit button through
//! idle -> sending -> granted | rejected -> idle.

use serde::{Deserialize, Serialize};

pub const SUBSCRIBE_ENDPOINT: &str = "/api/subscribe";

/// Terminal states hold for this long before the button resets
pub const RESULT_HOLD_MS: f64 = 3000.0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub organization: String,
}

impl SignupRequest {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

/// Result of the host's request. A non-2xx response and a network failure
/// are the same outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

impl SubmitOutcome {
    pub fn from_response_ok(ok: bool) -> Self {
        if ok {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Sending,
    Granted,
    Rejected,
}

impl ButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Idle => "INITIALIZE SEQUENCE",
            ButtonState::Sending => "ENCRYPTING TRANSMISSION...",
            ButtonState::Granted => "ACCESS GRANTED",
            ButtonState::Rejected => "CONNECTION REJECTED",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ButtonState::Idle => "#fff",
            ButtonState::Sending => "#333",
            ButtonState::Granted => "#10b981",
            ButtonState::Rejected => "#ef4444",
        }
    }

    pub fn foreground(&self) -> &'static str {
        match self {
            ButtonState::Idle => "#000",
            _ => "#fff",
        }
    }

    pub fn disabled(&self) -> bool {
        *self != ButtonState::Idle
    }
}

#[derive(Clone, Debug)]
pub struct SignupForm {
    state: ButtonState,
    /// Time left in a terminal state before reverting to idle
    hold_remaining_ms: f64,
    clear_fields: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            state: ButtonState::Idle,
            hold_remaining_ms: 0.0,
            clear_fields: false,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Start a submission; returns the JSON body to POST to [`SUBSCRIBE_ENDPOINT`]
    pub fn submit(&mut self, email: &str, organization: &str) -> Result<String, String> {
        if self.state != ButtonState::Idle {
            return Err(format!("cannot submit while {:?}", self.state));
        }
        let body = SignupRequest {
            email: email.to_string(),
            organization: organization.to_string(),
        }
        .to_json()?;
        self.state = ButtonState::Sending;
        self.clear_fields = false;
        log::debug!("signup submitted");
        Ok(body)
    }

    /// Apply the host's request outcome
    pub fn resolve(&mut self, outcome: SubmitOutcome) -> Result<ButtonState, String> {
        if self.state != ButtonState::Sending {
            return Err(format!("no submission in flight (state {:?})", self.state));
        }
        self.state = match outcome {
            SubmitOutcome::Accepted => {
                self.clear_fields = true;
                ButtonState::Granted
            }
            SubmitOutcome::Rejected => {
                log::warn!("signup rejected");
                ButtonState::Rejected
            }
        };
        self.hold_remaining_ms = RESULT_HOLD_MS;
        Ok(self.state)
    }

    /// Let `elapsed_ms` pass; returns true when the button just reverted to idle
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if !matches!(self.state, ButtonState::Granted | ButtonState::Rejected) {
            return false;
        }
        self.hold_remaining_ms -= elapsed_ms.max(0.0);
        if self.hold_remaining_ms > 0.0 {
            return false;
        }
        self.state = ButtonState::Idle;
        self.hold_remaining_ms = 0.0;
        true
    }

    /// True once after a granted submission: the page should reset the inputs
    pub fn take_clear_fields(&mut self) -> bool {
        std::mem::take(&mut self.clear_fields)
    }
}
