//! Submit-time validation rules for `[data-form]` forms.
//!
//! The browser layer snapshots the form's controls into a [`FormSnapshot`];
//! [`validate`] returns the first failure together with the control that
//! should receive focus.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::countdown::parse_datetime;

pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;
pub const SUCCESS_MESSAGE: &str = "Thank you! We will be in touch shortly.";

pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM: &str = "confirm";
pub const FIELD_DATE: &str = "date";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Styling marker carried by the inline alert as `data-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    Reservation,
    Generic,
}

impl FormKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "login" => Self::Login,
            "register" => Self::Register,
            "reservation" => Self::Reservation,
            _ => Self::Generic,
        }
    }

    fn checks_password_length(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Please choose a future reservation date.")]
    DateNotInFuture,
}

/// A failed validation: what went wrong and which control to focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalid {
    pub error: ValidationError,
    pub focus: usize,
}

/// One form control as seen at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    /// `name`, falling back to `id`.
    pub name: String,
    /// Lower-cased `type` (`"text"`, `"email"`, `"select-one"`, ...).
    pub input_type: String,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
}

impl Control {
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Disabled, hidden and submit controls sit out validation.
    fn takes_part(&self) -> bool {
        !self.disabled && self.input_type != "hidden" && self.input_type != "submit"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub kind: FormKind,
    pub controls: Vec<Control>,
}

impl FormSnapshot {
    pub fn new(kind: FormKind, controls: Vec<Control>) -> Self {
        Self { kind, controls }
    }

    /// First control carrying `name`, like `form.elements[name]`.
    pub fn field(&self, name: &str) -> Option<(usize, &Control)> {
        self.controls.iter().enumerate().find(|(_, c)| c.name == name)
    }
}

pub fn validate(
    form: &FormSnapshot,
    now: DateTime<Utc>,
    min_password_len: usize,
) -> Result<(), Invalid> {
    for (idx, control) in form.controls.iter().enumerate() {
        if !control.takes_part() {
            continue;
        }
        if control.required && control.value.trim().is_empty() {
            return Err(Invalid {
                error: ValidationError::MissingRequired,
                focus: idx,
            });
        }
        if control.input_type == "email"
            && !control.value.is_empty()
            && !is_valid_email(&control.value)
        {
            return Err(Invalid {
                error: ValidationError::InvalidEmail,
                focus: idx,
            });
        }
    }

    if form.kind == FormKind::Register {
        if let (Some((_, password)), Some((confirm_idx, confirm))) =
            (form.field(FIELD_PASSWORD), form.field(FIELD_CONFIRM))
        {
            if password.value != confirm.value {
                return Err(Invalid {
                    error: ValidationError::PasswordMismatch,
                    focus: confirm_idx,
                });
            }
        }
    }

    if form.kind.checks_password_length() {
        if let Some((idx, password)) = form.field(FIELD_PASSWORD) {
            if password.value.encode_utf16().count() < min_password_len {
                return Err(Invalid {
                    error: ValidationError::PasswordTooShort {
                        min: min_password_len,
                    },
                    focus: idx,
                });
            }
        }
    }

    if form.kind == FormKind::Reservation {
        if let Some((idx, date)) = form.field(FIELD_DATE) {
            let in_future = parse_datetime(&date.value).is_some_and(|selected| selected >= now);
            if !in_future {
                return Err(Invalid {
                    error: ValidationError::DateNotInFuture,
                    focus: idx,
                });
            }
        }
    }

    Ok(())
}
