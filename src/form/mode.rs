//! Sign-in / sign-up selector and the static copy that goes with each.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form mode '{0}' (expected 'sign-in' or 'sign-up')")]
pub struct ParseModeError(String);

impl FormMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    /// The mode the "switch" link leads to.
    #[must_use]
    pub fn alternate(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Route path for this mode's screen.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
        }
    }

    /// Whether the full-name field is shown and validated.
    #[must_use]
    pub fn requires_full_name(self) -> bool {
        self == Self::SignUp
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to your account to continue",
            Self::SignUp => "Sign up to get started with your account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    /// Prompt and link label pointing at [`FormMode::alternate`].
    #[must_use]
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("New to our platform?", "Sign up"),
            Self::SignUp => ("Already have an account?", "Sign in"),
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sign-in" | "signin" => Ok(Self::SignIn),
            "sign-up" | "signup" => Ok(Self::SignUp),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;
