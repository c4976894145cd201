use thiserror::Error;

pub const ACCOUNT_CREATED_NOTICE: &str = "Account created successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "LOGIN",
            AuthMode::SignUp => "CREATE ACCOUNT",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "SIGN UP",
            AuthMode::SignUp => "BACK TO LOGIN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn(String),
    AccountCreated(String),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::SignedIn(_) => None,
            SubmitOutcome::AccountCreated(_) => Some(ACCOUNT_CREATED_NOTICE),
        }
    }

    pub fn into_identity(self) -> String {
        match self {
            SubmitOutcome::SignedIn(identity) | SubmitOutcome::AccountCreated(identity) => identity,
        }
    }
}

/// Credentials are only checked for presence (login) or agreement (sign-up).
/// Nothing is trimmed: whitespace counts as input.
pub fn evaluate_submission(mode: AuthMode, fields: &LoginFields) -> Result<SubmitOutcome, FormError> {
    match mode {
        AuthMode::Login => {
            if fields.email.is_empty() || fields.password.is_empty() {
                return Err(FormError::MissingCredentials);
            }
            Ok(SubmitOutcome::SignedIn(fields.email.clone()))
        }
        AuthMode::SignUp => {
            if fields.password != fields.confirm_password {
                return Err(FormError::PasswordMismatch);
            }
            Ok(SubmitOutcome::AccountCreated(fields.email.clone()))
        }
    }
}
