//! Type definitions for the application state.

/// The three mutually exclusive top-level UI modes.
///
/// `Auth` is the optimistic default before the identity subscription first
/// fires; the subscription then drives the screen from the actual user
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Auth,
    Gallery,
    StyleDetail,
}

/// Whether the Auth screen submits as sign-up or sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignUp,
    SignIn,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignUp => AuthMode::SignIn,
            AuthMode::SignIn => AuthMode::SignUp,
        }
    }

    /// Title / submit label for the Auth screen.
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign Up",
            AuthMode::SignIn => "Login",
        }
    }
}

/// Which Auth screen field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
}

impl AuthField {
    pub fn toggled(self) -> Self {
        match self {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        }
    }
}
