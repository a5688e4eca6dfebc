use std::time::Duration;

use crate::{PasswordVerifier, UserStore};

mod sign_in;
mod sign_out;
mod sign_up;

/// Where callers land after signing out.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Pause before the session is torn down on sign-out.
pub const DEFAULT_SIGN_OUT_DELAY: Duration = Duration::from_millis(300);

/// Navigation the caller must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub route: &'static str,
}

impl Redirect {
    pub const fn to(route: &'static str) -> Self {
        Self { route }
    }
}

/// Authentication actions bound to their user store and password verifier.
#[derive(Clone)]
pub struct Command<U, V> {
    store: U,
    verifier: V,
    sign_out_delay: Duration,
}

impl<U: UserStore, V: PasswordVerifier> Command<U, V> {
    pub fn new(store: U, verifier: V) -> Self {
        Self {
            store,
            verifier,
            sign_out_delay: DEFAULT_SIGN_OUT_DELAY,
        }
    }

    pub fn with_sign_out_delay(mut self, delay: Duration) -> Self {
        self.sign_out_delay = delay;
        self
    }
}
