use crate::{PasswordVerifier, SessionContext, UserStore};

use super::{Redirect, SIGN_IN_ROUTE};

impl<U: UserStore, V: PasswordVerifier> super::Command<U, V> {
    /// Tear down the session and send the caller back to the sign-in page.
    ///
    /// The redirect is returned whether or not the teardown succeeded; a
    /// failure only reaches the logs.
    pub async fn sign_out<S: SessionContext>(&self, session: &mut S) -> Redirect {
        if let Err(e) = self.end_session(session).await {
            tracing::error!(error = ?e, "Failed to sign out");
        }

        Redirect::to(SIGN_IN_ROUTE)
    }

    async fn end_session<S: SessionContext>(&self, session: &mut S) -> anyhow::Result<()> {
        tokio::time::sleep(self.sign_out_delay).await;
        session.delete_session().await
    }
}
