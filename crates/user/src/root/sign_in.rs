use validator::Validate;

use crate::{
    ActionResult, FormData, PasswordVerifier, SessionContext, SignInInput, UserStore,
    field_errors,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

impl<U: UserStore, V: PasswordVerifier> super::Command<U, V> {
    /// Sign in with the `email` and `password` fields of `form`.
    ///
    /// Never fails: collaborator errors are logged and reported as an
    /// [`ActionResult::UnexpectedFailure`].
    pub async fn sign_in<S: SessionContext>(
        &self,
        form: &FormData,
        session: &mut S,
    ) -> ActionResult {
        let input = SignInInput::from_form(form);

        if let Err(errors) = input.validate() {
            return ActionResult::ValidationFailure {
                message: "Validation failed".to_owned(),
                errors: field_errors(&errors),
            };
        }

        match self.authenticate(input, session).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = ?e, "Sign in error");

                ActionResult::unexpected("An error occurred while signing in", "Failed to sign in")
            }
        }
    }

    async fn authenticate<S: SessionContext>(
        &self,
        input: SignInInput,
        session: &mut S,
    ) -> anyhow::Result<ActionResult> {
        // Unknown account and wrong password point at different fields.
        let Some(user) = self.store.get_user_by_email(&input.email).await? else {
            return Ok(ActionResult::field(INVALID_CREDENTIALS, "email"));
        };

        if !self
            .verifier
            .verify_password(&input.password, &user.password)
            .await?
        {
            return Ok(ActionResult::field(INVALID_CREDENTIALS, "password"));
        }

        session.create_session(&user.id).await?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(ActionResult::success("Signed in successfully"))
    }
}
