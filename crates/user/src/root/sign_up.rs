use validator::Validate;

use crate::{
    ActionResult, FormData, PasswordVerifier, SessionContext, SignUpInput, UserStore,
    field_errors,
};

const USER_EXISTS: &str = "User already exists, please login...";

impl<U: UserStore, V: PasswordVerifier> super::Command<U, V> {
    /// Register a new account from the `email`, `password` and
    /// `confirmPassword` fields of `form`, then open a session for it.
    pub async fn sign_up<S: SessionContext>(
        &self,
        form: &FormData,
        session: &mut S,
    ) -> ActionResult {
        let input = SignUpInput::from_form(form);

        if let Err(errors) = input.validate() {
            return ActionResult::ValidationFailure {
                message: "Invalid entries".to_owned(),
                errors: field_errors(&errors),
            };
        }

        match self.register(input, session).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = ?e, "Sign up failed");

                ActionResult::unexpected(
                    "An error occurred while creating your account",
                    "Failed to create account",
                )
            }
        }
    }

    async fn register<S: SessionContext>(
        &self,
        input: SignUpInput,
        session: &mut S,
    ) -> anyhow::Result<ActionResult> {
        if self.store.get_user_by_email(&input.email).await?.is_some() {
            return Ok(ActionResult::business(USER_EXISTS, USER_EXISTS));
        }

        let Some(user) = self
            .store
            .create_user(&input.email, &input.password)
            .await?
        else {
            return Ok(ActionResult::business(
                "Failed to create user...",
                "Failed to create user",
            ));
        };

        session.create_session(&user.id).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(ActionResult::success("Account created successfully"))
    }
}
