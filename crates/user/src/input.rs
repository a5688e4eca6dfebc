use std::collections::{BTreeMap, HashMap};

use validator::{Validate, ValidationErrors};

/// Field name to ordered list of error messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw key/value pairs of a submitted form.
#[derive(Clone, Debug, Default)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of `key`, or an empty string when the field was not submitted.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_owned()
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Validate)]
pub struct SignInInput {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl SignInInput {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.text("email"),
            password: form.text("password"),
        }
    }
}

#[derive(Validate)]
pub struct SignUpInput {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "Please confirm your password"),
        must_match(other = "password", message = "Passwords don't match")
    )]
    pub confirm_password: String,
}

impl SignUpInput {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.text("email"),
            password: form.text("password"),
            confirm_password: form.text("confirmPassword"),
        }
    }
}

/// Flatten validator output into the per-field shape forms render.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, entries)| {
            let messages = entries
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();

            (form_field_name(field.as_ref()).to_owned(), messages)
        })
        .collect()
}

fn form_field_name(field: &str) -> &str {
    match field {
        "confirm_password" => "confirmPassword",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up_form(email: &str, password: &str, confirm: &str) -> FormData {
        [
            ("email", email),
            ("password", password),
            ("confirmPassword", confirm),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn missing_fields_are_coerced_to_empty_strings() {
        let input = SignInInput::from_form(&FormData::default());

        assert_eq!(input.email, "");
        assert_eq!(input.password, "");
    }

    #[test]
    fn empty_sign_in_reports_both_fields() {
        let errors = SignInInput::from_form(&FormData::default())
            .validate()
            .unwrap_err();
        let errors = field_errors(&errors);

        assert!(errors["email"].contains(&"Email is required".to_owned()));
        assert_eq!(errors["password"], vec!["Password is required".to_owned()]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form: FormData = [("email", "not-an-email"), ("password", "secret")]
            .into_iter()
            .collect();
        let errors = field_errors(&SignInInput::from_form(&form).validate().unwrap_err());

        assert_eq!(errors["email"], vec!["Invalid email format".to_owned()]);
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn valid_sign_in_passes() {
        let form: FormData = [("email", "john.doe@issuetrack.localhost"), ("password", "x")]
            .into_iter()
            .collect();

        assert!(SignInInput::from_form(&form).validate().is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let form = sign_up_form("john.doe@issuetrack.localhost", "12345", "12345");
        let errors = field_errors(&SignUpInput::from_form(&form).validate().unwrap_err());

        assert_eq!(
            errors["password"],
            vec!["Password must be at least 6 characters".to_owned()]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn mismatch_is_reported_on_confirm_password() {
        let form = sign_up_form("john.doe@issuetrack.localhost", "my_password", "my_passwor");
        let errors = field_errors(&SignUpInput::from_form(&form).validate().unwrap_err());

        assert_eq!(
            errors["confirmPassword"],
            vec!["Passwords don't match".to_owned()]
        );
        assert!(!errors.contains_key("password"));
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn empty_confirmation_is_reported() {
        let form = sign_up_form("john.doe@issuetrack.localhost", "my_password", "");
        let errors = field_errors(&SignUpInput::from_form(&form).validate().unwrap_err());

        assert!(errors["confirmPassword"].contains(&"Please confirm your password".to_owned()));
        assert!(errors["confirmPassword"].contains(&"Passwords don't match".to_owned()));
    }

    #[test]
    fn valid_sign_up_passes() {
        let form = sign_up_form("john.doe@issuetrack.localhost", "my_password", "my_password");

        assert!(SignUpInput::from_form(&form).validate().is_ok());
    }
}
