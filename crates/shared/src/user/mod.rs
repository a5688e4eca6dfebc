use serde::Serialize;

/// Account record as seen by the authentication actions.
///
/// `password` holds the stored digest, never the submitted plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
