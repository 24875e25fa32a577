use axum::http::{HeaderName, HeaderValue};
use axum_extra::headers::{self, Header};

static X_AUTHENTICATED_USER: HeaderName = HeaderName::from_static("x-authenticated-user");

/// Username forwarded by the authentication step in front of this service.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(String);

impl AuthenticatedUser {
    pub fn into_name(self) -> String {
        self.0
    }
}

impl Header for AuthenticatedUser {
    fn name() -> &'static HeaderName {
        &X_AUTHENTICATED_USER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let name = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(Self(name.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}
