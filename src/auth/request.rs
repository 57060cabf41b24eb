//! Outgoing authorization request.

/// Content type of the form body sent to the auth endpoint.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Channel and socket identifiers for one authorization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    channel_name: String,
    socket_id: String,
}

impl AuthorizationRequest {
    pub fn new(channel_name: impl Into<String>, socket_id: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            socket_id: socket_id.into(),
        }
    }

    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn socket_id(&self) -> &str {
        &self.socket_id
    }

    /// Form body in the order the auth endpoint expects.
    ///
    /// Values are embedded verbatim; the transport hands out socket ids and
    /// channel names that are already form-safe.
    pub fn form_body(&self) -> String {
        format!("socket_id={}&channel_name={}", self.socket_id, self.channel_name)
    }
}
