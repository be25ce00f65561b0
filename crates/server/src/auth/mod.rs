pub mod cookies;
pub mod middleware;

/// Bearer token of the current request, inserted by the session middleware.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionToken(pub String);
