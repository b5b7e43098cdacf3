mod config;
mod cookie;
mod errors;
mod resolver;
mod types;

pub use config::{AUTH_COOKIE_MAX_AGE, AUTH_COOKIE_NAME, AUTH_COOKIE_SECURE};
pub use cookie::{get_auth_token, is_auth_cookie, prepare_login_response, prepare_logout_response};
pub use errors::SessionError;
pub use resolver::resolve_session;
pub use types::{Session, SessionResolution};
