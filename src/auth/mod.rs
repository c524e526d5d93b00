//! Authentication types for the Pact API client.
//!
//! Authentication is a pre-obtained credential attached to each request.
//! This module holds what the `/tokens/` endpoints return:
//!
//! - [`LoginResponse`]: The body of a successful login, with `user_id` as a string
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::ApiClient;
//!
//! let api = ApiClient::new("https://api.pact.example/v1", None)?;
//! let session = api.login("a@b.com", "secret").await?;
//! println!("logged in as {}", session.user_id);
//!
//! if let Some(token) = session.token() {
//!     api.set_access_token(token)?;
//! }
//! ```

mod login;

pub(crate) use login::{check_login_args, check_logout_args};
pub use login::{LoginResponse, LOGIN_PATH, LOGOUT_PATH};
