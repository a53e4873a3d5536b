pub mod auth;

pub use auth::{auth_middleware, AuthUser, PUBLIC_PATH_PREFIXES};
