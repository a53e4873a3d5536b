pub mod catalog;
pub mod database;
pub mod error;
pub mod jwt;

pub use catalog::CatalogService;
pub use database::{Database, InMemoryStore, NotificationTypeStore};
pub use error::ServiceError;
pub use jwt::{AccessTokenClaims, JwtService, TokenError};
