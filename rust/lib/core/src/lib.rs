pub mod auth;
pub mod config;
pub mod error;
pub mod module;
pub mod types;

pub use auth::{Authenticator, DenyAll, HeaderAuth, Principal, StaticPrincipal};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use module::Module;
pub use types::{Page, PageParams, Paging, merge_patch, new_id, now_rfc3339};
