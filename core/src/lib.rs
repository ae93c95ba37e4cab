pub mod catalog;
pub mod config;
pub mod games;
pub mod logger;
pub mod session_rng;

pub use catalog::{AppCatalog, MiniAppEntry, MiniAppType};
pub use session_rng::SessionRng;
