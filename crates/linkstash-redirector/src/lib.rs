//! Redirect resolution for visited short links.
//!
//! The redirector never navigates anywhere itself. [`RedirectorService`]
//! turns a slug or a visited `/short/<slug>` path into an [`Outcome`] or a
//! terminal [`Visit`], and the caller performs the actual navigation or
//! shows the not-found notice.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkstash_redirector::{Outcome, RedirectorService};
//!
//! let service = RedirectorService::new(store);
//! match service.resolve("k3x9qa").await? {
//!     Outcome::Redirect(url) => println!("Redirect to: {}", url),
//!     Outcome::NotFound => println!("404 - URL Not Found"),
//! }
//! ```

pub mod outcome;
pub mod redirector;
pub mod route;
pub mod service;
pub mod visit;

pub use linkstash_core::ShortenerError;
pub use outcome::Outcome;
pub use redirector::Redirector;
pub use service::RedirectorService;
pub use visit::Visit;

pub type Result<T> = std::result::Result<T, ShortenerError>;
