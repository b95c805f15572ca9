//! adstxt library: ads.txt fetching and parsing
//!
//! This library implements the IAB ads.txt text convention in two independent
//! pieces:
//! - a pure parser that turns an ads.txt payload into structured seller
//!   records and `KEY=VALUE` variables
//! - an async resolver that fetches `https://<host>/ads.txt` through an
//!   injected HTTP capability and enforces the specification's
//!   at-most-one-external-redirect rule
//!
//! # Example
//!
//! ```no_run
//! use adstxt::{initialization::init_client, resolve};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(Duration::from_secs(60))?;
//! let ads_txt = resolve(&client, "example.com").await?;
//! println!("{}", ads_txt);
//! # Ok(())
//! # }
//! ```
//!
//! The parser has no I/O and can be used on its own:
//!
//! ```
//! use adstxt::{parse_str, Variable};
//!
//! let ads_txt = parse_str("contact=ads@example.com").unwrap();
//! assert_eq!(ads_txt.variables[&Variable::Contact], vec!["ads@example.com"]);
//! ```

#![warn(missing_docs)]

pub mod config;
mod domain;
mod error_handling;
mod fetch;
pub mod initialization;
mod model;
mod parse;

// Re-export public API
pub use domain::extract_root_domain;
pub use error_handling::{
    InitializationError, MultipleExternalRedirects, ParseError, RecordField, ResolveError,
};
pub use fetch::{evaluate_redirect, redirect_policy, resolve, HttpDoer, RedirectDecision};
pub use model::{AdsTxt, Record, Relationship, Variable};
pub use parse::{parse, parse_str};
