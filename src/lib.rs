//! Password generation under configurable policies, entropy-based strength
//! scoring, and rate-limited k-anonymity breach lookups.
//!
//! The engine is `charset`, `entropy`, `generators` and `breach`; `api`
//! is a thin actix-web adapter over it.

pub mod api;
pub mod breach;
pub mod charset;
pub mod cli;
pub mod core;
pub mod entropy;
pub mod generators;
pub mod logging;
pub mod models;

pub use breach::{BreachChecker, CheckOutcome, CompromiseResult, CompromiseStatus, RateLimiter};
pub use charset::{Alphabet, PolicyError};
pub use generators::{generate, generate_bulk, GeneratorError};
pub use models::{GeneratedPassword, GenerationPolicy, PasswordKind, SecurityStandard, Strength};
