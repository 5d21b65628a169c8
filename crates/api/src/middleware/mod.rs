//! Request middleware.
//!
//! - [`rate_limit::throttle_mutations`] -- Fixed-window limit on POST/DELETE.

pub mod rate_limit;
