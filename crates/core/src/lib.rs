//! Scenebook domain logic: scene model, name normalization and validation.
//!
//! Pure code only. Persistence lives in `scenebook-db`, HTTP in
//! `scenebook-api`.

pub mod error;
pub mod naming;
pub mod scene;
pub mod types;
pub mod validation;
