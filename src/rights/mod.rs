//! Broadcast-rights resolution: candidate loading, the rule pipeline, and the
//! store seam it reads through.

pub mod engine;
pub mod rules;
pub mod store;
