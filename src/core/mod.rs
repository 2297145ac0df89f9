//! Service plumbing around the scoring engine.

pub mod http;
