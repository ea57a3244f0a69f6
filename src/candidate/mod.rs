//! Candidate generation and high-point tracking.
//!
//! Includes uniform disk sampling and the bounded top-K tracker.

pub(crate) mod sampler;
pub(crate) mod topk;
