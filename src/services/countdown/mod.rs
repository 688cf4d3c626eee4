//! Countdown to the next International Men's Day.

mod service;

pub use crate::models::occurrence::OccurrenceInfo;
pub use service::{compute, compute_for, compute_now};
