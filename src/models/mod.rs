//! Data models.

pub mod bounded_counter;

pub use bounded_counter::{
    clamp, BoundedCounter, Commit, CounterState, ListenerId, Step, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_VALUE, DEFAULT_VALUE,
};
