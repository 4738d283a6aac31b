//! cirrus-core — declarative AWS stack descriptors.
//!
//! A stack is an in-memory graph of immutable value descriptors (one compute
//! function, its trigger rules, optionally a key-value table) plus named
//! outputs. Assembly is a single linear pass: build descriptors through the
//! factory functions, register them on a [`Stack`], then [`Stack::synth`]
//! the graph to JSON for the external deployment engine.
//!
//! Nothing in this crate talks to a cloud API. Provisioning, diffing against
//! previously deployed state, and all structural validation (schedule field
//! ranges, memory/timeout bounds, name collisions) belong to the external
//! engine that consumes the synthesized graph.

pub mod env;
pub mod factory;
pub mod schedule;
pub mod stack;
pub mod types;

pub use env::ProcessEnv;
pub use factory::{
    FunctionOptions, TableOptions, add_schedule, create_function, create_table,
};
pub use schedule::{
    DEFAULT_RATE_HOURS, DEFAULT_RATE_MINUTES, RateUnit, ScheduleExpression, daily_at, hourly,
    minutely, weekdays_at,
};
pub use stack::{Stack, StackProps, StackTemplate};
pub use types::*;
