//! Step-batched HTTP request dispatch.
mod client;
mod dispatcher;
mod execution;


pub use client::build_client;
pub use dispatcher::{DispatchPlan, dispatch_steps};
