//! Command-line workflows behind the `dotver` binary

pub mod orchestration;

pub use orchestration::{run_workflow, Action, Output, WorkflowArgs, WorkflowResult};
