//! Library components of the `genemap` command.

pub mod logging;
pub mod pipeline;
