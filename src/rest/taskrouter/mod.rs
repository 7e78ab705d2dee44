//! TaskRouter: workspaces, tasks and worker capacity.

pub mod task;
pub mod worker_channel;
pub mod workspace;
