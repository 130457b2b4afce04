mod foods;
mod helpers;
mod log;
mod summary;
mod target;

pub(crate) use foods::cmd_foods;
pub(crate) use log::cmd_log;
pub(crate) use summary::cmd_summary;
pub(crate) use target::{cmd_target_set, cmd_target_show};
