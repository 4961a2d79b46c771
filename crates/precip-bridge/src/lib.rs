pub mod platform;
pub mod render;
pub mod resolve;

mod dispatch;
mod parse;

pub use dispatch::{hook_entrypoint_from_stdin, run_stop_check, HookResult, StopCheck};
pub use platform::Platform;
pub use resolve::resolve_workspace_root;
