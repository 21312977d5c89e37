pub mod agent;
pub mod ai;
pub mod board;
pub mod daemon;
pub mod dashboard;
pub mod dispatch;
pub mod favorites;
pub mod message;
pub mod prompts;
pub mod scanned;
pub mod scanner;
pub mod schema;
pub mod status;
pub mod task;

use bach_core::responses::ActionResult;

/// Turn a `{success: false}` action result into an error.
fn ensure_success(result: ActionResult, action: &str) -> anyhow::Result<ActionResult> {
    match result.failure() {
        Some(error) => anyhow::bail!("{action} failed: {error}"),
        None => Ok(result),
    }
}
