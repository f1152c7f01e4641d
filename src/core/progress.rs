//! Progress indicator shown on stderr while commands run

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use super::config::{PROGRESS_TEMPLATE, PROGRESS_TICK_MS};

/// Creates a progress bar counting finished repositories out of `total`
///
/// The bar draws on stderr and stays hidden when stderr is not a terminal, so
/// piped output only ever contains the report.
pub(crate) fn create_progress_bar(total: usize) -> Result<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
    pb.set_style(create_progress_style()?);
    pb.set_message("running...");
    pb.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    Ok(pb)
}

/// Creates a progress bar style configuration
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(PROGRESS_TEMPLATE)?)
}
