//! Spinner shown while a track is listened to, and the download bar.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const LISTEN_TEMPLATE: &str = "{spinner:.green} {msg} [{elapsed}]";
const DOWNLOAD_TEMPLATE: &str = "  {bytes:>10}/{total_bytes:<10} [{bar:30.cyan/blue}] {eta}";

/// Spinner for the listening wait of a track.
pub fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(LISTEN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(250));
    spinner
}

/// Byte progress of one audio download.
pub fn create_download_bar(total: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(DOWNLOAD_TEMPLATE)
        .map(|style| style.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    ProgressBar::new(total).with_style(style)
}
