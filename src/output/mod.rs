//! Terminal output: status lines, progress, and per-mix and run statistics.

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::{create_download_bar, create_spinner};
pub use stats::{print_mix_stats, print_pending, print_run_stats};
