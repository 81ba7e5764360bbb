//! Status lines printed to the terminal.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the name and version line shown at startup.
pub fn print_banner() {
    println!(
        "{} {}",
        style("eighttracks-shuffle").cyan().bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    );
}

/// Print which collection is followed and where the mixes go.
pub fn print_config_summary(user_id: u64, collection: &str, download_dir: &str) {
    println!(
        "Following {} of user {}",
        style(collection).bold(),
        style(user_id).bold()
    );
    println!("Saving mixes under {}", style(download_dir).underlined());
}
