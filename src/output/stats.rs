//! Statistics reporting.

use console::style;

use crate::download::{MixState, RunState};

/// Print statistics for a single mix.
pub fn print_mix_stats(state: &MixState) {
    println!();
    println!("{}", style(format!("Finished {}:", state.name)).bold());
    println!("  Folder:     {}", state.folder.display());
    println!("  Downloaded: {}", state.tracks_downloaded);
    println!("  Skipped:    {}", state.tracks_skipped);
    println!("  Listened:   {}", format_duration(state.seconds_listened));
}

/// Print statistics for the whole run.
pub fn print_run_stats(state: &RunState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Mixes in collection: {}", state.mixes_discovered);
    println!("  Mixes downloaded:    {}", state.mixes_completed);
    println!("  Tracks:   {}", state.tracks_downloaded);
    if state.tracks_skipped > 0 {
        println!("  Skipped:  {}", style(state.tracks_skipped).yellow());
    }
    println!("  Listened: {}", format_duration(state.seconds_listened));
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the mixes a run would download.
pub fn print_pending(pending: &[u64]) {
    println!();
    if pending.is_empty() {
        println!("{}", style("Nothing to download").bold());
        return;
    }

    println!("{}", style(format!("{} mix(es) to download:", pending.len())).bold());
    for mix_id in pending {
        println!("  {}", mix_id);
    }
}

/// `h:mm:ss` rendering of a number of seconds.
fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00:00");
        assert_eq!(format_duration(200.4), "0:03:20");
        assert_eq!(format_duration(3725.0), "1:02:05");
        assert_eq!(format_duration(-5.0), "0:00:00");
    }
}
