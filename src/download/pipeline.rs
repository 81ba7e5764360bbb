//! The whole run: session, discovery, and every pending mix.

use crate::api::{establish_session, MixService};
use crate::config::Config;
use crate::download::mix::{play_mix, MixContext};
use crate::download::state::RunState;
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::ledger::Ledger;
use crate::media::PlayLengthProbe;
use crate::output::print_mix_stats;

/// Download every mix of the followed collection that is not in the ledger yet.
///
/// With `dry_run` the pending mixes are only computed, nothing is played.
pub async fn sync_collection<S, P>(
    service: &S,
    probe: &P,
    config: &Config,
    dry_run: bool,
) -> Result<RunState>
where
    S: MixService + ?Sized,
    P: PlayLengthProbe + ?Sized,
{
    let base_dir = config.download_directory();
    ensure_dir(&base_dir).await?;

    let session = establish_session(service, &config.play_token_path()).await?;

    let discovered = service
        .mix_ids(config.follow.user_id, &config.follow.collection)
        .await?;
    let mut ledger = Ledger::load(&config.ledger_path())?;
    let pending = ledger.pending(&discovered);

    tracing::info!(
        "{} mixes in '{}', {} already downloaded, {} to download",
        discovered.len(),
        config.follow.collection,
        discovered.len() - pending.len(),
        pending.len()
    );

    let mut state = RunState {
        mixes_discovered: discovered.len() as u64,
        pending: pending.clone(),
        ..Default::default()
    };

    if dry_run {
        return Ok(state);
    }

    let ctx = MixContext {
        play_token: &session.play_token,
        base_dir: &base_dir,
        show_downloads: config.options.show_downloads,
    };

    for mix_id in pending {
        // The same mix may be listed twice.
        if ledger.contains(mix_id) {
            continue;
        }

        let mix = play_mix(service, probe, &ctx, mix_id, &mut ledger).await?;
        if config.options.show_downloads {
            print_mix_stats(&mix);
        }
        state.add_mix_stats(&mix);
    }

    Ok(state)
}
