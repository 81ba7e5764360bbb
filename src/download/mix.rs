//! Playing through a single mix.

use std::path::Path;

use crate::api::{CursorAction, MixService, TrackSet};
use crate::download::pacing::listen;
use crate::download::playlist::Playlist;
use crate::download::state::MixState;
use crate::download::track::download_track;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, mix_folder_name};
use crate::ledger::Ledger;
use crate::media::{AudioFormat, PlayLengthProbe};
use crate::output::create_spinner;

/// Settings shared by every mix of a run.
#[derive(Debug, Clone)]
pub struct MixContext<'a> {
    pub play_token: &'a str,
    /// Folder the mix folders are created in.
    pub base_dir: &'a Path,
    pub show_downloads: bool,
}

/// Play a mix from its first track to the end, downloading every track.
///
/// Tracks that cannot be fetched are skipped. Once the service reports the end
/// of the mix it is recorded in the ledger. A failure part way leaves the
/// downloaded tracks on disk but does not touch the ledger.
pub async fn play_mix<S, P>(
    service: &S,
    probe: &P,
    ctx: &MixContext<'_>,
    mix_id: u64,
    ledger: &mut Ledger,
) -> Result<MixState>
where
    S: MixService + ?Sized,
    P: PlayLengthProbe + ?Sized,
{
    let details = service.mix_details(mix_id).await?;
    let mix_name = mix_folder_name(&details.name, mix_id);
    let folder = ctx.base_dir.join(&mix_name);
    ensure_dir(&folder).await?;

    let playlist = Playlist::new(&folder, &mix_name);
    let mut state = MixState::new(mix_id, mix_name.clone(), folder.clone());

    tracing::info!("Playing {}: {} tracks", mix_name, details.tracks_count);

    let mut set = service
        .track_cursor(ctx.play_token, mix_id, CursorAction::Play)
        .await?;

    while !set.at_end {
        let TrackSet { track, .. } = set;
        let track = track.ok_or_else(|| {
            Error::Api(format!("Mix {} returned no track before its end", mix_id))
        })?;

        let downloaded = match download_track(service, &track, &folder, ctx.show_downloads).await {
            Ok(downloaded) => downloaded,
            Err(Error::TrackUnavailable { status }) => {
                tracing::warn!("Skipping '{}' (HTTP {})", track.name, status);
                state.record_skip();
                set = service
                    .track_cursor(ctx.play_token, mix_id, CursorAction::Skip)
                    .await?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let format = AudioFormat::from_extension(&downloaded.extension)
            .ok_or_else(|| Error::UnsupportedFormat(downloaded.extension.clone()))?;
        let play_length = probe.play_length(&downloaded.path, format)?;

        playlist
            .append(play_length, downloaded.title(), &downloaded.file_name)
            .await?;
        state.record_download(play_length);

        tracing::info!("Playing {} for {}s", downloaded.file_name, play_length);

        let spinner = ctx
            .show_downloads
            .then(|| create_spinner(&format!("Listening to {}", downloaded.title())));
        listen(service, ctx.play_token, mix_id, track.id, play_length).await?;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        set = service
            .track_cursor(ctx.play_token, mix_id, CursorAction::Next)
            .await?;
    }

    ledger.record(mix_id)?;

    Ok(state)
}
