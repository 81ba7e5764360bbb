//! eighttracks-shuffle - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use eighttracks_shuffle::{
    api::EighttracksApi,
    cli::Args,
    config::{validate_config, Config},
    download::sync_collection,
    error::{exit_codes, Error, Result},
    media::TagProbe,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_pending,
        print_run_stats, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_)
                | Error::Api(_)
                | Error::Json(_)
                | Error::CollectionNotFound { .. } => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_)
                | Error::TrackUnavailable { .. }
                | Error::UnsupportedFormat(_)
                | Error::Tag(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        config.follow.user_id,
        &config.follow.collection.to_string(),
        &config.download_directory().display().to_string(),
    );

    print_info("Connecting to 8tracks...");
    let api = EighttracksApi::new(&config)?;

    let state = sync_collection(&api, &TagProbe, &config, args.dry_run).await?;

    if args.dry_run {
        print_pending(&state.pending);
        return Ok(());
    }

    print_run_stats(&state);
    print_success(&format!("{} mix(es) downloaded", state.mixes_completed));

    Ok(())
}
