use anyhow::Result;
use clap::Parser;
use m3u_translator::{
    config::{CliOptions, Config, LogConfig},
    encoder, parse_m3u_with,
};

fn init_logging(log_config: &LogConfig) {
    if log_config.log_stderr {
        simple_logging::log_to_stderr(log_config.level);
    } else {
        let _ = simple_logging::log_to_file(&log_config.log_file, log_config.level);
    }
}

fn run(cli_options: CliOptions) -> Result<()> {
    let config =
        Config::try_from_file(cli_options.config_file.as_deref())?.merge_with_cli(&cli_options);
    init_logging(&config.log_config);

    let base_dir = config.base_dir_for(&cli_options.playlist)?;
    let playlist = parse_m3u_with(&cli_options.playlist, &base_dir, &config.parser_config);
    log::info!(
        "`{}`: {} tracks, {} skipped",
        cli_options.playlist.display(),
        playlist.tracks.len(),
        playlist.skipped
    );
    match cli_options.output {
        Some(output) => encoder::write_m3u(&output, playlist.inner())?,
        None => println!("{}", serde_json::to_string_pretty(playlist.inner())?),
    }

    Ok(())
}

fn main() {
    let cli_options = CliOptions::parse();
    if let Err(e) = run(cli_options) {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
