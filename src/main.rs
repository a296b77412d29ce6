// SPDX-License-Identifier: MPL-2.0
//! `video_showcase` diagnostic CLI.
//!
//! ```text
//! video_showcase [--data-dir DIR] [--config-dir DIR] [--catalog FILE] <command>
//!
//! commands:
//!   catalog [--language all|english|hindi]
//!   metadata <uri>
//!   thumbnail <uri> [--at SECONDS] [--output FILE]
//!   validate <url>
//!   quality [--network slow-2g|2g|3g|4g] [--width PIXELS]
//!   config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use video_showcase::app::paths;
use video_showcase::catalog::Catalog;
use video_showcase::config::{self, DEFAULT_THUMBNAIL_OFFSET_SECS};
use video_showcase::domain::video::{format_file_size, format_from_url, format_time};
use video_showcase::error::{Error, Result};
use video_showcase::gallery::{Gallery, LanguageFilter};
use video_showcase::service::{DeviceHints, NetworkType, VideoService};

const USAGE: &str = "\
usage: video_showcase [--data-dir DIR] [--config-dir DIR] [--catalog FILE] <command>

commands:
  catalog [--language all|english|hindi]   list catalog videos
  metadata <uri>                           probe a video resource
  thumbnail <uri> [--at S] [--output F]    capture a JPEG thumbnail
  validate <url>                           check a remote video URL
  quality [--network T] [--width W]        pick a playback quality
  config                                   print the effective player config";

fn arg_error(err: pico_args::Error) -> Error {
    Error::Config(format!("invalid arguments: {err}"))
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_path(&path),
        None => Ok(Catalog::builtin()),
    }
}

fn list_catalog(catalog: Catalog, filter: LanguageFilter) {
    let mut gallery = Gallery::new(catalog);
    gallery.set_filter(filter);

    let stats = gallery.stats();
    println!(
        "{} videos, {} minutes, {} languages (filter: {})",
        stats.total_videos, stats.minutes_of_content, stats.languages, filter
    );

    if gallery.is_empty_result() {
        println!("{}", video_showcase::gallery::EMPTY_TITLE);
        return;
    }
    for video in gallery.visible_videos() {
        let size = video
            .file_size
            .map(format_file_size)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<28} {:>8} {:<8} {:>9}  {}",
            video.id,
            format_time(video.duration),
            video.language.tag(),
            size,
            video.title
        );
    }
}

async fn run(mut args: pico_args::Arguments) -> Result<()> {
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").map_err(arg_error)?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").map_err(arg_error)?;
    let catalog_path: Option<PathBuf> = args.opt_value_from_str("--catalog").map_err(arg_error)?;
    paths::init_cli_overrides(data_dir, config_dir);

    let Some(command) = args.subcommand().map_err(arg_error)? else {
        println!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "catalog" => {
            let filter = args
                .opt_value_from_str::<_, LanguageFilter>("--language")
                .map_err(arg_error)?
                .unwrap_or_default();
            finish(args)?;
            list_catalog(load_catalog(catalog_path)?, filter);
        }
        "metadata" => {
            let uri: String = args.free_from_str().map_err(arg_error)?;
            finish(args)?;
            let metadata = VideoService::headless().metadata(&uri).await?;
            println!("format:       {}", metadata.format);
            println!("duration:     {}", format_time(metadata.duration));
            println!("resolution:   {}", metadata.resolution());
            println!("aspect ratio: {}", metadata.aspect_ratio);
            if let Some(size) = metadata.file_size {
                println!("file size:    {}", format_file_size(size));
            }
            if !metadata.codecs.is_empty() {
                println!("codecs:       {}", metadata.codecs.join(", "));
            }
            if let Some(bitrate) = metadata.bitrate {
                println!("bitrate:      {} kb/s", bitrate / 1000);
            }
            if let Some(fps) = metadata.frame_rate {
                println!("frame rate:   {fps:.2} fps");
            }
        }
        "thumbnail" => {
            let at: f64 = args
                .opt_value_from_str("--at")
                .map_err(arg_error)?
                .unwrap_or(DEFAULT_THUMBNAIL_OFFSET_SECS);
            let output: Option<PathBuf> = args.opt_value_from_str("--output").map_err(arg_error)?;
            let uri: String = args.free_from_str().map_err(arg_error)?;
            finish(args)?;

            let data_uri = VideoService::headless()
                .generate_thumbnail_at(&uri, at)
                .await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &data_uri)?;
                    println!("wrote {} bytes to {}", data_uri.len(), path.display());
                }
                None => println!("{data_uri}"),
            }
        }
        "validate" => {
            let url: String = args.free_from_str().map_err(arg_error)?;
            finish(args)?;
            let service = VideoService::headless();
            let mime = format_from_url(&url);
            let reachable = service.validate_remote_url(&url).await;
            let playable = service.validate_format_support(mime);
            println!("url:       {url}");
            println!("reachable: {}", if reachable { "yes" } else { "no" });
            println!("format:    {mime} ({})", if playable { "playable" } else { "unsupported" });
        }
        "quality" => {
            let network: Option<NetworkType> =
                args.opt_value_from_str("--network").map_err(arg_error)?;
            let width: Option<u32> = args.opt_value_from_str("--width").map_err(arg_error)?;
            finish(args)?;
            let hints = DeviceHints {
                network,
                display_width: width.unwrap_or(0),
            };
            let quality = VideoService::headless().optimal_quality(hints);
            println!("{}", quality.label());
        }
        "config" => {
            finish(args)?;
            let config = config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        other => {
            return Err(Error::Config(format!("unknown command '{other}'\n\n{USAGE}")));
        }
    }
    Ok(())
}

fn finish(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!("unexpected arguments: {rest:?}")))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(pico_args::Arguments::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
