// SPDX-License-Identifier: MPL-2.0
use image_agl::application::port::{ElevationProvider, FixedElevation, NoElevationModel};
use image_agl::application::AglResolver;
use image_agl::config::{self, Config};
use image_agl::error::{Error, Result};
use image_agl::infrastructure::SrtmTiles;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn, Level};

const HELP: &str = "\
Compute the above-ground-level altitude of a geotagged image.

USAGE:
  image_agl [OPTIONS] <IMAGE>

OPTIONS:
  --dem-dir <DIR>      Directory of SRTM .hgt tiles for the ground elevation
  --ground <METERS>    Use a fixed ground elevation (overrides --dem-dir)
  --interpolate        Interpolate between elevation samples
  --config <PATH>      Read settings from PATH instead of the default location
  -v, --verbose        Log which branch was taken and intermediate values
  -h, --help           Print this help
";

#[derive(Debug, Default, PartialEq)]
struct Args {
    image: PathBuf,
    dem_dir: Option<PathBuf>,
    ground_m: Option<f64>,
    interpolate: bool,
    config_path: Option<PathBuf>,
    verbose: bool,
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        dem_dir: args.opt_value_from_str("--dem-dir")?,
        ground_m: args.opt_value_from_str("--ground")?,
        interpolate: args.contains("--interpolate"),
        config_path: args.opt_value_from_str("--config")?,
        verbose: args.contains(["-v", "--verbose"]),
        image: args.free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Args(format!("unexpected arguments: {remaining:?}")));
    }
    Ok(Some(parsed))
}

fn elevation_provider(args: &Args, config: &Config) -> Box<dyn ElevationProvider> {
    if let Some(ground_m) = args.ground_m {
        debug!("Using fixed ground elevation {ground_m:.2} m");
        return Box::new(FixedElevation::new(ground_m));
    }
    match args.dem_dir.as_ref().or(config.dem_dir.as_ref()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using SRTM tiles");
            Box::new(SrtmTiles::new(dir).with_interpolation(args.interpolate || config.interpolate()))
        }
        None => {
            debug!("No elevation model configured");
            Box::new(NoElevationModel)
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let loaded = match &args.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let level = if args.verbose || config.verbose() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = config_error {
        warn!("Ignoring configuration: {err}");
    }

    let resolver = AglResolver::new(elevation_provider(&args, &config));
    match resolver.resolve_file(&args.image) {
        Ok(result) => {
            let show = |value: Option<f64>| value.map_or_else(|| "none".to_string(), |v| v.to_string());
            println!("AGL (m): {:.2}", result.agl_m());
            println!("Lat: {}", show(result.latitude()));
            println!("Lon: {}", show(result.longitude()));
            println!("Source: {}", result.source());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            if let Some(position) = resolver.cache().last_position() {
                info!(
                    latitude = ?position.latitude,
                    longitude = ?position.longitude,
                    "Last extracted position"
                );
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_options() {
        let parsed = parse_args(args(&[
            "--dem-dir",
            "/srtm",
            "--ground",
            "420.5",
            "--interpolate",
            "--config",
            "/tmp/settings.toml",
            "-v",
            "DJI_0042.JPG",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(
            parsed,
            Args {
                image: PathBuf::from("DJI_0042.JPG"),
                dem_dir: Some(PathBuf::from("/srtm")),
                ground_m: Some(420.5),
                interpolate: true,
                config_path: Some(PathBuf::from("/tmp/settings.toml")),
                verbose: true,
            }
        );
    }

    #[test]
    fn image_is_required() {
        assert!(matches!(parse_args(args(&["-v"])), Err(Error::Args(_))));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(matches!(
            parse_args(args(&["a.jpg", "b.jpg"])),
            Err(Error::Args(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_ground() {
        assert!(parse_args(args(&["--ground", "high", "a.jpg"])).is_err());
    }

    #[test]
    fn fixed_ground_takes_precedence() {
        use image_agl::domain::geo::Coordinate;

        let parsed = Args {
            ground_m: Some(10.0),
            dem_dir: Some(PathBuf::from("/srtm")),
            ..Args::default()
        };
        let provider = elevation_provider(&parsed, &Config::default());
        let here = Coordinate::new(1.0, 1.0).unwrap();
        assert_eq!(provider.ground_elevation(here), Some(10.0));
    }

    #[test]
    fn no_model_without_dem_dir() {
        use image_agl::domain::geo::Coordinate;

        let provider = elevation_provider(&Args::default(), &Config::default());
        let here = Coordinate::new(1.0, 1.0).unwrap();
        assert_eq!(provider.ground_elevation(here), None);
    }
}
