use std::path::PathBuf;
use std::process;

use isosvg_server::{serve, ServerSettings};

const SETTINGS_ENV: &str = "ISOSVG_SETTINGS";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SETTINGS_ENV).ok())
        .map(PathBuf::from);

    let settings = match settings_path {
        Some(path) => match ServerSettings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Cannot load settings from {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ServerSettings::default(),
    };

    if let Err(e) = serve(&settings) {
        log::error!("{}", e);
        process::exit(1);
    }
}
