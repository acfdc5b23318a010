// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use iced_rentals::app::{self, paths, Flags};
use iced_rentals::ui::theming::ThemeMode;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_rentals [OPTIONS] [CATALOG]

Arguments:
  [CATALOG]             Listing file (TOML) to display

Options:
  --lang <ID>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --theme <MODE>        light, dark or system
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let theme = args.opt_value_from_fn("--theme", |raw: &str| raw.parse::<ThemeMode>())?;
    let catalog_path = args.opt_free_from_str::<PathBuf>()?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(Flags {
        lang,
        catalog_path,
        config_dir,
        theme,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("Starting iced_rentals {}", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
