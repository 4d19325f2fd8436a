// SPDX-License-Identifier: MPL-2.0
//! Zen-cat entry point: logging setup, argument parsing and app bootstrap.

use zen_cat::app::{self, App, Flags};

const HELP: &str = "\
Zen-cat - IT that doesn't disturb

USAGE:
  zen_cat [OPTIONS]

OPTIONS:
  --lang <ru|en>        Start in the given language
  --config-dir <DIR>    Read settings.toml from DIR
  -h, --help            Print this help and exit

ENVIRONMENT:
  ZEN_CAT_CONFIG_DIR    Config directory used when --config-dir is absent
  RUST_LOG              Log filter (default: info,zen_cat=debug)
";

fn main() -> iced::Result {
    init_logging();

    let flags = parse_args();
    let app = match App::new(flags) {
        Ok(app) => app,
        Err(err) => {
            log::error!("cannot start: {err}");
            std::process::exit(1);
        }
    };

    app::run(app)
}

fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,zen_cat=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

fn parse_args() -> Flags {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Use --help for usage information");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    flags
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
