// SPDX-License-Identifier: MPL-2.0
use iced_contact::app::{self, paths, Flags};
use iced_contact::logging;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_contact [OPTIONS]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, nl)
  --config-dir <DIR>     Directory holding settings.toml
  --forms <FILE>         Forms file replacing the built-in forms
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        forms_file: args.opt_value_from_str::<_, PathBuf>("--forms")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
