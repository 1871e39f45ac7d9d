// SPDX-License-Identifier: MPL-2.0
use iced_turntable::app::{self, Flags};

const HELP: &str = "\
iced_turntable - 360° frame-sequence viewer

USAGE:
  iced_turntable [OPTIONS]

OPTIONS:
  --object <id>        Object whose frames are shown
  --frames <n>         Number of frames (default 36)
  --start <i>          First frame shown, 1-based
  --template <url>     Frame location, e.g. https://cdn/{object}/{index:02}.jpg
  --auto-rotate        Start rotating immediately
  --no-fullscreen      Hide the fullscreen control
  --lang <code>        UI language (en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("[WARN] Invalid arguments: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    for unused in args.finish() {
        eprintln!("[WARN] Ignoring argument {}", unused.to_string_lossy());
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        auto_rotate: args.contains("--auto-rotate"),
        no_fullscreen: args.contains("--no-fullscreen"),
        lang: args.opt_value_from_str("--lang")?,
        object: args.opt_value_from_str("--object")?,
        frames: args.opt_value_from_str("--frames")?,
        start: args.opt_value_from_str("--start")?,
        template: args.opt_value_from_str("--template")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
