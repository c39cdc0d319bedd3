use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use beatcards::playback::tone_schedule;
use beatcards::{build_view, lint, parse, CardsError, DisplayMode, Settings, SongBook};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const USAGE: &str = "Usage: beatcards [options] <song-file | - | @name>
Options:
  --width <px>        container width (default 800)
  --unit <px>         unit size, overrides the settings file
  --config <file>     YAML settings file
  --mode <mode>       static | dynamic
  --active <index>    active card for dynamic mode
  --lint              print diagnostics instead of the view
  --tones             print the tone schedule instead of the view
  --list              list embedded songs
  --verbose           debug logging on stderr";

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    width: Option<f64>,
    unit: Option<f64>,
    config: Option<String>,
    mode: Option<DisplayMode>,
    active: usize,
    lint: bool,
    tones: bool,
    list: bool,
    verbose: bool,
}

fn usage_exit(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    let value = value.unwrap_or_else(|| usage_exit(&format!("Missing value for {}", flag)));
    value
        .parse()
        .unwrap_or_else(|_| usage_exit(&format!("Invalid value for {}: {}", flag, value)))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Options {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => options.width = Some(parse_number("--width", args.next())),
            "--unit" => options.unit = Some(parse_number("--unit", args.next())),
            "--active" => options.active = parse_number("--active", args.next()),
            "--config" => {
                options.config = Some(
                    args.next()
                        .unwrap_or_else(|| usage_exit("Missing value for --config")),
                )
            }
            "--mode" => {
                options.mode = match args.next().as_deref() {
                    Some("static") => Some(DisplayMode::Static),
                    Some("dynamic") => Some(DisplayMode::Dynamic),
                    other => usage_exit(&format!("Invalid mode: {}", other.unwrap_or(""))),
                }
            }
            "--lint" => options.lint = true,
            "--tones" => options.tones = true,
            "--list" => options.list = true,
            "--verbose" => options.verbose = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            flag if flag.starts_with("--") => usage_exit(&format!("Unknown option: {}", flag)),
            input => {
                if options.input.is_some() {
                    usage_exit("Only one song may be given");
                }
                options.input = Some(input.to_string());
            }
        }
    }

    options
}

fn init_logging(verbose: bool) -> Result<(), CardsError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| CardsError::ConfigError(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| CardsError::ConfigError(e.to_string()))?;
    Ok(())
}

fn load_settings(options: &Options) -> Result<Settings, CardsError> {
    let mut settings = match &options.config {
        Some(path) => Settings::from_yaml(&fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    if let Some(unit) = options.unit {
        settings.unit_size = unit;
    }
    if let Some(mode) = options.mode {
        settings.display_mode = mode;
    }
    Ok(settings.normalized())
}

fn read_song(input: &str) -> Result<String, CardsError> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    if let Some(name) = input.strip_prefix('@') {
        return match beatcards_songs::get_song(name) {
            Some(song) => Ok(song.content),
            None => Err(CardsError::UnknownSong(name.to_string())),
        };
    }
    fs::read_to_string(input).map_err(|e| CardsError::Io(format!("{}: {}", input, e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CardsError> {
    serde_json::to_string_pretty(value).map_err(|e| CardsError::Io(e.to_string()))
}

fn run(options: Options) -> Result<i32, CardsError> {
    if options.list {
        println!("{}", to_json(&SongBook::builtin().names())?);
        return Ok(0);
    }

    let input = options
        .input
        .as_deref()
        .unwrap_or_else(|| usage_exit("Missing song"));
    let settings = load_settings(&options)?;
    let source = read_song(input)?;

    if options.lint {
        let diagnostics = lint(&source);
        println!("{}", to_json(&diagnostics)?);
        return Ok(if diagnostics.is_empty() { 0 } else { 1 });
    }

    if options.tones {
        let notes = parse(&source);
        println!("{}", to_json(&tone_schedule(&notes, settings.tempo))?);
        return Ok(0);
    }

    let width = options.width.unwrap_or(800.0);
    let view = build_view(&source, &settings, width, options.active);
    log::debug!("{} cards, {} rows", view.notes.len(), view.rows.len());
    println!("{}", to_json(&view)?);
    Ok(0)
}

fn main() {
    let options = parse_args(env::args().skip(1));

    if let Err(e) = init_logging(options.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match run(options) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
