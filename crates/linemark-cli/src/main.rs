use anyhow::{Context, Result, bail};
use linemark_config::Config;
use linemark_engine::{Converter, ElementSerializer, HtmlSerializer, Source};
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    /// `linemark -`: stdin to stdout.
    Stdio,
    /// `linemark <input> <output>`
    FileToFile { input: PathBuf, output: PathBuf },
    /// `linemark <input-or-glob>`: to stdout, or into the configured output directory.
    Files { pattern: String },
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [_, input] if input == "-" => Some(Command::Stdio),
        [_, pattern] => Some(Command::Files {
            pattern: pattern.clone(),
        }),
        [_, input, output] => Some(Command::FileToFile {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }),
        _ => None,
    }
}

/// An existing file is taken literally, even if its name contains glob
/// metacharacters. Anything else is expanded as a glob.
fn expand_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.is_file() {
        return Ok(vec![literal.to_path_buf()]);
    }

    let mut inputs = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("Invalid pattern '{pattern}'"))? {
        let path = entry?;
        if path.is_file() {
            inputs.push(path);
        }
    }
    if inputs.is_empty() {
        bail!("No files match '{pattern}'");
    }
    inputs.sort();
    Ok(inputs)
}

/// `<output_dir>/<input stem>.html`
fn target_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());
    output_dir.join(format!("{stem}.html"))
}

/// Streams each input into `sink` in order, one line at a time.
fn stream_inputs<S: ElementSerializer, W: Write>(
    converter: &mut Converter<S>,
    inputs: &[PathBuf],
    sink: &mut W,
) -> Result<()> {
    for input in inputs {
        converter.convert(Source::Path(input), sink)?;
    }
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<()> {
    let mut converter = Converter::with_options(HtmlSerializer, config.convert_options());

    match command {
        Command::Stdio => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            converter.convert_reader(stdin, &mut stdout)?;
        }
        Command::FileToFile { input, output } => {
            let written = converter.convert_file_to_file(&input, &output)?;
            log::info!(
                "{} -> {} ({written} bytes)",
                input.display(),
                output.display()
            );
        }
        Command::Files { pattern } => {
            let inputs = expand_inputs(&pattern)?;
            match &config.output_dir {
                Some(output_dir) => {
                    for input in &inputs {
                        let output = target_path(output_dir, input);
                        let written = converter.convert_file_to_file(input, &output)?;
                        log::info!(
                            "{} -> {} ({written} bytes)",
                            input.display(),
                            output.display()
                        );
                    }
                }
                None => stream_inputs(&mut converter, &inputs, &mut io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} <input.md|glob|-> [output.html]");
    eprintln!("  -            read markdown from stdin, write HTML to stdout");
    eprintln!("  input.md     convert to stdout, or into output_dir when configured");
    eprintln!(
        "Settings are read from {}",
        Config::config_path().display()
    );
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("linemark");

    let Some(command) = parse_args(&args) else {
        print_usage(program_name);
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(command, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
