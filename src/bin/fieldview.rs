//! Command-line driver: read a file, pick its layout, print the dump.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use fieldview::io::{read_file, IOLimits};
use fieldview::logging::{init_tracing, init_tracing_json};
use fieldview::{render_dump, AnsiPaint, Format, Paint, PlainPaint, ViewerConfig};
use tracing::error;

const USAGE: &str = "\
Usage: fieldview <file> [columns] [options]

Options:
  --columns <n>      bytes per row (default 16)
  --config <path>    JSON configuration file
  --no-color         plain text output
  --strict           fail when the layout does not cover the file exactly
  --layout-json      print the field layout as JSON instead of a dump
  --json-log         structured JSON logs on stderr";

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    columns: Option<usize>,
    config: Option<PathBuf>,
    no_color: bool,
    strict: bool,
    layout_json: bool,
    json_log: bool,
}

fn parse_columns(value: &str) -> Result<usize> {
    let n: usize = value
        .parse()
        .with_context(|| format!("invalid column count `{value}`"))?;
    if n == 0 {
        bail!("column count must be at least 1");
    }
    Ok(n)
}

fn parse_args<I: Iterator<Item = String>>(mut argv: I) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--columns" => {
                let value = argv.next().context("--columns needs a value")?;
                args.columns = Some(parse_columns(&value)?);
            }
            "--config" => {
                args.config = Some(argv.next().context("--config needs a path")?.into());
            }
            "--no-color" => args.no_color = true,
            "--strict" => args.strict = true,
            "--layout-json" => args.layout_json = true,
            "--json-log" => args.json_log = true,
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            _ if args.file.is_none() => args.file = Some(PathBuf::from(&arg)),
            _ if args.columns.is_none() => args.columns = Some(parse_columns(&arg)?),
            _ => bail!("unexpected argument `{arg}`"),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ViewerConfig::from_json_str(&text)?
        }
        None => ViewerConfig::default(),
    };
    if let Some(columns) = args.columns {
        config.dump.columns_per_row = columns;
    }
    config.dump.strict |= args.strict;
    config.dump.color &= !args.no_color;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let Some(file) = args.file.as_ref() else {
        println!("{USAGE}");
        return Ok(());
    };
    let config = load_config(&args)?;

    let bytes = read_file(file, &IOLimits::default())
        .with_context(|| format!("reading {}", file.display()))?;
    let format = Format::detect(file);
    let fields = format
        .layout(&bytes, &config.layout)
        .with_context(|| format!("deriving {format:?} layout of {}", file.display()))?;

    let mut stdout = std::io::stdout().lock();
    if args.layout_json {
        serde_json::to_writer_pretty(&mut stdout, &fields)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let painter: &dyn Paint = if config.dump.color {
        &AnsiPaint
    } else {
        &PlainPaint
    };
    let text = render_dump(&bytes, &fields, &config.dump, painter)?;
    stdout.write_all(text.as_bytes())?;
    writeln!(stdout, "{}", bytes.len())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("fieldview: {err:#}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if args.json_log {
        init_tracing_json();
    } else {
        init_tracing();
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fieldview failed");
            eprintln!("fieldview: {err:#}");
            ExitCode::FAILURE
        }
    }
}
