use std::error::Error;
use std::io::{self, BufWriter, Write};

use backread::cli::{Count, InputFiles};
use backread::{BackReaderBuilder, ReaderOptions};
use sarge::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  backread --file <path> [--file <path> ...] [--chunk-size <bytes>] [--lines <n>] [--config <options.yaml>]"
    );
    eprintln!();
    eprintln!("Prints the lines of each file from the last one to the first.");
    eprintln!("  -f, --file <path>          File to read; repeatable, or comma-separated");
    eprintln!("  -c, --chunk-size <bytes>   Bytes read per backward step (default 4096)");
    eprintln!("  -n, --lines <n>            Stop after <n> lines per file");
    eprintln!("  -C, --config <file>        YAML file with `chunk_size` and `terminator`");
}

struct Args {
    options: ReaderOptions,
    lines: Option<usize>,
    files: Vec<String>,
}

enum Command {
    Help,
    Read(Args),
}

fn parse_args() -> Result<Command, Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let help_ref = reader.add::<bool>(tag::both('h', "help"));
    let files_ref = reader.add::<InputFiles>(tag::both('f', "file"));
    let chunk_ref = reader.add::<Count>(tag::both('c', "chunk-size"));
    let lines_ref = reader.add::<Count>(tag::both('n', "lines"));
    let config_ref = reader.add::<String>(tag::both('C', "config"));

    let args = reader.parse()?;

    if let Some(Ok(true)) = help_ref.get(&args) {
        return Ok(Command::Help);
    }

    let mut options = match config_ref.get(&args) {
        Some(Ok(path)) => ReaderOptions::from_yaml_str(&std::fs::read_to_string(&path)?)?,
        Some(Err(e)) => return Err(format!("--config: {e:?}").into()),
        None => ReaderOptions::default(),
    };

    // The command-line chunk size wins over the config file.
    match chunk_ref.get(&args) {
        Some(Ok(Count(chunk_size))) => options = options.with_chunk_size(chunk_size),
        Some(Err(e)) => return Err(format!("--chunk-size: {e}").into()),
        None => {}
    }

    let lines = match lines_ref.get(&args) {
        Some(Ok(Count(n))) => Some(n),
        Some(Err(e)) => return Err(format!("--lines: {e}").into()),
        None => None,
    };

    let files = match files_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("InputFiles parsing is infallible"),
        None => InputFiles::default(),
    };
    if files.is_empty() {
        return Err("missing --file".into());
    }

    Ok(Command::Read(Args {
        options,
        lines,
        files: files.0,
    }))
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = match parse_args()? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Read(args) => args,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for file in &args.files {
        let reader = BackReaderBuilder::new()
            .with_options(args.options)
            .open(file)?;
        let limit = args.lines.unwrap_or(usize::MAX);
        for line in reader.take(limit) {
            let line = line?;
            writeln!(out, "{}", line.content())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("backread error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
