use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use spyglass_core::types::{StackFrameRecord, StackTrace, Value};
use spyglass_core::{Introspector, LineSink, RenderConfig, Sink, SpyglassResult, WriterSink};
use spyglass_utils::{
    LogFormat, LogLevel, LoggingGuard, debug, info, init_logging, init_logging_with_file, init_logging_with_level,
};

mod sample;

/// Dump object state and render readable, grouped stack traces.
#[derive(Parser, Debug)]
#[command(name = "spyglass")]
#[command(version)]
#[command(about = "Dump object state and render readable, grouped stack traces", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Format stack frames read from a file (one frame per line)
    Stack
    {
        /// File to read; standard input when omitted
        file: Option<PathBuf>,
        /// Demangle Rust symbols before grouping
        #[arg(long, default_value_t = false)]
        demangle: bool,
        /// Qualifier separator used to group frames
        #[arg(short, long, default_value = ".")]
        separator: String,
        /// Write the exact block format, without line breaks between entries
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Capture and format this process's own stack
    Backtrace
    {
        /// Write the exact block format, without line breaks between entries
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Dump the fields and methods of a built-in sample object
    Sample
    {
        /// Assign this number to every compatible field before dumping
        #[arg(long)]
        assign: Option<i64>,
        /// Write the exact block format, without line breaks between entries
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
}

fn main()
{
    let cli = Cli::parse();

    // --log-level beats RUST_LOG; otherwise WARN unless RUST_LOG says otherwise
    let logging = match (cli.log_level, cli.log_file.as_deref()) {
        (Some(level), log_file) => init_logging_with_level(level, LogFormat::Pretty, log_file),
        (None, Some(log_file)) => init_logging_with_file(Some(log_file)),
        (None, None) => init_logging(),
    };
    let _guard: LoggingGuard = match logging {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Commands) -> SpyglassResult<()>
{
    let stdout = io::stdout();

    match command {
        Commands::Stack {
            file,
            demangle,
            separator,
            raw,
        } => {
            let frames = match &file {
                Some(path) => read_frames_from_path(path)?,
                None => read_frames(io::stdin().lock())?,
            };
            info!("Formatting {} frames", frames.len());

            let frames: Vec<StackFrameRecord> = if demangle {
                frames.iter().map(StackFrameRecord::demangled).collect()
            } else {
                frames
            };

            let introspector = Introspector::with_config(RenderConfig::default().with_qualifier_separator(separator));
            with_sink(stdout.lock(), raw, |sink| introspector.write_stack(&frames, Some(sink)))
        }
        Commands::Backtrace { raw } => {
            let trace = StackTrace::capture();
            debug!("Captured {} frames", trace.len());

            let introspector = Introspector::with_config(RenderConfig::default().with_qualifier_separator("::"));
            with_sink(stdout.lock(), raw, |sink| introspector.write_stack(trace.frames(), Some(sink)))
        }
        Commands::Sample { assign, raw } => with_sink(stdout.lock(), raw, |sink| write_sample(assign, sink)),
    }
}

/// Dump the sample object, after assigning `assign` to its compatible
/// fields when given.
fn write_sample(assign: Option<i64>, sink: &mut dyn Sink) -> SpyglassResult<()>
{
    let mut session = sample::session()?;
    let introspector = Introspector::new();

    if let Some(number) = assign {
        let value: Arc<dyn Value> = Arc::new(number);
        introspector.write_assignments(&value, &mut session, Some(&mut *sink))?;
        sink.end_block(&introspector.config().newline)?;
    }
    introspector.write_fields(&session, None, Some(&mut *sink))?;
    introspector.write_methods(&sample::session_type()?, None, Some(sink))
}

/// Run `write` against stdout, raw or one entry per line.
fn with_sink<W, F>(out: W, raw: bool, write: F) -> SpyglassResult<()>
where
    W: io::Write,
    F: FnOnce(&mut dyn Sink) -> SpyglassResult<()>,
{
    if raw {
        write(&mut WriterSink::new(out))
    } else {
        write(&mut LineSink::new(out))
    }
}

fn read_frames_from_path(path: &Path) -> SpyglassResult<Vec<StackFrameRecord>>
{
    let file = File::open(path)?;
    Ok(read_frames(BufReader::new(file))?)
}

/// Read one frame per non-blank line.
///
/// Leading whitespace and a leading `at ` (as printed by JVM stack traces)
/// are stripped.
fn read_frames(reader: impl BufRead) -> io::Result<Vec<StackFrameRecord>>
{
    let mut frames = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        let text = text.strip_prefix("at ").unwrap_or(text);
        if !text.is_empty() {
            frames.push(StackFrameRecord::new(text));
        }
    }
    Ok(frames)
}
