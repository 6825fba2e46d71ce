// Command-line front end for keyshift.
//
// Subcommands map one-to-one onto the library surface: `encode` and
// `decode` transcode a whole input stream, `demo` runs a sample through a
// fresh Transcoder, `config` prints the alphabet and defaults.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use log::{debug, info};

use crate::alphabet::{ALPHABET_LEN, REFERENCE_ALPHABET};
use crate::codec;
use crate::key::{DEFAULT_OFFSET_CHAR, OffsetKey};
use crate::transcoder::Transcoder;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const DEMO_TEXT: &str = "RQPp";

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Offset-keyed substitution transcoder.
#[derive(Parser, Debug)]
#[command(
    name = "keyshift",
    version,
    about = "Offset-keyed substitution transcoder (obfuscation, not encryption)",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode an input stream.
    Encode(EncodeArgs),
    /// Decode an input stream, reading the key from its first symbol.
    Decode(DecodeArgs),
    /// Encode and decode a sample string with a fresh transcoder.
    Demo(DemoArgs),
    /// Print the reference alphabet and defaults.
    Config,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Offset character (a single symbol from the reference alphabet).
    #[arg(long, short = 'k', default_value_t = OffsetKey::default())]
    offset: OffsetKey,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Reject ciphertext whose key symbol is outside the reference alphabet.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Sample plaintext.
    #[arg(default_value = DEMO_TEXT)]
    text: String,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    Demo,
    Config,
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    offset: OffsetKey,
    strict: bool,
    demo_text: String,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl Options {
    fn new(command: Command, cli_flags: (bool, bool, u8, bool)) -> Self {
        let (force, quiet, verbose, json_output) = cli_flags;
        Self {
            command,
            use_stdout: false,
            force,
            quiet,
            verbose,
            json_output,
            offset: OffsetKey::default(),
            strict: false,
            demo_text: DEMO_TEXT.to_string(),
            input_file: None,
            output_file: None,
        }
    }

    fn with_io(mut self, io: IoArgs) -> Self {
        self.use_stdout = io.stdout;
        self.input_file = io.input.or(io.input_pos);
        self.output_file = io.output.or(io.output_pos);
        self
    }
}

fn resolve_options(cli: Cli) -> Options {
    let flags = (cli.force, cli.quiet, cli.verbose.min(2), cli.json_output);

    match cli.command {
        Cmd::Encode(args) => Options {
            offset: args.offset,
            ..Options::new(Command::Encode, flags).with_io(args.io)
        },
        Cmd::Decode(args) => Options {
            strict: args.strict,
            ..Options::new(Command::Decode, flags).with_io(args.io)
        },
        Cmd::Demo(args) => Options {
            demo_text: args.text,
            ..Options::new(Command::Demo, flags)
        },
        Cmd::Config => Options::new(Command::Config, flags),
    }
}

fn log_filter(opts: &Options) -> &'static str {
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>) -> Result<String, String> {
    let mut text = String::new();
    match path {
        Some(path) => File::open(path)
            .and_then(|mut f| f.read_to_string(&mut text))
            .map_err(|e| format!("input file: {}: {e}", path.display()))?,
        None => io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| format!("stdin: {e}"))?,
    };
    Ok(text)
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, String> {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                return Err(format!(
                    "output file exists, use -f to overwrite: {}",
                    path.display()
                ));
            }
            let f = File::create(path)
                .map_err(|e| format!("output file: {}: {e}", path.display()))?;
            Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f)))
        }
    }
}

/// Split off one trailing line ending so it is not transcoded.
fn split_line_ending(text: &str) -> (&str, &str) {
    if let Some(body) = text.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = text.strip_suffix('\n') {
        (body, "\n")
    } else {
        (text, "")
    }
}

fn write_output(opts: &Options, body: &str, line_ending: &str) -> Result<(), String> {
    let mut out = open_output(opts)?;
    let written: io::Result<()> = (|| {
        out.write_all(body.as_bytes())?;
        out.write_all(line_ending.as_bytes())?;
        out.flush()
    })();
    written.map_err(|e| format!("write error: {e}"))
}

fn print_stats(opts: &Options, key: Option<char>, input_chars: usize, output_chars: usize) {
    if !opts.json_output {
        return;
    }
    let command = match opts.command {
        Command::Encode => "encode",
        Command::Decode => "decode",
        Command::Demo => "demo",
        Command::Config => "config",
    };
    let stats = serde_json::json!({
        "command": command,
        "key": key.map(String::from),
        "input_chars": input_chars,
        "output_chars": output_chars,
    });
    eprintln!("{stats}");
}

fn fail(msg: impl std::fmt::Display) -> i32 {
    eprintln!("keyshift: {msg}");
    1
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let text = match read_input(opts.input_file.as_deref()) {
        Ok(text) => text,
        Err(e) => return fail(e),
    };
    let (body, line_ending) = split_line_ending(&text);

    let encoded = codec::encode(opts.offset, body);
    debug!("encode: offset {}", opts.offset);

    if let Err(e) = write_output(opts, &encoded, line_ending) {
        return fail(e);
    }
    print_stats(
        opts,
        (!body.is_empty()).then_some(opts.offset.symbol()),
        body.chars().count(),
        encoded.chars().count(),
    );
    0
}

fn cmd_decode(opts: &Options) -> i32 {
    let text = match read_input(opts.input_file.as_deref()) {
        Ok(text) => text,
        Err(e) => return fail(e),
    };
    let (body, line_ending) = split_line_ending(&text);

    let decoded = if opts.strict {
        match codec::decode_strict(body) {
            Ok(decoded) => decoded,
            Err(e) => return fail(e),
        }
    } else {
        codec::decode(body)
    };
    if let Some(key) = decoded.key {
        info!("recovered offset character {key:?}");
    }

    if let Err(e) = write_output(opts, &decoded.plaintext, line_ending) {
        return fail(e);
    }
    print_stats(
        opts,
        decoded.key,
        body.chars().count(),
        decoded.plaintext.chars().count(),
    );
    0
}

fn cmd_demo(opts: &Options) -> i32 {
    let mut transcoder = Transcoder::new();

    let encoded = transcoder.encode(&opts.demo_text);
    println!("Encoded: {encoded}");

    let decoded = transcoder.decode(&encoded);
    println!("Decoded: {decoded}");

    print_stats(
        opts,
        Some(transcoder.offset_char()),
        opts.demo_text.chars().count(),
        encoded.chars().count(),
    );
    0
}

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("keyshift version {version} (Rust)");
    eprintln!("ALPHABET={REFERENCE_ALPHABET}");
    eprintln!("ALPHABET_LEN={ALPHABET_LEN}");
    eprintln!("DEFAULT_OFFSET={DEFAULT_OFFSET_CHAR}");
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(&opts)))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Warn if -c overrides output filename.
    if opts.use_stdout
        && !opts.quiet
        && let Some(path) = &opts.output_file
    {
        eprintln!(
            "keyshift: warning: -c option overrides output filename: {}",
            path.display()
        );
    }
    if opts.use_stdout {
        opts.output_file = None;
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::Demo => cmd_demo(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_opts(args: &[&str]) -> Options {
        let argv: Vec<String> = std::iter::once("keyshift".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let cli = Cli::try_parse_from(argv).expect("cli parse failed");
        resolve_options(cli)
    }

    #[test]
    fn encode_subcommand_maps_correctly() {
        let opts = parse_opts(&["encode", "--offset", "X", "in.txt", "out.txt"]);
        assert_eq!(opts.command, Command::Encode);
        assert_eq!(opts.offset.symbol(), 'X');
        assert_eq!(opts.input_file, Some(PathBuf::from("in.txt")));
        assert_eq!(opts.output_file, Some(PathBuf::from("out.txt")));
        assert!(!opts.use_stdout);
    }

    #[test]
    fn encode_defaults_to_b() {
        let opts = parse_opts(&["encode"]);
        assert_eq!(opts.offset, OffsetKey::default());
        assert!(opts.input_file.is_none());
        assert!(opts.output_file.is_none());
    }

    #[test]
    fn invalid_offset_is_rejected_by_parser() {
        let argv = ["keyshift", "encode", "--offset", "!"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["keyshift", "encode", "--offset", "AB"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn decode_subcommand_maps_correctly() {
        let opts = parse_opts(&[
            "--quiet", "decode", "--strict", "--input", "in.txt", "--output", "out.txt",
        ]);
        assert_eq!(opts.command, Command::Decode);
        assert!(opts.strict);
        assert!(opts.quiet);
        assert_eq!(opts.input_file, Some(PathBuf::from("in.txt")));
        assert_eq!(opts.output_file, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn demo_text_defaults() {
        assert_eq!(parse_opts(&["demo"]).demo_text, "RQPp");
        assert_eq!(parse_opts(&["demo", "HELLO"]).demo_text, "HELLO");
    }

    #[test]
    fn global_stdio_and_force_flags() {
        let opts = parse_opts(&["--force", "encode", "--stdout", "in", "out"]);
        assert!(opts.use_stdout);
        assert!(opts.force);
    }

    #[test]
    fn verbose_is_capped() {
        let opts = parse_opts(&["-v", "-v", "-v", "encode"]);
        assert_eq!(opts.verbose, 2);
        assert_eq!(log_filter(&opts), "debug");
        assert_eq!(log_filter(&parse_opts(&["encode"])), "warn");
        assert_eq!(log_filter(&parse_opts(&["-q", "encode"])), "error");
    }

    #[test]
    fn config_command_maps() {
        assert_eq!(parse_opts(&["config"]).command, Command::Config);
    }

    #[test]
    fn line_ending_split() {
        assert_eq!(split_line_ending("RQPp\n"), ("RQPp", "\n"));
        assert_eq!(split_line_ending("RQPp\r\n"), ("RQPp", "\r\n"));
        assert_eq!(split_line_ending("RQPp"), ("RQPp", ""));
        assert_eq!(split_line_ending("A\n\n"), ("A\n", "\n"));
        assert_eq!(split_line_ending(""), ("", ""));
    }
}
