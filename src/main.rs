//! vectorkit CLI
//!
//! Inspect, format, encode and decode vectors from the command line.
//!
//! Usage:
//!     vectorkit show 3 4
//!     vectorkit format 1 1 --spec .3ep
//!     vectorkit encode 3 4
//!     vectorkit decode 6400000000000008400000000000001040
//!     vectorkit bench --count 100000 --dims 16

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use vectorkit::{CodecConfig, Components, Encoding, Vector, Vector2d, VectorError, VectorResult};

type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error("Cannot write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex input {input:?}: {reason}")]
    Hex { input: String, reason: String },

    #[error("Round trip changed vector {0}")]
    RoundTrip(usize),
}

impl CliError {
    fn hex(input: &str, reason: impl Into<String>) -> Self {
        CliError::Hex {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// vectorkit - immutable vectors with a byte codec and a format mini-language
#[derive(Parser)]
#[command(name = "vectorkit")]
#[command(version)]
#[command(about = "Inspect, format, encode and decode vectors", long_about = None)]
struct Cli {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show repr, str, magnitude, truthiness and hash
    Show {
        /// Components (two make a Vector2d)
        #[arg(required = true, allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Print a JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render with the format mini-language
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Format spec, e.g. ".2f" or ".3ep" for polar
        #[arg(short, long, default_value = "")]
        spec: String,
    },

    /// Encode to hex
    Encode {
        #[arg(allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Write single-precision components
        #[arg(long)]
        float: bool,
    },

    /// Decode hex produced by `encode`
    Decode {
        /// Hex string, tag byte first
        hex: String,

        /// Accept any known encoding, not just doubles
        #[arg(long)]
        lenient: bool,
    },

    /// Benchmark encode, decode and format
    Bench {
        /// Number of vectors
        #[arg(short, long, default_value = "100000")]
        count: usize,

        /// Components per vector
        #[arg(short, long, default_value = "2")]
        dims: usize,
    },
}

/// Either arity, picked by component count
enum AnyVector {
    Flat(Vector2d),
    Wide(Vector),
}

impl AnyVector {
    fn new(components: Vec<f64>) -> VectorResult<Self> {
        if components.len() == 2 {
            Ok(AnyVector::Flat(Vector2d::try_from(components)?))
        } else {
            Ok(AnyVector::Wide(Vector::new(components)?))
        }
    }

    fn decode(bytes: &[u8], config: &CodecConfig) -> VectorResult<Self> {
        let wide = Vector::from_bytes_with(bytes, config)?;
        match Vector2d::try_from(&wide) {
            Ok(flat) => Ok(AnyVector::Flat(flat)),
            Err(_) => Ok(AnyVector::Wide(wide)),
        }
    }
}

#[derive(Serialize)]
struct Report {
    repr: String,
    str: String,
    components: Vec<f64>,
    magnitude: f64,
    truthy: bool,
    hash: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    angle: Option<f64>,
}

impl Report {
    fn of<V: Components + std::fmt::Display>(v: &V, angle: Option<f64>) -> Self {
        Self {
            repr: v.repr(),
            str: v.to_string(),
            components: v.iter().collect(),
            magnitude: v.magnitude(),
            truthy: v.is_truthy(),
            hash: v.hash_value(),
            angle,
        }
    }
}

fn report(vector: &AnyVector) -> Report {
    match vector {
        AnyVector::Flat(v) => Report::of(v, Some(v.angle())),
        AnyVector::Wide(v) => Report::of(v, None),
    }
}

fn cmd_show(components: Vec<f64>, json: bool) -> CliResult<()> {
    let report = report(&AnyVector::new(components)?);

    if json {
        let text = serde_json::to_string_pretty(&report)?;
        println!("{}", text);
        return Ok(());
    }

    println!("repr:      {}", report.repr);
    println!("str:       {}", report.str);
    println!("magnitude: {}", report.magnitude);
    println!("truthy:    {}", report.truthy);
    println!("hash:      {}", report.hash);
    if let Some(angle) = report.angle {
        println!("angle:     {}", angle);
    }
    Ok(())
}

fn cmd_format(components: Vec<f64>, spec: &str) -> CliResult<()> {
    let text = match AnyVector::new(components)? {
        AnyVector::Flat(v) => v.format(spec)?,
        AnyVector::Wide(v) => v.format(spec)?,
    };
    println!("{}", text);
    Ok(())
}

fn cmd_encode(components: Vec<f64>, float: bool) -> CliResult<()> {
    let encoding = if float { Encoding::Float } else { Encoding::Double };
    let config = CodecConfig::new(encoding);
    let bytes = Vector::new(components)?.to_bytes_with(&config)?;
    tracing::info!(len = bytes.len(), ?encoding, "encoded vector");
    println!("{}", to_hex(&bytes));
    Ok(())
}

fn cmd_decode(hex: &str, lenient: bool) -> CliResult<()> {
    let bytes = from_hex(hex)?;
    let config = if lenient {
        CodecConfig::lenient()
    } else {
        CodecConfig::default()
    };
    match AnyVector::decode(&bytes, &config)? {
        AnyVector::Flat(v) => println!("{:?}", v),
        AnyVector::Wide(v) => println!("{:?}", v),
    }
    Ok(())
}

fn cmd_bench(count: usize, dims: usize) -> CliResult<()> {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                  VECTORKIT BENCHMARK                             ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Vectors: {:54} ║", count);
    println!("║  Dimensions: {:51} ║", dims);
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let mut rng = StdRng::seed_from_u64(42);
    let vectors = (0..count)
        .map(|_| Vector::new((0..dims).map(|_| rng.gen_range(-1000.0f64..1000.0))))
        .collect::<VectorResult<Vec<_>>>()?;

    let start = Instant::now();
    let encoded: Vec<Vec<u8>> = vectors.iter().map(|v| v.to_bytes()).collect();
    let encode_time = start.elapsed();

    let start = Instant::now();
    for (i, (bytes, original)) in encoded.iter().zip(&vectors).enumerate() {
        let decoded = Vector::from_bytes(bytes)?;
        if &decoded != original {
            return Err(CliError::RoundTrip(i));
        }
    }
    let decode_time = start.elapsed();

    let start = Instant::now();
    for v in &vectors {
        v.format(".3e")?;
    }
    let format_time = start.elapsed();

    let per = |d: std::time::Duration| d.as_secs_f64() * 1e9 / count.max(1) as f64;

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                         RESULTS                                  ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Encode: {:47.1} ns/vector ║", per(encode_time));
    println!("║  Decode: {:47.1} ns/vector ║", per(decode_time));
    println!("║  Format: {:47.1} ns/vector ║", per(format_time));
    println!("╚══════════════════════════════════════════════════════════════════╝");
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn from_hex(hex: &str) -> CliResult<Vec<u8>> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 {
        return Err(CliError::hex(hex, "odd number of hex digits"));
    }

    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let high = hex_nibble(hex, pair[0])?;
            let low = hex_nibble(hex, pair[1])?;
            Ok((high << 4) | low)
        })
        .collect()
}

fn hex_nibble(hex: &str, c: u8) -> CliResult<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CliError::hex(hex, format!("invalid hex character: {}", c as char))),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Show { components, json } => cmd_show(components, json),
        Commands::Format { components, spec } => cmd_format(components, &spec),
        Commands::Encode { components, float } => cmd_encode(components, float),
        Commands::Decode { hex, lenient } => cmd_decode(&hex, lenient),
        Commands::Bench { count, dims } => cmd_bench(count, dims),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
