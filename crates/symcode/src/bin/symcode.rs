//! Command-line front end: encode one symbol and write it to a file.

use clap::Parser;
use log::LevelFilter;

use symcode::{ops, InputMode, Symbol};

#[derive(Parser, Debug)]
#[command(name = "symcode", version, about = "Barcode encoding and rendering")]
struct Args {
    /// Numeric symbology id (47 = MSI Plessey, 8 = Code 39).
    #[arg(short = 'b', long, default_value_t = 47)]
    barcode: u32,

    /// Data to encode. Mutually exclusive with --input.
    #[arg(short, long, conflicts_with = "input")]
    data: Option<String>,

    /// Read the data bytes from this file instead.
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,

    /// Output file; format is inferred from the extension.
    #[arg(short, long, default_value = "out.png")]
    output: String,

    /// Treat input as bracketed GS1 application-identifier data.
    #[arg(long)]
    gs1: bool,

    /// Symbology-specific option (check-digit policy for the linear
    /// encoders).
    #[arg(long, default_value_t = 0)]
    option_2: i32,

    /// Bar height in modules (0 selects the default).
    #[arg(long, default_value_t = 0)]
    height: i32,

    /// Pixels per module.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Output rotation in degrees (0, 90, 180 or 270).
    #[arg(long, default_value_t = 0)]
    rotate: i32,

    /// Suppress the human-readable text.
    #[arg(long)]
    no_hrt: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = symcode::init_with_level(level);

    let mut symbol = Symbol::new();
    symbol.symbology = args.barcode;
    symbol.outfile = args.output;
    symbol.option_2 = args.option_2;
    symbol.height = args.height;
    symbol.scale = args.scale;
    symbol.show_hrt = !args.no_hrt;
    if args.gs1 {
        symbol.input_mode = InputMode::Gs1;
    }

    let result = match (&args.data, &args.input) {
        (Some(data), None) => ops::encode_and_print(&mut symbol, data.as_bytes(), args.rotate),
        (None, Some(path)) => ops::encode_file_and_print(&mut symbol, path, args.rotate),
        _ => {
            eprintln!("error: either --data or --input is required");
            return std::process::ExitCode::from(2);
        }
    };

    match result {
        Ok(status) if status.is_warning() => {
            eprintln!("warning: {}", status.message);
            std::process::ExitCode::SUCCESS
        }
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(u8::try_from(err.status()).unwrap_or(u8::MAX))
        }
    }
}
