//! Draws one of the app logo styles into the fixed icon set
#![deny(warnings)]

use icondraw::{FontBook, IconStyle, generate};
use std::{env, path::PathBuf, process::exit};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

#[derive(Debug)]
struct Args {
    style: IconStyle,
    out_dir: PathBuf,
}

impl Args {
    fn parse() -> Args {
        let mut result = Args {
            style: IconStyle::Microphone,
            out_dir: PathBuf::from("."),
        };
        let mut args = env::args();
        let cmd = args.next().unwrap_or_else(|| "icondraw".to_string());
        let mut positional = 0;
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => usage(&cmd),
                "-o" => match args.next() {
                    Some(dir) => result.out_dir = PathBuf::from(dir),
                    None => {
                        eprintln!("-o requires an argument");
                        usage(&cmd);
                    }
                },
                name => {
                    positional += 1;
                    if positional > 1 {
                        eprintln!("unexpected positional argument: {}", name);
                        usage(&cmd);
                    }
                    match IconStyle::from_name(name) {
                        Some(style) => result.style = style,
                        None => {
                            eprintln!("unknown style: {}", name);
                            usage(&cmd);
                        }
                    }
                }
            }
        }
        result
    }
}

fn usage(cmd: &str) -> ! {
    eprintln!("Draws one of the app logo styles into the fixed icon set");
    eprintln!("\nUSAGE:");
    eprintln!("    {} [-o <dir>] [style]", cmd);
    eprintln!("\nARGS:");
    eprintln!("    -o <dir>   output directory (default: current directory)");
    eprintln!("    [style]    one of: microphone (default), blue, ai, feature");
    exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let fonts = FontBook::load();
    for emitted in generate(args.style, &args.out_dir, &fonts) {
        match &emitted.result {
            Ok(()) => println!(
                "✓ {} ({}x{})",
                emitted.path.display(),
                emitted.size,
                emitted.size
            ),
            Err(error) => eprintln!("✗ {}: {}", emitted.path.display(), error),
        }
    }
}
