//! Resizes a source image into the fixed icon set
#![deny(warnings)]

use icondraw::{RESIZE_OUTPUTS, open_source, update_icons};
use std::{env, path::Path, process::exit};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn usage(cmd: &str) -> ! {
    eprintln!("Resizes a source image into the fixed icon set");
    eprintln!("\nUSAGE:");
    eprintln!("    {} <source-image>", cmd);
    eprintln!("\nThis will create:");
    for (name, size) in RESIZE_OUTPUTS {
        eprintln!("    {} ({}x{}px)", name, size, size);
    }
    exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();
    let cmd = args.next().unwrap_or_else(|| "icon-resize".to_string());
    let source_path = match (args.next(), args.next()) {
        (Some(path), None) if path != "-h" && path != "--help" => path,
        _ => usage(&cmd),
    };

    let source = match open_source(Path::new(&source_path)) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: {}", error);
            exit(1);
        }
    };

    for emitted in update_icons(&source, Path::new(".")) {
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
