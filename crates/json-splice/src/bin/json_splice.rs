//! `json-splice`: apply a JSON Patch to a document.
//!
//! Usage:
//!   json-splice [--strict-paths] '<patch-array-json>'
//!
//! The document is read from stdin and the patched document is written to
//! stdout. Set `RUST_LOG=json_splice=trace` to see each operation.

use std::io::{self, Read, Write};

use json_splice::json_cli::{apply_json_patch, parse_args};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match apply_json_patch(buf.trim(), &args.patch, &args.options) {
        Ok(result) => {
            let mut out = io::stdout().lock();
            if let Err(e) = writeln!(out, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
