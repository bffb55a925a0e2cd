use std::env;
use std::error::Error;
use std::io::{self, Write};

use reportstream::StreamFactory;

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  reportstream_echo <specifier>");
    eprintln!();
    eprintln!("Copies stdin to the stream named by <specifier>:");
    eprintln!("  ''        stdout");
    eprintln!("  %debug    debug console");
    eprintln!("  <path>    file (created or truncated)");
    std::process::exit(1);
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let specifier = match args.next() {
        Some(arg) => arg,
        None => return Err("missing specifier argument".into()),
    };
    if args.next().is_some() {
        return Err("too many arguments".into());
    }

    let factory = StreamFactory::default();
    let mut out = factory.make(&specifier)?;
    tracing::info!(kind = %out.kind(), "copying stdin");

    let copied = io::copy(&mut io::stdin().lock(), out.stream())?;
    out.flush()?;
    tracing::info!(bytes = copied, "done");

    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(e) = run() {
        eprintln!("reportstream_echo error: {e}");
        print_usage_and_exit();
    }
}
