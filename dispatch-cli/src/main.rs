//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = dispatch_cli::run() {
        eprintln!("dispatch: {err}");
        std::process::exit(1);
    }
}
