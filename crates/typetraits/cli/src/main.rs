//! typetraits CLI entry point

fn main() {
    if let Err(e) = typetraits_cli::run() {
        typetraits_cli::print_error(&e.to_string());
        std::process::exit(1);
    }
}
