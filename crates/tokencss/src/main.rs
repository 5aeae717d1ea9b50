//! tokencss - design tokens to CSS.

fn main() {
    tokencss_cli::init_tracing();
    let code = tokencss_cli::run_cli(std::env::args_os());
    std::process::exit(code);
}
