use hexapi::cli::run_cli;

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
