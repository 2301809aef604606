use chess_attack_sim_core::session::INTRO;
use chess_attack_sim_core::Session;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with the board output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("{}", INTRO);
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("[ERROR] {}", e);
        process::exit(1);
    }
}
