use uuid5::utils::logger;

fn main() {
    logger::init_cli_logger();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = uuid5::app::run(std::env::args_os(), &mut stdout) {
        tracing::debug!("uuid5 failed: {} (exit code {})", e, e.exit_code());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
