use clap::Parser;
use facetnav_cli::cli::Cli;
use facetnav_cli::error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → RUST_LOG if set, otherwise "info"
    //   default   → "off"; RUST_LOG is ignored so stray developer settings
    //               never mix log lines into command output.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr, so piping stdout must not strip their color;
    // only the flag and NO_COLOR turn it off.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = facetnav_cli::run(cli) {
        exit_with_error(e);
    }
}
