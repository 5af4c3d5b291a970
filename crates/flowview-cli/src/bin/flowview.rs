use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let out = flowview_cli::run_cli(&args, &flowview_cli::FilesystemBackend);
    if !out.stdout.is_empty() {
        print!("{}", out.stdout);
    }
    if !out.stderr.is_empty() {
        eprint!("{}", out.stderr);
    }
    std::process::exit(out.exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(flowview_cli::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
