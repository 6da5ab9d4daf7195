use braille_art::cli::{self, Args, CliError, Command};
use braille_art::config::Config;
use clap::Parser;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Render(ref render) => {
            let config = Config::load(args.config.as_deref())?;
            cli::run_render(render, &config)?;
        }
        Command::Charsets => {
            let config = Config::load(args.config.as_deref())?;
            cli::list_charsets(&config)?;
        }
        Command::Config { action } => {
            cli::handle_config_action(action, args.config.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
