use clap::Parser;

use streamchart::cli::{Cli, Commands};
use streamchart::commands::{run_config, run_init, run_inspect, run_render};
use streamchart::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Inspect(args) => run_inspect(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
