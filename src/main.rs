use clap::Parser;

use dark_guard::cli::{Cli, Commands};
use dark_guard::commands::{run_check, run_init, run_rules};
use dark_guard::logging::{self, Verbosity};
use dark_guard::output::ColorMode;

fn main() {
    let cli = Cli::parse();

    logging::init_subscriber(
        Verbosity::from_flags(cli.verbose, cli.quiet),
        ColorMode::from(cli.color).use_colors_on_stderr(),
    );

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
