mod commands;
mod terminal;

use commands::{CommandLine, Commands, compare, decode, parse};
use netparam_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        uppercase: commands.upper,
    };

    print::banner(&cfg);

    match commands.command {
        Commands::Parse { addresses } => {
            print::header("parsing addresses", &cfg);
            parse::parse(&addresses, &cfg)
        }
        Commands::Decode { hex } => {
            print::header("decoding binary", &cfg);
            decode::decode(hex.as_deref(), &cfg)
        }
        Commands::Compare { first, second } => {
            print::header("comparing addresses", &cfg);
            compare::compare(&first, &second, &cfg)
        }
    }
}
