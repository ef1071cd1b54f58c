use clap::Parser;

mod args;
mod tube;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match args.command {
        args::Commands::Stl(stl) => tube::stl_command(stl),
        args::Commands::Stats(stats) => tube::stats_command(stats),
    }
}
