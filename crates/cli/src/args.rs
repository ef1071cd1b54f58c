use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug, Clone)]
pub struct TubeArgs {
    /// Number of rings stacked along +Z.
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub rings: i64,

    /// Edge length of each ring and spacing between rings.
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub cube_size: f32,
}

#[derive(clap::Args, Debug)]
pub struct StlArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Output path for the stl file.
    #[arg(short, long)]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub tube: TubeArgs,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log build details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a tube and write it as a binary stl file.
    Stl(StlArgs),
    /// Build a tube and print the size of its buffers.
    Stats(StatsArgs),
}
