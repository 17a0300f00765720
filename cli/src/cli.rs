use clap::Parser;

#[derive(Parser)]
#[command(name = "clipmark")]
#[command(about = "Build review markup from the clipboard history", long_about = None)]
pub struct Cli {
    /// Stream name placed at the front of the snippet
    pub stream: String,

    /// Show timing/latency information
    #[arg(long)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
