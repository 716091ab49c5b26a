use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about)]
pub struct KumaSeedCli {
    /// Sets a custom config file; without it the compiled-in defaults are used
    #[clap(short, long)]
    pub config: Option<String>,
}
