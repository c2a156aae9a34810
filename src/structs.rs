use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Generate the CA key and certificate when they do not exist yet.
    #[arg(long)]
    pub generate_ca: bool,

    /// List hostnames with a pending certificate request.
    #[arg(long)]
    pub list: bool,

    /// Sign the pending certificate request of one hostname.
    #[arg(long, value_name = "HOSTNAME")]
    pub sign: Option<String>,

    /// Sign every pending certificate request.
    #[arg(long)]
    pub sign_all: bool,
}
