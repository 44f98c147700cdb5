use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nlsh", version, about = "nlsh: a command shell that understands plain English")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the web terminal (POST /run, POST /autocomplete)
    Serve {
        /// Address to bind, overrides nlsh.toml / NLSH_HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overrides nlsh.toml / PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run a single command line and print its output
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}
