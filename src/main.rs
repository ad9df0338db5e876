use clap::{Parser, Subcommand};
use copydrive::AppError;

#[derive(Parser)]
#[command(name = "copydrive")]
#[command(version)]
#[command(
    about = "Compile copy context and generate system prompts for CopyDrive workspaces",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the system-prompt generation HTTP service
    #[clap(visible_alias = "s")]
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
    /// Compile a request body offline and print the compiled context
    #[clap(visible_alias = "c")]
    Compile {
        /// Path to a JSON request body, or '-' for stdin
        input: String,
        /// Print only the context hash
        #[arg(long)]
        hash_only: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Serve { host, port } => copydrive::serve(&host, port).await,
        Commands::Compile { input, hash_only } => copydrive::compile(&input, hash_only),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
