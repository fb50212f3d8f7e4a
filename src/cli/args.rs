use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve an in-memory collection of repositories over HTTP",
    long_about = "A small REST service that lists, creates, updates, deletes and likes repository records.\n\nRecords live in process memory only and are lost on restart."
)]
pub struct Cli {
    #[arg(
        long = "api-listen",
        env = "REPOSTORE_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:3333",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long = "log-file",
        env = "REPOSTORE_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
