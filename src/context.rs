use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Context {
    pub api_listen: SocketAddr,
    pub log_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            api_listen: cli.api_listen,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn from_cli_carries_listen_address_and_log_path() {
        let cli = crate::cli::Cli::try_parse_from([
            "repostore",
            "--api-listen",
            "127.0.0.1:9000",
            "--log-file",
            "logs/out.log",
        ])
        .unwrap();

        let ctx = Context::from_cli(&cli);
        assert_eq!(ctx.api_listen, "127.0.0.1:9000".parse::<std::net::SocketAddr>().unwrap());
        assert_eq!(ctx.log_file, Some(PathBuf::from("logs/out.log")));
    }
}
