use clap::Parser;

use fetcher::cli::{self, Cli};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            // clap renders help, version and usage errors itself; keep its
            // output and only own the exit code.
            let _ = e.print();
            std::process::exit(cli::parse_exit_status(&e).code());
        }
    };

    let status = cli::dispatch(parsed).await;
    std::process::exit(status.code());
}
