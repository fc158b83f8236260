// src/main.rs

use mdwatch::monitor::ExitReason;
use mdwatch::{cli, logging};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(reason) => std::process::exit(reason.exit_code()),
        Err(err) => {
            eprintln!("mdwatch error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> mdwatch::errors::Result<ExitReason> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    mdwatch::run(args).await
}
