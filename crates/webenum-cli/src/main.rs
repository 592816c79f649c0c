use webenum_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Argument count is checked before anything touches the disk or network.
    let result = Cli::from_env().and_then(|cli| {
        if logging::init_logging().is_err() {
            logging::init_logging_stderr();
        }
        cli.run()
    });

    if let Err(err) = result {
        let code = err.exit_code();
        tracing::error!("{}", err);
        eprintln!("webenum error: {:#}", anyhow::Error::from(err));
        std::process::exit(code);
    }
}
