use std::future::Future;

use super::error::AppError;

/// CLI runner handling subscriber setup, signal handling, and exit codes
///
/// Exit codes: 0 = success, 1 = error, 128+signal on interruption
/// (130 SIGINT, 143 SIGTERM).
pub struct CliApp {
    name: &'static str,
}

impl CliApp {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Run the pipeline future, racing it against signal reception
    ///
    /// This function never returns; it calls std::process::exit with the
    /// appropriate code.
    pub async fn run<Fut>(self, main_fut: Fut) -> !
    where
        Fut: Future<Output = Result<(), AppError>>,
    {
        tracing_subscriber::fmt().with_target(false).init();

        tokio::select! {
            result = main_fut => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("{}: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
            code = wait_for_signal() => {
                std::process::exit(code);
            }
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
///
/// Returns the conventional 128+signal exit code.
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to setup Ctrl+C handler");
        eprintln!("Received Ctrl+C");
        130
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_carries_its_name() {
        let app = CliApp::new("cartsum");
        assert_eq!(app.name, "cartsum");
    }
}
