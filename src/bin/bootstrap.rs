// Lambda bootstrap entry point for the session analysis function

use lambda_runtime::{Error, run, service_fn};
use session_analysis::worker::SessionAnalysisHandler;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    session_analysis::setup_logging();

    // Clients are built once and reused by every invocation in this process
    let handler = SessionAnalysisHandler::from_env().await.map_err(|e| {
        error!("Failed to initialize handler: {}", e);
        Error::from(e)
    })?;
    let handler = &handler;

    run(service_fn(move |event| async move { handler.handle(event).await })).await
}
