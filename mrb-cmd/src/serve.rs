//! `serve` command: bind and run the dashboard server.

use crate::config::ServeArgs;
use crate::handlers::ServerState;
use crate::remote::HttpSource;
use crate::routes::router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub async fn run_serve(args: ServeArgs) -> anyhow::Result<()> {
    let source = HttpSource::new(&args.remote_url, Duration::from_secs(args.timeout_secs))?;
    log::info!("Remote dataset: {}", source.url());

    if !args.dist_dir.exists() {
        log::warn!(
            "Front-end directory {} does not exist; only the API will be useful",
            args.dist_dir.display()
        );
    }

    let state = ServerState {
        source: Arc::new(source),
        public_dir: args.public_dir.clone(),
        sample_size: args.sample_size,
    };
    let app = router(state, &args.dist_dir);

    let listener = match TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                log::error!("{} is already in use", args.addr);
            } else {
                log::error!("Failed to bind {}: {}", args.addr, e);
            }
            return Err(e.into());
        }
    };
    log::info!("Listening on http://{}", args.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
