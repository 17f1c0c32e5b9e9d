use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod error;
mod handler;
mod logger;
mod refresh;
mod response;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Validate the target file before anything else; failure here is
    // fatal and prints the captured backtrace
    let watched = match config::WatchedFile::from_args() {
        Ok(w) => w,
        Err(e) => error::fatal(&e),
    };

    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, watched))
}

async fn async_main(
    cfg: config::Config,
    watched: config::WatchedFile,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg);
    logger::log_watched_file(watched.path());

    let state = Arc::new(config::AppState::new(cfg, watched));
    let active_connections = Arc::new(AtomicUsize::new(0));

    // The refresher runs independently of the accept loop; /stop ends it
    // while the HTTP side keeps serving the last published body
    refresh::spawn(Arc::clone(&state));

    server::run_accept_loop(listener, state, active_connections).await
}
