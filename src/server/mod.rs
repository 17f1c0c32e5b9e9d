// Server module entry point
// Provides listener creation, the accept loop and per-connection serving

mod accept;
mod connection;
mod listener;

// Re-export common entry points
pub use accept::run_accept_loop;
pub use listener::create_listener;
