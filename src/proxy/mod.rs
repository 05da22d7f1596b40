//! HTTP proxy server

mod handler;
pub mod server;

pub use handler::humanize_route;
pub use server::{router, run_server, ProxyState};
