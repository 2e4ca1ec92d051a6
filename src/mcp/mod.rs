//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes route resolution and route diagnostics to AI coding agents over
//! stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{RoutesMcpServer, run_server};
