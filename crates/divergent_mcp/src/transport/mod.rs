//! Transports for the divergent MCP server

pub mod stdio;

pub use stdio::serve_stdio;
