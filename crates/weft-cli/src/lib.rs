//! weft CLI library

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use weft::Kernel;
use weft::config::FunctionCallingConfig;
use weft::core_plugins::{math_plugin, text_plugin};

/// Kernel with the built-in `math` and `text` plugins registered
pub fn core_kernel(config: FunctionCallingConfig) -> weft::Result<Kernel> {
    Kernel::builder()
        .plugin(math_plugin()?)
        .plugin(text_plugin()?)
        .config(config)
        .build()
}
