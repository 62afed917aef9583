//! # Command-Line Interface
//!
//! One-shot subcommands plus an interactive, login-gated shell.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Data directory | `init` |
//! | Product | Catalogue | `product add`, `product update`, `product list` |
//! | Supplier | Supplier records | `supplier add`, `supplier show` |
//! | Stock | Stock movements | `stock receive`, `stock sell`, `stock report` |
//! | Order | Purchasing | `order low-stock`, `order create` |
//! | Shell | Interactive menu | `shell` |
//!
//! ## Output Formats
//!
//! All subcommands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr, or set `RUST_LOG`:
//! ```bash
//! cafe --verbose stock report
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod logging;
mod login;
mod order;
mod output;
mod product;
mod prompt;
mod render;
mod shell;
mod stock;
mod supplier;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
