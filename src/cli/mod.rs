//! Command-line interface.
//!
//! Parsed early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! let args = parse_args(std::env::args()).unwrap_or_else(|e| {
//!     eprintln!("error: {}\n\n{}", e, USAGE);
//!     std::process::exit(2)
//! });
//! ```

pub mod args;
pub mod snapshot;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use snapshot::{handle_snapshot_command, load_snapshot, render_snapshot};
pub use version::{handle_version_command, version_string, VERSION};
