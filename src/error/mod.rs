//! Unified error handling for the dashboard.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain Errors**: network, data (payload shape), selection, config
//! - **Unified Error Type**: `DashError` consolidates all error types
//! - **Error Context**: operation and selection attached to errors
//! - **Result Type Alias**: `DashResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Server | API 5xx, rate limit | Yes |
//! | Client | Unexpected payload shape | No |
//! | User | Unknown country | No |
//! | System | Filesystem, terminal | No |
//! | Configuration | Bad config | No |

mod category;
mod context;
mod dash_error;
mod data;
mod network;
mod result;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use dash_error::DashError;
pub use data::{ConfigError, DataError, SelectionError};
pub use network::NetworkError;
pub use result::{DashResult, ResultExt};
