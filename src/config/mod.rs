//! Configuration loading.
//!
//! Consolidates configuration from several tiers with field-by-field YAML merging:
//! 1. **Defaults** - built into the binary
//! 2. **Project** - `$CWD/task-api/config.yaml`
//! 3. **User** - `~/.task-api/config.yaml`
//! 4. **Environment** - variables listed below
//!
//! Command-line flags are applied by the binary after loading.
//!
//! ## Environment Variables
//! - `TASK_API_CONFIG_PATH` - Explicit config file (replaces the file tiers)
//! - `TASK_API_DB_PATH` - Database path
//! - `TASK_API_HOST` - Listen address
//! - `TASK_API_PORT` - Listen port
//! - `TASK_API_USER_DIR` - User config dir (default: `~/.task-api`)
//! - `TASK_API_PROJECT_DIR` - Project config dir (default: `./task-api`)

mod loader;
mod merge;
mod types;

pub use loader::{ConfigLoader, ConfigPaths, ConfigTier};
pub use merge::{deep_merge_all, merge_into};
pub use types::*;
