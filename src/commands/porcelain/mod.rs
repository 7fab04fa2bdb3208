//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create a new repository
//! - `add`: Stage files for commit
//! - `rm`: Stage a removal or unstage a file
//! - `commit`: Snapshot the staged changes
//! - `log` / `global-log`: Show history
//! - `status`: Show branches and working tree status
//! - `branch`: Create or list branches
//! - `checkout`: Restore files or switch branches

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod remove;
pub mod status;
