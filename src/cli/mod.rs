//! CLI command handlers.
//!
//! Headless, scriptable access to the built-in fixtures for harness
//! automation and CI.

pub mod export;
pub mod list;
pub mod show;
pub mod validate;

// Re-export types used by main.rs and tests
pub use export::ExportArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
pub use validate::ValidateArgs;

/// Process exit codes shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Validation found errors (or warnings under --strict)
    ValidationFailed = 2,
}

impl ExitCode {
    /// Converts to the numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}
