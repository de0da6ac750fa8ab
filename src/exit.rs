// src/exit.rs
//! Process exit codes for `strata`. CI scripts key off these, so keep them stable.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StrataExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, unreadable tree, bad config file).
    Error = 1,
    /// Input validation failed (page out of range, malformed flag).
    InvalidInput = 2,
    /// Review gate failed (mutual dependencies under `--strict`).
    CheckFailed = 3,
}

impl StrataExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for StrataExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
