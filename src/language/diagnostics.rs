//! The diagnostics sink for parse and synthesis problems.
//!
//! Bad markup degrades, it does not halt: malformed input is reported here
//! and recovered locally, and rendering continues. In strict mode an
//! error-class report escalates into a hard failure instead, and both
//! classes log a captured backtrace.

use crate::language::MarkupError;
use std::backtrace::Backtrace;
use tracing::{error, warn};

#[derive(Debug, Default)]
pub struct Diagnostics {
    strict: bool,
    warnings: usize,
    errors: usize,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    /// A sink whose error-class reports abort the current operation.
    pub fn strict() -> Diagnostics {
        Diagnostics {
            strict: true,
            warnings: 0,
            errors: 0,
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Report a recoverable problem. Counted and logged, never fatal.
    pub fn warning(&mut self, message: &str) {
        self.warnings += 1;
        if self.strict {
            warn!(backtrace = %Backtrace::force_capture(), "{}", message);
        } else {
            warn!("{}", message);
        }
    }

    /// Report an error-class problem. The caller recovers with a fallback
    /// value unless this sink is strict, in which case the operation aborts.
    pub fn error(&mut self, message: &str) -> Result<(), MarkupError> {
        self.errors += 1;
        if self.strict {
            error!(backtrace = %Backtrace::force_capture(), "{}", message);
            return Err(MarkupError {
                problem: message.to_string(),
            });
        }
        error!("{}", message);
        Ok(())
    }
}

#[cfg(test)]
mod verify {
    use super::*;

    #[test]
    fn default_sink_recovers() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warning("something looked off");
        assert_eq!(diagnostics.error("something was wrong"), Ok(()));
        assert_eq!(diagnostics.warnings(), 1);
        assert_eq!(diagnostics.errors(), 1);
    }

    #[test]
    fn strict_sink_escalates_errors_only() {
        let mut diagnostics = Diagnostics::strict();
        diagnostics.warning("still just a warning");
        assert_eq!(diagnostics.warnings(), 1);

        let result = diagnostics.error("now fatal");
        assert_eq!(
            result,
            Err(MarkupError {
                problem: "now fatal".to_string()
            })
        );
        assert_eq!(diagnostics.errors(), 1);
    }
}
