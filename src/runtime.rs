//! Runtime abstraction over the process environment.
//!
//! Config resolution reads environment variables through this trait so it
//! can be driven by a mock in tests.

use std::env;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn env_var(&self, key: &str) -> Result<String, env::VarError>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn env_var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_runtime_env_var() {
        let runtime = RealRuntime;

        // PATH should exist on all systems
        assert!(runtime.env_var("PATH").is_ok());
        assert!(matches!(
            runtime.env_var("IALIRT_DATA_ACCESS_SURELY_UNSET_VARIABLE"),
            Err(env::VarError::NotPresent)
        ));
    }
}
