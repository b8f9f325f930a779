//! Construction and composition limits.
//!
//! [`BuilderLimits`] bounds what a
//! [`ProgrammableTransactionBuilder`](crate::transaction::ProgrammableTransactionBuilder)
//! accepts; [`TransactionConfig`] adds the gas and intent policy used when
//! composing and signing transaction data.

use crate::error::{SuiError, SuiResult};
use crate::transaction::AppId;

/// Environment variable overriding [`TransactionConfig::max_gas_budget`].
pub const ENV_MAX_GAS_BUDGET: &str = "SUI_MAX_GAS_BUDGET";

/// Environment variable overriding [`BuilderLimits::max_commands`].
pub const ENV_MAX_COMMANDS: &str = "SUI_MAX_COMMANDS";

/// Limits enforced by the transaction builder.
///
/// Violations are reported as [`SuiError::LimitExceeded`] and leave the
/// builder unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderLimits {
    /// Maximum number of commands in one programmable transaction.
    /// Default: 1024
    pub max_commands: usize,
    /// Maximum number of inputs.
    /// Default: 2048
    pub max_inputs: usize,
    /// Maximum size in bytes of a single pure input.
    /// Default: 16 KiB
    pub max_pure_argument_size: usize,
    /// Maximum number of arguments to a single command.
    /// Default: 512
    pub max_arguments: usize,
    /// Maximum number of type arguments to a move call.
    /// Default: 16
    pub max_type_arguments: usize,
    /// Maximum nesting depth of a type argument.
    /// Default: 16
    pub max_type_argument_depth: usize,
    /// Maximum number of modules in a publish or upgrade.
    /// Default: 64
    pub max_publish_modules: usize,
}

impl Default for BuilderLimits {
    fn default() -> Self {
        Self {
            max_commands: 1024,
            max_inputs: 2048,
            max_pure_argument_size: 16 * 1024,
            max_arguments: 512,
            max_type_arguments: 16,
            max_type_argument_depth: 16,
            max_publish_modules: 64,
        }
    }
}

impl BuilderLimits {
    /// Sets the maximum number of commands.
    #[must_use]
    pub fn with_max_commands(mut self, max: usize) -> Self {
        self.max_commands = max;
        self
    }

    /// Sets the maximum number of inputs.
    #[must_use]
    pub fn with_max_inputs(mut self, max: usize) -> Self {
        self.max_inputs = max;
        self
    }

    /// Sets the maximum pure input size.
    #[must_use]
    pub fn with_max_pure_argument_size(mut self, max: usize) -> Self {
        self.max_pure_argument_size = max;
        self
    }

    /// Sets the maximum number of arguments per command.
    #[must_use]
    pub fn with_max_arguments(mut self, max: usize) -> Self {
        self.max_arguments = max;
        self
    }

    /// Sets the maximum number of type arguments per move call.
    #[must_use]
    pub fn with_max_type_arguments(mut self, max: usize) -> Self {
        self.max_type_arguments = max;
        self
    }

    /// Sets the maximum type argument nesting depth.
    #[must_use]
    pub fn with_max_type_argument_depth(mut self, max: usize) -> Self {
        self.max_type_argument_depth = max;
        self
    }

    /// Sets the maximum number of modules per publish or upgrade.
    #[must_use]
    pub fn with_max_publish_modules(mut self, max: usize) -> Self {
        self.max_publish_modules = max;
        self
    }
}

/// Configuration for composing and signing transactions.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::config::{BuilderLimits, TransactionConfig};
///
/// let config = TransactionConfig::default()
///     .with_max_gas_budget(1_000_000_000)
///     .with_limits(BuilderLimits::default().with_max_commands(64));
/// assert_eq!(config.limits().max_commands, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionConfig {
    limits: BuilderLimits,
    max_gas_budget: u64,
    max_gas_payment_objects: usize,
    app_id: AppId,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            limits: BuilderLimits::default(),
            max_gas_budget: 50_000_000_000,
            max_gas_payment_objects: 256,
            app_id: AppId::Sui,
        }
    }
}

impl TransactionConfig {
    /// Default configuration with overrides from `SUI_MAX_GAS_BUDGET` and
    /// `SUI_MAX_COMMANDS`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Config`] if a variable is set but is not a
    /// positive integer.
    pub fn from_env() -> SuiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> SuiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_MAX_GAS_BUDGET) {
            config.max_gas_budget = parse_positive(ENV_MAX_GAS_BUDGET, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_COMMANDS) {
            let max = parse_positive(ENV_MAX_COMMANDS, &value)?;
            config.limits.max_commands = usize::try_from(max).map_err(|_| {
                SuiError::Config(format!("{ENV_MAX_COMMANDS}={value} is out of range"))
            })?;
        }
        Ok(config)
    }

    /// Sets the builder limits.
    #[must_use]
    pub fn with_limits(mut self, limits: BuilderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the maximum gas budget accepted during composition.
    #[must_use]
    pub fn with_max_gas_budget(mut self, max: u64) -> Self {
        self.max_gas_budget = max;
        self
    }

    /// Sets the maximum number of gas payment objects.
    #[must_use]
    pub fn with_max_gas_payment_objects(mut self, max: usize) -> Self {
        self.max_gas_payment_objects = max;
        self
    }

    /// Sets the application id used in signing intents.
    #[must_use]
    pub fn with_app_id(mut self, app_id: AppId) -> Self {
        self.app_id = app_id;
        self
    }

    /// Returns the builder limits.
    pub fn limits(&self) -> &BuilderLimits {
        &self.limits
    }

    /// Returns the maximum gas budget.
    pub fn max_gas_budget(&self) -> u64 {
        self.max_gas_budget
    }

    /// Returns the maximum number of gas payment objects.
    pub fn max_gas_payment_objects(&self) -> usize {
        self.max_gas_payment_objects
    }

    /// Returns the application id used in signing intents.
    pub fn app_id(&self) -> AppId {
        self.app_id
    }
}

fn parse_positive(key: &str, value: &str) -> SuiResult<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(SuiError::Config(format!("{key} must be positive"))),
        Ok(n) => Ok(n),
        Err(e) => Err(SuiError::Config(format!("{key}={value}: {e}"))),
    }
}
