use std::path::PathBuf;

use crate::merge::DEFAULT_PROXY_COMMAND;

pub const DEFAULT_SOURCE_PATH: &str = "config.yaml";
pub const DEFAULT_TARGET_PATH: &str = "./generated_ssh_config";

/// What to do when one section fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the run; sections already written stay on disk.
    #[default]
    StopOnFirst,
    /// Keep going and report every failure at the end.
    ContinueOnError,
}

/// Everything a run needs, passed in rather than read from globals.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    /// Used when neither `settings.proxycommand` nor a section default is set.
    pub fallback_proxy_command: String,
    pub debug: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            fallback_proxy_command: DEFAULT_PROXY_COMMAND.to_string(),
            debug: false,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn new(source_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
