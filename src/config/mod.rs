use crate::cli::Cli;
use crate::utils::{DustyError, Result};

pub const DEFAULT_PROTECTED_BRANCHES: [&str; 2] = ["main", "master"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the interactive session does once its last branch is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    Quit,
    Stay,
}

/// Run configuration, built once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_age_days: i64,
    pub merged_only: bool,
    pub prune: bool,
    pub force: bool,
    pub assume_yes: bool,
    pub interactive: bool,
    pub output: OutputFormat,
    pub protected_branches: Vec<String>,
    pub on_exhausted: ExhaustionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_age_days: 0,
            merged_only: false,
            prune: false,
            force: false,
            assume_yes: false,
            interactive: false,
            output: OutputFormat::Text,
            protected_branches: DEFAULT_PROTECTED_BRANCHES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            on_exhausted: ExhaustionPolicy::Quit,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut protected_branches = Config::default().protected_branches;
        for name in &cli.protect {
            let name = name.trim().to_string();
            if !protected_branches.contains(&name) {
                protected_branches.push(name);
            }
        }

        let config = Self {
            min_age_days: cli.age,
            merged_only: cli.merged,
            prune: cli.prune,
            force: cli.force,
            assume_yes: cli.yes,
            interactive: cli.interactive,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            protected_branches,
            on_exhausted: if cli.keep_open {
                ExhaustionPolicy::Stay
            } else {
                ExhaustionPolicy::Quit
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self
            .protected_branches
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(DustyError::config_error(
                "protected branch names cannot be empty",
            ));
        }

        if self.interactive && self.prune {
            return Err(DustyError::config_error(
                "interactive mode cannot be combined with --prune",
            ));
        }

        if self.interactive && self.output == OutputFormat::Json {
            return Err(DustyError::config_error(
                "interactive mode cannot be combined with --json",
            ));
        }

        if self.prune && self.output == OutputFormat::Json {
            return Err(DustyError::config_error(
                "--json only applies to listing and cannot be combined with --prune",
            ));
        }

        if self.force && !self.prune {
            return Err(DustyError::config_error("--force only applies to --prune"));
        }

        Ok(())
    }

    pub fn is_protected(&self, name: &str) -> bool {
        self.protected_branches.iter().any(|p| p == name)
    }
}
