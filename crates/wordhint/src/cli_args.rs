use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use wordhint_core::{FileConfig, HostCapabilities, LoggingDestination, ThemeMode, config_path};

/// Desktop front end for word-hint book conversion.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Program that runs conversion jobs (overrides host.job_command).
    #[arg(long = "host-command", value_name = "CMD", value_hint = ValueHint::CommandName)]
    pub host_command: Option<String>,

    /// Argument passed to the job program; repeat for several.
    #[arg(long = "host-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub host_args: Vec<String>,

    /// Disable native file dialogs.
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_file_dialog: bool,

    /// Start with this theme instead of the persisted one.
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<ThemeArg>,

    /// Mirror logs to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    pub log_stderr: bool,

    /// Write the effective configuration (after overrides) back to disk.
    #[arg(long, action = ArgAction::SetTrue)]
    pub save_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut FileConfig) {
        if let Some(command) = self.host_command.as_ref() {
            config.host.job_command = Some(command.clone());
            config.host.job_args = self.host_args.clone();
        } else if !self.host_args.is_empty() {
            config.host.job_args = self.host_args.clone();
        }
        if self.no_file_dialog {
            config.host.file_dialog = false;
        }
    }

    pub fn capabilities(&self, config: &FileConfig) -> HostCapabilities {
        if config.host.file_dialog && !self.no_file_dialog {
            HostCapabilities::desktop_shell()
        } else {
            HostCapabilities::headless()
        }
    }

    /// Where `--save-config` writes, `None` when the flag is absent.
    pub fn save_target(&self) -> Option<PathBuf> {
        if !self.save_config {
            return None;
        }
        Some(self.config.clone().unwrap_or_else(config_path))
    }

    pub fn logging_destination(&self) -> LoggingDestination {
        if self.log_stderr {
            LoggingDestination::FileAndStderr
        } else {
            LoggingDestination::FileOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordhint").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = parse(&[]);
        let mut config = FileConfig::default();
        config.host.job_command = Some("from-file".to_string());
        cli.apply_overrides(&mut config);

        assert_eq!(config.host.job_command.as_deref(), Some("from-file"));
        assert_eq!(cli.capabilities(&config), HostCapabilities::desktop_shell());
        assert_eq!(cli.logging_destination(), LoggingDestination::FileOnly);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn host_command_replaces_command_and_args() {
        let cli = parse(&[
            "--host-command",
            "wordhint-host",
            "--host-arg",
            "--fast",
            "--host-arg",
            "x",
        ]);
        let mut config = FileConfig::default();
        config.host.job_args = vec!["old".to_string()];
        cli.apply_overrides(&mut config);

        assert_eq!(config.host.job_command.as_deref(), Some("wordhint-host"));
        assert_eq!(config.host.job_args, vec!["--fast".to_string(), "x".to_string()]);
    }

    #[test]
    fn no_file_dialog_turns_capability_off() {
        let cli = parse(&["--no-file-dialog"]);
        let mut config = FileConfig::default();
        cli.apply_overrides(&mut config);

        assert!(!config.host.file_dialog);
        assert_eq!(cli.capabilities(&config), HostCapabilities::headless());
    }

    #[test]
    fn theme_flag_parses() {
        let cli = parse(&["--theme", "dark", "--log-stderr"]);
        assert_eq!(cli.theme.map(ThemeMode::from), Some(ThemeMode::Dark));
        assert_eq!(cli.logging_destination(), LoggingDestination::FileAndStderr);
        assert!(parse(&["--theme", "light"]).theme == Some(ThemeArg::Light));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["wordhint", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn save_config_targets_config_flag_path() {
        assert!(parse(&[]).save_target().is_none());

        let cli = parse(&["--save-config", "--config", "/tmp/wordhint.toml"]);
        assert_eq!(cli.save_target(), Some(PathBuf::from("/tmp/wordhint.toml")));

        let cli = parse(&["--save-config"]);
        assert_eq!(cli.save_target(), Some(config_path()));
    }
}
