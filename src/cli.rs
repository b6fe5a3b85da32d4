// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "progressive-flycam")]
#[command(about = "Progressive compute renderer with a free-fly camera", long_about = None)]
pub struct Cli {
    /// JSON settings file; command-line values take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Disable the on-screen overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "progressive-flycam",
            "--width",
            "800",
            "--fov",
            "60",
            "--no-ui",
        ]);
        assert_eq!(cli.width, Some(800));
        assert_eq!(cli.height, None);
        assert_eq!(cli.fov, Some(60.0));
        assert!(cli.no_ui);
    }

    #[test]
    fn defaults_leave_everything_unset() {
        let cli = Cli::parse_from(["progressive-flycam"]);
        assert!(cli.config.is_none());
        assert!(cli.fov.is_none());
        assert!(!cli.no_ui);
    }

    #[test]
    fn control_tuning_flags_are_not_accepted() {
        assert!(Cli::try_parse_from(["progressive-flycam", "--speed", "4.5"]).is_err());
        assert!(Cli::try_parse_from(["progressive-flycam", "--sensitivity", "0.2"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
