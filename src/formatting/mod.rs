use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Apply this mode to the `colored` crate's global override.
    pub fn apply(&self) {
        colored::control::set_override(self.should_use_color());
    }
}

impl From<bool> for ColorMode {
    fn from(use_color: bool) -> Self {
        if use_color {
            Self::Always
        } else {
            Self::Never
        }
    }
}

/// Resolve the color mode: `--plain` wins, then `--color`, then the config
/// file, then the environment.
pub fn resolve_color_mode(
    plain: bool,
    requested: Option<ColorMode>,
    configured: Option<bool>,
) -> ColorMode {
    if plain {
        return ColorMode::Never;
    }
    requested
        .or_else(|| configured.map(ColorMode::from))
        .unwrap_or_else(color_mode_from_env)
}

pub fn color_mode_from_env() -> ColorMode {
    color_mode_from_vars(
        env::var("NO_COLOR").ok().as_deref(),
        env::var("CLICOLOR").ok().as_deref(),
        env::var("CLICOLOR_FORCE").ok().as_deref(),
    )
}

// Precedence per no-color.org and the CLICOLOR convention.
fn color_mode_from_vars(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> ColorMode {
    if clicolor_force == Some("1") {
        return ColorMode::Always;
    }
    if no_color.is_some() || clicolor == Some("0") {
        return ColorMode::Never;
    }
    ColorMode::Auto
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal() && env::var("TERM").map(|t| t != "dumb").unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_follow_precedence() {
        assert_eq!(color_mode_from_vars(None, None, None), ColorMode::Auto);
        assert_eq!(color_mode_from_vars(Some(""), None, None), ColorMode::Never);
        assert_eq!(color_mode_from_vars(None, Some("0"), None), ColorMode::Never);
        assert_eq!(
            color_mode_from_vars(Some("1"), None, Some("1")),
            ColorMode::Always
        );
    }

    #[test]
    fn plain_overrides_config() {
        assert_eq!(resolve_color_mode(true, None, Some(true)), ColorMode::Never);
        assert_eq!(resolve_color_mode(false, None, Some(true)), ColorMode::Always);
        assert_eq!(resolve_color_mode(false, None, Some(false)), ColorMode::Never);
    }

    #[test]
    fn color_flag_beats_config() {
        assert_eq!(
            resolve_color_mode(false, Some(ColorMode::Always), Some(false)),
            ColorMode::Always
        );
        assert_eq!(
            resolve_color_mode(false, Some(ColorMode::Never), Some(true)),
            ColorMode::Never
        );
        assert_eq!(
            resolve_color_mode(true, Some(ColorMode::Always), None),
            ColorMode::Never
        );
    }
}
