//! Visual settings: built-in defaults, then the config file, then flags.

use std::path::{Path, PathBuf};

use diskring_core::{ConfigError, OutputTarget, Rgb, VisualConfig};

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub unit_scale: Option<f64>,
    pub line_width: Option<f64>,
    pub quality: Option<u32>,
    pub background_color: Option<Rgb>,
    pub line_color: Option<Rgb>,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
    pub out_file: Option<PathBuf>,
}

impl Overrides {
    /// Apply every set value on top of `config`.
    pub fn apply(&self, config: &mut VisualConfig) {
        if let Some(scale) = self.unit_scale {
            config.unit_scale = scale;
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }
        if let Some(quality) = self.quality {
            config.quality = quality;
        }
        if let Some(color) = self.background_color {
            config.background_color = color;
        }
        if let Some(color) = self.line_color {
            config.line_color = color;
        }
        if let Some(width) = self.window_width {
            config.window_width = width;
        }
        if let Some(height) = self.window_height {
            config.window_height = height;
        }
        if let Some(path) = &self.out_file {
            config.output = OutputTarget::File(path.clone());
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("diskring").join("config.toml"))
}

/// Read a visual config from a TOML file. Missing keys keep their defaults.
pub fn load_file(path: &Path) -> Result<VisualConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Build the effective visual config.
///
/// An explicit `config_file` must exist. Without one, the default location
/// is used only if a file is present there.
pub fn resolve(
    config_file: Option<&Path>,
    overrides: &Overrides,
) -> Result<VisualConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => load_file(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using default config file");
                load_file(&path)?
            }
            None => VisualConfig::default(),
        },
    };

    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
