use graph_insight::{ImageFormat, LayoutOptions, RenderOptions};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which classifier backs `/classify`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    /// Load the model, fall back to rules if it cannot be loaded
    #[default]
    Auto,
    /// Model only; classification reports an error when it is missing
    Model,
    Rules,
}

impl FromStr for ClassifierMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ClassifierMode::Auto),
            "model" => Ok(ClassifierMode::Model),
            "rules" => Ok(ClassifierMode::Rules),
            other => anyhow::bail!("unknown classifier mode: {}", other),
        }
    }
}

impl fmt::Display for ClassifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierMode::Auto => f.write_str("auto"),
            ClassifierMode::Model => f.write_str("model"),
            ClassifierMode::Rules => f.write_str("rules"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub mode: ClassifierMode,
    pub model_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub layout_seed: u64,
    pub layout_iterations: usize,
}

impl RenderConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            format: self.format,
            layout: LayoutOptions {
                seed: self.layout_seed,
                iterations: self.layout_iterations,
                ..LayoutOptions::default()
            },
            labels: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            classifier: ClassifierConfig {
                mode: ClassifierMode::Auto,
                model_path: "graph_classifier_model.json".to_string(),
            },
            render: RenderConfig {
                format: ImageFormat::Png,
                width: 1200,
                height: 800,
                layout_seed: 42,
                layout_iterations: 50,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()?,
            },
            classifier: ClassifierConfig {
                mode: env::var("CLASSIFIER_MODE")
                    .unwrap_or_else(|_| "auto".to_string())
                    .parse()?,
                model_path: env::var("MODEL_PATH")
                    .unwrap_or_else(|_| "graph_classifier_model.json".to_string()),
            },
            render: RenderConfig {
                format: env::var("RENDER_FORMAT")
                    .unwrap_or_else(|_| "png".to_string())
                    .parse()?,
                width: env::var("RENDER_WIDTH")
                    .unwrap_or_else(|_| "1200".to_string())
                    .parse()?,
                height: env::var("RENDER_HEIGHT")
                    .unwrap_or_else(|_| "800".to_string())
                    .parse()?,
                layout_seed: env::var("LAYOUT_SEED")
                    .unwrap_or_else(|_| "42".to_string())
                    .parse()?,
                layout_iterations: env::var("LAYOUT_ITERATIONS")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()?,
            },
            logging: LoggingConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.classifier.mode, ClassifierMode::Auto);

        let options = config.render.render_options();
        assert_eq!(options.width, 1200);
        assert_eq!(options.height, 800);
        assert_eq!(options.layout.seed, 42);
        assert_eq!(options.layout.iterations, 50);
    }

    #[test]
    fn test_parse_classifier_mode() {
        assert_eq!("rules".parse::<ClassifierMode>().unwrap(), ClassifierMode::Rules);
        assert_eq!("MODEL".parse::<ClassifierMode>().unwrap(), ClassifierMode::Model);
        assert!("neural".parse::<ClassifierMode>().is_err());
    }
}
