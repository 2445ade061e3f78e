use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphTuning,
}

/// Tunables for the scroll-linked graph. Defaults reproduce the shipped
/// landing-page behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphTuning {
    /// Progress value at which the line finishes drawing.
    #[serde(default = "default_draw_divisor")]
    pub draw_divisor: f32,

    /// Ascending progress thresholds that light steps 0..4. They fire a touch
    /// before the dots' even 20/45/70/95% spacing so the UI feels responsive.
    #[serde(default = "default_step_thresholds")]
    pub step_thresholds: [f32; 4],

    /// Viewport widths at or below this skip the animator entirely.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: GraphTuning::default(),
        }
    }
}

impl Default for GraphTuning {
    fn default() -> Self {
        Self {
            draw_divisor: default_draw_divisor(),
            step_thresholds: default_step_thresholds(),
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

fn default_draw_divisor() -> f32 {
    0.85
}

fn default_step_thresholds() -> [f32; 4] {
    [0.15, 0.40, 0.65, 0.80]
}

fn default_mobile_breakpoint() -> f32 {
    900.0
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_path = config_dir.join("pagefx").join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_dir = config_dir.join("pagefx");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }
}
