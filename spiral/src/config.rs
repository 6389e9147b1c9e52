use bedpack::io::svg::svg_util::SvgDrawOptions;
use bedpack::util::BedConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the spiral placer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct SpiralConfig {
    /// Configuration of the bed, a `margin` in the job takes precedence over this one
    #[serde(default)]
    pub bed_config: BedConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl SpiralConfig {
    /// Returns the config with the margin replaced, if one is given
    pub fn with_margin(mut self, margin: Option<f64>) -> Self {
        if let Some(margin) = margin {
            self.bed_config.margin = margin;
        }
        self
    }
}
