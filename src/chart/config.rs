use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Immutable per-chart configuration, supplied once at creation.
///
/// Label slots follow the dashboard convention: `labels[0]` is the y-axis
/// title, `labels[1]` the x-axis title slot, `labels[2..]` the legend
/// entries, one per series in order. Colors map 1:1 onto series indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    container_id: String,
    labels: Vec<String>,
    colors: Vec<Color>,
}

impl ChartConfig {
    pub fn new(
        container_id: impl Into<String>,
        labels: Vec<String>,
        colors: Vec<Color>,
    ) -> ChartResult<Self> {
        let container_id = container_id.into();
        if container_id.is_empty() {
            return Err(ChartError::InvalidConfig(
                "container id must not be empty".to_owned(),
            ));
        }
        if labels.len() != colors.len() + 2 {
            return Err(ChartError::InvalidConfig(format!(
                "expected {} labels for {} series (y title, x title, one per series), got {}",
                colors.len() + 2,
                colors.len(),
                labels.len()
            )));
        }
        for color in &colors {
            color.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("series color out of range: {err}"))
            })?;
        }

        Ok(Self {
            container_id,
            labels,
            colors,
        })
    }

    /// Convenience constructor parsing `#rrggbb` color strings.
    pub fn from_hex_colors(
        container_id: impl Into<String>,
        labels: Vec<String>,
        colors: &[String],
    ) -> ChartResult<Self> {
        let parsed = colors
            .iter()
            .map(|hex| Color::from_hex(hex))
            .collect::<ChartResult<Vec<Color>>>()?;
        Self::new(container_id, labels, parsed)
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn y_axis_title(&self) -> &str {
        &self.labels[0]
    }

    #[must_use]
    pub fn series_labels(&self) -> &[String] {
        &self.labels[2..]
    }

    #[must_use]
    pub fn series_colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn series_color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::render::Color;

    use super::ChartConfig;

    fn labels(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| (*entry).to_owned()).collect()
    }

    #[test]
    fn label_color_arity_is_enforced() {
        let result = ChartConfig::new(
            "plot-1",
            labels(&["power", "time", "alpha"]),
            vec![Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn slots_split_into_titles_and_legend_entries() {
        let config = ChartConfig::new(
            "plot-1",
            labels(&["power", "time", "alpha", "beta"]),
            vec![Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0)],
        )
        .expect("valid config");

        assert_eq!(config.y_axis_title(), "power");
        assert_eq!(config.series_labels(), &["alpha", "beta"]);
        assert_eq!(config.series_count(), 2);
    }

    #[test]
    fn zero_series_config_is_allowed() {
        let config = ChartConfig::new("plot-1", labels(&["power", "time"]), Vec::new())
            .expect("zero-series config");
        assert_eq!(config.series_count(), 0);
        assert!(config.series_labels().is_empty());
    }
}
