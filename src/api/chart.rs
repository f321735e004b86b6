use tracing::{debug, trace};

use crate::core::{
    ChartConfig, ChartData, ChartKind, ChartOptions, ConfigMap, Dataset, Legend, Position, Scales,
    Ticks, Title, TooltipMode, Tooltips,
};

use super::time_series_config::DEFAULT_CHART_WIDTH;

/// Chart under construction: kind, options and the accumulated datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    labels: Vec<String>,
    datasets: Vec<Dataset>,
    options: ChartOptions,
    width: u32,
    extra: ConfigMap,
}

impl Chart {
    /// Creates an empty chart. `None` options select [`default_options`].
    #[must_use]
    pub fn new(kind: ChartKind, options: Option<ChartOptions>) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
            options: options.unwrap_or_else(|| default_options(kind)),
            width: DEFAULT_CHART_WIDTH,
            extra: ConfigMap::new(),
        }
    }

    #[must_use]
    pub fn line(options: Option<ChartOptions>) -> Self {
        Self::new(ChartKind::Line, options)
    }

    #[must_use]
    pub fn bar(options: Option<ChartOptions>) -> Self {
        Self::new(ChartKind::Bar, options)
    }

    #[must_use]
    pub fn radar(options: Option<ChartOptions>) -> Self {
        Self::new(ChartKind::Radar, options)
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        trace!(count = labels.len(), "set chart labels");
        self.labels = labels;
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        trace!(
            label = dataset.label.as_deref().unwrap_or_default(),
            points = dataset.data.len(),
            "add dataset"
        );
        self.datasets.push(dataset);
    }

    /// Sets the widget width and extra top-level config entries.
    pub fn setup(&mut self, width: u32, extra: ConfigMap) {
        debug!(
            kind = %self.kind,
            width,
            datasets = self.datasets.len(),
            "chart setup"
        );
        self.width = width;
        self.extra.extend(extra);
    }

    /// Builds the Chart.js document for the current state.
    #[must_use]
    pub fn config(&self) -> ChartConfig {
        let labels = (!self.labels.is_empty()).then(|| self.labels.clone());
        ChartConfig {
            kind: self.kind,
            data: ChartData {
                datasets: self.datasets.clone(),
                labels,
                extra: ConfigMap::new(),
            },
            options: self.options.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Options a chart kind starts from when the caller passes none.
///
/// Radar charts show a top legend, a title, index-mode tooltips and ticks
/// starting at zero; line and bar charts are just responsive.
#[must_use]
pub fn default_options(kind: ChartKind) -> ChartOptions {
    match kind {
        ChartKind::Line | ChartKind::Bar => ChartOptions::new(),
        ChartKind::Radar => ChartOptions::new()
            .with_legend(Legend::at(Position::Top))
            .with_title(Title::shown(kind.title()))
            .with_tooltips(Tooltips {
                mode: Some(TooltipMode::Index),
                intersect: Some(false),
                extra: ConfigMap::new(),
            })
            .with_scales(Scales {
                ticks: Some(Ticks {
                    begin_at_zero: Some(true),
                    ..Ticks::default()
                }),
                ..Scales::default()
            }),
    }
}
