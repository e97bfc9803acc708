//! Structured summary of a conversion, suitable for JSON dumps.
use crate::converter::ConvertParams;
use crate::shapes::ShapeKind;
use serde::Serialize;

/// Milliseconds spent in one named conversion stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Wall-clock cost of a conversion, with stages in the order they ran.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: &'static str, elapsed_ms: f64) {
        self.stages.push(StageTiming { label, elapsed_ms });
    }

    /// Time attributed to `label`, if that stage ran.
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

/// Running per-block counters collected by the converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockStats {
    pub total: usize,
    pub drawn: usize,
    pub filtered: usize,
    pub primitives: usize,
    pub intensity_sum: f64,
    pub intensity_max: f32,
}

impl BlockStats {
    fn record(&mut self, intensity: f32) {
        self.total += 1;
        self.intensity_sum += intensity as f64;
        self.intensity_max = self.intensity_max.max(intensity);
    }

    pub fn record_filtered(&mut self, intensity: f32) {
        self.record(intensity);
        self.filtered += 1;
    }

    pub fn record_drawn(&mut self, intensity: f32, primitives: usize) {
        self.record(intensity);
        self.drawn += 1;
        self.primitives += primitives;
    }

    pub fn mean_intensity(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.intensity_sum / self.total as f64) as f32
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub width: usize,
    pub height: usize,
    pub shape: ShapeKind,
    pub block_size: usize,
    pub alpha: f32,
    pub filter_threshold: f32,
    pub blocks_total: usize,
    pub blocks_drawn: usize,
    pub blocks_filtered: usize,
    pub primitives: usize,
    pub mean_intensity: f32,
    pub max_intensity: f32,
    pub timing: TimingBreakdown,
}

impl ConversionReport {
    pub fn new(
        width: usize,
        height: usize,
        params: &ConvertParams,
        stats: BlockStats,
        timing: TimingBreakdown,
    ) -> Self {
        Self {
            width,
            height,
            shape: params.shape,
            block_size: params.block_size,
            alpha: params.alpha,
            filter_threshold: params.filter_threshold,
            blocks_total: stats.total,
            blocks_drawn: stats.drawn,
            blocks_filtered: stats.filtered,
            primitives: stats.primitives,
            mean_intensity: stats.mean_intensity(),
            max_intensity: stats.intensity_max,
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_track_means_and_counts() {
        let mut stats = BlockStats::default();
        stats.record_filtered(0.0);
        stats.record_drawn(1.0, 1);
        stats.record_drawn(0.5, 3);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.drawn, 2);
        assert_eq!(stats.filtered, 1);
        assert_eq!(stats.primitives, 4);
        assert!((stats.mean_intensity() - 0.5).abs() < 1e-6);
        assert_eq!(stats.intensity_max, 1.0);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = ConversionReport::new(
            4,
            4,
            &ConvertParams::default(),
            BlockStats::default(),
            TimingBreakdown::with_total(1.5),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["blocksTotal"], 0);
        assert_eq!(json["shape"], "circle");
        assert_eq!(json["timing"]["totalMs"], 1.5);
    }

    #[test]
    fn timing_keeps_stage_order() {
        let mut timing = TimingBreakdown::with_total(3.0);
        timing.push("blocks", 2.0);
        timing.push("finalize", 0.5);
        let labels: Vec<_> = timing.stages.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["blocks", "finalize"]);
        assert_eq!(timing.stage_ms("finalize"), Some(0.5));
        assert_eq!(timing.stage_ms("decode"), None);
    }
}
