//! Reactive binding between the temperature control and a renderer.
//!
//! [`TemperatureViz`] recomputes the distribution on every control change and
//! pushes a fresh [`Frame`] into its sink. Nothing is cached between events.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::InvalidInput;
use crate::slider::TemperatureSlider;
use crate::softmax::{Distribution, ScoreTable};

/// Everything a view needs to draw one state of the visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub temperature: f64,
    pub temperature_label: String,
    pub distribution: Distribution,
}

/// Receives every recomputed frame.
pub trait DistributionSink {
    fn render(&mut self, frame: &Frame);
}

impl<F> DistributionSink for F
where
    F: FnMut(&Frame),
{
    fn render(&mut self, frame: &Frame) {
        self(frame)
    }
}

pub struct TemperatureViz<S> {
    table: ScoreTable,
    slider: TemperatureSlider,
    sink: S,
}

impl<S: DistributionSink> TemperatureViz<S> {
    pub fn new(table: ScoreTable, slider: TemperatureSlider, sink: S) -> Self {
        Self {
            table,
            slider,
            sink,
        }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn slider(&self) -> &TemperatureSlider {
        &self.slider
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Initial render at the slider default.
    pub fn init(&mut self) -> Result<Frame, InvalidInput> {
        self.set_temperature(self.slider.default_value())
    }

    /// Handle a raw control value, e.g. the text of an input event.
    pub fn on_input(&mut self, raw: &str) -> Result<Frame, InvalidInput> {
        let value = self.slider.parse(raw)?;
        self.set_temperature(value)
    }

    pub fn set_temperature(&mut self, value: f64) -> Result<Frame, InvalidInput> {
        let temperature = self.slider.clamp(value);
        if temperature != value {
            warn!(requested = value, temperature, "temperature adjusted to slider stop");
        }

        let distribution = self.table.distribution(temperature)?;
        debug!(temperature, entries = distribution.len(), "recomputed distribution");

        let frame = Frame {
            temperature,
            temperature_label: self.slider.label(temperature),
            distribution,
        };
        self.sink.render(&frame);
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
    }

    impl DistributionSink for Recorder {
        fn render(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    fn viz() -> TemperatureViz<Recorder> {
        TemperatureViz::new(
            ScoreTable::sampling_demo(),
            TemperatureSlider::default(),
            Recorder::default(),
        )
    }

    #[test]
    fn init_renders_default_once() {
        let mut v = viz();
        let frame = v.init().unwrap();
        assert_eq!(frame.temperature, 1.0);
        assert_eq!(frame.temperature_label, "1.0");
        assert_eq!(v.sink().frames.len(), 1);
    }

    #[test]
    fn every_input_renders_a_fresh_frame() {
        let mut v = viz();
        v.init().unwrap();
        v.on_input("0.3").unwrap();
        v.on_input("1.7").unwrap();

        let frames = v.into_sink().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].temperature_label, "0.3");
        let top_cold = frames[1].distribution.get("deterministic").unwrap();
        let top_warm = frames[2].distribution.get("deterministic").unwrap();
        assert!(top_cold > top_warm);
    }

    #[test]
    fn out_of_range_input_is_clamped_by_the_control() {
        let mut v = viz();
        let frame = v.on_input("0").unwrap();
        assert_eq!(frame.temperature, 0.1);
        let frame = v.set_temperature(50.0).unwrap();
        assert_eq!(frame.temperature, 2.0);
    }

    #[test]
    fn unparsable_input_renders_nothing() {
        let mut v = viz();
        assert!(v.on_input("hot").is_err());
        assert!(v.sink().frames.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut v = TemperatureViz::new(
                ScoreTable::sampling_demo(),
                TemperatureSlider::default(),
                |f: &Frame| seen.push(f.temperature),
            );
            v.init().unwrap();
            v.set_temperature(0.5).unwrap();
        }
        assert_eq!(seen, vec![1.0, 0.5]);
    }
}
