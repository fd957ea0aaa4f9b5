//! # tempviz
//!
//! Temperature sampling visualization: a numerically stable, temperature
//! scaled softmax over a small table of labeled scores, plus the reactive
//! glue that re-renders it whenever the temperature control moves.
//!
//! ## Quick Start
//!
//! ```
//! use tempviz::prelude::*;
//!
//! let table = ScoreTable::sampling_demo();
//! let dist = table.distribution(0.7).unwrap();
//! assert_eq!(dist.most_likely().unwrap().label, "deterministic");
//!
//! // Bind the table to a slider and a renderer.
//! let mut viz = TemperatureViz::new(table, TemperatureSlider::default(), |frame: &Frame| {
//!     println!("{}", text_chart(frame, 40));
//! });
//! viz.init().unwrap();
//! viz.on_input("1.5").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`softmax`]: the pure distribution computation
//! - [`slider`]: the bounded temperature control
//! - [`viz`]: re-render on every control change
//! - [`render`]: percentages and a terminal bar chart
//! - [`config`]: JSON configuration
//! - [`lessons`]: state for the other lesson widgets

pub mod config;
pub mod error;
pub mod float_fmt;
pub mod lessons;
pub mod render;
pub mod slider;
pub mod softmax;
pub mod viz;

/// Prelude module for convenient imports.
///
/// ```
/// use tempviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::VizConfig;
    pub use crate::error::{ConfigError, InvalidInput};
    pub use crate::render::{rows, text_chart, RenderedRow};
    pub use crate::slider::TemperatureSlider;
    pub use crate::softmax::{
        compute_distribution, softmax, Distribution, Probability, ScoreEntry, ScoreTable,
    };
    pub use crate::viz::{DistributionSink, Frame, TemperatureViz};
}
