//! Pure layout math for the UV dial: gradient stops along the arc and label placement.

pub mod gradient;
pub mod labels;
pub mod polar;

pub use gradient::{build_gradient_stops, color_at, GradientStop};
pub use labels::{LabelSet, TimeLabel};
pub use polar::DialSpan;
