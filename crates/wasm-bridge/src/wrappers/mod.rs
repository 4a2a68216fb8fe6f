pub mod chartist;
pub mod google_charts;
pub mod js;

pub use chartist::Chartist;
pub use google_charts::GoogleVisualization;
