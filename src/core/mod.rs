pub mod bar_series;
pub mod category;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bar_series::{BarGeometry, project_grouped_bars};
pub use category::{BarSlot, CategoryScale};
pub use scale::ValueScale;
pub use ticks::value_axis_ticks;
pub use types::{PlotArea, Viewport};
