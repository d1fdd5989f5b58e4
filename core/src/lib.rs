pub mod filter;
pub mod route;
pub mod slider;
pub mod tilt;
pub mod trail;

pub use filter::{card_visible, FilterQuery};
pub use route::{page_key_for_template, resolve, Route};
pub use slider::SliderState;
pub use trail::{Trail, TrailParams};
