pub mod cache;
pub mod classifier;
pub mod clock;
pub mod render;
pub mod resolver;
pub mod session;
pub mod timezone;

pub use crate::domain::model::{Country, Dataset, Destination};
pub use crate::domain::ports::{ConfigProvider, DataSource, ImageProbe, RenderTarget, TimeSource};
pub use crate::utils::error::Result;
