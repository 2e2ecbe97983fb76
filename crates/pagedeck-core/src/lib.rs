pub mod config;
pub mod error;
pub mod host;
pub mod navigator;
pub mod page;
pub mod progress;
pub mod registry;

pub use config::{DeckConfig, EasingType, NavigatorConfig, SlideConfig};
pub use error::{Error, Result};
pub use host::{HostContainer, NavigationDirection};
pub use navigator::{PageNavigator, SettleObserver};
pub use page::{Interpolatable, Page, PageId};
pub use progress::ProgressSample;
pub use registry::PageRegistry;
