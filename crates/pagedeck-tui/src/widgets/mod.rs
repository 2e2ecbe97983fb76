pub mod bottom_line;
pub mod indicator;
pub mod pager_view;
pub mod title_bar;

pub use bottom_line::BottomLineWidget;
pub use indicator::IndicatorWidget;
pub use pager_view::{PagerView, RenderPage};
pub use title_bar::TitleBarWidget;
