pub mod event;
pub mod pager;
pub mod slide;
pub mod widgets;

pub use pager::{PagerEvent, TerminalPager};
pub use widgets::pager_view::{PagerView, RenderPage};
