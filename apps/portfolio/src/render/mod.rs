// Rendering: section lists, reveal/interaction state machines, navigation state,
// the certification card stack, and the askama page + stylesheet templates.
// Everything here is pure; handlers resolve request state and call in.

pub mod card_stack;
pub mod motion;
pub mod nav;
pub mod page;
pub mod section;
pub mod stylesheet;

pub use page::{build_page, PageLocation, PageQuery};
pub use stylesheet::build_stylesheet;
