//! Headless interaction layer for the landing page: tab/pane switching with
//! horizontal-scroll pagination, and a scroll-linked animation of the sticky
//! SVG graph with its step indicator.

pub mod anim;
pub mod config;
pub mod dom;
pub mod features;
pub mod page;

pub use config::Config;
pub use dom::{Document, Media, Node, NodeId, Rect, Style, Viewport};
pub use page::{Page, UiEvent};
