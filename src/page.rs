use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::features::{sticky_graph::StickyGraph, tabs::TabController};
use log::info;

/// Interaction sources the layer listens to.
#[derive(Debug, Clone, Copy)]
pub enum UiEvent {
    Click { target: NodeId },
    Scroll,
}

/// The whole interaction layer for one page, wired at load time.
///
/// The two components are independent: tabs never observe the graph and the
/// graph never observes the tabs. `graph` is `None` when its setup guard
/// declined (missing elements, reduced motion, narrow viewport) and stays
/// `None` for the page's lifetime.
pub struct Page {
    tabs: TabController,
    graph: Option<StickyGraph>,
}

impl Page {
    pub fn new(doc: &mut Document, config: &Config) -> Self {
        let tabs = TabController::new(doc);
        let graph = StickyGraph::new(doc, &config.graph);
        info!("page wired, graph animator: {}", graph.is_some());
        Self { tabs, graph }
    }

    pub fn graph_active(&self) -> bool {
        self.graph.is_some()
    }

    pub fn handle_event(&mut self, doc: &mut Document, event: UiEvent) {
        match event {
            UiEvent::Click { target } => self.tabs.handle_click(doc, target),
            UiEvent::Scroll => {
                if let Some(graph) = &mut self.graph {
                    graph.on_scroll();
                }
            }
        }
    }

    /// Frame tick: flushes at most one pending graph update.
    pub fn frame(&mut self, doc: &mut Document) {
        if let Some(graph) = &mut self.graph {
            graph.frame(doc);
        }
    }
}
