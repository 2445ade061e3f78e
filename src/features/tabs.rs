use crate::dom::{Document, NodeId};
use log::{debug, info};

const ACTIVE: &str = "active";

/// Tab switching plus prev/next pagination for the horizontal card decks.
///
/// Built once at page load; holds handles, never element state. All state the
/// controller acts on is re-read from the document at click time.
pub struct TabController {
    buttons: Vec<NodeId>,
    panes: Vec<NodeId>,
    /// Pagination arrows are only wired when both are present.
    arrows: Option<(NodeId, NodeId)>,
}

impl TabController {
    pub fn new(doc: &Document) -> Self {
        let buttons = doc.query_class("tab-btn");
        let panes = doc.query_class("tab-pane");

        let prev = doc.query_first("prev-btn");
        let next = doc.query_first("next-btn");
        let arrows = match (prev, next) {
            (Some(p), Some(n)) => Some((p, n)),
            _ => None,
        };

        info!(
            "tabs: {} buttons, {} panes, arrows wired: {}",
            buttons.len(),
            panes.len(),
            arrows.is_some()
        );

        Self {
            buttons,
            panes,
            arrows,
        }
    }

    pub fn handle_click(&self, doc: &mut Document, target: NodeId) {
        if self.buttons.contains(&target) {
            self.activate_tab(doc, target);
        } else if let Some((prev, next)) = self.arrows {
            if target == prev {
                self.page(doc, -1.0);
            } else if target == next {
                self.page(doc, 1.0);
            }
        }
    }

    /// Deactivate everything, then activate the clicked button and the pane
    /// its `data-tab` points at. A dangling target id leaves no pane active;
    /// the button still lights up.
    fn activate_tab(&self, doc: &mut Document, button: NodeId) {
        for &b in &self.buttons {
            doc.node_mut(b).remove_class(ACTIVE);
        }
        for &p in &self.panes {
            doc.node_mut(p).remove_class(ACTIVE);
        }

        doc.node_mut(button).add_class(ACTIVE);

        let target_id = doc.node(button).dataset.get("tab").cloned();
        if let Some(target_id) = target_id {
            if let Some(pane) = doc.element_by_id(&target_id) {
                doc.node_mut(pane).add_class(ACTIVE);
            } else {
                debug!("tabs: no pane with id {:?}", target_id);
            }
        }
    }

    /// Scroll the active deck by one viewport width. Card plus gap span the
    /// full viewport, so one width is exactly one card. Overscroll is clamped
    /// by the container, not here.
    fn page(&self, doc: &mut Document, direction: f32) {
        let active = doc
            .query_class("horizontal-scroll-view")
            .into_iter()
            .find(|&n| doc.node(n).has_class(ACTIVE));

        if let Some(view) = active {
            let dx = direction * doc.viewport.width;
            doc.scroll_by(view, dx);
        }
    }
}
