use crate::anim::{draw_phase, scroll_progress, step_index};
use crate::config::GraphTuning;
use crate::dom::{Document, NodeId};
use log::{info, trace};

const ACTIVE: &str = "active";

/// Scroll-linked animator for the sticky stock-ticker graph: draws the SVG
/// line, fills the ticker bar, and lights step dots/labels as the user scrolls
/// through the tracking container.
///
/// `new` returning `None` means the whole feature is inert for the page's
/// lifetime. That decision is taken once; a later viewport resize does not
/// revive it.
pub struct StickyGraph {
    track: NodeId,
    line: NodeId,
    progress_bar: Option<NodeId>,
    dots: Vec<NodeId>,
    labels: Vec<NodeId>,
    ticker_items: Vec<NodeId>,
    path_length: f32,
    tuning: GraphTuning,
    pending: bool,
}

impl StickyGraph {
    pub fn new(doc: &mut Document, tuning: &GraphTuning) -> Option<Self> {
        let track = doc.query_first("sticky-track")?;
        let line = doc.element_by_id("mainLine")?;
        let path_length = doc.node(line).path_length?;

        if doc.media.reduced_motion {
            info!("sticky graph: reduced motion preferred, staying inert");
            return None;
        }
        if doc.viewport.width <= tuning.mobile_breakpoint {
            info!(
                "sticky graph: viewport {} <= breakpoint {}, staying inert",
                doc.viewport.width, tuning.mobile_breakpoint
            );
            return None;
        }

        // Dash pattern spanning the whole path with a full-length offset
        // renders the line completely hidden until the first update.
        let style = &mut doc.node_mut(line).style;
        style.stroke_dasharray = Some(path_length);
        style.stroke_dashoffset = Some(path_length);

        let dots = doc.query_class("graph-dot");
        let labels = doc.query_class("graph-label");
        let ticker_items = doc.query_class("ticker-item");
        let progress_bar = doc.element_by_id("tickerProgress");

        info!(
            "sticky graph: path length {:.1}, {} dots, {} labels, {} ticker items",
            path_length,
            dots.len(),
            labels.len(),
            ticker_items.len()
        );

        Some(Self {
            track,
            line,
            progress_bar,
            dots,
            labels,
            ticker_items,
            path_length,
            tuning: tuning.clone(),
            pending: false,
        })
    }

    /// Note that the page scrolled. Repeated calls before the next frame
    /// coalesce into a single update.
    pub fn on_scroll(&mut self) {
        self.pending = true;
    }

    /// Run at most one pending update pass. The pass is a pure function of
    /// current scroll geometry, so replaying it at an unchanged position
    /// rewrites the same state.
    pub fn frame(&mut self, doc: &mut Document) {
        if !self.pending {
            return;
        }
        self.pending = false;

        let rect = doc.node(self.track).rect;
        let progress = scroll_progress(rect.top, rect.height, doc.viewport.height);

        let phase = draw_phase(progress, self.tuning.draw_divisor);
        doc.node_mut(self.line).style.stroke_dashoffset =
            Some(self.path_length * (1.0 - phase));

        if let Some(bar) = self.progress_bar {
            doc.node_mut(bar).style.width_pct = Some(progress * 100.0);
        }

        let index = step_index(progress, &self.tuning.step_thresholds);
        trace!(
            "sticky graph: progress {:.3}, phase {:.3}, step {}",
            progress,
            phase,
            index
        );
        self.apply_step(doc, index);
    }

    /// Dots light cumulatively up to `index`; label and ticker highlight is
    /// exclusive to `index`. Out-of-range indices are tolerated silently.
    fn apply_step(&self, doc: &mut Document, index: i32) {
        for &label in &self.labels {
            doc.node_mut(label).remove_class(ACTIVE);
        }
        for &item in &self.ticker_items {
            doc.node_mut(item).remove_class(ACTIVE);
        }

        for (i, &dot) in self.dots.iter().enumerate() {
            let lit = (i as i32) <= index;
            doc.node_mut(dot).style.opacity = Some(if lit { 1.0 } else { 0.0 });
        }

        if index >= 0 {
            if let Some(&label) = self.labels.get(index as usize) {
                doc.node_mut(label).add_class(ACTIVE);
            }
            if let Some(&item) = self.ticker_items.get(index as usize) {
                doc.node_mut(item).add_class(ACTIVE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, Rect, Style, Viewport};

    const TRACK_HEIGHT: f32 = 3000.0;
    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    struct Page {
        doc: Document,
        line: NodeId,
        bar: NodeId,
        track: NodeId,
        dots: Vec<NodeId>,
        labels: Vec<NodeId>,
        ticker_items: Vec<NodeId>,
    }

    fn page() -> Page {
        let mut doc = Document::new(VIEWPORT);
        let track = doc.insert(Node::new().with_class("sticky-track").with_rect(Rect {
            top: 0.0,
            width: VIEWPORT.width,
            height: TRACK_HEIGHT,
        }));
        let line = doc.insert(Node::new().with_id("mainLine").with_path_length(1200.0));
        let bar = doc.insert(Node::new().with_id("tickerProgress"));
        let dots = (0..4)
            .map(|_| doc.insert(Node::new().with_class("graph-dot")))
            .collect();
        let labels = (0..4)
            .map(|_| doc.insert(Node::new().with_class("graph-label")))
            .collect();
        let ticker_items = (0..4)
            .map(|_| doc.insert(Node::new().with_class("ticker-item")))
            .collect();
        Page {
            doc,
            line,
            bar,
            track,
            dots,
            labels,
            ticker_items,
        }
    }

    /// Position the track as if the page had scrolled `progress` of the way
    /// through the sticky region.
    fn scroll_to(page: &mut Page, progress: f32) {
        let scrollable = TRACK_HEIGHT - VIEWPORT.height;
        page.doc.node_mut(page.track).rect.top = -progress * scrollable;
    }

    fn graph(page: &mut Page) -> StickyGraph {
        StickyGraph::new(&mut page.doc, &GraphTuning::default()).unwrap()
    }

    #[test]
    fn line_starts_fully_hidden() {
        let mut p = page();
        let _g = graph(&mut p);
        let style = &p.doc.node(p.line).style;
        assert_eq!(style.stroke_dasharray, Some(1200.0));
        assert_eq!(style.stroke_dashoffset, Some(1200.0));
    }

    #[test]
    fn inert_without_track_or_line() {
        let mut doc = Document::new(VIEWPORT);
        let line = doc.insert(Node::new().with_id("mainLine").with_path_length(1200.0));
        assert!(StickyGraph::new(&mut doc, &GraphTuning::default()).is_none());

        let mut doc2 = Document::new(VIEWPORT);
        doc2.insert(Node::new().with_class("sticky-track"));
        assert!(StickyGraph::new(&mut doc2, &GraphTuning::default()).is_none());

        // Neither attempt touched the line's style.
        assert_eq!(doc.node(line).style, Style::default());
    }

    #[test]
    fn inert_under_reduced_motion() {
        let mut p = page();
        p.doc.media.reduced_motion = true;
        assert!(StickyGraph::new(&mut p.doc, &GraphTuning::default()).is_none());
        assert_eq!(p.doc.node(p.line).style, Style::default());
    }

    #[test]
    fn inert_on_narrow_viewport() {
        let mut p = page();
        p.doc.viewport.width = 900.0; // breakpoint is inclusive
        assert!(StickyGraph::new(&mut p.doc, &GraphTuning::default()).is_none());
        assert_eq!(p.doc.node(p.line).style, Style::default());
    }

    #[test]
    fn midpoint_draws_proportionally() {
        let mut p = page();
        let mut g = graph(&mut p);
        scroll_to(&mut p, 0.5);
        g.on_scroll();
        g.frame(&mut p.doc);

        // phase = 0.5 / 0.85; offset = length * (1 - phase)
        let expected = 1200.0 * (1.0 - 0.5 / 0.85);
        let offset = p.doc.node(p.line).style.stroke_dashoffset.unwrap();
        assert!((offset - expected).abs() < 1e-3);
        let width = p.doc.node(p.bar).style.width_pct.unwrap();
        assert!((width - 50.0).abs() < 1e-3);
    }

    #[test]
    fn line_fully_drawn_from_divisor_onward() {
        let mut p = page();
        let mut g = graph(&mut p);
        for progress in [0.9, 1.0] {
            scroll_to(&mut p, progress);
            g.on_scroll();
            g.frame(&mut p.doc);
            assert_eq!(p.doc.node(p.line).style.stroke_dashoffset, Some(0.0));
        }

        // At the divisor itself the offset is zero up to float rounding in
        // the track geometry.
        scroll_to(&mut p, 0.85);
        g.on_scroll();
        g.frame(&mut p.doc);
        let offset = p.doc.node(p.line).style.stroke_dashoffset.unwrap();
        assert!(offset.abs() < 1e-2);
    }

    #[test]
    fn dots_light_cumulatively() {
        let mut p = page();
        let mut g = graph(&mut p);
        scroll_to(&mut p, 0.7); // step index 2
        g.on_scroll();
        g.frame(&mut p.doc);

        let opacities: Vec<f32> = p
            .dots
            .iter()
            .map(|&d| p.doc.node(d).style.opacity.unwrap())
            .collect();
        assert_eq!(opacities, vec![1.0, 1.0, 1.0, 0.0]);
        assert!(p.doc.node(p.labels[2]).has_class("active"));
        assert!(!p.doc.node(p.labels[1]).has_class("active"));
        assert!(p.doc.node(p.ticker_items[2]).has_class("active"));
    }

    #[test]
    fn scrolling_back_unwinds_steps() {
        let mut p = page();
        let mut g = graph(&mut p);
        scroll_to(&mut p, 0.9);
        g.on_scroll();
        g.frame(&mut p.doc);
        scroll_to(&mut p, 0.1);
        g.on_scroll();
        g.frame(&mut p.doc);

        for &d in &p.dots {
            assert_eq!(p.doc.node(d).style.opacity, Some(0.0));
        }
        for &l in &p.labels {
            assert!(!p.doc.node(l).has_class("active"));
        }
    }

    #[test]
    fn frame_without_scroll_is_a_noop() {
        let mut p = page();
        let mut g = graph(&mut p);
        scroll_to(&mut p, 0.5);
        g.frame(&mut p.doc); // no scroll event yet: nothing recomputed
        assert_eq!(p.doc.node(p.bar).style.width_pct, None);
        assert_eq!(p.doc.node(p.line).style.stroke_dashoffset, Some(1200.0));
    }

    #[test]
    fn repeated_frames_at_same_position_are_idempotent() {
        let mut p = page();
        let mut g = graph(&mut p);
        scroll_to(&mut p, 0.5);
        g.on_scroll();
        g.frame(&mut p.doc);
        let offset = p.doc.node(p.line).style.stroke_dashoffset;
        let width = p.doc.node(p.bar).style.width_pct;

        g.on_scroll();
        g.on_scroll(); // coalesced
        g.frame(&mut p.doc);
        assert_eq!(p.doc.node(p.line).style.stroke_dashoffset, offset);
        assert_eq!(p.doc.node(p.bar).style.width_pct, width);
    }

    #[test]
    fn missing_bar_and_short_step_lists_are_tolerated() {
        let mut doc = Document::new(VIEWPORT);
        doc.insert(Node::new().with_class("sticky-track").with_rect(Rect {
            top: -(TRACK_HEIGHT - VIEWPORT.height),
            width: VIEWPORT.width,
            height: TRACK_HEIGHT,
        }));
        doc.insert(Node::new().with_id("mainLine").with_path_length(1200.0));
        // No bar, no labels, two dots only.
        let dots: Vec<NodeId> = (0..2)
            .map(|_| doc.insert(Node::new().with_class("graph-dot")))
            .collect();

        let mut g = StickyGraph::new(&mut doc, &GraphTuning::default()).unwrap();
        g.on_scroll();
        g.frame(&mut doc);

        for &d in &dots {
            assert_eq!(doc.node(d).style.opacity, Some(1.0));
        }
    }
}
