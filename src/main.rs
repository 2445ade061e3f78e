use anyhow::Result;
use log::info;
use pagefx::dom::{Document, Node, Rect, Viewport};
use pagefx::{Config, Page, UiEvent};

/// Builds the demo document and replays a scripted interaction against it,
/// logging the state the layer produces. Run with RUST_LOG=debug for the
/// per-frame values.
fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();

    let viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };
    let mut doc = Document::new(viewport);

    // Tabs: three buttons, three panes, one deck of cards behind arrows.
    let buttons: Vec<_> = ["overview", "pricing", "faq"]
        .iter()
        .map(|id| doc.insert(Node::new().with_class("tab-btn").with_data("tab", id)))
        .collect();
    for id in ["overview", "pricing", "faq"] {
        doc.insert(Node::new().with_class("tab-pane").with_id(id));
    }
    let mut deck = Node::new()
        .with_class("horizontal-scroll-view")
        .with_class("active")
        .with_rect(Rect {
            top: 0.0,
            width: viewport.width,
            height: 600.0,
        });
    deck.scroll_width = 4.0 * viewport.width;
    let deck = doc.insert(deck);
    let _prev = doc.insert(Node::new().with_class("prev-btn"));
    let next = doc.insert(Node::new().with_class("next-btn"));

    // Sticky graph: track, line, bar, and four steps.
    let track_height = 3200.0;
    let track = doc.insert(Node::new().with_class("sticky-track").with_rect(Rect {
        top: 0.0,
        width: viewport.width,
        height: track_height,
    }));
    let line = doc.insert(Node::new().with_id("mainLine").with_path_length(1480.0));
    let bar = doc.insert(Node::new().with_id("tickerProgress"));
    let dots: Vec<_> = (0..4)
        .map(|_| doc.insert(Node::new().with_class("graph-dot")))
        .collect();
    for _ in 0..4 {
        doc.insert(Node::new().with_class("graph-label"));
    }
    for _ in 0..4 {
        doc.insert(Node::new().with_class("ticker-item"));
    }

    // Load event.
    let mut page = Page::new(&mut doc, &config);

    // Flip to the pricing tab, then page the deck forward twice.
    page.handle_event(&mut doc, UiEvent::Click { target: buttons[1] });
    page.handle_event(&mut doc, UiEvent::Click { target: next });
    page.handle_event(&mut doc, UiEvent::Click { target: next });
    info!(
        "after clicks: deck scrolled to {:.0}px",
        doc.node(deck).scroll_left
    );

    // Sweep through the sticky region in 5% increments, one frame per step.
    let scrollable = track_height - viewport.height;
    for step in 0..=20 {
        let progress = step as f32 / 20.0;
        doc.node_mut(track).rect.top = -progress * scrollable;
        page.handle_event(&mut doc, UiEvent::Scroll);
        page.frame(&mut doc);

        let lit = dots
            .iter()
            .filter(|&&d| doc.node(d).style.opacity == Some(1.0))
            .count();
        info!(
            "scroll {:>3.0}%: bar {:>5.1}%, dash offset {:>6.1}, {} dots lit",
            progress * 100.0,
            doc.node(bar).style.width_pct.unwrap_or(0.0),
            doc.node(line).style.stroke_dashoffset.unwrap_or(0.0),
            lit
        );
    }

    Ok(())
}
