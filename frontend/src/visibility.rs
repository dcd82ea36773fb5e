use std::collections::BTreeSet;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config;

/// Landing sections that fade in once scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Services,
    Benefits,
    Testimonials,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Benefits => "benefits",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Position of one `data-animate` element at the time of a scroll event.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
}

pub fn enters_viewport(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * config::REVEAL_VIEWPORT_RATIO
}

pub fn past_scroll_threshold(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_OFFSET_PX
}

/// Ids of sections that have been on screen at least once. Ids are only ever
/// added, so an entrance animation plays once per page load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleSections {
    ids: BTreeSet<String>,
}

pub struct SectionsMeasured {
    pub viewport_height: f64,
    pub sections: Vec<SectionRect>,
}

impl VisibleSections {
    pub fn contains(&self, section: Section) -> bool {
        self.ids.contains(section.id())
    }

    /// Ids from `measured` that would be newly added.
    fn entering<'a>(&self, measured: &'a SectionsMeasured) -> Vec<&'a str> {
        measured
            .sections
            .iter()
            .filter(|s| enters_viewport(s.top, measured.viewport_height))
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty() && !self.ids.contains(*id))
            .collect()
    }
}

impl Reducible for VisibleSections {
    type Action = SectionsMeasured;

    fn reduce(self: Rc<Self>, measured: SectionsMeasured) -> Rc<Self> {
        let entering = self.entering(&measured);
        if entering.is_empty() {
            // Same Rc back, no re-render.
            return self;
        }
        let mut next = (*self).clone();
        next.ids.extend(entering.into_iter().map(str::to_owned));
        Rc::new(next)
    }
}

fn measure_sections(document: &Document) -> Vec<SectionRect> {
    let nodes = match document.query_selector_all("[data-animate]") {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!("Could not query animated sections: {:?}", e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| SectionRect {
            id: el.id(),
            top: el.get_bounding_client_rect().top(),
        })
        .collect()
}

/// Attaches `on_scroll` to the window scroll event and also calls it once right away.
/// The listener is removed when the calling component unmounts.
#[hook]
fn use_window_scroll<F>(on_scroll: F)
where
    F: Fn(&web_sys::Window) + 'static,
{
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let target = window.clone();
                let callback =
                    Closure::wrap(Box::new(move || on_scroll(&target)) as Box<dyn FnMut()>);
                if let Err(e) = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    warn!("Could not attach scroll listener: {:?}", e);
                }
                // Initial check
                let _ = callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

/// Tracks which `data-animate` sections have entered the viewport.
#[hook]
pub fn use_section_visibility() -> UseReducerHandle<VisibleSections> {
    let visible = use_reducer(VisibleSections::default);
    let dispatcher = visible.dispatcher();

    use_window_scroll(move |window| {
        let Some(document) = window.document() else {
            return;
        };
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let sections = measure_sections(&document);
        if !sections.is_empty() {
            dispatcher.dispatch(SectionsMeasured {
                viewport_height,
                sections,
            });
        }
    });

    visible
}

/// True once the page is scrolled past the nav bar threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);
    let setter = scrolled.setter();

    use_window_scroll(move |window| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        setter.set(past_scroll_threshold(scroll_y));
    });

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &str, top: f64) -> SectionRect {
        SectionRect {
            id: id.to_string(),
            top,
        }
    }

    fn measured(viewport_height: f64, sections: Vec<SectionRect>) -> SectionsMeasured {
        SectionsMeasured {
            viewport_height,
            sections,
        }
    }

    #[test]
    fn reveal_line_is_eighty_percent_of_viewport() {
        assert!(enters_viewport(799.0, 1000.0));
        assert!(!enters_viewport(800.0, 1000.0));
        assert!(enters_viewport(-300.0, 1000.0));
    }

    #[test]
    fn scrolled_after_fifty_pixels() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(50.0));
        assert!(past_scroll_threshold(50.5));
    }

    #[test]
    fn sections_below_the_fold_stay_hidden() {
        let visible = Rc::new(VisibleSections::default()).reduce(measured(
            1000.0,
            vec![rect("services", 400.0), rect("contact", 2400.0)],
        ));
        assert!(visible.contains(Section::Services));
        assert!(!visible.contains(Section::Contact));
        assert_eq!(visible.ids.len(), 1);
    }

    #[test]
    fn visible_set_never_shrinks() {
        let mut visible = Rc::new(VisibleSections::default());
        let scroll_positions = [
            vec![rect("services", 100.0), rect("benefits", 900.0)],
            vec![rect("services", -600.0), rect("benefits", 200.0)],
            // scrolled back to the top
            vec![rect("services", 900.0), rect("benefits", 1800.0)],
            vec![rect("testimonials", 700.0), rect("contact", 5000.0)],
        ];
        let mut previous = 0;
        for sections in scroll_positions {
            visible = visible.reduce(measured(1000.0, sections));
            assert!(visible.ids.len() >= previous);
            previous = visible.ids.len();
        }
        assert!(visible.contains(Section::Services));
        assert!(visible.contains(Section::Benefits));
        assert!(visible.contains(Section::Testimonials));
        assert!(!visible.contains(Section::Contact));
    }

    #[test]
    fn nothing_new_returns_same_state() {
        let visible = Rc::new(VisibleSections::default())
            .reduce(measured(1000.0, vec![rect("services", 10.0)]));
        let again = visible
            .clone()
            .reduce(measured(1000.0, vec![rect("services", 20.0), rect("", 0.0)]));
        assert!(Rc::ptr_eq(&visible, &again));
    }

    #[test]
    fn section_anchors() {
        assert_eq!(Section::Services.anchor(), "#services");
        assert_eq!(Section::Contact.id(), "contact");
    }
}
