use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Fraction of the viewport an element's top edge has to cross before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.85;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_THRESHOLD
}

/// Returns a node ref to attach and whether that node has scrolled into view.
/// Once revealed it stays revealed and stops listening to scroll.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed_handle = revealed.clone();
        use_effect_with_deps(
            move |already_revealed: &bool| {
                // re-runs on reveal; the previous cleanup removes the listener and none is re-added
                let listener = (!*already_revealed).then(|| {
                    let window = web_sys::window();
                    let check = {
                        let window = window.clone();
                        move || {
                            let Some(window) = window.as_ref() else { return };
                            let Some(el) = node.cast::<Element>() else { return };
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if should_reveal(el.get_bounding_client_rect().top(), viewport_height) {
                                revealed_handle.set(true);
                            }
                        }
                    };

                    // Initial check for sections already on screen
                    check();

                    let callback = Closure::<dyn Fn()>::new(check);
                    if let Some(window) = window.as_ref() {
                        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                    (window, callback)
                });

                move || {
                    if let Some((Some(window), callback)) = listener {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            *revealed,
        );
    }

    (node, *revealed)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Transition delay in ms, used to stagger sibling cards.
    #[prop_or_default]
    pub delay_ms: u32,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), revealed.then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
