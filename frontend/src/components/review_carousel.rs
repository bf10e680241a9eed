use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, PointerEvent,
};
use yew::prelude::*;

use crate::carousel::{accepts_key, CarouselState, AUTOPLAY_INTERVAL_MS, MODAL_RESUME_GRACE_MS, PREVIEW_CHARS};
use crate::reviews::Review;

/// Pointer travel below which a release still counts as a click on the card.
const CLICK_SLOP_PX: f64 = 5.0;
const FALLBACK_CARD_WIDTH: f64 = 320.0;

/// DOM listener that unregisters itself when dropped.
struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self { target, event, callback }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}

fn is_text_entry(target: Option<EventTarget>) -> bool {
    let Some(target) = target else { return false };
    target.dyn_ref::<HtmlInputElement>().is_some()
        || target.dyn_ref::<HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<HtmlSelectElement>().is_some()
        || target
            .dyn_ref::<HtmlElement>()
            .map(|el| el.is_content_editable())
            .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ReviewCarouselProps {
    pub reviews: &'static [Review],
}

pub enum Msg {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    HoverEnter,
    HoverLeave(f64),
    VisibilityChanged(bool),
    Resize(f64),
    Key(String),
    CardClicked(usize),
    CloseModal,
    GraceElapsed,
    DragStart(f64, f64),
    DragMove(f64, f64),
    DragEnd(f64),
}

pub struct ReviewCarousel {
    state: CarouselState,
    viewport_ref: NodeRef,
    suppress_click: bool,
    grace: Option<Timeout>,
    _autoplay: Interval,
    _listeners: Vec<EventListener>,
}

impl ReviewCarousel {
    fn card_width(&self) -> f64 {
        self.viewport_ref
            .cast::<HtmlElement>()
            .map(|el| el.client_width() as f64 / self.state.visible_count().get() as f64)
            .filter(|w| *w > 0.0)
            .unwrap_or(FALLBACK_CARD_WIDTH)
    }

    fn schedule_resume(&mut self, ctx: &Context<Self>) {
        if self.state.resume_pending() && self.grace.is_none() {
            let link = ctx.link().clone();
            self.grace = Some(Timeout::new(MODAL_RESUME_GRACE_MS, move || {
                link.send_message(Msg::GraceElapsed)
            }));
        }
    }

    fn view_card(&self, ctx: &Context<Self>, index: usize, review: &Review) -> Html {
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::CardClicked(index));
        let truncated = review.is_truncated(PREVIEW_CHARS);
        let in_view = index >= self.state.index() && index < self.state.index() + self.state.visible_count().get();

        html! {
            <div class="review-slot" key={review.id}>
                <article
                    class={classes!("review-card", in_view.then_some("in-view"))}
                    {onclick}
                    aria-hidden={(!in_view).to_string()}
                >
                    { stars(review.filled_stars()) }
                    <blockquote class="review-quote">
                        {"“"}{ review.preview(PREVIEW_CHARS) }{"”"}
                    </blockquote>
                    if truncated {
                        <span class="review-more">{"Read full review"}</span>
                    }
                    <footer class="review-author">
                        <div class="review-avatar">{ initials(review.author) }</div>
                        <div>
                            <p class="review-name">{ review.author }</p>
                            <p class="review-role">{ review.attribution() }</p>
                        </div>
                        <span class="review-date">{ review.date }</span>
                    </footer>
                </article>
            </div>
        }
    }

    fn view_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(review) = self.state.modal().and_then(|i| ctx.props().reviews.get(i)) else {
            return html! {};
        };
        let close = ctx.link().callback(|_: MouseEvent| Msg::CloseModal);

        html! {
            <div class="review-modal-backdrop" onclick={close.clone()}>
                <div
                    class="review-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-label={format!("Review by {}", review.author)}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <button class="review-modal-close" onclick={close} aria-label="Close review">{"×"}</button>
                    { stars(review.filled_stars()) }
                    <blockquote class="review-modal-quote">{"“"}{ review.quote_text }{"”"}</blockquote>
                    <p class="review-name">{ review.author }</p>
                    <p class="review-role">{ review.attribution() }</p>
                    <p class="review-date">{ review.date }</p>
                </div>
            </div>
        }
    }
}

fn stars(filled: u8) -> Html {
    html! {
        <div class="review-stars" aria-label={format!("Rated {} out of 5", filled)}>
            { for (0..5u8).map(|i| html! {
                <span class={if i < filled { "star filled" } else { "star" }}>{"★"}</span>
            }) }
        </div>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

impl Component for ReviewCarousel {
    type Message = Msg;
    type Properties = ReviewCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let autoplay = Interval::new(AUTOPLAY_INTERVAL_MS, move || link.send_message(Msg::Tick));

        let mut listeners = Vec::new();
        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            listeners.push(EventListener::new(window.clone().into(), "resize", move |_| {
                link.send_message(Msg::Resize(viewport_width()))
            }));

            let link = ctx.link().clone();
            listeners.push(EventListener::new(window.clone().into(), "keydown", move |e: Event| {
                if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                    if accepts_key(&key.key(), is_text_entry(e.target())) {
                        link.send_message(Msg::Key(key.key()));
                    }
                }
            }));

            // a release anywhere on the page ends a drag that left the viewport
            let link = ctx.link().clone();
            listeners.push(EventListener::new(window.clone().into(), "pointerup", move |e: Event| {
                link.send_message(Msg::DragEnd(e.time_stamp()))
            }));

            if let Some(document) = window.document() {
                let link = ctx.link().clone();
                let doc = document.clone();
                listeners.push(EventListener::new(document.into(), "visibilitychange", move |_| {
                    link.send_message(Msg::VisibilityChanged(doc.hidden()))
                }));
            }
        }

        Self {
            state: CarouselState::new(ctx.props().reviews.len(), viewport_width()),
            viewport_ref: NodeRef::default(),
            suppress_click: false,
            grace: None,
            _autoplay: autoplay,
            _listeners: listeners,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state = CarouselState::new(ctx.props().reviews.len(), viewport_width());
        self.grace = None;
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = match msg {
            Msg::Tick => self.state.tick(),
            Msg::Next => self.state.next(),
            Msg::Prev => self.state.prev(),
            Msg::GoTo(index) => self.state.go_to(index),
            Msg::HoverEnter => {
                self.state.hover_enter();
                false
            }
            Msg::HoverLeave(t) => {
                self.state.hover_leave();
                // leaving mid-drag counts as a release
                self.state.drag_end(self.card_width(), t).is_some()
            }
            Msg::VisibilityChanged(hidden) => {
                debug!("carousel visibility changed, hidden={}", hidden);
                self.state.set_document_hidden(hidden);
                false
            }
            Msg::Resize(width) => self.state.resize(width),
            Msg::Key(key) => self.state.handle_key(&key),
            Msg::CardClicked(index) => {
                if std::mem::take(&mut self.suppress_click) {
                    false
                } else {
                    self.grace = None;
                    self.state.open_modal(index)
                }
            }
            Msg::CloseModal => self.state.close_modal(),
            Msg::GraceElapsed => {
                self.grace = None;
                self.state.grace_elapsed();
                false
            }
            Msg::DragStart(x, t) => {
                self.suppress_click = false;
                self.state.drag_start(x, t);
                self.state.is_dragging()
            }
            Msg::DragMove(x, t) => self.state.drag_move(x, t),
            Msg::DragEnd(t) => match self.state.drag_end(self.card_width(), t) {
                Some(offset) => {
                    self.suppress_click = offset.abs() > CLICK_SLOP_PX;
                    true
                }
                None => false,
            },
        };

        self.schedule_resume(ctx);
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let reviews = ctx.props().reviews;
        if reviews.is_empty() {
            return html! {};
        }

        let on_pointer_down = link.callback(|e: PointerEvent| {
            // keep receiving pointerup even when the release lands outside the viewport
            let _ = e.target_unchecked_into::<Element>().set_pointer_capture(e.pointer_id());
            Msg::DragStart(e.client_x() as f64, e.time_stamp())
        });
        let on_pointer_move = link.batch_callback(|e: PointerEvent| {
            // only buttons-down moves belong to a drag
            (e.buttons() != 0).then(|| Msg::DragMove(e.client_x() as f64, e.time_stamp()))
        });
        let on_pointer_up = link.callback(|e: PointerEvent| Msg::DragEnd(e.time_stamp()));

        let track_style = format!(
            "--visible: {}; transform: translateX(calc(-{:.4}% + {:.1}px));",
            self.state.visible_count().get(),
            self.state.track_offset_percent(),
            self.state.drag_offset(),
        );
        let index = self.state.index();

        html! {
            <div class="review-carousel">
                <style>{CAROUSEL_CSS}</style>
                <div
                    class="carousel-frame"
                    onmouseenter={link.callback(|_: MouseEvent| Msg::HoverEnter)}
                    onmouseleave={link.callback(|e: MouseEvent| Msg::HoverLeave(e.time_stamp()))}
                >
                    <button
                        class="carousel-arrow prev"
                        aria-label="Previous review"
                        disabled={index == 0}
                        onclick={link.callback(|_: MouseEvent| Msg::Prev)}
                    >{"‹"}</button>

                    <div
                        class="carousel-viewport"
                        ref={self.viewport_ref.clone()}
                        onpointerdown={on_pointer_down}
                        onpointermove={on_pointer_move}
                        onpointerup={on_pointer_up.clone()}
                        onpointercancel={on_pointer_up}
                    >
                        <div
                            class={classes!("carousel-track", self.state.is_dragging().then_some("dragging"))}
                            style={track_style}
                        >
                            { for reviews.iter().enumerate().map(|(i, r)| self.view_card(ctx, i, r)) }
                        </div>
                    </div>

                    <button
                        class="carousel-arrow next"
                        aria-label="Next review"
                        disabled={index >= self.state.max_index()}
                        onclick={link.callback(|_: MouseEvent| Msg::Next)}
                    >{"›"}</button>
                </div>

                <div class="carousel-dots" role="tablist">
                    { for (0..self.state.dot_count()).map(|i| html! {
                        <button
                            class={classes!("carousel-dot", (i == index).then_some("active"))}
                            role="tab"
                            aria-selected={(i == index).to_string()}
                            aria-label={format!("Show reviews from {}", i + 1)}
                            onclick={link.callback(move |_: MouseEvent| Msg::GoTo(i))}
                        />
                    }) }
                </div>

                { self.view_modal(ctx) }
            </div>
        }
    }
}

const CAROUSEL_CSS: &str = r#"
    .review-carousel {
        max-width: 1200px;
        margin: 0 auto;
        position: relative;
    }
    .carousel-frame {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .carousel-viewport {
        overflow: hidden;
        flex: 1;
        touch-action: pan-y;
        cursor: grab;
        user-select: none;
    }
    .carousel-viewport:active {
        cursor: grabbing;
    }
    .carousel-track {
        display: flex;
        transition: transform 0.55s cubic-bezier(0.22, 1, 0.36, 1);
        will-change: transform;
    }
    .carousel-track.dragging {
        transition: none;
    }
    .review-slot {
        flex: 0 0 calc(100% / var(--visible));
        padding: 0 0.75rem;
        box-sizing: border-box;
    }
    .review-card {
        height: 100%;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.04);
        backdrop-filter: blur(12px);
        transition: border-color 0.3s ease, transform 0.3s ease;
        cursor: pointer;
    }
    .review-card:hover {
        border-color: rgba(99, 102, 241, 0.5);
        transform: translateY(-4px);
    }
    .review-stars .star {
        color: #3f3f46;
        margin-right: 2px;
    }
    .review-stars .star.filled {
        color: #8b5cf6;
    }
    .review-quote {
        margin: 0;
        flex: 1;
        color: rgba(229, 231, 235, 0.95);
        font-style: italic;
        line-height: 1.6;
    }
    .review-more {
        color: #93c5fd;
        font-size: 0.85rem;
    }
    .review-author {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .review-avatar {
        width: 2.75rem;
        height: 2.75rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        background: linear-gradient(90deg, #3b82f6, #6366f1, #8b5cf6);
    }
    .review-name {
        margin: 0;
        font-weight: 600;
        color: #fff;
    }
    .review-role, .review-date {
        margin: 0;
        font-size: 0.85rem;
        color: #9ca3af;
    }
    .review-date {
        margin-left: auto;
    }
    .carousel-arrow {
        width: 2.75rem;
        height: 2.75rem;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .carousel-arrow:disabled {
        opacity: 0.3;
        cursor: default;
    }
    .carousel-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 2rem;
    }
    .carousel-dot {
        width: 0.6rem;
        height: 0.6rem;
        border-radius: 999px;
        border: none;
        background: rgba(255, 255, 255, 0.25);
        cursor: pointer;
        transition: width 0.3s ease, background 0.3s ease;
    }
    .carousel-dot.active {
        width: 1.75rem;
        background: linear-gradient(90deg, #3b82f6, #8b5cf6);
    }
    .review-modal-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.75);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 100;
        padding: 1.5rem;
    }
    .review-modal {
        position: relative;
        max-width: 640px;
        width: 100%;
        padding: 2.5rem;
        border-radius: 1rem;
        background: #0b0b12;
        border: 1px solid rgba(99, 102, 241, 0.35);
    }
    .review-modal-quote {
        margin: 1rem 0 1.5rem;
        font-size: 1.15rem;
        line-height: 1.7;
        color: #e5e7eb;
    }
    .review-modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.75rem;
        cursor: pointer;
    }
    @media (max-width: 639px) {
        .carousel-arrow {
            display: none;
        }
    }
"#;
