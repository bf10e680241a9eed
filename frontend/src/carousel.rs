// Interaction model for the testimonials carousel. Everything here is plain data so the
// Yew component only has to translate DOM events into calls and re-render.

pub const AUTOPLAY_INTERVAL_MS: u32 = 4_500;
pub const MODAL_RESUME_GRACE_MS: u32 = 600;
pub const PREVIEW_CHARS: usize = 160;

/// Release distance in px past which a drag always moves at least one card.
pub const DRAG_OFFSET_THRESHOLD: f64 = 60.0;
/// Release speed in px/ms past which a flick always moves at least one card.
pub const DRAG_VELOCITY_THRESHOLD: f64 = 0.5;
/// A pointer held still this long before release no longer counts as flicking.
pub const FLICK_RELEASE_WINDOW_MS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibleCount {
    One = 1,
    Two = 2,
    Three = 3,
}

impl VisibleCount {
    pub fn for_viewport(width: f64) -> Self {
        if width < 640.0 {
            VisibleCount::One
        } else if width < 1024.0 {
            VisibleCount::Two
        } else {
            VisibleCount::Three
        }
    }

    pub fn get(self) -> usize {
        self as usize
    }
}

/// Pointer samples for a drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    start_x: f64,
    last_x: f64,
    last_t: f64,
    velocity: f64,
}

impl DragTracker {
    pub fn start(x: f64, t_ms: f64) -> Self {
        Self {
            start_x: x,
            last_x: x,
            last_t: t_ms,
            velocity: 0.0,
        }
    }

    pub fn move_to(&mut self, x: f64, t_ms: f64) {
        let dt = t_ms - self.last_t;
        if dt > 0.0 {
            self.velocity = (x - self.last_x) / dt;
        }
        self.last_x = x;
        self.last_t = t_ms;
    }

    pub fn offset(&self) -> f64 {
        self.last_x - self.start_x
    }

    /// Speed at release time, zero when the pointer rested before letting go.
    pub fn release_velocity(&self, t_release_ms: f64) -> f64 {
        if t_release_ms - self.last_t > FLICK_RELEASE_WINDOW_MS {
            0.0
        } else {
            self.velocity
        }
    }
}

/// Whether a window-level keydown should reach the carousel. Arrow keys pressed while
/// typing in a form field move the caret, not the testimonials.
pub fn accepts_key(key: &str, from_text_entry: bool) -> bool {
    key == "Escape" || !from_text_entry
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    index: usize,
    total: usize,
    visible: VisibleCount,
    hovered: bool,
    hidden: bool,
    resume_pending: bool,
    modal: Option<usize>,
    drag: Option<DragTracker>,
}

impl CarouselState {
    pub fn new(total: usize, viewport_width: f64) -> Self {
        Self {
            index: 0,
            total,
            visible: VisibleCount::for_viewport(viewport_width),
            hovered: false,
            hidden: false,
            resume_pending: false,
            modal: None,
            drag: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible_count(&self) -> VisibleCount {
        self.visible
    }

    /// Last index that still fills the viewport with cards.
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible.get())
    }

    pub fn dot_count(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn modal(&self) -> Option<usize> {
        self.modal
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag.map(|d| d.offset()).unwrap_or(0.0)
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.hidden || self.resume_pending || self.modal.is_some() || self.drag.is_some()
    }

    pub fn resume_pending(&self) -> bool {
        self.resume_pending
    }

    /// Translation of the track in percent of the viewport width.
    pub fn track_offset_percent(&self) -> f64 {
        self.index as f64 * 100.0 / self.visible.get() as f64
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.max_index());
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Autoplay step. Wraps back to the first card once the last position is on screen.
    pub fn tick(&mut self) -> bool {
        if self.is_paused() || self.total == 0 {
            return false;
        }
        if self.index >= self.max_index() {
            self.go_to(0)
        } else {
            self.next()
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    pub fn set_document_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn open_modal(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }
        self.modal = Some(index);
        self.resume_pending = false;
        true
    }

    /// Autoplay stays paused until `grace_elapsed` is called.
    pub fn close_modal(&mut self) -> bool {
        if self.modal.take().is_none() {
            return false;
        }
        self.resume_pending = true;
        true
    }

    pub fn grace_elapsed(&mut self) {
        self.resume_pending = false;
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" => self.close_modal(),
            "ArrowLeft" if self.modal.is_none() => self.prev(),
            "ArrowRight" if self.modal.is_none() => self.next(),
            _ => false,
        }
    }

    /// Recomputes the visible count for a new viewport width, keeping the active card
    /// unless it no longer fits.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let visible = VisibleCount::for_viewport(viewport_width);
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        self.index = self.index.min(self.max_index());
        true
    }

    pub fn drag_start(&mut self, x: f64, t_ms: f64) {
        if self.total == 0 || self.modal.is_some() {
            return;
        }
        self.drag = Some(DragTracker::start(x, t_ms));
    }

    pub fn drag_move(&mut self, x: f64, t_ms: f64) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.move_to(x, t_ms);
                true
            }
            None => false,
        }
    }

    /// Settles a released drag onto a card boundary. Returns the released offset so the
    /// caller can tell a drag from a click.
    pub fn drag_end(&mut self, card_width: f64, t_release_ms: f64) -> Option<f64> {
        let drag = self.drag.take()?;
        let offset = drag.offset();
        let velocity = drag.release_velocity(t_release_ms);
        let card_width = card_width.max(1.0);

        let target = if offset.abs() > DRAG_OFFSET_THRESHOLD || velocity.abs() > DRAG_VELOCITY_THRESHOLD {
            let steps = ((offset.abs() / card_width).round() as usize).max(1);
            // dragging left pulls later cards into view
            let forward = if offset.abs() > DRAG_OFFSET_THRESHOLD {
                offset < 0.0
            } else {
                velocity < 0.0
            };
            if forward {
                self.index.saturating_add(steps)
            } else {
                self.index.saturating_sub(steps)
            }
        } else {
            let position = self.index as f64 * card_width - offset;
            (position / card_width).round().max(0.0) as usize
        };

        self.go_to(target);
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 1280.0;
    const MEDIUM: f64 = 800.0;
    const NARROW: f64 = 375.0;

    #[test]
    fn visible_count_follows_breakpoints() {
        assert_eq!(VisibleCount::for_viewport(0.0), VisibleCount::One);
        assert_eq!(VisibleCount::for_viewport(639.0), VisibleCount::One);
        assert_eq!(VisibleCount::for_viewport(639.9), VisibleCount::One);
        assert_eq!(VisibleCount::for_viewport(640.0), VisibleCount::Two);
        assert_eq!(VisibleCount::for_viewport(1023.0), VisibleCount::Two);
        assert_eq!(VisibleCount::for_viewport(1024.0), VisibleCount::Three);
        assert_eq!(VisibleCount::for_viewport(2560.0), VisibleCount::Three);
    }

    #[test]
    fn next_clamps_at_last_full_page() {
        let mut c = CarouselState::new(4, WIDE);
        assert_eq!(c.visible_count().get(), 3);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 1);
        assert_eq!(c.dot_count(), 2);
    }

    #[test]
    fn prev_clamps_at_zero() {
        let mut c = CarouselState::new(5, NARROW);
        assert!(!c.prev());
        assert_eq!(c.index(), 0);
        c.next();
        assert!(c.prev());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_is_clamped() {
        let mut c = CarouselState::new(6, MEDIUM);
        c.go_to(99);
        assert_eq!(c.index(), 4);
        c.go_to(2);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn autoplay_wraps_after_last_position() {
        let mut c = CarouselState::new(3, NARROW);
        assert!(c.tick());
        assert!(c.tick());
        assert_eq!(c.index(), 2);
        assert!(c.tick());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn autoplay_is_idle_when_everything_fits() {
        let mut c = CarouselState::new(2, WIDE);
        assert!(!c.tick());
        assert_eq!(c.index(), 0);
        let mut single = CarouselState::new(1, NARROW);
        assert!(!single.tick());
        assert_eq!(single.index(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes_autoplay() {
        let mut c = CarouselState::new(5, NARROW);
        c.hover_enter();
        assert!(c.is_paused());
        for _ in 0..10 {
            assert!(!c.tick());
        }
        assert_eq!(c.index(), 0);
        c.hover_leave();
        assert!(!c.is_paused());
        assert!(c.tick());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn hidden_document_pauses_autoplay() {
        let mut c = CarouselState::new(5, NARROW);
        c.set_document_hidden(true);
        assert!(!c.tick());
        c.set_document_hidden(false);
        assert!(c.tick());
    }

    #[test]
    fn modal_pauses_until_grace_elapses() {
        let mut c = CarouselState::new(5, NARROW);
        assert!(c.open_modal(3));
        assert_eq!(c.modal(), Some(3));
        assert!(!c.tick());

        assert!(c.close_modal());
        assert_eq!(c.modal(), None);
        assert!(c.resume_pending());
        assert!(!c.tick());

        c.grace_elapsed();
        assert!(!c.is_paused());
        assert!(c.tick());
    }

    #[test]
    fn open_modal_rejects_unknown_card() {
        let mut c = CarouselState::new(2, NARROW);
        assert!(!c.open_modal(2));
        assert_eq!(c.modal(), None);
        assert!(!c.close_modal());
        assert!(!c.resume_pending());
    }

    #[test]
    fn keyboard_navigates_and_escape_closes_modal() {
        let mut c = CarouselState::new(5, NARROW);
        assert!(c.handle_key("ArrowRight"));
        assert!(c.handle_key("ArrowRight"));
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.index(), 1);

        c.open_modal(1);
        assert!(!c.handle_key("ArrowRight"));
        assert_eq!(c.index(), 1);
        assert!(c.handle_key("Escape"));
        assert_eq!(c.modal(), None);
        assert!(!c.handle_key("Escape"));
        assert!(!c.handle_key("Enter"));
    }

    #[test]
    fn resize_keeps_index_when_it_still_fits() {
        let mut c = CarouselState::new(6, NARROW);
        c.go_to(2);
        assert!(c.resize(WIDE));
        assert_eq!(c.visible_count(), VisibleCount::Three);
        assert_eq!(c.index(), 2);
        assert!(!c.resize(WIDE + 100.0));
    }

    #[test]
    fn resize_clamps_index_when_viewport_grows() {
        let mut c = CarouselState::new(4, NARROW);
        c.go_to(3);
        c.resize(WIDE);
        assert_eq!(c.index(), 1);
        c.resize(NARROW);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn long_drag_moves_by_card_widths() {
        let mut c = CarouselState::new(8, NARROW);
        c.drag_start(500.0, 0.0);
        assert!(c.is_paused());
        c.drag_move(400.0, 200.0);
        c.drag_move(280.0, 600.0);
        assert_eq!(c.drag_offset(), -220.0);
        assert_eq!(c.drag_end(100.0, 620.0), Some(-220.0));
        assert_eq!(c.index(), 2);
        assert!(!c.is_dragging());
        assert!(!c.is_paused());
    }

    #[test]
    fn drag_to_the_right_goes_back_and_clamps() {
        let mut c = CarouselState::new(8, NARROW);
        c.go_to(1);
        c.drag_start(100.0, 0.0);
        c.drag_move(500.0, 800.0);
        c.drag_end(100.0, 810.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn fast_flick_moves_at_least_one_card() {
        let mut c = CarouselState::new(5, NARROW);
        c.drag_start(300.0, 0.0);
        c.drag_move(280.0, 10.0);
        c.drag_end(320.0, 16.0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn flick_held_before_release_snaps_back() {
        let mut c = CarouselState::new(5, NARROW);
        c.drag_start(300.0, 0.0);
        c.drag_move(280.0, 10.0);
        // pointer rests for 300ms, so the earlier speed is stale
        c.drag_end(320.0, 310.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn release_velocity_expires() {
        let mut drag = DragTracker::start(0.0, 0.0);
        drag.move_to(-40.0, 20.0);
        assert_eq!(drag.release_velocity(20.0), -2.0);
        assert_eq!(drag.release_velocity(120.0), -2.0);
        assert_eq!(drag.release_velocity(121.0), 0.0);
    }

    #[test]
    fn keys_typed_into_fields_stay_out_of_the_carousel() {
        assert!(accepts_key("ArrowRight", false));
        assert!(accepts_key("ArrowLeft", false));
        assert!(!accepts_key("ArrowRight", true));
        assert!(!accepts_key("ArrowLeft", true));
        assert!(accepts_key("Escape", true));
        assert!(accepts_key("Escape", false));
    }

    #[test]
    fn slow_short_drag_snaps_back() {
        let mut c = CarouselState::new(5, NARROW);
        c.go_to(2);
        c.drag_start(300.0, 0.0);
        c.drag_move(270.0, 500.0);
        c.drag_end(320.0, 510.0);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn slow_short_drag_snaps_to_nearest_boundary_on_narrow_cards() {
        let mut c = CarouselState::new(5, NARROW);
        c.drag_start(300.0, 0.0);
        c.drag_move(250.0, 1000.0);
        // 50px against 80px cards is past the halfway mark
        c.drag_end(80.0, 1000.0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn drag_end_without_start_is_ignored() {
        let mut c = CarouselState::new(5, NARROW);
        assert_eq!(c.drag_end(100.0, 0.0), None);
        assert!(!c.drag_move(10.0, 10.0));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = CarouselState::new(0, WIDE);
        assert_eq!(c.dot_count(), 0);
        assert!(!c.next());
        assert!(!c.tick());
        assert!(!c.open_modal(0));
        c.drag_start(0.0, 0.0);
        assert!(!c.is_dragging());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_any_operation_sequence() {
        let widths = [NARROW, MEDIUM, WIDE];
        for total in 1..=8usize {
            let mut c = CarouselState::new(total, MEDIUM);
            // small LCG so the sequence is deterministic
            let mut seed: u32 = 0x2545_F491 ^ total as u32;
            for step in 0..500 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                match (seed >> 16) % 7 {
                    0 => {
                        c.next();
                    }
                    1 => {
                        c.prev();
                    }
                    2 => {
                        c.tick();
                    }
                    3 => {
                        c.go_to((seed >> 8) as usize % 12);
                    }
                    4 => {
                        c.resize(widths[(seed >> 4) as usize % widths.len()]);
                    }
                    5 => {
                        let dx = ((seed >> 3) % 900) as f64 - 450.0;
                        c.drag_start(500.0, step as f64 * 100.0);
                        c.drag_move(500.0 + dx, step as f64 * 100.0 + 50.0);
                        c.drag_end(120.0, step as f64 * 100.0 + 60.0);
                    }
                    _ => {
                        c.handle_key(if seed & 1 == 0 { "ArrowLeft" } else { "ArrowRight" });
                    }
                }
                assert!(c.index() < total, "index {} escaped total {}", c.index(), total);
                assert!(c.index() <= c.max_index());
            }
        }
    }

    #[test]
    fn track_offset_tracks_index_and_visible_count() {
        let mut c = CarouselState::new(6, MEDIUM);
        c.go_to(3);
        assert_eq!(c.track_offset_percent(), 150.0);
    }
}
