//! Vertical scroll position of the card grid.

/// Scroll state of the card body.
///
/// Manual scrolling moves the offset immediately. Auto-scroll sets a target
/// that [`tick`](Self::tick) eases towards, so the grid glides to the card
/// being revealed instead of jumping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    target: Option<u16>,
    content_height: u16,
    height: u16,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn target(&self) -> Option<u16> {
        self.target
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Update content and visible heights, clamping the offset.
    pub fn set_bounds(&mut self, content_height: u16, height: u16) {
        self.content_height = content_height;
        self.height = height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.map(|t| t.min(max));
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    /// Jump back to the top and drop any pending animation.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.target = None;
    }

    /// Manual scroll by `delta` rows. Cancels any auto-scroll in flight.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Aim the viewport so that the span `[top, top + span)` is centered.
    pub fn center_on(&mut self, top: u16, span: u16) {
        let center = top.saturating_add(span / 2);
        let target = center.saturating_sub(self.height / 2).min(self.max_offset());
        self.target = if target == self.offset {
            None
        } else {
            Some(target)
        };
    }

    /// Advance one animation frame: cover a third of the remaining distance,
    /// at least one row.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let distance = self.offset.abs_diff(target);
        let step = distance.div_ceil(3).max(1);
        self.offset = if target > self.offset {
            self.offset + step.min(distance)
        } else {
            self.offset - step.min(distance)
        };

        if self.offset == target {
            self.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(content: u16, height: u16) -> Viewport {
        let mut vp = Viewport::default();
        vp.set_bounds(content, height);
        vp
    }

    #[test]
    fn scroll_by_clamps_to_content() {
        let mut vp = viewport(100, 20);
        vp.scroll_by(-5);
        assert_eq!(vp.offset(), 0);
        vp.scroll_by(500);
        assert_eq!(vp.offset(), 80);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut vp = viewport(10, 20);
        vp.scroll_by(3);
        assert_eq!(vp.offset(), 0);
        vp.center_on(5, 4);
        assert!(!vp.is_animating());
    }

    #[test]
    fn center_on_sets_target_and_tick_reaches_it() {
        let mut vp = viewport(100, 20);
        vp.center_on(50, 10);
        // center row 55, half height 10 -> target 45
        assert_eq!(vp.target(), Some(45));

        let mut frames = 0;
        while vp.is_animating() {
            let before = vp.offset();
            vp.tick();
            assert!(vp.offset() > before);
            frames += 1;
            assert!(frames < 50, "animation did not converge");
        }
        assert_eq!(vp.offset(), 45);
    }

    #[test]
    fn tick_moves_up_as_well() {
        let mut vp = viewport(100, 20);
        vp.scroll_by(80);
        vp.center_on(0, 10);
        assert_eq!(vp.target(), Some(0));
        while vp.is_animating() {
            vp.tick();
        }
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut vp = viewport(100, 20);
        vp.center_on(60, 10);
        assert!(vp.is_animating());
        vp.scroll_by(1);
        assert!(!vp.is_animating());
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut vp = viewport(100, 20);
        vp.scroll_to_bottom();
        vp.set_bounds(30, 20);
        assert_eq!(vp.offset(), 10);
    }
}
