//! Header state derived from passive browser signals: the scrolled flag,
//! scroll-spy, and the open/closed panels (mobile menu, language dropdown).

/// Offset in CSS pixels past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Shrinks the observed viewport to a band in its upper third.
pub const SPY_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTracker {
    scrolled: bool,
}

impl ScrollTracker {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Yields the new flag only when `offset` crosses the threshold.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let next = offset > SCROLL_THRESHOLD;
        if next == self.scrolled {
            return None;
        }
        self.scrolled = next;
        Some(next)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    /// Active anchor in `#id` form.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Applies one observer batch of `(section id, intersecting)` pairs. The
    /// last intersecting entry wins; sections leaving the band never clear the
    /// current anchor. Returns the anchor when it changed.
    pub fn observe<'a, I>(&mut self, batch: I) -> Option<&str>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let candidate = batch
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .map(|(id, _)| id)
            .last()?;
        let anchor = format!("#{candidate}");

        if self.active.as_deref() == Some(anchor.as_str()) {
            return None;
        }
        self.active = Some(anchor);
        self.active.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Escape,
    OutsideClick,
    /// An item inside the panel was chosen.
    Activated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    Trigger,
}

/// Open/closed state of a panel controlled by a trigger button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the panel. Keyboard and in-panel dismissals hand focus back to
    /// the trigger; an outside click leaves it where the user clicked.
    pub fn dismiss(&mut self, reason: Dismissal) -> Option<FocusTarget> {
        if !self.open {
            return None;
        }
        self.open = false;
        match reason {
            Dismissal::Escape | Dismissal::Activated => Some(FocusTarget::Trigger),
            Dismissal::OutsideClick => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_flips_once_per_crossing() {
        let mut tracker = ScrollTracker::default();
        let transitions: Vec<bool> = [0.0, 10.0, 49.0, 50.0, 51.0, 300.0, 120.0, 50.0, 20.0, 0.0]
            .into_iter()
            .filter_map(|offset| tracker.update(offset))
            .collect();

        assert_eq!(transitions, vec![true, false]);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.update(SCROLL_THRESHOLD), None);
        assert_eq!(tracker.update(SCROLL_THRESHOLD + 0.5), Some(true));
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let mut spy = ScrollSpy::default();
        let changed = spy.observe([("about", true), ("skills", false), ("projects", true)]);

        assert_eq!(changed, Some("#projects"));
        assert_eq!(spy.active(), Some("#projects"));
    }

    #[test]
    fn leaving_sections_keep_the_current_anchor() {
        let mut spy = ScrollSpy::default();
        spy.observe([("skills", true)]);

        assert_eq!(spy.observe([("skills", false)]), None);
        assert_eq!(spy.observe([("skills", true)]), None);
        assert_eq!(spy.active(), Some("#skills"));
        assert_eq!(spy.observe(Vec::<(&str, bool)>::new()), None);
    }

    #[test]
    fn escape_and_activation_return_focus_to_trigger() {
        let mut menu = Disclosure::default();
        assert!(menu.toggle());
        assert_eq!(menu.dismiss(Dismissal::Escape), Some(FocusTarget::Trigger));
        assert!(!menu.is_open());

        menu.toggle();
        assert_eq!(menu.dismiss(Dismissal::Activated), Some(FocusTarget::Trigger));
    }

    #[test]
    fn outside_click_closes_without_moving_focus() {
        let mut dropdown = Disclosure::default();
        dropdown.toggle();
        assert_eq!(dropdown.dismiss(Dismissal::OutsideClick), None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn dismissing_a_closed_panel_does_nothing() {
        let mut menu = Disclosure::default();
        assert_eq!(menu.dismiss(Dismissal::Escape), None);
        assert!(!menu.is_open());
    }
}
