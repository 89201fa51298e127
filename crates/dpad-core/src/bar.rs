//! The control bar engine: fixed rows, focus state, the key-routing
//! state machine, and dynamic button injection.

use crossterm::event::KeyEvent;

use crate::control::{Control, ControlId, Group};
use crate::layout::{Row, Scan};
use crate::router::NavKey;

/// Errors from control-bar construction.
#[derive(Debug, thiserror::Error)]
pub enum BarError {
    /// The same control id was registered more than once across the rows.
    #[error("duplicate control id: {0:?}")]
    DuplicateControl(ControlId),
}

/// Events emitted by the bar in response to key input.
///
/// The bar never invokes host behavior directly; activation surfaces
/// as an event so the embedding layer can dispatch it (run a callback,
/// send a message, call the player API).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarEvent {
    /// The active control was activated via Enter / remote center.
    Activated(ControlId),
}

/// Descriptor for a dynamically injected button.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    /// Caller-supplied identifier; the injected control gets
    /// [`ControlId::Custom`] with this value.
    pub id: String,
    /// Display glyph or short label.
    pub icon: String,
    /// Tooltip text. Attached only when non-empty.
    pub tooltip: String,
    /// Whether the button carries the colored-button style class that
    /// marks it as a navigation target.
    pub colored: bool,
}

/// A two-row control bar with D-pad focus navigation.
///
/// The bar owns two fixed rows established at construction (membership
/// never changes afterwards), an append-only container of dynamically
/// injected buttons, and the single active-control reference. At most
/// one control carries the visual active indicator at any time.
///
/// Every key event is processed synchronously: classification of the
/// active control, the neighbor scan, and the visual toggle all
/// complete before [`handle_keydown`](ControlBar::handle_keydown)
/// returns. Navigation never fails; an exhausted scan or an unknown
/// key is simply a no-op.
#[derive(Debug)]
pub struct ControlBar {
    top: Row,
    bottom: Row,
    custom: Vec<Control>,
    active: Option<ControlId>,
}

impl ControlBar {
    /// Build a bar from the two fixed rows.
    ///
    /// Stamps each control with its row's [`Group`] tag so that later
    /// classification is a field read, not a structural search.
    /// Returns [`BarError::DuplicateControl`] if an id appears twice
    /// across the rows.
    pub fn new(top: Vec<Control>, bottom: Vec<Control>) -> Result<Self, BarError> {
        let mut seen: Vec<ControlId> = Vec::new();
        let mut top = top;
        let mut bottom = bottom;

        for control in &mut top {
            if seen.contains(control.id()) {
                return Err(BarError::DuplicateControl(control.id().clone()));
            }
            seen.push(control.id().clone());
            control.set_group(Group::Top);
        }
        for control in &mut bottom {
            if seen.contains(control.id()) {
                return Err(BarError::DuplicateControl(control.id().clone()));
            }
            seen.push(control.id().clone());
            control.set_group(Group::Bottom);
        }

        Ok(Self {
            top: Row::new(top),
            bottom: Row::new(bottom),
            custom: Vec::new(),
            active: None,
        })
    }

    /// The top row.
    pub fn top(&self) -> &Row {
        &self.top
    }

    /// The bottom row.
    pub fn bottom(&self) -> &Row {
        &self.bottom
    }

    /// Dynamically injected buttons, in container order.
    pub fn custom_buttons(&self) -> &[Control] {
        &self.custom
    }

    /// Id of the active control, if any.
    pub fn active_id(&self) -> Option<&ControlId> {
        self.active.as_ref()
    }

    /// The active control, if it is registered anywhere in the bar.
    pub fn active_control(&self) -> Option<&Control> {
        self.active.as_ref().and_then(|id| self.find(id))
    }

    /// Look up any control by id, across both rows and the custom container.
    pub fn control(&self, id: &ControlId) -> Option<&Control> {
        self.find(id)
    }

    /// Mutable lookup, for hosts reflecting player state (show/hide,
    /// label updates) between key events.
    pub fn control_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        self.find_mut(id)
    }

    fn find(&self, id: &ControlId) -> Option<&Control> {
        self.top
            .get(id)
            .or_else(|| self.bottom.get(id))
            .or_else(|| self.custom.iter().find(|c| c.id() == id))
    }

    fn find_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        if let Some(control) = self.top.get_mut(id) {
            return Some(control);
        }
        if let Some(control) = self.bottom.get_mut(id) {
            return Some(control);
        }
        self.custom.iter_mut().find(|c| c.id() == id)
    }

    /// Make `next` the active control.
    ///
    /// Idempotent: if `next` is already active this does nothing. An
    /// effective call performs exactly one toggle-off (when a previous
    /// control was active and is still registered) and one toggle-on.
    /// Forcing an id that is not registered anywhere is allowed; focus
    /// is recorded without a visual flag and navigation degrades to
    /// the global Up/Down defaults until a registered control becomes
    /// active again.
    pub fn set_active_button(&mut self, next: ControlId) {
        if self.active.as_ref() == Some(&next) {
            return;
        }

        if let Some(prev) = self.active.take() {
            if let Some(control) = self.find_mut(&prev) {
                control.set_active(false);
            }
        }

        if let Some(control) = self.find_mut(&next) {
            control.set_active(true);
        }
        self.active = Some(next);
    }

    /// Process one key event.
    ///
    /// `is_showing` is the bar's current visibility, supplied fresh by
    /// the host on every event rather than tracked here. Keys outside
    /// the navigation set are ignored.
    pub fn handle_keydown(&mut self, event: &KeyEvent, is_showing: bool) -> Option<BarEvent> {
        let key = NavKey::decode(event)?;
        self.handle_nav(key, is_showing)
    }

    /// Process one already-decoded navigation key.
    ///
    /// The transition rules, in order of classification:
    ///
    /// * **Left/Right** — scan the active control's own row for the
    ///   nearest eligible neighbor; no wraparound, no-op at the edge.
    ///   Skipped entirely when no control is active or the active
    ///   control belongs to neither row.
    /// * **Up** — with the bar hidden or nothing active, reset focus
    ///   to play. From the bottom row, jump to settings when eligible,
    ///   otherwise to back unconditionally. From the top row, no-op.
    /// * **Down** — with the bar hidden or nothing active, reset focus
    ///   to play. From the top row, jump to play. From the bottom row,
    ///   no-op.
    /// * **Select** — with the bar showing and a control active, emit
    ///   [`BarEvent::Activated`].
    /// * **Rewind/FastForward** — deliberately ignored.
    pub fn handle_nav(&mut self, key: NavKey, is_showing: bool) -> Option<BarEvent> {
        // Classify before dispatching; recomputed every event because
        // visibility and focus may have changed since the last one.
        let active = self.active.clone();
        let group = active
            .as_ref()
            .and_then(|id| self.find(id))
            .and_then(Control::group);

        match key {
            NavKey::Left | NavKey::Right => {
                let scan = if key == NavKey::Left {
                    Scan::Backward
                } else {
                    Scan::Forward
                };
                if let (Some(id), Some(group)) = (active, group) {
                    let row = match group {
                        Group::Top => &self.top,
                        Group::Bottom => &self.bottom,
                    };
                    if let Some(next) = row.next_eligible(&id, scan) {
                        let next = next.id().clone();
                        self.set_active_button(next);
                    }
                }
                None
            }
            NavKey::Up => {
                if !is_showing || active.is_none() {
                    self.set_active_button(ControlId::Play);
                } else if group == Some(Group::Bottom) {
                    let settings_eligible = self
                        .find(&ControlId::Settings)
                        .is_some_and(Control::is_eligible);
                    if settings_eligible {
                        self.set_active_button(ControlId::Settings);
                    } else {
                        // Back is the unconditional fallback so Up
                        // always lands somewhere.
                        self.set_active_button(ControlId::Back);
                    }
                }
                None
            }
            NavKey::Down => {
                if !is_showing || active.is_none() {
                    self.set_active_button(ControlId::Play);
                } else if group == Some(Group::Top) {
                    self.set_active_button(ControlId::Play);
                }
                None
            }
            NavKey::Select => {
                if is_showing {
                    if let Some(id) = active {
                        return Some(BarEvent::Activated(id));
                    }
                }
                None
            }
            NavKey::Rewind | NavKey::FastForward => None,
        }
    }

    /// Inject dynamic buttons into the custom container.
    ///
    /// Descriptors are inserted highest-index first, so one call's
    /// block lands in reverse input order; successive calls append
    /// after all previously injected buttons and never remove or
    /// reorder them. Injected buttons join neither fixed row, so they
    /// are unreachable by Left/Right unless the integration layer
    /// builds them into a row itself.
    pub fn update_buttons(&mut self, specs: Vec<ButtonSpec>) {
        for spec in specs.into_iter().rev() {
            let mut control = Control::button(ControlId::Custom(spec.id), spec.icon)
                .with_navigable(spec.colored);
            if !spec.tooltip.is_empty() {
                control = control.with_tooltip(spec.tooltip);
            }
            self.custom.push(control);
        }
    }

    /// Tear down focus state.
    ///
    /// Clears the active reference (and its visual flag, if still
    /// registered). Subsequent key events behave as if no control were
    /// ever active.
    pub fn destroy(&mut self) {
        if let Some(prev) = self.active.take() {
            if let Some(control) = self.find_mut(&prev) {
                control.set_active(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn bar() -> ControlBar {
        let top = vec![
            Control::button(ControlId::Back, "back"),
            Control::button(ControlId::Settings, "settings"),
        ];
        let bottom = vec![
            Control::button(ControlId::Play, "play"),
            Control::text(ControlId::Alt, ""),
            Control::button(ControlId::Live, "LIVE"),
            Control::text(ControlId::Elapsed, "0:00"),
            Control::slider(ControlId::TimeSlider, ""),
            Control::text(ControlId::Countdown, "0:00"),
        ];
        ControlBar::new(top, bottom).unwrap()
    }

    fn active_flags(bar: &ControlBar) -> usize {
        bar.top()
            .controls()
            .iter()
            .chain(bar.bottom().controls())
            .chain(bar.custom_buttons())
            .filter(|c| c.is_active())
            .count()
    }

    #[test]
    fn duplicate_id_across_rows_is_rejected() {
        let top = vec![Control::button(ControlId::Play, "play")];
        let bottom = vec![Control::button(ControlId::Play, "play")];
        let err = ControlBar::new(top, bottom).unwrap_err();
        assert!(matches!(err, BarError::DuplicateControl(ControlId::Play)));
    }

    #[test]
    fn at_most_one_active_across_arbitrary_focus_changes() {
        let mut bar = bar();
        for id in [
            ControlId::Play,
            ControlId::Settings,
            ControlId::Live,
            ControlId::Back,
            ControlId::Play,
            ControlId::Play,
        ] {
            bar.set_active_button(id);
            assert_eq!(active_flags(&bar), 1);
        }
    }

    #[test]
    fn set_active_is_idempotent() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        bar.set_active_button(ControlId::Play);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
        assert_eq!(active_flags(&bar), 1);
    }

    #[test]
    fn left_right_scan_skips_ineligible_controls() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        // Alt (label), Elapsed (label), slider, Countdown are all
        // ineligible; Right lands on Live.
        bar.handle_nav(NavKey::Right, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));
        bar.handle_nav(NavKey::Left, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn left_right_do_not_wrap() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        bar.handle_nav(NavKey::Left, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
        bar.set_active_button(ControlId::Live);
        bar.handle_nav(NavKey::Right, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));
    }

    #[test]
    fn right_skips_hidden_then_stops_at_boundary() {
        let mut bar = bar();
        bar.control_mut(&ControlId::Live).unwrap().hide();
        bar.set_active_button(ControlId::Play);
        bar.handle_nav(NavKey::Right, true);
        // Everything to the right of play is now ineligible.
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn up_from_bottom_prefers_settings() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Settings));
    }

    #[test]
    fn up_from_bottom_falls_back_to_back_when_settings_hidden() {
        let mut bar = bar();
        bar.control_mut(&ControlId::Settings).unwrap().hide();
        bar.set_active_button(ControlId::Play);
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Back));
    }

    #[test]
    fn up_fallback_is_unconditional_even_with_back_hidden() {
        let mut bar = bar();
        bar.control_mut(&ControlId::Settings).unwrap().hide();
        bar.control_mut(&ControlId::Back).unwrap().hide();
        bar.set_active_button(ControlId::Play);
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Back));
    }

    #[test]
    fn up_from_top_is_a_no_op() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Back);
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Back));
    }

    #[test]
    fn down_from_top_resets_to_play() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Settings);
        bar.handle_nav(NavKey::Down, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn down_from_bottom_is_a_no_op() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Live);
        bar.handle_nav(NavKey::Down, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));
    }

    #[test]
    fn up_down_with_nothing_active_reach_play() {
        let mut bar = bar();
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));

        let mut bar = self::bar();
        bar.handle_nav(NavKey::Down, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn hidden_bar_overrides_row_rules() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Settings);
        // Down from the top row would normally reset to play anyway;
        // check Up, which from the top row is normally a no-op.
        bar.handle_nav(NavKey::Up, false);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn select_emits_activation_only_when_showing() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        assert_eq!(
            bar.handle_nav(NavKey::Select, true),
            Some(BarEvent::Activated(ControlId::Play))
        );
        assert_eq!(bar.handle_nav(NavKey::Select, false), None);
    }

    #[test]
    fn select_with_nothing_active_is_a_no_op() {
        let mut bar = bar();
        assert_eq!(bar.handle_nav(NavKey::Select, true), None);
    }

    #[test]
    fn transport_keys_are_ignored() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        assert_eq!(bar.handle_nav(NavKey::Rewind, true), None);
        assert_eq!(bar.handle_nav(NavKey::FastForward, true), None);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    #[test]
    fn keydown_decodes_and_routes() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        bar.handle_keydown(&event, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));

        // Unmapped keys fall through untouched.
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(bar.handle_keydown(&event, true), None);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));
    }

    #[test]
    fn unregistered_active_control_degrades_silently() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Custom("cast".into()));
        assert_eq!(active_flags(&bar), 0);

        // Row-scoped rules are skipped: no row to scan, no cross-row jump.
        bar.handle_nav(NavKey::Left, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Custom("cast".into())));
        bar.handle_nav(NavKey::Right, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Custom("cast".into())));
        bar.handle_nav(NavKey::Up, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Custom("cast".into())));

        // But Select still reaches the unregistered control, and the
        // hidden-bar reset still recovers focus.
        assert_eq!(
            bar.handle_nav(NavKey::Select, true),
            Some(BarEvent::Activated(ControlId::Custom("cast".into())))
        );
        bar.handle_nav(NavKey::Down, false);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }

    fn spec(id: &str) -> ButtonSpec {
        ButtonSpec {
            id: id.to_string(),
            icon: id.to_string(),
            tooltip: String::new(),
            colored: true,
        }
    }

    #[test]
    fn injected_buttons_land_in_reverse_order() {
        let mut bar = bar();
        bar.update_buttons(vec![spec("d1"), spec("d2"), spec("d3")]);
        let order: Vec<_> = bar.custom_buttons().iter().map(|c| c.id().clone()).collect();
        assert_eq!(
            order,
            vec![
                ControlId::Custom("d3".into()),
                ControlId::Custom("d2".into()),
                ControlId::Custom("d1".into()),
            ]
        );
    }

    #[test]
    fn later_injections_append_after_earlier_blocks() {
        let mut bar = bar();
        bar.update_buttons(vec![spec("d1"), spec("d2"), spec("d3")]);
        bar.update_buttons(vec![spec("d4")]);
        let order: Vec<_> = bar.custom_buttons().iter().map(|c| c.id().clone()).collect();
        assert_eq!(
            order,
            vec![
                ControlId::Custom("d3".into()),
                ControlId::Custom("d2".into()),
                ControlId::Custom("d1".into()),
                ControlId::Custom("d4".into()),
            ]
        );
    }

    #[test]
    fn injected_tooltip_only_when_non_empty() {
        let mut bar = bar();
        let mut with_tip = spec("tipped");
        with_tip.tooltip = "Cast".to_string();
        bar.update_buttons(vec![with_tip, spec("bare")]);
        assert_eq!(
            bar.control(&ControlId::Custom("tipped".into()))
                .unwrap()
                .tooltip(),
            Some("Cast")
        );
        assert_eq!(
            bar.control(&ControlId::Custom("bare".into()))
                .unwrap()
                .tooltip(),
            None
        );
    }

    #[test]
    fn injected_buttons_are_not_reachable_by_row_scans() {
        let mut bar = bar();
        bar.update_buttons(vec![spec("d1")]);
        bar.set_active_button(ControlId::Live);
        bar.handle_nav(NavKey::Right, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Live));
    }

    #[test]
    fn destroy_clears_focus_and_later_events_are_safe() {
        let mut bar = bar();
        bar.set_active_button(ControlId::Play);
        bar.destroy();
        assert_eq!(bar.active_id(), None);
        assert_eq!(active_flags(&bar), 0);

        // A stray event after teardown behaves as if nothing were active.
        let event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        bar.handle_keydown(&event, true);
        assert_eq!(bar.active_id(), Some(&ControlId::Play));
    }
}
