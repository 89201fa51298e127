//! The control data model: identity, capability variants, visibility,
//! and the focus-eligibility predicate.

/// Identity of a control within the bar.
///
/// All scans compare ids, never positions: neighbor resolution, row
/// classification, and visual toggling look controls up by identity so
/// that rows can be reordered or rebuilt without invalidating focus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Play/pause toggle. The default focus target for Up/Down resets.
    Play,
    /// Alternate text region shown in place of the title.
    Alt,
    /// Live-broadcast indicator.
    Live,
    /// Elapsed-time readout.
    Elapsed,
    /// The seek slider.
    TimeSlider,
    /// Remaining-time countdown readout.
    Countdown,
    /// Settings menu button. Primary Up target from the bottom row.
    Settings,
    /// Back button. Up fallback from the bottom row when settings is hidden.
    Back,
    /// A dynamically injected button, keyed by a caller-supplied id.
    Custom(String),
}

/// Capability variant of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Decorative element (text readouts, logos). Never focusable.
    Label,
    /// Pressable button. Focusable and activatable.
    Button,
    /// Range/seek control. Interactive, but only focusable when
    /// explicitly marked navigable.
    Slider,
}

/// Which fixed row a control was registered into.
///
/// Stamped once at bar construction; dynamically injected buttons carry
/// no group and are therefore invisible to Left/Right scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// The top row (back, settings).
    Top,
    /// The bottom transport row (play, time slider, readouts).
    Bottom,
}

/// A single control-bar element.
///
/// Controls are plain data: the bar owns them, toggles their active
/// flag, and re-reads their visibility on every key event. Visibility
/// and the navigable marker can change between events (the host shows
/// and hides controls as player state changes), which is why
/// [`is_eligible`](Control::is_eligible) is computed on demand and
/// never cached.
#[derive(Debug, Clone)]
pub struct Control {
    id: ControlId,
    kind: ControlKind,
    label: String,
    tooltip: Option<String>,
    visible: bool,
    navigable: bool,
    active: bool,
    group: Option<Group>,
}

impl Control {
    fn new(id: ControlId, kind: ControlKind, label: String, navigable: bool) -> Self {
        Self {
            id,
            kind,
            label,
            tooltip: None,
            visible: true,
            navigable,
            active: false,
            group: None,
        }
    }

    /// Create a pressable button. Navigable by default.
    pub fn button(id: ControlId, label: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Button, label.into(), true)
    }

    /// Create a decorative text element. Never a focus target.
    pub fn text(id: ControlId, text: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Label, text.into(), false)
    }

    /// Create a seek slider. Not navigable unless explicitly marked.
    pub fn slider(id: ControlId, label: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Slider, label.into(), false)
    }

    /// Attach tooltip text to this control.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set whether this control is a Left/Right navigation target.
    ///
    /// Mirrors the colored-button style class of the original bar: a
    /// visible interactive control without the marker is still skipped.
    pub fn with_navigable(mut self, navigable: bool) -> Self {
        self.navigable = navigable;
        self
    }

    /// Start this control hidden. It can be shown later with [`show`](Control::show).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// This control's identity.
    pub fn id(&self) -> &ControlId {
        &self.id
    }

    /// This control's capability variant.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// The display label (icon glyph or text).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tooltip text, if any was attached.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The fixed row this control was registered into, if any.
    pub fn group(&self) -> Option<Group> {
        self.group
    }

    /// Whether this control is currently rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether this control carries the navigable marker.
    pub fn is_navigable(&self) -> bool {
        self.navigable
    }

    /// Whether this control currently holds the visual focus indicator.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this control is a valid focus target right now:
    /// interactive, rendered, and carrying the navigable marker.
    pub fn is_eligible(&self) -> bool {
        self.kind != ControlKind::Label && self.visible && self.navigable
    }

    /// Make this control visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide this control. Hidden controls are skipped by every scan.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Replace the display label (e.g. an updated time readout).
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Change the navigable marker at runtime.
    pub fn set_navigable(&mut self, navigable: bool) {
        self.navigable = navigable;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_group(&mut self, group: Group) {
        self.group = Some(group);
    }
}
