use crate::{ScrollMetrics, ScrollSurface, TimeoutHandle};

/// The render/commit cycle shared by [`crate::List`] and [`crate::Grid`].
///
/// An adapter drives an engine like this:
///
/// 1. `render()` once, then `mount(surface)` after the host container exists.
/// 2. On every host scroll event: `handle_scroll(metrics, now_ms)`.
/// 3. On every frame (or when [`ScrollEngine::pending_timeout`] is due): `tick(now_ms)`.
/// 4. Whenever `needs_render()` is set: `render()`, apply the frame, then `commit(surface)`.
/// 5. `unmount()` when the container goes away.
pub trait ScrollEngine {
    /// What [`ScrollEngine::render`] produces.
    type Frame;

    /// Writes configured initial offsets to the host and runs the observers.
    fn mount(&mut self, surface: Option<&mut dyn ScrollSurface>);

    /// Reconciles a host scroll event. Returns `true` if the scroll state changed.
    fn handle_scroll(&mut self, metrics: &ScrollMetrics, now_ms: u64) -> bool;

    /// Fires the quiet-period timer if it is due. Returns `true` if it fired.
    fn tick(&mut self, now_ms: u64) -> bool;

    fn render(&mut self) -> Self::Frame;

    /// Pushes requested offsets to the host, then runs the observers.
    fn commit(&mut self, surface: Option<&mut dyn ScrollSurface>);

    /// Cancels the pending timer. Later events are ignored.
    fn unmount(&mut self);

    fn is_scrolling(&self) -> bool;

    /// Whether state changed since the last `render`.
    fn needs_render(&self) -> bool;

    fn pending_timeout(&self) -> Option<TimeoutHandle>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    #[default]
    Created,
    Mounted,
    Unmounted,
}

impl Lifecycle {
    pub(crate) fn is_unmounted(self) -> bool {
        self == Self::Unmounted
    }
}

/// Clamps a raw host offset into `[0, max]`.
pub(crate) fn clamp_offset(raw: i64, max: i64) -> u64 {
    raw.min(max).max(0) as u64
}
