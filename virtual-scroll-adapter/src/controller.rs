use virtual_scroll::{GridFrame, Length, ListFrame, ScrollEngine, ScrollSurface};

use crate::SimulatedSurface;

/// Frames that carry the size of the scrollable content.
pub trait FrameExtent {
    /// `(width, height)` of the inner container.
    fn content_size(&self) -> (Length, Length);
}

impl<E, K> FrameExtent for ListFrame<E, K> {
    fn content_size(&self) -> (Length, Length) {
        (self.inner.style.width, self.inner.style.height)
    }
}

impl<E, K> FrameExtent for GridFrame<E, K> {
    fn content_size(&self) -> (Length, Length) {
        (self.inner.style.width, self.inner.style.height)
    }
}

/// A framework-neutral driver that owns an engine and a [`SimulatedSurface`] and runs the
/// render/commit cycle the way a UI host would.
///
/// Every method that can change what is on screen returns the new frame, or `None` when the
/// engine had nothing to re-render. After each commit the controller replays the host's
/// scroll event for any offset it wrote, so a write the surface had to clamp flows back into
/// the engine.
pub struct Controller<En: ScrollEngine> {
    engine: En,
    surface: SimulatedSurface,
}

impl<En> Controller<En>
where
    En: ScrollEngine,
    En::Frame: FrameExtent,
{
    pub fn new(engine: En, surface: SimulatedSurface) -> Self {
        Self { engine, surface }
    }

    pub fn engine(&self) -> &En {
        &self.engine
    }

    /// Direct engine access, e.g. for `update_options`. Call [`Controller::flush`] afterwards.
    pub fn engine_mut(&mut self) -> &mut En {
        &mut self.engine
    }

    pub fn surface(&self) -> &SimulatedSurface {
        &self.surface
    }

    pub fn into_parts(self) -> (En, SimulatedSurface) {
        (self.engine, self.surface)
    }

    /// Renders the first frame, sizes the content, then mounts the engine. An initial offset
    /// the host had to clamp is replayed into the engine and the re-rendered frame returned.
    pub fn mount(&mut self, now_ms: u64) -> En::Frame {
        let frame = self.engine.render();
        self.apply_extent(&frame);
        self.engine.mount(Some(&mut self.surface));

        let metrics = self.surface.metrics();
        if self.engine.handle_scroll(&metrics, now_ms) {
            vtrace!(
                scroll_left = metrics.scroll_left,
                scroll_top = metrics.scroll_top,
                "Controller::mount host clamped an initial offset"
            );
            return self.flush(now_ms).unwrap_or(frame);
        }
        frame
    }

    /// A user gesture moved the container. `None` leaves that axis alone.
    pub fn user_scroll(
        &mut self,
        left: Option<u64>,
        top: Option<u64>,
        now_ms: u64,
    ) -> Option<En::Frame> {
        let metrics = self.surface.user_scroll_to(left, top);
        if self.engine.handle_scroll(&metrics, now_ms) {
            self.flush(now_ms)
        } else {
            None
        }
    }

    /// Applies a programmatic scroll (`scroll_to`, `scroll_to_item`, ...) through `f`.
    pub fn scroll_with(
        &mut self,
        now_ms: u64,
        f: impl FnOnce(&mut En, u64) -> bool,
    ) -> Option<En::Frame> {
        if f(&mut self.engine, now_ms) {
            self.flush(now_ms)
        } else {
            None
        }
    }

    /// Fires the quiet-period timer if it is due.
    pub fn tick(&mut self, now_ms: u64) -> Option<En::Frame> {
        if self.engine.tick(now_ms) {
            self.flush(now_ms)
        } else {
            None
        }
    }

    /// Deadline of the pending quiet-period timer, if any.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.engine.pending_timeout().map(|t| t.deadline_ms())
    }

    /// Renders and commits if the engine asked for it.
    pub fn flush(&mut self, now_ms: u64) -> Option<En::Frame> {
        if !self.engine.needs_render() {
            return None;
        }
        let frame = self.engine.render();
        self.apply_extent(&frame);
        let writes = self.surface.write_count();
        self.engine.commit(Some(&mut self.surface));
        if self.surface.write_count() == writes {
            return Some(frame);
        }

        // Echo of our own write. Equal offsets are ignored by the engine.
        let metrics = self.surface.metrics();
        if self.engine.handle_scroll(&metrics, now_ms) {
            vtrace!(
                scroll_left = metrics.scroll_left,
                scroll_top = metrics.scroll_top,
                "Controller::flush host clamped a requested offset"
            );
            return self.flush(now_ms).or(Some(frame));
        }
        Some(frame)
    }

    pub fn unmount(&mut self) {
        self.engine.unmount();
    }

    fn apply_extent(&mut self, frame: &En::Frame) {
        let (width, height) = frame.content_size();
        self.surface.set_content_lengths(width, height);
    }
}

impl<En> core::fmt::Debug for Controller<En>
where
    En: ScrollEngine + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("surface", &self.surface)
            .finish()
    }
}
