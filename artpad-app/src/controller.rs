//! Glue between DOM events, the router, and the renderer.

use artpad_core::{Mode, PointerEvent, Route, Router};
use artpad_renderer::{Renderer, Surface};

use crate::shell::Shell;
use crate::surface::ContextSurface;

/// Everything the event closures share, behind one `Rc<RefCell<_>>`.
pub(crate) struct Controller {
    pub(crate) router: Router,
    renderer: Renderer,
    /// `None` when the browser refused a 2D context; drawing is then recorded
    /// but never painted.
    surface: Option<ContextSurface>,
    pub(crate) shell: Shell,
}

impl Controller {
    pub(crate) fn new(
        router: Router,
        renderer: Renderer,
        surface: Option<ContextSurface>,
        shell: Shell,
    ) -> Self {
        let controller = Self {
            router,
            renderer,
            surface,
            shell,
        };
        controller.shell.show(controller.router.route());
        controller
    }

    /// Switch screens. Returns `true` if the route changed.
    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if !self.router.navigate(route) {
            return false;
        }
        self.shell.show(route);
        // The session is new (or gone); wipe whatever the last one painted.
        self.repaint();
        true
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if let Some(state) = self.router.session_mut() {
            state.set_mode(mode);
        }
        self.flush();
    }

    pub(crate) fn clear(&mut self) {
        if let Some(state) = self.router.session_mut() {
            state.clear();
        }
        self.flush();
    }

    pub(crate) fn pointer(&mut self, event: &PointerEvent) {
        let Self {
            router,
            renderer,
            surface,
            ..
        } = self;
        let Some(state) = router.session_mut() else {
            return;
        };

        if let (Some(op), Some(surface)) = (state.process_event(event), surface.as_mut()) {
            if let Err(err) = renderer.apply(surface, &op) {
                tracing::warn!("Incremental draw failed: {err}");
            }
        }
        self.flush();
    }

    /// Redraw if the session changed since the last frame.
    fn flush(&mut self) {
        let due = self
            .router
            .session_mut()
            .is_some_and(artpad_core::PadState::take_dirty);
        if due {
            self.repaint();
        }
    }

    /// Unconditional clear-and-replay of the current session.
    fn repaint(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let result = match self.router.session() {
            Some(state) => self.renderer.redraw(surface, state.scene()),
            None => surface.clear(self.renderer.config().background),
        };
        if let Err(err) = result {
            tracing::warn!("Redraw failed: {err}");
        }
    }

    pub(crate) fn frame_count(&self) -> u64 {
        self.renderer.frame_count()
    }
}
