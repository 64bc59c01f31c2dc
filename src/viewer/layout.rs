//! Responsive layout: render width derivation and breakpoint mode nudges.
//!
//! The adapter only nudges the view mode in the direction implied by the
//! available width. Between the two breakpoints the user's last explicit
//! choice persists, so a stable width never causes oscillation.

use crate::logging;
use crate::models::ViewMode;
use crate::settings::Settings;
use crate::viewer::engine::ViewerEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// At or above this width a single-page view widens to a double spread.
    pub wide: f32,
    /// Below this width a double spread collapses to a single page.
    pub narrow: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide: 1920.0,
            narrow: 1024.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutAdapter {
    breakpoints: Breakpoints,
    single_page_max_width: f32,
    double_page_max_width: f32,
    page_gutter: f32,
}

impl LayoutAdapter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            breakpoints: Breakpoints {
                wide: settings.wide_breakpoint,
                narrow: settings.narrow_breakpoint,
            },
            single_page_max_width: settings.single_page_max_width,
            double_page_max_width: settings.double_page_max_width,
            page_gutter: settings.page_gutter,
        }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Feed one viewport width observation. Issues at most one mode switch,
    /// and only when the current mode disagrees with the breakpoint policy.
    /// Returns the mode that was set, if any.
    pub fn observe_width(&self, viewport_width: f32, engine: &mut ViewerEngine) -> Option<ViewMode> {
        let mode = engine.state().view_mode;
        if viewport_width >= self.breakpoints.wide && mode == ViewMode::Single {
            logging::debug(format!(
                "viewport {}px wide, switching to double spread",
                viewport_width
            ));
            engine.set_view_mode(ViewMode::Double);
            Some(ViewMode::Double)
        } else if viewport_width < self.breakpoints.narrow && mode == ViewMode::Double {
            logging::debug(format!(
                "viewport {}px wide, collapsing to single page",
                viewport_width
            ));
            engine.set_view_mode(ViewMode::Single);
            Some(ViewMode::Single)
        } else {
            None
        }
    }

    /// Width one rendered page gets, given the container width (already
    /// reduced by the host's fixed inset).
    pub fn page_render_width(&self, container_width: f32, mode: ViewMode) -> f32 {
        let width = match mode {
            ViewMode::Single => container_width.min(self.single_page_max_width),
            ViewMode::Double => {
                (container_width / 2.0 - self.page_gutter).min(self.double_page_max_width)
            }
        };
        width.max(0.0)
    }
}
