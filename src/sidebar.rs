/// Visibility of the navigation panel.
///
/// Above the breakpoint the panel is pinned open. At or below it the panel is
/// hidden by default and only the hamburger/close triggers move it. Every
/// resize recomputes from the width alone, dropping any earlier toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    viewport_width: f64,
    breakpoint: f64,
    open: bool,
}

const HIDDEN_OFFSET: &str = "-120%";
const VISIBLE_OFFSET: &str = "0";

impl SidebarState {
    pub fn new(viewport_width: f64, breakpoint: f64) -> Self {
        Self {
            viewport_width,
            breakpoint,
            open: false,
        }
    }

    fn is_compact(&self) -> bool {
        self.viewport_width <= self.breakpoint
    }

    pub fn open(&mut self) {
        if self.is_compact() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        if self.is_compact() {
            self.open = false;
        }
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.open = false;
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn is_visible(&self) -> bool {
        !self.is_compact() || self.open
    }

    pub fn shows_close_button(&self) -> bool {
        self.is_compact()
    }

    /// CSS `left` for the panel.
    pub fn offset(&self) -> &'static str {
        if self.is_visible() {
            VISIBLE_OFFSET
        } else {
            HIDDEN_OFFSET
        }
    }
}
