//! Scriptable host for unit tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::metrics::{IconMetrics, LogFont, NonClientMetrics};
use crate::platform::{HostOs, PixelDensity, Point, Rect, WindowHandle, WindowOwner};

/// A host whose answers are configured up front.
///
/// Defaults to the bleakest environment: process unaware, no drawing
/// surface, no windows, every metric zero.
pub(crate) struct MockHost {
    aware: Cell<bool>,
    refuse_awareness: bool,
    density: Option<PixelDensity>,
    metrics: HashMap<i32, i32>,
    windows: HashMap<WindowHandle, WindowOwner>,
    cursor: Point,
    icon_metrics: Option<IconMetrics>,
    non_client_metrics: Option<NonClientMetrics>,
    icon_title_font: Option<LogFont>,
}

impl MockHost {
    /// The process id every mock reports for itself.
    pub(crate) const PROCESS_ID: u32 = 4100;

    pub(crate) fn new() -> Self {
        Self {
            aware: Cell::new(false),
            refuse_awareness: false,
            density: None,
            metrics: HashMap::new(),
            windows: HashMap::new(),
            cursor: Point::default(),
            icon_metrics: None,
            non_client_metrics: None,
            icon_title_font: None,
        }
    }

    pub(crate) fn aware(self) -> Self {
        self.aware.set(true);
        self
    }

    pub(crate) fn refusing_awareness(mut self) -> Self {
        self.refuse_awareness = true;
        self
    }

    pub(crate) fn with_density(mut self, density: PixelDensity) -> Self {
        self.density = Some(density);
        self
    }

    pub(crate) fn with_metric(mut self, index: i32, value: i32) -> Self {
        self.metrics.insert(index, value);
        self
    }

    pub(crate) fn with_window(mut self, window: WindowHandle, owner: WindowOwner) -> Self {
        self.windows.insert(window, owner);
        self
    }

    pub(crate) fn with_cursor(mut self, at: Point) -> Self {
        self.cursor = at;
        self
    }

    pub(crate) fn with_icon_metrics(mut self, metrics: IconMetrics) -> Self {
        self.icon_metrics = Some(metrics);
        self
    }

    pub(crate) fn with_non_client_metrics(mut self, metrics: NonClientMetrics) -> Self {
        self.non_client_metrics = Some(metrics);
        self
    }

    pub(crate) fn with_icon_title_font(mut self, font: LogFont) -> Self {
        self.icon_title_font = Some(font);
        self
    }
}

impl HostOs for MockHost {
    fn is_process_dpi_aware(&self) -> bool {
        self.aware.get()
    }

    fn set_process_dpi_aware(&self) -> Result<()> {
        if self.refuse_awareness {
            return Err(Error::OperationFailed(
                "SetProcessDPIAware refused".into(),
            ));
        }
        self.aware.set(true);
        Ok(())
    }

    fn system_metric(&self, index: i32) -> i32 {
        self.metrics.get(&index).copied().unwrap_or(0)
    }

    fn icon_metrics(&self) -> Result<IconMetrics> {
        self.icon_metrics
            .ok_or_else(|| Error::OperationFailed("SystemParametersInfo failed".into()))
    }

    fn non_client_metrics(&self) -> Result<NonClientMetrics> {
        self.non_client_metrics
            .ok_or_else(|| Error::OperationFailed("SystemParametersInfo failed".into()))
    }

    fn icon_title_font(&self) -> Result<LogFont> {
        self.icon_title_font
            .clone()
            .ok_or_else(|| Error::OperationFailed("SystemParametersInfo failed".into()))
    }

    fn screen_pixel_density(&self) -> Option<PixelDensity> {
        self.density
    }

    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner> {
        self.windows.get(&window).copied()
    }

    fn current_process_id(&self) -> u32 {
        Self::PROCESS_ID
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.windows.contains_key(&window)
    }

    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn adjust_window_rect(
        &self,
        rect: Rect,
        style: u32,
        has_menu: bool,
        _ex_style: u32,
    ) -> Result<Rect> {
        // Fixed frame sizes in the spirit of the classic theme: an 8px
        // border all around, a 23px caption for overlapped windows, and a
        // 19px menu bar when present.
        let caption = if style & 0x00C0_0000 != 0 { 23 } else { 0 };
        let menu = if has_menu { 19 } else { 0 };
        Ok(Rect {
            left: rect.left - 8,
            top: rect.top - 8 - caption - menu,
            right: rect.right + 8,
            bottom: rect.bottom + 8,
        })
    }
}
