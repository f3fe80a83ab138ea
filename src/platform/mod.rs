//! The host OS seam.
//!
//! Everything the shim needs from the operating system is expressed as the
//! [`HostOs`] trait: the binary process DPI-aware flag, native-scale metric
//! and system-parameter queries, the primary display's pixel density,
//! window ownership resolution, and the cursor position. The decision logic
//! is generic over this trait, so its invariants are testable without a
//! Windows machine; [`Win32Host`] is the real backend.

use crate::error::Result;
use crate::metrics::{IconMetrics, LogFont, NonClientMetrics};

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::Win32Host;

#[cfg(test)]
pub(crate) mod mock;

/// An opaque window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// An opaque monitor handle.
///
/// The fallback path never dereferences it: only a single system-wide DPI
/// is available, so every monitor receives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorHandle(pub isize);

/// An opaque pointer-device handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerDeviceHandle(pub isize);

/// A point in screen pixel coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// A rectangle in screen pixel coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Width in pixels.
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels.
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Horizontal and vertical pixel density of a display, in DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelDensity {
    /// Horizontal DPI.
    pub x: u32,
    /// Vertical DPI.
    pub y: u32,
}

/// The thread and process that own a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowOwner {
    /// Owning thread id.
    pub thread_id: u32,
    /// Owning process id.
    pub process_id: u32,
}

/// OS-owned facilities the shim builds on.
///
/// Every method is a synchronous, reentrant query or a single best-effort
/// attempt; implementations own no state of their own. Methods that acquire
/// a drawing surface must release it on every exit path.
pub trait HostOs {
    /// Whether the process-wide binary DPI-aware flag is set.
    fn is_process_dpi_aware(&self) -> bool;

    /// Set the process-wide DPI-aware flag. The OS only supports the
    /// unaware-to-aware direction; there is no way back.
    fn set_process_dpi_aware(&self) -> Result<()>;

    /// Query a system metric by raw index at the system's native scale.
    /// Unknown indices return whatever the OS reports for them.
    fn system_metric(&self, index: i32) -> i32;

    /// Query icon spacing metrics at native scale.
    fn icon_metrics(&self) -> Result<IconMetrics>;

    /// Query non-client element metrics at native scale.
    fn non_client_metrics(&self) -> Result<NonClientMetrics>;

    /// Query the icon title font.
    fn icon_title_font(&self) -> Result<LogFont>;

    /// Pixel density of the primary display, or `None` when no drawing
    /// surface can be acquired.
    fn screen_pixel_density(&self) -> Option<PixelDensity>;

    /// Resolve a window to its owning thread and process, or `None` when
    /// the handle cannot be resolved.
    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner>;

    /// The calling process id.
    fn current_process_id(&self) -> u32;

    /// Whether a window handle refers to an existing window.
    fn is_window(&self, window: WindowHandle) -> bool;

    /// Current cursor position in screen coordinates.
    fn cursor_position(&self) -> Point;

    /// Expand a client rectangle to a full window rectangle for the given
    /// styles, at the system's native scale.
    fn adjust_window_rect(
        &self,
        rect: Rect,
        style: u32,
        has_menu: bool,
        ex_style: u32,
    ) -> Result<Rect>;
}
