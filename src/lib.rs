//! # dpi-shim
//!
//! Emulation of the modern per-monitor DPI-awareness APIs on Windows
//! versions and builds that lack them.
//!
//! A windowing toolkit can call this shim exactly as it would call the
//! native modern API; the answers are reconstructed from primitives that
//! exist on every supported build: global system metrics, device-context
//! pixel density, and the single process-wide DPI-aware flag.
//!
//! ## Features
//!
//! - Per-DPI system metric queries via explicit 96-DPI-baseline rescaling
//! - Structured metric scaling (icon spacing, non-client elements) driven
//!   by declarative per-field tables
//! - Tri-state awareness set/query emulated over the binary OS flag, with
//!   an enforced one-directional (unaware-to-aware) transition
//! - Per-window and per-monitor DPI queries approximated by the single
//!   system-wide DPI
//! - Deterministic "no advanced pointer hardware" stubs for the modern
//!   pointer/touch/pen API surface
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(target_os = "windows")]
//! fn layout() -> dpi_shim::Result<()> {
//!     use dpi_shim::{DpiAwarenessContext, DpiShim};
//!
//!     let shim = DpiShim::new();
//!     shim.set_process_awareness_context(DpiAwarenessContext::PER_MONITOR_AWARE_V2)?;
//!
//!     let dpi = shim.system_dpi();
//!     let caption = shim.metric_for_dpi(dpi_shim::metrics::SM_CYCAPTION, dpi);
//!     println!("caption height at {dpi} DPI: {caption}px");
//!     Ok(())
//! }
//! # fn main() {}
//! ```
//!
//! ## Architecture
//!
//! The decision logic is generic over the [`HostOs`] trait, which captures
//! everything the shim needs from the operating system; [`Win32Host`] is
//! the production backend. All operations are synchronous and stateless:
//! every call re-reads the OS-owned state it depends on, so concurrent use
//! needs no coordination.

pub mod awareness;
pub mod context;
pub mod error;
pub mod metrics;
pub mod pointer;

mod platform;

// Re-exports
pub use awareness::DpiShim;
pub use context::{
    BASE_DPI, DpiAwareness, DpiAwarenessContext, MonitorDpiType, ProcessDpiAwareness, ScaleFactor,
};
pub use error::{Capability, Error, Result};
pub use metrics::{IconMetrics, LogFont, NonClientMetrics, SystemParameters};
pub use platform::{
    HostOs, MonitorHandle, PixelDensity, Point, PointerDeviceHandle, Rect, WindowHandle,
    WindowOwner,
};
pub use pointer::{PointerId, PointerInfo, PointerInputType, PointerPenInfo, PointerTouchInfo};

#[cfg(target_os = "windows")]
pub use platform::Win32Host;
