//! DPI awareness emulation.
//!
//! Maps the modern tri-state awareness surface onto the single binary
//! capability old builds have: a process either opted into DPI awareness or
//! it did not. Setting collapses every aware variant onto the binary flag;
//! querying reports at most system-awareness, since per-monitor awareness
//! cannot be distinguished from it on the underlying platform.

use log::{debug, warn};

use crate::context::{
    BASE_DPI, DpiAwareness, DpiAwarenessContext, MonitorDpiType, ProcessDpiAwareness, ScaleFactor,
};
use crate::error::{Error, Result};
use crate::platform::{HostOs, MonitorHandle, Rect, WindowHandle};

/// The DPI emulation shim.
///
/// Stateless: every operation re-reads the OS-owned state it needs (the
/// process aware flag, the primary display's density) on each call, so
/// concurrent use needs no coordination.
#[derive(Debug, Default, Clone)]
pub struct DpiShim<O: HostOs> {
    os: O,
}

#[cfg(target_os = "windows")]
impl DpiShim<crate::platform::Win32Host> {
    /// A shim over the real Win32 host.
    pub fn new() -> Self {
        Self::with_os(crate::platform::Win32Host)
    }
}

impl<O: HostOs> DpiShim<O> {
    /// A shim over an arbitrary host implementation.
    pub fn with_os(os: O) -> Self {
        Self { os }
    }

    pub(crate) fn os(&self) -> &O {
        &self.os
    }

    /// Request a process awareness context.
    ///
    /// Unaware variants are accepted as no-ops (the process stays unaware);
    /// aware variants flip the binary OS flag on; unrecognized tokens fail
    /// with invalid-argument. Which aware variant was requested is not
    /// retained beyond the flag.
    pub fn set_process_awareness_context(&self, context: DpiAwarenessContext) -> Result<()> {
        if !context.is_valid() {
            return Err(Error::InvalidArgument(format!(
                "unrecognized DPI awareness context {:#x}",
                context.raw()
            )));
        }
        match context.awareness() {
            DpiAwareness::Unaware => Ok(()),
            DpiAwareness::System | DpiAwareness::PerMonitor => self.flip_aware_flag(),
        }
    }

    /// Request a process awareness level (the tri-state request form).
    ///
    /// Same transition rule as the context form: requesting `Unaware` is a
    /// no-op, any aware level flips the binary flag.
    pub fn set_process_awareness(&self, requested: ProcessDpiAwareness) -> Result<()> {
        let current = self.process_awareness();
        if current.transition(requested) == current {
            return Ok(());
        }
        self.flip_aware_flag()
    }

    fn flip_aware_flag(&self) -> Result<()> {
        self.os.set_process_dpi_aware().inspect_err(|err| {
            warn!("could not enable process DPI awareness: {err}");
        })
    }

    /// The process awareness derived from the binary flag.
    ///
    /// Reports at most `SystemAware`; `PerMonitorAware` is never reported,
    /// by construction.
    pub fn process_awareness(&self) -> ProcessDpiAwareness {
        if self.os.is_process_dpi_aware() {
            ProcessDpiAwareness::SystemAware
        } else {
            ProcessDpiAwareness::Unaware
        }
    }

    /// The calling thread's awareness context, same derivation as
    /// [`process_awareness`](Self::process_awareness).
    pub fn thread_awareness_context(&self) -> DpiAwarenessContext {
        if self.os.is_process_dpi_aware() {
            DpiAwarenessContext::SYSTEM_AWARE
        } else {
            DpiAwarenessContext::UNAWARE
        }
    }

    /// The awareness context of the thread that owns `window`.
    ///
    /// Returns the `NONE` sentinel when the handle cannot be resolved to an
    /// owning thread. Windows of other processes always report `UNAWARE`;
    /// cross-process introspection is not available on this path.
    pub fn window_awareness_context(&self, window: WindowHandle) -> DpiAwarenessContext {
        let Some(owner) = self.os.window_owner(window) else {
            return DpiAwarenessContext::NONE;
        };
        if owner.process_id == self.os.current_process_id() {
            self.thread_awareness_context()
        } else {
            DpiAwarenessContext::UNAWARE
        }
    }

    /// Whether two context tokens are identical. No normalization across
    /// equivalent variants.
    pub fn contexts_equal(&self, a: DpiAwarenessContext, b: DpiAwarenessContext) -> bool {
        a == b
    }

    /// Whether a token is one of the five recognized contexts.
    pub fn is_valid_context(&self, context: DpiAwarenessContext) -> bool {
        context.is_valid()
    }

    /// Collapse a context token to its coarse awareness level.
    pub fn awareness_from_context(&self, context: DpiAwarenessContext) -> DpiAwareness {
        context.awareness()
    }

    /// Horizontal and vertical DPI of a monitor.
    ///
    /// The fallback path has a single system-wide DPI, so every monitor
    /// receives the primary display's answer. A non-aware process gets the
    /// reference (96, 96) unconditionally, as does any call that cannot
    /// acquire a drawing surface.
    pub fn monitor_dpi(&self, monitor: MonitorHandle, kind: MonitorDpiType) -> (u32, u32) {
        if !self.os.is_process_dpi_aware() {
            return (BASE_DPI, BASE_DPI);
        }
        let Some(density) = self.os.screen_pixel_density() else {
            debug!("no drawing surface; reporting reference DPI");
            return (BASE_DPI, BASE_DPI);
        };
        match kind {
            MonitorDpiType::Raw => (density.x, density.y),
            MonitorDpiType::Effective => {
                let scale = self.monitor_scale_factor(monitor);
                (scale.apply(density.x), scale.apply(density.y))
            }
        }
    }

    /// The monitor's scale factor as an integer percentage.
    ///
    /// Computed as `9600 / density`; defaults to 100% when no drawing
    /// surface is obtainable.
    pub fn monitor_scale_factor(&self, _monitor: MonitorHandle) -> ScaleFactor {
        match self.os.screen_pixel_density() {
            Some(density) => ScaleFactor::from_density(density.x),
            None => ScaleFactor::IDENTITY,
        }
    }

    /// The system DPI: 96 when the process is not DPI-aware or no drawing
    /// surface is obtainable, otherwise the primary display's horizontal
    /// density.
    pub fn system_dpi(&self) -> u32 {
        if !self.os.is_process_dpi_aware() {
            return BASE_DPI;
        }
        match self.os.screen_pixel_density() {
            Some(density) => density.x,
            None => BASE_DPI,
        }
    }

    /// The DPI for a window: 0 for an invalid handle, otherwise the system
    /// DPI. No per-window granularity exists on the fallback path.
    pub fn window_dpi(&self, window: WindowHandle) -> u32 {
        if !self.os.is_window(window) {
            return 0;
        }
        self.system_dpi()
    }

    /// Expand a client rectangle to a full window rectangle.
    ///
    /// Accurate frame sizing for `dpi` is not derivable from the legacy
    /// API; the DPI-less adjustment is the closest available answer.
    pub fn adjust_window_rect_for_dpi(
        &self,
        rect: Rect,
        style: u32,
        has_menu: bool,
        ex_style: u32,
        _dpi: u32,
    ) -> Result<Rect> {
        self.os.adjust_window_rect(rect, style, has_menu, ex_style)
    }

    /// Enable non-client DPI scaling for a window.
    ///
    /// Always succeeds without effect: non-client scaling is already
    /// handled elsewhere on the systems this shim targets.
    pub fn enable_non_client_dpi_scaling(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }
}
