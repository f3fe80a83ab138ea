//! DPI awareness data model.
//!
//! Models the tri-state notion of DPI awareness on top of the single
//! binary capability old Windows builds actually have. The token values
//! mirror the native `DPI_AWARENESS_CONTEXT` pseudo-handles so that values
//! round-trip unchanged through caller code written against the modern API.

use crate::error::{Error, Result};

/// Reference DPI every pixel metric is defined against.
pub const BASE_DPI: u32 = 96;

/// An opaque DPI awareness context token.
///
/// Only the five named constants are valid; equality is exact token
/// identity, with no normalization across equivalent variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DpiAwarenessContext(isize);

impl DpiAwarenessContext {
    /// DPI unaware: the system scales bitmap-stretched output.
    pub const UNAWARE: Self = Self(-1);
    /// Aware of the system DPI, fixed at process start.
    pub const SYSTEM_AWARE: Self = Self(-2);
    /// Aware of per-monitor DPI changes.
    pub const PER_MONITOR_AWARE: Self = Self(-3);
    /// Per-monitor awareness with non-client scaling (v2).
    pub const PER_MONITOR_AWARE_V2: Self = Self(-4);
    /// Unaware, but GDI output is scaled for quality.
    pub const UNAWARE_GDISCALED: Self = Self(-5);
    /// Sentinel for "no context could be determined".
    pub const NONE: Self = Self(0);

    /// Build a context from a raw token value, without validation.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw token value.
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Whether this token is one of the five recognized contexts.
    pub fn is_valid(self) -> bool {
        self == Self::UNAWARE
            || self == Self::SYSTEM_AWARE
            || self == Self::PER_MONITOR_AWARE
            || self == Self::PER_MONITOR_AWARE_V2
            || self == Self::UNAWARE_GDISCALED
    }

    /// Collapse this context to its coarse awareness level.
    ///
    /// Total over all tokens: both per-monitor variants collapse to
    /// [`DpiAwareness::PerMonitor`], both unaware variants (and every
    /// unrecognized token) to [`DpiAwareness::Unaware`].
    pub fn awareness(self) -> DpiAwareness {
        if self == Self::SYSTEM_AWARE {
            DpiAwareness::System
        } else if self == Self::PER_MONITOR_AWARE || self == Self::PER_MONITOR_AWARE_V2 {
            DpiAwareness::PerMonitor
        } else {
            DpiAwareness::Unaware
        }
    }
}

/// Coarse DPI awareness level derived from a context token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpiAwareness {
    /// Not DPI aware.
    Unaware,
    /// Aware of the system DPI.
    System,
    /// Aware of per-monitor DPI.
    PerMonitor,
}

/// The process-wide DPI awareness setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessDpiAwareness {
    /// Not DPI aware.
    Unaware,
    /// Aware of the system DPI.
    SystemAware,
    /// Aware of per-monitor DPI.
    PerMonitorAware,
}

impl ProcessDpiAwareness {
    /// Whether this setting requires the binary OS aware flag to be on.
    pub fn requires_aware_flag(self) -> bool {
        !matches!(self, ProcessDpiAwareness::Unaware)
    }

    /// The setting that results from requesting `requested` while at `self`.
    ///
    /// One-directional: once a process is aware it can never return to
    /// unaware, and any aware request lands on `SystemAware` since the
    /// binary OS flag retains no finer granularity.
    pub fn transition(self, requested: ProcessDpiAwareness) -> ProcessDpiAwareness {
        if requested.requires_aware_flag() || self.requires_aware_flag() {
            ProcessDpiAwareness::SystemAware
        } else {
            ProcessDpiAwareness::Unaware
        }
    }
}

/// Which flavor of monitor DPI is being requested.
///
/// Only the effective and raw kinds are recognized; the discriminants match
/// the native `MONITOR_DPI_TYPE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MonitorDpiType {
    /// Raw density multiplied by the monitor scale factor.
    Effective = 0,
    /// The display's physical pixel density as reported by the driver.
    Raw = 2,
}

impl MonitorDpiType {
    /// Parse a raw `MONITOR_DPI_TYPE` value, rejecting everything outside
    /// the two recognized kinds.
    pub fn from_raw(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(MonitorDpiType::Effective),
            2 => Ok(MonitorDpiType::Raw),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized monitor DPI type {other}"
            ))),
        }
    }
}

/// A monitor scale factor as an integer percentage (100 = no scaling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleFactor(u32);

impl ScaleFactor {
    /// No scaling.
    pub const IDENTITY: Self = Self(100);

    /// Derive the scale factor from a horizontal pixel density.
    ///
    /// The `9600 / density` ratio (with truncating division) is an exact
    /// compatibility constant; the truncation behavior at densities that
    /// are not multiples of 96 is load-bearing and must not be re-derived.
    pub fn from_density(dpi_x: u32) -> Self {
        if dpi_x == 0 {
            return Self::IDENTITY;
        }
        Self(9600 / dpi_x)
    }

    /// The scale as an integer percentage.
    pub const fn percent(self) -> u32 {
        self.0
    }

    /// Apply this scale to a DPI value (multiply by percent, divide by 100).
    pub const fn apply(self, dpi: u32) -> u32 {
        dpi * self.0 / 100
    }
}
