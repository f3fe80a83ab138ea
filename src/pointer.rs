//! Pointer-input capability stubs.
//!
//! The modern pointer API (touch, pen, pointer frames) has no fallback
//! equivalent on the systems this shim targets. These functions exist so
//! that caller code written against that API runs without special-casing:
//! every query deterministically answers "a mouse, and nothing else".
//! Capability absences are reported as named [`Capability`] values rather
//! than generic failures, so "no touch hardware support" is an intentional,
//! assertable property.

use crate::awareness::DpiShim;
use crate::error::{Capability, Error, Result};
use crate::metrics::{SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN};
use crate::platform::{HostOs, Point, PointerDeviceHandle, Rect};

/// Identifier of a pointer within an input frame.
pub type PointerId = u32;

/// The kind of device behind a pointer. Discriminants match the native
/// `POINTER_INPUT_TYPE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PointerInputType {
    /// Generic pointer.
    Pointer = 1,
    /// Touch contact.
    Touch = 2,
    /// Pen/stylus.
    Pen = 3,
    /// Mouse.
    Mouse = 4,
    /// Touchpad.
    Touchpad = 5,
}

/// Basic information about a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInfo {
    /// Device kind behind the pointer.
    pub pointer_type: PointerInputType,
    /// The pointer identifier the caller asked about.
    pub pointer_id: PointerId,
    /// Input frame this pointer belongs to.
    pub frame_id: u32,
    /// Pointer state flags.
    pub flags: u32,
    /// Location in screen pixels.
    pub pixel_location: Point,
    /// Location in himetric units.
    pub himetric_location: Point,
    /// Uncalibrated location in screen pixels.
    pub pixel_location_raw: Point,
    /// Uncalibrated location in himetric units.
    pub himetric_location_raw: Point,
    /// Message time, in ticks.
    pub time: u32,
    /// Number of coalesced inputs available.
    pub history_count: u32,
    /// Keyboard modifier state.
    pub key_states: u32,
    /// High-resolution timestamp.
    pub performance_count: u64,
}

/// Touch-specific pointer payload. Never produced by this shim; the type
/// exists so signatures line up with the modern pointer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTouchInfo {
    /// Common pointer fields.
    pub pointer: PointerInfo,
    /// Contact area in screen pixels.
    pub contact: Rect,
    /// Orientation in degrees.
    pub orientation: u32,
    /// Pressure, 0-1024.
    pub pressure: u32,
}

/// Pen-specific pointer payload. Never produced by this shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPenInfo {
    /// Common pointer fields.
    pub pointer: PointerInfo,
    /// Pressure, 0-1024.
    pub pressure: u32,
    /// Barrel rotation in degrees.
    pub rotation: u32,
    /// Tilt along the X axis, in degrees.
    pub tilt_x: i32,
    /// Tilt along the Y axis, in degrees.
    pub tilt_y: i32,
}

impl<O: HostOs> DpiShim<O> {
    /// The device kind behind a pointer: always a mouse, for any
    /// identifier.
    pub fn pointer_type(&self, _pointer: PointerId) -> PointerInputType {
        PointerInputType::Mouse
    }

    /// Synthesize pointer information for any identifier: a mouse-type
    /// record at the current cursor position, with zeroed frame/timing
    /// fields and a single history entry.
    pub fn pointer_info(&self, pointer: PointerId) -> PointerInfo {
        let at = self.os().cursor_position();
        PointerInfo {
            pointer_type: PointerInputType::Mouse,
            pointer_id: pointer,
            frame_id: 0,
            flags: 0,
            pixel_location: at,
            himetric_location: at,
            pixel_location_raw: at,
            himetric_location_raw: at,
            time: 0,
            history_count: 1,
            key_states: 0,
            performance_count: 0,
        }
    }

    /// Touch info for a pointer: the capability is absent.
    pub fn pointer_touch_info(&self, _pointer: PointerId) -> Result<PointerTouchInfo> {
        Err(Error::CapabilityAbsent(Capability::Touch))
    }

    /// Touch info for a whole input frame: the capability is absent.
    pub fn pointer_frame_touch_info(&self, _pointer: PointerId) -> Result<Vec<PointerTouchInfo>> {
        Err(Error::CapabilityAbsent(Capability::TouchFrame))
    }

    /// Touch frame history: the capability is absent.
    pub fn pointer_frame_touch_info_history(
        &self,
        _pointer: PointerId,
    ) -> Result<Vec<PointerTouchInfo>> {
        Err(Error::CapabilityAbsent(Capability::TouchFrameHistory))
    }

    /// Pen info for a pointer: the capability is absent.
    pub fn pointer_pen_info(&self, _pointer: PointerId) -> Result<PointerPenInfo> {
        Err(Error::CapabilityAbsent(Capability::Pen))
    }

    /// Pen info history: the capability is absent.
    pub fn pointer_pen_info_history(&self, _pointer: PointerId) -> Result<Vec<PointerPenInfo>> {
        Err(Error::CapabilityAbsent(Capability::PenHistory))
    }

    /// Skip remaining messages of the pointer's frame: trivially succeeds,
    /// there are never coalesced frames to skip.
    pub fn skip_pointer_frame_messages(&self, _pointer: PointerId) -> Result<()> {
        Ok(())
    }

    /// Device and display rectangles of a pointer device: both are the
    /// full virtual screen bounds, for any device handle.
    pub fn pointer_device_rects(&self, _device: PointerDeviceHandle) -> (Rect, Rect) {
        let bounds = Rect {
            left: 0,
            top: 0,
            right: self.os().system_metric(SM_CXVIRTUALSCREEN),
            bottom: self.os().system_metric(SM_CYVIRTUALSCREEN),
        };
        (bounds, bounds)
    }

    /// Route mouse input through the pointer API: reports success without
    /// effect.
    pub fn enable_mouse_in_pointer(&self, _enable: bool) -> Result<()> {
        Ok(())
    }
}
