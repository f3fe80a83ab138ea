//! The real Win32 host.
//!
//! Only primitives present on every supported build are used here; the
//! modern `*ForDpi` / awareness-context entry points are exactly what the
//! crate is emulating, so this backend must never call them.

use windows::Win32::Foundation::{BOOL, HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    GET_DEVICE_CAPS_INDEX, GetDC, GetDeviceCaps, HDC, LOGFONTW, LOGPIXELSX, LOGPIXELSY, ReleaseDC,
};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, GetCursorPos, GetSystemMetrics, GetWindowThreadProcessId,
    ICONMETRICSW, IsProcessDPIAware, IsWindow, NONCLIENTMETRICSW, SPI_GETICONMETRICS,
    SPI_GETICONTITLELOGFONT, SPI_GETNONCLIENTMETRICS, SYSTEM_METRICS_INDEX,
    SYSTEM_PARAMETERS_INFO_ACTION, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SetProcessDPIAware,
    SystemParametersInfoW, WINDOW_EX_STYLE, WINDOW_STYLE,
};

use crate::error::{Error, Result};
use crate::metrics::{IconMetrics, LogFont, NonClientMetrics};
use crate::platform::{HostOs, PixelDensity, Point, Rect, WindowHandle, WindowOwner};

/// Host backend over the legacy Win32 surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Host;

/// Scoped screen device context. Released on every exit path via `Drop`.
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> Option<Self> {
        let hdc = unsafe { GetDC(None) };
        if hdc.is_invalid() { None } else { Some(Self(hdc)) }
    }

    fn caps(&self, index: GET_DEVICE_CAPS_INDEX) -> i32 {
        unsafe { GetDeviceCaps(Some(self.0), index) }
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut core::ffi::c_void)
}

/// SystemParametersInfoW with an out-structure of type `T`, `cbSize` set by
/// the caller inside `value`.
fn system_parameters_query<T>(action: SYSTEM_PARAMETERS_INFO_ACTION, value: &mut T) -> Result<()> {
    unsafe {
        SystemParametersInfoW(
            action,
            size_of::<T>() as u32,
            Some((value as *mut T).cast()),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
    }
    .map_err(|err| Error::OperationFailed(format!("SystemParametersInfoW: {err}")))
}

impl HostOs for Win32Host {
    fn is_process_dpi_aware(&self) -> bool {
        unsafe { IsProcessDPIAware() }.as_bool()
    }

    fn set_process_dpi_aware(&self) -> Result<()> {
        if unsafe { SetProcessDPIAware() }.as_bool() {
            Ok(())
        } else {
            Err(Error::OperationFailed("SetProcessDPIAware".into()))
        }
    }

    fn system_metric(&self, index: i32) -> i32 {
        unsafe { GetSystemMetrics(SYSTEM_METRICS_INDEX(index as u32)) }
    }

    fn icon_metrics(&self) -> Result<IconMetrics> {
        let mut raw = ICONMETRICSW {
            cbSize: size_of::<ICONMETRICSW>() as u32,
            ..Default::default()
        };
        system_parameters_query(SPI_GETICONMETRICS, &mut raw)?;
        Ok(IconMetrics {
            horz_spacing: raw.iHorzSpacing,
            vert_spacing: raw.iVertSpacing,
            title_wrap: raw.iTitleWrap,
        })
    }

    fn non_client_metrics(&self) -> Result<NonClientMetrics> {
        let mut raw = NONCLIENTMETRICSW {
            cbSize: size_of::<NONCLIENTMETRICSW>() as u32,
            ..Default::default()
        };
        system_parameters_query(SPI_GETNONCLIENTMETRICS, &mut raw)?;
        Ok(NonClientMetrics {
            border_width: raw.iBorderWidth,
            scroll_width: raw.iScrollWidth,
            scroll_height: raw.iScrollHeight,
            caption_width: raw.iCaptionWidth,
            caption_height: raw.iCaptionHeight,
            sm_caption_width: raw.iSmCaptionWidth,
            sm_caption_height: raw.iSmCaptionHeight,
            menu_width: raw.iMenuWidth,
            menu_height: raw.iMenuHeight,
            padded_border_width: raw.iPaddedBorderWidth,
        })
    }

    fn icon_title_font(&self) -> Result<LogFont> {
        let mut raw = LOGFONTW::default();
        system_parameters_query(SPI_GETICONTITLELOGFONT, &mut raw)?;
        let face_len = raw
            .lfFaceName
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(raw.lfFaceName.len());
        Ok(LogFont {
            height: raw.lfHeight,
            width: raw.lfWidth,
            weight: raw.lfWeight,
            italic: raw.lfItalic != 0,
            face_name: String::from_utf16_lossy(&raw.lfFaceName[..face_len]),
        })
    }

    fn screen_pixel_density(&self) -> Option<PixelDensity> {
        let dc = ScreenDc::acquire()?;
        Some(PixelDensity {
            x: dc.caps(LOGPIXELSX) as u32,
            y: dc.caps(LOGPIXELSY) as u32,
        })
    }

    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner> {
        let mut process_id = 0u32;
        let thread_id =
            unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut process_id as *mut u32)) };
        if thread_id == 0 {
            return None;
        }
        Some(WindowOwner {
            thread_id,
            process_id,
        })
    }

    fn current_process_id(&self) -> u32 {
        unsafe { GetCurrentProcessId() }
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        unsafe { IsWindow(Some(hwnd(window))) }.as_bool()
    }

    fn cursor_position(&self) -> Point {
        let mut at = POINT::default();
        if unsafe { GetCursorPos(&mut at) }.is_err() {
            return Point::default();
        }
        Point { x: at.x, y: at.y }
    }

    fn adjust_window_rect(
        &self,
        rect: Rect,
        style: u32,
        has_menu: bool,
        ex_style: u32,
    ) -> Result<Rect> {
        let mut raw = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        unsafe {
            AdjustWindowRectEx(
                &mut raw,
                WINDOW_STYLE(style),
                BOOL::from(has_menu),
                WINDOW_EX_STYLE(ex_style),
            )
        }
        .map_err(|err| Error::OperationFailed(format!("AdjustWindowRectEx: {err}")))?;
        Ok(Rect {
            left: raw.left,
            top: raw.top,
            right: raw.right,
            bottom: raw.bottom,
        })
    }
}
