//! Metric scaling.
//!
//! The legacy metrics API has no DPI parameter; it answers at the system's
//! native scale only. This module recovers the modern per-DPI behavior by
//! explicit linear rescaling: every pixel-valued metric is defined at a
//! 96 DPI baseline and multiplied out to the requested DPI with truncating
//! integer division, matching the documented rounding of the modern API.

use crate::awareness::DpiShim;
use crate::context::BASE_DPI;
use crate::error::{Error, Result};
use crate::platform::HostOs;

/// `SPI_GETICONTITLELOGFONT`.
pub const SPI_GET_ICON_TITLE_LOG_FONT: u32 = 0x001F;
/// `SPI_GETNONCLIENTMETRICS`.
pub const SPI_GET_NON_CLIENT_METRICS: u32 = 0x0029;
/// `SPI_GETICONMETRICS`.
pub const SPI_GET_ICON_METRICS: u32 = 0x002D;

// Raw SM_* indices for the metrics the shim recognizes. Values match
// winuser.h exactly; the shim forwards them to the OS untranslated.
pub const SM_CXVSCROLL: i32 = 2;
pub const SM_CYHSCROLL: i32 = 3;
pub const SM_CYCAPTION: i32 = 4;
pub const SM_CYVTHUMB: i32 = 9;
pub const SM_CXHTHUMB: i32 = 10;
pub const SM_CXICON: i32 = 11;
pub const SM_CYICON: i32 = 12;
pub const SM_CXCURSOR: i32 = 13;
pub const SM_CYCURSOR: i32 = 14;
pub const SM_CYMENU: i32 = 15;
pub const SM_CYVSCROLL: i32 = 20;
pub const SM_CXHSCROLL: i32 = 21;
pub const SM_CXMIN: i32 = 28;
pub const SM_CYMIN: i32 = 29;
pub const SM_CXSIZE: i32 = 30;
pub const SM_CXFRAME: i32 = 32;
pub const SM_CYFRAME: i32 = 33;
pub const SM_CXMINTRACK: i32 = 34;
pub const SM_CYMINTRACK: i32 = 35;
pub const SM_CXICONSPACING: i32 = 38;
pub const SM_CYICONSPACING: i32 = 39;
pub const SM_CXSMICON: i32 = 49;
pub const SM_CYSMICON: i32 = 50;
pub const SM_CYSMCAPTION: i32 = 51;
pub const SM_CXSMSIZE: i32 = 52;
pub const SM_CYSMSIZE: i32 = 53;
pub const SM_CXMENUSIZE: i32 = 54;
pub const SM_CYMENUSIZE: i32 = 55;
pub const SM_CXMENUCHECK: i32 = 71;
pub const SM_CYMENUCHECK: i32 = 72;
pub const SM_CXVIRTUALSCREEN: i32 = 78;
pub const SM_CYVIRTUALSCREEN: i32 = 79;

/// The metrics that are pixel quantities defined at the 96 DPI baseline.
/// Every other index passes through at whatever the OS reports.
const PIXEL_METRICS: &[i32] = &[
    SM_CXVSCROLL,
    SM_CYHSCROLL,
    SM_CYCAPTION,
    SM_CYVTHUMB,
    SM_CXHTHUMB,
    SM_CXICON,
    SM_CYICON,
    SM_CXCURSOR,
    SM_CYCURSOR,
    SM_CYMENU,
    SM_CYVSCROLL,
    SM_CXHSCROLL,
    SM_CXMIN,
    SM_CXMINTRACK,
    SM_CYMIN,
    SM_CYMINTRACK,
    SM_CXSIZE,
    SM_CXFRAME,
    SM_CYFRAME,
    SM_CXICONSPACING,
    SM_CYICONSPACING,
    SM_CXSMICON,
    SM_CYSMICON,
    SM_CYSMCAPTION,
    SM_CXSMSIZE,
    SM_CYSMSIZE,
    SM_CXMENUSIZE,
    SM_CYMENUSIZE,
    SM_CXMENUCHECK,
    SM_CYMENUCHECK,
];

/// Whether a metric index is in the enumerated pixel-metric set.
pub fn is_pixel_metric(index: i32) -> bool {
    PIXEL_METRICS.contains(&index)
}

/// Scale a pixel value defined at 96 DPI to `dpi`, truncating.
pub fn scale_for_dpi(value: i32, dpi: u32) -> i32 {
    value * dpi as i32 / BASE_DPI as i32
}

/// Icon spacing metrics (`ICONMETRICS` without the font payload).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    /// Horizontal icon cell width.
    pub horz_spacing: i32,
    /// Vertical icon cell height.
    pub vert_spacing: i32,
    /// Whether icon titles wrap; not a pixel value, never scaled.
    pub title_wrap: i32,
}

impl IconMetrics {
    /// The pixel-valued fields, in declaration order.
    fn pixel_fields(&mut self) -> [&mut i32; 2] {
        [&mut self.horz_spacing, &mut self.vert_spacing]
    }

    /// Rescale every pixel field from the 96 DPI baseline to `dpi`.
    pub fn scale_to(&mut self, dpi: u32) {
        for field in self.pixel_fields() {
            *field = scale_for_dpi(*field, dpi);
        }
    }
}

/// Non-client element metrics (`NONCLIENTMETRICS` without the font
/// payloads).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NonClientMetrics {
    pub border_width: i32,
    pub scroll_width: i32,
    pub scroll_height: i32,
    pub caption_width: i32,
    pub caption_height: i32,
    pub sm_caption_width: i32,
    pub sm_caption_height: i32,
    pub menu_width: i32,
    pub menu_height: i32,
    pub padded_border_width: i32,
}

impl NonClientMetrics {
    /// The pixel-valued fields, in declaration order. All of them are.
    fn pixel_fields(&mut self) -> [&mut i32; 10] {
        [
            &mut self.border_width,
            &mut self.scroll_width,
            &mut self.scroll_height,
            &mut self.caption_width,
            &mut self.caption_height,
            &mut self.sm_caption_width,
            &mut self.sm_caption_height,
            &mut self.menu_width,
            &mut self.menu_height,
            &mut self.padded_border_width,
        ]
    }

    /// Rescale every pixel field from the 96 DPI baseline to `dpi`.
    pub fn scale_to(&mut self, dpi: u32) {
        for field in self.pixel_fields() {
            *field = scale_for_dpi(*field, dpi);
        }
    }
}

/// A logical font description (`LOGFONT`, reduced).
///
/// Passed through unscaled: font metrics are resolved by the text stack,
/// not by this shim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogFont {
    /// Character cell or character height.
    pub height: i32,
    /// Average character width.
    pub width: i32,
    /// Font weight (400 = normal, 700 = bold).
    pub weight: i32,
    /// Whether the font is italic.
    pub italic: bool,
    /// Typeface name.
    pub face_name: String,
}

/// A structured system-parameters answer, rescaled where defined.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemParameters {
    /// `SPI_GETICONTITLELOGFONT`, passed through unscaled.
    IconTitleFont(LogFont),
    /// `SPI_GETICONMETRICS` with spacing fields rescaled.
    IconMetrics(IconMetrics),
    /// `SPI_GETNONCLIENTMETRICS` with pixel fields rescaled.
    NonClientMetrics(NonClientMetrics),
}

impl<O: HostOs> DpiShim<O> {
    /// Query a system metric, rescaled to `dpi` when it is one of the
    /// recognized pixel metrics.
    ///
    /// Invalid indices are delegated to the OS and its answer passed
    /// through unscaled; there are no error conditions.
    pub fn metric_for_dpi(&self, index: i32, dpi: u32) -> i32 {
        let value = self.os().system_metric(index);
        if is_pixel_metric(index) {
            scale_for_dpi(value, dpi)
        } else {
            value
        }
    }

    /// Answer a structured system-parameters query at `dpi`.
    ///
    /// Only the three recognized actions have a defined scaling rule; any
    /// other action fails with invalid-argument, since no safe generic rule
    /// exists for unknown structured layouts.
    pub fn system_parameters_for_dpi(&self, action: u32, dpi: u32) -> Result<SystemParameters> {
        match action {
            SPI_GET_ICON_TITLE_LOG_FONT => {
                Ok(SystemParameters::IconTitleFont(self.os().icon_title_font()?))
            }
            SPI_GET_ICON_METRICS => Ok(SystemParameters::IconMetrics(
                self.icon_metrics_for_dpi(dpi)?,
            )),
            SPI_GET_NON_CLIENT_METRICS => Ok(SystemParameters::NonClientMetrics(
                self.non_client_metrics_for_dpi(dpi)?,
            )),
            other => Err(Error::InvalidArgument(format!(
                "no scaling rule for system parameter action {other:#06x}"
            ))),
        }
    }

    /// Icon spacing metrics rescaled to `dpi`.
    pub fn icon_metrics_for_dpi(&self, dpi: u32) -> Result<IconMetrics> {
        let mut metrics = self.os().icon_metrics()?;
        metrics.scale_to(dpi);
        Ok(metrics)
    }

    /// Non-client element metrics rescaled to `dpi`.
    pub fn non_client_metrics_for_dpi(&self, dpi: u32) -> Result<NonClientMetrics> {
        let mut metrics = self.os().non_client_metrics()?;
        metrics.scale_to(dpi);
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockHost;

    #[test]
    fn test_scale_for_dpi_truncates() {
        assert_eq!(scale_for_dpi(15, 144), 22); // 15 * 144 / 96 = 22.5
        assert_eq!(scale_for_dpi(17, 120), 21); // 17 * 120 / 96 = 21.25
        assert_eq!(scale_for_dpi(32, 192), 64);
    }

    #[test]
    fn test_scale_for_dpi_identity_at_base() {
        for value in [0, 1, 7, 16, 100] {
            assert_eq!(scale_for_dpi(value, 96), value);
        }
    }

    #[test]
    fn test_pixel_metric_set_membership() {
        assert!(is_pixel_metric(SM_CXVSCROLL));
        assert!(is_pixel_metric(SM_CYMENUCHECK));
        assert!(is_pixel_metric(SM_CXICONSPACING));
        // Screen dimensions and counts are not baseline pixel metrics.
        assert!(!is_pixel_metric(0)); // SM_CXSCREEN
        assert!(!is_pixel_metric(SM_CXVIRTUALSCREEN));
        assert!(!is_pixel_metric(80)); // SM_CMONITORS
        assert!(!is_pixel_metric(-1));
    }

    #[test]
    fn test_metric_for_dpi_scales_pixel_metrics() {
        let shim = DpiShim::with_os(MockHost::new().with_metric(SM_CYCAPTION, 19));
        assert_eq!(shim.metric_for_dpi(SM_CYCAPTION, 96), 19);
        assert_eq!(shim.metric_for_dpi(SM_CYCAPTION, 144), 28); // 19 * 144 / 96
        assert_eq!(shim.metric_for_dpi(SM_CYCAPTION, 192), 38);
    }

    #[test]
    fn test_metric_for_dpi_passes_through_other_indices() {
        let shim = DpiShim::with_os(MockHost::new().with_metric(0, 1920));
        for dpi in [96, 120, 144, 192] {
            assert_eq!(shim.metric_for_dpi(0, dpi), 1920);
        }
    }

    #[test]
    fn test_icon_metrics_scaling() {
        let icon = IconMetrics {
            horz_spacing: 75,
            vert_spacing: 75,
            title_wrap: 1,
        };
        let shim = DpiShim::with_os(MockHost::new().with_icon_metrics(icon));
        let scaled = shim.icon_metrics_for_dpi(144).unwrap();
        assert_eq!(scaled.horz_spacing, 112); // 75 * 144 / 96 = 112.5
        assert_eq!(scaled.vert_spacing, 112);
        assert_eq!(scaled.title_wrap, 1); // not a pixel field
    }

    #[test]
    fn test_non_client_metrics_scaling() {
        let native = NonClientMetrics {
            border_width: 1,
            scroll_width: 17,
            scroll_height: 17,
            caption_width: 36,
            caption_height: 22,
            sm_caption_width: 22,
            sm_caption_height: 22,
            menu_width: 19,
            menu_height: 19,
            padded_border_width: 4,
        };
        let shim = DpiShim::with_os(MockHost::new().with_non_client_metrics(native));

        let at_base = shim.non_client_metrics_for_dpi(96).unwrap();
        assert_eq!(at_base, native);

        let scaled = shim.non_client_metrics_for_dpi(192).unwrap();
        assert_eq!(scaled.border_width, 2);
        assert_eq!(scaled.scroll_width, 34);
        assert_eq!(scaled.caption_height, 44);
        assert_eq!(scaled.padded_border_width, 8);
    }

    #[test]
    fn test_system_parameters_dispatch() {
        let shim = DpiShim::with_os(
            MockHost::new()
                .with_icon_metrics(IconMetrics {
                    horz_spacing: 75,
                    vert_spacing: 76,
                    title_wrap: 0,
                })
                .with_icon_title_font(LogFont {
                    height: -11,
                    weight: 400,
                    face_name: "Segoe UI".into(),
                    ..Default::default()
                }),
        );

        match shim.system_parameters_for_dpi(SPI_GET_ICON_METRICS, 120).unwrap() {
            SystemParameters::IconMetrics(m) => {
                assert_eq!(m.horz_spacing, 93); // 75 * 120 / 96 = 93.75
                assert_eq!(m.vert_spacing, 95);
            }
            other => panic!("unexpected reply: {other:?}"),
        }

        // The icon title font is passed through unscaled at any DPI.
        match shim
            .system_parameters_for_dpi(SPI_GET_ICON_TITLE_LOG_FONT, 192)
            .unwrap()
        {
            SystemParameters::IconTitleFont(font) => {
                assert_eq!(font.height, -11);
                assert_eq!(font.face_name, "Segoe UI");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_system_parameters_rejects_unknown_actions() {
        let shim = DpiShim::with_os(MockHost::new());
        // SPI_GETWORKAREA and friends have no safe generic scaling rule.
        assert!(matches!(
            shim.system_parameters_for_dpi(0x0030, 96),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            shim.system_parameters_for_dpi(0, 144),
            Err(Error::InvalidArgument(_))
        ));
    }
}
