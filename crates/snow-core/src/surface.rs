/// 2D raster target the engine draws onto.
///
/// Coordinates passed to [`fill_circle`](DrawSurface::fill_circle) are in
/// backing-store pixels, i.e. CSS pixels times the device pixel ratio.
pub trait DrawSurface {
    /// Logical (CSS) size of the drawing area.
    fn css_size(&self) -> (f64, f64);
    fn device_pixel_ratio(&self) -> f64;
    fn backing_size(&self) -> (u32, u32);
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    /// Filled white circle with the given opacity.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, alpha: f32);
    /// Mirror of the engine's on/off status for external styling.
    fn mark_active(&mut self, _active: bool) {}
}

/// Device pixel ratio with junk values replaced by 1.
#[inline]
pub fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Backing-store size for a CSS size at `dpr`. Never smaller than 1x1.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = sanitize_dpr(dpr);
    let side = |v: f64| -> u32 {
        let css = if v.is_finite() { v.floor().max(1.0) } else { 1.0 };
        ((css * dpr).floor() as u32).max(1)
    };
    (side(css_w), side(css_h))
}

/// Resize the backing store if the measured CSS size changed.
/// Returns true when a resize happened.
pub fn sync_backing_size<S: DrawSurface + ?Sized>(surface: &mut S) -> bool {
    let (css_w, css_h) = surface.css_size();
    let wanted = backing_size(css_w, css_h, surface.device_pixel_ratio());
    if surface.backing_size() == wanted {
        return false;
    }
    surface.set_backing_size(wanted.0, wanted.1);
    true
}
