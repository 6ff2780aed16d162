/// Default sidebar width in pixels.
pub const DEFAULT_WIDTH: f32 = 240.0;
/// Minimum sidebar width when resizing.
pub const MIN_WIDTH: f32 = 200.0;
/// Maximum sidebar width when resizing.
pub const MAX_WIDTH: f32 = 480.0;

/// Clamps a dragged width into the allowed range.
/// 將拖曳後的寬度限制在允許範圍內。
pub fn clamp_width(width: f32) -> f32 {
    width.clamp(MIN_WIDTH, MAX_WIDTH)
}
