//! Maps the score gap onto the rope marker's horizontal position.

/// Marker position at an even score, as a percentage of the arena width
pub const CENTER_PERCENT: f64 = 50.0;
/// How far the marker travels from the center when the gap reaches the margin
pub const TRAVEL_PERCENT: f64 = 35.0;

/// Marker position in percent. Player A pulls toward 0, player B toward 100.
pub fn marker_percent(score_a: u32, score_b: u32, win_margin: u32) -> f64 {
    let margin = f64::from(win_margin.max(1));
    let gap = (f64::from(score_a) - f64::from(score_b)).clamp(-margin, margin);
    CENTER_PERCENT - (gap / margin) * TRAVEL_PERCENT
}

/// Column of the marker inside a row `width` cells wide
pub fn marker_column(percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let col = (percent / 100.0 * f64::from(width)).round() as u16;
    col.min(width - 1)
}
