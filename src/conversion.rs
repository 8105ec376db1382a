use crate::constants::Degree;

/// Split a value in hours or degrees into sexagesimal parts, rounded to the printed
/// millisecond precision before splitting so a seconds field never formats as `60.000`.
fn split_sexagesimal(value: f64) -> (u64, u64, f64) {
    let mut total_ms = (value * 3_600_000.0).round() as u64;
    let ms = total_ms % 60_000;
    total_ms /= 60_000;
    (total_ms / 60, total_ms % 60, ms as f64 / 1000.0)
}

/// Format a right ascension in degrees as a sexagesimal `HH:MM:SS.SSS` string.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in degrees, expected in `[0, 360)`
///
/// Return
/// ------
/// * The hour-based sexagesimal string used by the dsim catalog format. A value
///   rounding up to the full circle wraps to `00:00:00.000`.
pub fn deg_to_sexagesimal_ra(ra: Degree) -> String {
    let (h, m, s) = split_sexagesimal(ra / 15.0);
    format!("{:02}:{m:02}:{s:06.3}", h % 24)
}

/// Format a declination in degrees as a sexagesimal `DD:MM:SS.SSS` string.
///
/// Negative declinations carry a leading `-`; positive ones have no sign, matching the
/// dsim catalog layout.
pub fn deg_to_sexagesimal_dec(dec: Degree) -> String {
    let sign = if dec < 0.0 { "-" } else { "" };
    let (d, m, s) = split_sexagesimal(dec.abs());
    format!("{sign}{d:02}:{m:02}:{s:06.3}")
}
