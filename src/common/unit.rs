//! Length unit conversions.
//!
//! DrawingML positions and sizes are integer English Metric Units (EMU).
//! Conversions from fractional inches or points truncate toward zero.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Centipoints per point, the unit of `sz` and `spcPts` attributes.
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

/// A length in EMU.
pub type Emu = i64;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64) as Emu
}

/// Convert points to EMU.
#[inline]
pub fn pt_to_emu_f64(pt: f64) -> Emu {
    (pt * EMUS_PER_PT as f64) as Emu
}

/// Convert points to centipoints (`1800` for 18 pt).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(7.5), 6_858_000);
        // 13.333 in does not land on a whole EMU
        assert_eq!(inches(13.333), 12_191_695);
        assert_eq!(inches(0.02), 18_288);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu_f64(18.0), 228_600);
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(4.0), 400);
    }
}
