use std::fmt;

/// Fixed palette the dial is painted with. One color per severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

impl PaletteColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PaletteColor::Green => [52, 199, 89],
            PaletteColor::Yellow => [255, 204, 0],
            PaletteColor::Orange => [255, 149, 0],
            PaletteColor::Red => [255, 59, 48],
            PaletteColor::Purple => [175, 82, 222],
        }
    }
}

/// UV-index severity categories, shared by the arc colors and the text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBucket {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

struct BucketRow {
    min: i64,
    max: Option<i64>, // None = open-ended
    bucket: SeverityBucket,
    color: PaletteColor,
    label: &'static str,
}

// Ordered by ascending range; lookups scan top to bottom.
const BUCKET_TABLE: [BucketRow; 5] = [
    BucketRow { min: i64::MIN, max: Some(2), bucket: SeverityBucket::Low, color: PaletteColor::Green, label: "Low" },
    BucketRow { min: 3, max: Some(5), bucket: SeverityBucket::Moderate, color: PaletteColor::Yellow, label: "Moderate" },
    BucketRow { min: 6, max: Some(7), bucket: SeverityBucket::High, color: PaletteColor::Orange, label: "High" },
    BucketRow { min: 8, max: Some(10), bucket: SeverityBucket::VeryHigh, color: PaletteColor::Red, label: "Very High" },
    BucketRow { min: 11, max: None, bucket: SeverityBucket::Extreme, color: PaletteColor::Purple, label: "Extreme" },
];

impl SeverityBucket {
    /// Buckets a UV value by rounding it to the nearest integer (halves round up)
    /// and looking the result up in the inclusive range table.
    pub fn from_uv(uv_index: f32) -> Self {
        let rounded = uv_index.round() as i64;
        BUCKET_TABLE
            .iter()
            .find(|row| rounded >= row.min && row.max.is_none_or(|max| rounded <= max))
            .map(|row| row.bucket)
            .unwrap_or(SeverityBucket::Low) // table covers every i64
    }

    fn row(self) -> &'static BucketRow {
        // Every variant has exactly one row
        match self {
            SeverityBucket::Low => &BUCKET_TABLE[0],
            SeverityBucket::Moderate => &BUCKET_TABLE[1],
            SeverityBucket::High => &BUCKET_TABLE[2],
            SeverityBucket::VeryHigh => &BUCKET_TABLE[3],
            SeverityBucket::Extreme => &BUCKET_TABLE[4],
        }
    }

    pub fn color(self) -> PaletteColor {
        self.row().color
    }

    pub fn label(self) -> &'static str {
        self.row().label
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounding_boundaries() {
        assert_eq!(SeverityBucket::from_uv(2.4), SeverityBucket::Low);
        assert_eq!(SeverityBucket::from_uv(2.5), SeverityBucket::Moderate);
        assert_eq!(SeverityBucket::from_uv(5.4), SeverityBucket::Moderate);
        assert_eq!(SeverityBucket::from_uv(5.5), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_uv(5.5).color(), PaletteColor::Orange);
        assert_eq!(SeverityBucket::from_uv(5.999), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_uv(7.49), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_uv(7.5), SeverityBucket::VeryHigh);
        assert_eq!(SeverityBucket::from_uv(10.4), SeverityBucket::VeryHigh);
        assert_eq!(SeverityBucket::from_uv(10.5), SeverityBucket::Extreme);
        assert_eq!(SeverityBucket::from_uv(17.0), SeverityBucket::Extreme);
    }

    #[test]
    fn bucketing_is_idempotent_under_rounding() {
        let mut v = 0.0f32;
        while v < 14.0 {
            assert_eq!(SeverityBucket::from_uv(v.round()), SeverityBucket::from_uv(v), "uv {v}");
            v += 0.05;
        }
    }

    #[test]
    fn negative_values_are_low() {
        assert_eq!(SeverityBucket::from_uv(-3.0), SeverityBucket::Low);
    }

    #[test]
    fn colors_and_labels() {
        assert_eq!(SeverityBucket::Low.color(), PaletteColor::Green);
        assert_eq!(SeverityBucket::Moderate.color(), PaletteColor::Yellow);
        assert_eq!(SeverityBucket::High.color(), PaletteColor::Orange);
        assert_eq!(SeverityBucket::VeryHigh.color(), PaletteColor::Red);
        assert_eq!(SeverityBucket::Extreme.color(), PaletteColor::Purple);
        assert_eq!(SeverityBucket::VeryHigh.to_string(), "Very High");
    }

    proptest! {
        #[test]
        fn rounding_never_changes_the_bucket(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
            prop_assert_eq!(SeverityBucket::from_uv(v.round()), SeverityBucket::from_uv(v));
        }

        #[test]
        fn rounding_never_changes_the_bucket_in_range(v in -2.0f32..20.0) {
            prop_assert_eq!(SeverityBucket::from_uv(v.round()), SeverityBucket::from_uv(v));
        }
    }
}
