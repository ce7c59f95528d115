use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A time-of-day tick label around the dial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLabel {
    pub hour: f32,
    pub text: String,
}

impl TimeLabel {
    /// Label with a 12-hour clock text, e.g. `6AM` or `12PM`.
    pub fn at_hour(hour: f32) -> Self {
        let minutes = (hour.rem_euclid(24.0) * 60.0).round() as u32 % (24 * 60);
        let text = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
            .map(|t| {
                if t.minute() == 0 {
                    t.format("%-I%p").to_string()
                } else {
                    t.format("%-I:%M%p").to_string()
                }
            })
            .unwrap_or_default();
        Self { hour, text }
    }
}

/// Which ticks the dial shows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSet {
    #[default]
    Quarters,
    ThreeHourly,
    Custom(Vec<TimeLabel>),
}

impl LabelSet {
    pub fn labels(&self) -> Vec<TimeLabel> {
        match self {
            LabelSet::Quarters => (0..4).map(|i| TimeLabel::at_hour(i as f32 * 6.0)).collect(),
            LabelSet::ThreeHourly => (0..8).map(|i| TimeLabel::at_hour(i as f32 * 3.0)).collect(),
            LabelSet::Custom(labels) => labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(set: &LabelSet) -> Vec<String> {
        set.labels().into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn generated_sets() {
        assert_eq!(texts(&LabelSet::Quarters), ["12AM", "6AM", "12PM", "6PM"]);
        assert_eq!(
            texts(&LabelSet::ThreeHourly),
            ["12AM", "3AM", "6AM", "9AM", "12PM", "3PM", "6PM", "9PM"]
        );
    }

    #[test]
    fn fractional_hours_show_minutes() {
        assert_eq!(TimeLabel::at_hour(13.5).text, "1:30PM");
    }

    #[test]
    fn custom_labels_pass_through() {
        let set = LabelSet::Custom(vec![TimeLabel { hour: 12.0, text: "Noon".to_string() }]);
        assert_eq!(texts(&set), ["Noon"]);
    }
}
