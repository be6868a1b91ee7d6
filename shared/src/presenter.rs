use std::str::FromStr;

use strum_macros::{Display, EnumString};

/// Discrete confidence bucket used for result styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Buckets a confidence value: `>= 0.90` is `High`, `>= 0.75` is
    /// `Medium`, everything below is `Low`. Out-of-range inputs fall into
    /// the boundary buckets through the same inequalities.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.90 {
            Tier::High
        } else if confidence >= 0.75 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tier::High => "confidence-high",
            Tier::Medium => "confidence-medium",
            Tier::Low => "confidence-low",
        }
    }
}

/// The fixed label set the classifier is trained on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum DiseaseClass {
    #[strum(serialize = "Early Blight")]
    EarlyBlight,
    #[strum(serialize = "Late Blight")]
    LateBlight,
    #[strum(serialize = "Healthy")]
    Healthy,
}

impl DiseaseClass {
    pub fn css_class(self) -> &'static str {
        match self {
            DiseaseClass::EarlyBlight => "disease-early-blight",
            DiseaseClass::LateBlight => "disease-late-blight",
            DiseaseClass::Healthy => "disease-healthy",
        }
    }
}

/// Style lookup for a classifier label. Labels outside the known set get
/// the default (unstyled) presentation instead of an error.
pub fn disease_css_class(label: &str) -> Option<&'static str> {
    DiseaseClass::from_str(label).ok().map(DiseaseClass::css_class)
}

/// Formats a [0,1] confidence as a percentage with two decimals.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(Tier::from_confidence(0.90), Tier::High);
        assert_eq!(Tier::from_confidence(0.8999), Tier::Medium);
        assert_eq!(Tier::from_confidence(0.75), Tier::Medium);
        assert_eq!(Tier::from_confidence(0.7499), Tier::Low);
    }

    #[test]
    fn out_of_range_confidence_falls_into_boundary_buckets() {
        assert_eq!(Tier::from_confidence(1.2), Tier::High);
        assert_eq!(Tier::from_confidence(-0.1), Tier::Low);
    }

    #[test]
    fn formats_confidence_with_two_decimals() {
        assert_eq!(format_confidence(0.93), "93.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(0.8765), "87.65%");
    }

    #[test]
    fn known_labels_map_to_their_style() {
        assert_eq!(disease_css_class("Late Blight"), Some("disease-late-blight"));
        assert_eq!(disease_css_class("Early Blight"), Some("disease-early-blight"));
        assert_eq!(disease_css_class("Healthy"), Some("disease-healthy"));
    }

    #[test]
    fn unknown_labels_fall_back_to_unstyled() {
        assert_eq!(disease_css_class("Leaf Rust"), None);
        assert_eq!(disease_css_class(""), None);
    }
}
