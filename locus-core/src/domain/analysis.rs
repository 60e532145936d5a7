//! Model prediction types and the ClinVar agreement verdict

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::variant::ClinicalSignificance;

/// Binary pathogenicity call emitted by the prediction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathogenicity {
    LikelyPathogenic,
    LikelyBenign,
}

impl Pathogenicity {
    /// Parse the wire label. The model emits exactly "Likely pathogenic" or
    /// "Likely benign"; anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Likely pathogenic" => Some(Self::LikelyPathogenic),
            "Likely benign" => Some(Self::LikelyBenign),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LikelyPathogenic => "Likely pathogenic",
            Self::LikelyBenign => "Likely benign",
        }
    }
}

impl fmt::Display for Pathogenicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict comparing a model call against a ClinVar significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agreement {
    /// Model and ClinVar fall on the same side
    Concordant,
    /// Model and ClinVar fall on opposite sides
    Discordant,
    /// ClinVar is uncertain, conflicting, or otherwise not comparable
    Indeterminate,
}

impl Agreement {
    pub fn between(prediction: Pathogenicity, significance: &ClinicalSignificance) -> Self {
        if significance.is_pathogenic() {
            match prediction {
                Pathogenicity::LikelyPathogenic => Self::Concordant,
                Pathogenicity::LikelyBenign => Self::Discordant,
            }
        } else if significance.is_benign() {
            match prediction {
                Pathogenicity::LikelyBenign => Self::Concordant,
                Pathogenicity::LikelyPathogenic => Self::Discordant,
            }
        } else {
            Self::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        assert_eq!(
            Pathogenicity::from_label("Likely pathogenic"),
            Some(Pathogenicity::LikelyPathogenic)
        );
        assert_eq!(
            Pathogenicity::from_label(" Likely benign "),
            Some(Pathogenicity::LikelyBenign)
        );
        assert_eq!(Pathogenicity::from_label("pathogenic"), None);
        assert_eq!(
            Pathogenicity::LikelyPathogenic.label(),
            "Likely pathogenic"
        );
    }

    #[test]
    fn test_agreement_matrix() {
        use Agreement::*;
        use Pathogenicity::*;

        let cases = [
            (LikelyPathogenic, ClinicalSignificance::Pathogenic, Concordant),
            (
                LikelyPathogenic,
                ClinicalSignificance::LikelyPathogenic,
                Concordant,
            ),
            (LikelyPathogenic, ClinicalSignificance::Benign, Discordant),
            (LikelyBenign, ClinicalSignificance::LikelyBenign, Concordant),
            (LikelyBenign, ClinicalSignificance::Pathogenic, Discordant),
            (
                LikelyBenign,
                ClinicalSignificance::Uncertain,
                Indeterminate,
            ),
            (
                LikelyPathogenic,
                ClinicalSignificance::Conflicting,
                Indeterminate,
            ),
            (
                LikelyBenign,
                ClinicalSignificance::Other("drug response".to_string()),
                Indeterminate,
            ),
        ];

        for (prediction, significance, expected) in cases {
            assert_eq!(
                Agreement::between(prediction, &significance),
                expected,
                "prediction {:?} vs {:?}",
                prediction,
                significance
            );
        }
    }
}
