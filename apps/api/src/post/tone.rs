//! Tone presets: maps a named tone style to how much technical detail a post carries.
//!
//! Only `technical_depth` changes rendered output. Format and enthusiasm are
//! carried for the completion prompt and for callers that display the preset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneStyle {
    Formal,
    #[default]
    Balanced,
    Narrative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalDepth {
    High,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostFormat {
    Structured,
    Conversational,
    Story,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enthusiasm {
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonePreset {
    pub technical_depth: TechnicalDepth,
    pub format: PostFormat,
    pub enthusiasm: Enthusiasm,
}

/// Number of technical-detail bullets kept at moderate depth.
pub const MODERATE_DETAIL_LIMIT: usize = 3;

pub const HIGH_DEPTH_HEADER: &str = "Technical Implementation:";
pub const MODERATE_DEPTH_HEADER: &str = "Key Technical Highlights:";

impl ToneStyle {
    pub fn preset(&self) -> TonePreset {
        match self {
            ToneStyle::Formal => TonePreset {
                technical_depth: TechnicalDepth::High,
                format: PostFormat::Structured,
                enthusiasm: Enthusiasm::Moderate,
            },
            ToneStyle::Balanced => TonePreset {
                technical_depth: TechnicalDepth::Moderate,
                format: PostFormat::Conversational,
                enthusiasm: Enthusiasm::Moderate,
            },
            ToneStyle::Narrative => TonePreset {
                technical_depth: TechnicalDepth::Moderate,
                format: PostFormat::Story,
                enthusiasm: Enthusiasm::High,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneStyle::Formal => "formal",
            ToneStyle::Balanced => "balanced",
            ToneStyle::Narrative => "narrative",
        }
    }
}

impl TechnicalDepth {
    /// `None` keeps every technical detail.
    pub fn detail_limit(&self) -> Option<usize> {
        match self {
            TechnicalDepth::High => None,
            TechnicalDepth::Moderate => Some(MODERATE_DETAIL_LIMIT),
        }
    }

    pub fn section_header(&self) -> &'static str {
        match self {
            TechnicalDepth::High => HIGH_DEPTH_HEADER,
            TechnicalDepth::Moderate => MODERATE_DEPTH_HEADER,
        }
    }
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone style '{0}' (expected formal, balanced or narrative)")]
pub struct UnknownTone(pub String);

impl FromStr for ToneStyle {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Ok(ToneStyle::Formal),
            "balanced" => Ok(ToneStyle::Balanced),
            "narrative" => Ok(ToneStyle::Narrative),
            _ => Err(UnknownTone(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_keeps_all_details() {
        let preset = ToneStyle::Formal.preset();
        assert_eq!(preset.technical_depth, TechnicalDepth::High);
        assert_eq!(preset.technical_depth.detail_limit(), None);
        assert_eq!(preset.technical_depth.section_header(), "Technical Implementation:");
    }

    #[test]
    fn test_balanced_and_narrative_share_depth() {
        assert_eq!(
            ToneStyle::Balanced.preset().technical_depth,
            ToneStyle::Narrative.preset().technical_depth
        );
        assert_eq!(
            ToneStyle::Narrative.preset().technical_depth.detail_limit(),
            Some(3)
        );
    }

    #[test]
    fn test_narrative_is_story_with_high_enthusiasm() {
        let preset = ToneStyle::Narrative.preset();
        assert_eq!(preset.format, PostFormat::Story);
        assert_eq!(preset.enthusiasm, Enthusiasm::High);
    }

    #[test]
    fn test_default_tone_is_balanced() {
        assert_eq!(ToneStyle::default(), ToneStyle::Balanced);
    }

    #[test]
    fn test_parse_rejects_unknown_tone() {
        assert_eq!("Formal".parse(), Ok(ToneStyle::Formal));
        assert!("shouty".parse::<ToneStyle>().is_err());
    }
}
