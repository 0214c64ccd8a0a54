//! Portfolio entry model: a published tattoo image with metadata.

use serde::{Deserialize, Serialize};

/// Whether the piece was realized on a client or is an available flash design.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TattooStatus {
    Done,
    Flash,
}

impl TattooStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TattooStatus::Done => "done",
            TattooStatus::Flash => "flash",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "done" => Some(TattooStatus::Done),
            "flash" => Some(TattooStatus::Flash),
            _ => None,
        }
    }
}

/// A single published tattoo image record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tattoo {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub status: TattooStatus,
    pub published_date: String,
}

/// Fields for inserting a new portfolio entry, assembled after the image
/// upload has produced a public URL.
#[derive(Debug, Clone)]
pub struct NewTattoo {
    pub title: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub status: TattooStatus,
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
