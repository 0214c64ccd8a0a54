//! Markdown content layer for guest spots and global site settings.
//!
//! Content files carry YAML front matter and a markdown body rendered to
//! HTML at load time. This is the single authoritative schema for the
//! authored content kinds; bookings are not part of it.

use std::path::Path;

use comrak::{markdown_to_html, Options};
use gray_matter::{engine::YAML, Matter, ParsedEntity};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Whether the artist currently accepts booking requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingAvailability {
    Open,
    Closed,
}

/// Front matter for a guest spot announcement.
#[derive(Debug, Clone, Deserialize)]
struct GuestSpotMeta {
    city: String,
    dates: String,
    #[serde(default)]
    link: Option<String>,
}

/// An announced temporary appearance at another studio or city.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSpot {
    pub slug: String,
    pub city: String,
    pub dates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub content_html: String,
}

/// Site-wide singleton settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalInfo {
    pub booking_status: BookingAvailability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Default for GlobalInfo {
    fn default() -> Self {
        Self {
            booking_status: BookingAvailability::Open,
            announcement: None,
            instagram: None,
        }
    }
}

/// Content store holding all authored content in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    guest_spots: Vec<GuestSpot>,
    global_info: GlobalInfo,
}

impl ContentStore {
    /// Load all content from the content directory.
    pub fn load(content_dir: &Path) -> Result<Self, AppError> {
        let guest_spots = Self::load_guest_spots(&content_dir.join("guests"))?;
        let global_info = Self::load_global_info(&content_dir.join("global").join("info.md"));

        Ok(Self {
            guest_spots,
            global_info,
        })
    }

    /// Load all guest spots from the guests directory.
    fn load_guest_spots(dir: &Path) -> Result<Vec<GuestSpot>, AppError> {
        let mut spots = Vec::new();

        if !dir.exists() {
            tracing::warn!("Guest spots directory does not exist: {:?}", dir);
            return Ok(spots);
        }

        let entries =
            std::fs::read_dir(dir).map_err(|e| AppError::Content(format!("Read dir: {}", e)))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_guest_spot(&path) {
                    Ok(spot) => {
                        tracing::info!("Loaded guest spot: {}", spot.slug);
                        spots.push(spot);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load guest spot {:?}: {}", path, e);
                    }
                }
            }
        }

        spots.sort_by(|a, b| a.city.cmp(&b.city));

        Ok(spots)
    }

    /// Load a single guest spot from a markdown file.
    fn load_guest_spot(path: &Path) -> Result<GuestSpot, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Content(format!("IO error: {}", e)))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| AppError::Content("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<GuestSpotMeta> = matter
            .parse(&content)
            .map_err(|e| AppError::Content(format!("Failed to parse frontmatter: {}", e)))?;
        let meta = parsed
            .data
            .ok_or_else(|| AppError::Content("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(GuestSpot {
            slug,
            city: meta.city,
            dates: meta.dates,
            link: meta.link,
            content_html,
        })
    }

    /// Load the global info singleton. Missing or malformed files fall back
    /// to defaults so the public site stays up.
    fn load_global_info(path: &Path) -> GlobalInfo {
        if !path.exists() {
            tracing::warn!("Global info file does not exist: {:?}", path);
            return GlobalInfo::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to read global info {:?}: {}", path, e);
                return GlobalInfo::default();
            }
        };

        let matter = Matter::<YAML>::new();
        let parsed: Result<ParsedEntity<GlobalInfo>, _> = matter.parse(&content);
        match parsed {
            Ok(entity) => match entity.data {
                Some(info) => info,
                None => {
                    tracing::error!("Global info {:?} has no frontmatter", path);
                    GlobalInfo::default()
                }
            },
            Err(e) => {
                tracing::error!("Failed to parse global info {:?}: {}", path, e);
                GlobalInfo::default()
            }
        }
    }

    /// All guest spots, sorted by city.
    pub fn guest_spots(&self) -> &[GuestSpot] {
        &self.guest_spots
    }

    /// The global info singleton.
    pub fn global_info(&self) -> &GlobalInfo {
        &self.global_info
    }
}

/// Render markdown to HTML with a few GFM extensions.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    markdown_to_html(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_content(dir: &Path, rel: &str, body: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn test_load_guest_spots() {
        let dir = TempDir::new().unwrap();
        write_content(
            dir.path(),
            "guests/paris.md",
            "---\ncity: Paris\ndates: October 10-15\nlink: https://example.com/book\n---\nGuesting at Atelier Noir.\n",
        );
        write_content(
            dir.path(),
            "guests/berlin.md",
            "---\ncity: Berlin\ndates: TBA\n---\n",
        );

        let store = ContentStore::load(dir.path()).unwrap();
        let spots = store.guest_spots();
        assert_eq!(spots.len(), 2);
        // Sorted by city
        assert_eq!(spots[0].city, "Berlin");
        assert_eq!(spots[1].city, "Paris");
        assert_eq!(spots[1].slug, "paris");
        assert_eq!(spots[1].link.as_deref(), Some("https://example.com/book"));
        assert!(spots[1].content_html.contains("Atelier Noir"));
        assert!(spots[0].link.is_none());
    }

    #[test]
    fn test_load_global_info() {
        let dir = TempDir::new().unwrap();
        write_content(
            dir.path(),
            "global/info.md",
            "---\nbookingStatus: closed\nannouncement: Guesting in Paris in October\ninstagram: https://instagram.com/artist\n---\n",
        );

        let store = ContentStore::load(dir.path()).unwrap();
        let info = store.global_info();
        assert_eq!(info.booking_status, BookingAvailability::Closed);
        assert_eq!(
            info.announcement.as_deref(),
            Some("Guesting in Paris in October")
        );
    }

    #[test]
    fn test_missing_content_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();

        let store = ContentStore::load(dir.path()).unwrap();
        assert!(store.guest_spots().is_empty());
        assert_eq!(
            store.global_info().booking_status,
            BookingAvailability::Open
        );
    }

    #[test]
    fn test_malformed_guest_spot_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "guests/broken.md", "no frontmatter here");
        write_content(
            dir.path(),
            "guests/lyon.md",
            "---\ncity: Lyon\ndates: June 1-3\n---\n",
        );

        let store = ContentStore::load(dir.path()).unwrap();
        assert_eq!(store.guest_spots().len(), 1);
        assert_eq!(store.guest_spots()[0].city, "Lyon");
    }
}
