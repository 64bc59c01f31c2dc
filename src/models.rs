use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Single,
    Double,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Single
    }
}

impl ViewMode {
    /// The opposite mode, used by the toggle command.
    pub fn other(self) -> Self {
        match self {
            ViewMode::Single => ViewMode::Double,
            ViewMode::Double => ViewMode::Single,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Book,
    Periodical,
}

/// Descriptor handed in by the host application. The engine only cares about
/// the identity; the display fields are resolved by the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub kind: DocumentKind,
    pub id: String,
    pub display_title: String,
    /// Page count as claimed by the catalog; 0 until a parse confirms it.
    #[serde(default)]
    pub page_count_hint: usize,
    /// Opaque locator handed to the render surface untouched.
    pub asset_locator: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
}

impl DocumentDescriptor {
    pub fn book(id: impl Into<String>, title: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::Book,
            id: id.into(),
            display_title: title.into(),
            page_count_hint: 0,
            asset_locator: asset.into(),
            author: None,
            year: None,
            season: None,
            publish_date: None,
        }
    }

    pub fn periodical(
        id: impl Into<String>,
        title: impl Into<String>,
        asset: impl Into<String>,
    ) -> Self {
        Self {
            kind: DocumentKind::Periodical,
            ..Self::book(id, title, asset)
        }
    }

    pub fn with_page_count_hint(mut self, pages: usize) -> Self {
        self.page_count_hint = pages;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_issue(mut self, year: u16, season: impl Into<String>) -> Self {
        self.year = Some(year);
        self.season = Some(season.into());
        self
    }

    pub fn with_publish_date(mut self, date: NaiveDate) -> Self {
        self.publish_date = Some(date);
        self
    }

    /// Kind-specific byline shown next to the title in the control bar.
    pub fn subtitle(&self) -> String {
        match self.kind {
            DocumentKind::Book => match &self.author {
                Some(author) => format!("by {}", author),
                None => "author unknown".to_string(),
            },
            DocumentKind::Periodical => match (self.year, &self.season) {
                (Some(year), Some(season)) => format!("{} {}", year, season),
                _ => self
                    .publish_date
                    .map(|d| d.format("%Y-%m").to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

/// What the host asks the render surface to produce for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub page: usize,
    pub scale: f32,
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_default() {
        assert_eq!(ViewMode::default(), ViewMode::Single);
    }

    #[test]
    fn test_view_mode_other() {
        assert_eq!(ViewMode::Single.other(), ViewMode::Double);
        assert_eq!(ViewMode::Double.other(), ViewMode::Single);
    }

    #[test]
    fn test_book_subtitle() {
        let book = DocumentDescriptor::book("b1", "Worn Pages", "assets/worn.pdf")
            .with_author("M. Ostrander");
        assert_eq!(book.subtitle(), "by M. Ostrander");

        let anonymous = DocumentDescriptor::book("b2", "Untitled", "assets/untitled.pdf");
        assert_eq!(anonymous.subtitle(), "author unknown");
    }

    #[test]
    fn test_periodical_subtitle() {
        let issue = DocumentDescriptor::periodical("m1", "Quarterly", "assets/q-23.pdf")
            .with_issue(2023, "Spring");
        assert_eq!(issue.subtitle(), "2023 Spring");
    }

    #[test]
    fn test_periodical_subtitle_falls_back_to_publish_date() {
        let issue = DocumentDescriptor::periodical("m2", "Quarterly", "assets/q-24.pdf")
            .with_publish_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(issue.subtitle(), "2024-03");
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let json = r#"{
            "kind": "periodical",
            "id": "q-2023-2",
            "display_title": "Quarterly",
            "asset_locator": "assets/q-2023-2.pdf"
        }"#;
        let descriptor: DocumentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.kind, DocumentKind::Periodical);
        assert_eq!(descriptor.page_count_hint, 0);
        assert_eq!(descriptor.author, None);
    }
}
