//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the API mirror
//! types and the category descriptor table that drives every
//! per-category view.

use leptos::*;

// ============ API Mirror Types ============

/// Library-wide material counts, one per category
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MaterialCounts {
    pub images: u64,
    pub videos: u64,
    pub audio: u64,
    pub text: u64,
    pub other: u64,
}

impl MaterialCounts {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Images => self.images,
            Category::Videos => self.videos,
            Category::Audio => self.audio,
            Category::Text => self.text,
            Category::Other => self.other,
        }
    }
}

/// One day of the trend series
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TrendPoint {
    pub name: String,
    #[serde(flatten)]
    pub counts: MaterialCounts,
}

/// One row of the project resource table
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRow {
    pub key: String,
    pub name: String,
    #[serde(flatten)]
    pub counts: MaterialCounts,
    pub video_duration: String,
    pub disk_usage: String,
}

/// Aggregate view of one category inside a resource detail
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub count: usize,
    pub formats: Vec<String>,
    #[serde(default)]
    pub total_duration: Option<String>,
    pub total_size: String,
}

/// A nested sub-item (no further nesting)
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub size: String,
    pub format: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub bitrate: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
}

/// A single material item inside a resource detail
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub size: String,
    pub format: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub bitrate: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub items: Vec<SubItem>,
}

/// Per-category summaries inside a resource detail
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct DetailSummary {
    pub images: CategorySummary,
    pub videos: CategorySummary,
    pub audio: CategorySummary,
    pub text: CategorySummary,
    pub other: CategorySummary,
}

impl DetailSummary {
    pub fn get(&self, category: Category) -> &CategorySummary {
        match category {
            Category::Images => &self.images,
            Category::Videos => &self.videos,
            Category::Audio => &self.audio,
            Category::Text => &self.text,
            Category::Other => &self.other,
        }
    }
}

/// Per-category item lists inside a resource detail
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct DetailResources {
    pub images: Vec<ResourceItem>,
    pub videos: Vec<ResourceItem>,
    pub audio: Vec<ResourceItem>,
    pub text: Vec<ResourceItem>,
    pub other: Vec<ResourceItem>,
}

impl DetailResources {
    pub fn get(&self, category: Category) -> &[ResourceItem] {
        match category {
            Category::Images => &self.images,
            Category::Videos => &self.videos,
            Category::Audio => &self.audio,
            Category::Text => &self.text,
            Category::Other => &self.other,
        }
    }
}

/// Full detail record for one resource
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetail {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub description: String,
    pub tags: Vec<String>,
    pub summary: DetailSummary,
    pub resources: DetailResources,
}

// ============ Category Descriptors ============

/// Material category. Every per-category surface (stat cards, chart
/// series, detail tabs, table columns) is driven off this table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Videos,
    Audio,
    Text,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Text,
        Category::Other,
    ];

    /// Wire key, matches the API field names
    pub fn key(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Text => "text",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Text => "Text",
            Category::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Images => "🖼️",
            Category::Videos => "🎬",
            Category::Audio => "🎵",
            Category::Text => "📄",
            Category::Other => "📦",
        }
    }

    /// Chart series and card accent color
    pub fn color(self) -> &'static str {
        match self {
            Category::Images => "#FF9800", // Orange
            Category::Videos => "#4CAF50", // Green
            Category::Audio => "#2196F3",  // Blue
            Category::Text => "#9C27B0",   // Purple
            Category::Other => "#F44336",  // Red
        }
    }

    /// Columns shown for top-level items of this category
    pub fn columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            Category::Images => &[Thumbnail, Name, Format, Dimensions, Size, Created, Updated],
            Category::Videos => &[Thumbnail, Name, Format, Duration, Resolution, Size, Created],
            Category::Audio => &[Name, Format, Duration, Bitrate, Size, Created],
            Category::Text => &[Name, Format, WordCount, PageCount, Size, Created],
            Category::Other => &[Name, Format, Size, Created],
        }
    }

    /// Columns shown for nested sub-items of this category
    pub fn sub_columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            Category::Images => &[Thumbnail, Name, Format, Dimensions, Size, Created],
            Category::Videos => &[Thumbnail, Name, Format, Duration, Resolution, Size, Created],
            Category::Audio => &[Name, Format, Duration, Bitrate, Size, Created],
            Category::Text => &[Name, Format, WordCount, PageCount, Size, Created],
            Category::Other => &[Name, Format, Size, Created],
        }
    }
}

/// A column of a detail item table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Thumbnail,
    Name,
    Format,
    Dimensions,
    Duration,
    Resolution,
    Bitrate,
    WordCount,
    PageCount,
    Size,
    Created,
    Updated,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Thumbnail => "Preview",
            Column::Name => "Name",
            Column::Format => "Format",
            Column::Dimensions => "Dimensions",
            Column::Duration => "Duration",
            Column::Resolution => "Resolution",
            Column::Bitrate => "Bitrate",
            Column::WordCount => "Words",
            Column::PageCount => "Pages",
            Column::Size => "Size",
            Column::Created => "Created",
            Column::Updated => "Updated",
        }
    }
}

// ============ Detail Selection ============

/// State of the resource detail modal
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Closed,
    Loading,
    Loaded(ResourceDetail),
}

/// Token identifying one in-flight detail fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

/// Tracks which resource the user most recently asked to open.
///
/// Every `open` bumps a generation counter and hands back a token;
/// a response is applied only if its token still matches, so a stale
/// fetch can never overwrite a newer selection or reopen a closed
/// modal.
#[derive(Clone, Debug, Default)]
pub struct DetailSelection {
    current: Option<String>,
    generation: u64,
}

impl DetailSelection {
    /// Select a resource for viewing, invalidating any in-flight fetch
    pub fn open(&mut self, id: &str) -> RequestToken {
        self.current = Some(id.to_string());
        self.generation += 1;
        RequestToken {
            generation: self.generation,
        }
    }

    /// Close the detail view, invalidating any in-flight fetch
    pub fn close(&mut self) {
        self.current = None;
        self.generation += 1;
    }

    /// Whether a response carrying this token may still be applied
    pub fn accepts(&self, token: &RequestToken) -> bool {
        self.current.is_some() && token.generation == self.generation
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

// ============ Dashboard State ============

/// Global application state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Library-wide counts, `None` until the first full load
    pub counts: RwSignal<Option<MaterialCounts>>,
    /// 7-day trend series
    pub trend: RwSignal<Vec<TrendPoint>>,
    /// Project resource table rows
    pub resources: RwSignal<Vec<ResourceRow>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Currently selected resource id (detail modal open)
    pub selected: RwSignal<Option<String>>,
    /// Detail modal contents
    pub detail: RwSignal<DetailState>,
    /// Supersede bookkeeping for detail fetches
    pub selection: RwSignal<DetailSelection>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        counts: create_rw_signal(None),
        trend: create_rw_signal(Vec::new()),
        resources: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        selected: create_rw_signal(None),
        detail: create_rw_signal(DetailState::Closed),
        selection: create_rw_signal(DetailSelection::default()),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl DashboardState {
    /// Open the detail modal for a resource and fetch its record
    pub fn open_resource(&self, id: &str) {
        let id = id.to_string();
        let token = self
            .selection
            .try_update(|s| s.open(&id))
            .unwrap_or(RequestToken { generation: 0 });

        self.selected.set(Some(id.clone()));
        self.detail.set(DetailState::Loading);

        let selection = self.selection;
        let selected = self.selected;
        let detail = self.detail;
        let error = self.error;

        spawn_local(async move {
            let result = crate::api::fetch_resource_detail(&id).await;

            // A newer open or a close supersedes this response
            if !selection.with_untracked(|s| s.accepts(&token)) {
                return;
            }

            match result {
                Ok(record) => {
                    detail.set(DetailState::Loaded(record));
                }
                Err(e) => {
                    selected.set(None);
                    detail.set(DetailState::Closed);
                    error.set(Some(e));

                    gloo_timers::callback::Timeout::new(5000, move || {
                        error.set(None);
                    })
                    .forget();
                }
            }
        });
    }

    /// Close the detail modal, discarding any in-flight fetch
    pub fn close_resource(&self) {
        self.selection.update(|s| s.close());
        self.selected.set(None);
        self.detail.set(DetailState::Closed);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_hands_out_accepted_token() {
        let mut selection = DetailSelection::default();
        let token = selection.open("3");
        assert!(selection.accepts(&token));
        assert_eq!(selection.current(), Some("3"));
    }

    #[test]
    fn test_newer_open_supersedes_older() {
        let mut selection = DetailSelection::default();
        let first = selection.open("1");
        let second = selection.open("2");
        assert!(!selection.accepts(&first));
        assert!(selection.accepts(&second));
        assert_eq!(selection.current(), Some("2"));
    }

    #[test]
    fn test_close_rejects_in_flight_token() {
        let mut selection = DetailSelection::default();
        let token = selection.open("1");
        selection.close();
        assert!(!selection.accepts(&token));
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_reopen_after_close_gets_fresh_token() {
        let mut selection = DetailSelection::default();
        let stale = selection.open("1");
        selection.close();
        let fresh = selection.open("1");
        assert!(!selection.accepts(&stale));
        assert!(selection.accepts(&fresh));
    }

    #[test]
    fn test_category_columns_match_fields() {
        use Column::*;
        assert!(Category::Videos.columns().contains(&Duration));
        assert!(Category::Videos.columns().contains(&Resolution));
        assert!(!Category::Images.columns().contains(&Duration));
        assert!(Category::Text.columns().contains(&WordCount));
        // Sub-item tables for images drop the Updated column
        assert!(Category::Images.columns().contains(&Updated));
        assert!(!Category::Images.sub_columns().contains(&Updated));
    }

    #[test]
    fn test_counts_lookup_by_category() {
        let counts = MaterialCounts {
            images: 10,
            videos: 20,
            audio: 30,
            text: 40,
            other: 50,
        };
        assert_eq!(counts.get(Category::Images), 10);
        assert_eq!(counts.get(Category::Other), 50);
    }
}
