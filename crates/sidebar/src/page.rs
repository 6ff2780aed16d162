use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Placeholder title assigned when a page is created without one.
/// 建立頁面時若未提供標題則使用的預設標題。
pub const UNTITLED: &str = "Untitled";

/// Fixed glyph palette used for freshly created pages.
/// 新頁面圖示的固定表情符號調色盤。
pub const ICON_PALETTE: [&str; 8] = ["📝", "📋", "📌", "📎", "🗂️", "📓", "📒", "📕"];

/// Unique identifier assigned to each page in the sidebar.
/// 側邊欄中每個頁面的唯一識別碼。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic id generator owned by the store; ids are never reused.
/// 由 store 持有的遞增識別碼產生器；識別碼永不重複使用。
#[derive(Debug)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    /// Starts the sequence at the given counter value.
    /// 以指定的計數值作為序列起點。
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Consumes and returns the next page id.
    /// 取出並回傳下一個頁面識別碼。
    pub fn next_id(&mut self) -> PageId {
        let id = PageId(format!("page-{}", self.next));
        self.next += 1;
        id
    }
}

/// Picks page icons from [`ICON_PALETTE`]; seedable for deterministic tests.
/// 從 [`ICON_PALETTE`] 挑選頁面圖示；可指定種子讓測試具確定性。
#[derive(Debug)]
pub struct IconPicker {
    rng: StdRng,
}

impl IconPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a random glyph from the fixed palette.
    /// 從固定調色盤隨機取出一個圖示。
    pub fn pick(&mut self) -> &'static str {
        ICON_PALETTE[self.rng.gen_range(0..ICON_PALETTE.len())]
    }
}

impl Default for IconPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// A page node in the sidebar outline. Children are owned exclusively by
/// their parent; `parent_id` is bookkeeping only and is never walked upward.
/// 側邊欄大綱中的頁面節點。子頁面由父節點獨佔擁有；`parent_id` 僅供記錄，
/// 不會用於向上遍歷。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<PageId>,
    #[serde(default)]
    pub children: Vec<Page>,
}

impl Page {
    /// Constructs a childless top-level page with the given identity.
    /// 以指定識別資訊建立不含子頁面的頂層頁面。
    pub fn new(id: PageId, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Re-parents the page under the given owner id.
    /// 將頁面標記為隸屬於指定的父頁面。
    pub fn with_parent(mut self, parent_id: PageId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_source_is_monotonic() {
        let mut ids = IdSource::starting_at(100);
        assert_eq!(ids.next_id().as_str(), "page-100");
        assert_eq!(ids.next_id().as_str(), "page-101");
        assert_eq!(ids.next_id().as_str(), "page-102");
    }

    #[test]
    fn icon_picker_stays_inside_palette() {
        let mut picker = IconPicker::from_seed(7);
        for _ in 0..32 {
            let icon = picker.pick();
            assert!(ICON_PALETTE.contains(&icon));
        }
    }

    #[test]
    fn seeded_pickers_agree() {
        let mut a = IconPicker::from_seed(42);
        let mut b = IconPicker::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.pick(), b.pick());
        }
    }

    #[test]
    fn page_serializes_without_empty_parent() {
        let page = Page::new(PageId::from_string("page-1"), "Getting Started", "📄");
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("parent_id"));

        let nested = Page::new(PageId::from_string("page-3"), "Bug Reports", "🐛")
            .with_parent(PageId::from_string("page-2"));
        let json = serde_json::to_string(&nested).unwrap();
        assert!(json.contains("parent_id"));
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nested);
    }
}
