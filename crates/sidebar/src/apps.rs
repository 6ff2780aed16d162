use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a built-in app view; selectable like a page id but never
/// part of either forest.
/// 內建應用程式檢視的識別碼；可像頁面一樣被選取，但不屬於任何森林。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed entry in the "apps" section of the sidebar.
/// 側邊欄「應用程式」區塊中的固定項目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: AppId,
    pub label: String,
}

impl AppEntry {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: AppId::from_string(id),
            label: label.to_string(),
        }
    }
}

/// Returns the built-in app catalog, in display order.
/// 回傳內建應用程式清單（依顯示順序）。
pub fn builtin_apps() -> Vec<AppEntry> {
    vec![
        AppEntry::new("mail", "PageDesk Mail"),
        AppEntry::new("calendar", "PageDesk Calendar"),
        AppEntry::new("desktop", "PageDesk Desktop"),
    ]
}

/// Looks an app entry up by id.
/// 依識別碼尋找應用程式項目。
pub fn find_app(id: &AppId) -> Option<AppEntry> {
    builtin_apps().into_iter().find(|app| app.id == *id)
}
