use serde::{Deserialize, Serialize};

/// Identity shown in the workspace switcher at the top of the sidebar.
/// 顯示於側邊欄頂端工作區切換器的識別資訊。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceProfile {
    pub name: String,
    /// Single-letter avatar; derived from the name when not supplied.
    /// 單一字母的頭像；未提供時由名稱推導。
    pub initial: String,
    pub plan: String,
}

impl WorkspaceProfile {
    pub fn new(name: impl Into<String>, plan: impl Into<String>) -> Self {
        let name = name.into();
        let initial = name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "W".to_string());
        Self {
            name,
            initial,
            plan: plan.into(),
        }
    }
}

impl Default for WorkspaceProfile {
    fn default() -> Self {
        Self::new("My Workspace", "Free Plan")
    }
}
