use serde::{Deserialize, Serialize};

/// A third-party integration listed in the marketplace panel.
/// 市集面板中列出的第三方整合項目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    #[serde(default)]
    pub installed: bool,
}

impl Integration {
    fn new(id: &str, name: &str, description: &str, icon: &str, category: &str, installed: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            category: category.to_string(),
            installed,
        }
    }
}

/// Marketplace catalog with per-integration install state. Unknown ids are
/// silent no-ops, matching the store's not-found semantics.
/// 具安裝狀態的市集目錄。未知的識別碼為無聲的無操作，與 store 的
/// not-found 語意一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marketplace {
    entries: Vec<Integration>,
}

impl Marketplace {
    /// Builds the built-in catalog, in display order.
    /// 建立內建目錄（依顯示順序）。
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                Integration::new("slack", "Slack", "Send updates to Slack channels", "💬", "Communication", true),
                Integration::new("github", "GitHub", "Link pull requests and issues to pages", "🐙", "Development", false),
                Integration::new("figma", "Figma", "Embed and preview Figma files in pages", "🎨", "Design", true),
                Integration::new("google-drive", "Google Drive", "Embed Google Docs, Sheets, and Slides", "📁", "Productivity", false),
                Integration::new("jira", "Jira", "Sync Jira issues with page databases", "🔷", "Development", false),
                Integration::new("zapier", "Zapier", "Connect the workspace to 5000+ apps", "⚡", "Automation", false),
                Integration::new("trello", "Trello", "Import boards and cards into pages", "📋", "Productivity", false),
                Integration::new("loom", "Loom", "Embed Loom videos directly in pages", "🎥", "Communication", true),
            ],
        }
    }

    pub fn entries(&self) -> &[Integration] {
        &self.entries
    }

    /// Flips the install flag for the given integration id.
    /// 切換指定整合項目的安裝狀態。
    pub fn toggle_install(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.installed = !entry.installed;
        }
    }

    pub fn installed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.installed).count()
    }

    /// Case-insensitive filter over name, description, and category; a blank
    /// query returns the full catalog.
    /// 對名稱、描述與分類做不分大小寫的篩選；空白查詢回傳完整目錄。
    pub fn filter(&self, query: &str) -> Vec<&Integration> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_preinstalled_entries() {
        let market = Marketplace::builtin();
        assert_eq!(market.entries().len(), 8);
        assert_eq!(market.installed_count(), 3);
    }

    #[test]
    fn toggle_install_flips_and_ignores_unknown_ids() {
        let mut market = Marketplace::builtin();
        market.toggle_install("github");
        assert_eq!(market.installed_count(), 4);
        market.toggle_install("github");
        assert_eq!(market.installed_count(), 3);
        market.toggle_install("does-not-exist");
        assert_eq!(market.installed_count(), 3);
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let market = Marketplace::builtin();
        let by_name: Vec<&str> = market.filter("SLACK").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(by_name, ["slack"]);
        let by_category: Vec<&str> = market
            .filter("development")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(by_category, ["github", "jira"]);
        assert_eq!(market.filter("   ").len(), 8);
    }
}
