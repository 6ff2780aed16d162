use serde::{Deserialize, Serialize};

/// Tabs of the settings panel, in display order.
/// 設定面板的分頁（依顯示順序）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    Account,
    Notifications,
    Connections,
    Appearance,
    Language,
    Teamspace,
    Members,
    Billing,
    Security,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 9] = [
        SettingsTab::Account,
        SettingsTab::Notifications,
        SettingsTab::Connections,
        SettingsTab::Appearance,
        SettingsTab::Language,
        SettingsTab::Teamspace,
        SettingsTab::Members,
        SettingsTab::Billing,
        SettingsTab::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Account => "My account",
            SettingsTab::Notifications => "My notifications",
            SettingsTab::Connections => "My connections",
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Language => "Language & region",
            SettingsTab::Teamspace => "Teamspace settings",
            SettingsTab::Members => "Members",
            SettingsTab::Billing => "Billing",
            SettingsTab::Security => "Security",
        }
    }
}

impl Default for SettingsTab {
    fn default() -> Self {
        SettingsTab::Account
    }
}
