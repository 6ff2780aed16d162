//! Sidebar state management primitives for PageDesk.
//! 管理 PageDesk 側邊欄狀態的核心模組。
//!
//! The [`SidebarStore`] is the single source of truth behind the sidebar: it
//! owns the private and teamspace page forests, the trash, the selection, and
//! the overlay visibility flags, and exposes the atomic operation set every
//! view routes its mutations through.

pub mod apps;
pub mod layout;
pub mod marketplace;
pub mod page;
pub mod settings;
pub mod store;
pub mod tree;
pub mod workspace;

pub use apps::{builtin_apps, find_app, AppEntry, AppId};
pub use marketplace::{Integration, Marketplace};
pub use page::{IconPicker, IdSource, Page, PageId, ICON_PALETTE, UNTITLED};
pub use settings::SettingsTab;
pub use store::{
    ActiveTarget, OverlayFlags, Section, Seed, SidebarSnapshot, SidebarStore,
};
pub use workspace::WorkspaceProfile;
