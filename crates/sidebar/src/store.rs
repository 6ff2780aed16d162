use std::mem;

use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::page::{IconPicker, IdSource, Page, PageId, UNTITLED};
use crate::tree;

/// The two page sections of the sidebar.
/// 側邊欄的兩個頁面區塊。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Private,
    Teamspace,
}

/// What the selection currently points at: a page in either forest (possibly
/// dangling after a delete, which consumers must tolerate) or a built-in app
/// view.
/// 目前選取的對象：任一森林中的頁面（刪除後可能懸空，取用端須容忍），
/// 或內建應用程式檢視。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ActiveTarget {
    Page(PageId),
    App(AppId),
}

/// Visibility of the four overlay panels. Independent booleans; the store
/// enforces no mutual exclusion, stacking order is a rendering concern.
/// 四個疊加面板的可見狀態。各自獨立，store 不強制互斥。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFlags {
    pub search_open: bool,
    pub trash_open: bool,
    pub settings_open: bool,
    pub marketplace_open: bool,
}

/// Initial store contents. The default seed mirrors the stock workspace: one
/// private page and one teamspace root with two nested pages.
/// store 的初始內容。預設種子為一個私人頁面，以及含兩個子頁面的
/// 團隊空間根頁面。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub private_pages: Vec<Page>,
    #[serde(default)]
    pub teamspace_pages: Vec<Page>,
    #[serde(default)]
    pub active: Option<ActiveTarget>,
    /// Counter value for the first generated id; seed pages use fixed ids
    /// below this value.
    /// 第一個動態識別碼的計數起點；種子頁面使用低於此值的固定識別碼。
    #[serde(default = "Seed::default_first_generated_id")]
    pub first_generated_id: u64,
}

impl Seed {
    fn default_first_generated_id() -> u64 {
        100
    }

    /// An empty workspace with no pages and nothing selected.
    /// 不含任何頁面、亦無選取狀態的空工作區。
    pub fn empty() -> Self {
        Self {
            private_pages: Vec::new(),
            teamspace_pages: Vec::new(),
            active: None,
            first_generated_id: Self::default_first_generated_id(),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        let getting_started = Page::new(PageId::from_string("page-1"), "Getting Started", "📄");
        let tracking_id = PageId::from_string("page-2");
        let mut issue_tracking = Page::new(tracking_id.clone(), "Issue Tracking", "✅");
        issue_tracking.children = vec![
            Page::new(PageId::from_string("page-3"), "Bug Reports", "🐛")
                .with_parent(tracking_id.clone()),
            Page::new(PageId::from_string("page-4"), "Feature Requests", "✨")
                .with_parent(tracking_id),
        ];
        Self {
            active: Some(ActiveTarget::Page(getting_started.id.clone())),
            private_pages: vec![getting_started],
            teamspace_pages: vec![issue_tracking],
            first_generated_id: Self::default_first_generated_id(),
        }
    }
}

/// Cloned view of the whole store, safe to hold across a render pass.
/// store 的完整複製檢視，可安全地在一次繪製流程中持有。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSnapshot {
    pub revision: u64,
    pub private_pages: Vec<Page>,
    pub teamspace_pages: Vec<Page>,
    pub trashed_pages: Vec<Page>,
    pub active: Option<ActiveTarget>,
    pub overlays: OverlayFlags,
}

/// Single source of truth for the sidebar: the two page forests, the trash,
/// the selection, and the overlay flags. All mutation goes through the
/// operation set below; every operation is a complete state transition and
/// bumps the revision counter. Lookups that miss are silent no-ops by
/// contract — callers may address an id without knowing which forest owns it.
/// 側邊欄的唯一資料來源：兩個頁面森林、垃圾桶、選取狀態與疊加旗標。
/// 所有變更都必須經由下列操作完成；每個操作都是完整的狀態轉移並遞增
/// 修訂計數。查無目標時為無聲的無操作。
#[derive(Debug)]
pub struct SidebarStore {
    private_pages: Vec<Page>,
    teamspace_pages: Vec<Page>,
    trashed_pages: Vec<Page>,
    active: Option<ActiveTarget>,
    overlays: OverlayFlags,
    ids: IdSource,
    icons: IconPicker,
    revision: u64,
}

impl SidebarStore {
    /// Builds a store from the given seed.
    /// 依指定種子建立 store。
    pub fn new(seed: Seed) -> Self {
        Self::with_icon_picker(seed, IconPicker::new())
    }

    /// Builds a store with a deterministic icon sequence, for tests.
    /// 以確定性的圖示序列建立 store（供測試使用）。
    pub fn with_icon_seed(seed: Seed, icon_seed: u64) -> Self {
        Self::with_icon_picker(seed, IconPicker::from_seed(icon_seed))
    }

    fn with_icon_picker(seed: Seed, icons: IconPicker) -> Self {
        Self {
            private_pages: seed.private_pages,
            teamspace_pages: seed.teamspace_pages,
            trashed_pages: Vec::new(),
            active: seed.active,
            overlays: OverlayFlags::default(),
            ids: IdSource::starting_at(seed.first_generated_id),
            icons,
            revision: 0,
        }
    }

    pub fn private_pages(&self) -> &[Page] {
        &self.private_pages
    }

    pub fn teamspace_pages(&self) -> &[Page] {
        &self.teamspace_pages
    }

    pub fn trashed_pages(&self) -> &[Page] {
        &self.trashed_pages
    }

    pub fn active(&self) -> Option<&ActiveTarget> {
        self.active.as_ref()
    }

    pub fn overlays(&self) -> OverlayFlags {
        self.overlays
    }

    /// Bumped once per applied mutation; consumers compare it to decide
    /// whether held snapshots are stale.
    /// 每次套用變更即遞增一次；取用端可據此判斷快照是否過期。
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Finds a page by id in either forest (private first).
    /// 在兩個森林中依識別碼尋找頁面（先查私人區）。
    pub fn find_page(&self, id: &PageId) -> Option<&Page> {
        tree::find(&self.private_pages, id).or_else(|| tree::find(&self.teamspace_pages, id))
    }

    /// Clones the entire state into a consumer-owned snapshot.
    /// 將完整狀態複製為取用端持有的快照。
    pub fn snapshot(&self) -> SidebarSnapshot {
        SidebarSnapshot {
            revision: self.revision,
            private_pages: self.private_pages.clone(),
            teamspace_pages: self.teamspace_pages.clone(),
            trashed_pages: self.trashed_pages.clone(),
            active: self.active.clone(),
            overlays: self.overlays,
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn build_page(&mut self, title: Option<&str>, parent_id: Option<PageId>) -> Page {
        let title = match title {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => UNTITLED.to_string(),
        };
        Page {
            id: self.ids.next_id(),
            title,
            icon: self.icons.pick().to_string(),
            parent_id,
            children: Vec::new(),
        }
    }

    /// Appends a fresh page to the top level of the chosen section and makes
    /// it the active page.
    /// 在指定區塊的頂層新增頁面並將其設為作用中頁面。
    pub fn add_top_level(&mut self, section: Section, title: Option<&str>) -> PageId {
        let page = self.build_page(title, None);
        let id = page.id.clone();
        match section {
            Section::Private => self.private_pages.push(page),
            Section::Teamspace => self.teamspace_pages.push(page),
        }
        self.active = Some(ActiveTarget::Page(id.clone()));
        self.touch();
        id
    }

    /// Appends a fresh page under `parent_id`, trying the private forest
    /// first, then the teamspace forest. Returns `None` without consuming an
    /// id when neither forest contains the parent.
    /// 在 `parent_id` 底下新增頁面；先嘗試私人森林，再嘗試團隊空間森林。
    /// 兩者皆無此父頁面時回傳 `None`，且不消耗識別碼。
    pub fn add_sub_page(&mut self, parent_id: &PageId, title: Option<&str>) -> Option<PageId> {
        let section = if tree::contains(&self.private_pages, parent_id) {
            Section::Private
        } else if tree::contains(&self.teamspace_pages, parent_id) {
            Section::Teamspace
        } else {
            return None;
        };

        let page = self.build_page(title, Some(parent_id.clone()));
        let id = page.id.clone();
        match section {
            Section::Private => {
                let (forest, _) =
                    tree::insert_under(mem::take(&mut self.private_pages), parent_id, page);
                self.private_pages = forest;
            }
            Section::Teamspace => {
                let (forest, _) =
                    tree::insert_under(mem::take(&mut self.teamspace_pages), parent_id, page);
                self.teamspace_pages = forest;
            }
        }
        self.active = Some(ActiveTarget::Page(id.clone()));
        self.touch();
        Some(id)
    }

    /// Moves the page (with its whole subtree) out of whichever forest owns
    /// it and into the trash. The trash keeps a detached snapshot: children
    /// are dropped and the parent link cleared. Clears the selection iff it
    /// referenced the deleted page.
    /// 將頁面（連同整棵子樹）自所屬森林移入垃圾桶。垃圾桶保存脫離後的
    /// 快照：子頁面捨棄、父連結清除。若選取狀態指向被刪頁面則一併清除。
    pub fn delete_to_trash(&mut self, page_id: &PageId) {
        let (private, removed) = tree::remove(mem::take(&mut self.private_pages), page_id);
        self.private_pages = private;
        let removed = match removed {
            Some(page) => Some(page),
            None => {
                let (teamspace, removed) =
                    tree::remove(mem::take(&mut self.teamspace_pages), page_id);
                self.teamspace_pages = teamspace;
                removed
            }
        };
        let Some(mut page) = removed else {
            return;
        };
        page.children.clear();
        page.parent_id = None;
        self.trashed_pages.push(page);
        if matches!(&self.active, Some(ActiveTarget::Page(active)) if active == page_id) {
            self.active = None;
        }
        self.touch();
    }

    /// Moves a trashed page back as a top-level private page. The former
    /// nesting position is not preserved; restored pages start childless.
    /// 將垃圾桶中的頁面還原為私人區的頂層頁面。不保留原本的巢狀位置，
    /// 還原後的頁面不含子頁面。
    pub fn restore(&mut self, page_id: &PageId) {
        let Some(index) = self.trashed_pages.iter().position(|page| page.id == *page_id) else {
            return;
        };
        let page = self.trashed_pages.remove(index);
        self.private_pages.push(page);
        self.touch();
    }

    /// Permanently removes a page from the trash; idempotent.
    /// 自垃圾桶永久刪除頁面；重複呼叫無額外效果。
    pub fn purge(&mut self, page_id: &PageId) {
        let Some(index) = self.trashed_pages.iter().position(|page| page.id == *page_id) else {
            return;
        };
        self.trashed_pages.remove(index);
        self.touch();
    }

    /// Replaces the selection unconditionally; no existence check is made.
    /// 無條件取代選取狀態；不檢查目標是否存在。
    pub fn set_active(&mut self, target: Option<ActiveTarget>) {
        self.active = target;
        self.touch();
    }

    pub fn set_search_open(&mut self, open: bool) {
        self.overlays.search_open = open;
        self.touch();
    }

    pub fn set_trash_open(&mut self, open: bool) {
        self.overlays.trash_open = open;
        self.touch();
    }

    pub fn set_settings_open(&mut self, open: bool) {
        self.overlays.settings_open = open;
        self.touch();
    }

    pub fn set_marketplace_open(&mut self, open: bool) {
        self.overlays.marketplace_open = open;
        self.touch();
    }
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}
