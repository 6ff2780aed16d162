//! Pure operations over a page forest (an ordered sequence of root pages).
//! Each function consumes the forest and returns a new one; untouched
//! subtrees are moved rather than copied, so unchanged structure is shared
//! by ownership transfer instead of cloning.
//! 頁面森林（有序的根頁面序列）上的純函式操作。每個函式取得森林的所有權並
//! 回傳新森林；未變動的子樹以搬移而非複製處理。

use std::mem;

use crate::page::{Page, PageId};

/// Finds a page by id via pre-order depth-first traversal, first match wins.
/// 以前序深度優先尋找頁面，回傳第一個符合者。
pub fn find<'a>(forest: &'a [Page], id: &PageId) -> Option<&'a Page> {
    for page in forest {
        if page.id == *id {
            return Some(page);
        }
        if let Some(found) = find(&page.children, id) {
            return Some(found);
        }
    }
    None
}

/// Returns `true` when the id is reachable anywhere inside the forest.
/// 當識別碼存在於森林任一深度時回傳 `true`。
pub fn contains(forest: &[Page], id: &PageId) -> bool {
    find(forest, id).is_some()
}

/// Appends `new_page` to the children of the page matching `parent_id`, at
/// any depth. Returns the new forest and whether an insertion happened; a
/// missing parent leaves the forest unchanged (callers try the private forest
/// first, then the teamspace forest, and expect exactly one to match).
/// 將 `new_page` 附加到符合 `parent_id` 的頁面子序列末端（任意深度）。
/// 回傳新森林與是否完成插入；找不到父頁面時森林維持原狀。
pub fn insert_under(forest: Vec<Page>, parent_id: &PageId, new_page: Page) -> (Vec<Page>, bool) {
    let mut inserted = false;
    let mut next = Vec::with_capacity(forest.len());
    for mut page in forest {
        if inserted {
            next.push(page);
            continue;
        }
        if page.id == *parent_id {
            page.children.push(new_page.clone());
            inserted = true;
            next.push(page);
            continue;
        }
        let (children, did_insert) =
            insert_under(mem::take(&mut page.children), parent_id, new_page.clone());
        page.children = children;
        inserted = did_insert;
        next.push(page);
    }
    (next, inserted)
}

/// Excises the page matching `id` from wherever it sits in the forest,
/// returning the new forest together with the detached node. The whole
/// subtree detaches with it; children are not promoted to the grandparent.
/// Sibling order is preserved; a missing id leaves the forest unchanged.
/// 將符合 `id` 的頁面自森林中切離並連同節點一併回傳。整棵子樹隨之脫離，
/// 子頁面不會提升至祖父層；兄弟順序維持不變。
pub fn remove(forest: Vec<Page>, id: &PageId) -> (Vec<Page>, Option<Page>) {
    let mut removed = None;
    let mut next = Vec::with_capacity(forest.len());
    for mut page in forest {
        if removed.is_some() {
            next.push(page);
            continue;
        }
        if page.id == *id {
            removed = Some(page);
            continue;
        }
        let (children, taken) = remove(mem::take(&mut page.children), id);
        page.children = children;
        removed = taken;
        next.push(page);
    }
    (next, removed)
}
