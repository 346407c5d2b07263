//! Pending photo set reducer
//! Pure state transitions - NO IO. User actions (pick, drag-reorder, set
//! cover) and async upload callbacks (progress, completion) all funnel
//! through `apply`, so whatever lock owns the set serialises them.

use crate::domains::submission::models::{PhotoFile, UploadItem};

/// Hard cap on pending photos; selections beyond it are silently dropped.
pub const MAX_PHOTOS: usize = 20;

/// A state transition on the ordered photo list.
#[derive(Debug, Clone)]
pub enum PhotoEvent {
    /// New selections appended in pick order, truncated at MAX_PHOTOS.
    Append(Vec<PhotoFile>),
    /// Drag-and-drop: remove from `from`, reinsert at `to` (intervening
    /// items shift).
    Move { from: usize, to: usize },
    /// Move the item at `index` to the front; index 0 is the cover.
    SetCover { index: usize },
    /// Upload progress for the item at `index`, percent [0, 100].
    Progress { index: usize, pct: u8 },
    /// Upload finished for the item at `index`.
    Uploaded { index: usize, url: String },
}

/// The ordered pending uploads for one submission.
#[derive(Debug, Clone, Default)]
pub struct PhotoSet {
    items: Vec<UploadItem>,
}

impl PhotoSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PhotoEvent) {
        match event {
            PhotoEvent::Append(files) => {
                for file in files {
                    self.items.push(UploadItem::new(file));
                }
                self.items.truncate(MAX_PHOTOS);
            }
            PhotoEvent::Move { from, to } => {
                if from >= self.items.len() || from == to {
                    return;
                }
                let item = self.items.remove(from);
                let to = to.min(self.items.len());
                self.items.insert(to, item);
            }
            PhotoEvent::SetCover { index } => {
                if index == 0 || index >= self.items.len() {
                    return;
                }
                let item = self.items.remove(index);
                self.items.insert(0, item);
            }
            PhotoEvent::Progress { index, pct } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.progress = pct.min(100);
                }
            }
            PhotoEvent::Uploaded { index, url } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.url = Some(url);
                    item.progress = 100;
                }
            }
        }
    }

    pub fn items(&self) -> &[UploadItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The files in upload order. `Bytes` clones are cheap refcounts.
    pub fn files(&self) -> Vec<PhotoFile> {
        self.items.iter().map(|item| item.file.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<PhotoFile> {
        names
            .iter()
            .map(|name| PhotoFile::new(*name, vec![1u8, 2, 3]))
            .collect()
    }

    fn names(set: &PhotoSet) -> Vec<String> {
        set.items()
            .iter()
            .map(|item| item.file.file_name.clone())
            .collect()
    }

    #[test]
    fn test_set_cover_moves_to_front() {
        let mut set = PhotoSet::new();
        set.apply(PhotoEvent::Append(files(&["a", "b", "c", "d"])));
        set.apply(PhotoEvent::SetCover { index: 2 });
        assert_eq!(names(&set), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_move_reinserts_and_shifts() {
        let mut set = PhotoSet::new();
        set.apply(PhotoEvent::Append(files(&["a", "b", "c", "d"])));
        set.apply(PhotoEvent::Move { from: 0, to: 2 });
        assert_eq!(names(&set), vec!["b", "c", "a", "d"]);
        set.apply(PhotoEvent::Move { from: 3, to: 0 });
        assert_eq!(names(&set), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_append_truncates_at_cap() {
        let mut set = PhotoSet::new();
        let many: Vec<String> = (0..25).map(|i| format!("photo-{}", i)).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        set.apply(PhotoEvent::Append(files(&refs)));
        assert_eq!(set.len(), MAX_PHOTOS);
        assert_eq!(set.items()[19].file.file_name, "photo-19");
    }

    #[test]
    fn test_append_on_nearly_full_set_truncates_the_addition() {
        let mut set = PhotoSet::new();
        let first: Vec<String> = (0..18).map(|i| format!("first-{}", i)).collect();
        let refs: Vec<&str> = first.iter().map(String::as_str).collect();
        set.apply(PhotoEvent::Append(files(&refs)));

        set.apply(PhotoEvent::Append(files(&["x", "y", "z", "w", "v"])));
        assert_eq!(set.len(), MAX_PHOTOS);
        assert_eq!(set.items()[18].file.file_name, "x");
        assert_eq!(set.items()[19].file.file_name, "y");
    }

    #[test]
    fn test_progress_and_completion_update_in_place() {
        let mut set = PhotoSet::new();
        set.apply(PhotoEvent::Append(files(&["a", "b"])));
        set.apply(PhotoEvent::Progress { index: 1, pct: 40 });
        assert_eq!(set.items()[1].progress, 40);
        assert_eq!(set.items()[0].progress, 0);

        set.apply(PhotoEvent::Uploaded {
            index: 1,
            url: "inmem://b".to_string(),
        });
        assert_eq!(set.items()[1].progress, 100);
        assert_eq!(set.items()[1].url.as_deref(), Some("inmem://b"));
    }

    #[test]
    fn test_out_of_range_events_are_ignored() {
        let mut set = PhotoSet::new();
        set.apply(PhotoEvent::Append(files(&["a"])));
        set.apply(PhotoEvent::Progress { index: 9, pct: 50 });
        set.apply(PhotoEvent::SetCover { index: 9 });
        set.apply(PhotoEvent::Move { from: 9, to: 0 });
        assert_eq!(names(&set), vec!["a"]);
    }
}
