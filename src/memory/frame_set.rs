//! FrameSet - the resident physical frames of one run.
//!
//! A [`FrameSet`] holds a fixed number of frames, each either empty or
//! occupied by one page, plus a page table for O(1) residency checks.

use std::collections::{BTreeSet, HashMap};

use crate::common::{Error, FrameId, PageId, Result};

/// A fixed-capacity set of physical frames.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │                     FrameSet                     │
/// │  ┌──────────────┐  ┌──────────────────────────┐  │
/// │  │ page_table   │  │ frames: Vec<Option<Pid>> │  │
/// │  │PageId → Fid  │─▶│ [Frame0] [Frame1] ...    │  │
/// │  └──────────────┘  └──────────────────────────┘  │
/// │  ┌──────────────────┐                            │
/// │  │ free_frames      │  lowest index is reused    │
/// │  │ BTreeSet<FrameId>│  first                     │
/// │  └──────────────────┘                            │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// Placement is deterministic: a page is loaded into the lowest-indexed
/// empty frame, so an evict-then-load pair puts the new page in the
/// victim's frame.
///
/// # Example
/// ```
/// use pagesim::{FrameSet, PageId};
///
/// let mut frames = FrameSet::new(2);
/// frames.load(PageId::new(1)).unwrap();
/// frames.load(PageId::new(2)).unwrap();
/// assert!(frames.is_full());
///
/// frames.evict(PageId::new(1)).unwrap();
/// frames.load(PageId::new(3)).unwrap();
/// assert_eq!(frames.resident_pages(), vec![PageId::new(3), PageId::new(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// One slot per physical frame.
    frames: Vec<Option<PageId>>,

    /// Maps resident pages to their frames.
    page_table: HashMap<PageId, FrameId>,

    /// Empty frames, ordered so the lowest index is taken first.
    free_frames: BTreeSet<FrameId>,
}

impl FrameSet {
    /// Create an empty frame set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. The driver rejects that case with a
    /// `ConfigError` before constructing a frame set.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            frames: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
            free_frames: (0..capacity).map(FrameId::new).collect(),
        }
    }

    /// Fixed number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of occupied frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    /// True if no frame holds a page.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    /// True iff every frame holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_frames.is_empty()
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// The frame holding `page`, if resident.
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Load `page` into the lowest-indexed empty frame.
    ///
    /// # Errors
    /// - `Error::Capacity` if every frame is occupied
    /// - `Error::AlreadyResident` if `page` already occupies a frame
    pub fn load(&mut self, page: PageId) -> Result<FrameId> {
        if self.contains(page) {
            return Err(Error::AlreadyResident(page));
        }

        let frame_id = self.free_frames.pop_first().ok_or(Error::Capacity {
            page,
            capacity: self.capacity(),
        })?;

        self.frames[frame_id.0] = Some(page);
        self.page_table.insert(page, frame_id);
        Ok(frame_id)
    }

    /// Remove `page`, freeing its frame.
    ///
    /// # Errors
    /// - `Error::NotResident` if `page` isn't in any frame
    pub fn evict(&mut self, page: PageId) -> Result<FrameId> {
        let frame_id = self
            .page_table
            .remove(&page)
            .ok_or(Error::NotResident(page))?;

        self.frames[frame_id.0] = None;
        self.free_frames.insert(frame_id);
        Ok(frame_id)
    }

    /// Resident pages in frame order.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().flatten().copied().collect()
    }

    /// Contents of every frame, `None` for empty ones.
    #[inline]
    pub fn frames(&self) -> &[Option<PageId>] {
        &self.frames
    }
}
