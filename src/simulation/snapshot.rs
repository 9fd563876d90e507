//! Per-step snapshots.

use std::fmt;

use crate::common::{FrameId, PageId};

/// What one reference did to the frame set.
///
/// Created once per step by the driver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSnapshot {
    /// Zero-based position in the reference string.
    pub step: usize,

    /// Page referenced at this step.
    pub page: PageId,

    /// True if the page was not resident.
    pub fault: bool,

    /// Page evicted to make room, if any.
    pub evicted: Option<PageId>,

    /// Frame that now holds `page`.
    pub frame: FrameId,

    /// Contents of every frame after the step.
    pub frames: Vec<Option<PageId>>,
}

impl StepSnapshot {
    /// True if the page was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// Resident pages after the step, in frame order.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().flatten().copied().collect()
    }
}

impl fmt::Display for StepSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {}: Accessing Page {} ({})",
            self.step + 1,
            self.page.0,
            if self.fault { "Page Fault" } else { "Hit" }
        )?;
        if let Some(victim) = self.evicted {
            write!(f, " evicted {}", victim.0)?;
        }
        write!(f, " [")?;
        for (i, slot) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page.0)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(fault: bool, evicted: Option<u32>) -> StepSnapshot {
        StepSnapshot {
            step: 3,
            page: PageId::new(4),
            fault,
            evicted: evicted.map(PageId::new),
            frame: FrameId::new(0),
            frames: vec![Some(PageId::new(4)), Some(PageId::new(2)), None],
        }
    }

    #[test]
    fn test_hit_and_resident_pages() {
        let snap = snapshot(false, None);
        assert!(snap.is_hit());
        assert_eq!(snap.resident_pages(), vec![PageId::new(4), PageId::new(2)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            snapshot(true, Some(1)).to_string(),
            "Step 4: Accessing Page 4 (Page Fault) evicted 1 [4, 2, -]"
        );
        assert_eq!(
            snapshot(false, None).to_string(),
            "Step 4: Accessing Page 4 (Hit) [4, 2, -]"
        );
    }
}
