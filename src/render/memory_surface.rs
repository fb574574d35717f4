use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Surface};

/// In-memory surface used by tests and headless hosts.
///
/// It still validates every committed frame so tests can catch invalid
/// geometry before a real backend is involved.
#[derive(Debug, Default)]
pub struct MemorySurface {
    containers: IndexMap<String, Viewport>,
    last_frames: IndexMap<String, RenderFrame>,
    commit_counts: IndexMap<String, usize>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, container_id: impl Into<String>, viewport: Viewport) -> Self {
        self.containers.insert(container_id.into(), viewport);
        self
    }

    pub fn add_container(&mut self, container_id: impl Into<String>, viewport: Viewport) {
        self.containers.insert(container_id.into(), viewport);
    }

    #[must_use]
    pub fn last_frame(&self, container_id: &str) -> Option<&RenderFrame> {
        self.last_frames.get(container_id)
    }

    #[must_use]
    pub fn commit_count(&self, container_id: &str) -> usize {
        self.commit_counts.get(container_id).copied().unwrap_or(0)
    }
}

impl Surface for MemorySurface {
    fn container_size(&self, container_id: &str) -> Option<Viewport> {
        self.containers.get(container_id).copied()
    }

    fn commit(&mut self, container_id: &str, frame: &RenderFrame) -> ChartResult<()> {
        if !self.containers.contains_key(container_id) {
            return Err(ChartError::ContainerNotFound {
                container_id: container_id.to_owned(),
            });
        }

        frame.validate()?;
        self.last_frames
            .insert(container_id.to_owned(), frame.clone());
        *self
            .commit_counts
            .entry(container_id.to_owned())
            .or_insert(0) += 1;
        Ok(())
    }
}
