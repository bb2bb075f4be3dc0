use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

/// Fixed id of the drawing surface the compare chart binds to.
///
/// A registry without this id is a supported configuration: the render entry
/// point logs the miss and draws nothing.
pub const COMPARE_BAR_CHART_SURFACE_ID: &str = "compareBarChart";

/// One host-owned drawing region: pixel dimensions plus the backend that
/// draws into it.
#[derive(Debug)]
pub struct DrawingSurface<R> {
    viewport: Viewport,
    renderer: R,
}

impl<R: Renderer> DrawingSurface<R> {
    pub fn new(viewport: Viewport, renderer: R) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self { viewport, renderer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.renderer.render(frame)
    }

    /// Hands the backend back to the host, e.g. to export a finished surface.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Insertion-ordered map of named drawing surfaces owned by the host page.
#[derive(Debug)]
pub struct SurfaceRegistry<R> {
    surfaces: IndexMap<String, DrawingSurface<R>>,
}

impl<R> Default for SurfaceRegistry<R> {
    fn default() -> Self {
        Self {
            surfaces: IndexMap::new(),
        }
    }
}

impl<R: Renderer> SurfaceRegistry<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under `id`, returning any surface it replaced.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        surface: DrawingSurface<R>,
    ) -> Option<DrawingSurface<R>> {
        self.surfaces.insert(id.into(), surface)
    }

    pub fn remove(&mut self, id: &str) -> Option<DrawingSurface<R>> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DrawingSurface<R>> {
        self.surfaces.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DrawingSurface<R>> {
        self.surfaces.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}
