use crate::backend::MaterialRef;

/// How a storey's solid is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreyStrategy {
    /// Union of every wall, each with its own openings cut.
    #[default]
    WallUnion,
    /// Footprint slab minus the inner slab, boundary openings cut from the
    /// shell, interior walls merged in.
    ShellCut,
}

/// Optional materials per part.
#[derive(Debug, Clone, Default)]
pub struct Materials {
    pub walls: Option<MaterialRef>,
    pub slabs: Option<MaterialRef>,
    pub ground: Option<MaterialRef>,
}

/// Settings for [`render_building`](super::render_building).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub strategy: StoreyStrategy,
    /// Margin added on every side of each cutter so cuts breach faces that
    /// are coplanar with the wall's faces.
    pub hole_clearance: f64,
    /// Size of a ground plane just below altitude zero.
    pub ground: Option<(f64, f64)>,
    /// Emit a thin plate outlining the footprint at altitude zero.
    pub footprint_marker: bool,
    /// Yaw of the whole building about the vertical axis, in radians.
    pub orientation: f64,
    pub materials: Materials,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strategy: StoreyStrategy::WallUnion,
            hole_clearance: 0.001,
            ground: None,
            footprint_marker: false,
            orientation: 0.0,
            materials: Materials::default(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_strategy(mut self, strategy: StoreyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_hole_clearance(mut self, hole_clearance: f64) -> Self {
        self.hole_clearance = hole_clearance;
        self
    }

    #[must_use]
    pub fn with_ground(mut self, width: f64, depth: f64) -> Self {
        self.ground = Some((width, depth));
        self
    }

    #[must_use]
    pub fn with_footprint_marker(mut self) -> Self {
        self.footprint_marker = true;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_materials(mut self, materials: Materials) -> Self {
        self.materials = materials;
        self
    }
}
