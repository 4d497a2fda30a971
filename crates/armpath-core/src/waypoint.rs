use glam::Vec2;

/// An operator-placed point: planar surface position plus a depth proxy.
///
/// `x` and `z` are backing-pixel coordinates on the surface; `depth` is the
/// slider value at placement (or after later edits).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f32,
    pub depth: f32,
    pub z: f32,
}

impl Waypoint {
    pub fn new(x: f32, depth: f32, z: f32) -> Self {
        Self { x, depth, z }
    }

    pub fn at(planar: Vec2, depth: f32) -> Self {
        Self { x: planar.x, depth, z: planar.y }
    }

    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    fn apply(&mut self, patch: WaypointPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(depth) = patch.depth {
            self.depth = depth;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
    }
}

/// A partial position update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaypointPatch {
    pub x: Option<f32>,
    pub depth: Option<f32>,
    pub z: Option<f32>,
}

impl WaypointPatch {
    pub fn planar(position: Vec2) -> Self {
        Self { x: Some(position.x), depth: None, z: Some(position.y) }
    }

    pub fn depth(depth: f32) -> Self {
        Self { depth: Some(depth), ..Default::default() }
    }
}

/// Insertion-ordered waypoints. Identity is the index.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    points: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a waypoint and return its index.
    pub fn append(&mut self, point: Waypoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Remove the most recently appended waypoint. No-op when empty.
    pub fn remove_last(&mut self) -> Option<Waypoint> {
        self.points.pop()
    }

    /// Patch the waypoint at `index`. Returns `false` for an invalid index.
    pub fn update_at(&mut self, index: usize, patch: WaypointPatch) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.apply(patch);
                true
            }
            None => false,
        }
    }

    /// First waypoint, in store order, whose planar distance to `query` is
    /// below `radius`.
    ///
    /// Earlier-placed points win over closer later ones.
    pub fn nearest(&self, query: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.planar().distance(query) < radius)
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.points
    }
}
