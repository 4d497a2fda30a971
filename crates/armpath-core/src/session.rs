use crate::calibration::{AxisRange, Calibration, HitRadii, SurfaceSize};
use crate::config::AuthoringConfig;
use crate::interaction::{InputEvent, InteractionController, Outcome};
use crate::launch::{plan_launch, ServoFrame};
use crate::mapper::{map_waypoint, ServoAngles};
use crate::render::{LoopHandle, RenderLoop};
use crate::waypoint::WaypointStore;

/// All state of one authoring session.
///
/// Input handlers and the render loop borrow this; nothing lives at
/// process scope. [`Session::dispose`] stops any render loop bound to it.
pub struct Session {
    config: AuthoringConfig,
    surface: SurfaceSize,
    calibration: Calibration,
    radii: HitRadii,
    store: WaypointStore,
    controller: InteractionController,
    render: LoopHandle,
}

impl Session {
    pub fn create(width: f32, height: f32, config: AuthoringConfig) -> Self {
        let surface = SurfaceSize::new(width, height);
        let depth_range = AxisRange::new(config.depth_min, config.depth_max);
        let controller = InteractionController::new(depth_range, config.initial_depth);

        log::info!("Authoring session created for {}x{} surface", surface.width, surface.height);

        Self {
            calibration: Calibration::for_surface(surface, &config),
            radii: HitRadii::for_surface(surface, &config),
            surface,
            store: WaypointStore::new(),
            controller,
            render: LoopHandle::new(),
            config,
        }
    }

    /// End the session, stopping its render loop. Returns the final store.
    pub fn dispose(self) -> WaypointStore {
        self.render.stop();
        log::info!("Authoring session disposed with {} waypoint(s)", self.store.len());
        self.store
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                Outcome::Resized
            }
            other => self.controller.handle(other, &mut self.store, &self.radii),
        }
    }

    /// Recompute calibration and radii. Stored positions and selection are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        let surface = SurfaceSize::new(width, height);
        if surface == self.surface {
            return;
        }
        self.surface = surface;
        self.calibration = Calibration::for_surface(surface, &self.config);
        self.radii = HitRadii::for_surface(surface, &self.config);
        log::debug!("Surface resized to {}x{}", surface.width, surface.height);
    }

    /// Map the whole store, in order, into frames for publishing.
    pub fn launch(&self) -> Vec<ServoFrame> {
        let frames = plan_launch(&self.store, &self.calibration, &self.config.limits, self.config.claw);
        log::info!("Launching {} waypoint(s)", frames.len());
        frames
    }

    pub fn angles_at(&self, index: usize) -> Option<ServoAngles> {
        self.store
            .get(index)
            .map(|p| map_waypoint(p, &self.calibration, &self.config.limits))
    }

    /// A render loop that stops when this session is disposed.
    pub fn render_loop(&self) -> RenderLoop {
        RenderLoop::new(self.config.animation_speed, self.render.clone())
    }

    pub fn store(&self) -> &WaypointStore {
        &self.store
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn slider_value(&self) -> f32 {
        self.controller.slider_value()
    }

    pub fn depth_range(&self) -> AxisRange {
        self.calibration.depth
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn radii(&self) -> &HitRadii {
        &self.radii
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn config(&self) -> &AuthoringConfig {
        &self.config
    }
}
