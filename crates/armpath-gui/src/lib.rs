pub mod app;
pub mod backdrop;
pub mod canvas;
pub mod marker;
pub mod paint;
pub mod sidebar;
pub mod theme;

pub use app::{AppOptions, AuthoringApp};
pub use backdrop::{Backdrop, CameraFeed, StillImageFeed};
pub use canvas::{PointerSample, SurfaceTransform};
pub use marker::MarkerSprite;
