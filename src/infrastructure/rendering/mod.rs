pub mod canvas_surface;
pub mod chart_renderer;
pub mod legend;
pub mod surface;

pub use canvas_surface::CanvasSurface;
pub use chart_renderer::ChartRenderer;
pub use legend::{Legend, MaLegendEntry};
pub use surface::{DrawCommand, DrawList, RenderSurface, StrokeStyle, TextStyle};
