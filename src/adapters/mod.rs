// Adapters layer: concrete implementations for external systems.

pub mod plotters_canvas;

pub use plotters_canvas::PlottersWriter;
