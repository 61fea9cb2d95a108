//! Native egui front-end for the scatter plot.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`scatter_app`]  | [`ScatterApp`] (eframe) wrapper: toolbar, plot surface, input routing |
//! | [`paint`]        | Painting a [`Scene`](crate::scene::Scene) and the tooltip with an egui painter |
//! | [`run`]          | Top-level [`run_scatter()`] entry point |

mod paint;
mod run;
mod scatter_app;

pub use run::run_scatter;
pub use scatter_app::ScatterApp;
