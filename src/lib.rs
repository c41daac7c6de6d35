pub mod cards;
pub mod charts;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod fetch;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod stats;
pub mod text;
pub mod theme;

pub use cards::{CardId, CardSpec, RenderContext, VariantLayout, compute_scene, language_cap};
pub use config::{Config, LayoutVariant, load_config};
pub use render::render_svg;
pub use stats::{LanguageShare, ProfileStats, summarize_languages};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
