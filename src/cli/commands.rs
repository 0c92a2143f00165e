pub mod regions;
pub mod render;
pub mod serve;

pub use regions::list_regions;
pub use render::render_page;
pub use serve::serve;
