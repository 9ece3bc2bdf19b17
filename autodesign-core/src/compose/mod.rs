/// Poster + frame + template compositing.
pub mod compositor;
