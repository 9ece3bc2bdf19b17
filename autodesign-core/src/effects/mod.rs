/// Alpha-masked pasting of one RGBA8 image onto another.
pub mod composite;
