pub mod directory;
pub mod relay;
