pub mod animation;
pub mod assets;
pub mod camera;
pub mod core;
pub mod host;
pub mod loading;
pub mod model;
pub mod scene;
pub mod viewport;

#[cfg(test)]
pub mod test_support;
