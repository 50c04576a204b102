// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod catalog;
pub mod fixtures;
pub mod gltf;
pub mod harness;
pub mod loader;
pub mod state;
pub mod style;

/// Subset of viewport types needed by the model pipeline (MeshData, Aabb).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
}
