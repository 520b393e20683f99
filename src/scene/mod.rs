//! The meshes shown by the viewer.
//!
//! Geometry buffers live with the host renderer; a [`Mesh`] only says which
//! [`Shape`] to draw and where.

mod mesh;

pub use mesh::{Mesh, Shape};

/// Ordered list of meshes drawn every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    /// An empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two cubes and two spheres around the origin.
    #[must_use]
    pub fn default_scene() -> Self {
        let mut scene = Self::new();
        scene.push(
            Mesh::new(Shape::Cube)
                .with_position(0.5, 0.5, -1.0)
                .with_color(0.5, 0.1, 0.1)
                .with_scale(3.0, 2.0, 1.0),
        );
        scene.push(
            Mesh::new(Shape::Cube)
                .with_position(-3.0, 2.0, 0.0)
                .with_color(0.5, 0.5, 0.1)
                .with_scale(1.0, 1.0, 3.0),
        );
        scene.push(
            Mesh::new(Shape::Sphere)
                .with_position(0.0, -3.0, 0.0)
                .with_color(0.1, 0.5, 0.1)
                .with_scale(2.0, 2.0, 2.0),
        );
        scene.push(
            Mesh::new(Shape::Sphere)
                .with_position(1.0, 2.0, 3.0)
                .with_color(0.1, 0.1, 0.5)
                .with_scale(1.0, 1.5, 1.5),
        );
        scene
    }

    /// Append a mesh; it is drawn after the existing ones.
    pub fn push(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// All meshes in draw order.
    #[must_use]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Number of meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the scene has no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn default_scene_has_two_cubes_and_two_spheres() {
        let scene = Scene::default_scene();
        assert_eq!(scene.len(), 4);
        let cubes = scene
            .meshes()
            .iter()
            .filter(|m| m.shape == Shape::Cube)
            .count();
        assert_eq!(cubes, 2);
        assert_eq!(scene.meshes()[0].color, Vec3::new(0.5, 0.1, 0.1));
        assert_eq!(scene.meshes()[3].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn new_scene_is_empty() {
        assert!(Scene::new().is_empty());
    }
}
