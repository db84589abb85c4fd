//! Rendering-Typen: Vertex-Layouts, Uniforms und Frame-Kontext.

use crate::core::Camera3D;
use crate::shared::ViewerOptions;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a wgpu::Queue,
    /// Kamera des Frames
    pub camera: &'a Camera3D,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Viewer-Optionen (Farben, Größen)
    pub options: &'a ViewerOptions,
}

impl RenderContext<'_> {
    /// Prüft ob der Viewport eine zeichenbare Fläche hat.
    pub fn has_valid_viewport(&self) -> bool {
        let [w, h] = self.viewport_size;
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }

    /// Uniforms für diesen Frame.
    pub fn uniforms(&self) -> Uniforms {
        let view_proj = self
            .camera
            .view_projection(glam::Vec2::from(self.viewport_size));
        Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Vertex mit Position im 3D-Raum und RGBA-Farbe.
///
/// Wird von allen drei Pipelines genutzt (Flächen, Kugeln, Linien).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in Weltkoordinaten
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl ColorVertex {
    /// Erstellt einen neuen Vertex.
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
}
