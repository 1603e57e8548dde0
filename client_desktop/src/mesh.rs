//! Mesh generation for Pong
//!
//! Unit meshes centred on the origin; instances scale and place them.

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Unit square, spanning -0.5..0.5
pub fn rectangle_geometry() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [-0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, 0.5, 0.0],
        },
        Vertex {
            position: [-0.5, 0.5, 0.0],
        },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Triangle fan approximating a circle of diameter 1
pub fn circle_geometry(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let segments = segments.max(3);
    let mut vertices = vec![Vertex {
        position: [0.0, 0.0, 0.0],
    }];
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [0.5 * angle.cos(), 0.5 * angle.sin(), 0.0],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        indices.push(0);
        indices.push(1 + i);
        indices.push(1 + (i + 1) % segments);
    }
    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

pub fn create_rectangle(device: &Device) -> Mesh {
    let (vertices, indices) = rectangle_geometry();
    Mesh::new(device, "Rectangle", &vertices, &indices)
}

pub fn create_circle(device: &Device, segments: u16) -> Mesh {
    let (vertices, indices) = circle_geometry(segments);
    Mesh::new(device, "Circle", &vertices, &indices)
}
