use game_core::{Aabb, Color};
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_aabb(aabb: &Aabb, tint: Color) -> Self {
        let center = aabb.center();
        Self {
            transform: [center.x, center.y, aabb.width(), aabb.height()],
            tint,
        }
    }
}

/// Per-frame instance storage that grows to fit but never shrinks
pub struct InstanceBuffer {
    pub buffer: Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    const INITIAL_CAPACITY: usize = 256;

    pub fn new(device: &Device) -> Self {
        Self {
            buffer: Self::allocate(device, Self::INITIAL_CAPACITY),
            capacity: Self::INITIAL_CAPACITY,
        }
    }

    fn allocate(device: &Device, capacity: usize) -> Buffer {
        device.create_buffer(&BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn upload(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            log::debug!("Growing instance buffer to {}", self.capacity);
            self.buffer = Self::allocate(device, self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: InstanceBuffer::new(device),
    }
}
