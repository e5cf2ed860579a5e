//! Rendering system with wgpu pipeline and shader management.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::actor::ActorState;
use crate::params::{RenderConfig, SceneParams};
use crate::water::{Vertex, WaterField};

/// Uniform buffer layout shared by both pipelines (orthographic projection
/// plus fill color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Rendering system managing wgpu device, pipelines, and buffers
pub struct RenderSystem {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    water_pipeline: wgpu::RenderPipeline,
    actor_pipeline: wgpu::RenderPipeline,
    water_vertex_buffer: wgpu::Buffer,
    water_index_buffer: wgpu::Buffer,
    water_index_count: u32,
    actor_vertex_buffer: wgpu::Buffer,
    actor_index_buffer: wgpu::Buffer,
    water_bind_group: wgpu::BindGroup,
    actor_bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(
        window: std::sync::Arc<winit::window::Window>,
        water: &WaterField,
        scene: &SceneParams,
        render_config: &RenderConfig,
    ) -> Result<Self, String> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance
            .create_surface(window)
            .map_err(|e| format!("Failed to create surface: {}", e))?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or("Failed to find suitable GPU adapter")?;

        // Request device
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to request device: {}", e))?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Load shaders
        let water_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Water Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("surface.wgsl").into()),
        });

        let actor_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Actor Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("actor.wgsl").into()),
        });

        // Scene coordinates map directly to the window through a fixed
        // orthographic projection, origin at the bottom-left
        let view_proj =
            Mat4::orthographic_rh(0.0, scene.width, 0.0, scene.height, -1.0, 1.0).to_cols_array_2d();

        let water_uniforms = Uniforms {
            view_proj,
            color: render_config.water_color,
        };
        let actor_uniforms = Uniforms {
            view_proj,
            color: render_config.actor_color,
        };

        let water_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Uniform Buffer"),
            contents: bytemuck::cast_slice(&[water_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let actor_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Actor Uniform Buffer"),
            contents: bytemuck::cast_slice(&[actor_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Both pipelines share one bind group layout shape
        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let water_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Water Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: water_uniform_buffer.as_entire_binding(),
            }],
        });

        let actor_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Actor Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: actor_uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        };

        // Water blends over the scene; the actor is opaque
        let water_pipeline = create_pipeline(
            &device,
            "Water Render Pipeline",
            &water_shader,
            &pipeline_layout,
            vertex_layout.clone(),
            config.format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );
        let actor_pipeline = create_pipeline(
            &device,
            "Actor Render Pipeline",
            &actor_shader,
            &pipeline_layout,
            vertex_layout,
            config.format,
            None,
        );

        // Create buffers
        let water_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Vertex Buffer"),
            contents: bytemuck::cast_slice(&water.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let water_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Index Buffer"),
            contents: bytemuck::cast_slice(&water.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let actor_vertices = [Vertex {
            position: [0.0, 0.0],
            shade: 1.0,
        }; 4];
        let actor_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Actor Vertex Buffer"),
            contents: bytemuck::cast_slice(&actor_vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let actor_indices: [u32; 6] = [0, 1, 2, 2, 1, 3];
        let actor_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Actor Index Buffer"),
            contents: bytemuck::cast_slice(&actor_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let [r, g, b] = render_config.clear_color;
        let clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };

        Ok(Self {
            surface,
            device,
            queue,
            water_pipeline,
            actor_pipeline,
            water_vertex_buffer,
            water_index_buffer,
            water_index_count: water.indices.len() as u32,
            actor_vertex_buffer,
            actor_index_buffer,
            water_bind_group,
            actor_bind_group,
            clear_color,
        })
    }

    /// Update water vertex buffer with new mesh data
    pub fn update_water_vertices(&self, vertices: &[Vertex]) {
        self.queue
            .write_buffer(&self.water_vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    /// Update the actor quad from its current position
    pub fn update_actor(&self, actor: &ActorState) {
        let h = actor.half_size;
        let p = actor.position;
        let corners = [
            Vertex {
                position: [p.x - h, p.y + h],
                shade: 1.0,
            },
            Vertex {
                position: [p.x - h, p.y - h],
                shade: 1.0,
            },
            Vertex {
                position: [p.x + h, p.y + h],
                shade: 1.0,
            },
            Vertex {
                position: [p.x + h, p.y - h],
                shade: 1.0,
            },
        ];
        self.queue
            .write_buffer(&self.actor_vertex_buffer, 0, bytemuck::cast_slice(&corners));
    }

    /// Render a frame
    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Actor first so the translucent water tints it when submerged
            render_pass.set_pipeline(&self.actor_pipeline);
            render_pass.set_bind_group(0, &self.actor_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.actor_vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(self.actor_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..6, 0, 0..1);

            // Water fill over the scene
            render_pass.set_pipeline(&self.water_pipeline);
            render_pass.set_bind_group(0, &self.water_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.water_vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(self.water_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.water_index_count, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    vertex_layout: wgpu::VertexBufferLayout,
    format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
