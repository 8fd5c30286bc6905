use std::sync::Arc;

use anyhow::Context;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::light::PointLight;
use crate::mesh::{self, CubeVertex, CUBE_VERTICES};
use crate::types::{ModelUniform, SceneUniform};

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Forward renderer for the demo scene: one lit cube and a lamp marker
/// sharing a single cube vertex buffer.
pub struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    depth_view: wgpu::TextureView,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    cube_model_buffer: wgpu::Buffer,
    cube_bind_group: wgpu::BindGroup,
    lamp_model_buffer: wgpu::Buffer,
    lamp_bind_group: wgpu::BindGroup,
    lit_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    light: PointLight,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, no_vsync: bool) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(&surface, &adapter, size, no_vsync);
        surface.configure(&device, &config);

        let depth_view = Self::create_depth_view(&device, size);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let light = PointLight::new();

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::cast_slice(&[SceneUniform::new(
                Mat4::IDENTITY,
                Mat4::IDENTITY,
                light.position_at(0.0),
                light.color,
                Vec3::ZERO,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let cube_model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Model Buffer"),
            contents: bytemuck::cast_slice(&[ModelUniform::new(cube_model_matrix())]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let lamp_model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lamp Model Buffer"),
            contents: bytemuck::cast_slice(&[ModelUniform::new(lamp_model_matrix(
                light.position_at(0.0),
            ))]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_layout = Self::create_uniform_layout(&device, "scene_bind_group_layout");
        let model_layout = Self::create_uniform_layout(&device, "model_bind_group_layout");

        let scene_bind_group =
            Self::create_uniform_bind_group(&device, &scene_layout, &scene_buffer, "scene");
        let cube_bind_group =
            Self::create_uniform_bind_group(&device, &model_layout, &cube_model_buffer, "cube");
        let lamp_bind_group =
            Self::create_uniform_bind_group(&device, &model_layout, &lamp_model_buffer, "lamp");

        let lit_pipeline = Self::create_pipeline(
            &device,
            &scene_layout,
            &model_layout,
            config.format,
            include_str!("lit.wgsl"),
            "Lit Pipeline",
        );
        let lamp_pipeline = Self::create_pipeline(
            &device,
            &scene_layout,
            &model_layout,
            config.format,
            include_str!("lamp.wgsl"),
            "Lamp Pipeline",
        );

        log::info!(
            "renderer initialized: {}x{}, {} vertices",
            size.width,
            size.height,
            mesh::vertex_count()
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            size,
            depth_view,
            vertex_buffer,
            vertex_count: mesh::vertex_count(),
            scene_buffer,
            scene_bind_group,
            cube_model_buffer,
            cube_bind_group,
            lamp_model_buffer,
            lamp_bind_group,
            lit_pipeline,
            lamp_pipeline,
            light,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> anyhow::Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find appropriate adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> anyhow::Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("failed to acquire device")
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
        no_vsync: bool,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if no_vsync {
                wgpu::PresentMode::AutoNoVsync
            } else {
                wgpu::PresentMode::AutoVsync
            },
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_depth_view(
        device: &wgpu::Device,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            label: Some(label),
        })
    }

    fn create_uniform_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(label),
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        scene_layout: &wgpu::BindGroupLayout,
        model_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        label: &str,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[scene_layout, model_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[CubeVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, new_size);
    }

    /// Reconfigure the surface at the current size, e.g. after `Lost`.
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    /// Draw one frame: the lit cube and the lamp marker at its orbit
    /// position for `time` seconds since startup.
    pub fn render(&mut self, camera: &Camera, time: f32) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.size.width.max(1) as f32 / self.size.height.max(1) as f32;
        let projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
        let light_position = self.light.position_at(time);

        let scene = SceneUniform::new(
            camera.view_matrix(),
            projection,
            light_position,
            self.light.color,
            camera.position(),
        );
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[scene]));

        let cube = ModelUniform::new(cube_model_matrix());
        self.queue
            .write_buffer(&self.cube_model_buffer, 0, bytemuck::cast_slice(&[cube]));

        let lamp = ModelUniform::new(lamp_model_matrix(light_position));
        self.queue
            .write_buffer(&self.lamp_model_buffer, 0, bytemuck::cast_slice(&[lamp]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

            render_pass.set_pipeline(&self.lit_pipeline);
            render_pass.set_bind_group(1, &self.cube_bind_group, &[]);
            render_pass.draw(0..self.vertex_count, 0..1);

            render_pass.set_pipeline(&self.lamp_pipeline);
            render_pass.set_bind_group(1, &self.lamp_bind_group, &[]);
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

/// Model transform for the lit cube: offset into the scene, turned an eighth
/// of a revolution, scaled down.
pub fn cube_model_matrix() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, 1.0))
        * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4)
        * Mat4::from_scale(Vec3::splat(0.4))
}

/// Model transform for the lamp marker at the light's orbit position.
pub fn lamp_model_matrix(light_position: Vec3) -> Mat4 {
    Mat4::from_translation(light_position) * Mat4::from_scale(Vec3::splat(0.2))
}
