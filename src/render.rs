use galaxy_core::{
    axes_vertices, Camera, PointCloud, PointCloudHost, SceneOptions, SceneUniforms, AXES_LENGTH,
    CLEAR_COLOR, POINT_QUAD,
};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

/// GPU storage for one installed galaxy: one instance per point.
pub struct PointsBuffer {
    instances: wgpu::Buffer,
    count: u32,
    size: f32,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the swapchain; WebGPU canvases are usually non-sRGB
    view_format: wgpu::TextureFormat,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    points_pipeline: wgpu::RenderPipeline,
    lines_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    axes_buffer: wgpu::Buffer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let fallback = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(fallback);
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(galaxy_core::SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            "points_pipeline",
            &layout,
            &shader,
            "vs_points",
            "fs_points",
            &[helpers::quad_layout(), helpers::instance_layout()],
            wgpu::PrimitiveTopology::TriangleList,
            view_format,
            Some(helpers::ADDITIVE),
        );
        let lines_pipeline = helpers::make_scene_pipeline(
            &device,
            "lines_pipeline",
            &layout,
            &shader,
            "vs_lines",
            "fs_lines",
            &[helpers::line_layout()],
            wgpu::PrimitiveTopology::LineList,
            view_format,
            None,
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_quad"),
            contents: bytemuck::cast_slice(&POINT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let axes_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("axes"),
            contents: bytemuck::cast_slice(&axes_vertices(AXES_LENGTH)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?}",
            width,
            height,
            format,
            view_format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            uniform_buffer,
            bind_group,
            points_pipeline,
            lines_pipeline,
            quad_buffer,
            axes_buffer,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        points: Option<&PointsBuffer>,
        camera: &Camera,
        options: &SceneOptions,
    ) -> Result<(), wgpu::SurfaceError> {
        let size = points.map(|p| p.size).unwrap_or(0.0);
        let uniforms = SceneUniforms::new(camera, size, self.height);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
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
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if options.axes_visible {
                rpass.set_pipeline(&self.lines_pipeline);
                rpass.set_vertex_buffer(0, self.axes_buffer.slice(..));
                rpass.draw(0..6, 0..1);
            }
            if let Some(p) = points.filter(|p| p.count > 0) {
                rpass.set_pipeline(&self.points_pipeline);
                rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                rpass.set_vertex_buffer(1, p.instances.slice(..));
                rpass.draw(0..POINT_QUAD.len() as u32, 0..p.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl PointCloudHost for GpuState {
    type Handle = PointsBuffer;

    fn install(&mut self, cloud: &PointCloud, size: f32) -> PointsBuffer {
        let instances = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("galaxy_points"),
                contents: bytemuck::cast_slice(&cloud.to_vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            });
        PointsBuffer {
            instances,
            count: cloud.len() as u32,
            size,
        }
    }

    fn release(&mut self, handle: PointsBuffer) {
        handle.instances.destroy();
    }
}
