use std::sync::Arc;
use wgpu::{BindGroup, BindGroupLayout, CommandEncoder, Device, Surface, SurfaceConfiguration, Texture, TextureView};

use super::gpu_context::GpuContext;
use super::render_pipeline::LayerOutput;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Texture holding the latest CPU frame plus the bind group that samples it
struct Backdrop {
    texture: Texture,
    bind_group: BindGroup,
    width: u32,
    height: u32,
}

impl Backdrop {
    /// Frame bytes are already sRGB encoded, so the texture is sampled as sRGB
    fn new(device: &Device, layout: &BindGroupLayout, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Backdrop Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&Default::default());
        // Default sampler: clamp to edge, nearest filtering; the frame matches the surface 1:1
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Backdrop Sampler"),
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Backdrop Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            bind_group,
            width,
            height,
        }
    }

    fn upload(&self, queue: &wgpu::Queue, output: &LayerOutput) -> Result<()> {
        if (output.width, output.height) != (self.width, self.height) {
            return Err(format!(
                "Frame {}x{} doesn't match surface {}x{}",
                output.width, output.height, self.width, self.height
            )
            .into());
        }

        let expected = self.width as usize * self.height as usize * 4;
        if output.pixels.len() != expected {
            return Err(format!(
                "Invalid pixel buffer size: expected {} bytes, got {}",
                expected,
                output.pixels.len()
            )
            .into());
        }

        queue.write_texture(
            self.texture.as_image_copy(),
            &output.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            self.texture.size(),
        );
        Ok(())
    }
}

/// Presents CPU-rendered frames on a window surface
///
/// Each frame the pixel buffer is uploaded to a texture and drawn with a
/// fullscreen triangle; callers can then record extra passes (the UI) on top
/// before the frame is submitted.
pub struct SurfaceRenderer {
    gpu: Arc<GpuContext>,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    layout: BindGroupLayout,
    backdrop: Backdrop,
}

impl SurfaceRenderer {
    pub fn new(gpu: Arc<GpuContext>, surface: Surface<'static>, width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));

        let caps = surface.get_capabilities(gpu.adapter());
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            // Vsync: the page animates at display rate, not faster
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        let layout = Self::backdrop_layout(gpu.device());
        let pipeline = Self::backdrop_pipeline(gpu.device(), &layout, format);
        let backdrop = Backdrop::new(gpu.device(), &layout, width, height);

        Self {
            gpu,
            surface,
            config,
            pipeline,
            layout,
            backdrop,
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Upload `output`, draw it, let `overlay` record its passes, then present
    pub fn render<F>(&mut self, output: &LayerOutput, overlay: F) -> Result<()>
    where
        F: FnOnce(&GpuContext, &mut CommandEncoder, &TextureView),
    {
        self.backdrop.upload(self.gpu.queue(), output)?;

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame; the next one uses the reconfigured surface
                log::debug!("surface lost, reconfiguring");
                self.surface.configure(self.gpu.device(), &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame.texture.create_view(&Default::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.draw_backdrop(&mut encoder, &view);
        overlay(&*self.gpu, &mut encoder, &view);

        self.gpu.queue().submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn draw_backdrop(&self, encoder: &mut CommandEncoder, view: &TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Backdrop Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.backdrop.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    /// Resize the surface and frame texture; zero sizes (minimized) are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(self.gpu.device(), &self.config);
        self.backdrop = Backdrop::new(self.gpu.device(), &self.layout, width, height);
        log::debug!("surface resized to {}x{}", width, height);
    }

    fn backdrop_layout(device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Backdrop Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    fn backdrop_pipeline(
        device: &Device,
        layout: &BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../display.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Backdrop Pipeline Layout"),
            bind_group_layouts: &[layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Backdrop Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: Default::default(),
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        })
    }
}
