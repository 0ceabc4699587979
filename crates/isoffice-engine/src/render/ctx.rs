use crate::coords::Viewport;

/// What a renderer needs from the GPU layer for one frame.
///
/// Geometry is in logical pixels; `viewport` is the logical surface size the
/// vertex shader maps to clip space.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

/// Encoder and colour attachment of the frame being drawn.
///
/// Renderers open their own passes with `LoadOp::Load`; the frame is cleared
/// before they run.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
