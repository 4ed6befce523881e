use crate::camera::Camera;
use crate::renderer::SceneRenderer;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

/// Wrapper around winit Window with a one-call draw API.
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw one frame of the retained scene.
    pub fn draw(
        &self,
        renderer: &mut SceneRenderer,
        camera: &Camera,
        fps: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        renderer.render(camera, &self.inner, fps)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
