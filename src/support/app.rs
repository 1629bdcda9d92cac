use crate::opengl::{context, OpenGlContext, Renderer};
use log::error;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

pub trait App {
    fn initialize(&mut self, _: &mut Renderer) {}
    fn update(&mut self, _: &mut Renderer, _: f64) {}
    fn draw(&mut self, _: &mut Renderer) {}
    fn handle_resize(&mut self, _: u32, _: u32) {}
    fn handle_key_pressed(&mut self, _: VirtualKeyCode, _: ElementState) {}
}

pub fn setup_app(title: &str) -> Result<(EventLoop<()>, Renderer), context::Error> {
    let (width, height) = (800, 600);

    let event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(width, height));

    let context = Arc::new(OpenGlContext::new(window_builder, &event_loop)?);

    Ok((event_loop, Renderer::new(context)))
}

pub fn run_app<T: 'static>(mut app: T, event_loop: EventLoop<()>, mut renderer: Renderer)
where
    T: App,
{
    app.initialize(&mut renderer);

    let mut last_frame = Instant::now();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::NewEvents { .. } => {
                let delta_time =
                    (Instant::now().duration_since(last_frame).as_micros() as f64) / 1_000_000_f64;
                last_frame = Instant::now();
                app.update(&mut renderer, delta_time);
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            virtual_keycode: Some(keycode),
                            state,
                            ..
                        },
                    ..
                } => {
                    if keycode == VirtualKeyCode::Escape {
                        *control_flow = ControlFlow::Exit;
                    }

                    app.handle_key_pressed(keycode, state);
                }
                WindowEvent::Resized(PhysicalSize { width, height }) => {
                    renderer.handle_resize(width, height);
                    app.handle_resize(width, height);
                }
                _ => {}
            },
            Event::MainEventsCleared => renderer.context.window().request_redraw(),
            Event::RedrawRequested(_) => {
                app.draw(&mut renderer);
                if let Err(error) = renderer.present() {
                    error!("Failed to present the frame: {}", error);
                }
            }
            _ => {}
        }
    });
}
