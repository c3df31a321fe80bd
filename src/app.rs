//! Window, context and frame loop shared by the tutorial binaries.
//!
//! A binary describes its scene through a builder closure returning a
//! [`Demo`]; [`run`] owns everything else.

use std::time::Duration;

use glam::{Mat4, Vec3};
use raw_gl_context::{GlConfig, GlContext, Profile};
use specs::{Builder, Join, World, WorldExt};
use winit::{
    dpi::LogicalSize,
    event::{DeviceEvent, ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{
    camera::{FreeCamera, FreeCameraSystem},
    input::{InputState, KeyBindings},
    logger,
    opengl::{self, shader::Program, Texture2D},
    render::{texture::Image, view_projection, Projector},
    scene::ShaderSource,
    settings::Settings,
    time::{DeltaTime, FrameClock, Stopwatch, Uptime},
    world::{Orbit, OrbitSystem, Spin, SpinSystem, Transform, TransformMatrixSystem},
    Error, Result,
};

/// A scene owning its GL objects. Dropped before the context on exit.
pub trait Demo {
    /// Draws one frame. The world's systems have already run for it.
    fn render(&mut self, world: &World) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// The camera keeps its initial pose and input is ignored.
    Fixed,
    /// Held keys and mouse motion drive the camera. Grabs the cursor.
    Free,
}

#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    pub title: &'static str,
    pub camera: CameraMode,
}

/// Opens the window, builds the demo and runs the frame loop until the window
/// closes or a frame fails.
pub fn run<D, F>(config: DemoConfig, build: F) -> anyhow::Result<()>
where
    D: Demo + 'static,
    F: FnOnce(&mut World, &Settings) -> Result<D>,
{
    let settings = Settings::discover()?;
    logger::init(logger::parse_level(&settings.log_level));
    info!("Starting '{}'.", config.title);

    let (event_loop, window, gl_context) = configure_environment(config.title, &settings)?;
    let mut world = configure_world(&settings, &window)?;
    for (key, control) in world.read_resource::<KeyBindings>().iter() {
        debug!("Key {} holds {:?}.", key, control);
    }

    let mut dispatcher = specs::DispatcherBuilder::new()
        .with(SpinSystem, "spin", &[])
        .with(OrbitSystem, "orbit", &[])
        .with(FreeCameraSystem, "free_camera", &[])
        .with(TransformMatrixSystem, "transform", &["spin", "orbit"])
        .build();
    dispatcher.setup(&mut world);

    let free_camera = config.camera == CameraMode::Free;
    if free_camera {
        grab_cursor(&window);
    }

    let mut demo = Some(build(&mut world, &settings)?);
    info!("Scene ready.");

    let mut clock = FrameClock::new();
    let mut title_timer = Stopwatch::start_new();
    let mut frames = 0u32;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,

                WindowEvent::Resized(size) => {
                    unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };
                    world
                        .write_resource::<Projector>()
                        .set_aspect_ratio(size.width as f32 / size.height as f32);
                }

                WindowEvent::Focused(false) => world.write_resource::<InputState>().clear(),

                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(keycode),
                            ..
                        },
                    ..
                } => {
                    if keycode == VirtualKeyCode::Escape {
                        *control_flow = ControlFlow::Exit;
                    } else if free_camera {
                        let bindings = world.read_resource::<KeyBindings>();
                        let key = format!("{:?}", keycode);
                        let pressed = state == ElementState::Pressed;

                        let mut input = world.write_resource::<InputState>();
                        if !input.apply_key(&bindings, &key, pressed) {
                            trace!("Unbound key {}", key);
                        }
                    }
                }

                _ => {}
            },

            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } if free_camera => {
                world
                    .write_resource::<InputState>()
                    .accumulate_mouse(dx as f32, dy as f32);
            }

            Event::MainEventsCleared => {
                let (delta, uptime) = clock.tick();
                *world.write_resource::<DeltaTime>() = delta;
                *world.write_resource::<Uptime>() = uptime;

                dispatcher.dispatch(&world);
                world.maintain();

                if let Some(demo) = demo.as_mut() {
                    if let Err(e) = render_frame(demo, &world) {
                        error!("Frame failed: {}", e);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }

                gl_context.swap_buffers();

                frames += 1;
                if title_timer.elapsed() >= Duration::from_secs(1) {
                    let seconds = title_timer.restart().as_secs_f32();
                    let fps = frames as f32 / seconds;
                    window.set_title(&format!("{} ({:.0} FPS)", config.title, fps));
                    frames = 0;
                }
            }

            Event::LoopDestroyed => {
                // Release the demo's GL names while the context is still current.
                drop(demo.take());
                info!("Exiting '{}'.", config.title);
            }

            _ => {}
        }
    })
}

/// The first free camera's view-projection matrix and eye position. Falls
/// back to the default camera pose if the world has none.
pub fn camera_view(world: &World) -> (Mat4, Vec3) {
    let projector = world.read_resource::<Projector>();
    let cameras = world.read_storage::<FreeCamera>();
    let camera = (&cameras).join().next().cloned().unwrap_or_default();

    (view_projection(&projector, &camera), camera.position)
}

/// Compiles and links the named program, honouring `shader_dir` overrides.
pub fn load_program(settings: &Settings, name: &str) -> Result<Program> {
    let source = ShaderSource::resolve(name, settings.shader_dir.as_deref())?;
    let program = Program::from_source(&source)?;
    debug!(
        "Linked program '{}' with uniforms [{}].",
        name,
        program.uniform_names().collect::<Vec<_>>().join(", ")
    );

    Ok(program)
}

/// Uploads `file_name` from the configured texture directory, or the
/// generated stand-in when none is set.
pub fn load_texture(
    settings: &Settings,
    file_name: &str,
    procedural: impl FnOnce() -> Result<Image>,
) -> Result<Texture2D> {
    let image = Image::resolve(file_name, settings.texture_dir.as_deref(), procedural)?;
    Texture2D::from_image(&image)
}

fn render_frame(demo: &mut impl Demo, world: &World) -> Result<()> {
    demo.render(world)?;
    opengl::check_errors()?;

    Ok(())
}

fn configure_environment(
    title: &str,
    settings: &Settings,
) -> Result<(EventLoop<()>, Window, GlContext)> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(
            settings.window.width as f64,
            settings.window.height as f64,
        ))
        .build(&event_loop)
        .map_err(|e| Error::Window(e.to_string()))?;

    let gl_context = GlContext::create(
        &window,
        GlConfig {
            version: (3, 3),
            profile: Profile::Core,
            red_bits: 8,
            blue_bits: 8,
            green_bits: 8,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            samples: None,
            srgb: true,
            double_buffer: true,
            vsync: settings.window.vsync,
        },
    )
    .map_err(|e| Error::Window(format!("failed to create GL 3.3 context: {:?}", e)))?;
    gl_context.make_current();
    gl::load_with(|s| gl_context.get_proc_address(s) as *const _);

    unsafe {
        let version = gl::GetString(gl::VERSION);
        if version.is_null() {
            return Err(Error::Window("context reports no OpenGL version".to_owned()));
        }

        let version = std::ffi::CStr::from_ptr(version as *const _);
        info!("OpenGL version string: {:?}", version);

        gl::Enable(gl::DEPTH_TEST);
    }

    Ok((event_loop, window, gl_context))
}

fn configure_world(settings: &Settings, window: &Window) -> Result<World> {
    let size = window.inner_size();
    let aspect_ratio = size.width as f32 / size.height.max(1) as f32;

    let mut world = World::new();

    world.register::<FreeCamera>();
    world.register::<Transform>();
    world.register::<Spin>();
    world.register::<Orbit>();

    world.insert(DeltaTime::default());
    world.insert(Uptime::default());
    world.insert(InputState::default());
    world.insert(settings.key_bindings()?);
    world.insert(Projector::from_settings(&settings.projection, aspect_ratio)?);
    world.insert(settings.clone());

    world
        .create_entity()
        .with(FreeCamera::new(Vec3::new(0.0, 0.0, 3.0), settings.camera))
        .build();

    Ok(world)
}

fn grab_cursor(window: &Window) {
    if let Err(e) = window.set_cursor_grab(true) {
        warn!("Could not grab the cursor; mouse-look may drift out of the window: {}", e);
    }
    window.set_cursor_visible(false);
}
