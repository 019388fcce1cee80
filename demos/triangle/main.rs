use sdl2_gl_shader::sdl2::event::Event;
use sdl2_gl_shader::sdl2::video::GLProfile;
use sdl2_gl_shader::{gl, sdl2};
use std::time::Instant;

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;
mod triangle;

fn main() {
    env_logger::init();

    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();

    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);

    // OpenGL 3.2 is the minimum that we will support.
    gl_attr.set_context_version(3, 2);

    let window = video_subsystem
        .window("Demo: shader program with SDL2 + GL", SCREEN_WIDTH, SCREEN_HEIGHT)
        .opengl()
        .build()
        .unwrap();

    // Create a window context
    let _ctx = window.gl_create_context().unwrap();
    sdl2_gl_shader::load_gl(&video_subsystem);

    debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
    debug_assert_eq!(gl_attr.context_version(), (3, 2));

    let mut event_pump = sdl_context.event_pump().unwrap();

    let mut triangle = match triangle::Triangle::new() {
        Ok(triangle) => triangle,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };
    let start_time = Instant::now();

    'running: loop {
        unsafe {
            // Clear the screen to green
            gl::ClearColor(0.3, 0.6, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
        triangle.draw(start_time.elapsed().as_secs_f32());

        window.gl_swap_window();

        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }
        std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}
