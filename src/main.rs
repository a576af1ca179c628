// src/main.rs

pub mod app;
pub mod demos;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::{AppError, DemoApp};
use fractal_demos::config::{ConfigError, DemoConfig};

/// First CLI argument is an optional TOML config path.
fn load_config() -> Result<DemoConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => DemoConfig::load_from_file(path),
        None => Ok(DemoConfig::default()),
    }
}

/// `RUST_LOG` wins over the configured filter, which wins over `info`.
fn init_logging(config: &DemoConfig) {
    let mut builder = env_logger::Builder::new();
    match (std::env::var("RUST_LOG"), &config.log_filter) {
        (Ok(filter), _) => {
            builder.parse_filters(&filter);
        }
        (Err(_), Some(filter)) => {
            builder.parse_filters(filter);
        }
        (Err(_), None) => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.init();
}

pub async fn run(config: DemoConfig) -> Result<(), AppError> {
    let demo = demos::create_demo(&config)?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(config.window.width, config.window.height))
            .build(&event_loop)?,
    );

    let mut app_state = DemoApp::new(window.clone(), demo).await?;
    let mut last_time = std::time::Instant::now();
    info!("running '{}'", config.window_title());

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                        _ => {}
                    }
                }
                if app_state.should_close() {
                    target.exit();
                }
            }
            Event::AboutToWait => {
                let now = std::time::Instant::now();
                let dt = (now - last_time).as_secs_f32();
                last_time = now;

                app_state.update(dt);
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => error!("surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("could not load configuration: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config);

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
