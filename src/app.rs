use nannou::prelude::*;
use nannou::rand::rngs::StdRng;
use nannou::rand::SeedableRng;
use once_cell::sync::OnceCell;

use crate::config::{Config, WindowConfig};
use crate::error::InitError;
use crate::pointer::Pointer;
use crate::replay::replay;
use crate::scheduler::{FrameScheduler, Scene};
use crate::surface::DisplayList;
use crate::viewport::Viewport;

/// nannou's model callback is a plain `fn`, so the loaded config is handed
/// over through here.
static CONFIG: OnceCell<Config> = OnceCell::new();

/// How often frame statistics are logged at debug level.
const STATS_EVERY: u64 = 600;

/// Open the window and animate until it is closed.
pub fn run(config: Config) -> Result<(), InitError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| InitError::InvalidConfig("animation already started".to_string()))?;
    nannou::app(model).update(update).run();
    Ok(())
}

struct Model {
    viewport: Viewport,
    pointer: Pointer,
    scene: Scene,
    scheduler: FrameScheduler,
    frame: DisplayList,
    background: [f32; 3],
}

fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();
    app.set_loop_mode(LoopMode::RefreshSync);

    // Without a surface there is nothing to animate.
    let viewport = match open_window(app, &config.window) {
        Ok(viewport) => viewport,
        Err(e) => {
            tracing::error!(error = %e, "startup aborted");
            std::process::exit(1);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = Scene::spawn(&mut rng, &viewport, config.scene_params());
    let params = *scene.params();
    tracing::info!(
        points = scene.points().len(),
        strategy = ?params.link_strategy,
        link_distance = params.link_distance,
        width = viewport.width(),
        height = viewport.height(),
        scale_factor = viewport.scale_factor(),
        "scene ready"
    );

    let mut scheduler = FrameScheduler::new();
    scheduler.start();

    Model {
        viewport,
        pointer: Pointer::default(),
        scene,
        scheduler,
        frame: DisplayList::with_capacity(params.point_count * 4),
        background: config.window.background,
    }
}

fn open_window(app: &App, config: &WindowConfig) -> Result<Viewport, InitError> {
    let mut builder = app
        .new_window()
        .title(config.title.clone())
        .size(config.width, config.height)
        .view(view)
        .resized(resized)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited);
    if config.fullscreen {
        builder = builder.fullscreen();
    }
    let id = builder
        .build()
        .map_err(|e| InitError::WindowCreation(e.to_string()))?;

    let window = app
        .window(id)
        .ok_or_else(|| InitError::WindowCreation("window closed during startup".to_string()))?;
    let rect = window.rect();
    Ok(Viewport::new(rect.w(), rect.h(), window.scale_factor()))
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.frame.reset();
    let stats = model.scheduler.cycle(
        &mut model.scene,
        &model.pointer,
        &model.viewport,
        &mut model.frame,
    );
    if let Some(stats) = stats {
        if stats.frame % STATS_EVERY == 0 {
            tracing::debug!(
                frame = stats.frame,
                fps = app.fps(),
                links = stats.links,
                commands = model.frame.len(),
                "frame stats"
            );
        }
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    replay(&draw, &model.frame, &model.viewport, model.background);
    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!(error = ?e, "failed to render frame");
    }
}

fn resized(app: &App, model: &mut Model, size: Vec2) {
    let scale_factor = app.main_window().scale_factor();
    let (pw, ph) = model.viewport.resize(size.x, size.y, scale_factor);
    tracing::debug!(
        width = size.x,
        height = size.y,
        physical_width = pw,
        physical_height = ph,
        "viewport resized"
    );
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    model.pointer.moved_to(model.viewport.from_window(position));
}

fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer.left();
}
