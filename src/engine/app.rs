use crate::engine::{Camera2D, Game, GameConfig, InputManager, Renderer};
use crate::simulation::MAX_FRAME_DT;
use sokol::{app as sapp, gfx as sg, glue as sglue};
use std::ffi::{self, CString};

pub struct App<T: Game> {
    game: T,
    config: GameConfig,
}

// State structure that will be passed through sokol callbacks
struct AppState<T: Game> {
    game: T,
    config: GameConfig,
    pass_action: sg::PassAction,
    renderer: Renderer,
    input: InputManager,
    camera: Camera2D,
    title: String,
}

/// Clamps a raw frame duration so a stalled frame cannot destabilize the integrator.
pub fn clamp_frame_dt(raw: f64) -> f32 {
    (raw as f32).clamp(0.0, MAX_FRAME_DT)
}

impl<T: Game> App<T> {
    pub fn new(game: T) -> Self {
        let config = game.config();
        Self { game, config }
    }

    pub fn run(self) {
        let mut pass_action = sg::PassAction::new();
        pass_action.colors[0] = sg::ColorAttachmentAction {
            load_action: sg::LoadAction::Clear,
            clear_value: self.config.background_color,
            ..Default::default()
        };

        // interior NULs would make the title unrepresentable, fall back to a plain one
        let title = CString::new(self.config.window_title.clone())
            .unwrap_or_else(|_| CString::from(c"blackhole_sim"));

        let width = self.config.window_width;
        let height = self.config.window_height;
        let sample_count = self.config.sample_count;
        let high_dpi = self.config.high_dpi;

        let state = Box::new(AppState {
            game: self.game,
            title: self.config.window_title.clone(),
            config: self.config,
            pass_action,
            renderer: Renderer::new(),
            input: InputManager::new(),
            camera: Camera2D::new(),
        });

        let user_data = Box::into_raw(state) as *mut ffi::c_void;

        sapp::run(&sapp::Desc {
            init_userdata_cb: Some(init::<T>),
            frame_userdata_cb: Some(frame::<T>),
            cleanup_userdata_cb: Some(cleanup::<T>),
            event_userdata_cb: Some(event::<T>),
            user_data,
            window_title: title.as_ptr(),
            width,
            height,
            sample_count,
            high_dpi,
            swap_interval: 1, // vsync, roughly the 60 fps the scene is tuned for
            logger: sapp::Logger {
                func: Some(sokol::log::slog_func),
                ..Default::default()
            },
            icon: sapp::IconDesc {
                sokol_default: true,
                ..Default::default()
            },
            ..Default::default()
        });
    }
}

extern "C" fn init<T: Game>(user_data: *mut ffi::c_void) {
    let state = unsafe { &mut *(user_data as *mut AppState<T>) };

    sg::setup(&sg::Desc {
        environment: sglue::environment(),
        logger: sg::Logger {
            func: Some(sokol::log::slog_func),
            ..Default::default()
        },
        ..Default::default()
    });

    tracing::info!("Using {:?} backend", sg::query_backend());

    state.renderer.init();

    state
        .camera
        .set_viewport_size(sapp::width() as f32, sapp::height() as f32);
    state.camera.center_on_viewport();

    state.game.init(&state.config);

    if let Some(focus) = state.game.camera_focus() {
        state.camera.set_position(focus);
    }
}

extern "C" fn frame<T: Game>(user_data: *mut ffi::c_void) {
    let state = unsafe { &mut *(user_data as *mut AppState<T>) };
    let dt = clamp_frame_dt(sapp::frame_duration());

    state.game.update(dt, &state.input);

    if let Some(color) = state.game.background_color() {
        state.pass_action.colors[0].clear_value = color;
    }

    if let Some(title) = state.game.window_title() {
        if title != state.title {
            sapp::set_window_title(&title);
            state.title = title;
        }
    }

    sg::begin_pass(&sg::Pass {
        action: state.pass_action,
        swapchain: sglue::swapchain(),
        ..Default::default()
    });

    state.game.render(&mut state.renderer);
    state.renderer.flush(&mut state.camera);

    sg::end_pass();
    sg::commit();

    state.input.new_frame();
}

extern "C" fn cleanup<T: Game>(user_data: *mut ffi::c_void) {
    sg::shutdown();
    let _state = unsafe { Box::from_raw(user_data as *mut AppState<T>) };
    tracing::info!("Shut down");
}

extern "C" fn event<T: Game>(event: *const sapp::Event, user_data: *mut ffi::c_void) {
    let state = unsafe { &mut *(user_data as *mut AppState<T>) };
    let event = unsafe { &*event };

    process_input_events(state, event);
    state.game.handle_event(event);
}

fn process_input_events<T: Game>(state: &mut AppState<T>, event: &sapp::Event) {
    match event._type {
        sapp::EventType::KeyDown => state.input.handle_key_down(event.key_code),
        sapp::EventType::KeyUp => state.input.handle_key_up(event.key_code),
        sapp::EventType::Resized => {
            // the central mass stays where it was built, so keep the camera on it
            state
                .camera
                .set_viewport_size(event.window_width as f32, event.window_height as f32);
        }
        _ => {}
    }
}
