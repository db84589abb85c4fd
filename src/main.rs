//! IndoorGML Viewer.
//!
//! Zeigt CellSpaces, States und Transitions eines IndoorGML-Modells in 3D.
//! egui + wgpu, Chase- und Fly-Kamera, Klick-Selektion und Löschen.

use eframe::egui;
use indoorgml_viewer::{
    render, ui, AppController, AppIntent, AppState, SampleScene, ViewerOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("IndoorGML Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("IndoorGML Viewer"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "IndoorGML Viewer",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(ViewerApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let scene = startup_scene(&viewer_options);

        let mut state = AppState::new();
        state.options = viewer_options;

        let mut app = Self {
            state,
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        };
        app.process_events(vec![AppIntent::LoadSampleRequested { scene }]);
        app
    }
}

/// Erstes CLI-Argument überschreibt die Startszene aus der Konfiguration.
fn startup_scene(options: &ViewerOptions) -> SampleScene {
    let Some(arg) = std::env::args().nth(1) else {
        return options.default_scene;
    };
    match arg.parse::<SampleScene>() {
        Ok(scene) => scene,
        Err(e) => {
            log::warn!("{}, verwende '{}'", e, options.default_scene);
            options.default_scene
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let [r, g, b, a] = self.state.options.background_color;
        let background = egui::Rgba::from_rgba_unmultiplied(r, g, b, a);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background.into()))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    self.state.view.camera.mode,
                    self.state.selected().is_some(),
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::ScenePaintCallback {
                        renderer: self.renderer.clone(),
                        scene,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);

                if self.state.model.is_none() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Szene geladen. Szene → Beispiel wählen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        // Fly-Kamera braucht kontinuierliche Frames solange Tasten gehalten werden
        let flying = self.state.view.camera.mode == indoorgml_viewer::CameraMode::Fly
            && ctx.input(|i| !i.keys_down.is_empty());
        if has_meaningful_events
            || flying
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
