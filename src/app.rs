use crate::config::StoreConfig;
use crate::error::ShapeResult;
use crate::persistence::ShapeStore;
use crate::renderer::Renderer;
use crate::shape::{AnyShape, ShapeKind};

/// Which file format the viewer reads from
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    #[default]
    Json,
    Csv,
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ShapeViewerApp {
    config: StoreConfig,
    format: SourceFormat,
    scale: f32,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    rectangles: Vec<AnyShape>,
    #[serde(skip)]
    squares: Vec<AnyShape>,
    #[serde(skip)]
    last_error: Option<String>,
}

impl Default for ShapeViewerApp {
    fn default() -> Self {
        Self {
            config: StoreConfig::from_env(),
            format: SourceFormat::Json,
            scale: 10.0,
            renderer: Renderer::new(),
            rectangles: Vec::new(),
            squares: Vec::new(),
            last_error: None,
        }
    }
}

impl ShapeViewerApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins over whatever directory was stored last run.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<StoreConfig>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        if let Some(config) = config {
            app.config = config;
        }
        app.reload();
        app
    }

    fn store(&self) -> ShapeStore<'static> {
        ShapeStore::new(self.config.clone())
    }

    fn load(&self, kind: ShapeKind) -> ShapeResult<Vec<AnyShape>> {
        let store = self.store();
        match self.format {
            SourceFormat::Json => store.load_collection(kind),
            SourceFormat::Csv => store.load_collection_csv(kind),
        }
    }

    /// Re-read both collections from disk
    pub fn reload(&mut self) {
        let loaded = self
            .load(ShapeKind::Rectangle)
            .and_then(|rectangles| Ok((rectangles, self.load(ShapeKind::Square)?)));

        match loaded {
            Ok((rectangles, squares)) => {
                self.rectangles = rectangles;
                self.squares = squares;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("Failed to load shapes from {}: {}", self.config.directory().display(), err);
                self.rectangles.clear();
                self.squares.clear();
                self.last_error = Some(err.to_string());
            }
        }
        self.renderer.reset_colors();
    }

    fn shape_list(ui: &mut egui::Ui, title: &str, shapes: &[AnyShape]) {
        ui.collapsing(format!("{} ({})", title, shapes.len()), |ui| {
            for shape in shapes {
                ui.monospace(shape.to_string());
            }
        });
    }
}

impl eframe::App for ShapeViewerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("shapes_panel").show(ctx, |ui| {
            ui.heading("Shapes");
            ui.label(format!("Directory: {}", self.config.directory().display()));
            ui.separator();

            let mut format = self.format;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut format, SourceFormat::Json, "JSON");
                ui.selectable_value(&mut format, SourceFormat::Csv, "CSV");
            });
            let format_changed = format != self.format;
            self.format = format;

            if ui.button("Reload").clicked() || format_changed {
                self.reload();
            }

            ui.add(egui::Slider::new(&mut self.scale, 1.0..=50.0).text("Scale"));

            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, err);
            }

            ui.separator();
            Self::shape_list(ui, "Rectangles", &self.rectangles);
            Self::shape_list(ui, "Squares", &self.squares);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (_response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            self.renderer.set_scale(self.scale);
            self.renderer.draw(&painter, &self.rectangles, &self.squares);
        });
    }
}
