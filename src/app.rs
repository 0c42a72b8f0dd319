use egui::{Key, PointerButton, Rect, Ui, Vec2};

use crate::command::{Command, CommandHistory};
use crate::config::{CANVAS_MARGIN_PX, ViewSettings};
use crate::dialogs::{ActiveDialog, DialogOutcome, DialogResult, parse_dimension};
use crate::element::FurnitureId;
use crate::error::LayoutError;
use crate::geometry::{AlignSide, CanvasTransform};
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{EditorModel, LayoutSnapshot};
use crate::tools::{MeasureTarget, Tool, ToolType, new_tool};

/// We derive Deserialize/Serialize so we can persist the layout on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct RoomPlannerApp {
    model: EditorModel,
    view: ViewSettings,

    #[serde(skip)]
    history: CommandHistory,
    #[serde(skip)]
    active_tool: ToolType,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    dialog: Option<ActiveDialog>,
    /// Object under the pointer when the context menu was opened
    #[serde(skip)]
    context_target: Option<FurnitureId>,
    #[serde(skip)]
    room_width_input: String,
    #[serde(skip)]
    room_height_input: String,
}

impl Default for RoomPlannerApp {
    fn default() -> Self {
        let mut app = Self {
            model: EditorModel::default(),
            view: ViewSettings::default(),
            history: CommandHistory::new(),
            active_tool: ToolType::default(),
            renderer: Renderer::new(),
            input: InputHandler::default(),
            dialog: None,
            context_target: None,
            room_width_input: String::new(),
            room_height_input: String::new(),
        };
        app.sync_room_inputs();
        app
    }
}

impl RoomPlannerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.sync_room_inputs();
        log::info!(
            "Loaded layout with {} objects in a {}m x {}m room",
            app.model.objects().len(),
            app.model.room().width(),
            app.model.room().height()
        );
        app
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn view_settings_mut(&mut self) -> &mut ViewSettings {
        &mut self.view
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active_tool
    }

    pub fn context_target(&self) -> Option<FurnitureId> {
        self.context_target
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn room_inputs_mut(&mut self) -> (&mut String, &mut String) {
        (&mut self.room_width_input, &mut self.room_height_input)
    }

    fn sync_room_inputs(&mut self) {
        let room = self.model.room();
        self.room_width_input = room.width().to_string();
        self.room_height_input = room.height().to_string();
    }

    /// Screen mapping for a canvas occupying `canvas_rect`
    pub fn canvas_transform(&self, canvas_rect: Rect) -> CanvasTransform {
        CanvasTransform::new(
            canvas_rect.min + Vec2::splat(CANVAS_MARGIN_PX),
            self.view.pixels_per_meter,
        )
    }

    // ---------------------------------------------------------------------
    // Commands

    pub fn execute_command(&mut self, command: Command) {
        let resizes_room = matches!(command, Command::ResizeRoom { .. });
        match self.history.execute(command, &mut self.model) {
            Ok(()) if resizes_room => self.sync_room_inputs(),
            Ok(()) => {}
            Err(err) => self.report_error(err),
        }
    }

    pub fn undo(&mut self) {
        match self.history.undo(&mut self.model) {
            Ok(()) => self.sync_room_inputs(),
            Err(err) => log::debug!("Undo skipped: {err}"),
        }
    }

    pub fn redo(&mut self) {
        match self.history.redo(&mut self.model) {
            Ok(()) => self.sync_room_inputs(),
            Err(err) => log::debug!("Redo skipped: {err}"),
        }
    }

    fn report_error(&mut self, err: LayoutError) {
        log::warn!("{err}");
        self.dialog = Some(ActiveDialog::message("Error", err.to_string()));
    }

    /// Run a command built from the current model, reporting construction errors
    fn try_command(&mut self, build: impl FnOnce(&EditorModel) -> Result<Command, LayoutError>) {
        match build(&self.model) {
            Ok(command) => self.execute_command(command),
            Err(err) => self.report_error(err),
        }
    }

    pub fn update_room_size(&mut self) {
        let parsed = (
            parse_dimension(&self.room_width_input),
            parse_dimension(&self.room_height_input),
        );
        let (Ok(width), Ok(height)) = parsed else {
            log::warn!(
                "Rejected room size {:?} x {:?}",
                self.room_width_input,
                self.room_height_input
            );
            self.dialog = Some(ActiveDialog::message(
                "Invalid Input",
                "Please enter valid numbers for width and height.",
            ));
            return;
        };

        match Command::resize_room(&self.model, width, height) {
            Ok(command) => {
                self.execute_command(command);
                self.dialog = Some(ActiveDialog::message(
                    "Success",
                    format!("Room size updated to: {width}m x {height}m"),
                ));
            }
            Err(err) => self.report_error(err),
        }
    }

    pub fn select(&mut self, id: Option<FurnitureId>) {
        self.execute_command(Command::SelectObject(id));
    }

    pub fn delete_object(&mut self, id: FurnitureId) {
        self.try_command(|model| Command::delete_object(model, id));
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.model.selected() {
            self.delete_object(id);
        }
    }

    pub fn flip_object(&mut self, id: FurnitureId) {
        self.try_command(|model| Command::flip_object(model, id));
    }

    pub fn align_object(&mut self, id: FurnitureId, anchor: FurnitureId, side: AlignSide) {
        self.try_command(|model| Command::align_object(model, id, anchor, side));
    }

    /// Switch to the measure tool, annotating `target`
    pub fn measure(&mut self, target: MeasureTarget) {
        self.set_active_tool_by_name("Measure");
        if let Some(tool) = self.active_tool.as_measure_tool_mut() {
            tool.set_target(Some(target));
        }
    }

    pub fn export_layout(&mut self, ctx: &egui::Context) {
        match LayoutSnapshot::capture(&self.model).to_json() {
            Ok(json) => {
                ctx.copy_text(json);
                log::info!("Copied layout to clipboard");
                self.dialog = Some(ActiveDialog::message(
                    "Layout Exported",
                    "The layout was copied to the clipboard as JSON.",
                ));
            }
            Err(err) => self.report_error(err),
        }
    }

    // ---------------------------------------------------------------------
    // Dialogs

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        log::debug!("Opening dialog {:?}", dialog.title());
        self.dialog = Some(dialog);
    }

    pub fn begin_add_object(&mut self) {
        self.open_dialog(ActiveDialog::add_object());
    }

    pub fn begin_rename(&mut self, id: FurnitureId) {
        if let Some(object) = self.model.find(id) {
            let dialog = ActiveDialog::rename(object);
            self.open_dialog(dialog);
        }
    }

    pub fn begin_resize(&mut self, id: FurnitureId) {
        if let Some(object) = self.model.find(id) {
            let dialog = ActiveDialog::resize(object);
            self.open_dialog(dialog);
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };
        match dialog.show(ctx) {
            DialogOutcome::Open => {}
            DialogOutcome::Closed => self.dialog = None,
            DialogOutcome::Submitted(result) => {
                self.dialog = None;
                self.apply_dialog_result(result);
            }
        }
    }

    fn apply_dialog_result(&mut self, result: DialogResult) {
        log::info!("Dialog result: {result:?}");
        match result {
            DialogResult::AddObject { name } => {
                match Command::add_object(&mut self.model, &name) {
                    Ok(command) => self.execute_command(command),
                    Err(err) => self.report_error(err),
                }
            }
            DialogResult::Rename { id, name } => {
                match Command::rename_object(&self.model, id, &name) {
                    Ok(Some(command)) => self.execute_command(command),
                    Ok(None) => log::debug!("Rename ignored: name blank or unchanged"),
                    Err(err) => self.report_error(err),
                }
            }
            DialogResult::Resize { id, size } => {
                self.try_command(|model| Command::resize_object(model, id, size));
            }
            DialogResult::ImportLayout(snapshot) => {
                snapshot.restore(&mut self.model);
                self.history.clear();
                self.active_tool.deactivate(&self.model);
                self.sync_room_inputs();
            }
        }
    }

    // ---------------------------------------------------------------------
    // Tools and input

    pub fn set_active_tool_by_name(&mut self, name: &str) {
        if self.active_tool.name() == name {
            return;
        }
        let Some(mut tool) = new_tool(name) else {
            log::warn!("Unknown tool: {name}");
            return;
        };
        self.active_tool.deactivate(&self.model);
        tool.activate(&self.model);
        log::info!("Switched tool {} -> {}", self.active_tool.name(), tool.name());
        self.active_tool = tool;
    }

    /// Let the active tool draw its panel section
    pub fn handle_tool_ui(&mut self, ui: &mut Ui) -> Option<Command> {
        self.active_tool.ui(ui, &self.model)
    }

    /// Route this frame's input to the active tool and the shortcuts
    pub fn handle_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: Rect,
        canvas_hovered: bool,
        view: &CanvasTransform,
    ) {
        self.input.set_canvas(canvas_rect, canvas_hovered);
        let events = self.input.process_input(ctx);
        let keyboard_free = !ctx.wants_keyboard_input();

        for event in events {
            match event {
                InputEvent::PointerDown { location, button } => {
                    if !location.is_in_canvas || self.dialog.is_some() {
                        continue;
                    }
                    let pos = view.to_room_pos(location.position);
                    match button {
                        PointerButton::Primary => {
                            if let Some(command) = self.active_tool.on_pointer_down(pos, &self.model)
                            {
                                self.execute_command(command);
                            }
                        }
                        PointerButton::Secondary => {
                            self.context_target = self.model.object_at(pos).map(|o| o.id());
                        }
                        _ => {}
                    }
                }
                InputEvent::PointerMove {
                    location,
                    held_buttons,
                } if held_buttons.contains(&PointerButton::Primary) => {
                    let pos = view.to_room_pos(location.position);
                    if let Some(command) = self.active_tool.on_pointer_move(pos, &self.model) {
                        self.execute_command(command);
                    }
                }
                InputEvent::PointerUp {
                    location,
                    button: PointerButton::Primary,
                } => {
                    let pos = view.to_room_pos(location.position);
                    if let Some(command) = self.active_tool.on_pointer_up(pos, &self.model) {
                        self.execute_command(command);
                    }
                }
                InputEvent::KeyDown { key, modifiers } if keyboard_free && self.dialog.is_none() => {
                    self.handle_shortcut(key, modifiers);
                }
                _ => {}
            }
        }
    }

    fn handle_shortcut(&mut self, key: Key, modifiers: egui::Modifiers) {
        match key {
            Key::Delete => self.delete_selected(),
            Key::Z if modifiers.command && modifiers.shift => self.redo(),
            Key::Z if modifiers.command => self.undo(),
            Key::Y if modifiers.command => self.redo(),
            Key::Escape => {
                self.select(None);
                self.active_tool.deactivate(&self.model);
            }
            _ => {}
        }
    }

    /// Hand the active tool's transient state to the renderer
    pub fn prepare_overlay(&mut self) {
        self.renderer.set_show_grid(self.view.show_grid);
        self.renderer.set_drag_preview(
            self.active_tool
                .as_select_tool()
                .and_then(|tool| tool.drag_preview()),
        );
        let measurements = self
            .active_tool
            .as_measure_tool()
            .map(|tool| {
                tool.measurements(&self.model)
                    .into_iter()
                    .map(|(_, measurement)| measurement)
                    .collect()
            })
            .unwrap_or_default();
        self.renderer.set_measurements(measurements);
    }
}

impl eframe::App for RoomPlannerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_dialog(ctx);
    }
}
