use egui::Slider;

use crate::RoomPlannerApp;
use crate::config::{MAX_PIXELS_PER_METER, MIN_PIXELS_PER_METER};
use crate::dialogs::ActiveDialog;
use crate::element::Element;
use crate::tools::{TOOL_NAMES, Tool};

pub fn tools_panel(app: &mut RoomPlannerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                room_section(app, ui);
                ui.separator();
                tool_section(app, ui);
                ui.separator();
                object_section(app, ui);
                ui.separator();
                history_section(app, ui);
                ui.separator();
                layout_section(app, ui, ctx);
            });
        });
}

fn room_section(app: &mut RoomPlannerApp, ui: &mut egui::Ui) {
    ui.heading("Room");
    let (width, height) = app.room_inputs_mut();
    egui::Grid::new("room_size_grid").num_columns(2).show(ui, |ui| {
        ui.label("Width (m):");
        ui.text_edit_singleline(width);
        ui.end_row();
        ui.label("Height (m):");
        ui.text_edit_singleline(height);
        ui.end_row();
    });
    if ui.button("Update Room Size").clicked() {
        app.update_room_size();
    }
}

fn tool_section(app: &mut RoomPlannerApp, ui: &mut egui::Ui) {
    ui.heading("Tools");

    let active_tool_name = app.active_tool().name();
    ui.horizontal(|ui| {
        for tool_name in TOOL_NAMES {
            if ui
                .selectable_label(active_tool_name == tool_name, tool_name)
                .clicked()
            {
                log::info!("Tool selected from UI: {tool_name}");
                app.set_active_tool_by_name(tool_name);
            }
        }
    });
    ui.label(format!("(State: {})", app.active_tool().current_state_name()));

    if let Some(command) = app.handle_tool_ui(ui) {
        app.execute_command(command);
    }
}

fn object_section(app: &mut RoomPlannerApp, ui: &mut egui::Ui) {
    ui.heading("Objects");

    ui.horizontal(|ui| {
        if ui.button("Add Object").clicked() {
            app.begin_add_object();
        }
        let selected = app.model().selected();
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Delete Object"))
            .clicked()
        {
            app.delete_selected();
        }
    });

    if let Some(selected) = app.model().selected_object() {
        let id = selected.id();
        let rect = selected.rect();
        ui.label(format!(
            "{} at ({:.2}, {:.2})",
            selected.label(),
            rect.min.x,
            rect.min.y
        ));
        ui.horizontal(|ui| {
            if ui.button("Resize…").clicked() {
                app.begin_resize(id);
            }
            if ui.button("Rename…").clicked() {
                app.begin_rename(id);
            }
            if ui.button("Flip").clicked() {
                app.flip_object(id);
            }
        });
    }

    let entries: Vec<_> = app
        .model()
        .objects()
        .iter()
        .map(|object| (object.id(), object.label()))
        .collect();
    if entries.is_empty() {
        ui.weak("No objects yet");
    }
    let selected = app.model().selected();
    for (id, label) in entries {
        if ui.selectable_label(selected == Some(id), label).clicked() {
            app.select(Some(id));
        }
    }
}

fn history_section(app: &mut RoomPlannerApp, ui: &mut egui::Ui) {
    ui.heading("History");

    ui.horizontal(|ui| {
        let can_undo = app.command_history().can_undo();
        let can_redo = app.command_history().can_redo();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.redo();
        }
    });

    let history = app.command_history();
    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Undo Stack");
            ui.strong("Redo Stack");
            ui.end_row();

            let undo_stack = history.undo_stack();
            let redo_stack = history.redo_stack();
            // Most recent first
            let max_len = undo_stack.len().max(redo_stack.len());
            for i in 0..max_len {
                ui.label(undo_stack.iter().rev().nth(i).map_or("", |c| c.label()));
                ui.label(redo_stack.iter().rev().nth(i).map_or("", |c| c.label()));
                ui.end_row();
            }
        });
}

fn layout_section(app: &mut RoomPlannerApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.heading("View");
    let view = app.view_settings_mut();
    ui.add(
        Slider::new(
            &mut view.pixels_per_meter,
            MIN_PIXELS_PER_METER..=MAX_PIXELS_PER_METER,
        )
        .text("px / m"),
    );
    ui.checkbox(&mut view.show_grid, "Show 1 m grid");

    ui.separator();
    ui.heading("Layout");
    ui.horizontal(|ui| {
        if ui.button("Copy layout JSON").clicked() {
            app.export_layout(ctx);
        }
        if ui.button("Import layout…").clicked() {
            app.open_dialog(ActiveDialog::import_layout());
        }
    });
}
