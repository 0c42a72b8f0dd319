use egui::{Sense, Ui};

use crate::RoomPlannerApp;
use crate::geometry::AlignSide;
use crate::tools::MeasureTarget;

pub fn central_panel(app: &mut RoomPlannerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let view = app.canvas_transform(response.rect);

        // Handle input
        app.handle_input(ctx, response.rect, response.hovered(), &view);

        // Render the canvas
        app.prepare_overlay();
        app.renderer().render(&painter, &view, app.model());

        response.context_menu(|ui| context_menu(app, ui));
    });
}

fn context_menu(app: &mut RoomPlannerApp, ui: &mut Ui) {
    let target = app
        .context_target()
        .and_then(|id| app.model().find(id))
        .map(|object| (object.id(), object.label()));

    let Some((id, label)) = target else {
        if ui.button("Add object…").clicked() {
            app.begin_add_object();
            ui.close_menu();
        }
        return;
    };

    ui.strong(label);
    ui.separator();

    if ui.button("Resize…").clicked() {
        app.begin_resize(id);
        ui.close_menu();
    }
    if ui.button("Rename…").clicked() {
        app.begin_rename(id);
        ui.close_menu();
    }
    if ui.button("Flip").clicked() {
        app.flip_object(id);
        ui.close_menu();
    }
    if ui.button("Delete").clicked() {
        app.delete_object(id);
        ui.close_menu();
    }

    ui.separator();

    if ui.button("Measure to walls").clicked() {
        app.measure(MeasureTarget::Walls(id));
        ui.close_menu();
    }

    let selected = app.model().selected().filter(|selected| *selected != id);
    ui.add_enabled_ui(selected.is_some(), |ui| {
        ui.menu_button("Align selected", |ui| {
            for side in AlignSide::ALL {
                if ui.button(side.label()).clicked() {
                    if let Some(selected) = selected {
                        app.align_object(selected, id, side);
                    }
                    ui.close_menu();
                }
            }
        });
    });
}
