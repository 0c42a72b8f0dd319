use egui::{Color32, Pos2, Vec2, pos2, vec2};
use room_planner::command::{Command, CommandHistory};
use room_planner::config::MAX_UNDO_HISTORY;
use room_planner::geometry::AlignSide;
use room_planner::{EditorModel, Element, Furniture, FurnitureId, LayoutError};

// Helper to create a test model with two desks side by side
fn create_test_model() -> (EditorModel, FurnitureId, FurnitureId) {
    let mut model = EditorModel::new();

    let desk = Furniture::new("Desk", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
    let table = Furniture::new("Table", pos2(5.0, 4.0), vec2(2.0, 1.0), Color32::BLUE).unwrap();
    let (desk_id, table_id) = (desk.id(), table.id());
    model.add_object(desk);
    model.add_object(table);

    (model, desk_id, table_id)
}

fn min_of(model: &EditorModel, id: FurnitureId) -> Pos2 {
    model.find(id).unwrap().rect().min
}

#[test]
fn test_add_object_uses_defaults_and_palette() {
    let mut model = EditorModel::new();
    let mut history = CommandHistory::new();

    let first = Command::add_object(&mut model, "Sofa").unwrap();
    history.execute(first, &mut model).unwrap();
    let second = Command::add_object(&mut model, "").unwrap();
    history.execute(second, &mut model).unwrap();

    let objects = model.objects();
    assert_eq!(objects[0].label(), "Sofa (2m x 1m)");
    assert_eq!(objects[0].color(), Color32::RED);
    assert_eq!(objects[0].min(), pos2(0.0, 1.0));
    assert_eq!(objects[1].label(), "Unnamed Object (2m x 1m)");
    assert_eq!(objects[1].color(), Color32::from_rgb(255, 165, 0));
    assert!((objects[1].min().x - 1.2).abs() < 1e-5);

    history.undo(&mut model).unwrap();
    assert_eq!(model.objects().len(), 1);
}

#[test]
fn test_command_undo_redo() {
    let (mut model, desk, _) = create_test_model();
    let mut history = CommandHistory::new();

    history
        .execute(
            Command::MoveObject {
                id: desk,
                delta: vec2(1.0, 2.0),
            },
            &mut model,
        )
        .unwrap();
    assert_eq!(min_of(&model, desk), pos2(2.0, 3.0));

    history.undo(&mut model).unwrap();
    assert_eq!(min_of(&model, desk), pos2(1.0, 1.0));

    history.redo(&mut model).unwrap();
    assert_eq!(min_of(&model, desk), pos2(2.0, 3.0));

    assert!(matches!(history.redo(&mut model), Err(LayoutError::NothingToRedo)));
}

#[test]
fn test_delete_restores_draw_order() {
    let (mut model, desk, table) = create_test_model();
    let mut history = CommandHistory::new();
    model.select(Some(desk));

    let cmd = Command::delete_object(&model, desk).unwrap();
    history.execute(cmd, &mut model).unwrap();
    assert!(model.find(desk).is_none());
    assert!(model.selected().is_none());

    history.undo(&mut model).unwrap();
    let order: Vec<_> = model.objects().iter().map(|o| o.id()).collect();
    assert_eq!(order, vec![desk, table]);
}

#[test]
fn test_resize_rename_flip() {
    let (mut model, desk, _) = create_test_model();
    let mut history = CommandHistory::new();

    let resize = Command::resize_object(&model, desk, vec2(1.5, 0.8)).unwrap();
    history.execute(resize, &mut model).unwrap();
    assert_eq!(model.find(desk).unwrap().label(), "Desk (1.5m x 0.8m)");

    let rename = Command::rename_object(&model, desk, "  Work desk ").unwrap().unwrap();
    history.execute(rename, &mut model).unwrap();
    assert_eq!(model.find(desk).unwrap().label(), "Work desk (1.5m x 0.8m)");

    let flip = Command::flip_object(&model, desk).unwrap();
    history.execute(flip, &mut model).unwrap();
    assert_eq!(model.find(desk).unwrap().label(), "Work desk (0.8m x 1.5m)");
    assert_eq!(min_of(&model, desk), pos2(1.0, 1.0));

    for _ in 0..3 {
        history.undo(&mut model).unwrap();
    }
    assert_eq!(model.find(desk).unwrap().label(), "Desk (2m x 1m)");
    assert!(matches!(history.undo(&mut model), Err(LayoutError::NothingToUndo)));
}

#[test]
fn test_invalid_edits_are_rejected() {
    let (model, desk, _) = create_test_model();

    assert!(matches!(
        Command::resize_object(&model, desk, vec2(0.0, 1.0)),
        Err(LayoutError::NonPositiveDimension(_))
    ));
    assert!(Command::rename_object(&model, desk, "   ").unwrap().is_none());
    assert!(Command::rename_object(&model, desk, "Desk").unwrap().is_none());
    assert!(matches!(
        Command::delete_object(&model, FurnitureId::new()),
        Err(LayoutError::ObjectNotFound(_))
    ));
    assert!(Command::resize_room(&model, 4.0, -2.0).is_err());
}

#[test]
fn test_align_places_flush_and_undoes() {
    let (mut model, desk, table) = create_test_model();
    let mut history = CommandHistory::new();

    let align = Command::align_object(&model, desk, table, AlignSide::Below).unwrap();
    history.execute(align, &mut model).unwrap();
    assert_eq!(min_of(&model, desk), pos2(5.0, 5.0));

    history.undo(&mut model).unwrap();
    assert_eq!(min_of(&model, desk), pos2(1.0, 1.0));

    assert!(matches!(
        Command::align_object(&model, desk, desk, AlignSide::Left),
        Err(LayoutError::SelfAlignment)
    ));
}

#[test]
fn test_resize_room_round_trip() {
    let mut model = EditorModel::new();
    let mut history = CommandHistory::new();

    let cmd = Command::resize_room(&model, 4.0, 3.5).unwrap();
    history.execute(cmd, &mut model).unwrap();
    assert_eq!(model.room().size(), vec2(4.0, 3.5));

    history.undo(&mut model).unwrap();
    assert_eq!(model.room().size(), vec2(10.0, 8.0));
}

#[test]
fn test_selection_is_not_recorded() {
    let (mut model, desk, _) = create_test_model();
    let mut history = CommandHistory::new();

    history
        .execute(Command::SelectObject(Some(desk)), &mut model)
        .unwrap();
    assert_eq!(model.selected(), Some(desk));
    assert!(!history.can_undo());
}

#[test]
fn test_new_edit_clears_redo() {
    let (mut model, desk, _) = create_test_model();
    let mut history = CommandHistory::new();
    let step = Command::MoveObject {
        id: desk,
        delta: Vec2::X,
    };

    history.execute(step.clone(), &mut model).unwrap();
    history.undo(&mut model).unwrap();
    assert!(history.can_redo());

    history.execute(step, &mut model).unwrap();
    assert!(!history.can_redo());
}

#[test]
fn test_history_is_capped() {
    let (mut model, desk, _) = create_test_model();
    let mut history = CommandHistory::new();

    for _ in 0..MAX_UNDO_HISTORY + 5 {
        history
            .execute(
                Command::MoveObject {
                    id: desk,
                    delta: Vec2::X,
                },
                &mut model,
            )
            .unwrap();
    }
    assert_eq!(history.undo_stack().len(), MAX_UNDO_HISTORY);
}
