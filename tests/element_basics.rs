use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};
use room_planner::element::WallSide;
use room_planner::{Element, Furniture, LayoutError, Room};

fn create_test_desk() -> Furniture {
    Furniture::new("Desk", pos2(1.0, 2.0), vec2(2.0, 1.0), Color32::RED).unwrap()
}

#[test]
fn test_furniture_creation() {
    let desk = create_test_desk();
    assert_eq!(desk.name(), "Desk");
    assert_eq!(desk.label(), "Desk (2m x 1m)");
    assert_eq!(desk.rect(), Rect::from_min_size(pos2(1.0, 2.0), vec2(2.0, 1.0)));

    let unnamed = Furniture::new(" \t", Pos2::ZERO, vec2(1.0, 1.0), Color32::RED).unwrap();
    assert_eq!(unnamed.name(), "Unnamed Object");

    assert!(matches!(
        Furniture::new("Rug", Pos2::ZERO, vec2(-1.0, 1.0), Color32::RED),
        Err(LayoutError::NonPositiveDimension(_))
    ));
}

#[test]
fn test_furniture_ids_are_unique() {
    assert_ne!(create_test_desk().id(), create_test_desk().id());
}

#[test]
fn test_furniture_translate() {
    let mut desk = create_test_desk();
    desk.translate(Vec2::new(0.5, -1.0));
    assert_eq!(desk.rect().min, pos2(1.5, 1.0));
    assert_eq!(desk.size(), vec2(2.0, 1.0));
}

#[test]
fn test_furniture_resize_keeps_corner() {
    let mut desk = create_test_desk();
    desk.resize(vec2(3.0, 1.5)).unwrap();
    assert_eq!(desk.rect().min, pos2(1.0, 2.0));
    assert_eq!(desk.label(), "Desk (3m x 1.5m)");

    assert!(desk.resize(vec2(3.0, f32::NAN)).is_err());
    assert_eq!(desk.size(), vec2(3.0, 1.5));
}

#[test]
fn test_furniture_rename_keeps_size() {
    let mut desk = create_test_desk();
    assert!(desk.rename("Bench"));
    assert_eq!(desk.label(), "Bench (2m x 1m)");

    assert!(!desk.rename("   "));
    assert_eq!(desk.name(), "Bench");
}

#[test]
fn test_furniture_flip() {
    let mut desk = create_test_desk();
    desk.flip();
    assert_eq!(desk.size(), vec2(1.0, 2.0));
    assert_eq!(desk.rect().min, pos2(1.0, 2.0));
    desk.flip();
    assert_eq!(desk.size(), vec2(2.0, 1.0));
}

#[test]
fn test_furniture_hit_test() {
    let desk = create_test_desk();
    assert!(desk.hit_test(pos2(2.0, 2.5)));
    assert!(!desk.hit_test(pos2(0.5, 2.5)));
}

#[test]
fn test_room_walls() {
    let room = Room::new(6.0, 4.0).unwrap();
    let sides: Vec<_> = room.walls().iter().map(|wall| wall.side()).collect();
    assert_eq!(sides, WallSide::ALL.to_vec());
    for wall in room.walls() {
        assert!(!wall.rect().intersects(room.interior().shrink(0.01)));
    }
}
