#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    eframe::run_native(
        "Room Planner",
        room_planner::config::native_options(),
        Box::new(|cc| Ok(Box::new(room_planner::RoomPlannerApp::new(cc)))),
    )
}
