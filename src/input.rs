use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether the canvas itself is under this position (not a window or popup)
    pub is_in_canvas: bool,
}

/// Represents different types of input events that can occur in the application
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse entered the application window
    PointerEnter { location: InputLocation },
    /// Mouse left the application window
    PointerLeave { last_known_location: InputLocation },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
    /// Key was released
    KeyUp { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerUp { location, .. }
            | InputEvent::PointerMove { location, .. }
            | InputEvent::PointerEnter { location } => location.is_in_canvas,
            InputEvent::PointerLeave {
                last_known_location,
            } => last_known_location.is_in_canvas,
            _ => false,
        }
    }
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    canvas_hovered: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_hovered: false,
        }
    }

    /// Update the canvas area for this frame. `hovered` should come from the
    /// canvas response so popups and windows on top of it block input.
    pub fn set_canvas(&mut self, rect: Rect, hovered: bool) {
        self.canvas_rect = rect;
        self.canvas_hovered = hovered;
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_hovered && self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if self.last_pointer_pos.is_none() {
                    events.push(InputEvent::PointerEnter {
                        location: self.make_location(pos),
                    });
                }

                if Some(pos) != self.last_pointer_pos {
                    let held_buttons = BUTTONS
                        .into_iter()
                        .filter(|button| input.pointer.button_down(*button))
                        .collect();
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        held_buttons,
                    });
                }

                self.last_pointer_pos = Some(pos);
            } else if let Some(last) = self.last_pointer_pos.take() {
                events.push(InputEvent::PointerLeave {
                    last_known_location: self.make_location(last),
                });
            }

            // Releases outside the window still need to end a drag
            if let Some(pos) = input.pointer.latest_pos() {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed,
                    modifiers,
                    ..
                } = event
                {
                    events.push(if *pressed {
                        InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        }
                    } else {
                        InputEvent::KeyUp {
                            key: *key,
                            modifiers: *modifiers,
                        }
                    });
                }
            }
        });

        events
    }
}
