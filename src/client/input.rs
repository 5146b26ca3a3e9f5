use sdl3::EventPump;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;

use crate::game::Direction;

/// Represents the input from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Quit,            // The user has requested to close the window.
    Move(Direction), // A directional key was pressed.
}

/// Maps a key to the direction it pushes the mover, if any.
pub(crate) fn direction_for(keycode: Keycode) -> Option<Direction> {
    match keycode {
        Keycode::Up => Some(Direction::Up),
        Keycode::Down => Some(Direction::Down),
        Keycode::Left => Some(Direction::Left),
        Keycode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Translates a single SDL event. Key presses only count for the game window.
pub(crate) fn translate(event: &Event, win_id: u32) -> Option<Input> {
    match event {
        Event::Quit { .. } => Some(Input::Quit),

        Event::KeyDown {
            keycode: Some(keycode),
            window_id,
            ..
        } if *window_id == win_id => direction_for(*keycode).map(Input::Move),

        _ => None,
    }
}

/// Collects the input events for a single frame.
pub(crate) struct InputState {
    pub events: Vec<Input>, // The events that have been triggered, in order.
}

impl InputState {
    /// Creates a new instance of the input state.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains pending events from the pump. Every key-down counts, repeats included.
    pub fn get_input(&mut self, pump: &mut EventPump, win_id: u32) {
        self.collect(pump.poll_iter(), win_id);
    }

    /// Replaces the frame's inputs. A quit discards everything else collected this frame.
    fn collect<I>(&mut self, events: I, win_id: u32)
    where
        I: IntoIterator<Item = Event>,
    {
        self.events.clear();

        for event in events {
            match translate(&event, win_id) {
                Some(Input::Quit) => {
                    self.events = vec![Input::Quit];
                    return;
                }
                Some(input) => self.events.push(input),
                None => (),
            }
        }
    }
}
