// SPDX-License-Identifier: MPL-2.0
//! Keyboard subscriptions for the application.
//!
//! The listing is mouse driven; the secondary screens get shortcuts:
//! - Photo viewer: Left/Right to navigate, Escape to go back
//! - Booking: Up/Down to change the night count, Escape to go back

use super::{Message, Screen};
use crate::ui::{booking, photo_viewer};
use iced::keyboard::{self, key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current screen.
///
/// Events already captured by a widget are ignored.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Listing => Subscription::none(),
        Screen::PhotoViewer => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            let message = match named_key(&event)? {
                key::Named::ArrowRight => photo_viewer::Message::Next,
                key::Named::ArrowLeft => photo_viewer::Message::Previous,
                key::Named::Escape => photo_viewer::Message::Back,
                _ => return None,
            };
            Some(Message::PhotoViewer(message))
        }),
        Screen::Booking => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            let message = match named_key(&event)? {
                key::Named::ArrowUp => booking::Message::IncrementStay,
                key::Named::ArrowDown => booking::Message::DecrementStay,
                key::Named::Escape => booking::Message::Back,
                _ => return None,
            };
            Some(Message::Booking(message))
        }),
    }
}

fn named_key(event: &event::Event) -> Option<key::Named> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => Some(*named),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_press(named: key::Named) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: key::Physical::Code(key::Code::ArrowLeft),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn named_key_extracts_key_presses() {
        assert_eq!(
            named_key(&key_press(key::Named::Escape)),
            Some(key::Named::Escape)
        );
    }

    #[test]
    fn named_key_ignores_other_events() {
        let event = event::Event::Window(iced::window::Event::Focused);
        assert_eq!(named_key(&event), None);
    }
}
