use crate::controllers::interactive::InputEvent;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Zoom units produced by one wheel line.
pub const ZOOM_UNITS_PER_LINE: f32 = 3.0;

/// Touchpad travel, in physical pixels, treated as one zoom unit.
pub const PIXELS_PER_ZOOM_UNIT: f64 = 16.0;

#[must_use]
pub fn key_to_event(key_code: KeyCode) -> Option<InputEvent> {
    match key_code {
        KeyCode::ArrowUp => Some(InputEvent::PanUp),
        KeyCode::ArrowDown => Some(InputEvent::PanDown),
        KeyCode::ArrowLeft => Some(InputEvent::PanLeft),
        KeyCode::ArrowRight => Some(InputEvent::PanRight),
        _ => None,
    }
}

/// Scrolling towards the user zooms out.
///
/// winit reports that direction as a negative `y`, so the sign is flipped.
#[must_use]
pub fn wheel_to_event(delta: MouseScrollDelta) -> Option<InputEvent> {
    let units = match delta {
        MouseScrollDelta::LineDelta(_, y) => (-y * ZOOM_UNITS_PER_LINE).round() as i32,
        MouseScrollDelta::PixelDelta(position) => {
            (-position.y / PIXELS_PER_ZOOM_UNIT).round() as i32
        }
    };

    (units != 0).then_some(InputEvent::Zoom(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_arrow_keys_pan() {
        assert_eq!(key_to_event(KeyCode::ArrowUp), Some(InputEvent::PanUp));
        assert_eq!(key_to_event(KeyCode::ArrowDown), Some(InputEvent::PanDown));
        assert_eq!(key_to_event(KeyCode::ArrowLeft), Some(InputEvent::PanLeft));
        assert_eq!(key_to_event(KeyCode::ArrowRight), Some(InputEvent::PanRight));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(key_to_event(KeyCode::KeyW), None);
        assert_eq!(key_to_event(KeyCode::Space), None);
    }

    #[test]
    fn test_one_line_towards_user_zooms_out_three_units() {
        assert_eq!(
            wheel_to_event(MouseScrollDelta::LineDelta(0.0, -1.0)),
            Some(InputEvent::Zoom(3))
        );
    }

    #[test]
    fn test_one_line_away_from_user_zooms_in() {
        assert_eq!(
            wheel_to_event(MouseScrollDelta::LineDelta(0.0, 2.0)),
            Some(InputEvent::Zoom(-6))
        );
    }

    #[test]
    fn test_pixel_delta_is_scaled() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -48.0));

        assert_eq!(wheel_to_event(delta), Some(InputEvent::Zoom(3)));
    }

    #[test]
    fn test_tiny_scroll_produces_nothing() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 4.0));

        assert_eq!(wheel_to_event(delta), None);
        assert_eq!(wheel_to_event(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }
}
