//! Tilt-on-hover card. The pointer position over the card maps to a small
//! 3D rotation; leaving the card snaps it back flat.

use dioxus::prelude::*;

/// Divisor taken from the original tuning: 10px of pointer offset per degree.
const TILT_FALLOFF: f64 = 10.0;

/// Rotation (x, y) in degrees for a pointer at `(x, y)` over a `width` x
/// `height` card. Degenerate sizes tilt nothing.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let tilt_x = (y - height / 2.0) / TILT_FALLOFF;
    let tilt_y = -(x - width / 2.0) / TILT_FALLOFF;
    (tilt_x, tilt_y)
}

#[derive(Props, Clone, PartialEq)]
pub struct TiltCardProps {
    #[props(optional, into, default)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let mut size = use_signal(|| (0.0_f64, 0.0_f64));
    let mut transform = use_signal(String::new);

    rsx! {
        div {
            class: "tilt-card {props.class}",
            style: "{transform}",
            onmounted: move |event| async move {
                if let Ok(rect) = event.data().get_client_rect().await {
                    size.set((rect.size.width, rect.size.height));
                }
            },
            onmousemove: move |event| {
                let point = event.element_coordinates();
                let (w, h) = *size.read();
                let (tx, ty) = tilt_angles(point.x, point.y, w, h);
                transform.set(format!(
                    "transform: perspective(1000px) rotateX({tx:.2}deg) rotateY({ty:.2}deg)"
                ));
            },
            onmouseleave: move |_| transform.set(String::new()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_means_no_tilt() {
        assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_tilt_in_opposite_directions() {
        let (top_left_x, top_left_y) = tilt_angles(0.0, 0.0, 200.0, 100.0);
        let (bottom_right_x, bottom_right_y) = tilt_angles(200.0, 100.0, 200.0, 100.0);
        assert!(top_left_x < 0.0 && bottom_right_x > 0.0);
        assert!(top_left_y > 0.0 && bottom_right_y < 0.0);
        assert_eq!(top_left_x, -bottom_right_x);
        assert_eq!(top_left_y, -bottom_right_y);
    }

    #[test]
    fn unmeasured_card_stays_flat() {
        assert_eq!(tilt_angles(40.0, 40.0, 0.0, 0.0), (0.0, 0.0));
    }
}
