//! Continuously scrolling marquees. The motion itself is CSS keyframes; the
//! components only lay out enough repeated content for a seamless loop.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeDirection {
    Left,
    Right,
}

impl MarqueeDirection {
    fn track_class(self) -> &'static str {
        match self {
            MarqueeDirection::Left => "marquee-track marquee-left",
            MarqueeDirection::Right => "marquee-track marquee-right",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MarqueeRowProps {
    pub items: &'static [&'static str],
    /// Photos interleaved between the items, indexed round-robin.
    pub photos: &'static [&'static str],
    pub direction: MarqueeDirection,
    /// Offset into `photos` so adjacent rows show different images.
    #[props(optional, default)]
    pub photo_offset: usize,
    /// How many times the item list is stitched end to end.
    #[props(optional, default = 3)]
    pub repeat: usize,
    #[props(optional, into, default)]
    pub chip_class: String,
}

/// The item list repeated end to end so the loop has no visible seam.
fn stitch(items: &'static [&'static str], repeat: usize) -> Vec<&'static str> {
    items
        .iter()
        .cycle()
        .take(items.len() * repeat)
        .copied()
        .collect()
}

#[component]
pub fn MarqueeRow(props: MarqueeRowProps) -> Element {
    let stitched = stitch(props.items, props.repeat);

    rsx! {
        div { class: "marquee-row",
            div { class: props.direction.track_class(),
                for (i , item) in stitched.into_iter().enumerate() {
                    span { key: "{i}", class: "marquee-pair",
                        span { class: "marquee-chip {props.chip_class}", "{item}" }
                        if !props.photos.is_empty() {
                            img {
                                class: "marquee-photo",
                                alt: "",
                                src: props.photos[(i + props.photo_offset) % props.photos.len()],
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Brand wordmark scrolling along an SVG curve. The text path animation is
/// SMIL, embedded as static markup.
const CURVED_MARQUEE_SVG: &str = r##"<svg viewBox="0 0 1000 300" width="100%" height="100%" preserveAspectRatio="none">
  <path id="curve" d="M 0 50 Q 500 250 1000 50" fill="transparent"></path>
  <text>
    <textPath href="#curve" startOffset="0%" style="font-size:80px;font-weight:900;fill:#133020;letter-spacing:10px;">
      LIFEWOOD  LIFEWOOD  LIFEWOOD  LIFEWOOD  LIFEWOOD  LIFEWOOD
      <animate attributeName="startOffset" from="0%" to="-100%" dur="20s" repeatCount="indefinite"></animate>
    </textPath>
  </text>
</svg>"##;

#[component]
pub fn CurvedMarquee() -> Element {
    rsx! {
        section { class: "curved-marquee",
            div {
                class: "curved-marquee-inner",
                dangerous_inner_html: CURVED_MARQUEE_SVG,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[&str] = &["Finland", "Brazil", "Japan"];

    #[test]
    fn stitched_track_is_the_item_list_cycled() {
        let track = stitch(ITEMS, 4_usize);
        assert_eq!(track.len(), 12);
        for (i, chip) in track.iter().enumerate() {
            assert_eq!(*chip, ITEMS[i % ITEMS.len()]);
        }
    }

    #[test]
    fn zero_repeats_render_nothing() {
        assert!(stitch(&["Australia"], 0).is_empty());
    }
}
