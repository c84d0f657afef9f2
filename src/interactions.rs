pub const TILT_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const HOVER_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
pub const RIPPLE_CLASS: &str = "ripple";

/// Pointer position relative to an element's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerInBox {
    pub fn new(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(p: PointerInBox) -> Self {
        let center_x = p.width / 2.0;
        let center_y = p.height / 2.0;
        Self {
            rotate_x: (p.y - center_y) / 10.0,
            rotate_y: (center_x - p.x) / 10.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02, 1.02, 1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Square ripple centred on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn from_pointer(p: PointerInBox) -> Self {
        let size = p.width.max(p.height);
        Self {
            size,
            left: p.x - size / 2.0,
            top: p.y - size / 2.0,
        }
    }
}

/// `animation` and `animation-delay` for the nth floating element.
pub fn float_style(index: usize) -> (&'static str, String) {
    ("float 3s ease-in-out infinite", format!("{}s", index as f64 * 0.5))
}

/// True for links that point somewhere on this page.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_centre_is_flat() {
        let tilt = Tilt::from_pointer(PointerInBox::new(150.0, 100.0, 50.0, 50.0, 200.0, 100.0));
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn test_tilt_corner() {
        let tilt = Tilt::from_pointer(PointerInBox::new(0.0, 0.0, 0.0, 0.0, 200.0, 100.0));
        assert_eq!(tilt, Tilt { rotate_x: -5.0, rotate_y: 10.0 });
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = Ripple::from_pointer(PointerInBox::new(130.0, 40.0, 100.0, 20.0, 120.0, 40.0));
        assert_eq!(ripple, Ripple { size: 120.0, left: -30.0, top: -40.0 });
    }

    #[test]
    fn test_float_delay() {
        assert_eq!(float_style(0).1, "0s");
        assert_eq!(float_style(3).1, "1.5s");
    }

    #[test]
    fn test_in_page_anchor() {
        assert!(is_in_page_anchor("#events"));
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("/about#team"));
    }
}
