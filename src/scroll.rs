use crate::config::{NAVBAR_ELEVATE_OFFSET, PARALLAX_FADE_DISTANCE, PARALLAX_SPEED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable_height(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Reading progress in percent, 0 at the top and 100 at the bottom.
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scrollable_height();
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.offset / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(offset: f64) -> Self {
        Self {
            translate_y: offset * PARALLAX_SPEED,
            opacity: (1.0 - offset / PARALLAX_FADE_DISTANCE).clamp(0.0, 1.0),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarChrome {
    Resting,
    Elevated,
}

impl NavbarChrome {
    pub fn at(offset: f64) -> Self {
        if offset > NAVBAR_ELEVATE_OFFSET {
            NavbarChrome::Elevated
        } else {
            NavbarChrome::Resting
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarChrome::Elevated => "0 4px 20px rgba(0, 0, 0, 0.1)",
            NavbarChrome::Resting => "none",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavbarChrome::Elevated => "blur(20px) saturate(180%)",
            NavbarChrome::Resting => "blur(10px) saturate(180%)",
        }
    }
}
