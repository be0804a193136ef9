pub use kurbo::{Point, Rect, Size};

/// Horizontal space available to a line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineWidth {
    /// Lines wrap once they would exceed this many pixels.
    Bounded(f64),
    /// Lines never wrap.
    #[default]
    Unbounded,
}

impl LineWidth {
    /// Width as a float; `f64::INFINITY` when unbounded.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Bounded(w) => w,
            Self::Unbounded => f64::INFINITY,
        }
    }

    /// Bounded width, if any.
    pub fn bounded(self) -> Option<f64> {
        match self {
            Self::Bounded(w) => Some(w),
            Self::Unbounded => None,
        }
    }

    /// True when `right_edge` would not fit on a line of this width.
    pub fn exceeded_by(self, right_edge: f64) -> bool {
        match self {
            Self::Bounded(w) => right_edge > w,
            Self::Unbounded => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
