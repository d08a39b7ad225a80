/// Bounding box with top-left origin coordinate system.
///
/// Coordinates are in PDF points:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Whether the vertical extents of two boxes overlap.
    pub fn overlaps_vertically(&self, other: &BBox) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// Clamp this box to lie within `bounds`.
    pub fn clamped_to(&self, bounds: &BBox) -> BBox {
        BBox {
            x0: self.x0.max(bounds.x0),
            top: self.top.max(bounds.top),
            x1: self.x1.min(bounds.x1),
            bottom: self.bottom.min(bounds.bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BBox::new(10.0, 20.0, 50.0, 60.0);
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 40.0);
        assert_eq!(bbox.mid_x(), 30.0);
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(10.0, 20.0, 30.0, 40.0);
        let b = BBox::new(5.0, 25.0, 35.0, 45.0);
        let u = a.union(&b);
        assert_eq!(u, BBox::new(5.0, 20.0, 35.0, 45.0));
    }

    #[test]
    fn test_vertical_overlap() {
        let a = BBox::new(0.0, 10.0, 100.0, 50.0);
        let b = BBox::new(0.0, 40.0, 100.0, 90.0);
        let c = BBox::new(0.0, 50.0, 100.0, 90.0);
        assert!(a.overlaps_vertically(&b));
        assert!(!a.overlaps_vertically(&c));
    }

    #[test]
    fn test_clamped_to() {
        let page = BBox::new(0.0, 0.0, 300.0, 800.0);
        let r = BBox::new(-5.0, -10.0, 320.0, 900.0).clamped_to(&page);
        assert_eq!(r, page);
    }
}
