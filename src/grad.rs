use crate::{Color, ImageMut, Point, Rgba, Scalar, utils::clamp};
use std::cmp::Ordering;

/// Something that can produce a color for every canvas position
pub trait Paint {
    fn at(&self, point: Point) -> Rgba;
}

/// Specifies color at a particular parameter offset of the gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradStop {
    pub position: Scalar,
    pub color: Rgba,
}

impl GradStop {
    pub fn new(position: Scalar, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// List of all `GradStop` in the gradient
///
/// Stops are kept sorted by position. Two stops sharing a position encode a
/// hard band boundary: the parameter jumps from the first color to the second.
#[derive(Debug, Clone)]
pub struct GradStops {
    stops: Vec<GradStop>,
}

impl GradStops {
    pub fn new(mut stops: Vec<GradStop>) -> Self {
        stops.sort_by(|s0, s1| {
            s0.position
                .partial_cmp(&s1.position)
                .unwrap_or(Ordering::Greater)
        });
        if stops.is_empty() {
            stops.push(GradStop {
                position: 0.0,
                color: Rgba::opaque(0, 0, 0),
            });
        }
        Self { stops }
    }

    /// Color of the gradient at the parameter value `t`
    pub fn at(&self, t: Scalar) -> Rgba {
        let index = self.stops.binary_search_by(|stop| {
            if stop.position < t {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let index = match index {
            Ok(index) => index,
            Err(index) => index,
        };
        let size = self.stops.len();
        if index == 0 {
            self.stops[index].color
        } else if index == size {
            self.stops[size - 1].color
        } else {
            let p0 = &self.stops[index - 1];
            let p1 = &self.stops[index];
            let span = p1.position - p0.position;
            if span <= 0.0 {
                return p1.color;
            }
            let ratio = (t - p0.position) / span;
            p0.color.lerp(p1.color, ratio as f32)
        }
    }
}

impl From<Vec<GradStop>> for GradStops {
    fn from(stops: Vec<GradStop>) -> Self {
        Self::new(stops)
    }
}

/// Vertical banded gradient
///
/// Stops partition the vertical extent into contiguous bands, each channel is
/// interpolated by the fractional position inside the band.
#[derive(Debug, Clone)]
pub struct GradBands {
    extent: Scalar,
    stops: GradStops,
}

impl GradBands {
    pub fn new(extent: Scalar, stops: impl Into<GradStops>) -> Self {
        Self {
            extent,
            stops: stops.into(),
        }
    }
}

impl Paint for GradBands {
    fn at(&self, point: Point) -> Rgba {
        let t = clamp(point.y() / self.extent, 0.0, 1.0);
        self.stops.at(t)
    }
}

/// Diagonal gradient between two colors
///
/// Blend factor is `(x + y) / (2 * extent)` clamped to [0, 1], so the color
/// runs from `start` at the top-left corner to `end` at the bottom-right.
#[derive(Debug, Clone)]
pub struct GradDiagonal {
    extent: Scalar,
    start: Rgba,
    end: Rgba,
}

impl GradDiagonal {
    pub fn new(extent: Scalar, start: Rgba, end: Rgba) -> Self {
        Self { extent, start, end }
    }

    /// Blend factor at the given position
    pub fn factor(&self, point: Point) -> Scalar {
        clamp((point.x() + point.y()) / (2.0 * self.extent), 0.0, 1.0)
    }
}

impl Paint for GradDiagonal {
    fn at(&self, point: Point) -> Rgba {
        self.start.lerp(self.end, self.factor(point) as f32)
    }
}

/// Brighten pixels close to the rim of the gradient circle, inside an
/// angular span. The boost ramps linearly from zero at `inner * radius`
/// to the full amount at the rim.
#[derive(Debug, Clone, Copy)]
pub struct EdgeHighlight {
    /// Angular span `(from, to)` in radians that receives the highlight
    pub span: (Scalar, Scalar),
    /// Fraction of the radius where the ramp starts
    pub inner: Scalar,
    /// Maximum per-channel boost at the rim
    pub boost: f32,
}

/// Angular gradient around a center point
///
/// The blend factor is `(cos(angle - phase) + 1) / 2` where `angle` is the
/// direction from the center to the pixel.
#[derive(Debug, Clone)]
pub struct GradAngular {
    center: Point,
    radius: Scalar,
    start: Rgba,
    end: Rgba,
    phase: Scalar,
    highlight: Option<EdgeHighlight>,
}

impl GradAngular {
    pub fn new(center: Point, radius: Scalar, start: Rgba, end: Rgba, phase: Scalar) -> Self {
        Self {
            center,
            radius,
            start,
            end,
            phase,
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, highlight: EdgeHighlight) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

impl Paint for GradAngular {
    fn at(&self, point: Point) -> Rgba {
        let offset = point - self.center;
        let angle = offset.angle();
        let t = ((angle - self.phase).cos() + 1.0) / 2.0;
        let color = self.start.lerp(self.end, t as f32);
        match self.highlight {
            Some(highlight) => {
                let edge = self.radius * highlight.inner;
                let dist = offset.length();
                let (from, to) = highlight.span;
                if dist > edge && angle > from && angle < to {
                    let ramp = clamp((dist - edge) / (self.radius - edge), 0.0, 1.0);
                    brighten(color, highlight.boost * ramp as f32)
                } else {
                    color
                }
            }
            None => color,
        }
    }
}

fn brighten(color: Rgba, amount: f32) -> Rgba {
    let channel = |c: u8| (c as f32 + amount).min(255.0) as u8;
    Rgba::new(
        channel(color.red()),
        channel(color.green()),
        channel(color.blue()),
        color.alpha(),
    )
}

/// Part of the canvas a gradient fill is applied to
#[derive(Debug, Clone, Copy)]
pub enum Region {
    /// Every pixel of the canvas
    Full,
    /// Pixels within `radius` of `center`, everything else is left untouched
    Circle { center: Point, radius: Scalar },
}

/// Assign every in-region pixel the color of the paint at its position
pub fn gradient_fill(img: &mut impl ImageMut<Pixel = Rgba>, region: Region, paint: &impl Paint) {
    match region {
        Region::Full => {
            let mut pixels = img.iter_mut();
            loop {
                let (row, col) = pixels.position();
                match pixels.next() {
                    Some(pixel) => *pixel = paint.at(Point::new(col as Scalar, row as Scalar)),
                    None => break,
                }
            }
        }
        Region::Circle { center, radius } => {
            let width = img.width() as Scalar;
            let height = img.height() as Scalar;
            let col0 = clamp(center.x() - radius, 0.0, width) as usize;
            let col1 = clamp((center.x() + radius).ceil() + 1.0, 0.0, width) as usize;
            let row0 = clamp(center.y() - radius, 0.0, height) as usize;
            let row1 = clamp((center.y() + radius).ceil() + 1.0, 0.0, height) as usize;
            for row in row0..row1 {
                for col in col0..col1 {
                    let point = Point::new(col as Scalar, row as Scalar);
                    if point.dist(center) <= radius {
                        if let Some(pixel) = img.get_mut(row, col) {
                            *pixel = paint.at(point);
                        }
                    }
                }
            }
        }
    }
}
