use crate::{BBox, Color, EPSILON, ImageMut, Point, Rgba, Scalar, utils::clamp};

/// Geometric primitive a figure is built from
#[derive(Debug, Clone)]
pub enum Primitive {
    Rect(BBox),
    RoundedRect {
        bbox: BBox,
        radius: Scalar,
    },
    Ellipse(BBox),
    /// Elliptical arc inscribed in `bbox`. `start` and `end` are in degrees,
    /// measured clockwise from the positive x-axis at the box center, the
    /// sweep runs from `start` to `end` mod 360.
    Arc {
        bbox: BBox,
        start: Scalar,
        end: Scalar,
    },
    Line(Point, Point),
    Polygon(Vec<Point>),
}

impl Primitive {
    /// Bounding box of the primitive
    pub fn bbox(&self) -> BBox {
        match self {
            Primitive::Rect(bbox)
            | Primitive::RoundedRect { bbox, .. }
            | Primitive::Ellipse(bbox)
            | Primitive::Arc { bbox, .. } => *bbox,
            Primitive::Line(p0, p1) => BBox::new(*p0, *p1),
            Primitive::Polygon(points) => {
                let mut iter = points.iter();
                let first = iter.next().copied().unwrap_or(Point::new(0.0, 0.0));
                iter.fold(BBox::new(first, first), |bbox, p| bbox.extend(*p))
            }
        }
    }

    /// Point-in-shape test for primitives that have an interior
    fn contains(&self, point: Point) -> bool {
        match self {
            Primitive::Rect(bbox) => bbox.contains(point),
            Primitive::RoundedRect { bbox, radius } => rounded_contains(*bbox, *radius, point),
            Primitive::Ellipse(bbox) => ellipse_contains(*bbox, point),
            Primitive::Line(..) | Primitive::Arc { .. } => false,
            Primitive::Polygon(points) => polygon_contains(points, point),
        }
    }
}

/// Outline pen: color plus total line width
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Rgba,
    pub width: Scalar,
}

/// One drawable item: a primitive with an optional fill and an optional stroke
#[derive(Debug, Clone)]
pub struct Figure {
    pub prim: Primitive,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

impl Figure {
    pub fn fill(prim: Primitive, color: Rgba) -> Self {
        Self {
            prim,
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroke(prim: Primitive, color: Rgba, width: Scalar) -> Self {
        Self {
            prim,
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn with_stroke(mut self, color: Rgba, width: Scalar) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// Ordered list of figures, drawn back to front
///
/// Later figures always occlude earlier ones at overlapping pixels, there is
/// no z-index beyond the list order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    figures: Vec<Figure>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, figure: Figure) {
        self.figures.push(figure)
    }

    /// Draw every figure into the canvas, in order. The fill goes first,
    /// the outline on top of it.
    pub fn draw(&self, img: &mut impl ImageMut<Pixel = Rgba>) {
        for figure in self.figures.iter() {
            if let Some(color) = figure.fill {
                fill_primitive(img, &figure.prim, color);
            }
            if let Some(stroke) = figure.stroke {
                stroke_primitive(img, &figure.prim, stroke);
            }
        }
    }
}

fn fill_primitive(img: &mut impl ImageMut<Pixel = Rgba>, prim: &Primitive, color: Rgba) {
    match prim {
        // lines and arcs have no interior
        Primitive::Line(..) | Primitive::Arc { .. } => {}
        _ => scan(img, prim.bbox(), color, |point| prim.contains(point)),
    }
}

fn stroke_primitive(img: &mut impl ImageMut<Pixel = Rgba>, prim: &Primitive, stroke: Stroke) {
    let half = stroke.width.max(1.0) / 2.0;
    match prim {
        Primitive::Rect(bbox) => {
            let outer = bbox.inflate(half);
            let inner = bbox.inflate(-half);
            scan(img, outer, stroke.color, |p| {
                outer.contains(p) && !inner.contains(p)
            });
        }
        Primitive::RoundedRect { bbox, radius } => {
            let outer = bbox.inflate(half);
            let inner = bbox.inflate(-half);
            let outer_radius = radius + half;
            let inner_radius = (radius - half).max(0.0);
            scan(img, outer, stroke.color, |p| {
                rounded_contains(outer, outer_radius, p) && !rounded_contains(inner, inner_radius, p)
            });
        }
        Primitive::Ellipse(bbox) => {
            let outer = bbox.inflate(half);
            let inner = bbox.inflate(-half);
            scan(img, outer, stroke.color, |p| {
                ellipse_contains(outer, p) && !ellipse_contains(inner, p)
            });
        }
        Primitive::Line(p0, p1) => {
            let bbox = BBox::new(*p0, *p1).inflate(half + 1.0);
            scan(img, bbox, stroke.color, |p| {
                segment_dist(p, *p0, *p1) <= half
            });
        }
        Primitive::Polygon(points) => {
            if points.len() < 2 {
                return;
            }
            let bbox = prim.bbox().inflate(half + 1.0);
            scan(img, bbox, stroke.color, |p| {
                let mut j = points.len() - 1;
                for i in 0..points.len() {
                    if segment_dist(p, points[j], points[i]) <= half {
                        return true;
                    }
                    j = i;
                }
                false
            });
        }
        Primitive::Arc { bbox, start, end } => stroke_arc(img, *bbox, *start, *end, stroke),
    }
}

/// Scan the intersection of `bbox` with the canvas and blend `color` into
/// every pixel for which `test` holds
fn scan(
    img: &mut impl ImageMut<Pixel = Rgba>,
    bbox: BBox,
    color: Rgba,
    test: impl Fn(Point) -> bool,
) {
    let (rows, cols) = clip(img.width(), img.height(), bbox);
    for row in rows {
        for col in cols.clone() {
            let point = Point::new(col as Scalar, row as Scalar);
            if test(point) {
                blend_pixel(img, row, col, color);
            }
        }
    }
}

fn clip(
    width: usize,
    height: usize,
    bbox: BBox,
) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let col0 = clamp(bbox.x().floor(), 0.0, width as Scalar) as usize;
    let col1 = clamp(bbox.max().x().ceil() + 1.0, 0.0, width as Scalar) as usize;
    let row0 = clamp(bbox.y().floor(), 0.0, height as Scalar) as usize;
    let row1 = clamp(bbox.max().y().ceil() + 1.0, 0.0, height as Scalar) as usize;
    (row0..row1, col0..col1)
}

fn blend_pixel(img: &mut impl ImageMut<Pixel = Rgba>, row: usize, col: usize, color: Rgba) {
    if let Some(pixel) = img.get_mut(row, col) {
        *pixel = pixel.blend_over(color);
    }
}

fn rounded_contains(bbox: BBox, radius: Scalar, point: Point) -> bool {
    if !bbox.contains(point) {
        return false;
    }
    let radius = clamp(radius, 0.0, bbox.width().min(bbox.height()) / 2.0);
    if radius <= 0.0 {
        return true;
    }
    let x0 = bbox.x() + radius;
    let x1 = bbox.max().x() - radius;
    let y0 = bbox.y() + radius;
    let y1 = bbox.max().y() - radius;
    // inside the cross part of the box, outside the corner squares
    if (point.x() >= x0 && point.x() <= x1) || (point.y() >= y0 && point.y() <= y1) {
        return true;
    }
    // corner squares are rounded by quarter circles
    let cx = if point.x() < x0 { x0 } else { x1 };
    let cy = if point.y() < y0 { y0 } else { y1 };
    point.dist(Point::new(cx, cy)) <= radius
}

fn ellipse_contains(bbox: BBox, point: Point) -> bool {
    let rx = bbox.width() / 2.0;
    let ry = bbox.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let center = bbox.center();
    let dx = (point.x() - center.x()) / rx;
    let dy = (point.y() - center.y()) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Even-odd crossing test
fn polygon_contains(points: &[Point], point: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y() > point.y()) != (pj.y() > point.y()) {
            let x = pi.x() + (point.y() - pi.y()) / (pj.y() - pi.y()) * (pj.x() - pi.x());
            if point.x() < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance from `p` to the segment `p0..p1`
fn segment_dist(p: Point, p0: Point, p1: Point) -> Scalar {
    let dir = p1 - p0;
    let len2 = dir.dot(dir);
    if len2 <= EPSILON {
        return p.dist(p0);
    }
    let t = clamp((p - p0).dot(dir) / len2, 0.0, 1.0);
    p.dist(p0 + t * dir)
}

/// Stroke an elliptical arc by stamping disks along the parameterized
/// boundary. A coverage mask keeps overlapping stamps from blending the
/// same pixel twice.
fn stroke_arc(
    img: &mut impl ImageMut<Pixel = Rgba>,
    bbox: BBox,
    start: Scalar,
    end: Scalar,
    stroke: Stroke,
) {
    let rx = bbox.width() / 2.0;
    let ry = bbox.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let mut sweep = (end - start).rem_euclid(360.0);
    if sweep == 0.0 {
        if start == end {
            return;
        }
        sweep = 360.0;
    }

    let half = stroke.width.max(1.0) / 2.0;
    let center = bbox.center();
    let (rows, cols) = clip(img.width(), img.height(), bbox.inflate(half + 1.0));
    if rows.is_empty() || cols.is_empty() {
        return;
    }
    let mask_width = cols.end - cols.start;
    let mut mask = vec![false; rows.len() * mask_width];

    // step fine enough that consecutive stamps overlap
    let steps = (sweep.to_radians() * rx.max(ry) * 2.0).ceil().max(8.0) as usize;
    for step in 0..=steps {
        let theta = (start + sweep * step as Scalar / steps as Scalar).to_radians();
        let cx = center.x() + rx * theta.cos();
        let cy = center.y() + ry * theta.sin();
        let row_lo = clamp((cy - half).floor(), rows.start as Scalar, rows.end as Scalar) as usize;
        let row_hi = clamp((cy + half).ceil() + 1.0, rows.start as Scalar, rows.end as Scalar) as usize;
        let col_lo = clamp((cx - half).floor(), cols.start as Scalar, cols.end as Scalar) as usize;
        let col_hi = clamp((cx + half).ceil() + 1.0, cols.start as Scalar, cols.end as Scalar) as usize;
        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let dx = col as Scalar - cx;
                let dy = row as Scalar - cy;
                if dx * dx + dy * dy <= half * half {
                    mask[(row - rows.start) * mask_width + (col - cols.start)] = true;
                }
            }
        }
    }

    for row in rows.clone() {
        for col in cols.clone() {
            if mask[(row - rows.start) * mask_width + (col - cols.start)] {
                blend_pixel(img, row, col, stroke.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Canvas, Image};

    const BG: Rgba = Rgba::opaque(0, 0, 0);
    const FG: Rgba = Rgba::opaque(255, 255, 255);

    fn canvas(size: usize) -> Canvas {
        Canvas::filled(size, BG)
    }

    #[test]
    fn test_fill_rect() {
        let mut img = canvas(16);
        let mut scene = Scene::new();
        scene.push(Figure::fill(
            Primitive::Rect(BBox::new((4.0, 4.0), (8.0, 6.0))),
            FG,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(5, 5), Some(&FG));
        assert_eq!(img.get(4, 8), Some(&FG));
        assert_eq!(img.get(5, 9), Some(&BG));
        assert_eq!(img.get(7, 5), Some(&BG));
    }

    #[test]
    fn test_draw_order_occludes() {
        let mut img = canvas(8);
        let red = Rgba::opaque(255, 0, 0);
        let blue = Rgba::opaque(0, 0, 255);
        let mut scene = Scene::new();
        scene.push(Figure::fill(
            Primitive::Rect(BBox::new((0.0, 0.0), (7.0, 7.0))),
            red,
        ));
        scene.push(Figure::fill(
            Primitive::Rect(BBox::new((2.0, 2.0), (5.0, 5.0))),
            blue,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(3, 3), Some(&blue));
        assert_eq!(img.get(1, 1), Some(&red));
    }

    #[test]
    fn test_semi_transparent_fill_blends() {
        let mut img = canvas(4);
        let mut scene = Scene::new();
        scene.push(Figure::fill(
            Primitive::Rect(BBox::new((0.0, 0.0), (3.0, 3.0))),
            Rgba::new(255, 255, 255, 128),
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(1, 1).unwrap().to_rgb(), [128, 128, 128]);
    }

    #[test]
    fn test_fill_ellipse() {
        let mut img = canvas(16);
        let mut scene = Scene::new();
        scene.push(Figure::fill(
            Primitive::Ellipse(BBox::new((2.0, 2.0), (12.0, 12.0))),
            FG,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(7, 7), Some(&FG));
        // bbox corner lies outside the inscribed circle
        assert_eq!(img.get(2, 2), Some(&BG));
        assert_eq!(img.get(7, 2), Some(&FG));
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut img = canvas(32);
        let mut scene = Scene::new();
        scene.push(Figure::fill(
            Primitive::RoundedRect {
                bbox: BBox::new((0.0, 0.0), (30.0, 30.0)),
                radius: 10.0,
            },
            FG,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(0, 0), Some(&BG));
        assert_eq!(img.get(0, 15), Some(&FG));
        assert_eq!(img.get(15, 0), Some(&FG));
        assert_eq!(img.get(15, 15), Some(&FG));
    }

    #[test]
    fn test_fill_polygon() {
        let mut img = canvas(16);
        let triangle = vec![
            Point::new(8.0, 1.0),
            Point::new(14.0, 14.0),
            Point::new(2.0, 14.0),
        ];
        let mut scene = Scene::new();
        scene.push(Figure::fill(Primitive::Polygon(triangle), FG));
        scene.draw(&mut img);
        assert_eq!(img.get(10, 8), Some(&FG));
        assert_eq!(img.get(2, 2), Some(&BG));
        assert_eq!(img.get(2, 14), Some(&BG));
    }

    #[test]
    fn test_stroke_line() {
        let mut img = canvas(16);
        let mut scene = Scene::new();
        scene.push(Figure::stroke(
            Primitive::Line(Point::new(2.0, 8.0), Point::new(13.0, 8.0)),
            FG,
            2.0,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(8, 7), Some(&FG));
        assert_eq!(img.get(8, 2), Some(&FG));
        // well away from the segment
        assert_eq!(img.get(3, 7), Some(&BG));
        assert_eq!(img.get(8, 15), Some(&BG));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut img = canvas(16);
        let mut scene = Scene::new();
        scene.push(Figure::stroke(
            Primitive::Rect(BBox::new((2.0, 2.0), (13.0, 13.0))),
            FG,
            2.0,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(2, 7), Some(&FG));
        assert_eq!(img.get(13, 7), Some(&FG));
        assert_eq!(img.get(7, 7), Some(&BG));
    }

    #[test]
    fn test_arc_sweep_selects_half() {
        let mut img = canvas(32);
        let bbox = BBox::new((6.0, 6.0), (26.0, 26.0));
        let mut scene = Scene::new();
        // clockwise from the positive x-axis: 0..180 passes through the
        // bottom of the circle (y grows downwards)
        scene.push(Figure::stroke(
            Primitive::Arc {
                bbox,
                start: 0.0,
                end: 180.0,
            },
            FG,
            2.0,
        ));
        scene.draw(&mut img);
        assert_eq!(img.get(26, 16), Some(&FG));
        assert_eq!(img.get(6, 16), Some(&BG));
    }

    #[test]
    fn test_arc_wraps_mod_360() {
        let mut img = canvas(32);
        let bbox = BBox::new((6.0, 6.0), (26.0, 26.0));
        let mut scene = Scene::new();
        scene.push(Figure::stroke(
            Primitive::Arc {
                bbox,
                start: 180.0,
                end: 0.0,
            },
            FG,
            2.0,
        ));
        scene.draw(&mut img);
        // 180 sweeps through 270 (the top) to 360
        assert_eq!(img.get(6, 16), Some(&FG));
        assert_eq!(img.get(26, 16), Some(&BG));
    }

    #[test]
    fn test_fill_and_stroke_together() {
        let mut img = canvas(16);
        let red = Rgba::opaque(255, 0, 0);
        let mut scene = Scene::new();
        scene.push(
            Figure::fill(Primitive::Rect(BBox::new((3.0, 3.0), (12.0, 12.0))), FG)
                .with_stroke(red, 2.0),
        );
        scene.draw(&mut img);
        assert_eq!(img.get(7, 7), Some(&FG));
        assert_eq!(img.get(3, 7), Some(&red));
    }
}
