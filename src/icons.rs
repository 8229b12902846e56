//! The logo generators: each builds a fresh canvas for the requested size,
//! lays a gradient background, composes the figures on top and hands the
//! result to the exporter.

use crate::{
    BBox, Canvas, EdgeHighlight, Emitted, ExportOptions, Figure, FontBook, GradAngular, GradBands,
    GradDiagonal, GradStop, PI, Point, Primitive, Region, Rgba, Scalar, Scene, gradient_fill,
    write_png,
};
use std::path::Path;

const WHITE: Rgba = Rgba::opaque(255, 255, 255);
const BLACK: Rgba = Rgba::opaque(0, 0, 0);

/// One of the logo designs this tool can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// White microphone outline on a magenta-to-cyan gradient disc
    Microphone,
    /// Blue gradient disc with a capsule microphone and ripple sound waves
    BlueMicrophone,
    /// Dark capsule microphone with a yellow AI badge and sound bars
    AiBadge,
    /// Collage of the app features on a diagonal purple gradient
    Feature,
}

impl IconStyle {
    pub const ALL: [IconStyle; 4] = [
        IconStyle::Microphone,
        IconStyle::BlueMicrophone,
        IconStyle::AiBadge,
        IconStyle::Feature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IconStyle::Microphone => "microphone",
            IconStyle::BlueMicrophone => "blue",
            IconStyle::AiBadge => "ai",
            IconStyle::Feature => "feature",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "microphone" | "mic" => Some(IconStyle::Microphone),
            "blue" => Some(IconStyle::BlueMicrophone),
            "ai" => Some(IconStyle::AiBadge),
            "feature" => Some(IconStyle::Feature),
            _ => None,
        }
    }

    /// File names and pixel sizes this style emits
    pub fn outputs(self) -> &'static [(&'static str, usize)] {
        match self {
            IconStyle::Microphone | IconStyle::BlueMicrophone => &[
                ("icon.png", 512),
                ("favicon.png", 64),
                ("adaptive-icon.png", 1024),
                ("splash.png", 1024),
            ],
            IconStyle::AiBadge => &[
                ("icon.png", 512),
                ("favicon.png", 64),
                ("adaptive-icon.png", 1024),
            ],
            IconStyle::Feature => &[
                ("icon.png", 1024),
                ("adaptive-icon.png", 1024),
                ("favicon.png", 48),
            ],
        }
    }

    pub fn options(self) -> ExportOptions {
        ExportOptions {
            optimize: matches!(self, IconStyle::Feature),
        }
    }
}

/// Draw one style at one size
pub fn render(style: IconStyle, size: usize, fonts: &FontBook) -> Canvas {
    let span = tracing::debug_span!("[render]", style = style.name(), size);
    let _guard = span.enter();
    match style {
        IconStyle::Microphone => microphone(size),
        IconStyle::BlueMicrophone => blue_microphone(size),
        IconStyle::AiBadge => ai_badge(size, fonts),
        IconStyle::Feature => feature(size),
    }
}

/// Render and write every output of the style into `dir`.
///
/// Each output is independent: a failed write is recorded in the returned
/// list and the remaining sizes are still emitted.
pub fn generate(style: IconStyle, dir: &Path, fonts: &FontBook) -> Vec<Emitted> {
    style
        .outputs()
        .iter()
        .map(|(name, size)| {
            let canvas = render(style, *size, fonts);
            let path = dir.join(name);
            let result = write_png(&canvas, &path, style.options());
            Emitted {
                path,
                size: *size,
                result,
            }
        })
        .collect()
}

fn microphone(size: usize) -> Canvas {
    let s = size as Scalar;
    let center = Point::new(s / 2.0, s / 2.0);
    let mut img = Canvas::filled(size, BLACK);

    // disc with three vertical bands: magenta, purple to indigo, indigo to
    // cyan, with a hard jump between the first two
    let stops = vec![
        GradStop::new(0.0, Rgba::opaque(255, 0, 255)),
        GradStop::new(1.0 / 3.0, Rgba::opaque(178, 0, 204)),
        GradStop::new(1.0 / 3.0, Rgba::opaque(128, 0, 128)),
        GradStop::new(2.0 / 3.0, Rgba::opaque(64, 0, 255)),
        GradStop::new(1.0, Rgba::opaque(0, 255, 255)),
    ];
    gradient_fill(
        &mut img,
        Region::Circle {
            center,
            radius: s / 2.0 - 10.0,
        },
        &GradBands::new(s, stops),
    );

    let line_width = (s / 100.0).max(3.0);
    let mic_width = s / 3.0;
    let mic_height = s / 2.5;
    let mic_x = center.x() - mic_width / 2.0;
    let mic_y = center.y() - mic_height / 2.0;

    let grille_width = mic_width;
    let grille_height = mic_height / 2.0;
    let (grille_x, grille_y) = (mic_x, mic_y);

    let mut scene = Scene::new();
    scene.push(Figure::stroke(
        Primitive::RoundedRect {
            bbox: BBox::new(
                (grille_x, grille_y),
                (grille_x + grille_width, grille_y + grille_height),
            ),
            radius: grille_width / 8.0,
        },
        WHITE,
        line_width,
    ));

    // perforation dots, only inside the flat part of the grille
    let dot_size = (s / 80.0).max(2.0);
    let dot_spacing = grille_width / 6.0;
    let margin_x = grille_width / 8.0;
    let margin_y = grille_height / 8.0;
    for i in 0..5 {
        for j in 0..5 {
            let dot_x = grille_x + dot_spacing + i as Scalar * dot_spacing;
            let dot_y = grille_y + dot_spacing + j as Scalar * (grille_height / 6.0);
            if dot_x > grille_x + margin_x
                && dot_x < grille_x + grille_width - margin_x
                && dot_y > grille_y + margin_y
                && dot_y < grille_y + grille_height - margin_y
            {
                scene.push(Figure::fill(
                    Primitive::Ellipse(BBox::new(
                        (dot_x - dot_size, dot_y - dot_size),
                        (dot_x + dot_size, dot_y + dot_size),
                    )),
                    WHITE,
                ));
            }
        }
    }

    // U shaped mount under the grille
    let mount_width = grille_width / 1.5;
    let mount_height = grille_height / 2.0;
    let mount_x = center.x() - mount_width / 2.0;
    let mount_y = grille_y + grille_height;
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(mount_x, mount_y),
            Point::new(mount_x, mount_y + mount_height),
        ),
        WHITE,
        line_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Arc {
            bbox: BBox::new(
                (mount_x, mount_y + mount_height - mount_width / 2.0),
                (mount_x + mount_width, mount_y + mount_height + mount_width / 2.0),
            ),
            start: 180.0,
            end: 0.0,
        },
        WHITE,
        line_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(mount_x + mount_width, mount_y),
            Point::new(mount_x + mount_width, mount_y + mount_height),
        ),
        WHITE,
        line_width,
    ));

    // stand and base
    let stand_y = mount_y + mount_height;
    let stand_height = s / 6.0;
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(center.x(), stand_y),
            Point::new(center.x(), stand_y + stand_height),
        ),
        WHITE,
        line_width,
    ));
    let base_width = s / 4.0;
    let base_height = s / 20.0;
    let base_x = center.x() - base_width / 2.0;
    let base_y = stand_y + stand_height;
    scene.push(Figure::stroke(
        Primitive::Ellipse(BBox::new(
            (base_x, base_y),
            (base_x + base_width, base_y + base_height),
        )),
        WHITE,
        line_width,
    ));

    // sound wave bars: short, medium, short, mirrored on both sides
    let wave_spacing = s / 25.0;
    let wave_width = (s / 150.0).max(2.0);
    let wave_heights = [grille_height / 3.0, grille_height / 1.5, grille_height / 3.0];
    for (i, height) in wave_heights.into_iter().enumerate() {
        let offset = i as Scalar * (wave_spacing + wave_width);
        let left_x = grille_x - s / 8.0 - offset;
        let right_x = grille_x + grille_width + s / 8.0 + offset;
        let wave_y = center.y() - height / 2.0;
        for x in [left_x, right_x] {
            scene.push(Figure::fill(
                Primitive::Rect(BBox::new((x, wave_y), (x + wave_width, wave_y + height))),
                WHITE,
            ));
        }
    }

    scene.draw(&mut img);
    img
}

fn blue_microphone(size: usize) -> Canvas {
    let s = size as Scalar;
    let center = Point::new(s / 2.0, s / 2.0);
    // small disc so the ripples get room
    let radius = s / 5.0;
    let sky_blue = Rgba::opaque(135, 206, 250);
    let royal_blue = Rgba::opaque(65, 105, 225);
    let mut img = Canvas::filled(size, WHITE);

    // light towards the upper left, dark towards the lower right, with a
    // subtle rim highlight
    let paint = GradAngular::new(center, radius, sky_blue, royal_blue, PI / 4.0).with_highlight(
        EdgeHighlight {
            span: (-PI / 2.0, 0.0),
            inner: 0.85,
            boost: 30.0,
        },
    );
    gradient_fill(&mut img, Region::Circle { center, radius }, &paint);

    let line_width = (s / 80.0).max(4.0);
    let mic_width = radius / 1.2;
    let mic_height = radius / 1.5;
    let mic_x = center.x() - mic_width / 2.0;
    let mic_y = center.y() - mic_height / 2.0;

    let mut scene = Scene::new();

    // capsule head
    let capsule_height = mic_height / 2.0;
    scene.push(Figure::stroke(
        Primitive::RoundedRect {
            bbox: BBox::new((mic_x, mic_y), (mic_x + mic_width, mic_y + capsule_height)),
            radius: capsule_height / 2.0,
        },
        WHITE,
        line_width,
    ));

    // U shaped neck
    let neck_width = mic_width / 2.0;
    let neck_x = center.x() - neck_width / 2.0;
    let neck_y = mic_y + capsule_height;
    let neck_height = mic_height / 4.0;
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(neck_x, neck_y),
            Point::new(neck_x, neck_y + neck_height),
        ),
        WHITE,
        line_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Arc {
            bbox: BBox::new(
                (neck_x, neck_y + neck_height - neck_width / 2.0),
                (neck_x + neck_width, neck_y + neck_height + neck_width / 2.0),
            ),
            start: 180.0,
            end: 0.0,
        },
        WHITE,
        line_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(neck_x + neck_width, neck_y),
            Point::new(neck_x + neck_width, neck_y + neck_height),
        ),
        WHITE,
        line_width,
    ));

    // base bar
    let base_y = neck_y + neck_height;
    let base_width = mic_width / 1.5;
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(center.x() - base_width / 2.0, base_y),
            Point::new(center.x() + base_width / 2.0, base_y),
        ),
        WHITE,
        line_width,
    ));

    // ripple arcs on both sides, thinning as they spread; the bounding
    // boxes are clamped to the canvas which squashes the outer ripples
    let wave_spacing = radius / 2.5;
    for i in 0..8 {
        let wave_radius = radius + (i + 1) as Scalar * wave_spacing;
        let wave_width = (line_width * (1.0 - i as Scalar * 0.12)).max(2.0);
        scene.push(Figure::stroke(
            Primitive::Arc {
                bbox: BBox::new(
                    ((center.x() - wave_radius).max(0.0), center.y() - wave_radius),
                    (center.x(), center.y() + wave_radius),
                ),
                start: 90.0,
                end: 270.0,
            },
            royal_blue,
            wave_width,
        ));
        scene.push(Figure::stroke(
            Primitive::Arc {
                bbox: BBox::new(
                    (center.x(), center.y() - wave_radius),
                    ((center.x() + wave_radius).min(s), center.y() + wave_radius),
                ),
                start: 270.0,
                end: 90.0,
            },
            royal_blue,
            wave_width,
        ));
    }

    scene.draw(&mut img);
    img
}

fn ai_badge(size: usize, fonts: &FontBook) -> Canvas {
    let s = size as Scalar;
    let center = Point::new(s / 2.0, s / 2.0);
    let yellow = Rgba::opaque(255, 235, 0);
    let mut img = Canvas::filled(size, Rgba::new(0, 0, 0, 0));

    let mut scene = Scene::new();
    scene.push(Figure::fill(
        Primitive::Rect(BBox::new((0.0, 0.0), (s, s))),
        BLACK,
    ));

    // capsule shaped microphone body: two ellipse caps over a rectangle
    let mic_width = s / 3.0;
    let mic_height = s / 2.0;
    let mic_x = center.x() - mic_width / 2.0;
    let mic_y = center.y() - mic_height / 2.0;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (mic_x, mic_y),
            (mic_x + mic_width, mic_y + mic_height / 4.0),
        )),
        Rgba::opaque(30, 30, 30),
    ));
    scene.push(Figure::fill(
        Primitive::Rect(BBox::new(
            (mic_x, mic_y + mic_height / 8.0),
            (mic_x + mic_width, mic_y + 7.0 * mic_height / 8.0),
        )),
        Rgba::opaque(20, 20, 20),
    ));
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (mic_x, mic_y + 3.0 * mic_height / 4.0),
            (mic_x + mic_width, mic_y + mic_height),
        )),
        Rgba::opaque(30, 30, 30),
    ));

    // bright badge in the middle
    let badge_size = mic_width / 2.0;
    scene.push(Figure::fill(
        Primitive::Rect(BBox::new(
            (center.x() - badge_size / 2.0, center.y() - badge_size / 2.0),
            (center.x() + badge_size / 2.0, center.y() + badge_size / 2.0),
        )),
        yellow,
    ));
    scene.draw(&mut img);

    // bold label, centered on the badge
    let font_size = (badge_size / 2.0).max(20.0) as f32;
    let (text_width, text_height) = fonts.measure("AI", font_size);
    fonts.draw(
        &mut img,
        "AI",
        center.x() - text_width / 2.0,
        center.y() - text_height / 2.0,
        font_size,
        BLACK,
    );

    let mut scene = Scene::new();

    // sound bars: medium, tall, medium on each side
    let bar_width = s / 20.0;
    let bar_spacing = s / 30.0;
    let bar_heights = [mic_height / 3.0, mic_height / 2.0, mic_height / 3.0];
    for (i, height) in bar_heights.into_iter().enumerate() {
        let offset = i as Scalar * (bar_width + bar_spacing);
        let left_x = mic_x - bar_width - bar_spacing - offset;
        let right_x = mic_x + mic_width + bar_spacing + offset;
        let bar_y = center.y() - height / 2.0;
        for x in [left_x, right_x] {
            scene.push(Figure::fill(
                Primitive::Rect(BBox::new((x, bar_y), (x + bar_width, bar_y + height))),
                yellow,
            ));
        }
    }

    // stand arm and base
    let stand_y = mic_y + mic_height;
    let stand_height = s / 4.0;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (center.x() - s / 12.0, stand_y),
            (center.x() + s / 12.0, stand_y + stand_height),
        )),
        yellow,
    ));
    let base_radius = s / 6.0;
    let base_y = stand_y + stand_height;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (center.x() - base_radius, base_y),
            (center.x() + base_radius, base_y + base_radius / 2.0),
        )),
        yellow,
    ));

    scene.draw(&mut img);
    img
}

fn feature(size: usize) -> Canvas {
    let s = size as Scalar;
    let center = Point::new(s / 2.0, s / 2.0);
    let primary = Rgba::opaque(102, 126, 234);
    let secondary = Rgba::opaque(118, 75, 162);
    let mut img = Canvas::filled(size, Rgba::new(0, 0, 0, 0));

    gradient_fill(
        &mut img,
        Region::Full,
        &GradDiagonal::new(s, primary, secondary),
    );

    let mut scene = Scene::new();

    // translucent inner border for depth
    let corner_radius = s * 0.18;
    let padding = s * 0.08;
    scene.push(
        Figure::fill(
            Primitive::RoundedRect {
                bbox: BBox::new((padding, padding), (s - padding, s - padding)),
                radius: corner_radius,
            },
            Rgba::new(255, 255, 255, 15),
        )
        .with_stroke(Rgba::new(255, 255, 255, 40), s * 0.01),
    );

    // microphone, center top
    let mic_size = s * 0.15;
    let mic = Point::new(center.x(), center.y() - s * 0.15);
    let body_width = mic_size * 0.4;
    let body_height = mic_size * 0.6;
    let body_y = mic.y() - body_height / 2.0;
    scene.push(Figure::fill(
        Primitive::RoundedRect {
            bbox: BBox::new(
                (mic.x() - body_width / 2.0, body_y),
                (mic.x() + body_width / 2.0, body_y + body_height),
            ),
            radius: body_width * 0.2,
        },
        WHITE,
    ));
    let stand_width = body_width * 0.6;
    let stand_height = mic_size * 0.2;
    scene.push(Figure::fill(
        Primitive::Rect(BBox::new(
            (mic.x() - stand_width / 2.0, body_y + body_height),
            (mic.x() + stand_width / 2.0, body_y + body_height + stand_height),
        )),
        WHITE,
    ));
    for i in 0..3 {
        let line_y = body_y + body_height * 0.2 + i as Scalar * body_height * 0.3;
        scene.push(Figure::stroke(
            Primitive::Line(
                Point::new(mic.x() - body_width * 0.35, line_y),
                Point::new(mic.x() + body_width * 0.35, line_y),
            ),
            Rgba::new(102, 126, 234, 200),
            s * 0.008,
        ));
    }

    // dotted sound waves around the microphone
    for i in 0..3 {
        let wave_radius = mic_size * 0.6 + i as Scalar * s * 0.08;
        let dot = Rgba::new(255, 255, 255, (180 - i * 40) as u8);
        for angle in (-60..240).step_by(10) {
            if angle % 20 != 0 {
                continue;
            }
            let rad = (angle as Scalar).to_radians();
            let x = mic.x() + wave_radius * rad.cos();
            let y = mic.y() + wave_radius * 0.6 * rad.sin();
            scene.push(Figure::fill(
                Primitive::Ellipse(BBox::new((x - s * 0.01, y - s * 0.01), (x + s * 0.01, y + s * 0.01))),
                dot,
            ));
        }
    }

    // eye, left side
    let eye_size = s * 0.2;
    let eye = Point::new(center.x() - s * 0.25, center.y() + s * 0.1);
    let eye_width = eye_size * 0.8;
    let eye_height = eye_size * 0.5;
    scene.push(
        Figure::fill(
            Primitive::Ellipse(BBox::new(
                (eye.x() - eye_width / 2.0, eye.y() - eye_height / 2.0),
                (eye.x() + eye_width / 2.0, eye.y() + eye_height / 2.0),
            )),
            Rgba::new(255, 255, 255, 30),
        )
        .with_stroke(WHITE, s * 0.015),
    );
    let pupil_radius = eye_size * 0.15;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (eye.x() - pupil_radius, eye.y() - pupil_radius),
            (eye.x() + pupil_radius, eye.y() + pupil_radius),
        )),
        WHITE,
    ));
    let highlight_radius = pupil_radius * 0.4;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (
                eye.x() - highlight_radius * 0.5,
                eye.y() - highlight_radius * 0.8,
            ),
            (
                eye.x() + highlight_radius * 0.5,
                eye.y() - highlight_radius * 0.3,
            ),
        )),
        Rgba::new(255, 255, 255, 200),
    ));

    // artist palette, right side
    let palette_size = s * 0.18;
    let palette = Point::new(center.x() + s * 0.25, center.y() + s * 0.1);
    let palette_width = palette_size * 0.7;
    let palette_height = palette_size * 0.5;
    scene.push(
        Figure::fill(
            Primitive::RoundedRect {
                bbox: BBox::new(
                    (
                        palette.x() - palette_width / 2.0,
                        palette.y() - palette_height / 2.0,
                    ),
                    (
                        palette.x() + palette_width / 2.0,
                        palette.y() + palette_height / 2.0,
                    ),
                ),
                radius: palette_width * 0.1,
            },
            Rgba::opaque(255, 193, 7),
        )
        .with_stroke(WHITE, s * 0.01),
    );
    // thumb hole, re-filled with the background primary
    let hole_radius = palette_size * 0.12;
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (
                palette.x() - palette_width * 0.3 - hole_radius,
                palette.y() - hole_radius,
            ),
            (
                palette.x() - palette_width * 0.3 + hole_radius,
                palette.y() + hole_radius,
            ),
        )),
        primary,
    ));
    let dabs = [
        Rgba::opaque(255, 87, 34),
        Rgba::opaque(76, 175, 80),
        Rgba::opaque(33, 150, 243),
    ];
    for (i, color) in dabs.into_iter().enumerate() {
        let dab_x = palette.x() + palette_width * 0.15 + i as Scalar * palette_width * 0.15;
        let dab_y = palette.y() - palette_height * 0.15;
        let dab_radius = palette_size * 0.08;
        scene.push(Figure::fill(
            Primitive::Ellipse(BBox::new(
                (dab_x - dab_radius, dab_y - dab_radius),
                (dab_x + dab_radius, dab_y + dab_radius),
            )),
            color,
        ));
    }

    // camera, bottom center
    let camera_size = s * 0.12;
    let camera = Point::new(center.x(), center.y() + s * 0.3);
    let camera_width = camera_size * 0.7;
    let camera_height = camera_size * 0.5;
    scene.push(
        Figure::fill(
            Primitive::RoundedRect {
                bbox: BBox::new(
                    (
                        camera.x() - camera_width / 2.0,
                        camera.y() - camera_height / 2.0,
                    ),
                    (
                        camera.x() + camera_width / 2.0,
                        camera.y() + camera_height / 2.0,
                    ),
                ),
                radius: camera_width * 0.1,
            },
            Rgba::opaque(0, 188, 212),
        )
        .with_stroke(WHITE, s * 0.008),
    );
    let lens_radius = camera_size * 0.2;
    scene.push(
        Figure::fill(
            Primitive::Ellipse(BBox::new(
                (camera.x() - lens_radius, camera.y() - lens_radius),
                (camera.x() + lens_radius, camera.y() + lens_radius),
            )),
            WHITE,
        )
        .with_stroke(Rgba::new(0, 0, 0, 100), s * 0.005),
    );
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new(
            (
                camera.x() - lens_radius * 0.5,
                camera.y() - lens_radius * 0.5,
            ),
            (
                camera.x() + lens_radius * 0.5,
                camera.y() + lens_radius * 0.5,
            ),
        )),
        Rgba::new(0, 0, 0, 150),
    ));

    // faint lines connecting the elements
    let link = Rgba::new(255, 255, 255, 60);
    let link_width = s * 0.004;
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(mic.x() - mic_size * 0.2, mic.y() + mic_size * 0.3),
            Point::new(eye.x() + eye_size * 0.2, eye.y() - eye_size * 0.2),
        ),
        link,
        link_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(mic.x() + mic_size * 0.2, mic.y() + mic_size * 0.3),
            Point::new(
                palette.x() - palette_size * 0.2,
                palette.y() - palette_size * 0.2,
            ),
        ),
        link,
        link_width,
    ));
    scene.push(Figure::stroke(
        Primitive::Line(
            Point::new(eye.x() + eye_size * 0.3, eye.y() + eye_size * 0.2),
            Point::new(
                camera.x() - camera_size * 0.3,
                camera.y() - camera_size * 0.2,
            ),
        ),
        link,
        link_width,
    ));

    // two rings of glow dots around the microphone
    for i in 0..2 {
        let glow_radius = mic_size * 0.7 + i as Scalar * s * 0.02;
        let glow = Rgba::new(255, 255, 255, (30 - i * 10) as u8);
        for angle in (0..360).step_by(15) {
            let rad = (angle as Scalar).to_radians();
            let x = mic.x() + glow_radius * rad.cos();
            let y = mic.y() + glow_radius * 0.6 * rad.sin();
            scene.push(Figure::fill(
                Primitive::Ellipse(BBox::new(
                    (x - s * 0.015, y - s * 0.015),
                    (x + s * 0.015, y + s * 0.015),
                )),
                glow,
            ));
        }
    }

    scene.draw(&mut img);
    img
}
