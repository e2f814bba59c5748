use drawing_board::brushes::{
    CalligraphyBrush, EraserBrush, PatternBrush, PencilBrush, SprayBrush, StarBrush,
};
use drawing_board::{
    BACKGROUND, Brush, BrushKind, BrushType, Canvas, Jitter, LineCap, Primitive, RngJitter, Segment,
};
use egui::{Color32, pos2};

/// Deterministic jitter: every offset lands on the center point
struct Centered;

impl Jitter for Centered {
    fn offset(&mut self, _reach: i32) -> i32 {
        0
    }
    fn unit(&mut self) -> f32 {
        0.0
    }
    fn sign(&mut self) -> f32 {
        1.0
    }
}

fn render(brush: &dyn Brush, from: (f32, f32), to: (f32, f32)) -> Canvas {
    let mut canvas = Canvas::new();
    let segment = Segment::new(pos2(from.0, from.1), pos2(to.0, to.1));
    brush.render(&mut canvas, segment, &mut Centered);
    canvas
}

#[test]
fn test_brush_instantiation() {
    let pencil = PencilBrush::new(Color32::RED, 5);
    assert_eq!(pencil.color(), Color32::RED);
    assert_eq!(pencil.size(), 5);
    assert_eq!(pencil.label(), "Pencil");

    let spray = SprayBrush::new(Color32::GREEN, 7);
    assert_eq!(spray.color(), Color32::GREEN);
    assert_eq!(spray.size(), 7);
    assert_eq!(spray.label(), "Spray");

    let calli = CalligraphyBrush::new(Color32::BLUE, 2);
    assert_eq!(calli.color(), Color32::BLUE);
    assert_eq!(calli.size(), 2);
    assert_eq!(calli.label(), "Calligraphy");

    let orange = Color32::from_rgb(255, 165, 0);
    let pattern = PatternBrush::new(orange, 3);
    assert_eq!(pattern.color(), orange);
    assert_eq!(pattern.size(), 3);
    assert_eq!(pattern.label(), "Pattern");

    let star = StarBrush::new(Color32::BLACK, 6);
    assert_eq!(star.color(), Color32::BLACK);
    assert_eq!(star.size(), 6);
    assert_eq!(star.label(), "Star");

    let eraser = EraserBrush::new(11);
    assert_eq!(eraser.color(), BACKGROUND);
    assert_eq!(eraser.size(), 11);
    assert_eq!(eraser.label(), "Eraser");
}

#[test]
fn test_defaults() {
    assert_eq!(PencilBrush::default().size(), 3);
    assert_eq!(PencilBrush::default().color(), Color32::BLACK);
    assert_eq!(EraserBrush::default().size(), 10);
}

#[test]
fn test_eraser_ignores_requested_color() {
    let eraser = BrushType::new(BrushKind::Eraser, Color32::RED, 4);
    assert_eq!(eraser.color(), BACKGROUND);
}

#[test]
fn test_polymorphism() {
    let brushes: Vec<Box<dyn Brush>> = vec![
        Box::new(PencilBrush::new(Color32::RED, 1)),
        Box::new(SprayBrush::new(Color32::GREEN, 2)),
        Box::new(CalligraphyBrush::new(Color32::BLUE, 3)),
        Box::new(PatternBrush::new(Color32::YELLOW, 4)),
        Box::new(StarBrush::new(Color32::BLACK, 5)),
        Box::new(EraserBrush::new(6)),
    ];
    let labels: Vec<&str> = brushes.iter().map(|b| b.label()).collect();
    assert_eq!(labels, ["Pencil", "Spray", "Calligraphy", "Pattern", "Star", "Eraser"]);
}

#[test]
fn test_pencil_draws_one_round_line() {
    let canvas = render(&PencilBrush::new(Color32::RED, 5), (0.0, 0.0), (10.0, 0.0));
    assert_eq!(
        canvas.primitives(),
        [Primitive::Line {
            from: pos2(0.0, 0.0),
            to: pos2(10.0, 0.0),
            color: Color32::RED,
            width: 5.0,
            cap: LineCap::Round,
        }]
    );
}

#[test]
fn test_eraser_draws_one_background_line() {
    let canvas = render(&EraserBrush::new(8), (0.0, 0.0), (10.0, 0.0));
    assert_eq!(
        canvas.primitives(),
        [Primitive::Line {
            from: pos2(0.0, 0.0),
            to: pos2(10.0, 0.0),
            color: BACKGROUND,
            width: 8.0,
            cap: LineCap::Round,
        }]
    );
}

#[test]
fn test_calligraphy_wide_then_narrow() {
    let canvas = render(&CalligraphyBrush::new(Color32::BLUE, 3), (1.0, 2.0), (6.0, 9.0));
    let widths: Vec<(f32, LineCap)> = canvas
        .primitives()
        .iter()
        .map(|p| match p {
            Primitive::Line { width, cap, color, .. } => {
                assert_eq!(*color, Color32::BLUE);
                (*width, *cap)
            }
            other => panic!("unexpected primitive {other:?}"),
        })
        .collect();
    assert_eq!(widths, [(6.0, LineCap::Butt), (3.0, LineCap::Butt)]);
}

#[test]
fn test_zero_length_segments_still_draw() {
    let scattering: [Box<dyn Brush>; 3] = [
        Box::new(SprayBrush::new(Color32::RED, 2)),
        Box::new(PatternBrush::new(Color32::RED, 2)),
        Box::new(StarBrush::new(Color32::RED, 2)),
    ];
    for brush in &scattering {
        let canvas = render(brush.as_ref(), (5.0, 5.0), (5.0, 5.0));
        assert!(!canvas.is_empty(), "{} drew nothing", brush.label());
        assert!(canvas.primitives().iter().all(|p| p.color() == Color32::RED));
    }
}

#[test]
fn test_spray_centered_dots() {
    let brush = SprayBrush::new(Color32::RED, 3);
    let canvas = render(&brush, (0.0, 0.0), (4.0, 0.0));
    // 4 steps, every attempt accepted at the center
    assert_eq!(canvas.len(), 4 * 6);
    assert!(canvas.primitives().iter().all(|p| p.kind() == "ellipse"));
}

#[test]
fn test_spray_random_dot_bounds() {
    let brush = SprayBrush::new(Color32::GREEN, 5);
    let mut canvas = Canvas::new();
    let mut jitter = RngJitter::seeded(99);
    let segment = Segment::new(pos2(0.0, 0.0), pos2(30.0, 40.0));
    brush.render(&mut canvas, segment, &mut jitter);

    assert!(canvas.len() <= 40 * 10);
    // Acceptance is roughly pi/4 per attempt; with 400 attempts some must land
    assert!(canvas.len() > 100);
    assert!(canvas.primitives().iter().all(|p| p.color() == Color32::GREEN));
}

#[test]
fn test_pattern_and_star_intervals() {
    let pattern = render(&PatternBrush::new(Color32::RED, 1), (0.0, 0.0), (0.0, 20.0));
    assert_eq!(pattern.len(), 4);

    let star = render(&StarBrush::new(Color32::RED, 1), (0.0, 0.0), (0.0, 20.0));
    assert_eq!(star.len(), 2);
}

#[test]
fn test_zero_length_spray_never_empty_across_seeds() {
    let brush = SprayBrush::new(Color32::RED, 1);
    for seed in 0..200 {
        let mut canvas = Canvas::new();
        let mut jitter = RngJitter::seeded(seed);
        brush.render(&mut canvas, Segment::new(pos2(5.0, 5.0), pos2(5.0, 5.0)), &mut jitter);

        assert!(!canvas.is_empty(), "seed {seed} drew nothing");
        assert!(canvas.len() <= brush.attempts_per_point(), "seed {seed} drew {}", canvas.len());
    }
}
