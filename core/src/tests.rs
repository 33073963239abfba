//! Cross-cutting negotiation and painting tests.
//!
//! These tests exercise whole trees end to end: the sizing laws each node
//! kind promises, the scope discipline of the paint pass, and a few
//! concrete scenarios with known-good numbers.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use watercolor_pigment::Srgb;

use crate::alignment::Alignment;
use crate::border::Border;
use crate::foreground::ForegroundColor;
use crate::frame::{FixedFrame, FlexFrame};
use crate::geometry::{Point, ProposalSize, Size};
use crate::geometry_reader::GeometryReader;
use crate::node::Node;
use crate::overlay::Overlay;
use crate::render::render_scene;
use crate::scene::{DrawCommand, Scene, SceneSurface};
use crate::shape::{Ellipse, Rectangle};
use crate::surface::{GraphicsState, RenderCtx};
use crate::view::View;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A child that reports the same size regardless of the proposal.
fn rigid(width: f32, height: f32) -> FixedFrame {
    FixedFrame::new(Rectangle).width(width).height(height)
}

/// Proposals covering the interesting corners of the input space.
fn probe_proposals() -> Vec<ProposalSize> {
    alloc::vec![
        ProposalSize::UNSPECIFIED,
        ProposalSize::ZERO,
        ProposalSize::new(600.0, 400.0),
        ProposalSize::new(25.0, None),
        ProposalSize::new(None, 25.0),
        ProposalSize::INFINITY,
    ]
}

const ALL_ALIGNMENTS: [Alignment; 9] = [
    Alignment::TopLeading,
    Alignment::Top,
    Alignment::TopTrailing,
    Alignment::Leading,
    Alignment::Center,
    Alignment::Trailing,
    Alignment::BottomLeading,
    Alignment::Bottom,
    Alignment::BottomTrailing,
];

fn fill_origins(scene: &Scene) -> Vec<Point> {
    scene
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FillPath { origin, .. } => Some(*origin),
            DrawCommand::StrokePath { .. } => None,
        })
        .collect()
}

// ============================================================================
// Negotiation Laws
// ============================================================================

#[test]
fn test_sizing_is_deterministic_and_repeatable() {
    let tree = Border::new(
        Overlay::new(
            FlexFrame::new(rigid(50.0, 50.0)).min_width(100.0),
            Ellipse,
        ),
        Srgb::BLUE,
        2.0,
    )
    .body();

    for proposal in probe_proposals() {
        let first = tree.size_that_fits(proposal);
        let second = tree.size_that_fits(proposal);
        assert_eq!(first, second);
    }
}

#[test]
fn test_negotiation_is_total_without_any_proposal() {
    let tree = Border::new(
        FlexFrame::new(Overlay::new(Srgb::RED, Ellipse)).max_width(400.0),
        Srgb::BLUE,
        2.0,
    )
    .body();

    let size = tree.size_that_fits(ProposalSize::UNSPECIFIED);
    assert!(size.width.is_finite());
    assert!(size.height.is_finite());
}

#[test]
fn test_fixed_axes_survive_any_child() {
    let children: [Node; 3] = [
        Rectangle.body(),
        rigid(999.0, 999.0).body(),
        FlexFrame::new(Ellipse).min_width(500.0).body(),
    ];

    for child in children {
        let size = FixedFrame::new(child)
            .width(150.0)
            .height(120.0)
            .size_that_fits(ProposalSize::new(600.0, 400.0));
        assert_eq!(size, Size::new(150.0, 120.0));
    }
}

#[test]
fn test_flexible_width_stays_within_bounds() {
    // Children whose natural widths fall below and above [100, 400].
    let build_children = || [rigid(50.0, 50.0).body(), rigid(800.0, 50.0).body()];

    for proposal in probe_proposals() {
        for child in build_children() {
            let width = FlexFrame::new(child)
                .min_width(100.0)
                .max_width(400.0)
                .size_that_fits(proposal)
                .width;
            assert!(
                (100.0..=400.0).contains(&width),
                "width {width} escaped bounds under {proposal:?}"
            );
        }
    }
}

#[test]
fn test_flexible_min_only_keeps_compliant_child_width() {
    let width = FlexFrame::new(rigid(250.0, 50.0))
        .min_width(100.0)
        .size_that_fits(ProposalSize::new(600.0, 400.0))
        .width;

    assert_eq!(width, 250.0);
}

#[test]
fn test_overlay_reports_base_size_for_every_alignment() {
    for alignment in ALL_ALIGNMENTS {
        for proposal in probe_proposals() {
            let base_size = rigid(30.0, 20.0).size_that_fits(proposal);
            let overlay_size = Overlay::new(rigid(30.0, 20.0), Rectangle)
                .alignment(alignment)
                .size_that_fits(proposal);
            assert_eq!(overlay_size, base_size);
        }
    }
}

#[test]
fn test_border_reports_child_size_for_every_width() {
    for width in [0.0, 1.0, 8.0, 64.0] {
        for proposal in probe_proposals() {
            let child_size = rigid(30.0, 20.0).size_that_fits(proposal);
            let bordered_size =
                Border::new(rigid(30.0, 20.0), Srgb::BLUE, width).size_that_fits(proposal);
            assert_eq!(bordered_size, child_size);
        }
    }
}

#[test]
fn test_alignment_offset_vanishes_for_equal_sizes() {
    let size = Size::new(123.0, 45.0);

    for alignment in ALL_ALIGNMENTS {
        let mut surface = SceneSurface::new();
        let mut ctx = RenderCtx::new(&mut surface);
        ctx.align(size, size, alignment);
        assert_eq!(ctx.state().translation, Point::zero());
    }
}

// ============================================================================
// Paint Scope Discipline
// ============================================================================

#[test]
fn test_render_leaves_context_state_untouched() {
    let tree = Border::new(
        Overlay::new(
            ForegroundColor::new(rigid(60.0, 60.0), Srgb::RED),
            GeometryReader::new(|_| Ellipse),
        )
        .alignment(Alignment::TopTrailing),
        Srgb::YELLOW,
        2.0,
    )
    .body();

    let mut surface = SceneSurface::new();
    let mut ctx = RenderCtx::new(&mut surface);
    tree.render(&mut ctx, Size::new(200.0, 200.0));

    assert_eq!(ctx.state(), GraphicsState::default());
}

#[test]
fn test_overlay_translation_does_not_leak_between_layers() {
    // Two stacked overlays over the same base. If the first layer's
    // alignment translation leaked, the second layer would paint away
    // from its own corner.
    let inner = Overlay::new(rigid(100.0, 100.0), rigid(10.0, 10.0))
        .alignment(Alignment::TopTrailing);
    let tree = Overlay::new(inner, rigid(10.0, 10.0))
        .alignment(Alignment::BottomLeading)
        .body();

    let mut surface = SceneSurface::new();
    {
        let mut ctx = RenderCtx::new(&mut surface);
        tree.render(&mut ctx, Size::new(100.0, 100.0));
    }

    let origins = fill_origins(&surface.finish());
    assert_eq!(origins.len(), 3);
    assert_eq!(origins[0], Point::zero());
    assert_eq!(origins[1], Point::new(90.0, 90.0));
    assert_eq!(origins[2], Point::zero());
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_fixed_width_rectangle_in_canvas() {
    let view = ForegroundColor::new(FixedFrame::new(Rectangle).width(150.0), Srgb::RED);
    let tree = view.body();

    assert_eq!(
        tree.size_that_fits(ProposalSize::new(600.0, 400.0)),
        Size::new(150.0, 400.0)
    );

    let scene = render_scene(
        ForegroundColor::new(FixedFrame::new(Rectangle).width(150.0), Srgb::RED),
        Size::new(600.0, 400.0),
    );

    let [DrawCommand::FillPath { path, origin, color }] = scene.commands() else {
        panic!("expected a single fill command");
    };
    assert_eq!(*color, Srgb::RED);
    // Centered: (600 - 150) / 2 horizontally, flush vertically.
    assert_eq!(*origin, Point::new(225.0, 0.0));
    assert_eq!(
        *path,
        crate::path::Path::rect(crate::geometry::Rect::from_size(Size::new(150.0, 400.0)))
    );
}

#[test]
fn test_flexible_frame_expands_over_small_child() {
    // min 100 / max 400 over a 50-wide child, proposed 600: the proposal is
    // clamped to 400 before the child sees it, and the max bound then grows
    // the frame to the clamped proposal even though the child stayed at 50.
    let size = FlexFrame::new(rigid(50.0, 50.0))
        .min_width(100.0)
        .max_width(400.0)
        .size_that_fits(ProposalSize::new(600.0, 400.0));

    assert_eq!(size.width, 400.0);
}

#[test]
fn test_geometry_reader_observes_exact_size() {
    let observed = Rc::new(Cell::new(Size::zero()));
    let probe = Rc::clone(&observed);

    let view = FixedFrame::new(GeometryReader::new(move |size| {
        probe.set(size);
        Rectangle
    }))
    .width(150.0)
    .height(300.0);

    let _scene = render_scene(view, Size::new(600.0, 400.0));
    assert_eq!(observed.get(), Size::new(150.0, 300.0));
}

#[test]
fn test_showcase_tree_paints_in_order() {
    // The classic demo composition: a red ellipse in a fixed-width frame,
    // grown by a flexible frame, annotated by a geometry reader overlay,
    // double-bordered, pinned to 300 by 300 in a 600 by 400 canvas.
    let view = Border::new(
        FixedFrame::new(Border::new(
            Overlay::new(
                FlexFrame::new(
                    FixedFrame::new(ForegroundColor::new(Ellipse, Srgb::RED)).width(150.0),
                )
                .min_width(100.0)
                .max_width(400.0),
                GeometryReader::new(|size| {
                    rigid(size.width / 2.0, size.height / 2.0)
                }),
            ),
            Srgb::BLUE,
            2.0,
        ))
        .width(300.0)
        .height(300.0),
        Srgb::YELLOW,
        2.0,
    );

    let scene = render_scene(view, Size::new(600.0, 400.0));
    let commands = scene.commands();

    // Ellipse fill, reader marker fill, blue border stroke, yellow border
    // stroke, painted in exactly that order.
    assert_eq!(commands.len(), 4);

    let DrawCommand::FillPath { color, origin, .. } = &commands[0] else {
        panic!("expected the ellipse fill first");
    };
    assert_eq!(*color, Srgb::RED);
    // Flex frame resolves to 300 wide inside the 300-wide fixed frame; the
    // 150-wide ellipse frame centers in it, which centers in the canvas.
    assert_eq!(*origin, Point::new(225.0, 50.0));

    let DrawCommand::FillPath { origin, .. } = &commands[1] else {
        panic!("expected the reader marker fill second");
    };
    assert_eq!(*origin, Point::new(225.0, 125.0));

    let DrawCommand::StrokePath { color, width, .. } = &commands[2] else {
        panic!("expected the blue border stroke third");
    };
    assert_eq!(*color, Srgb::BLUE);
    assert_eq!(*width, 2.0);

    let DrawCommand::StrokePath { color, origin, .. } = &commands[3] else {
        panic!("expected the yellow border stroke last");
    };
    assert_eq!(*color, Srgb::YELLOW);
    assert_eq!(*origin, Point::new(150.0, 50.0));
}
