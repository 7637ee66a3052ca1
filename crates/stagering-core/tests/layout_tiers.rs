//! # Layout Tier Tests (T0-T3)
//!
//! If ANY tier fails, the ring layout is INVALID.
//!
//! ## Tiers
//! - T0: Construction Integrity
//! - T1: Node Geometry
//! - T2: Cyclic Flow
//! - T3: Active Stage Highlight

use stagering_core::{ANNOTATION_OFFSET, Point, RingError, StageRing};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

fn lifecycle() -> StageRing {
    StageRing::new(
        ["Train", "Deploy", "Monitor", "Retrain"],
        [
            "Fit the model on curated data",
            "Promote the model to production",
            "Watch live metrics and drift",
            "Refresh the model with new data",
        ],
    )
    .expect("valid ring")
}

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

// =============================================================================
// TIER T0: CONSTRUCTION INTEGRITY
// =============================================================================

mod t0_construction {
    use super::*;

    /// T0.1: Matching non-empty sequences are accepted.
    #[test]
    fn matching_sequences_accepted() {
        let ring = StageRing::new(["a"], ["b"]).expect("valid");
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.active_index(), 0);
    }

    /// T0.2: More descriptions than stages is rejected.
    #[test]
    fn extra_description_rejected() {
        let result = StageRing::new(["a"], ["b", "c"]);
        assert!(matches!(result, Err(RingError::InvalidInput(_))));
    }

    /// T0.3: Fewer descriptions than stages is rejected.
    #[test]
    fn missing_description_rejected() {
        let result = StageRing::new(["a", "b", "c"], ["x", "y"]);
        assert!(matches!(result, Err(RingError::InvalidInput(_))));
    }

    /// T0.4: An empty ring is rejected.
    #[test]
    fn empty_rejected() {
        let result = StageRing::new(Vec::<&str>::new(), Vec::<&str>::new());
        assert!(matches!(result, Err(RingError::InvalidInput(_))));
    }
}

// =============================================================================
// TIER T1: NODE GEOMETRY
// =============================================================================

mod t1_geometry {
    use super::*;

    /// T1.1: Four stages land on the compass points.
    #[test]
    fn four_stages_on_right_angles() {
        let layout = lifecycle().compute_layout();

        let expected_angles = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        let expected_points = [
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
        ];

        assert_eq!(layout.nodes.len(), 4);
        for (i, node) in layout.nodes.iter().enumerate() {
            assert_eq!(node.index, i);
            assert!((node.angle - expected_angles[i]).abs() < EPS);
            assert!(approx(node.position, expected_points[i]), "node {}", i);
        }
    }

    /// T1.2: Labels follow the stage order.
    #[test]
    fn labels_follow_order() {
        let layout = lifecycle().compute_layout();
        let labels: Vec<&str> = layout.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Train", "Deploy", "Monitor", "Retrain"]);
    }

    /// T1.3: Nodes sit on the unit circle.
    #[test]
    fn nodes_on_unit_circle() {
        let names: Vec<String> = (0..7).map(|i| format!("s{}", i)).collect();
        let ring = StageRing::new(names.clone(), names).expect("valid");

        for node in ring.compute_layout().nodes {
            assert!((node.position.norm() - 1.0).abs() < EPS);
        }
    }
}

// =============================================================================
// TIER T2: CYCLIC FLOW
// =============================================================================

mod t2_cyclic_flow {
    use super::*;

    /// T2.1: Arrows connect consecutive stages and close the loop.
    #[test]
    fn arrows_close_the_loop() {
        let layout = lifecycle().compute_layout();
        let pairs: Vec<(usize, usize)> =
            layout.arrows.iter().map(|a| (a.source, a.target)).collect();

        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    /// T2.2: Following arrows from stage 0 visits every stage once.
    #[test]
    fn single_traversal_from_zero() {
        let layout = lifecycle().compute_layout();
        let mut visited = vec![false; layout.nodes.len()];
        let mut current = 0;

        for _ in 0..layout.nodes.len() {
            assert!(!visited[current]);
            visited[current] = true;
            current = layout.successor(current).expect("arrow");
        }

        assert_eq!(current, 0);
        assert!(visited.iter().all(|&v| v));
    }
}

// =============================================================================
// TIER T3: ACTIVE STAGE HIGHLIGHT
// =============================================================================

mod t3_highlight {
    use super::*;

    /// T3.1: The default active stage is highlighted and annotated.
    #[test]
    fn default_active_is_first() {
        let layout = lifecycle().compute_layout();

        let highlighted: Vec<usize> = layout
            .nodes
            .iter()
            .filter(|n| n.highlight)
            .map(|n| n.index)
            .collect();
        assert_eq!(highlighted, vec![0]);
        assert_eq!(layout.annotation.stage, "Train");
        assert_eq!(layout.annotation.description, "Fit the model on curated data");
        assert!(approx(
            layout.annotation.position,
            Point::new(0.0, -ANNOTATION_OFFSET)
        ));
    }

    /// T3.2: Changing the active stage moves highlight and callout.
    #[test]
    fn set_active_moves_highlight() {
        let mut ring = lifecycle();
        ring.set_active(2);
        let layout = ring.compute_layout();

        assert_eq!(layout.highlighted().map(|n| n.index), Some(2));
        assert_eq!(layout.nodes.iter().filter(|n| n.highlight).count(), 1);
        assert_eq!(layout.annotation.stage, "Monitor");
    }

    /// T3.3: Out-of-range selection keeps the previous highlight.
    #[test]
    fn out_of_range_keeps_highlight() {
        let mut ring = lifecycle();
        ring.set_active(1);
        let before = ring.compute_layout();

        ring.set_active(10);
        let after = ring.compute_layout();

        assert_eq!(ring.active_index(), 1);
        assert_eq!(before, after);
    }

    /// T3.4: Highlighted and plain nodes are visually distinct.
    #[test]
    fn highlighted_style_differs() {
        let layout = lifecycle().compute_layout();
        let active = layout.node(0).expect("node");
        let plain = layout.node(1).expect("node");

        assert_ne!(active.style, plain.style);
        assert!(active.style.marker_size > plain.style.marker_size);
    }

    /// T3.5: The layout serializes for a renderer.
    #[test]
    fn layout_serializes_to_json() {
        let layout = lifecycle().compute_layout();
        let json = serde_json::to_value(&layout).expect("serialize");

        assert_eq!(json["nodes"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["arrows"][3]["target"], 0);
        assert_eq!(json["nodes"][0]["highlight"], true);
        assert_eq!(json["annotation"]["stage"], "Train");
    }

    /// T3.6: The JSON payload reads back into an identical layout.
    #[test]
    fn layout_json_reads_back() {
        let mut ring = lifecycle();
        ring.set_active(3);
        let layout = ring.compute_layout();

        let json = serde_json::to_string(&layout).expect("serialize");
        let back: stagering_core::Layout = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.nodes.len(), layout.nodes.len());
        for (read, original) in back.nodes.iter().zip(&layout.nodes) {
            assert_eq!(read.label, original.label);
            assert_eq!(read.highlight, original.highlight);
            assert_eq!(read.style, original.style);
            assert!(approx(read.position, original.position));
        }
        assert_eq!(back.annotation.stage, "Retrain");
        assert_eq!(back.title_style, layout.title_style);
    }

    /// T3.7: Themes that would break the payload are refused.
    #[test]
    fn non_finite_arrow_theme_refused() {
        let mut theme = stagering_core::Theme::default();
        theme.arrow.width = f64::NAN;
        assert!(matches!(
            lifecycle().with_theme(theme),
            Err(RingError::InvalidInput(_))
        ));
    }
}
