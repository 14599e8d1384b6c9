//! Property-based tests for ratchet gear topology.
//!
//! These tests use proptest to generate random parameter sets and verify invariants.
//!
//! Run with: cargo test --test proptest_ratchet
#![cfg(feature = "f64")]

mod support;

use proptest::prelude::*;
use ratchet_gear::ratchet;
use ratchet_gear::{Internality, RatchetParams};
use support::{face_sections, radial_alignment, vertical_alignment};

// =============================================================================
// Strategies for generating parameters
// =============================================================================

fn arb_internality() -> impl Strategy<Value = Internality> {
    prop_oneof![Just(Internality::External), Just(Internality::Internal)]
}

/// Parameters inside the documented domain, with the base ring kept clear of
/// the axis so cap orientation is well defined.
fn arb_params() -> impl Strategy<Value = RatchetParams> {
    (
        3usize..40,
        2usize..12,
        arb_internality(),
        1.0f64..10.0,
        0.05f64..2.0,
        0.05f64..0.9,
        0.05f64..2.0,
    )
        .prop_map(
            |(num_teeth, vert_per_tooth, internality, radius, addendum, base, width)| {
                RatchetParams {
                    num_teeth,
                    vert_per_tooth,
                    internality,
                    radius,
                    addendum,
                    base,
                    width,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vertex_and_face_counts(params in arb_params()) {
        let gear = ratchet::build(&params);
        let segments = (params.vert_per_tooth - 1) * params.num_teeth;
        prop_assert_eq!(
            gear.vertex_count(),
            2 * (segments + params.num_teeth) + 2 * segments
        );
        prop_assert_eq!(gear.face_count(), segments + params.num_teeth + 2 * segments);
    }

    #[test]
    fn faces_reference_valid_distinct_indices(params in arb_params()) {
        let gear = ratchet::build(&params);
        for face in &gear.faces {
            prop_assert!(face.len() == 4 || face.len() == 5);
            for (k, &a) in face.iter().enumerate() {
                prop_assert!(a < gear.vertex_count());
                prop_assert!(!face[k + 1..].contains(&a));
            }
        }
    }

    #[test]
    fn normals_point_out_of_the_solid(params in arb_params()) {
        let gear = ratchet::build(&params);
        let (walls, upper, lower) = face_sections(&gear);

        for idx in walls {
            let alignment = radial_alignment(&gear, idx);
            match params.internality {
                Internality::External => prop_assert!(alignment > -1e-9),
                Internality::Internal => prop_assert!(alignment < 1e-9),
            }
        }
        for idx in upper {
            prop_assert!(vertical_alignment(&gear, idx) > 0.999);
        }
        for idx in lower {
            prop_assert!(vertical_alignment(&gear, idx) < -0.999);
        }
    }

    #[test]
    fn build_is_pure(params in arb_params()) {
        prop_assert_eq!(ratchet::build(&params), ratchet::build(&params));
    }
}

#[cfg(feature = "hashmap")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn only_base_rings_are_open(params in arb_params()) {
        let mesh = ratchet_gear::AddRatchet::new(params).execute().unwrap();
        let report = mesh.edge_report();

        // The two base circles are the only boundary; every other edge is
        // shared by exactly two faces walking it in opposite directions.
        prop_assert_eq!(report.boundary_edges, 2 * params.num_segments());
        prop_assert_eq!(report.non_manifold_edges, 0);
        prop_assert_eq!(report.inconsistent_edges, 0);
    }
}
