//! Face construction between vertex rings.
//!
//! All functions here work on indices only. A face is the list of global
//! vertex indices of a quad or pentagon; its winding decides which way the
//! normal points. Bridges return fresh face lists and the compositions at the
//! bottom decide which of them get flipped so the assembled solid has
//! outward normals.
//!
//! ## Index walk between a base ring and a teeth ring
//! ```text
//! teeth:  C0 R0 R1 R2 C1 R3 R4 R5 C2 ...   (C = crest, R = ramp step)
//!          |  |  |  |     |  |  |
//! base:      B0 B1 B2    B3 B4 B5 ...
//! ```
//! The teeth ring carries one extra crest per tooth, so the cursor over it
//! skips ahead once per tooth period while the base cursor advances one step
//! per face. Faces that straddle a crest become pentagons.

use super::RingSpan;

/// Global vertex indices of one quad or pentagon.
pub type Face = Vec<usize>;

/// Reverse a face's winding, flipping its normal.
pub fn flip_face(face: &[usize]) -> Face {
    face.iter().rev().copied().collect()
}

/// Reverse the winding of every face in `faces`.
pub fn flip_faces(faces: Vec<Face>) -> Vec<Face> {
    faces
        .into_iter()
        .map(|mut face| {
            face.reverse();
            face
        })
        .collect()
}

/// Side walls between the upper and lower teeth rings.
///
/// Emits one quad per ring edge, including the wrap-around quad that joins
/// the last vertex back to the first. Both rings must have the same length.
pub fn bridge_upper_lower_teeth(upper: RingSpan, lower: RingSpan) -> Vec<Face> {
    debug_assert_eq!(upper.len, lower.len, "teeth rings must be index aligned");

    let n = upper.len;
    let mut faces = Vec::with_capacity(n);
    for i in 0..n - 1 {
        faces.push(vec![
            upper.index(i + 1),
            upper.index(i),
            lower.index(i),
            lower.index(i + 1),
        ]);
    }
    faces.push(vec![upper.start, upper.end(), lower.end(), lower.start]);
    faces
}

/// Cap between an inner base ring and the teeth ring of an external gear.
///
/// The teeth cursor steps over each crest before emitting a face; the face
/// just before the next crest absorbs it and the following ramp start,
/// becoming a pentagon. The last face closes the ring through the first
/// crest. Winding is upward (+Z) for rings ordered by increasing angle.
pub fn bridge_teeth_base_external(
    vert_per_tooth: usize,
    base: RingSpan,
    teeth: RingSpan,
) -> Vec<Face> {
    let mut faces = Vec::with_capacity(base.len);
    let mut j = 0;
    for i in 0..base.len - 1 {
        if j % vert_per_tooth == 0 {
            j += 1;
        }
        let mut face = vec![base.index(i + 1), base.index(i), teeth.index(j), teeth.index(j + 1)];
        if (j + 1) % vert_per_tooth == 0 {
            face.push(teeth.index(j + 2));
        }
        faces.push(face);
        j += 1;
    }
    faces.push(vec![
        base.start,
        base.end(),
        teeth.end(),
        teeth.start,
        teeth.index(1),
    ]);
    faces
}

/// Cap between an outer base ring and the teeth ring of an internal gear.
///
/// Here the crest is taken on the same step that reaches it: a face starting
/// on a crest becomes a pentagon and the teeth cursor advances twice. The
/// closing face takes every teeth vertex the walk has not passed yet before
/// wrapping to the ring start; with a single-step tooth period that is the
/// last crest plus its ramp vertex, otherwise just the last vertex.
/// Winding is downward (-Z) for rings ordered by increasing angle.
pub fn bridge_teeth_base_internal(
    vert_per_tooth: usize,
    base: RingSpan,
    teeth: RingSpan,
) -> Vec<Face> {
    let mut faces = Vec::with_capacity(base.len);
    let mut j = 0;
    for i in 0..base.len - 1 {
        let mut face = vec![base.index(i + 1), base.index(i), teeth.index(j), teeth.index(j + 1)];
        if j % vert_per_tooth == 0 {
            face.push(teeth.index(j + 2));
            j += 1;
        }
        faces.push(face);
        j += 1;
    }

    let mut closing = vec![base.start, base.end()];
    closing.extend((j..teeth.len).map(|k| teeth.index(k)));
    closing.push(teeth.start);
    faces.push(closing);
    faces
}

/// Rings of one assembled gear, as laid out in the shared vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLayout {
    pub upper_teeth: RingSpan,
    pub lower_teeth: RingSpan,
    pub upper_base: RingSpan,
    pub lower_base: RingSpan,
}

/// Faces of an external gear: side walls as generated, the upper cap as
/// generated and the lower cap flipped to face down.
pub fn add_faces_external(vert_per_tooth: usize, rings: &RingLayout) -> Vec<Face> {
    let walls = bridge_upper_lower_teeth(rings.upper_teeth, rings.lower_teeth);
    let upper = bridge_teeth_base_external(vert_per_tooth, rings.upper_base, rings.upper_teeth);
    let lower = flip_faces(bridge_teeth_base_external(
        vert_per_tooth,
        rings.lower_base,
        rings.lower_teeth,
    ));

    walls.into_iter().chain(upper).chain(lower).collect()
}

/// Faces of an internal gear: side walls flipped to face the axis, the upper
/// cap flipped to face up and the lower cap as generated.
pub fn add_faces_internal(vert_per_tooth: usize, rings: &RingLayout) -> Vec<Face> {
    let walls = flip_faces(bridge_upper_lower_teeth(rings.upper_teeth, rings.lower_teeth));
    let upper = flip_faces(bridge_teeth_base_internal(
        vert_per_tooth,
        rings.upper_base,
        rings.upper_teeth,
    ));
    let lower = bridge_teeth_base_internal(vert_per_tooth, rings.lower_base, rings.lower_teeth);

    walls.into_iter().chain(upper).chain(lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 teeth, 3 vertices per tooth: 6 steps, teeth rings of 9, base rings of 6
    fn small_layout() -> RingLayout {
        RingLayout {
            upper_teeth: RingSpan::new(0, 9),
            lower_teeth: RingSpan::new(9, 9),
            upper_base: RingSpan::new(18, 6),
            lower_base: RingSpan::new(24, 6),
        }
    }

    #[test]
    fn flip_reverses_winding() {
        assert_eq!(flip_face(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
        assert_eq!(flip_face(&[5, 0, 7, 8, 9]), vec![9, 8, 7, 0, 5]);

        let faces = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7, 8]];
        let flipped = flip_faces(faces.clone());
        assert_eq!(flipped, vec![vec![3, 2, 1, 0], vec![8, 7, 6, 5, 4]]);
        assert_eq!(flip_faces(flipped), faces);
    }

    #[test]
    fn teeth_walls_wrap_to_ring_start() {
        let layout = small_layout();
        let faces = bridge_upper_lower_teeth(layout.upper_teeth, layout.lower_teeth);
        assert_eq!(faces.len(), 9);
        assert_eq!(faces[0], vec![1, 0, 9, 10]);
        assert_eq!(faces[7], vec![8, 7, 16, 17]);
        assert_eq!(faces[8], vec![0, 8, 17, 9]);
    }

    #[test]
    fn external_base_bridge_indices() {
        let layout = small_layout();
        let faces = bridge_teeth_base_external(3, layout.upper_base, layout.upper_teeth);
        assert_eq!(
            faces,
            vec![
                vec![19, 18, 1, 2],
                vec![20, 19, 2, 3, 4],
                vec![21, 20, 4, 5],
                vec![22, 21, 5, 6, 7],
                vec![23, 22, 7, 8],
                vec![18, 23, 8, 0, 1],
            ]
        );
    }

    #[test]
    fn internal_base_bridge_indices() {
        let layout = small_layout();
        let faces = bridge_teeth_base_internal(3, layout.upper_base, layout.upper_teeth);
        assert_eq!(
            faces,
            vec![
                vec![19, 18, 0, 1, 2],
                vec![20, 19, 2, 3],
                vec![21, 20, 3, 4, 5],
                vec![22, 21, 5, 6],
                vec![23, 22, 6, 7, 8],
                vec![18, 23, 8, 0],
            ]
        );
    }

    #[test]
    fn lower_rings_use_ring_local_cursor() {
        let layout = small_layout();
        let upper = bridge_teeth_base_external(3, layout.upper_base, layout.upper_teeth);
        let lower = bridge_teeth_base_external(3, layout.lower_base, layout.lower_teeth);
        for (u, l) in upper.iter().zip(&lower) {
            // base indices shift by 6, teeth indices by 9
            assert_eq!(l[0], u[0] + 6);
            assert_eq!(l[1], u[1] + 6);
            for k in 2..u.len() {
                assert_eq!(l[k], u[k] + 9);
            }
        }
    }

    #[test]
    fn single_step_teeth_are_all_pentagons_externally() {
        // 3 teeth, 2 vertices per tooth: teeth rings of 6, base rings of 3
        let teeth = RingSpan::new(0, 6);
        let base = RingSpan::new(12, 3);
        let faces = bridge_teeth_base_external(2, base, teeth);
        assert_eq!(
            faces,
            vec![vec![13, 12, 1, 2, 3], vec![14, 13, 3, 4, 5], vec![12, 14, 5, 0, 1]]
        );
    }

    #[test]
    fn single_step_teeth_close_internal_ring() {
        let teeth = RingSpan::new(0, 6);
        let base = RingSpan::new(12, 3);
        let faces = bridge_teeth_base_internal(2, base, teeth);
        assert_eq!(
            faces,
            vec![vec![13, 12, 0, 1, 2], vec![14, 13, 2, 3, 4], vec![12, 14, 4, 5, 0]]
        );
    }

    #[test]
    fn compositions_flip_the_right_parts() {
        let layout = small_layout();
        let external = add_faces_external(3, &layout);
        let internal = add_faces_internal(3, &layout);
        assert_eq!(external.len(), 9 + 6 + 6);
        assert_eq!(internal.len(), 9 + 6 + 6);

        // walls
        assert_eq!(external[0], vec![1, 0, 9, 10]);
        assert_eq!(internal[0], vec![10, 9, 0, 1]);
        // upper caps
        assert_eq!(external[9], vec![19, 18, 1, 2]);
        assert_eq!(internal[9], vec![2, 1, 0, 18, 19]);
        // lower caps
        assert_eq!(external[15], vec![11, 10, 24, 25]);
        assert_eq!(internal[15], vec![25, 24, 9, 10, 11]);
    }
}
