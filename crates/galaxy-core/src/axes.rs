use crate::state::ColorVertex;

// Per-axis colors at the origin end and the far end of each segment
const AXIS_COLORS: [([f32; 3], [f32; 3]); 3] = [
    ([1.0, 0.0, 0.0], [1.0, 0.6, 0.0]), // x: red -> orange
    ([0.0, 1.0, 0.0], [0.6, 1.0, 0.0]), // y: green -> lime
    ([0.0, 0.0, 1.0], [0.0, 0.6, 1.0]), // z: blue -> sky
];

/// Line-list vertices for three axis segments of `length` from the origin.
pub fn axes_vertices(length: f32) -> [ColorVertex; 6] {
    let mut out = [ColorVertex::default(); 6];
    for (axis, (near, far)) in AXIS_COLORS.iter().enumerate() {
        let mut end = [0.0; 3];
        end[axis] = length;
        out[axis * 2] = ColorVertex {
            position: [0.0; 3],
            color: *near,
        };
        out[axis * 2 + 1] = ColorVertex {
            position: end,
            color: *far,
        };
    }
    out
}
