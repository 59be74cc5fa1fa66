//! Output format module
//!
//! Constants and record types for the CSV proxy of the VMD motion format
//! consumed by MMD CSV tooling. The file has a fixed three-section layout:
//! a header block naming the format and motion, the bone keyframe body, and
//! a constant trailer describing the expression/camera/light channels.

/// Format signature, first line of the output file.
pub const FORMAT_SIGNATURE: &str = "Vocaloid Motion Data 0002";

/// Motion name written on the second line of the output file.
pub const MOTION_NAME: &str = "変換後モーション";

/// Column names for the bone keyframe section.
pub const BONE_COLUMNS: [&str; 24] = [
    "Motion", "bone", "x", "y", "z", "rx", "ry", "rz", "x_p1x", "x_p1y", "x_p2x", "x_p2y",
    "y_p1x", "y_p1y", "y_p2x", "y_p2y", "z_p1x", "z_p1y", "z_p2x", "z_p2y", "r_p1x", "r_p1y",
    "r_p2x", "r_p2y",
];

/// Column names for the camera channel in the trailer.
pub const CAMERA_COLUMNS: [&str; 33] = [
    "Camera", "d", "a", "x", "y", "z", "rx", "ry", "rz", "x_p1x", "x_p1y", "x_p2x", "x_p2y",
    "y_p1x", "y_p1y", "y_p2x", "y_p2y", "z_p1x", "z_p1y", "z_p2x", "z_p2y", "r_p1x", "r_p1y",
    "r_p2x", "r_p2y", "d_p1x", "d_p1y", "d_p2x", "d_p2y", "a_p1x", "a_p1y", "a_p2x", "a_p2y",
];

/// The interpolation control block emitted with every bone keyframe.
///
/// Four (p1x, p1y, p2x, p2y) control point pairs, one per channel, all set
/// to the flat default curve. Named once so every emitted keyframe shares
/// the same block.
pub const INTERPOLATION: [u8; 16] = [
    20, 20, 107, 107, 20, 20, 107, 107, 20, 20, 107, 107, 20, 20, 107, 107,
];

/// One bone keyframe: a pose for a named bone at a given frame.
///
/// Position is always the origin; this converter only ever keys rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneKeyframe {
    /// Frame index, already including the bone's stagger offset.
    pub frame: i64,
    /// Target bone name, as MMD expects it.
    pub bone: &'static str,
    /// Euler rotation (x, y, z).
    pub rotation: [f64; 3],
}

impl BoneKeyframe {
    /// Renders the keyframe as one output row.
    ///
    /// Layout: frame, bone, position x/y/z (always 0), rotation x/y/z,
    /// then the 16 interpolation constants.
    pub fn into_row(self) -> Vec<String> {
        let mut row = Vec::with_capacity(BONE_COLUMNS.len());
        row.push(self.frame.to_string());
        row.push(self.bone.to_string());
        row.extend(["0", "0", "0"].map(String::from));
        row.extend(self.rotation.iter().map(|r| r.to_string()));
        row.extend(INTERPOLATION.iter().map(|c| c.to_string()));
        row
    }
}

/// The fixed header block: format signature, motion name, column names.
pub fn header_rows() -> Vec<Vec<String>> {
    vec![
        vec![FORMAT_SIGNATURE.to_string()],
        vec![MOTION_NAME.to_string()],
        BONE_COLUMNS.iter().map(|c| c.to_string()).collect(),
    ]
}

/// The fixed trailer block describing the expression, camera, and light
/// channels. This converter generates no per-frame data for them.
pub fn trailer_rows() -> Vec<Vec<String>> {
    vec![
        vec!["Expression".into(), "name".into(), "fact".into()],
        CAMERA_COLUMNS.iter().map(|c| c.to_string()).collect(),
        ["Light", "r", "g", "b", "x", "y", "z"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    ]
}
