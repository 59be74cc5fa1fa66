//! Frame transformer module
//!
//! Fans each camera rotation sample out onto nine body bones. The head,
//! neck, upper body, and center bones take the rotation directly, scaled by
//! their settings factor; arms and shoulders swap the X/Y axes and mirror
//! left/right, with a constant Z offset folded into the arms so they hang
//! naturally. Each bone is also staggered a few frames behind the camera so
//! the body follows the head instead of snapping with it.

use crate::error::MotionConverterError;
use crate::settings::Settings;
use crate::vmd::BoneKeyframe;

/// Settings key for the constant Z rotation added to both arm bones.
pub const ARM_Z_KEY: &str = "腕のZ回転";

/// Settings key for the trimming flag.
pub const TRIM_KEY: &str = "トリミング";

/// Literal value that turns trimming on. Anything else leaves the timeline
/// untouched.
pub const TRIM_ENABLED: &str = "ON";

/// Number of frames removed from the start of the timeline when trimming.
pub const TRIM_OFFSET: i64 = 19;

/// How a bone derives its rotation from the camera sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRule {
    /// Rotation used as-is: `(rx*s, ry*s, rz*s)`.
    Scaled,
    /// X/Y swapped and the whole triple multiplied by `sign`:
    /// `(sign*ry*s, sign*rx*s, sign*(rz*s))`, with the configured arm Z
    /// offset added inside the sign when `arm_offset` is set:
    /// `sign*(armZ + rz*s)`.
    Swapped { sign: f64, arm_offset: bool },
}

/// One entry of the bone fan-out table.
///
/// The bone name doubles as the settings key for its scale factor.
#[derive(Debug, Clone, Copy)]
pub struct BoneRule {
    pub bone: &'static str,
    pub frame_offset: i64,
    pub axes: AxisRule,
}

/// The full fan-out table, iterated once per camera sample.
///
/// Offsets stagger the response down the spine; the arms and shoulders
/// react last and mirror each other.
pub const BONE_RULES: [BoneRule; 9] = [
    BoneRule {
        bone: "頭",
        frame_offset: 7,
        axes: AxisRule::Scaled,
    },
    BoneRule {
        bone: "首",
        frame_offset: 5,
        axes: AxisRule::Scaled,
    },
    BoneRule {
        bone: "上半身",
        frame_offset: 9,
        axes: AxisRule::Scaled,
    },
    BoneRule {
        bone: "上半身2",
        frame_offset: 11,
        axes: AxisRule::Scaled,
    },
    BoneRule {
        bone: "センター",
        frame_offset: 14,
        axes: AxisRule::Scaled,
    },
    BoneRule {
        bone: "左腕",
        frame_offset: 14,
        axes: AxisRule::Swapped {
            sign: -1.0,
            arm_offset: true,
        },
    },
    BoneRule {
        bone: "右腕",
        frame_offset: 14,
        axes: AxisRule::Swapped {
            sign: 1.0,
            arm_offset: true,
        },
    },
    BoneRule {
        bone: "左肩",
        frame_offset: 15,
        axes: AxisRule::Swapped {
            sign: -1.0,
            arm_offset: false,
        },
    },
    BoneRule {
        bone: "右肩",
        frame_offset: 15,
        axes: AxisRule::Swapped {
            sign: 1.0,
            arm_offset: false,
        },
    },
];

/// Returns `true` for rows carrying frame data.
///
/// The gate is the first cell being a non-empty, all-digit string; header
/// and comment rows fail it and are skipped.
pub fn is_data_row(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit()))
}

/// Extracts the rotation triple from a data row.
///
/// Cells 6, 7, 8 are rotation X, Y, Z. A short row or a non-numeric cell
/// is fatal; the message carries the zero-based row number for context.
pub fn parse_rotation(row: &[String], row_index: usize) -> Result<[f64; 3], MotionConverterError> {
    if row.len() < 9 {
        return Err(MotionConverterError::InvalidInput(format!(
            "row {}: expected at least 9 cells but got {}",
            row_index,
            row.len()
        )));
    }

    let mut rotation = [0.0; 3];
    for (axis, value) in rotation.iter_mut().zip(&row[6..9]) {
        *axis = value.parse::<f64>().map_err(|e| {
            MotionConverterError::InvalidInput(format!(
                "row {}: rotation value '{}' is not a number: {}",
                row_index, value, e
            ))
        })?;
    }
    Ok(rotation)
}

/// Transforms one camera sample into the nine bone keyframes.
///
/// `frame` is the accumulated sample index; each rule adds its own stagger
/// offset on top. Missing scale factors (including the arm Z offset) are
/// fatal configuration errors.
pub fn transform_row(
    frame: i64,
    rotation: [f64; 3],
    settings: &Settings,
) -> Result<Vec<BoneKeyframe>, MotionConverterError> {
    let [rx, ry, rz] = rotation;
    let mut keyframes = Vec::with_capacity(BONE_RULES.len());

    for rule in &BONE_RULES {
        let scale = settings.scale(rule.bone)?;
        let rotation = match rule.axes {
            AxisRule::Scaled => [rx * scale, ry * scale, rz * scale],
            AxisRule::Swapped { sign, arm_offset } => {
                let z = if arm_offset {
                    settings.scale(ARM_Z_KEY)? + rz * scale
                } else {
                    rz * scale
                };
                [sign * ry * scale, sign * rx * scale, sign * z]
            }
        };
        keyframes.push(BoneKeyframe {
            frame: frame + rule.frame_offset,
            bone: rule.bone,
            rotation,
        });
    }

    Ok(keyframes)
}

/// Transforms a whole input table into the keyframe body.
///
/// Non-data rows are skipped. The sample index starts at 0 and advances
/// once per valid row; the frame label in the row itself is only used as
/// the validity gate, never as the time value.
pub fn transform_table(
    rows: &[Vec<String>],
    settings: &Settings,
) -> Result<Vec<BoneKeyframe>, MotionConverterError> {
    let mut body = Vec::new();
    let mut frame = 0i64;

    for (row_index, row) in rows.iter().enumerate() {
        if !is_data_row(row) {
            continue;
        }
        let rotation = parse_rotation(row, row_index)?;
        body.extend(transform_row(frame, rotation, settings)?);
        frame += 1;
    }

    Ok(body)
}

/// Applies the trimming policy to the keyframe body.
///
/// When the trim setting is exactly `"ON"`, keyframes at or past
/// [`TRIM_OFFSET`] are shifted back by that amount and keyframes before it
/// are dropped outright, not clamped to 0. Any other value, including an
/// absent key, returns the body unchanged. The drop-versus-shift asymmetry
/// is legacy behavior that downstream motions rely on.
pub fn apply_trimming(body: Vec<BoneKeyframe>, settings: &Settings) -> Vec<BoneKeyframe> {
    if !settings.flag_is(TRIM_KEY, TRIM_ENABLED) {
        return body;
    }

    body.into_iter()
        .filter(|key| key.frame >= TRIM_OFFSET)
        .map(|mut key| {
            key.frame -= TRIM_OFFSET;
            key
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_settings() -> Settings {
        Settings::parse(
            "頭：1.0\n首：0.5\n上半身：0.3\n上半身2：0.2\nセンター：0.1\n\
             左腕：0.4\n右腕：0.6\n左肩：0.25\n右肩：0.35\n腕のZ回転：0.8\nトリミング：OFF",
        )
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_is_data_row_digit_gate() {
        assert!(is_data_row(&row(&["0", "x"])));
        assert!(is_data_row(&row(&["120"])));
        assert!(!is_data_row(&row(&["frame", "x"])));
        assert!(!is_data_row(&row(&["1.5"])));
        assert!(!is_data_row(&row(&["-1"])));
        assert!(!is_data_row(&row(&[""])));
        assert!(!is_data_row(&[]));
    }

    #[test]
    fn test_parse_rotation_reads_cells_6_to_8() {
        let r = row(&["0", "a", "b", "c", "d", "e", "0.1", "0.2", "0.3"]);
        assert_eq!(parse_rotation(&r, 0).unwrap(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_parse_rotation_short_row_is_error() {
        let r = row(&["0", "a", "b"]);
        let err = parse_rotation(&r, 4).unwrap_err();
        assert!(err.to_string().contains("row 4"));
    }

    #[test]
    fn test_parse_rotation_non_numeric_is_error() {
        let r = row(&["0", "a", "b", "c", "d", "e", "0.1", "oops", "0.3"]);
        assert!(parse_rotation(&r, 0).is_err());
    }

    #[test]
    fn test_transform_row_emits_one_keyframe_per_bone() {
        let keys = transform_row(0, [0.1, 0.2, 0.3], &full_settings()).unwrap();
        assert_eq!(keys.len(), BONE_RULES.len());
        let bones: Vec<_> = keys.iter().map(|k| k.bone).collect();
        assert_eq!(
            bones,
            ["頭", "首", "上半身", "上半身2", "センター", "左腕", "右腕", "左肩", "右肩"]
        );
    }

    #[test]
    fn test_transform_row_frame_offsets() {
        let keys = transform_row(10, [0.0, 0.0, 0.0], &full_settings()).unwrap();
        let frames: Vec<_> = keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames, [17, 15, 19, 21, 24, 24, 24, 25, 25]);
    }

    #[test]
    fn test_scaled_bones_multiply_all_axes() {
        let keys = transform_row(0, [0.1, 0.2, 0.3], &full_settings()).unwrap();
        let head = &keys[0];
        assert_eq!(head.rotation, [0.1 * 1.0, 0.2 * 1.0, 0.3 * 1.0]);
        let neck = &keys[1];
        assert_eq!(neck.rotation, [0.1 * 0.5, 0.2 * 0.5, 0.3 * 0.5]);
    }

    #[test]
    fn test_arms_swap_axes_and_mirror() {
        let settings = full_settings();
        let keys = transform_row(0, [0.1, 0.2, 0.3], &settings).unwrap();
        let left = keys.iter().find(|k| k.bone == "左腕").unwrap();
        let right = keys.iter().find(|k| k.bone == "右腕").unwrap();

        assert_eq!(left.rotation[0], -0.2 * 0.4);
        assert_eq!(left.rotation[1], -0.1 * 0.4);
        assert_eq!(left.rotation[2], -(0.8 + 0.3 * 0.4));
        assert_eq!(right.rotation[0], 0.2 * 0.6);
        assert_eq!(right.rotation[1], 0.1 * 0.6);
        assert_eq!(right.rotation[2], 0.8 + 0.3 * 0.6);
    }

    #[test]
    fn test_shoulders_mirror_without_arm_offset() {
        let keys = transform_row(0, [0.1, 0.2, 0.3], &full_settings()).unwrap();
        let left = keys.iter().find(|k| k.bone == "左肩").unwrap();
        let right = keys.iter().find(|k| k.bone == "右肩").unwrap();

        assert_eq!(left.rotation, [-0.2 * 0.25, -0.1 * 0.25, -0.3 * 0.25]);
        assert_eq!(right.rotation, [0.2 * 0.35, 0.1 * 0.35, 0.3 * 0.35]);
    }

    #[test]
    fn test_transform_row_missing_scale_key_is_fatal() {
        let settings = Settings::parse("頭：1.0");
        let err = transform_row(0, [0.1, 0.2, 0.3], &settings).unwrap_err();
        assert!(matches!(err, MotionConverterError::MissingSetting(_)));
    }

    #[test]
    fn test_transform_table_skips_non_data_rows_and_accumulates_frames() {
        let rows = vec![
            row(&["frame", "h"]),
            row(&["0", "a", "b", "c", "d", "e", "0.1", "0.2", "0.3"]),
            row(&["note"]),
            // The label "99" is only a validity gate; the sample index
            // still advances by one.
            row(&["99", "a", "b", "c", "d", "e", "0.4", "0.5", "0.6"]),
        ];
        let body = transform_table(&rows, &full_settings()).unwrap();

        assert_eq!(body.len(), 2 * BONE_RULES.len());
        // First sample: head at frame 0+7. Second sample: head at 1+7.
        assert_eq!(body[0].frame, 7);
        assert_eq!(body[BONE_RULES.len()].frame, 8);
    }

    #[test]
    fn test_trimming_on_shifts_and_drops() {
        let settings = Settings::parse("トリミング：ON");
        let body = vec![
            BoneKeyframe {
                frame: 5,
                bone: "頭",
                rotation: [0.0; 3],
            },
            BoneKeyframe {
                frame: 18,
                bone: "首",
                rotation: [0.0; 3],
            },
            BoneKeyframe {
                frame: 19,
                bone: "頭",
                rotation: [0.0; 3],
            },
            BoneKeyframe {
                frame: 40,
                bone: "頭",
                rotation: [0.0; 3],
            },
        ];

        let trimmed = apply_trimming(body, &settings);
        // Frames below the offset are dropped entirely, not clamped to 0.
        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].frame, 0);
        assert_eq!(trimmed[1].frame, 21);
    }

    #[test]
    fn test_trimming_off_leaves_body_unchanged() {
        let body = vec![BoneKeyframe {
            frame: 5,
            bone: "頭",
            rotation: [0.1, 0.2, 0.3],
        }];

        for contents in ["トリミング：OFF", "トリミング：on", ""] {
            let settings = Settings::parse(contents);
            let out = apply_trimming(body.clone(), &settings);
            assert_eq!(out, body);
        }
    }
}
