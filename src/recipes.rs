//! Ready-made pass lines in recipe text form.

use crate::img_err::ImgError;
use crate::processing::PassesLine;


pub const SET: &str = "Set: 100";
pub const BRIGHTEN: &str = "Brighten: 100";
pub const STRETCH: &str = "Stretch: 5, -100";
pub const INVERT: &str = "Invert";

pub const THRESHOLD_DISPLAY: &str = "
Threshold: 100
BitDisplay
";

pub const TRIPLE_SHRINK: &str = "
Threshold: 100
Shrink
Shrink
Shrink
BitDisplay
";

pub const TRIPLE_EXPAND: &str = "
Threshold: 100
Expand
Expand
Expand
BitDisplay
";

pub const EDGE_OUTLINE: &str = "
Threshold: 100
Edge
BitDisplay
";

pub const NOIZE_CLEANUP: &str = "
Threshold: 100
Noize
BitDisplay
";

/// Keeps the input only where it is at least 100, as a bit mask.
pub const MASK_AND: &str = "
Threshold: 100
BitAnd
BitDisplay
";

pub const TRIPLE_MEAN_BLUR: &str = "
ConvolveNormalized: 1, 1, 1, 1, 1, 1, 1, 1, 1
ConvolveNormalized: 1, 1, 1, 1, 1, 1, 1, 1, 1
ConvolveNormalized: 1, 1, 1, 1, 1, 1, 1, 1, 1
";

pub const ALL: [(&str, &str); 11] = [
    ("set", SET),
    ("brighten", BRIGHTEN),
    ("stretch", STRETCH),
    ("invert", INVERT),
    ("threshold-display", THRESHOLD_DISPLAY),
    ("triple-shrink", TRIPLE_SHRINK),
    ("triple-expand", TRIPLE_EXPAND),
    ("edge-outline", EDGE_OUTLINE),
    ("noize-cleanup", NOIZE_CLEANUP),
    ("mask-and", MASK_AND),
    ("triple-mean-blur", TRIPLE_MEAN_BLUR),
];

/// Looks a recipe up by its name in `ALL` and parses it.
pub fn by_name(name: &str) -> Result<PassesLine, ImgError> {
    match ALL.iter().find(|(recipe_name, _)| *recipe_name == name) {
        Some((_, text)) => PassesLine::try_from_string(text),
        None => Err(ImgError::parse(format!("unknown recipe '{}'", name))),
    }
}
