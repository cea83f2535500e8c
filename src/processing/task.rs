use std::{fs, path::{Path, PathBuf}};

use chrono::Local;
use log::info;

use crate::img::{codec, Raster};
use crate::img_err::ImgError;

use super::PassesLine;


const RESULTS_DIR_FORMAT: &str = "Results %d-%m(%b)-%Y_%a_%_H.%M.%S";

/// Decodes `input`, reduces it to gray and runs `line` over it. The result
/// is written to `output` when one is given.
pub fn process_file(input: &Path, output: Option<&Path>, line: &PassesLine) -> Result<Raster, ImgError> {
    let decoded = codec::load_png(input)?;
    let result = line.run(decoded.to_gray());

    if let Some(path) = output {
        result.try_save(path)?;
    }

    Ok(result)
}

/// Saves the result of every pass as `1.png`, `2.png`, ... into a new
/// timestamped directory under `dir` and returns that directory.
pub fn export_steps(dir: &Path, input: &Path, line: &PassesLine) -> Result<PathBuf, ImgError> {
    let dir_name = Local::now().format(RESULTS_DIR_FORMAT).to_string();
    let results_dir = dir.join(dir_name);

    fs::create_dir(&results_dir).map_err(|source| ImgError::FileOpen {
        path: results_dir.display().to_string(),
        source,
    })?;

    let decoded = codec::load_png(input)?;
    line.run_inspect(decoded.to_gray(), |pass_num, raster| {
        raster.try_save(&results_dir.join(format!("{}.png", pass_num + 1)))
    })?;

    info!("{} results saved to {}", line.len(), results_dir.display());
    Ok(results_dir)
}
