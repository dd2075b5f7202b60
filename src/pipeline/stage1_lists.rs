use tracing::info;

use crate::lists::load::{LineListRequest, load_line_lists};
use crate::lists::{DataPaths, LineList, ListError};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub list: LineList,
    pub waves: Vec<f64>,
}

pub fn run_stage1(paths: &DataPaths, request: &LineListRequest) -> Result<Stage1Output, ListError> {
    let list = load_line_lists(paths, request)?;
    let waves = list.waves();
    match (waves.first(), waves.last()) {
        (Some(lo), Some(hi)) => info!(
            n_lines = list.len(),
            ions = ?list.ions(),
            "reference lines span {lo:.2}-{hi:.2} A"
        ),
        _ => info!("no reference lines loaded"),
    }
    Ok(Stage1Output { list, waves })
}
