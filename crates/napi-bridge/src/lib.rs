#![deny(clippy::all)]

use napi::{Error, Status};
use napi_derive::napi;
use tsp_core::{BuildConfig, ErrorKind, ProblemError};

mod models;

use models::JsProblem;

fn to_napi_error(err: ProblemError) -> Error {
    let status = match err.kind() {
        ErrorKind::Io => Status::GenericFailure,
        ErrorKind::Parse | ErrorKind::UnsupportedType | ErrorKind::Validation => Status::InvalidArg,
    };
    Error::new(status, err.to_string())
}

#[napi]
pub fn load_problem(path: String) -> napi::Result<JsProblem> {
    let problem = tsp_core::load(path).map_err(to_napi_error)?;
    Ok(JsProblem::from(&problem))
}

/// Same as `loadProblem`, but spreads the distance computation over all cores
/// once the problem is big enough.
#[napi]
pub fn load_problem_parallel(path: String) -> napi::Result<JsProblem> {
    let problem =
        tsp_core::load_with_config(path, &BuildConfig::parallel()).map_err(to_napi_error)?;
    Ok(JsProblem::from(&problem))
}
