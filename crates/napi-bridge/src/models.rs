use napi_derive::napi;
use tsp_core::{Point, Problem, ProblemInfo};

#[napi(object)]
#[derive(Clone, Debug)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
    pub name: String,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct JsProblemInfo {
    pub name: String,
    pub description: String,
    #[napi(js_name = "type")]
    pub type_: String,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct JsProblem {
    pub info: JsProblemInfo,
    pub points: Vec<JsPoint>,
    pub adjacency: Vec<Vec<f64>>,
}

impl From<&Point> for JsPoint {
    fn from(point: &Point) -> Self {
        JsPoint {
            x: point.x,
            y: point.y,
            name: point.name.clone(),
        }
    }
}

impl From<&ProblemInfo> for JsProblemInfo {
    fn from(info: &ProblemInfo) -> Self {
        JsProblemInfo {
            name: info.name.clone(),
            description: info.description.clone(),
            type_: info.kind.to_string(),
        }
    }
}

impl From<&Problem> for JsProblem {
    fn from(problem: &Problem) -> Self {
        JsProblem {
            info: problem.info().into(),
            points: problem.points().iter().map(JsPoint::from).collect(),
            adjacency: problem.adjacency().to_rows(),
        }
    }
}
