//! JSON scene descriptions mirroring the construction facade.
//!
//! Example: `{"vertical": [{"circle": {"radius": 10}}, {"square": {"side_length": 20}}]}`
//!
//! Scenes always go through the validated constructors, so a bad file is
//! reported instead of rendered as degenerate geometry.

use serde::{Deserialize, Serialize};
use shapes::make;
use shapes::{GeometryError, ShapeRef};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Spacer { width: f64, height: f64 },
    Polygon { sides: u32, side_length: f64 },
    Square { side_length: f64 },
    Triangle { side_length: f64 },
    Scaled { x: f64, y: f64, shape: Box<Scene> },
    Rotated { degrees: i32, shape: Box<Scene> },
    Layered(Vec<Scene>),
    Vertical(Vec<Scene>),
    Horizontal(Vec<Scene>),
}

impl Scene {
    pub fn build(&self) -> Result<ShapeRef, GeometryError> {
        Ok(match self {
            Scene::Circle { radius } => make::try_circle(*radius)?,
            Scene::Rectangle { width, height } => make::try_rectangle(*width, *height)?,
            Scene::Spacer { width, height } => make::try_spacer(*width, *height)?,
            Scene::Polygon { sides, side_length } => make::try_polygon(*sides, *side_length)?,
            Scene::Square { side_length } => make::try_square(*side_length)?,
            Scene::Triangle { side_length } => make::try_triangle(*side_length)?,
            Scene::Scaled { x, y, shape } => make::try_scaled(shape.build()?, *x, *y)?,
            Scene::Rotated { degrees, shape } => make::try_rotated(shape.build()?, *degrees)?,
            Scene::Layered(items) => make::try_layered(build_all(items)?)?,
            Scene::Vertical(items) => make::try_vertical(build_all(items)?)?,
            Scene::Horizontal(items) => make::try_horizontal(build_all(items)?)?,
        })
    }

    /// Built-in sample used by `cli demo`.
    pub fn demo() -> Self {
        Scene::Horizontal(vec![
            Scene::Circle { radius: 40.0 },
            Scene::Spacer {
                width: 20.0,
                height: 20.0,
            },
            Scene::Vertical(vec![
                Scene::Square { side_length: 50.0 },
                Scene::Triangle { side_length: 60.0 },
                Scene::Polygon {
                    sides: 7,
                    side_length: 30.0,
                },
            ]),
            Scene::Rotated {
                degrees: 90,
                shape: Box::new(Scene::Rectangle {
                    width: 80.0,
                    height: 30.0,
                }),
            },
            Scene::Layered(vec![
                Scene::Circle { radius: 25.0 },
                Scene::Scaled {
                    x: 2.0,
                    y: 0.5,
                    shape: Box::new(Scene::Square { side_length: 30.0 }),
                },
            ]),
        ])
    }
}

fn build_all(items: &[Scene]) -> Result<Vec<ShapeRef>, GeometryError> {
    items.iter().map(Scene::build).collect()
}
