// Dimensions of the render surface, and the orthographic projection that
// takes pixel coordinates (origin top left, y down) into normalized device
// coordinates (origin center, y up)

use nalgebra_glm as glm;
use glm::TMat4;

#[derive(Clone, Debug)]
pub struct Surface {
    projection_mat: TMat4<f64>,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        let projection_mat = glm::ortho(0.0, width, height, 0.0, 1.0, -1.0);
        Surface { projection_mat }
    }

    pub fn to_ndc(&self, pixel: [f64; 2]) -> [f64; 2] {
        let ndc = self.projection_mat * glm::vec4(pixel[0], pixel[1], 0.0, 1.0);
        [ndc.x, ndc.y]
    }
}
