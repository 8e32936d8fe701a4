// Renderer struct that handles WebGl calls. Draws each particle as a single
// point sprite, masked in the fragment shader so points come out round

use crate::color::Color;
use crate::error::TrackerError;
use crate::frame::PointRenderer;
use crate::webgl_helpers;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext, WebGlUniformLocation};

const POINT_VERTEX_SHADER: &str = r#"
    attribute vec2 a_Position;
    attribute float a_PointSize;

    void main() {
        gl_PointSize = a_PointSize;
        gl_Position = vec4(a_Position, 0.0, 1.0);
    }
"#;

const POINT_FRAGMENT_SHADER: &str = r#"
    precision highp float;

    uniform vec4 u_Color;

    void main() {
        if (length(gl_PointCoord - vec2(0.5, 0.5)) > 0.475) discard;
        gl_FragColor = u_Color;
    }
"#;

pub struct Renderer {
    pub context: WebGlRenderingContext,
    position_location: u32,
    point_size_location: u32,
    color_location: WebGlUniformLocation,
    clear_color: Color,
}

impl Renderer {
    // Grabs the WebGl context from the canvas, builds the point shader and
    // looks up its inputs once, up front
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, TrackerError> {
        let context = canvas
            .get_context("webgl")?
            .ok_or(TrackerError::ContextUnavailable)?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| TrackerError::ContextUnavailable)?;

        let point_shader =
            webgl_helpers::build_program(&context, POINT_VERTEX_SHADER, POINT_FRAGMENT_SHADER)?;
        let position_location =
            webgl_helpers::attrib_location(&context, &point_shader, "a_Position")?;
        let point_size_location =
            webgl_helpers::attrib_location(&context, &point_shader, "a_PointSize")?;
        let color_location = webgl_helpers::uniform_location(&context, &point_shader, "u_Color")?;

        context.use_program(Some(&point_shader));
        context.enable(WebGlRenderingContext::BLEND);
        context.blend_func(
            WebGlRenderingContext::SRC_ALPHA,
            WebGlRenderingContext::ONE_MINUS_SRC_ALPHA,
        );

        Ok(Renderer {
            context,
            position_location,
            point_size_location,
            color_location,
            clear_color: Color::TRANSPARENT,
        })
    }
}

impl PointRenderer for Renderer {
    fn clear(&mut self) {
        let c = self.clear_color;
        self.context.clear_color(c.r, c.g, c.b, c.a);
        self.context.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);
    }

    // Position and size go in as constant vertex attributes, no buffers needed
    // for a single point
    fn draw_point(&mut self, position: [f64; 2], size: f64, color: Color) {
        self.context.vertex_attrib2f(
            self.position_location,
            position[0] as f32,
            position[1] as f32,
        );
        self.context
            .vertex_attrib1f(self.point_size_location, size as f32);
        let [r, g, b, a] = color.as_array();
        self.context
            .uniform4f(Some(&self.color_location), r, g, b, a);
        self.context
            .draw_arrays(WebGlRenderingContext::POINTS, 0, 1);
    }
}
