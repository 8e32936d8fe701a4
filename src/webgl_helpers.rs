// Helper functions for dealing with shaders, compiling and linking them into
// shader programs, and looking up where their inputs live

use crate::error::TrackerError;
use web_sys::{WebGlProgram, WebGlRenderingContext, WebGlShader, WebGlUniformLocation};

pub fn compile_shader(
    context: &WebGlRenderingContext,
    shader_type: u32,
    source: &str,
) -> Result<WebGlShader, TrackerError> {
    let shader = context
        .create_shader(shader_type)
        .ok_or(TrackerError::ShaderCreation)?;
    context.shader_source(&shader, source);
    context.compile_shader(&shader);

    if context
        .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = context
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| String::from("unknown error"));
        context.delete_shader(Some(&shader));
        Err(TrackerError::ShaderCompile(log))
    }
}

pub fn link_program(
    context: &WebGlRenderingContext,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
) -> Result<WebGlProgram, TrackerError> {
    let program = context
        .create_program()
        .ok_or(TrackerError::ProgramCreation)?;
    context.attach_shader(&program, vertex_shader);
    context.attach_shader(&program, fragment_shader);
    context.link_program(&program);

    if context
        .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = context
            .get_program_info_log(&program)
            .unwrap_or_else(|| String::from("unknown error"));
        context.delete_program(Some(&program));
        Err(TrackerError::ProgramLink(log))
    }
}

// Compiles both stages and links them, the shader objects are not needed
// once the program exists
pub fn build_program(
    context: &WebGlRenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, TrackerError> {
    let vertex_shader =
        compile_shader(context, WebGlRenderingContext::VERTEX_SHADER, vertex_source)?;
    let fragment_shader =
        compile_shader(context, WebGlRenderingContext::FRAGMENT_SHADER, fragment_source)?;
    let program = link_program(context, &vertex_shader, &fragment_shader);
    context.delete_shader(Some(&vertex_shader));
    context.delete_shader(Some(&fragment_shader));
    program
}

pub fn attrib_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<u32, TrackerError> {
    let location = context.get_attrib_location(program, name);
    if location < 0 {
        Err(TrackerError::MissingAttribute(name))
    } else {
        Ok(location as u32)
    }
}

pub fn uniform_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, TrackerError> {
    context
        .get_uniform_location(program, name)
        .ok_or(TrackerError::MissingUniform(name))
}
