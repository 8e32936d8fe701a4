// Errors that can occur while setting up the tracker. Once the frame loop is
// running nothing can fail

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum TrackerError {
    NoWindow,
    NoDocument,
    NoBody,
    NotACanvas,
    ContextUnavailable,
    ShaderCreation,
    ShaderCompile(String),
    ProgramCreation,
    ProgramLink(String),
    MissingAttribute(&'static str),
    MissingUniform(&'static str),
    InvalidMotionMode(u32),
    Js(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::NoWindow => write!(f, "no global `window` exists"),
            TrackerError::NoDocument => write!(f, "window has no document"),
            TrackerError::NoBody => write!(f, "document has no body"),
            TrackerError::NotACanvas => write!(f, "created element is not a canvas"),
            TrackerError::ContextUnavailable => write!(f, "webgl context is unavailable"),
            TrackerError::ShaderCreation => write!(f, "unable to create shader object"),
            TrackerError::ShaderCompile(log) => write!(f, "failed to compile shader: {}", log),
            TrackerError::ProgramCreation => write!(f, "unable to create program object"),
            TrackerError::ProgramLink(log) => write!(f, "failed to link program: {}", log),
            TrackerError::MissingAttribute(name) => {
                write!(f, "invalid attribute location for '{}'", name)
            }
            TrackerError::MissingUniform(name) => {
                write!(f, "failed to get '{}' uniform location", name)
            }
            TrackerError::InvalidMotionMode(index) => {
                write!(f, "motion mode {} is out of range, expected 0 to 4", index)
            }
            TrackerError::Js(msg) => write!(f, "javascript error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<JsValue> for TrackerError {
    fn from(value: JsValue) -> Self {
        TrackerError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<TrackerError> for JsValue {
    fn from(err: TrackerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
