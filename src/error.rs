use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BadgeError {
    #[error("Unknown badge side: {0:?}")]
    UnknownSide(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logging error: {0}")]
    Logging(String),
    #[error("Mount error: {0}")]
    Mount(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;

impl From<BadgeError> for JsValue {
    fn from(err: BadgeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
