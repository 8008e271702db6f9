// Adapters layer: concrete implementations of the domain ports (http, page, storage, canvas).

pub mod document;
pub mod github;
pub mod storage;
pub mod svg_canvas;
