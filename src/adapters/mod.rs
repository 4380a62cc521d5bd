// Adapters layer: concrete implementations for external systems (html pages, http, files, reports).

pub mod export;
pub mod files;
pub mod html;
pub mod http;
pub mod storage;
