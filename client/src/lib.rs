mod app;
mod canvas;
mod dom;
mod download;
mod state;
mod storage;
mod util;

pub use app::run;
