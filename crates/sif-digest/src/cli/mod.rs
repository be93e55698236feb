pub use self::app::App;
pub use self::cmd::run;

mod app;
mod cmd;
