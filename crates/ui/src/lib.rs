pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{
    AppContext, AppProvider, ContextError, UiApp, build_app_context, try_app_context,
    use_app_context,
};
