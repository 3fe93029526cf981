//! RegressLab Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regresslab_player::ports::outbound::InterpreterPort;
use regresslab_player::runner::{self, config::RunnerConfig, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is fine; real environment variables still apply
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "regresslab_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting RegressLab Player");

    #[allow(unused_mut)]
    let mut config = RunnerConfig::from_env();

    // Shell kind (desktop vs mobile layout) follows the viewport in the browser
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        config.shell = runner::config::ShellKind::for_viewport_width(width);
    }

    // Platform
    let platform = regresslab_player::infrastructure::platform::create_platform(config.seed);

    // Code execution bridge
    #[cfg(not(target_arch = "wasm32"))]
    let interpreter: Arc<dyn InterpreterPort> = Arc::new(
        regresslab_player::infrastructure::interpreter::PythonProcessInterpreter::new(
            config.python.clone(),
        ),
    );

    #[cfg(target_arch = "wasm32")]
    let interpreter: Arc<dyn InterpreterPort> = Arc::new(
        regresslab_player::infrastructure::interpreter::PyodideInterpreter::new(
            config.pyodide_url.clone(),
        ),
    );

    runner::run(RunnerDeps {
        platform,
        interpreter,
        config,
    });
}
