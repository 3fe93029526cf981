use std::sync::Arc;

use crate::application::services::{CodeRunner, ProgressService};
use crate::ports::outbound::{InterpreterPort, PlatformPort};
use crate::state::Platform;

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    /// CDN directory holding `pyodide.js`.
    pub const DEFAULT_PYODIDE_URL: &str = "https://cdn.jsdelivr.net/pyodide/v0.26.2/full/";
    pub const DEFAULT_PYTHON: &str = "python3";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    /// Viewports narrower than this get the mobile layout.
    pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

    impl ShellKind {
        pub fn for_viewport_width(width: f64) -> Self {
            if width < MOBILE_BREAKPOINT_PX {
                Self::Mobile
            } else {
                Self::Desktop
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        /// Python executable used by the desktop code lab
        pub python: String,
        /// Pyodide index URL used by the browser code lab
        pub pyodide_url: String,
        /// Fixed seed for shuffles; unset means a fresh shuffle every time
        pub seed: Option<u64>,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                python: DEFAULT_PYTHON.to_string(),
                pyodide_url: DEFAULT_PYODIDE_URL.to_string(),
                seed: None,
            }
        }
    }

    impl RunnerConfig {
        /// Read `REGRESSLAB_*` variables from the process environment.
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build from any variable source. Unparseable values keep their default.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let defaults = Self::default();

            let shell = match lookup("REGRESSLAB_SHELL") {
                Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                    tracing::warn!("{e}; using the desktop shell");
                    defaults.shell
                }),
                None => defaults.shell,
            };

            let seed = lookup("REGRESSLAB_SEED").and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %raw, "REGRESSLAB_SEED is not a number; ignoring");
                    None
                }
            });

            Self {
                shell,
                python: lookup("REGRESSLAB_PYTHON")
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or(defaults.python),
                pyodide_url: lookup("REGRESSLAB_PYODIDE_URL")
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or(defaults.pyodide_url),
                seed,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn config(vars: &[(&str, &str)]) -> RunnerConfig {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            RunnerConfig::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn narrow_viewports_get_the_mobile_shell() {
            assert_eq!(ShellKind::for_viewport_width(375.0), ShellKind::Mobile);
            assert_eq!(ShellKind::for_viewport_width(767.9), ShellKind::Mobile);
            assert_eq!(ShellKind::for_viewport_width(768.0), ShellKind::Desktop);
            assert_eq!(ShellKind::for_viewport_width(1440.0), ShellKind::Desktop);
        }

        #[test]
        fn empty_environment_uses_defaults() {
            assert_eq!(config(&[]), RunnerConfig::default());
        }

        #[test]
        fn shell_kind_parses_case_insensitively() {
            assert_eq!(" Mobile ".parse::<ShellKind>(), Ok(ShellKind::Mobile));
            assert!("tablet".parse::<ShellKind>().is_err());
        }

        #[test]
        fn variables_override_defaults() {
            let cfg = config(&[
                ("REGRESSLAB_SHELL", "mobile"),
                ("REGRESSLAB_PYTHON", "/usr/bin/python3.12"),
                ("REGRESSLAB_PYODIDE_URL", "http://localhost:8000/pyodide/"),
                ("REGRESSLAB_SEED", "42"),
            ]);
            assert_eq!(cfg.shell, ShellKind::Mobile);
            assert_eq!(cfg.python, "/usr/bin/python3.12");
            assert_eq!(cfg.pyodide_url, "http://localhost:8000/pyodide/");
            assert_eq!(cfg.seed, Some(42));
        }

        #[test]
        fn bad_values_fall_back() {
            let cfg = config(&[("REGRESSLAB_SHELL", "tablet"), ("REGRESSLAB_SEED", "abc")]);
            assert_eq!(cfg.shell, ShellKind::Desktop);
            assert_eq!(cfg.seed, None);
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub interpreter: Arc<dyn InterpreterPort>,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        interpreter,
        config,
    } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    let services = crate::ui::presentation::Services {
        progress: Arc::new(ProgressService::new(Arc::clone(&platform_port))),
        code_runner: Arc::new(CodeRunner::new(interpreter)),
    };

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("RegressLab"));
        builder = builder.with_cfg(cfg);
    }

    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    builder
        .with_context(platform_port)
        .with_context(ui_shell)
        .with_context(services)
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
