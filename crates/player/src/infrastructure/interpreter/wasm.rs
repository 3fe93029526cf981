//! Pyodide interpreter for browser builds
//!
//! The runtime is injected on first use: a `<script>` tag pulls in
//! `pyodide.js`, `loadPyodide` boots the interpreter, and a small Python
//! bootstrap installs a stdout-capturing runner. The whole load runs once
//! as a shared JavaScript promise so concurrent callers await the same work.
//!
//! JavaScript handles are not `Send`; they sit behind `SendWrapper` so the
//! adapter can live in Dioxus context. The browser is single-threaded, so
//! the wrappers are only ever touched from the thread that created them.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use regresslab_domain::LoadingStage;
use send_wrapper::SendWrapper;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::ports::outbound::{InterpreterError, InterpreterPort};

const BOOTSTRAP: &str = r#"
import io, json, sys, traceback

_regresslab_ns = {"__name__": "__main__"}

def _regresslab_run(src):
    buf = io.StringIO()
    previous = sys.stdout
    sys.stdout = buf
    ok = True
    try:
        exec(src, _regresslab_ns)
    except BaseException:
        traceback.print_exc(file=buf)
        ok = False
    finally:
        sys.stdout = previous
    return json.dumps({"ok": ok, "output": buf.getvalue()})

def _regresslab_reset():
    _regresslab_ns.clear()
    _regresslab_ns["__name__"] = "__main__"
"#;

#[derive(Deserialize)]
struct RunReply {
    ok: bool,
    output: String,
}

pub struct PyodideInterpreter {
    index_url: String,
    stage: Arc<Mutex<LoadingStage>>,
    pyodide: Arc<Mutex<Option<SendWrapper<JsValue>>>>,
    loading: Mutex<Option<SendWrapper<Promise>>>,
}

impl PyodideInterpreter {
    /// `index_url` is the CDN directory holding `pyodide.js`, with a trailing slash.
    pub fn new(index_url: impl Into<String>) -> Self {
        let mut index_url = index_url.into();
        if !index_url.ends_with('/') {
            index_url.push('/');
        }
        Self {
            index_url,
            stage: Arc::new(Mutex::new(LoadingStage::NotStarted)),
            pyodide: Arc::new(Mutex::new(None)),
            loading: Mutex::new(None),
        }
    }

    fn handle(&self) -> Option<JsValue> {
        self.pyodide
            .lock()
            .ok()
            .and_then(|slot| slot.as_ref().map(|p| (**p).clone()))
    }

    /// The shared load promise, started on first call.
    fn load_promise(&self) -> Result<Promise, InterpreterError> {
        let mut loading = self
            .loading
            .lock()
            .map_err(|e| InterpreterError::Load(e.to_string()))?;
        if let Some(promise) = loading.as_ref() {
            return Ok((**promise).clone());
        }

        let url = self.index_url.clone();
        let stage = Arc::clone(&self.stage);
        let slot = Arc::clone(&self.pyodide);
        let promise = future_to_promise(async move {
            match load_runtime(&url, &stage).await {
                Ok(pyodide) => {
                    if let Ok(mut slot) = slot.lock() {
                        *slot = Some(SendWrapper::new(pyodide));
                    }
                    set_stage(&stage, LoadingStage::Ready);
                    tracing::info!("Pyodide ready");
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    set_stage(&stage, LoadingStage::Failed);
                    tracing::error!("Pyodide failed to load: {}", js_error_message(&e));
                    Err(e)
                }
            }
        });
        *loading = Some(SendWrapper::new(promise.clone()));
        Ok(promise)
    }
}

fn set_stage(stage: &Mutex<LoadingStage>, value: LoadingStage) {
    if let Ok(mut current) = stage.lock() {
        *current = value;
    }
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let array = Array::new();
    for arg in args {
        array.push(arg);
    }
    method.apply(target, &array)
}

async fn await_promise(value: JsValue) -> Result<JsValue, JsValue> {
    let promise: Promise = value.dyn_into()?;
    JsFuture::from(promise).await
}

async fn load_runtime(index_url: &str, stage: &Mutex<LoadingStage>) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let loader_key = JsValue::from_str("loadPyodide");

    if Reflect::get(&window, &loader_key)?.is_undefined() {
        set_stage(stage, LoadingStage::DownloadingRuntime);
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("no document head"))?;
        let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_src(&format!("{index_url}pyodide.js"));
        let loaded = Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });
        head.append_child(&script)?;
        JsFuture::from(loaded)
            .await
            .map_err(|_| JsValue::from_str("could not download pyodide.js"))?;
    }

    set_stage(stage, LoadingStage::InitializingRuntime);
    let loader: Function = Reflect::get(&window, &loader_key)?.dyn_into()?;
    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("indexURL"),
        &JsValue::from_str(index_url),
    )?;
    let pyodide = await_promise(loader.call1(&JsValue::NULL, &options)?).await?;

    set_stage(stage, LoadingStage::LoadingPackages);
    await_promise(call_method(
        &pyodide,
        "runPythonAsync",
        &[JsValue::from_str(BOOTSTRAP)],
    )?)
    .await?;

    Ok(pyodide)
}

#[async_trait(?Send)]
impl InterpreterPort for PyodideInterpreter {
    fn is_ready(&self) -> bool {
        self.loading_stage() == LoadingStage::Ready
    }

    fn loading_stage(&self) -> LoadingStage {
        self.stage
            .lock()
            .map(|s| *s)
            .unwrap_or(LoadingStage::Failed)
    }

    async fn ensure_ready(&self) -> Result<(), InterpreterError> {
        if self.is_ready() {
            return Ok(());
        }
        let promise = self.load_promise()?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| InterpreterError::Load(js_error_message(&e)))
    }

    async fn run(&self, code: &str) -> Result<String, InterpreterError> {
        let pyodide = self
            .handle()
            .ok_or_else(|| InterpreterError::Load("Python runtime is not loaded".to_string()))?;

        let execution = |e: JsValue| InterpreterError::Execution(js_error_message(&e));
        let globals = Reflect::get(&pyodide, &JsValue::from_str("globals")).map_err(execution)?;
        call_method(
            &globals,
            "set",
            &[JsValue::from_str("_regresslab_src"), JsValue::from_str(code)],
        )
        .map_err(execution)?;

        let reply = await_promise(
            call_method(
                &pyodide,
                "runPythonAsync",
                &[JsValue::from_str("_regresslab_run(_regresslab_src)")],
            )
            .map_err(execution)?,
        )
        .await
        .map_err(execution)?;

        let reply = reply
            .as_string()
            .ok_or_else(|| InterpreterError::Execution("interpreter returned no text".into()))?;
        let reply: RunReply = serde_json::from_str(&reply)
            .map_err(|e| InterpreterError::Execution(format!("unreadable interpreter reply: {e}")))?;

        if reply.ok {
            Ok(reply.output)
        } else {
            Err(InterpreterError::Execution(reply.output))
        }
    }

    fn clear(&self) {
        let Some(pyodide) = self.handle() else {
            return;
        };
        if let Err(e) = call_method(
            &pyodide,
            "runPython",
            &[JsValue::from_str("_regresslab_reset()")],
        ) {
            tracing::warn!("Failed to reset Python namespace: {}", js_error_message(&e));
        }
    }
}
