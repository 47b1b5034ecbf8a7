use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use rethink_core::model::Catalog;
use rethink_core::quiz::{QuizFlow, ViewerConfig};
use storage::seed::demo_catalog;

use super::material_viewer::QuizTestHandles;
use crate::context::{AppContext, AppProvider, UiApp, use_app_context};
use crate::views::{MaterialViewer, StudyView};
use crate::vm::QuizIntent;

struct TestApp {
    catalog: Arc<Catalog>,
    viewer: ViewerConfig,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn viewer_config(&self) -> ViewerConfig {
        self.viewer.clone()
    }
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    ctx: Rc<RefCell<Option<AppContext>>>,
    quiz: QuizTestHandles,
}

impl PartialEq for HarnessHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ctx, &other.ctx)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewerHarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| app);
    use_context_provider(|| props.handles.quiz.clone());
    rsx! {
        AppProvider {
            CaptureContext { handles: props.handles.clone() }
            StudyView {}
            MaterialViewer {}
        }
    }
}

#[component]
fn CaptureContext(handles: HarnessHandles) -> Element {
    let ctx = use_app_context();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.ctx.borrow_mut() = Some(ctx);
    }
    rsx! {}
}

pub struct ViewerHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewerHarness {
    pub fn ctx(&self) -> AppContext {
        self.handles.ctx.borrow().clone().expect("context registered")
    }

    /// Run `f` against the shared context inside the dom's runtime, then settle.
    pub fn update(&mut self, f: impl FnOnce(&AppContext)) {
        let ctx = self.ctx();
        self.dom.in_runtime(|| f(&ctx));
        drive_dom(&mut self.dom);
    }

    /// Fire a viewer intent the way a button click would, then settle.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.quiz.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn flow(&self) -> QuizFlow {
        let flow = self.handles.quiz.flow();
        self.dom.in_runtime(|| flow.read().clone())
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let `duration` of (paused) tokio time pass while the dom keeps working.
    pub async fn advance(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_viewer_harness(viewer: ViewerConfig) -> ViewerHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(demo_catalog()),
        viewer,
    });
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        ViewerHarnessRoot,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    ViewerHarness { dom, handles }
}
