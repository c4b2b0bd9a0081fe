use quiz_master::QuizApp;
use quiz_master::config::Settings;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG manda; por defecto info para la app
    if std::env::var_os("RUST_LOG").is_none() {
        pretty_env_logger::formatted_builder()
            .filter_module("quiz_master", log::LevelFilter::Info)
            .init();
    } else {
        pretty_env_logger::init();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quiz Master")
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    log::info!("arrancando Quiz Master {}", env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        "Quiz Master",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(Settings::default())))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay document en esta ventana");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas 'the_canvas_id'");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new(Settings::default())))),
            )
            .await;

        if let Err(e) = result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
