use atlas::theme::Theme;
use wasm_bindgen::JsValue;

pub(super) fn apply_theme_to_document(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let res = match (theme.body_class(), Theme::Dark.body_class()) {
        (Some(class), _) => classes.add_1(class),
        (None, Some(dark)) => classes.remove_1(dark),
        (None, None) => Ok(()),
    };
    if res.is_err() {
        log_warn("could not update body class");
    }
}

pub(super) fn log_info(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(super) fn log_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub(super) fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
