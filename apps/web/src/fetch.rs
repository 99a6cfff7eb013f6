use std::cell::RefCell;
use std::rc::Rc;

use pasture_core::resources::{normalize_records, LABELED_FILE, LABELED_URL, ORIGINS_FILE, ORIGINS_URL};
use pasture_core::{LexicalRecord, LoadError, OriginSummary};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::state::WebState;

pub async fn fetch_records(store: Rc<RefCell<WebState>>) {
    let result = fetch_json(LABELED_FILE, LABELED_URL)
        .await
        .and_then(|json| {
            serde_wasm_bindgen::from_value::<Vec<LexicalRecord>>(json)
                .map_err(|error| LoadError::parse(LABELED_FILE, error))
        })
        .map(normalize_records);
    report(&result);
    store.borrow_mut().resolve_records(result);
}

pub async fn fetch_origins(store: Rc<RefCell<WebState>>) {
    let result = fetch_json(ORIGINS_FILE, ORIGINS_URL).await.and_then(|json| {
        serde_wasm_bindgen::from_value::<OriginSummary>(json)
            .map_err(|error| LoadError::parse(ORIGINS_FILE, error))
    });
    report(&result);
    store.borrow_mut().resolve_origins(result);
}

fn report<T>(result: &Result<T, LoadError>) {
    if let Err(error) = result {
        web_sys::console::error_1(&error.to_string().into());
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

async fn fetch_json(resource: &str, url: &str) -> Result<JsValue, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::transport(resource, "no window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| LoadError::transport(resource, js_message(&error)))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| LoadError::transport(resource, js_message(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| LoadError::transport(resource, "unexpected fetch result"))?;

    if !response.ok() {
        return Err(LoadError::status(resource, response.status()));
    }

    let body = response
        .json()
        .map_err(|error| LoadError::parse(resource, js_message(&error)))?;

    wasm_bindgen_futures::JsFuture::from(body)
        .await
        .map_err(|error| LoadError::parse(resource, js_message(&error)))
}
