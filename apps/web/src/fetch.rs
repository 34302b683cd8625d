use std::cell::RefCell;
use std::rc::Rc;

use impact_dashboard::api::{decode_value, warn_if_unordered, Endpoint};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::WebModel;

async fn fetch_endpoint<T: DeserializeOwned>(
    base_url: &str,
    endpoint: &Endpoint,
) -> Result<Vec<T>, String> {
    let url = endpoint.url(base_url);
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|_| format!("could not build request for {url}"))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("request to {url} failed"))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| "Failed to read response".to_string())?;

    if !response.ok() {
        return Err(format!("{url} answered with HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|_| format!("{url} body is not JSON"))?;
    let json = wasm_bindgen_futures::JsFuture::from(body)
        .await
        .map_err(|_| format!("{url} body is not JSON"))?;

    let value = serde_wasm_bindgen::from_value::<serde_json::Value>(json)
        .map_err(|error| format!("Failed to parse {}: {error}", endpoint.name()))?;

    decode_value(endpoint.name(), value).map_err(|error| error.to_string())
}

fn report(model: &Rc<RefCell<WebModel>>, error: &str) {
    web_sys::console::error_1(&error.into());
    model.borrow_mut().status = format!("Error: {error}");
}

/// Load partners, attestations, the impact chart and any product trace.
pub async fn load_all(model: Rc<RefCell<WebModel>>) {
    let (base_url, product_id, generation) = {
        let mut model = model.borrow_mut();
        model.status = "Loading impact data...".to_string();
        let generation = model.begin_refresh();
        (model.base_url.clone(), model.product_id.clone(), generation)
    };
    let superseded = || !model.borrow().is_current_refresh(generation);

    let mut partners = Vec::new();
    for endpoint in [Endpoint::Locations, Endpoint::Vessels] {
        match fetch_endpoint(&base_url, &endpoint).await {
            Ok(records) => partners.extend(records),
            Err(_) if superseded() => return,
            Err(error) => return report(&model, &error),
        }
    }
    if superseded() {
        return;
    }
    model.borrow_mut().dashboard.set_partners(partners);

    let attestations = fetch_endpoint(&base_url, &Endpoint::Attestations { partner_id: None }).await;
    if superseded() {
        return;
    }
    match attestations {
        Ok(attestations) => model.borrow_mut().dashboard.attestations = attestations,
        Err(error) => web_sys::console::error_1(&error.into()),
    }

    if let Some(product_id) = product_id {
        let traces = fetch_endpoint(&base_url, &Endpoint::Traces { product_id }).await;
        if superseded() {
            return;
        }
        match traces {
            Ok(traces) => model.borrow_mut().dashboard.traces = traces,
            Err(error) => web_sys::console::error_1(&error.into()),
        }
    }

    load_chart(model).await;
}

/// Reload the impact chart for the current time range. A response that a
/// newer request or a range change has overtaken is discarded.
pub async fn load_chart(model: Rc<RefCell<WebModel>>) {
    let (base_url, request) = {
        let mut model = model.borrow_mut();
        (model.base_url.clone(), model.begin_chart_request())
    };

    let endpoint = Endpoint::Impact {
        range: request.range,
        partner_id: None,
    };
    let result = fetch_endpoint(&base_url, &endpoint).await;
    if !model.borrow().accepts_chart(request) {
        web_sys::console::log_1(&format!("dropping stale {} chart", request.range.label()).into());
        return;
    }
    match result {
        Ok(chart) => {
            warn_if_unordered(&chart);
            let mut model = model.borrow_mut();
            let partners = model.dashboard.partners().len();
            model.status = format!("Loaded {partners} partners, {} chart points", chart.len());
            model.dashboard.chart = chart;
        }
        Err(error) => report(&model, &error),
    }
}
