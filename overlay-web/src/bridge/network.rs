//! IP lookup over fetch

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::dom::window;
use crate::constants::IP_LOOKUP_URL;
use crate::error::{OverlayError, Result};
use crate::telemetry::parse_ip_response;

/// GET the lookup service and pull the address out of its JSON body
pub async fn fetch_ip_address() -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(IP_LOOKUP_URL, &opts)?;
    let response: Response = JsFuture::from(window()?.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(OverlayError::HttpStatus(response.status()));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| OverlayError::Js("response body is not text".into()))?;

    parse_ip_response(&body)
}
