use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use quicknote_shared::{Export, ExportBody};

/// Hands an export to the browser as a file download.
pub fn download(document: &Document, export: &Export) -> Result<(), JsValue> {
    match &export.body {
        ExportBody::DataUrl(data_url) => click_download_link(document, data_url, export.file_name),
        ExportBody::Text(text) => {
            let parts = js_sys::Array::of1(&JsValue::from_str(text));
            let options = BlobPropertyBag::new();
            options.set_type(export.mime);
            let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
            let url = Url::create_object_url_with_blob(&blob)?;
            let clicked = click_download_link(document, &url, export.file_name);
            Url::revoke_object_url(&url)?;
            clicked
        }
    }
}

fn click_download_link(document: &Document, href: &str, file_name: &str) -> Result<(), JsValue> {
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Missing body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
